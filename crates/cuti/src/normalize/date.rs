//! Turn day/month cell text like `"1 Jan"` into an ISO date for a known year.

use chrono::NaiveDate;
use tracing::warn;

/// Layouts tried in order. The year is appended to the input before parsing.
const LAYOUTS: [&str; 2] = ["%d %b %Y", "%d %B %Y"];

/// Normalize a scraped date cell to `YYYY-MM-DD` using the caller's year.
///
/// Never fails: text that matches no layout becomes `<year>-<text>` with
/// spaces replaced by hyphens, and a warning is logged.
pub fn normalize_date(text: &str, year: i32) -> String {
    match parse_day_month(text, year) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => {
            warn!("failed to parse date: {text:?}");
            fallback_marker(text, year)
        }
    }
}

fn parse_day_month(text: &str, year: i32) -> Option<NaiveDate> {
    let with_year = format!("{} {year}", text.trim());
    LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(&with_year, layout).ok())
}

fn fallback_marker(text: &str, year: i32) -> String {
    format!("{year}-{}", text.replace(' ', "-"))
}
