//! The in-page table script and decoding of its result.

use crate::holiday::Holiday;
use crate::normalize::{canonical_state, normalize_date};
use tracing::warn;

/// Class carried by the holiday table on every state page.
pub const TABLE_CLASS: &str = "publicholidays";

/// Selector waited on before the table script runs.
pub const TABLE_SELECTOR: &str = "table.publicholidays";

/// Function expression taking `(year, tableClass)`: finds the `h2` mentioning
/// the year and returns the trimmed cell text of the table right after it,
/// or `[]` when the heading or table is missing.
const TABLE_SCRIPT: &str = include_str!("scripts/holiday_table.js");

/// Expression that evaluates the table script for `year`.
pub fn table_script(year: i32) -> String {
    let class = serde_json::Value::String(TABLE_CLASS.to_string());
    format!("({})({year}, {class})", TABLE_SCRIPT.trim())
}

/// Decode the script's return value into rows of cell text.
///
/// Anything that is not an array of arrays is treated as no rows; non-string
/// cells become empty strings.
pub fn decode_rows(value: &serde_json::Value) -> Vec<Vec<String>> {
    let Some(rows) = value.as_array() else {
        if !value.is_null() {
            warn!("table script returned a non-array: {value}");
        }
        return Vec::new();
    };

    rows.iter()
        .filter_map(|row| row.as_array())
        .map(|cells| {
            cells
                .iter()
                .map(|c| c.as_str().unwrap_or_default().to_string())
                .collect()
        })
        .collect()
}

/// Turn `[date, day, name, ...]` rows into single-state records.
///
/// Rows with fewer than three cells are dropped.
pub fn rows_to_holidays(rows: &[Vec<String>], state: &str, year: i32) -> Vec<Holiday> {
    let state = canonical_state(state);
    rows.iter()
        .filter(|row| row.len() >= 3)
        .map(|row| {
            Holiday::for_state(
                normalize_date(&row[0], year),
                row[1].as_str(),
                row[2].as_str(),
                state.as_str(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_table_script_embeds_year_and_class() {
        let script = table_script(2025);
        assert!(script.starts_with("((function (year, tableClass)"));
        assert!(script.ends_with(r#")(2025, "publicholidays")"#));
        assert!(script.contains("nextElementSibling"));
    }

    #[test]
    fn test_decode_rows() {
        let value = json!([
            ["1 Jan", "Wednesday", "New Year's Day"],
            ["29 Jan", "Wednesday", "Chinese New Year", "Johor"],
            [],
        ]);
        let decoded = decode_rows(&value);
        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded[1][3], "Johor");
        assert!(decoded[2].is_empty());
    }

    #[test]
    fn test_decode_rows_structural_mismatch_is_empty() {
        assert!(decode_rows(&json!(null)).is_empty());
        assert!(decode_rows(&json!({"rows": []})).is_empty());
        assert!(decode_rows(&json!("oops")).is_empty());
        assert_eq!(decode_rows(&json!([["a", 1, null]]))[0], vec!["a", "", ""]);
    }

    #[test]
    fn test_rows_to_holidays() {
        let raw = rows(&[
            &["1 Jan", "Wednesday", "New Year's Day"],
            &["1 May", "Thursday", "Labour Day", "National"],
        ]);
        let holidays = rows_to_holidays(&raw, "kuala-lumpur", 2025);
        assert_eq!(
            holidays,
            vec![
                Holiday::for_state("2025-01-01", "Wednesday", "New Year's Day", "kuala-lumpur"),
                Holiday::for_state("2025-05-01", "Thursday", "Labour Day", "kuala-lumpur"),
            ]
        );
    }

    #[test]
    fn test_short_rows_dropped() {
        let raw = rows(&[
            &["1 Jan", "Wednesday"],
            &["Note"],
            &[],
            &["2 Feb", "Sunday", "Thaipusam"],
        ]);
        let holidays = rows_to_holidays(&raw, "penang", 2025);
        assert_eq!(holidays.len(), 1);
        assert_eq!(holidays[0].name, "Thaipusam");
    }

    #[test]
    fn test_state_is_canonicalized() {
        let raw = rows(&[&["1 Feb", "Saturday", "Federal Territory Day"]]);
        let holidays = rows_to_holidays(&raw, "Malacca", 2025);
        assert_eq!(holidays[0].states, vec!["melaka"]);
    }

    #[test]
    fn test_bad_date_keeps_row() {
        let raw = rows(&[&["TBC", "-", "Sultan's Birthday"]]);
        let holidays = rows_to_holidays(&raw, "johor", 2025);
        assert_eq!(holidays[0].date, "2025-TBC");
    }
}
