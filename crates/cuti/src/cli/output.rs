//! Colored run summary printed to stderr.

use crate::pipeline::{FetchStatus, ScrapeReport};
use std::io::IsTerminal;
use std::path::Path;

/// Color only when stderr is a terminal and `NO_COLOR` is unset.
pub fn color_enabled() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Colored string builder.
pub struct Styled {
    use_color: bool,
}

impl Default for Styled {
    fn default() -> Self {
        Self::new()
    }
}

impl Styled {
    pub fn new() -> Self {
        Self::with_color(color_enabled())
    }

    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn ok_sym(&self) -> &str {
        if self.use_color {
            "\x1b[32m\u{2713}\x1b[0m"
        } else {
            "OK"
        }
    }

    pub fn fail_sym(&self) -> &str {
        if self.use_color {
            "\x1b[31m\u{2717}\x1b[0m"
        } else {
            "!!"
        }
    }

    pub fn warn_sym(&self) -> &str {
        if self.use_color {
            "\x1b[33m\u{26a0}\x1b[0m"
        } else {
            "??"
        }
    }

    pub fn skip_sym(&self) -> &str {
        if self.use_color {
            "\x1b[2m-\x1b[0m"
        } else {
            "--"
        }
    }

    fn paint(&self, code: &str, s: &str) -> String {
        if self.use_color {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }

    pub fn green(&self, s: &str) -> String {
        self.paint(GREEN, s)
    }

    pub fn red(&self, s: &str) -> String {
        self.paint(RED, s)
    }

    pub fn yellow(&self, s: &str) -> String {
        self.paint(YELLOW, s)
    }

    pub fn dim(&self, s: &str) -> String {
        self.paint(DIM, s)
    }

    pub fn bold(&self, s: &str) -> String {
        self.paint(BOLD, s)
    }
}

/// One summary line per state, then a status line.
pub fn render_summary(s: &Styled, report: &ScrapeReport, written: &Path) -> Vec<String> {
    let mut lines = vec![format!(
        "  {} {}",
        s.bold("cuti"),
        s.dim(&format!("v{} \u{b7} {}", env!("CARGO_PKG_VERSION"), report.year))
    )];

    for outcome in &report.outcomes {
        let (sym, detail) = match &outcome.status {
            FetchStatus::Fetched(n) => (s.ok_sym(), format!("{n} holidays")),
            FetchStatus::Empty => (s.warn_sym(), s.yellow("no rows")),
            FetchStatus::Failed(reason) => (s.fail_sym(), s.red(reason)),
            FetchStatus::Skipped => (s.skip_sym(), s.dim("not fetched")),
        };
        lines.push(format!("    {sym} {:<16} {detail}", outcome.state));
    }

    let failed = report.failed();
    let status = if failed == 0 {
        s.green("ok")
    } else {
        s.yellow(&format!("{failed} failed"))
    };
    lines.push(String::new());
    lines.push(format!(
        "  {}: {status} ({} holidays written to {})",
        s.bold("Status"),
        report.holidays.len(),
        written.display()
    ));
    lines
}

/// Print the run summary to stderr.
pub fn print_summary(report: &ScrapeReport, written: &Path) {
    let s = Styled::new();
    for line in render_summary(&s, report, written) {
        eprintln!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::Holiday;
    use crate::pipeline::StateOutcome;

    fn report() -> ScrapeReport {
        ScrapeReport {
            year: 2025,
            holidays: vec![Holiday::for_state("2025-01-01", "Wednesday", "New Year's Day", "johor")],
            outcomes: vec![
                StateOutcome {
                    state: "national".into(),
                    status: FetchStatus::Skipped,
                },
                StateOutcome {
                    state: "johor".into(),
                    status: FetchStatus::Fetched(1),
                },
                StateOutcome {
                    state: "kedah".into(),
                    status: FetchStatus::Failed("timed out after 20s fetching kedah".into()),
                },
                StateOutcome {
                    state: "sabah".into(),
                    status: FetchStatus::Empty,
                },
            ],
        }
    }

    #[test]
    fn test_plain_summary() {
        let lines = render_summary(&Styled::with_color(false), &report(), Path::new("out.json"));
        assert!(lines[0].contains("2025"));
        assert_eq!(lines[1], format!("    -- {:<16} not fetched", "national"));
        assert_eq!(lines[2], format!("    OK {:<16} 1 holidays", "johor"));
        assert!(lines[3].starts_with("    !! kedah"));
        assert!(lines[4].starts_with("    ?? sabah"));
        assert_eq!(
            lines.last().unwrap(),
            "  Status: 1 failed (1 holidays written to out.json)"
        );
    }

    #[test]
    fn test_colored_symbols() {
        let s = Styled::with_color(true);
        assert!(s.ok_sym().contains('\u{2713}'));
        assert_eq!(s.green("x"), "\x1b[32mx\x1b[0m");
        assert_eq!(Styled::with_color(false).red("x"), "x");
    }
}
