//! Run configuration with `CUTI_*` environment overrides.

use chrono::Datelike;
use std::path::PathBuf;
use std::time::Duration;

/// Site serving one holiday page per state and year.
pub const DEFAULT_BASE_URL: &str = "https://publicholidays.com.my";

/// Per-state bound on navigate + wait + extract.
pub const DEFAULT_STATE_TIMEOUT: Duration = Duration::from_secs(20);

/// Settings for one scrape run.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub year: i32,
    pub headless: bool,
    pub state_timeout: Duration,
    pub base_url: String,
    /// Explicit Chromium binary; `None` lets discovery decide.
    pub chromium_path: Option<PathBuf>,
    pub no_sandbox: bool,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            year: current_year(),
            headless: false,
            state_timeout: DEFAULT_STATE_TIMEOUT,
            base_url: DEFAULT_BASE_URL.to_string(),
            chromium_path: None,
            no_sandbox: false,
        }
    }
}

impl ScrapeConfig {
    /// Apply `CUTI_BASE_URL`, `CUTI_CHROMIUM_PATH` and
    /// `CUTI_CHROMIUM_NO_SANDBOX` on top of the current values.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("CUTI_BASE_URL").filter(|u| !u.trim().is_empty()) {
            self.base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(path) = lookup("CUTI_CHROMIUM_PATH").filter(|p| !p.is_empty()) {
            self.chromium_path = Some(PathBuf::from(path));
        }
        if lookup("CUTI_CHROMIUM_NO_SANDBOX").is_some() {
            self.no_sandbox = true;
        }
        self
    }
}

/// Current calendar year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ScrapeConfig::default();
        assert_eq!(config.base_url, "https://publicholidays.com.my");
        assert_eq!(config.state_timeout, Duration::from_secs(20));
        assert!(!config.headless);
        assert!(config.chromium_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("CUTI_BASE_URL", "http://localhost:8080/"),
            ("CUTI_CHROMIUM_PATH", "/opt/chrome/chrome"),
            ("CUTI_CHROMIUM_NO_SANDBOX", "1"),
        ]);
        let config = ScrapeConfig::default().with_overrides(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.chromium_path, Some(PathBuf::from("/opt/chrome/chrome")));
        assert!(config.no_sandbox);
    }

    #[test]
    fn test_empty_overrides_ignored() {
        let config = ScrapeConfig::default().with_overrides(|k| match k {
            "CUTI_BASE_URL" | "CUTI_CHROMIUM_PATH" => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.chromium_path.is_none());
        assert!(!config.no_sandbox);
    }
}
