//! Command-line interface for the `cuti` binary.

pub mod fetch_cmd;
pub mod output;

use crate::config::{current_year, ScrapeConfig};
use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Scrape Malaysian public holidays for every state and merge them.
#[derive(Debug, Parser)]
#[command(name = "cuti", version, about)]
pub struct Cli {
    /// Year to fetch holidays for
    #[arg(long, default_value_t = current_year())]
    pub year: i32,

    /// Output format: json or csv
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,

    /// Output file name without extension
    #[arg(long, default_value = "holidays")]
    pub out: PathBuf,

    /// Run Chromium without a window
    #[arg(long)]
    pub headless: bool,

    /// Seconds allowed per state page
    #[arg(long, default_value_t = 20)]
    pub timeout: u64,

    /// Skip the summary printed after the run
    #[arg(long, short)]
    pub quiet: bool,
}

impl Cli {
    /// Scrape settings from flags, with `CUTI_*` environment overrides.
    pub fn scrape_config(&self) -> ScrapeConfig {
        ScrapeConfig {
            year: self.year,
            headless: self.headless,
            state_timeout: Duration::from_secs(self.timeout),
            ..ScrapeConfig::default()
        }
        .with_env_overrides()
    }
}
