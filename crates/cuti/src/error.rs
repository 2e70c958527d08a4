//! Error types for fetching and writing holidays.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// A single state's fetch failed. The driver logs these and moves on.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("{state:?} is not a fetchable state")]
    UnknownState { state: String },

    #[error("timed out after {}s fetching {state}", timeout.as_secs_f32())]
    FetchTimeout { state: String, timeout: Duration },

    #[error("failed to load {state}: {reason}")]
    Navigation { state: String, reason: String },
}

/// Producing the output file failed. Always fatal.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("unsupported format: {0} (expected json or csv)")]
    UnsupportedFormat(String),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),
}
