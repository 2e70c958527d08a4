//! Malaysian public-holiday scraper.
//!
//! Loads each state's holiday page in Chromium, pulls the holiday table out
//! of the rendered page, normalizes dates and state names, and merges the
//! per-state rows into one record per (date, name) with every observing state.

pub mod cli;
pub mod config;
pub mod consolidate;
pub mod error;
pub mod extraction;
pub mod holiday;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod renderer;

pub use consolidate::consolidate;
pub use error::{OutputError, ScrapeError};
pub use holiday::Holiday;
pub use pipeline::{Pipeline, ScrapeReport, STATES};
