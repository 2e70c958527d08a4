//! Canonicalization of scraped date and state text.

pub mod date;
pub mod state;

pub use date::normalize_date;
pub use state::canonical_state;
