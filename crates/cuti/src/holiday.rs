//! The holiday record shared by extraction, consolidation, and output.

use serde::{Deserialize, Serialize};

/// One holiday observance, observed by one or more states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Canonical `YYYY-MM-DD` date, or the fallback marker when unparseable.
    pub date: String,
    /// Weekday label as scraped.
    pub day: String,
    /// Holiday name as scraped.
    pub name: String,
    /// Canonical state identifiers observing this holiday.
    pub states: Vec<String>,
}

impl Holiday {
    /// Create a record observed by a single state.
    pub fn for_state(
        date: impl Into<String>,
        day: impl Into<String>,
        name: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            day: day.into(),
            name: name.into(),
            states: vec![state.into()],
        }
    }
}
