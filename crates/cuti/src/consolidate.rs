//! Merge per-state holiday records into multi-state records.

use crate::holiday::Holiday;
use std::collections::{BTreeMap, HashSet};

/// Merge records that share a date and name, unioning their states.
///
/// `day` is not part of the key; the first record seen for a key keeps its
/// weekday label. Output is ordered by date, then name.
pub fn consolidate(holidays: Vec<Holiday>) -> Vec<Holiday> {
    let mut merged: BTreeMap<(String, String), Holiday> = BTreeMap::new();

    for mut holiday in holidays {
        let key = (holiday.date.clone(), holiday.name.clone());
        match merged.get_mut(&key) {
            Some(existing) => {
                existing.states.append(&mut holiday.states);
                dedup_states(&mut existing.states);
            }
            None => {
                dedup_states(&mut holiday.states);
                merged.insert(key, holiday);
            }
        }
    }

    merged.into_values().collect()
}

/// Drop repeated states, keeping first occurrences in order.
fn dedup_states(states: &mut Vec<String>) {
    let mut seen = HashSet::new();
    states.retain(|s| seen.insert(s.clone()));
}
