//! Sequential per-state scraping and consolidation.

use crate::consolidate::consolidate;
use crate::extraction::PageExtractor;
use crate::holiday::Holiday;
use crate::renderer::RenderContext;
use tracing::{info, warn};

/// Label for federal holidays. Listed but never fetched; its holidays show up
/// on every state page.
pub const NATIONAL: &str = "national";

/// Every region in scrape order.
pub const STATES: &[&str] = &[
    NATIONAL,
    "johor",
    "kedah",
    "kelantan",
    "kuala-lumpur",
    "labuan",
    "melaka",
    "negeri-sembilan",
    "pahang",
    "penang",
    "perak",
    "perlis",
    "putrajaya",
    "sabah",
    "sarawak",
    "selangor",
    "terengganu",
];

/// Whether `state` has its own page to fetch.
pub fn is_fetchable(state: &str) -> bool {
    state != NATIONAL && STATES.contains(&state)
}

/// What happened to one state during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    Fetched(usize),
    Empty,
    Failed(String),
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateOutcome {
    pub state: String,
    pub status: FetchStatus,
}

/// Consolidated holidays plus per-state outcomes.
#[derive(Debug, Clone)]
pub struct ScrapeReport {
    pub year: i32,
    pub holidays: Vec<Holiday>,
    pub outcomes: Vec<StateOutcome>,
}

impl ScrapeReport {
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, FetchStatus::Failed(_)))
            .count()
    }
}

/// Drives the extractor over a list of states.
pub struct Pipeline<'a> {
    extractor: PageExtractor,
    states: &'a [&'a str],
}

impl<'a> Pipeline<'a> {
    pub fn new(extractor: PageExtractor, states: &'a [&'a str]) -> Self {
        Self { extractor, states }
    }

    /// Fetch every state in order, then consolidate.
    ///
    /// A state that fails or has no rows is logged and skipped; it never stops
    /// the run.
    pub async fn run(&self, context: &mut dyn RenderContext, year: i32) -> ScrapeReport {
        let total = self.states.len();
        let mut all = Vec::new();
        let mut outcomes = Vec::with_capacity(total);

        for (i, state) in self.states.iter().enumerate() {
            if !is_fetchable(state) {
                info!("[{}/{total}] skipping {state}", i + 1);
                outcomes.push(StateOutcome {
                    state: state.to_string(),
                    status: FetchStatus::Skipped,
                });
                continue;
            }

            info!("[{}/{total}] fetching {state} ({year})", i + 1);
            let status = match self.extractor.fetch_state(context, state, year).await {
                Ok(holidays) if holidays.is_empty() => FetchStatus::Empty,
                Ok(holidays) => {
                    let n = holidays.len();
                    all.extend(holidays);
                    FetchStatus::Fetched(n)
                }
                Err(e) => {
                    warn!("failed to fetch {state} ({year}): {e}");
                    FetchStatus::Failed(e.to_string())
                }
            };
            outcomes.push(StateOutcome {
                state: state.to_string(),
                status,
            });
        }

        let holidays = consolidate(all);
        info!("consolidated {} holidays for {year}", holidays.len());

        ScrapeReport {
            year,
            holidays,
            outcomes,
        }
    }
}
