//! Fetch one state's holiday page through a render context.

use crate::error::ScrapeError;
use crate::extraction::table::{decode_rows, rows_to_holidays, table_script, TABLE_SELECTOR};
use crate::holiday::Holiday;
use crate::pipeline::is_fetchable;
use crate::renderer::RenderContext;
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Loads state pages and pulls holiday rows out of them.
#[derive(Debug, Clone)]
pub struct PageExtractor {
    base_url: String,
    timeout: Duration,
}

impl PageExtractor {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Page listing `state`'s holidays for `year`.
    pub fn url_for(&self, state: &str, year: i32) -> String {
        format!("{}/{state}/{year}-dates/", self.base_url)
    }

    /// Fetch and extract `state`'s holidays for `year`.
    ///
    /// Navigation, the wait for the table, and extraction share one timeout.
    /// A page without a matching heading or table yields `Ok(vec![])`.
    pub async fn fetch_state(
        &self,
        context: &mut dyn RenderContext,
        state: &str,
        year: i32,
    ) -> Result<Vec<Holiday>, ScrapeError> {
        if !is_fetchable(state) {
            return Err(ScrapeError::UnknownState {
                state: state.to_string(),
            });
        }

        let url = self.url_for(state, year);
        info!("fetching {state} ({year}) from {url}");

        let rows = tokio::time::timeout(self.timeout, self.load_rows(context, &url, year))
            .await
            .map_err(|_| ScrapeError::FetchTimeout {
                state: state.to_string(),
                timeout: self.timeout,
            })?
            .map_err(|e| ScrapeError::Navigation {
                state: state.to_string(),
                reason: format!("{e:#}"),
            })?;

        if rows.is_empty() {
            warn!("no rows found for {state} in {year}; page may have changed");
            return Ok(Vec::new());
        }

        let holidays = rows_to_holidays(&rows, state, year);
        info!("fetched {} rows for {state} ({year})", holidays.len());
        Ok(holidays)
    }

    async fn load_rows(
        &self,
        context: &mut dyn RenderContext,
        url: &str,
        year: i32,
    ) -> Result<Vec<Vec<String>>> {
        let nav = context
            .navigate(url, self.timeout.as_millis() as u64)
            .await
            .context("loading page")?;
        debug!("loaded {} in {}ms", nav.final_url, nav.load_time_ms);

        context
            .wait_visible(TABLE_SELECTOR)
            .await
            .context("waiting for holiday table")?;

        let value = context
            .execute_js(&table_script(year))
            .await
            .context("extracting holiday table")?;
        Ok(decode_rows(&value))
    }
}
