//! Browser rendering seam.
//!
//! The extractor only talks to a [`RenderContext`]: one browser tab that can
//! navigate, wait for an element, and evaluate a script. The Chromium-backed
//! implementation lives in [`chromium`].

pub mod chromium;

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// How often [`RenderContext::wait_visible`] re-checks the page.
pub const VISIBILITY_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Result of a page navigation.
#[derive(Debug, Clone)]
pub struct NavigationResult {
    /// URL after redirects.
    pub final_url: String,
    /// Time from navigation start to load, in milliseconds.
    pub load_time_ms: u64,
}

/// A single browser tab.
#[async_trait]
pub trait RenderContext: Send + Sync {
    /// Navigate to a URL and wait for the load to finish.
    async fn navigate(&mut self, url: &str, timeout_ms: u64) -> Result<NavigationResult>;

    /// Evaluate a JavaScript expression and return its JSON value.
    async fn execute_js(&self, script: &str) -> Result<serde_json::Value>;

    /// Wait until the first element matching `selector` is rendered visibly.
    ///
    /// Polls forever; callers bound it with a timeout.
    async fn wait_visible(&self, selector: &str) -> Result<()> {
        let script = visibility_script(selector);
        loop {
            if self.execute_js(&script).await?.as_bool() == Some(true) {
                return Ok(());
            }
            tokio::time::sleep(VISIBILITY_POLL_INTERVAL).await;
        }
    }

    /// Close the tab.
    async fn close(self: Box<Self>) -> Result<()>;
}

/// Script that is `true` once `selector` matches a laid-out, visible element.
fn visibility_script(selector: &str) -> String {
    let selector = serde_json::Value::String(selector.to_string());
    format!(
        r#"(() => {{
            const el = document.querySelector({selector});
            if (!el) return false;
            const style = window.getComputedStyle(el);
            if (style.visibility === "hidden" || style.display === "none") return false;
            return el.getClientRects().length > 0;
        }})()"#
    )
}
