//! Chromium-backed rendering via the DevTools protocol.

use crate::config::ScrapeConfig;
use crate::renderer::{NavigationResult, RenderContext};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::network::{EnableParams, SetBlockedUrLsParams};
use chromiumoxide::Page;
use futures::StreamExt;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Subresources never fetched during a run.
pub const BLOCKED_URL_PATTERNS: &[&str] = &[
    "*.png", "*.jpg", "*.jpeg", "*.gif", "*.woff", "*.ttf", "*.svg", "*.css",
];

/// Binaries looked up on `PATH` when no explicit Chromium path is set.
const CHROMIUM_NAMES: &[&str] = &["google-chrome", "chromium", "chromium-browser"];

/// A launched browser process plus the task pumping its protocol handler.
///
/// Call [`BrowserSession::close`] when done. Dropping the session without
/// closing stops the handler task and leaves chromiumoxide to kill the
/// child process.
pub struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
}

impl BrowserSession {
    /// Launch Chromium with the run's flags.
    pub async fn launch(config: &ScrapeConfig) -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .arg("--disable-gpu")
            .arg("--blink-settings=imagesEnabled=false");

        if !config.headless {
            builder = builder.with_head();
        }
        if config.no_sandbox {
            builder = builder.no_sandbox();
        }
        if let Some(path) = config.chromium_path.clone().or_else(find_chromium) {
            info!("using Chromium at {}", path.display());
            builder = builder.chrome_executable(path);
        }

        let browser_config = builder
            .build()
            .map_err(|e| anyhow!("invalid browser config: {e}"))?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .context("launching Chromium")?;

        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("browser handler: {e}");
                }
            }
        });

        info!("browser session started (headless: {})", config.headless);
        Ok(Self { browser, handler })
    }

    /// Open the tab used for every state, with subresource blocking applied.
    pub async fn open_context(&self) -> Result<ChromiumContext> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .context("opening tab")?;

        page.execute(EnableParams::default())
            .await
            .context("enabling network domain")?;

        // Built from JSON so only the `urls` field has to exist in this
        // protocol revision.
        let block: SetBlockedUrLsParams =
            serde_json::from_value(serde_json::json!({ "urls": BLOCKED_URL_PATTERNS }))
                .context("building blocked URL list")?;
        page.execute(block).await.context("blocking subresources")?;

        Ok(ChromiumContext { page })
    }

    /// Shut the browser down and wait for the process to exit.
    pub async fn close(mut self) -> Result<()> {
        self.browser.close().await.context("closing browser")?;
        if let Err(e) = self.browser.wait().await {
            warn!("browser did not exit cleanly: {e}");
        }
        info!("browser session closed");
        Ok(())
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        self.handler.abort();
    }
}

/// One Chromium tab.
pub struct ChromiumContext {
    page: Page,
}

#[async_trait]
impl RenderContext for ChromiumContext {
    async fn navigate(&mut self, url: &str, timeout_ms: u64) -> Result<NavigationResult> {
        let start = Instant::now();
        tokio::time::timeout(Duration::from_millis(timeout_ms), self.page.goto(url))
            .await
            .map_err(|_| anyhow!("navigation to {url} timed out"))?
            .with_context(|| format!("navigating to {url}"))?;

        let final_url = self
            .page
            .url()
            .await
            .ok()
            .flatten()
            .unwrap_or_else(|| url.to_string());

        Ok(NavigationResult {
            final_url,
            load_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    async fn execute_js(&self, script: &str) -> Result<serde_json::Value> {
        let result = self
            .page
            .evaluate_expression(script)
            .await
            .context("evaluating script")?;
        Ok(result.value().cloned().unwrap_or(serde_json::Value::Null))
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.page.close().await.context("closing tab")
    }
}

/// Search `PATH` for a Chromium binary. Used when `CUTI_CHROMIUM_PATH` is
/// unset; `None` defers to chromiumoxide's own detection.
pub fn find_chromium() -> Option<PathBuf> {
    CHROMIUM_NAMES
        .iter()
        .find_map(|name| which::which(name).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocked_patterns_cover_heavy_resources() {
        for ext in ["png", "jpg", "gif", "woff", "ttf", "svg", "css"] {
            assert!(
                BLOCKED_URL_PATTERNS.contains(&format!("*.{ext}").as_str()),
                "{ext}"
            );
        }
    }

    #[test]
    fn test_blocked_urls_params_from_json() {
        let block: SetBlockedUrLsParams =
            serde_json::from_value(serde_json::json!({ "urls": BLOCKED_URL_PATTERNS })).unwrap();
        let back = serde_json::to_value(&block).unwrap();
        assert_eq!(back["urls"][0], "*.png");
    }
}
