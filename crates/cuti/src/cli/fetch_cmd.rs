//! `cuti` main flow: launch the browser, scrape every state, write the file.

use crate::cli::{output, Cli};
use crate::extraction::PageExtractor;
use crate::output::write_holidays;
use crate::pipeline::{Pipeline, ScrapeReport, STATES};
use crate::renderer::chromium::BrowserSession;
use crate::renderer::RenderContext;
use anyhow::{Context, Result};
use tracing::{info, warn};

/// Run a full scrape as described by the command line.
pub async fn run(cli: &Cli) -> Result<()> {
    let config = cli.scrape_config();
    let extractor = PageExtractor::new(config.base_url.clone(), config.state_timeout);
    let pipeline = Pipeline::new(extractor, STATES);

    let session = BrowserSession::launch(&config).await?;
    let report = scrape(&session, &pipeline, config.year).await;
    if let Err(e) = session.close().await {
        warn!("{e:#}");
    }
    let report = report?;

    let path = write_holidays(&cli.out, cli.format, &report.holidays)
        .context("writing holidays")?;
    info!("holidays written to {}", path.display());

    if !cli.quiet {
        output::print_summary(&report, &path);
    }
    Ok(())
}

async fn scrape(
    session: &BrowserSession,
    pipeline: &Pipeline<'_>,
    year: i32,
) -> Result<ScrapeReport> {
    let mut context = session.open_context().await?;
    let report = pipeline.run(&mut context, year).await;
    if let Err(e) = Box::new(context).close().await {
        warn!("{e:#}");
    }
    Ok(report)
}
