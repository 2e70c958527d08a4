use anyhow::Result;
use clap::Parser;
use cuti::cli::{fetch_cmd, Cli};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("cuti=info".parse()?),
        )
        .init();

    info!("starting cuti v{} for {}", env!("CARGO_PKG_VERSION"), cli.year);
    let result = fetch_cmd::run(&cli).await;
    info!("cuti finished");
    result
}
