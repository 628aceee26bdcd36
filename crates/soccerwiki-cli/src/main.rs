mod cli;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use soccerwiki_core::{deliver, Crawler, SoccerwikiClient};

use crate::cli::Args;
use crate::output::open_sink;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "soccerwiki_core=debug,soccerwiki_cli=debug"
    } else {
        "soccerwiki_core=info,soccerwiki_cli=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = SoccerwikiClient::with_config(args.client_config())
        .context("failed to build HTTP client")?;
    let crawler = Crawler::with_source(client, args.crawl_config());

    let report = crawler
        .crawl_league(&args.league)
        .await
        .with_context(|| format!("failed to crawl league {}", args.league))?;

    let format = args.output_format();
    info!(path = %args.output.display(), ?format, "writing records");
    let mut sink = open_sink(format, &args.output)?;
    let written = deliver(&report, sink.as_mut())
        .with_context(|| format!("failed writing {}", args.output.display()))?;

    println!(
        "Saved {} rows to {} ({} clubs, {} players found; {} clubs and {} players skipped)",
        written,
        args.output.display(),
        report.clubs_discovered,
        report.players_discovered,
        report.clubs_failed,
        report.players_failed
    );
    Ok(())
}
