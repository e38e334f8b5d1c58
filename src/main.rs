//! Meetup events CLI
//!
//! Fetches every event of a Meetup group and prints them as canonical JSON

use anyhow::Context;
use clap::Parser;
use meetup_events::cli::{Cli, Runner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Initialize logging; stdout carries the JSON output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let group = cli.group.clone().unwrap_or_else(|| "<configured>".to_string());
    Runner::new(cli)
        .run()
        .await
        .with_context(|| format!("failed to list events for group {group}"))?;

    Ok(())
}
