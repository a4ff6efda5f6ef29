//! Audible tic-tac-toe - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use audible_tictactoe::{run_tui, AppConfig};
use clap::Parser;
use cli::{Cli, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.load_config()?;

    match cli.command() {
        Command::Play { .. } => run_tui(config).await,
        Command::Cues => list_cues(&config),
    }
}

/// Prints every cue with its resolved asset path.
fn list_cues(config: &AppConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging().filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let inventory = config.audio().assets().inventory();
    let missing = inventory.iter().filter(|status| !status.present).count();
    info!(total = inventory.len(), missing, "Resolved audio cues");

    for status in &inventory {
        let marker = if status.present { "ok" } else { "missing" };
        println!(
            "{:<20} {:<8} {}",
            status.cue.identifier(),
            marker,
            status.path.display()
        );
    }
    if missing > 0 {
        println!("\n{} of {} assets missing", missing, inventory.len());
    }
    Ok(())
}
