//! tictactoe binary.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tictactoe::{AppConfig, Cli, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::resolve(&cli)?;

    // Log to a file; stdout belongs to the TUI.
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tictactoe=debug,tictactoe_core=debug")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(?config, "Configuration resolved");
    run_tui(config)
}
