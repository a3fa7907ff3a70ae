//! Noughts - terminal tic-tac-toe for two players on one keyboard.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{Cli, Command, GameConfig, PlayArgs};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.resolved_command() {
        Command::Play(args) => run_play(cli.config.as_deref(), &args),
        Command::CheckConfig => run_check_config(cli.config.as_deref()),
    }
}

/// Run a terminal game.
#[instrument(skip_all)]
fn run_play(config_path: Option<&Path>, args: &PlayArgs) -> Result<()> {
    let config = GameConfig::load(config_path)?.with_overrides(args)?;
    initialize_file_tracing(config.log_file())?;

    info!(
        player_one = %config.player_one(),
        player_two = %config.player_two(),
        "Starting noughts"
    );
    noughts::run_tui(&config)
}

/// Print the resolved configuration.
fn run_check_config(config_path: Option<&Path>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::load(config_path)?.with_overrides(&PlayArgs::default())?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Send tracing output to a file so it does not draw over the TUI.
fn initialize_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}
