//! Command-line interface for noughts.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./noughts.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a game in the terminal
    Play(PlayArgs),

    /// Load the configuration, print it and exit
    CheckConfig,
}

/// Overrides for a terminal game.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayArgs {
    /// Name of the first player (plays X)
    #[arg(long)]
    pub player_one: Option<String>,

    /// Name of the second player (plays O)
    #[arg(long)]
    pub player_two: Option<String>,

    /// File that receives the game log
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Returns the command to run, falling back to `play` with no overrides.
    pub fn resolved_command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Play(PlayArgs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::parse_from(["noughts"]);
        assert_eq!(cli.resolved_command(), Command::Play(PlayArgs::default()));
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_play_overrides() {
        let cli = Cli::parse_from([
            "noughts",
            "play",
            "--player-one",
            "Ada",
            "--player-two",
            "Grace",
            "--config",
            "custom.toml",
        ]);
        let Command::Play(args) = cli.resolved_command() else {
            panic!("expected play command");
        };
        assert_eq!(args.player_one.as_deref(), Some("Ada"));
        assert_eq!(args.player_two.as_deref(), Some("Grace"));
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_check_config_subcommand() {
        let cli = Cli::parse_from(["noughts", "check-config"]);
        assert_eq!(cli.resolved_command(), Command::CheckConfig);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
