//! Game configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! command-line overrides.

use crate::cli::PlayArgs;
use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::{DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "noughts.toml";

/// Settings for a terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Name of the first player.
    #[serde(default = "default_player_one")]
    player_one: String,

    /// Name of the second player.
    #[serde(default = "default_player_two")]
    player_two: String,

    /// File receiving the tracing output while the TUI owns the terminal.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_player_one() -> String {
    DEFAULT_PLAYER_ONE.to_string()
}

fn default_player_two() -> String {
    DEFAULT_PLAYER_TWO.to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_one: default_player_one(),
            player_two: default_player_two(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(player_one = %config.player_one, player_two = %config.player_two, "Config loaded");
        Ok(config)
    }

    /// Resolves the file layer.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] in
    /// the working directory is used when present, defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides and validates the result.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, args: &PlayArgs) -> Result<Self, ConfigError> {
        if let Some(name) = &args.player_one {
            self.player_one = name.clone();
        }
        if let Some(name) = &args.player_two {
            self.player_two = name.clone();
        }
        if let Some(path) = &args.log_file {
            self.log_file = path.clone();
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks that both names are present and tell the players apart.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let one = self.player_one.trim();
        let two = self.player_two.trim();
        if one.is_empty() || two.is_empty() {
            return Err(ConfigError::new("Player names must not be empty".to_string()));
        }
        if one == two {
            return Err(ConfigError::new(format!(
                "Both players are named {:?}; names must differ",
                one
            )));
        }
        Ok(())
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to render config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
