//! Configuration for interactive play.

use crate::games::tictactoe::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the `play` command, loaded from TOML.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Side the human plays (1 moves first).
    #[serde(default = "default_human_player")]
    human_player: Player,

    /// Print per-move scores before the computer moves.
    #[serde(default)]
    show_analysis: bool,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_human_player() -> Player {
    Player::One
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl PlayConfig {
    /// Creates a configuration with the given human side and defaults elsewhere.
    pub fn new(human_player: Player) -> Self {
        Self {
            human_player,
            show_analysis: false,
            log_filter: default_log_filter(),
        }
    }

    /// Returns a copy with the human side replaced.
    pub fn with_human_player(mut self, human_player: Player) -> Self {
        self.human_player = human_player;
        self
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human_player = %config.human_player, "Config loaded successfully");
        Ok(config)
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self::new(default_human_player())
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
