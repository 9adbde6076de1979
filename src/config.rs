//! Configuration for the terminal front end.

use crate::games::tictactoe::Side;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for an interactive game.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Side the human plays. The engine takes the other one.
    #[serde(default = "default_human_side")]
    human_side: Side,

    /// Print the engine's recommended move before each human turn.
    #[serde(default)]
    show_hints: bool,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    log_level: String,
}

#[instrument]
fn default_human_side() -> Side {
    Side::First
}

#[instrument]
fn default_log_level() -> String {
    "warn".to_string()
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human_side = ?config.human_side, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, human_side: Option<Side>, show_hints: bool) -> Self {
        if let Some(side) = human_side {
            self.human_side = side;
        }
        self.show_hints |= show_hints;
        self
    }

    /// Side the engine plays.
    pub fn engine_side(&self) -> Side {
        self.human_side.opponent()
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human_side: default_human_side(),
            show_hints: false,
            log_level: default_log_level(),
        }
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
