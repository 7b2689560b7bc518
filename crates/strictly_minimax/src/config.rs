//! Game configuration.

use crate::coordinates::{CELL_PREFIX, Coordinates};
use crate::types::{BOARD_SIZE, Player, Roles};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Board layout, identifier format and computer mark.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of cells; must be a perfect square.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Prefix of cell identifiers (e.g., "c" for "c1".."c9").
    #[serde(default = "default_cell_prefix")]
    cell_prefix: String,

    /// Mark played by the computer.
    #[serde(default = "default_computer")]
    computer: Player,
}

fn default_board_size() -> usize {
    BOARD_SIZE
}

fn default_cell_prefix() -> String {
    CELL_PREFIX.to_string()
}

fn default_computer() -> Player {
    Player::O
}

impl GameConfig {
    /// Creates a validated configuration.
    #[instrument(skip(cell_prefix))]
    pub fn new(
        board_size: usize,
        cell_prefix: impl Into<String>,
        computer: Player,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            board_size,
            cell_prefix: cell_prefix.into(),
            computer,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(board_size = config.board_size, computer = %config.computer, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Identifier codec for this configuration.
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.cell_prefix.clone())
    }

    /// Role assignment for this configuration.
    pub fn roles(&self) -> Roles {
        Roles::new(self.computer)
    }

    #[track_caller]
    fn validate(&self) -> Result<(), ConfigError> {
        let side = self.board_size.isqrt();
        if self.board_size == 0 || side * side != self.board_size {
            return Err(ConfigError::new(format!(
                "board_size must be a non-zero perfect square, got {}",
                self.board_size
            )));
        }
        if self.cell_prefix.is_empty() {
            return Err(ConfigError::new("cell_prefix must not be empty".to_string()));
        }
        if self.cell_prefix.ends_with(|c: char| c.is_ascii_digit()) {
            return Err(ConfigError::new(format!(
                "cell_prefix must not end in a digit, got {:?}",
                self.cell_prefix
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            cell_prefix: default_cell_prefix(),
            computer: default_computer(),
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
