//! Board configuration loaded from TOML.

use crate::board::Board;
use crate::error::BoardError;
use crate::types::Piece;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Settings for constructing a [`Board`].
///
/// ```toml
/// size = 4
/// player_piece = "O"
/// opponent_piece = "X"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Board dimension N.
    #[serde(default = "default_size")]
    size: usize,

    /// Piece for the side that moves on the constructed board.
    #[serde(default = "default_player_piece")]
    player_piece: Piece,

    /// Piece for the other side.
    #[serde(default = "default_opponent_piece")]
    opponent_piece: Piece,
}

fn default_size() -> usize {
    3
}

fn default_player_piece() -> Piece {
    Piece::X
}

fn default_opponent_piece() -> Piece {
    Piece::O
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(default_size(), default_player_piece(), default_opponent_piece())
    }
}

impl BoardConfig {
    /// Creates a new board configuration.
    pub fn new(size: usize, player_piece: Piece, opponent_piece: Piece) -> Self {
        Self {
            size,
            player_piece,
            opponent_piece,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Read {
            path: path.as_ref().display().to_string(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml_str(&content)?;
        info!(size = config.size, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Builds an empty board from these settings.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn build(&self) -> Result<Board, ConfigError> {
        Board::new(self.size, self.player_piece, self.opponent_piece).map_err(|e| {
            warn!(error = %e, "Rejected board configuration");
            ConfigError::Invalid(e)
        })
    }
}

/// Error that can occur when loading board settings.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ConfigError {
    /// The file could not be read.
    #[display("Failed to read config file {}: {}", path, reason)]
    Read {
        /// Path that was attempted.
        path: String,
        /// I/O failure description.
        reason: String,
    },

    /// The TOML did not match the expected schema.
    #[display("Failed to parse config: {}", _0)]
    Parse(String),

    /// Settings parsed but describe no valid board.
    #[display("Invalid board settings: {}", _0)]
    Invalid(BoardError),
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Invalid(err) => Some(err),
            _ => None,
        }
    }
}
