//! Construction-time settings for a game.

use serde::{Deserialize, Serialize};

use crate::InvalidBoardSizeError;

/// Settings consumed when a board is created.
///
/// The player count is fixed at four and is not configurable. Missing fields
/// fall back to the standard game when deserializing.
///
/// # Example
///
/// ```
/// use blokus_engine::GameConfig;
///
/// let config: GameConfig = serde_json::from_str(r#"{ "board_size": 14 }"#).unwrap();
/// assert!(config.validate().is_ok());
///
/// let default: GameConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(default, GameConfig::STANDARD);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board.
    pub board_size: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl GameConfig {
    /// Smallest board that still fits the longest pentomino.
    pub const MIN_BOARD_SIZE: u8 = 5;
    /// Largest board accepted; bounds the cost of the playability search.
    pub const MAX_BOARD_SIZE: u8 = 32;
    pub const STANDARD_BOARD_SIZE: u8 = 20;

    pub const STANDARD: Self = Self {
        board_size: Self::STANDARD_BOARD_SIZE,
    };

    #[must_use]
    pub const fn with_board_size(board_size: u8) -> Self {
        Self { board_size }
    }

    pub fn validate(&self) -> Result<(), InvalidBoardSizeError> {
        if (Self::MIN_BOARD_SIZE..=Self::MAX_BOARD_SIZE).contains(&self.board_size) {
            Ok(())
        } else {
            Err(InvalidBoardSizeError {
                size: self.board_size,
            })
        }
    }
}
