//! Error types for the board, the game session and configuration.
//!
//! The move-selection core itself never fails; these errors only surface
//! where a caller hands in something malformed.

use thiserror::Error;

use crate::board::Stone;

/// Board construction and placement errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board size {size} outside supported range {min}..={max}")]
    InvalidSize { size: usize, min: usize, max: usize },

    #[error("position ({row}, {col}) is off a {size}x{size} board")]
    OutOfBounds { row: u8, col: u8, size: usize },

    #[error("position ({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },

    #[error("diagram row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown diagram symbol {symbol:?} in row {row}")]
    UnknownSymbol { symbol: char, row: usize },
}

/// Game session errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("game already finished")]
    GameOver,

    #[error("it is {to_move:?}'s turn, not the engine's ({ai_color:?})")]
    NotAiTurn { to_move: Stone, ai_color: Stone },

    #[error("no empty cell left for the engine to play")]
    NoMoveAvailable,

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {source}")]
    Parse {
        #[from]
        source: serde_yaml::Error,
    },

    #[error("invalid configuration: {message}")]
    Invalid { message: String },
}
