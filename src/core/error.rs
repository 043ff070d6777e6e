//! Error types.
//!
//! Illegal moves are not errors: they are reported as `Outcome`s so an
//! episode can carry on. Errors here cover precondition violations and
//! malformed construction input only.

use thiserror::Error;

use super::board::Coord;

/// Errors raised by the move engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// A move was submitted against a state that already ended.
    #[error("game is already over")]
    GameOver,
}

/// Errors raised while building a board, state or configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board size {size} is outside the supported range {min}..={max}")]
    BoardSize { size: usize, min: usize, max: usize },

    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },

    #[error("unknown cell code {code} at ({row}, {col})")]
    CellCode { code: u8, row: usize, col: usize },

    #[error("board holds {len} cells, expected {expected}")]
    CellCount { len: usize, expected: usize },

    #[error("last move {at} is off a {size}x{size} board")]
    LastMoveOffBoard { at: Coord, size: usize },

    #[error("winner recorded on a state that is not over")]
    WinnerWithoutGameOver,
}

/// Convenience Result type for engine operations.
pub type Result<T> = std::result::Result<T, RulesError>;
