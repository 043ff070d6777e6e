//! # gomoku-referee
//!
//! A five-in-a-row rules engine for refereeing moves proposed by an
//! external player (typically a language model in a training loop).
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not shared boards**: `apply_move` takes a `GameState`
//!    by reference and returns a new one. Nothing is mutated in place, so
//!    independent games can be refereed from any thread.
//!
//! 2. **Illegal moves are outcomes**: out-of-bounds and occupied-cell moves
//!    come back as `Outcome`s with the state unchanged so an episode can
//!    continue. Only misuse (moving after the game ended) is an error.
//!
//! 3. **Runs of five or more win**: overlines count; draws are only
//!    considered once the last move is known not to win.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: the board is an `im::Vector`, so each
//!   snapshot shares structure with the previous one.
//!
//! - **Local win check**: only the four lines through the stone just placed
//!   are walked, at most four cells each way.
//!
//! ## Modules
//!
//! - `core`: Players, board, state, configuration, errors
//! - `rules`: Win/draw detection and the move engine
//! - `bootcamp`: Prompt rendering, reply parsing and scoring for training

pub mod core;
pub mod rules;
pub mod bootcamp;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Coord, Player,
    GameConfig, ScoreTable, RUN_LENGTH,
    GameState, GameStatus,
    ConfigError, RulesError,
};

pub use crate::rules::{apply_move, is_winning_move, MoveEngine, MoveResult, Outcome};

pub use crate::bootcamp::{parse_move, Bootcamp, ParseError, Verdict};
