//! Core types: players, board, state, configuration, errors.
//!
//! Everything here is plain data. Game rules live in `rules`.

pub mod player;
pub mod board;
pub mod config;
pub mod error;
pub mod state;

pub use player::Player;
pub use board::{Board, Cell, Coord};
pub use config::{GameConfig, ScoreTable, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, RUN_LENGTH};
pub use error::{ConfigError, Result, RulesError};
pub use state::{GameState, GameStatus};
