//! Game configuration types.
//!
//! - `GameConfig`: board dimensions
//! - `ScoreTable`: outcome to reward mapping used by the harness
//!
//! The target run length is fixed at `RUN_LENGTH`; only the board size
//! is configurable.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Number of same-player stones in a line needed to win.
pub const RUN_LENGTH: usize = 5;

/// Default board edge length.
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Largest supported board edge length.
pub const MAX_BOARD_SIZE: usize = 255;

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Edge length N of the N×N board.
    pub board_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

impl GameConfig {
    /// Create a configuration for an N×N board.
    #[must_use]
    pub fn new(board_size: usize) -> Self {
        Self { board_size }
    }

    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Check the board can hold a winning run and fits the coordinate range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_board_size(self.board_size)
    }
}

pub(crate) fn validate_board_size(size: usize) -> Result<(), ConfigError> {
    if !(RUN_LENGTH..=MAX_BOARD_SIZE).contains(&size) {
        return Err(ConfigError::BoardSize {
            size,
            min: RUN_LENGTH,
            max: MAX_BOARD_SIZE,
        });
    }
    Ok(())
}

/// Reward assigned to each move outcome.
///
/// Defaults match the scoring used by the training harness.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreTable {
    /// No coordinate pair could be extracted from the response.
    pub unparsable: f64,
    /// Row or column outside the board.
    pub out_of_bounds: f64,
    /// Target cell already holds a stone.
    pub cell_occupied: f64,
    /// Move completed a run of five or more.
    pub win: f64,
    /// Board filled without a winner.
    pub draw: f64,
    /// Legal move, game continues.
    pub continue_play: f64,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            unparsable: -1.0,
            out_of_bounds: -10.0,
            cell_occupied: -10.0,
            win: 100.0,
            draw: 0.0,
            continue_play: 1.0,
        }
    }
}

impl ScoreTable {
    /// Set the penalty for both kinds of illegal move.
    #[must_use]
    pub fn with_illegal_penalty(mut self, penalty: f64) -> Self {
        self.out_of_bounds = penalty;
        self.cell_occupied = penalty;
        self
    }

    /// Set the reward for a winning move.
    #[must_use]
    pub fn with_win_reward(mut self, reward: f64) -> Self {
        self.win = reward;
        self
    }
}
