//! Move engine: validates a proposed move and advances the game.
//!
//! ```text
//!            apply_move
//! InProgress ──────────┬──> InProgress   (Continue, turn passes)
//!                      ├──> Won(player)  (Win)
//!                      ├──> Draw         (Draw)
//!                      └──> unchanged    (OutOfBounds | CellOccupied)
//! ```
//!
//! `Won` and `Draw` are terminal. Submitting a move against a terminal
//! state is a precondition violation reported as `RulesError::GameOver`.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{
    Cell, ConfigError, GameConfig, GameState, Result, RulesError, ScoreTable,
};

use super::draw::is_draw;
use super::win::is_winning_move;

/// Classification of a single `apply_move` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Row or column outside `[0, N)`. State unchanged.
    OutOfBounds,
    /// Target cell already holds a stone. State unchanged.
    CellOccupied,
    /// The move completed a run of five or more.
    Win,
    /// The move filled the board without a win.
    Draw,
    /// Legal move; the other player is now to move.
    Continue,
}

impl Outcome {
    /// Reward for this outcome under `scores`.
    #[must_use]
    pub fn score(self, scores: &ScoreTable) -> f64 {
        match self {
            Outcome::OutOfBounds => scores.out_of_bounds,
            Outcome::CellOccupied => scores.cell_occupied,
            Outcome::Win => scores.win,
            Outcome::Draw => scores.draw,
            Outcome::Continue => scores.continue_play,
        }
    }

    /// True if a stone was placed.
    #[must_use]
    pub fn is_legal(self) -> bool {
        !matches!(self, Outcome::OutOfBounds | Outcome::CellOccupied)
    }

    /// True if the game ended with this move.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Outcome::Win | Outcome::Draw)
    }

    /// Stable snake_case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::OutOfBounds => "out_of_bounds",
            Outcome::CellOccupied => "cell_occupied",
            Outcome::Win => "win",
            Outcome::Draw => "draw",
            Outcome::Continue => "continue",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a move together with the resulting snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveResult {
    pub outcome: Outcome,
    pub state: GameState,
}

/// Apply `current_player`'s move at `(row, col)` to `state`.
///
/// `state` is left untouched; the returned `MoveResult` carries the next
/// snapshot. For `OutOfBounds` and `CellOccupied` that snapshot equals the
/// input.
///
/// # Errors
///
/// `RulesError::GameOver` if `state` is already terminal.
pub fn apply_move(state: &GameState, row: i64, col: i64) -> Result<MoveResult> {
    if state.is_game_over() {
        debug!(row, col, status = ?state.status(), "move rejected: game already over");
        return Err(RulesError::GameOver);
    }

    let player = state.current_player();
    let unchanged = |outcome: Outcome| {
        debug!(%player, row, col, %outcome, "illegal move");
        Ok(MoveResult {
            outcome,
            state: state.clone(),
        })
    };

    let Some(at) = state.board().coord(row, col) else {
        return unchanged(Outcome::OutOfBounds);
    };
    if state.board().get(at) != Cell::Empty {
        return unchanged(Outcome::CellOccupied);
    }

    let mut next = state.clone();
    next.place(at);

    let outcome = if is_winning_move(next.board(), player, at) {
        next.finish(Some(player));
        Outcome::Win
    } else if is_draw(next.board()) {
        next.finish(None);
        Outcome::Draw
    } else {
        next.pass_turn();
        Outcome::Continue
    };

    if outcome.is_terminal() {
        debug!(%player, %at, %outcome, moves = next.move_count(), "game over");
    } else {
        trace!(%player, %at, moves = next.move_count(), "move applied");
    }

    Ok(MoveResult {
        outcome,
        state: next,
    })
}

/// Referee for games played under one configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveEngine {
    config: GameConfig,
}

impl MoveEngine {
    /// Create an engine, validating the configuration.
    pub fn new(config: GameConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh state: empty board, `Player::One` to move.
    #[must_use]
    pub fn new_game(&self) -> GameState {
        GameState::new(self.config.board_size)
    }

    /// See [`apply_move`].
    pub fn apply_move(&self, state: &GameState, row: i64, col: i64) -> Result<MoveResult> {
        apply_move(state, row, col)
    }
}
