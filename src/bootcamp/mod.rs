//! Training-harness wrapper around the move engine.
//!
//! A bootcamp episode is a loop of:
//! 1. `case_generator` to start a game,
//! 2. `prompt` to describe the position to the player,
//! 3. `verify_score` to parse the player's reply, apply it and score it.
//!
//! Unparsable replies score `ScoreTable::unparsable` and leave the state
//! unchanged; everything else is scored from the engine's `Outcome`.

mod parse;
mod prompt;

pub use parse::{parse_move, ParseError};
pub use prompt::render_prompt;

use tracing::debug;

use crate::core::{ConfigError, GameConfig, GameState, Result, RulesError, ScoreTable};
use crate::rules::{MoveEngine, Outcome};

/// Scored result of one reply.
#[derive(Clone, Debug, PartialEq)]
pub struct Verdict {
    pub score: f64,
    /// `None` when no move could be parsed.
    pub outcome: Option<Outcome>,
    pub state: GameState,
}

/// Gomoku environment for reply-scoring training loops.
#[derive(Clone, Debug, Default)]
pub struct Bootcamp {
    engine: MoveEngine,
    scores: ScoreTable,
}

impl Bootcamp {
    /// Create a bootcamp for an N×N board with the default scores.
    pub fn new(config: GameConfig) -> std::result::Result<Self, ConfigError> {
        Ok(Self {
            engine: MoveEngine::new(config)?,
            scores: ScoreTable::default(),
        })
    }

    /// Replace the score table.
    #[must_use]
    pub fn with_scores(mut self, scores: ScoreTable) -> Self {
        self.scores = scores;
        self
    }

    #[must_use]
    pub fn engine(&self) -> &MoveEngine {
        &self.engine
    }

    #[must_use]
    pub fn scores(&self) -> &ScoreTable {
        &self.scores
    }

    /// Start a new episode.
    #[must_use]
    pub fn case_generator(&self) -> GameState {
        self.engine.new_game()
    }

    /// Describe `state` to the player to move.
    #[must_use]
    pub fn prompt(&self, state: &GameState) -> String {
        render_prompt(state)
    }

    /// Parse `response`, apply the move to `state` and score it.
    ///
    /// # Errors
    ///
    /// `RulesError::GameOver` if `state` is already terminal. This is
    /// checked before parsing.
    pub fn verify_score(&self, response: &str, state: &GameState) -> Result<Verdict> {
        if state.is_game_over() {
            return Err(RulesError::GameOver);
        }

        let Ok((row, col)) = parse_move(response) else {
            debug!(len = response.len(), "no move found in response");
            return Ok(Verdict {
                score: self.scores.unparsable,
                outcome: None,
                state: state.clone(),
            });
        };

        let result = self.engine.apply_move(state, row, col)?;
        let score = result.outcome.score(&self.scores);
        debug!(row, col, outcome = %result.outcome, score, "response scored");

        Ok(Verdict {
            score,
            outcome: Some(result.outcome),
            state: result.state,
        })
    }
}
