//! Bootcamp bindings for Python.

use pyo3::prelude::*;

use crate::bootcamp::Bootcamp;
use crate::core::{GameConfig, ScoreTable};

use super::py_core::PyGameState;
use super::value_error;

/// Python wrapper for Bootcamp.
///
/// Scores are returned as floats; illegal moves and unparsable replies are
/// scored, not raised. Submitting a move for a finished game raises
/// `ValueError`.
#[pyclass(name = "GomokuBootcamp")]
pub struct PyGomokuBootcamp {
    inner: Bootcamp,
}

#[pymethods]
impl PyGomokuBootcamp {
    /// Create a bootcamp.
    ///
    /// # Arguments
    /// - board_size: Edge length of the square board
    /// - illegal_penalty: Score for out-of-bounds or occupied moves
    /// - win_reward: Score for a winning move
    #[new]
    #[pyo3(signature = (board_size = 15, illegal_penalty = None, win_reward = None))]
    fn new(board_size: usize, illegal_penalty: Option<f64>, win_reward: Option<f64>) -> PyResult<Self> {
        let mut scores = ScoreTable::default();
        if let Some(penalty) = illegal_penalty {
            scores = scores.with_illegal_penalty(penalty);
        }
        if let Some(reward) = win_reward {
            scores = scores.with_win_reward(reward);
        }
        let inner = Bootcamp::new(GameConfig::new(board_size))
            .map_err(value_error)?
            .with_scores(scores);
        Ok(Self { inner })
    }

    #[getter]
    fn board_size(&self) -> usize {
        self.inner.engine().config().board_size
    }

    /// Start a new episode.
    fn case_generator(&self) -> PyGameState {
        PyGameState(self.inner.case_generator())
    }

    /// Render the prompt for the player to move.
    fn prompt_func(&self, state: &PyGameState) -> String {
        self.inner.prompt(&state.0)
    }

    /// Score a free-form reply. Returns (score, next_state).
    fn verify_score(&self, response: &str, state: &PyGameState) -> PyResult<(f64, PyGameState)> {
        let verdict = self
            .inner
            .verify_score(response, &state.0)
            .map_err(value_error)?;
        Ok((verdict.score, PyGameState(verdict.state)))
    }

    /// Apply a move directly. Returns (outcome_name, next_state).
    fn apply_move(&self, state: &PyGameState, row: i64, col: i64) -> PyResult<(String, PyGameState)> {
        let result = self
            .inner
            .engine()
            .apply_move(&state.0, row, col)
            .map_err(value_error)?;
        Ok((result.outcome.as_str().to_string(), PyGameState(result.state)))
    }

    fn __repr__(&self) -> String {
        format!("GomokuBootcamp(board_size={})", self.board_size())
    }
}
