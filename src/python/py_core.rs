//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{Board, GameConfig, GameState, Player};

use super::value_error;

/// Python wrapper for GameState.
///
/// Players and cells use their numeric codes (0 empty, 1, 2).
#[pyclass(name = "GameState")]
#[derive(Clone, Debug)]
pub struct PyGameState(pub GameState);

fn player_from_code(code: u8) -> PyResult<Player> {
    Player::from_code(code).ok_or_else(|| value_error(format!("invalid player {code}, expected 1 or 2")))
}

#[pymethods]
impl PyGameState {
    /// Create the initial state for an N×N board.
    #[new]
    #[pyo3(signature = (board_size = 15))]
    fn new(board_size: usize) -> PyResult<Self> {
        GameState::from_config(&GameConfig::new(board_size))
            .map(Self)
            .map_err(value_error)
    }

    /// Rebuild a state from a nested list of cell codes.
    #[staticmethod]
    #[pyo3(signature = (board, current_player, game_over = false, winner = None))]
    fn from_board(
        board: Vec<Vec<u8>>,
        current_player: u8,
        game_over: bool,
        winner: Option<u8>,
    ) -> PyResult<Self> {
        let board = Board::from_rows(&board).map_err(value_error)?;
        let current_player = player_from_code(current_player)?;
        let winner = winner.map(player_from_code).transpose()?;
        GameState::from_parts(board, current_player, game_over, winner)
            .map(Self)
            .map_err(value_error)
    }

    /// Board as rows of cell codes.
    #[getter]
    fn board(&self) -> Vec<Vec<u8>> {
        self.0.board().to_rows()
    }

    #[getter]
    fn board_size(&self) -> usize {
        self.0.board().size()
    }

    #[getter]
    fn current_player(&self) -> u8 {
        self.0.current_player().code()
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.0.is_game_over()
    }

    /// Winning player's code, or None for an unfinished game or a draw.
    #[getter]
    fn winner(&self) -> Option<u8> {
        self.0.winner().map(Player::code)
    }

    #[getter]
    fn last_move(&self) -> Option<(usize, usize)> {
        self.0.last_move().map(|c| (c.row, c.col))
    }

    #[getter]
    fn move_count(&self) -> u32 {
        self.0.move_count()
    }

    fn __repr__(&self) -> String {
        format!(
            "GameState(size={}, current_player={}, game_over={}, winner={:?}, moves={})",
            self.0.board().size(),
            self.0.current_player().code(),
            self.0.is_game_over(),
            self.0.winner().map(Player::code),
            self.0.move_count()
        )
    }

    fn __str__(&self) -> String {
        self.0.board().to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
