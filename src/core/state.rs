//! Game state snapshots.
//!
//! A `GameState` is an owned value. The engine never mutates the state it
//! is given; it returns a new snapshot for every move. Because the board is
//! backed by `im`, producing that snapshot is cheap.

use serde::{Deserialize, Serialize};

use super::board::{Board, Cell, Coord};
use super::config::GameConfig;
use super::error::ConfigError;
use super::player::Player;

/// Derived status of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRepr")]
pub struct GameState {
    board: Board,
    current_player: Player,
    game_over: bool,
    winner: Option<Player>,
    last_move: Option<Coord>,
    move_count: u32,
}

/// Unchecked wire form of a `GameState`. The board validates itself.
#[derive(Deserialize)]
struct GameStateRepr {
    board: Board,
    current_player: Player,
    game_over: bool,
    winner: Option<Player>,
    last_move: Option<Coord>,
    move_count: u32,
}

impl TryFrom<GameStateRepr> for GameState {
    type Error = ConfigError;

    fn try_from(repr: GameStateRepr) -> Result<Self, Self::Error> {
        if let Some(at) = repr.last_move {
            if repr.board.try_get(at).is_none() {
                return Err(ConfigError::LastMoveOffBoard {
                    at,
                    size: repr.board.size(),
                });
            }
        }
        let mut state = Self::from_parts(repr.board, repr.current_player, repr.game_over, repr.winner)?;
        state.last_move = repr.last_move;
        state.move_count = repr.move_count;
        Ok(state)
    }
}

impl GameState {
    /// Create the initial state: empty board, `Player::One` to move.
    ///
    /// # Panics
    ///
    /// Panics if `board_size` is outside `RUN_LENGTH..=MAX_BOARD_SIZE`;
    /// `from_config` reports that as an error instead.
    #[must_use]
    pub fn new(board_size: usize) -> Self {
        Self::with_board(Board::new(board_size), Player::One)
    }

    /// Create the initial state for a validated configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_board(Board::from_config(config)?, Player::One))
    }

    /// Create an in-progress state from an existing position.
    ///
    /// `move_count` is taken as the number of stones on the board.
    #[must_use]
    pub fn with_board(board: Board, current_player: Player) -> Self {
        let stones = board.size() * board.size() - board.empty_count();
        Self {
            board,
            current_player,
            game_over: false,
            winner: None,
            last_move: None,
            move_count: u32::try_from(stones).unwrap_or(u32::MAX),
        }
    }

    /// Rebuild a snapshot from its externally visible parts.
    ///
    /// Used by harnesses that carry state as plain data between calls.
    pub fn from_parts(
        board: Board,
        current_player: Player,
        game_over: bool,
        winner: Option<Player>,
    ) -> Result<Self, ConfigError> {
        if winner.is_some() && !game_over {
            return Err(ConfigError::WinnerWithoutGameOver);
        }
        let mut state = Self::with_board(board, current_player);
        state.game_over = game_over;
        state.winner = winner;
        Ok(state)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is. After a win this stays on the winner.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Coordinate of the most recent stone placed through the engine.
    #[must_use]
    pub fn last_move(&self) -> Option<Coord> {
        self.last_move
    }

    /// Stones on the board.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match (self.game_over, self.winner) {
            (false, _) => GameStatus::InProgress,
            (true, Some(p)) => GameStatus::Won(p),
            (true, None) => GameStatus::Draw,
        }
    }

    // === Transitions (engine only) ===

    /// Place the current player's stone and record it.
    pub(crate) fn place(&mut self, at: Coord) {
        self.board.set(at, Cell::Stone(self.current_player));
        self.last_move = Some(at);
        self.move_count = self.move_count.saturating_add(1);
    }

    pub(crate) fn finish(&mut self, winner: Option<Player>) {
        self.game_over = true;
        self.winner = winner;
    }

    pub(crate) fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_board(Board::default(), Player::One)
    }
}
