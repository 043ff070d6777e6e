//! Move engine scenarios on full-size boards.

use gomoku_referee::core::{Board, Cell, Coord, GameState, GameStatus, Player, RulesError};
use gomoku_referee::rules::{apply_move, Outcome};

/// Apply moves that must all be `Continue`, returning the final state.
fn play(state: GameState, moves: &[(i64, i64)]) -> GameState {
    moves.iter().fold(state, |s, &(r, c)| {
        let result = apply_move(&s, r, c).unwrap();
        assert_eq!(result.outcome, Outcome::Continue, "move ({r},{c})");
        result.state
    })
}

/// Colour of each cell in a full-board pattern with no run longer than two.
///
/// Rows alternate; within a row stones come in pairs. On a 15×15 board this
/// gives player one 113 cells and player two 112.
fn drawn_pattern_owner(row: usize, col: usize) -> Player {
    if (col / 2 + row) % 2 == 0 {
        Player::One
    } else {
        Player::Two
    }
}

// =============================================================================
// Winning Lines
// =============================================================================

#[test]
fn test_top_row_win_for_player_one() {
    let state = play(
        GameState::new(15),
        &[(0, 0), (14, 14), (0, 1), (14, 13), (0, 2), (14, 12), (0, 3), (13, 0)],
    );
    let result = apply_move(&state, 0, 4).unwrap();

    assert_eq!(result.outcome, Outcome::Win);
    assert_eq!(result.state.winner(), Some(Player::One));
    assert!(result.state.is_game_over());
    assert_eq!(result.state.current_player(), Player::One);
    assert_eq!(result.state.move_count(), 9);
}

#[test]
fn test_fifth_stone_in_each_orientation_wins() {
    // (four existing stones, completing move)
    let cases: [(&[(usize, usize)], (i64, i64)); 4] = [
        (&[(7, 3), (7, 4), (7, 6), (7, 7)], (7, 5)),
        (&[(2, 10), (3, 10), (4, 10), (5, 10)], (6, 10)),
        (&[(9, 9), (10, 10), (11, 11), (12, 12)], (8, 8)),
        (&[(4, 4), (5, 3), (6, 2), (8, 0)], (7, 1)),
    ];

    for (stones, (r, c)) in cases {
        let mut board = Board::new(15);
        for &(sr, sc) in stones {
            board.set(Coord::new(sr, sc), Cell::Stone(Player::Two));
        }
        let state = GameState::with_board(board, Player::Two);

        let result = apply_move(&state, r, c).unwrap();
        assert_eq!(result.outcome, Outcome::Win, "completing ({r},{c})");
        assert_eq!(result.state.status(), GameStatus::Won(Player::Two));
    }
}

#[test]
fn test_overline_wins() {
    let mut board = Board::new(15);
    for col in [0, 1, 2, 4, 5] {
        board.set(Coord::new(11, col), Cell::Stone(Player::One));
    }
    let state = GameState::with_board(board, Player::One);

    let result = apply_move(&state, 11, 3).unwrap();
    assert_eq!(result.outcome, Outcome::Win);
}

#[test]
fn test_opponent_stones_do_not_count() {
    let mut board = Board::new(15);
    for col in [0, 1, 3, 4] {
        board.set(Coord::new(0, col), Cell::Stone(Player::One));
    }
    let state = GameState::with_board(board, Player::Two);

    let result = apply_move(&state, 0, 2).unwrap();
    assert_eq!(result.outcome, Outcome::Continue);
    assert_eq!(result.state.current_player(), Player::One);
}

#[test]
fn test_run_does_not_wrap_rows() {
    let mut board = Board::new(15);
    for col in [11, 12, 13, 14] {
        board.set(Coord::new(3, col), Cell::Stone(Player::One));
    }
    board.set(Coord::new(4, 1), Cell::Stone(Player::One));
    let state = GameState::with_board(board, Player::One);

    let result = apply_move(&state, 4, 0).unwrap();
    assert_eq!(result.outcome, Outcome::Continue);
}

// =============================================================================
// Illegal Moves
// =============================================================================

#[test]
fn test_occupied_cell_leaves_player_two_to_move() {
    let mut board = Board::new(15);
    board.set(Coord::new(3, 3), Cell::Stone(Player::One));
    let state = GameState::with_board(board, Player::Two);

    let result = apply_move(&state, 3, 3).unwrap();
    assert_eq!(result.outcome, Outcome::CellOccupied);
    assert_eq!(result.state.board(), state.board());
    assert_eq!(result.state.current_player(), Player::Two);
}

#[test]
fn test_out_of_bounds_leaves_state_unchanged() {
    let state = play(GameState::new(15), &[(7, 7), (7, 8)]);
    for (r, c) in [(15, 15), (-1, -1), (0, i64::MAX), (i64::MIN, 0)] {
        let result = apply_move(&state, r, c).unwrap();
        assert_eq!(result.outcome, Outcome::OutOfBounds);
        assert_eq!(result.state, state);
    }
}

#[test]
fn test_illegal_moves_do_not_consume_turn() {
    let state = play(GameState::new(15), &[(0, 0)]);
    let after_bad = apply_move(&state, 0, 0).unwrap().state;
    let after_good = apply_move(&after_bad, 1, 1).unwrap();

    assert_eq!(after_good.outcome, Outcome::Continue);
    assert_eq!(
        after_good.state.board().get(Coord::new(1, 1)),
        Cell::Stone(Player::Two)
    );
}

// =============================================================================
// Draws and Terminal States
// =============================================================================

#[test]
fn test_full_board_without_run_is_draw() {
    let size = 15;
    let mut ones = Vec::new();
    let mut twos = Vec::new();
    for row in 0..size {
        for col in 0..size {
            match drawn_pattern_owner(row, col) {
                Player::One => ones.push((row as i64, col as i64)),
                Player::Two => twos.push((row as i64, col as i64)),
            }
        }
    }
    assert_eq!(ones.len(), twos.len() + 1);

    let last = ones.pop().unwrap();
    let mut moves = Vec::with_capacity(size * size - 1);
    for (one, two) in ones.iter().zip(&twos) {
        moves.push(*one);
        moves.push(*two);
    }
    let state = play(GameState::new(size), &moves);
    assert_eq!(state.board().empty_count(), 1);

    let result = apply_move(&state, last.0, last.1).unwrap();
    assert_eq!(result.outcome, Outcome::Draw);
    assert!(result.state.is_game_over());
    assert_eq!(result.state.winner(), None);
    assert_eq!(result.state.current_player(), Player::One);
    assert!(result.state.board().is_full());
}

#[test]
fn test_no_moves_after_win() {
    let state = play(
        GameState::new(15),
        &[(5, 5), (0, 0), (6, 6), (0, 1), (7, 7), (0, 2), (8, 8), (0, 3)],
    );
    let won = apply_move(&state, 9, 9).unwrap().state;
    assert_eq!(won.status(), GameStatus::Won(Player::One));

    assert_eq!(apply_move(&won, 10, 10), Err(RulesError::GameOver));
    assert_eq!(apply_move(&won, 0, 4), Err(RulesError::GameOver));
}

#[test]
fn test_snapshots_are_independent() {
    let start = GameState::new(15);
    let a = apply_move(&start, 0, 0).unwrap().state;
    let b = apply_move(&start, 14, 14).unwrap().state;

    assert_eq!(start.board().empty_count(), 225);
    assert_eq!(a.board().get(Coord::new(14, 14)), Cell::Empty);
    assert_eq!(b.board().get(Coord::new(0, 0)), Cell::Empty);
}

#[test]
fn test_independent_games_across_threads() {
    let handles: Vec<_> = (0..4i64)
        .map(|row| {
            std::thread::spawn(move || {
                let moves: Vec<_> = (0..4).flat_map(|c| [(row, c), (row + 5, c)]).collect();
                let state = play(GameState::new(15), &moves);
                apply_move(&state, row, 4).unwrap()
            })
        })
        .collect();

    for handle in handles {
        let result = handle.join().unwrap();
        assert_eq!(result.outcome, Outcome::Win);
        assert_eq!(result.state.winner(), Some(Player::One));
    }
}

// =============================================================================
// Snapshot Round Trips
// =============================================================================

#[test]
fn test_reloaded_snapshot_plays_on() {
    let moves: Vec<_> = (0..4).flat_map(|c| [(7, c), (8, c)]).collect();
    let state = play(GameState::new(15), &moves);

    let json = serde_json::to_string(&state).unwrap();
    let reloaded: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(reloaded.last_move(), Some(Coord::new(8, 3)));
    assert_eq!(reloaded.move_count(), 8);

    let result = apply_move(&reloaded, 7, 4).unwrap();
    assert_eq!(result.outcome, Outcome::Win);
}

#[test]
fn test_malformed_snapshot_never_reaches_engine() {
    let empty_cells = r#"{"board":{"size":15,"cells":[]},"current_player":"One","game_over":false,"winner":null,"last_move":null,"move_count":0}"#;
    assert!(serde_json::from_str::<GameState>(empty_cells).is_err());

    let mut value = serde_json::to_value(GameState::new(5)).unwrap();
    value["board"]["size"] = serde_json::json!(6);
    assert!(serde_json::from_value::<GameState>(value).is_err());
}
