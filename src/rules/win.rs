//! Win detection.
//!
//! Only lines through the stone just placed can newly complete a run, so
//! the check walks outward from that stone along the four orientations
//! instead of scanning the whole board. Each side is walked at most
//! `RUN_LENGTH - 1` steps and stops at the first off-board or non-matching
//! cell. Runs longer than five (overlines) count as wins.

use smallvec::SmallVec;
use tracing::instrument;

use crate::core::{Board, Cell, Coord, Player, RUN_LENGTH};

/// Line orientation through a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
    /// Top-left to bottom-right (↘).
    Diagonal,
    /// Top-right to bottom-left (↙).
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Unit step `(d_row, d_col)` in the positive sense.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// Cells of a winning run, ordered from the negative end to the positive end.
pub type WinningLine = SmallVec<[Coord; 2 * RUN_LENGTH - 1]>;

/// Count `player`'s contiguous stones from `at` in one sense, excluding `at`.
fn extent(board: &Board, player: Player, at: Coord, d_row: isize, d_col: isize) -> usize {
    (1..RUN_LENGTH)
        .take_while(|&step| {
            board
                .offset(at, d_row, d_col, step)
                .is_some_and(|c| board.get(c) == Cell::Stone(player))
        })
        .count()
}

/// Length of `player`'s run through `at` along `direction`, counting `at`
/// itself. Each side contributes at most `RUN_LENGTH - 1`.
#[must_use]
pub fn run_length(board: &Board, player: Player, at: Coord, direction: Direction) -> usize {
    let (dr, dc) = direction.delta();
    1 + extent(board, player, at, dr, dc) + extent(board, player, at, -dr, -dc)
}

/// True if `player` holding `at` completes a run of at least `RUN_LENGTH`.
///
/// `at` must be on the board. It is counted as `player`'s stone whether or
/// not the board already shows it.
#[must_use]
#[instrument(level = "trace", skip(board), ret)]
pub fn is_winning_move(board: &Board, player: Player, at: Coord) -> bool {
    Direction::ALL
        .iter()
        .any(|&d| run_length(board, player, at, d) >= RUN_LENGTH)
}

/// The first winning run through `at`, if any.
///
/// Directions are tried in `Direction::ALL` order. The returned cells are
/// limited to the same window `is_winning_move` inspects.
#[must_use]
pub fn winning_line(board: &Board, player: Player, at: Coord) -> Option<WinningLine> {
    Direction::ALL.iter().find_map(|&direction| {
        let (dr, dc) = direction.delta();
        let back = extent(board, player, at, -dr, -dc);
        let forward = extent(board, player, at, dr, dc);
        if back + forward + 1 < RUN_LENGTH {
            return None;
        }

        let mut line = WinningLine::new();
        for step in (1..=back).rev() {
            line.extend(board.offset(at, -dr, -dc, step));
        }
        line.push(at);
        for step in 1..=forward {
            line.extend(board.offset(at, dr, dc, step));
        }
        Some(line)
    })
}
