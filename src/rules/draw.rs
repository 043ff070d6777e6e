//! Draw detection.

use tracing::instrument;

use crate::core::Board;

/// A full board is a draw once the last move has been ruled out as a win.
#[must_use]
#[instrument(level = "trace", skip(board), fields(size = board.size()), ret)]
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}
