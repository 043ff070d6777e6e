//! Prompt rendering for the player to move.

use crate::core::GameState;

/// Render the instructions shown to the player whose turn it is.
///
/// The board is printed with the numeric cell codes from `Board`'s
/// `Display` implementation so the legend and the grid always agree.
#[must_use]
pub fn render_prompt(state: &GameState) -> String {
    let size = state.board().size();
    let player = state.current_player();
    format!(
        "This is a {size}x{size} gomoku board. 0 marks an empty cell, 1 a stone of player 1 (black), 2 a stone of player 2 (white).\n\
         The current board is:\n{board}\n\
         It is player {code} ({colour})'s turn to move.\n\
         Give your move as (row,col), with both indices starting from 0. For example: (7,7).",
        board = state.board(),
        code = player.code(),
        colour = player.colour(),
    )
}
