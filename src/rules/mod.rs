//! Game rules: win and draw detection, and the move engine.
//!
//! All functions here are pure: they read a `GameState` or `Board` and
//! return new values without touching their inputs.

pub mod win;
pub mod draw;
pub mod engine;

pub use win::{is_winning_move, run_length, winning_line, Direction, WinningLine};
pub use draw::is_draw;
pub use engine::{apply_move, MoveEngine, MoveResult, Outcome};
