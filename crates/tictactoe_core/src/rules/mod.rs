//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. The status is always recomputed
//! from the board, never stored independently of it.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use crate::{Board, GameStatus};
use tracing::instrument;

/// Evaluates the board: a won line first, then a full board, else in progress.
#[instrument]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(mark) = check_winner(board) {
        GameStatus::Won(mark)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
