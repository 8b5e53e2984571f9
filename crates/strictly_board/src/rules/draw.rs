//! Draw detection.

use super::super::{Board, Square};
use super::win::check_winner;
use tracing::instrument;

/// Checks if every cell is occupied.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().all(|s| s != Square::Empty)
}

/// A full board on which neither player holds a line.
///
/// Has no side effects. Callers deciding a move's outcome must run the win
/// check for the mover first; this function is never authoritative over it.
#[instrument(skip(board))]
pub fn check_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
