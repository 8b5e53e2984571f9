//! Outcome rules for the board.
//!
//! Pure functions over [`Board`](super::Board). Win detection is always
//! consulted before draw detection; see [`outcome_after`].

pub mod draw;
pub mod win;

pub use draw::{check_draw, is_full};
pub use win::{check_winner, evaluate, LineCheck, LINES};

use super::{Board, Player, Status};
use tracing::instrument;

/// Status of the board right after `mover` placed a mark.
///
/// The win check for the mover is authoritative; the draw check only runs
/// when that move did not complete a line.
#[instrument(skip(board))]
pub fn outcome_after(board: &Board, mover: Player) -> Status {
    if evaluate(board, mover) == LineCheck::Won {
        Status::Won(mover)
    } else if check_draw(board) {
        Status::Draw
    } else {
        Status::InProgress
    }
}
