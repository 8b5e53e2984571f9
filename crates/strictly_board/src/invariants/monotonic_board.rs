//! Monotonic board invariant: cells never change once set.

use super::super::{Board, MatchState};
use super::Invariant;

/// Invariant: every mark on the board was placed by exactly one logged
/// move onto an empty cell.
///
/// Verified by replaying the history onto an empty board and comparing.
pub struct MonotonicBoardInvariant;

impl Invariant<MatchState> for MonotonicBoardInvariant {
    fn holds(state: &MatchState) -> bool {
        let mut reconstructed = Board::new();

        for mov in state.history() {
            let Some(cell) = mov.cell() else {
                return false;
            };
            if reconstructed.place(cell, mov.player).is_err() {
                return false;
            }
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board cells are write-once and match the move log"
    }
}
