//! Outcome consistency invariant: the status is the one the log implies.

use super::super::rules::outcome_after;
use super::super::{Board, MatchState, Status};
use super::Invariant;

/// Invariant: replaying the history with win-before-draw evaluation
/// produces the recorded status, and only the last move may be terminal.
///
/// This is the serializability check for a concurrently recorded log:
/// if two strands had ever interleaved inside the gate, the log would
/// either fail to replay or disagree with the stored status.
pub struct OutcomeConsistentInvariant;

impl Invariant<MatchState> for OutcomeConsistentInvariant {
    fn holds(state: &MatchState) -> bool {
        let mut board = Board::new();
        let mut status = Status::InProgress;

        for mov in state.history() {
            if status.is_terminal() {
                return false;
            }
            let Some(cell) = mov.cell() else {
                return false;
            };
            if board.place(cell, mov.player).is_err() {
                return false;
            }
            status = outcome_after(&board, mov.player);
        }

        status == state.status()
    }

    fn description() -> &'static str {
        "Status matches the outcome derived from the move log"
    }
}
