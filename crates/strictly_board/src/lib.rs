//! Pure board logic for strictly_duel.
//!
//! This crate owns no threads and no locks. It defines the 3x3 board, the
//! match state transition ([`MatchState::apply`]), the outcome rules and
//! the invariants every recorded match must satisfy. Synchronization lives
//! in the `strictly_duel` crate's turn gate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod position;
mod state;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, Rejection};
pub use invariants::{
    AlternatingTurnInvariant, DuelInvariants, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, OutcomeConsistentInvariant,
};
pub use position::{Cell, SIZE};
pub use rules::{check_draw, check_winner, evaluate, is_full, outcome_after, LineCheck};
pub use state::MatchState;
pub use types::{Board, Player, Square, Status};
