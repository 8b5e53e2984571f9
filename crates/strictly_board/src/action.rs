//! Moves and the reasons a move can be turned away.
//!
//! Moves carry raw coordinates exactly as a player proposed them, so an
//! out-of-range proposal is representable and can be rejected explicitly.

use super::{Cell, Player};
use serde::{Deserialize, Serialize};

/// A player's proposal to mark `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Proposed row, unchecked.
    pub row: usize,
    /// Proposed column, unchecked.
    pub col: usize,
}

impl Move {
    /// Builds a move onto an already validated cell.
    pub fn at(player: Player, cell: Cell) -> Self {
        Self::new(player, cell.row(), cell.col())
    }

    /// The target cell, if the coordinates are on the board.
    pub fn cell(&self) -> Option<Cell> {
        Cell::new(self.row, self.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.player, self.row, self.col)
    }
}

/// Why a move was not applied. A rejection never changes state.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::Error,
)]
pub enum Rejection {
    /// Row or column outside `0..3`.
    #[display("Coordinates ({row}, {col}) are off the board")]
    InvalidCoordinates {
        /// Proposed row.
        row: usize,
        /// Proposed column.
        col: usize,
    },

    /// The target cell already carries a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Proposed row.
        row: usize,
        /// Proposed column.
        col: usize,
    },

    /// The match has already reached a terminal status.
    #[display("Game is already over")]
    GameOver,

    /// It is not this player's turn. Only produced by non-blocking submission.
    #[display("It's not {player}'s turn")]
    OutOfTurn {
        /// The player that tried to move.
        player: Player,
    },

    /// The match was abandoned before finishing.
    #[display("Match was abandoned")]
    Abandoned,
}

impl Rejection {
    /// True when retrying with another candidate can still succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Rejection::InvalidCoordinates { .. } | Rejection::CellOccupied { .. }
        )
    }
}
