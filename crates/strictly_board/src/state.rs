//! Match state: board, turn and status.
//!
//! `MatchState` holds no synchronization of its own. It is the single
//! transition function that the turn gate calls from inside its critical
//! section, so every mutation of a match goes through [`MatchState::apply`].

use super::rules::outcome_after;
use super::{Board, Move, Player, Rejection, Status};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete state of one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub(crate) board: Board,
    pub(crate) active_player: Player,
    pub(crate) status: Status,
    pub(crate) history: Vec<Move>,
}

impl MatchState {
    /// Creates a fresh match with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active_player: Player::X,
            status: Status::InProgress,
            history: Vec::new(),
        }
    }

    /// Rebuilds a match by applying `moves` in order.
    ///
    /// Stops at the first rejected move and returns its rejection.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, Rejection> {
        let mut state = Self::new();
        for mov in moves {
            state.apply(*mov)?;
        }
        Ok(state)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose move is accepted next.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Returns the match status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Accepted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Validates and applies one move.
    ///
    /// Checks run in order: terminal status, turn, coordinates, occupancy.
    /// On acceptance the mark is written, the outcome is evaluated (win
    /// before draw), the turn flips and the move is logged. Any rejection
    /// leaves `self` untouched.
    #[instrument(skip(self), fields(active = %self.active_player))]
    pub fn apply(&mut self, mov: Move) -> Result<Status, Rejection> {
        if self.status.is_terminal() {
            return Err(Rejection::GameOver);
        }
        if mov.player != self.active_player {
            return Err(Rejection::OutOfTurn { player: mov.player });
        }
        let cell = mov.cell().ok_or(Rejection::InvalidCoordinates {
            row: mov.row,
            col: mov.col,
        })?;
        self.board
            .place(cell, mov.player)
            .map_err(|_| Rejection::CellOccupied {
                row: mov.row,
                col: mov.col,
            })?;

        self.status = outcome_after(&self.board, mov.player);
        self.active_player = mov.player.opponent();
        self.history.push(mov);

        debug!(%mov, status = ?self.status, "Move applied");
        Ok(self.status)
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}
