//! Turn gate: the only path through which a match is mutated.
//!
//! A single [`Mutex`] guards the [`MatchState`]; a [`Condvar`] broadcasts
//! every turn change. A strand submitting out of turn sleeps on the condvar
//! (releasing the lock) and re-checks both the turn and the terminal status
//! after each wakeup, so a game that ends while it waits is observed inside
//! the same critical section that would have applied its move.

use serde::Serialize;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use strictly_board::{Board, MatchState, Move, Player, Rejection, Status};
use tracing::{debug, info, instrument, trace, warn};

/// Read-only copy of a match taken inside the critical section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Board at the time of capture.
    pub board: Board,
    /// Player whose move is accepted next.
    pub active_player: Player,
    /// Status at the time of capture.
    pub status: Status,
    /// Number of accepted moves so far.
    pub moves: usize,
    /// Most recently accepted move, if any.
    pub last_move: Option<Move>,
}

impl Snapshot {
    fn capture(state: &MatchState) -> Self {
        Self {
            board: state.board().clone(),
            active_player: state.active_player(),
            status: state.status(),
            moves: state.history().len(),
            last_move: state.history().last().copied(),
        }
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    /// Status right after the move.
    pub status: Status,
    /// Snapshot right after the move, suitable for rendering.
    pub snapshot: Snapshot,
}

#[derive(Debug)]
struct Table {
    state: MatchState,
    abandoned: bool,
}

impl Table {
    /// True while an out-of-turn submitter should keep sleeping.
    fn must_wait(&self, player: Player) -> bool {
        !self.abandoned
            && !self.state.status().is_terminal()
            && self.state.active_player() != player
    }
}

/// Serializes all access to one match and enforces strict alternation.
#[derive(Debug)]
pub struct TurnGate {
    table: Mutex<Table>,
    turn_changed: Condvar,
}

impl TurnGate {
    /// Creates a gate around a fresh match.
    #[instrument]
    pub fn new() -> Self {
        Self::with_state(MatchState::new())
    }

    /// Creates a gate around an existing match state.
    #[instrument(skip(state), fields(moves = state.history().len()))]
    pub fn with_state(state: MatchState) -> Self {
        Self {
            table: Mutex::new(Table {
                state,
                abandoned: false,
            }),
            turn_changed: Condvar::new(),
        }
    }

    // Every mutation is a single `MatchState::apply`, so a poisoned table is
    // still consistent.
    fn lock(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Submits a move, waiting for the submitter's turn if necessary.
    ///
    /// Returns immediately with [`Rejection::GameOver`] once the match is
    /// terminal, including when it becomes terminal during the wait. Bounds
    /// and occupancy are validated only once it is the submitter's turn.
    #[instrument(skip(self))]
    pub fn submit_move(&self, mov: Move) -> Result<Accepted, Rejection> {
        let table = self.lock();
        if table.must_wait(mov.player) {
            trace!(player = %mov.player, "Waiting for turn");
        }
        let table = self
            .turn_changed
            .wait_while(table, |table| table.must_wait(mov.player))
            .unwrap_or_else(PoisonError::into_inner);
        self.apply_locked(table, mov)
    }

    /// Submits a move without waiting.
    ///
    /// Behaves like [`TurnGate::submit_move`] except that an out-of-turn
    /// submission is rejected with [`Rejection::OutOfTurn`].
    #[instrument(skip(self))]
    pub fn try_submit_move(&self, mov: Move) -> Result<Accepted, Rejection> {
        let table = self.lock();
        self.apply_locked(table, mov)
    }

    fn apply_locked(
        &self,
        mut table: MutexGuard<'_, Table>,
        mov: Move,
    ) -> Result<Accepted, Rejection> {
        if table.abandoned {
            return Err(Rejection::Abandoned);
        }

        let status = table.state.apply(mov).inspect_err(|rejection| {
            debug!(%rejection, "Move rejected");
        })?;

        // The move is already committed, so a failed check abandons the
        // match and wakes the opponent before the panic unwinds.
        #[cfg(debug_assertions)]
        {
            use strictly_board::{DuelInvariants, InvariantSet};
            if let Err(violations) = DuelInvariants::check_all(&table.state) {
                table.abandoned = true;
                drop(table);
                self.turn_changed.notify_all();
                panic!("Match invariants violated: {violations:?}");
            }
        }

        let snapshot = Snapshot::capture(&table.state);
        drop(table);
        self.turn_changed.notify_all();

        if status.is_terminal() {
            info!(%status, moves = snapshot.moves, "Match finished");
        } else {
            debug!(next = %snapshot.active_player, "Turn passed");
        }
        Ok(Accepted { status, snapshot })
    }

    /// Returns a read-only copy of the current match.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.lock().state)
    }

    /// Returns the current status.
    pub fn status(&self) -> Status {
        self.lock().state.status()
    }

    /// Returns a copy of the accepted-move log.
    pub fn history(&self) -> Vec<Move> {
        self.lock().state.history().to_vec()
    }

    /// Returns a copy of the full match state.
    pub fn state(&self) -> MatchState {
        self.lock().state.clone()
    }

    /// True once [`TurnGate::abandon`] has been called.
    pub fn is_abandoned(&self) -> bool {
        self.lock().abandoned
    }

    /// Blocks until the match is terminal or abandoned, returning the status.
    #[instrument(skip(self))]
    pub fn wait_until_finished(&self) -> Status {
        let table = self
            .turn_changed
            .wait_while(self.lock(), |table| {
                !table.abandoned && !table.state.status().is_terminal()
            })
            .unwrap_or_else(PoisonError::into_inner);
        table.state.status()
    }

    /// Marks the match abandoned and wakes every waiter.
    ///
    /// Used when a player strand could not be started. The status is left
    /// as it is; all pending and future submissions get
    /// [`Rejection::Abandoned`].
    #[instrument(skip(self))]
    pub fn abandon(&self) {
        let mut table = self.lock();
        if table.abandoned {
            return;
        }
        table.abandoned = true;
        drop(table);
        warn!("Match abandoned");
        self.turn_changed.notify_all();
    }
}

impl Default for TurnGate {
    fn default() -> Self {
        Self::new()
    }
}
