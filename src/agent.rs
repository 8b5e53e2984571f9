//! Player agents: one per participant, each driven on its own strand.

use crate::error::AgentError;
use crate::gate::TurnGate;
use crate::policy::{Policy, PolicyKind, SelectMove};
use crate::render::Render;
use serde::Serialize;
use std::time::Duration;
use strictly_board::{Move, Player, Rejection};
use tracing::{debug, info, instrument};

/// What an agent did over the course of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_new::new)]
pub struct AgentSummary {
    /// The agent's mark.
    pub player: Player,
    /// The agent's policy.
    pub policy: PolicyKind,
    /// Moves the gate accepted.
    pub accepted: usize,
    /// Moves the gate rejected as invalid or occupied.
    pub rejected: usize,
}

/// A participant that proposes moves until the match ends.
#[derive(Debug, Clone)]
pub struct PlayerAgent {
    player: Player,
    policy: Policy,
}

impl PlayerAgent {
    /// Creates an agent with an already resolved policy.
    pub fn new(player: Player, policy: Policy) -> Self {
        Self { player, policy }
    }

    /// Creates an agent from a policy name.
    ///
    /// Fails with [`AgentError::InvalidPolicy`] for an unknown name.
    #[instrument]
    pub fn from_name(player: Player, policy: &str, seed: Option<u64>) -> Result<Self, AgentError> {
        let policy = Policy::from_name(policy, seed)?;
        Ok(Self::new(player, policy))
    }

    /// The agent's mark.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The agent's policy kind.
    pub fn policy(&self) -> PolicyKind {
        self.policy.kind()
    }

    /// Plays until the match is terminal or abandoned.
    ///
    /// Each cycle takes a snapshot, asks the policy for a candidate and
    /// submits it. Invalid and occupied candidates are retried; the board
    /// is rendered and the optional `pace` delay is slept outside the gate's
    /// lock after every accepted move.
    #[instrument(
        skip(self, gate, renderer),
        fields(player = %self.player, policy = %self.policy.kind())
    )]
    pub fn run(mut self, gate: &TurnGate, renderer: &dyn Render, pace: Duration) -> AgentSummary {
        let mut summary = AgentSummary::new(self.player, self.policy.kind(), 0, 0);

        loop {
            let snapshot = gate.snapshot();
            let Some(cell) = self.policy.propose(&snapshot.board) else {
                debug!("No candidate left");
                break;
            };

            match gate.submit_move(Move::at(self.player, cell)) {
                Ok(accepted) => {
                    summary.accepted += 1;
                    renderer.render(&accepted.snapshot);
                    if !pace.is_zero() {
                        std::thread::sleep(pace);
                    }
                    if accepted.status.is_terminal() {
                        break;
                    }
                }
                Err(Rejection::InvalidCoordinates { .. } | Rejection::CellOccupied { .. }) => {
                    summary.rejected += 1;
                }
                // submit_move waits for the turn instead of returning OutOfTurn.
                Err(rejection @ Rejection::OutOfTurn { .. }) => {
                    debug!(%rejection, "Retrying after unexpected rejection");
                    summary.rejected += 1;
                }
                Err(rejection @ (Rejection::GameOver | Rejection::Abandoned)) => {
                    debug!(%rejection, "Stopping");
                    break;
                }
            }
        }

        info!(accepted = summary.accepted, rejected = summary.rejected, "Agent finished");
        summary
    }
}
