//! Match runner: two agents, two named threads, one gate.

use crate::agent::{AgentSummary, PlayerAgent};
use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::gate::TurnGate;
use crate::policy::Policy;
use crate::render::{ConsoleRenderer, NullRenderer, Render};
use serde::Serialize;
use std::thread;
use std::time::Duration;
use strictly_board::{DuelInvariants, InvariantSet, MatchState, Move, Player, Status};
use tracing::{error, info, instrument};

/// Final result of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    /// Terminal status, or `InProgress` if the match was abandoned.
    pub status: Status,
    /// Accepted moves in the order the gate applied them.
    pub moves: Vec<Move>,
    /// Per-agent summaries, X first.
    pub agents: Vec<AgentSummary>,
}

impl MatchReport {
    /// Winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// Checks that the recorded move log replays to the reported status.
    ///
    /// Replays the log from an empty board; a log that could only have come
    /// from interleaved writes fails to replay or disagrees with `status`.
    #[instrument(skip(self), fields(moves = self.moves.len()))]
    pub fn verify(&self) -> Result<(), MatchError> {
        let replayed = MatchState::replay(&self.moves).map_err(|rejection| {
            MatchError::InvariantViolation {
                description: format!("log does not replay: {}", rejection),
            }
        })?;
        if replayed.status() != self.status {
            return Err(MatchError::InvariantViolation {
                description: format!(
                    "replayed status {:?} differs from reported {:?}",
                    replayed.status(),
                    self.status
                ),
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for MatchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Status::InProgress => write!(f, "Match abandoned after {} moves", self.moves.len()),
            status => write!(f, "{}", status),
        }
    }
}

/// Runs one match between two agents on separate threads.
pub struct MatchRunner {
    player_x: PlayerAgent,
    player_o: PlayerAgent,
    renderer: Box<dyn Render>,
    pace: Duration,
}

impl std::fmt::Debug for MatchRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchRunner")
            .field("player_x", &self.player_x)
            .field("player_o", &self.player_o)
            .field("pace", &self.pace)
            .finish_non_exhaustive()
    }
}

impl MatchRunner {
    /// Creates a headless runner: no rendering, no pacing.
    ///
    /// The first policy plays X and the second plays O.
    pub fn new(x_policy: Policy, o_policy: Policy) -> Self {
        Self {
            player_x: PlayerAgent::new(Player::X, x_policy),
            player_o: PlayerAgent::new(Player::O, o_policy),
            renderer: Box::new(NullRenderer),
            pace: Duration::ZERO,
        }
    }

    /// Resolves both policies from a config.
    ///
    /// Both policies are resolved before any thread exists, so an invalid
    /// policy name never leaves one agent waiting for a turn that cannot come.
    /// An unknown name for either player therefore refuses the whole match
    /// with [`MatchError::Agent`]; the other player never starts either.
    #[instrument(skip(config), fields(x = %config.x_policy(), o = %config.o_policy()))]
    pub fn from_config(config: &MatchConfig) -> Result<Self, MatchError> {
        let x_policy = Policy::from_name(config.x_policy(), config.x_seed())?;
        let o_policy = Policy::from_name(config.o_policy(), config.o_seed())?;

        let runner = Self::new(x_policy, o_policy).with_pace(config.move_delay());
        Ok(if *config.render() {
            runner.with_renderer(Box::new(ConsoleRenderer::new()))
        } else {
            runner
        })
    }

    /// Replaces the renderer.
    pub fn with_renderer(mut self, renderer: Box<dyn Render>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Sets the pause each agent takes after an accepted move.
    pub fn with_pace(mut self, pace: Duration) -> Self {
        self.pace = pace;
        self
    }

    /// Runs the match to completion.
    #[instrument(skip(self), fields(x = %self.player_x.policy(), o = %self.player_o.policy()))]
    pub fn run(self) -> Result<MatchReport, MatchError> {
        let gate = TurnGate::new();
        self.run_on(&gate)
    }

    /// Runs the match on a caller-supplied gate.
    ///
    /// Blocks until both agent threads have returned, then checks the
    /// gate's final state against every match invariant.
    #[instrument(skip_all)]
    pub fn run_on(self, gate: &TurnGate) -> Result<MatchReport, MatchError> {
        let Self {
            player_x,
            player_o,
            renderer,
            pace,
        } = self;
        let renderer: &dyn Render = &*renderer;

        info!("Starting match");
        let summaries = thread::scope(|scope| -> Result<Vec<AgentSummary>, MatchError> {
            let x = thread::Builder::new()
                .name("player-X".to_string())
                .spawn_scoped(scope, move || player_x.run(gate, renderer, pace))
                .map_err(|source| spawn_failed(gate, Player::X, source))?;

            let o = match thread::Builder::new()
                .name("player-O".to_string())
                .spawn_scoped(scope, move || player_o.run(gate, renderer, pace))
            {
                Ok(handle) => handle,
                Err(source) => {
                    let err = spawn_failed(gate, Player::O, source);
                    // X returns once the gate is abandoned.
                    let _ = x.join();
                    return Err(err);
                }
            };

            let x = x
                .join()
                .map_err(|_| MatchError::AgentPanicked { player: Player::X });
            let o = o
                .join()
                .map_err(|_| MatchError::AgentPanicked { player: Player::O });
            Ok(vec![x?, o?])
        })?;

        let state = gate.state();
        DuelInvariants::check_all(&state).map_err(|violations| {
            error!(?violations, "Final match state is inconsistent");
            MatchError::InvariantViolation {
                description: violations
                    .iter()
                    .map(|v| v.description.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            }
        })?;

        let report = MatchReport {
            status: state.status(),
            moves: state.history().to_vec(),
            agents: summaries,
        };
        info!(status = %report.status, moves = report.moves.len(), "Match complete");
        Ok(report)
    }
}

fn spawn_failed(gate: &TurnGate, player: Player, source: std::io::Error) -> MatchError {
    error!(%player, %source, "Failed to start player thread");
    gate.abandon();
    MatchError::Spawn { player, source }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::PolicyKind;

    #[test]
    fn test_report_display() {
        let report = MatchReport {
            status: Status::Won(Player::O),
            moves: Vec::new(),
            agents: Vec::new(),
        };
        assert_eq!(report.to_string(), "Player O wins!");

        let report = MatchReport {
            status: Status::Draw,
            ..report
        };
        assert_eq!(report.to_string(), "Draw!");
    }

    #[test]
    fn test_new_binds_x_then_o() {
        let runner = MatchRunner::new(
            Policy::build(PolicyKind::Random, Some(8)),
            Policy::build(PolicyKind::Random, Some(9)),
        );
        assert_eq!(runner.player_x.player(), Player::X);
        assert_eq!(runner.player_o.player(), Player::O);

        let report = runner.run().unwrap();
        assert!(report.status.is_terminal());
        assert_eq!(report.agents[0].player, Player::X);
        assert_eq!(report.agents[1].player, Player::O);
    }

    #[test]
    fn test_verify_rejects_forged_status() {
        let report = MatchReport {
            status: Status::Draw,
            moves: vec![Move::new(Player::X, 0, 0)],
            agents: Vec::new(),
        };
        assert!(matches!(
            report.verify(),
            Err(MatchError::InvariantViolation { .. })
        ));
    }
}
