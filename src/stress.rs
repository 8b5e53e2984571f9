//! Stress harness: many independent matches under scheduling contention.
//!
//! Every match runs its own gate and two agent threads; several matches run
//! at once on a rayon pool. Each finished move log is replayed from an empty
//! board, which doubles as a serializability check on the gate.

use crate::error::MatchError;
use crate::policy::{Policy, PolicyKind};
use crate::runner::{MatchReport, MatchRunner};
use rayon::prelude::*;
use serde::Serialize;
use strictly_board::{Player, Status};
use tracing::{debug, info, instrument, warn};

/// Policy pairings cycled through by match index.
pub const PAIRINGS: [(PolicyKind, PolicyKind); 4] = [
    (PolicyKind::Sequential, PolicyKind::Random),
    (PolicyKind::Random, PolicyKind::Sequential),
    (PolicyKind::Random, PolicyKind::Random),
    (PolicyKind::Sequential, PolicyKind::Sequential),
];

/// Aggregate outcome of a stress run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StressSummary {
    /// Matches completed and verified.
    pub matches: usize,
    /// Matches won by X.
    pub x_wins: usize,
    /// Matches won by O.
    pub o_wins: usize,
    /// Drawn matches.
    pub draws: usize,
    /// Accepted moves across all matches.
    pub total_moves: usize,
    /// Longest match, in accepted moves.
    pub longest: usize,
}

impl StressSummary {
    fn record(&mut self, report: &MatchReport) {
        self.matches += 1;
        self.total_moves += report.moves.len();
        self.longest = self.longest.max(report.moves.len());
        match report.status {
            Status::Won(Player::X) => self.x_wins += 1,
            Status::Won(Player::O) => self.o_wins += 1,
            Status::Draw => self.draws += 1,
            Status::InProgress => {}
        }
    }

    fn merge(self, other: Self) -> Self {
        Self {
            matches: self.matches + other.matches,
            x_wins: self.x_wins + other.x_wins,
            o_wins: self.o_wins + other.o_wins,
            draws: self.draws + other.draws,
            total_moves: self.total_moves + other.total_moves,
            longest: self.longest.max(other.longest),
        }
    }
}

impl std::fmt::Display for StressSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} matches: X won {}, O won {}, {} draws ({} moves, longest {})",
            self.matches, self.x_wins, self.o_wins, self.draws, self.total_moves, self.longest
        )
    }
}

/// Plays match number `index` with its pairing and seed, then verifies it.
#[instrument]
pub fn play_one(index: usize, base_seed: u64) -> Result<MatchReport, MatchError> {
    let (x_kind, o_kind) = PAIRINGS[index % PAIRINGS.len()];
    let seed = base_seed.wrapping_add(index as u64);
    let runner = MatchRunner::new(
        Policy::build(x_kind, Some(seed)),
        Policy::build(o_kind, Some(seed.wrapping_mul(31).wrapping_add(7))),
    );

    let report = runner.run()?;
    if !report.status.is_terminal() {
        return Err(MatchError::InvariantViolation {
            description: format!("match {} ended without a terminal status", index),
        });
    }
    report.verify()?;
    debug!(index, status = %report.status, "Match verified");
    Ok(report)
}

/// Runs `matches` matches on a pool of `parallel` worker threads.
///
/// Stops handing out new matches after the first failure and returns it.
#[instrument]
pub fn run_stress(
    matches: usize,
    parallel: usize,
    base_seed: u64,
) -> Result<StressSummary, MatchError> {
    let workers = parallel.clamp(1, matches.max(1));
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("stress-{i}"))
        .build()?;

    info!(matches, workers, "Starting stress run");
    let summary = pool.install(|| {
        (0..matches)
            .into_par_iter()
            .map(|index| {
                play_one(index, base_seed).inspect_err(|err| {
                    warn!(index, error = %err, "Stress match failed");
                })
            })
            .try_fold(StressSummary::default, |mut summary, report| {
                summary.record(&report?);
                Ok::<_, MatchError>(summary)
            })
            .try_reduce(StressSummary::default, |left, right| Ok(left.merge(right)))
    })?;

    info!(%summary, "Stress run complete");
    Ok(summary)
}
