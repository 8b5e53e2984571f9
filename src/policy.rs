//! Move-selection policies.
//!
//! A policy proposes the next candidate cell for its agent. Policies never
//! touch the shared match: they see a snapshot of the board and the gate
//! decides whether the candidate is accepted.

use crate::error::AgentError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use strictly_board::{Board, Cell, SIZE};
use strum::IntoEnumIterator;
use tracing::{instrument, trace};

/// The single capability every policy provides.
pub trait SelectMove {
    /// Proposes the next cell to try, or `None` when there is nothing left
    /// to propose.
    fn propose(&mut self, board: &Board) -> Option<Cell>;
}

/// Names of the available policies.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// First open cell in row-major order.
    Sequential,
    /// Uniformly random cell, occupied or not.
    Random,
}

impl PolicyKind {
    /// Parses a policy name, case-insensitively.
    #[instrument]
    pub fn from_name(name: &str) -> Result<Self, AgentError> {
        name.trim()
            .parse()
            .map_err(|_| AgentError::InvalidPolicy {
                name: name.to_string(),
                expected: PolicyKind::iter()
                    .map(|kind| kind.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Scans cells in row-major order and proposes the first open one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequential;

impl SelectMove for Sequential {
    fn propose(&mut self, board: &Board) -> Option<Cell> {
        board.open_cells().next()
    }
}

/// Proposes a uniformly random cell each cycle, ignoring occupancy.
///
/// Occupied proposals are rejected by the gate and simply retried.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: ChaCha8Rng,
}

impl RandomPolicy {
    /// Creates a reproducible policy from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a policy seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl SelectMove for RandomPolicy {
    fn propose(&mut self, _board: &Board) -> Option<Cell> {
        let row = self.rng.gen_range(0..SIZE);
        let col = self.rng.gen_range(0..SIZE);
        trace!(row, col, "Random candidate");
        Cell::new(row, col)
    }
}

/// A resolved move-selection policy.
#[derive(Debug, Clone)]
pub enum Policy {
    /// See [`Sequential`].
    Sequential(Sequential),
    /// See [`RandomPolicy`].
    Random(RandomPolicy),
}

impl Policy {
    /// Builds the policy for `kind`. `seed` only affects [`PolicyKind::Random`].
    #[instrument]
    pub fn build(kind: PolicyKind, seed: Option<u64>) -> Self {
        match kind {
            PolicyKind::Sequential => Policy::Sequential(Sequential),
            PolicyKind::Random => Policy::Random(
                seed.map_or_else(RandomPolicy::from_entropy, RandomPolicy::seeded),
            ),
        }
    }

    /// Parses `name` and builds the policy.
    pub fn from_name(name: &str, seed: Option<u64>) -> Result<Self, AgentError> {
        Ok(Self::build(PolicyKind::from_name(name)?, seed))
    }

    /// Which kind of policy this is.
    pub fn kind(&self) -> PolicyKind {
        match self {
            Policy::Sequential(_) => PolicyKind::Sequential,
            Policy::Random(_) => PolicyKind::Random,
        }
    }
}

impl SelectMove for Policy {
    fn propose(&mut self, board: &Board) -> Option<Cell> {
        match self {
            Policy::Sequential(policy) => policy.propose(board),
            Policy::Random(policy) => policy.propose(board),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_board::Player;

    #[test]
    fn test_sequential_skips_occupied() {
        let mut board = Board::new();
        board.place(Cell::new(0, 0).unwrap(), Player::X).unwrap();
        board.place(Cell::new(0, 1).unwrap(), Player::O).unwrap();
        assert_eq!(Sequential.propose(&board), Cell::new(0, 2));
    }

    #[test]
    fn test_sequential_full_board_proposes_nothing() {
        let mut board = Board::new();
        for cell in Cell::ALL {
            board.place(cell, Player::X).unwrap();
        }
        assert_eq!(Sequential.propose(&board), None);
    }

    #[test]
    fn test_random_is_reproducible_and_in_range() {
        let board = Board::new();
        let mut a = RandomPolicy::seeded(7);
        let mut b = RandomPolicy::seeded(7);
        for _ in 0..50 {
            let cell = a.propose(&board);
            assert!(cell.is_some());
            assert_eq!(cell, b.propose(&board));
        }
    }

    #[test]
    fn test_random_covers_every_cell() {
        let board = Board::new();
        let mut policy = RandomPolicy::seeded(11);
        let mut seen = [false; 9];
        for _ in 0..500 {
            if let Some(cell) = policy.propose(&board) {
                seen[cell.index()] = true;
            }
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(PolicyKind::from_name("Sequential"), Ok(PolicyKind::Sequential));
        assert_eq!(PolicyKind::from_name(" random "), Ok(PolicyKind::Random));
        let err = PolicyKind::from_name("minimax").unwrap_err();
        assert_eq!(
            err,
            AgentError::InvalidPolicy {
                name: "minimax".to_string(),
                expected: "sequential, random".to_string(),
            }
        );
    }
}
