//! Error types for agents and match runs.
//!
//! In-game rejections are not errors at this level: they are
//! [`strictly_board::Rejection`] values handled inside each agent's loop.

use derive_more::{Display, Error};
use strictly_board::Player;

/// Failure to build a player agent.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum AgentError {
    /// The named move-selection policy does not exist.
    #[display("Unknown move-selection policy '{name}' (expected one of: {expected})")]
    InvalidPolicy {
        /// Name as supplied.
        name: String,
        /// Comma-separated list of known policy names.
        expected: String,
    },
}

/// Failure of a match as a whole.
#[derive(Debug, Display, Error)]
pub enum MatchError {
    /// An agent could not be constructed.
    #[display("Agent setup failed: {source}")]
    Agent {
        /// Underlying agent error.
        source: AgentError,
    },

    /// The OS refused to start a player thread.
    #[display("Failed to start thread for player {player}: {source}")]
    Spawn {
        /// Player whose thread failed to start.
        player: Player,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A player thread panicked.
    #[display("Player {player} thread panicked")]
    AgentPanicked {
        /// Player whose thread panicked.
        player: Player,
    },

    /// The stress worker pool could not be built.
    #[display("Failed to build stress worker pool: {source}")]
    Pool {
        /// Underlying rayon error.
        source: rayon::ThreadPoolBuildError,
    },

    /// The recorded move log failed an invariant check.
    #[display("Match log failed invariant check: {description}")]
    InvariantViolation {
        /// Descriptions of the failed invariants.
        description: String,
    },
}

impl From<AgentError> for MatchError {
    fn from(source: AgentError) -> Self {
        MatchError::Agent { source }
    }
}

impl From<rayon::ThreadPoolBuildError> for MatchError {
    fn from(source: rayon::ThreadPoolBuildError) -> Self {
        MatchError::Pool { source }
    }
}
