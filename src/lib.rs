//! Strictly Duel - two players, two threads, one board
//!
//! Each player runs on its own thread and submits moves through a shared
//! [`TurnGate`]. The gate holds the only copy of the match behind a mutex
//! and uses a condition variable to hand the turn back and forth, so moves
//! alternate strictly no matter how the threads are scheduled.
//!
//! # Architecture
//!
//! - **Board**: pure state, rules and invariants (`strictly_board` crate)
//! - **Gate**: mutual exclusion plus turn signalling around the match
//! - **Agents**: move-selection policies driving one player each
//! - **Runner**: spawns both agents, joins them, reports the outcome
//!
//! # Example
//!
//! ```no_run
//! use strictly_duel::{MatchConfig, MatchRunner};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = MatchConfig::headless("sequential", "random", Some(42));
//! let report = MatchRunner::from_config(&config)?.run()?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod agent;
mod config;
mod error;
mod gate;
mod policy;
mod render;
mod runner;
mod stress;

// Crate-level exports - Gate
pub use gate::{Accepted, Snapshot, TurnGate};

// Crate-level exports - Agents and policies
pub use agent::{AgentSummary, PlayerAgent};
pub use policy::{Policy, PolicyKind, RandomPolicy, SelectMove, Sequential};

// Crate-level exports - Running matches
pub use runner::{MatchReport, MatchRunner};
pub use stress::{PAIRINGS, StressSummary, play_one, run_stress};

// Crate-level exports - Rendering
pub use render::{ConsoleRenderer, NullRenderer, Render, frame};

// Crate-level exports - Configuration and errors
pub use config::{ConfigError, MatchConfig};
pub use error::{AgentError, MatchError};

// Crate-level exports - Board types
pub use strictly_board::{Board, Cell, MatchState, Move, Player, Rejection, Square, Status};
