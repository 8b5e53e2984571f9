//! Command-line interface for strictly_duel.

use clap::{Parser, Subcommand};

/// Strictly Duel - two threads, one board, strict turns
#[derive(Parser, Debug)]
#[command(name = "strictly_duel")]
#[command(about = "Two-thread tic-tac-toe with a mutex/condvar turn gate", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one match and print the result
    Play {
        /// Path to a TOML match config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Policy for player X (sequential, random)
        #[arg(long)]
        x: Option<String>,

        /// Policy for player O (sequential, random)
        #[arg(long)]
        o: Option<String>,

        /// Seed for random policies
        #[arg(long)]
        seed: Option<u64>,

        /// Pause after each accepted move, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Do not draw the board
        #[arg(long)]
        no_render: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run many matches concurrently and verify every move log
    Stress {
        /// Number of matches
        #[arg(short, long, default_value = "1000")]
        matches: usize,

        /// Matches in flight at once
        #[arg(short, long, default_value = "8")]
        parallel: usize,

        /// Base seed; match i uses seed + i
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}
