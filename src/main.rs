//! Strictly Duel - CLI
//!
//! Plays a single match between two threaded agents, or stress-tests the
//! turn gate with many concurrent matches.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_duel::{MatchConfig, MatchRunner, run_stress};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_thread_names(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            x,
            o,
            seed,
            delay_ms,
            no_render,
            json,
        } => {
            let mut config = match config {
                Some(path) => MatchConfig::from_file(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => MatchConfig::default(),
            };
            if let Some(x) = x {
                config.set_x_policy(x);
            }
            if let Some(o) = o {
                config.set_o_policy(o);
            }
            if seed.is_some() {
                config.set_seed(seed);
            }
            if let Some(ms) = delay_ms {
                config.set_move_delay_ms(ms);
            }
            if no_render || json {
                config.set_render(false);
            }
            run_play(&config, json)
        }
        Command::Stress {
            matches,
            parallel,
            seed,
            json,
        } => run_stress_cmd(matches, parallel, seed, json),
    }
}

/// Play one match and print the report
#[instrument(skip(config))]
fn run_play(config: &MatchConfig, json: bool) -> Result<()> {
    info!(x = %config.x_policy(), o = %config.o_policy(), "Starting match");
    let report = MatchRunner::from_config(config)?.run()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("\n{}", report);
    }
    Ok(())
}

/// Run the stress harness and print the summary
#[instrument]
fn run_stress_cmd(matches: usize, parallel: usize, seed: u64, json: bool) -> Result<()> {
    let summary = run_stress(matches, parallel, seed)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary);
    }
    Ok(())
}
