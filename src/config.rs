//! Match configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for one match.
///
/// Loaded from TOML; every field has a default so a partial file is fine.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Policy name for player X.
    #[serde(default = "default_x_policy")]
    x_policy: String,

    /// Policy name for player O.
    #[serde(default = "default_o_policy")]
    o_policy: String,

    /// Seed for random policies. `None` seeds from entropy.
    #[serde(default)]
    seed: Option<u64>,

    /// Pause after each accepted move, in milliseconds.
    #[serde(default = "default_move_delay_ms")]
    move_delay_ms: u64,

    /// Whether to draw the board after each move.
    #[serde(default = "default_render")]
    render: bool,
}

fn default_x_policy() -> String {
    "sequential".to_string()
}

fn default_o_policy() -> String {
    "random".to_string()
}

fn default_move_delay_ms() -> u64 {
    500
}

fn default_render() -> bool {
    true
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            x_policy: default_x_policy(),
            o_policy: default_o_policy(),
            seed: None,
            move_delay_ms: default_move_delay_ms(),
            render: default_render(),
        }
    }
}

impl MatchConfig {
    /// Headless configuration: no rendering, no delay.
    #[instrument(skip(x_policy, o_policy))]
    pub fn headless(
        x_policy: impl Into<String>,
        o_policy: impl Into<String>,
        seed: Option<u64>,
    ) -> Self {
        Self {
            x_policy: x_policy.into(),
            o_policy: o_policy.into(),
            seed,
            move_delay_ms: 0,
            render: false,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(x = %config.x_policy, o = %config.o_policy, "Config loaded successfully");
        Ok(config)
    }

    /// Pause after each accepted move.
    pub fn move_delay(&self) -> Duration {
        Duration::from_millis(self.move_delay_ms)
    }

    /// Seed for player X's random source.
    pub fn x_seed(&self) -> Option<u64> {
        self.seed
    }

    /// Seed for player O's random source, offset so it never mirrors X.
    pub fn o_seed(&self) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(0x9E37_79B9_7F4A_7C15))
    }

    /// Overrides player X's policy.
    pub fn set_x_policy(&mut self, name: impl Into<String>) -> &mut Self {
        self.x_policy = name.into();
        self
    }

    /// Overrides player O's policy.
    pub fn set_o_policy(&mut self, name: impl Into<String>) -> &mut Self {
        self.o_policy = name.into();
        self
    }

    /// Overrides the seed.
    pub fn set_seed(&mut self, seed: Option<u64>) -> &mut Self {
        self.seed = seed;
        self
    }

    /// Overrides the per-move delay.
    pub fn set_move_delay_ms(&mut self, ms: u64) -> &mut Self {
        self.move_delay_ms = ms;
        self
    }

    /// Enables or disables rendering.
    pub fn set_render(&mut self, render: bool) -> &mut Self {
        self.render = render;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
