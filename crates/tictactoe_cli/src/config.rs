//! Game configuration loaded from TOML and command-line flags.

use crate::cli::PlayArgs;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use std::time::Duration;
use tictactoe_core::{GameMode, Mark};
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Game mode name or alias.
    #[serde(default = "default_mode")]
    mode: String,

    /// Mark for player 1.
    #[serde(default = "default_mark", deserialize_with = "deserialize_mark")]
    #[getter(copy)]
    mark: Mark,

    /// Pause before each computer move.
    #[serde(default = "default_delay_ms")]
    #[getter(copy)]
    computer_delay_ms: u64,

    /// Seed for computer players; fresh entropy when absent.
    #[serde(default)]
    #[getter(copy)]
    seed: Option<u64>,
}

fn default_mode() -> String {
    GameMode::default().to_string()
}

fn default_mark() -> Mark {
    Mark::X
}

/// Accepts the same spellings as `--mark`, in any case.
fn deserialize_mark<'de, D>(deserializer: D) -> Result<Mark, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse()
        .map_err(|_| serde::de::Error::custom(format!("invalid mark {:?}: use X or O", raw)))
}

fn default_delay_ms() -> u64 {
    500
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            mark: default_mark(),
            computer_delay_ms: default_delay_ms(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, mark = %config.mark, "Config loaded successfully");
        Ok(config)
    }

    /// Builds the effective configuration: the file named by `--config`
    /// (or defaults), then any flags given on the command line.
    #[instrument(skip(args))]
    pub fn resolve(args: &PlayArgs) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(mode) = &args.mode {
            config.mode = mode.clone();
        }
        if let Some(mark) = &args.mark {
            config.mark = mark
                .parse()
                .map_err(|_| ConfigError::new(format!("Invalid mark {:?}: use X or O", mark)))?;
        }
        if let Some(delay) = args.delay_ms {
            config.computer_delay_ms = delay;
        }
        if args.seed.is_some() {
            config.seed = args.seed;
        }

        debug!(?config, "Resolved configuration");
        Ok(config)
    }

    /// Returns the pacing delay before computer moves.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
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
