//! Runtime configuration of the `joker` binary.
//!
//! Values come from command-line flags first, then environment variables,
//! then defaults:
//!
//! | flag           | env var            | default          |
//! |----------------|--------------------|------------------|
//! | `--seed`       | `JOKER_SEED`       | random           |
//! | `--score-file` | `JOKER_SCORE_FILE` | `game_data.json` |
//! | `--log-level`  | `JOKER_LOG`        | `RUST_LOG`, else `warn` |

use std::env;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

pub const DEFAULT_SCORE_FILE: &str = "game_data.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} has an invalid value {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Command line of the `joker` binary.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "joker", version, about = "Four-player Joker trick-taking card game")]
pub struct Cli {
    /// Seed for seating and dealing; the same seed replays the same deals.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where the score table is written as JSON.
    #[arg(long, value_name = "PATH")]
    pub score_file: Option<PathBuf>,

    /// Tracing filter, e.g. `info` or `joker=debug`.
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Player names in order; asked interactively when omitted.
    #[arg(long = "player", value_name = "NAME")]
    pub players: Vec<String>,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u64,
    pub score_file: PathBuf,
    pub log_filter: Option<String>,
    pub players: Vec<String>,
}

impl RunConfig {
    /// Parse the process arguments and environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources(Cli::parse(), |key| env::var(key).ok())
    }

    /// Merge `cli` with variables looked up through `env`.
    pub fn from_sources(
        cli: Cli,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let seed = match cli.seed {
            Some(seed) => seed,
            None => match env("JOKER_SEED") {
                Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                    var: "JOKER_SEED",
                    value: raw.clone(),
                })?,
                None => rand::random(),
            },
        };

        let score_file = cli
            .score_file
            .or_else(|| env("JOKER_SCORE_FILE").filter(|v| !v.trim().is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCORE_FILE));

        let log_filter = cli
            .log_level
            .or_else(|| env("JOKER_LOG"))
            .filter(|v| !v.trim().is_empty());

        Ok(Self {
            seed,
            score_file,
            log_filter,
            players: cli.players,
        })
    }
}
