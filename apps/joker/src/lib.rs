#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod console;
pub mod domain;
pub mod errors;
pub mod game_flow;
pub mod logging;
pub mod scoreboard;

pub use config::{Cli, ConfigError, RunConfig};
pub use errors::{DomainError, ValidationKind};
pub use game_flow::{Game, GameError, GameOutcome, PlayerAgent, ScoreSink};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    joker_test_support::logging::init();
}
