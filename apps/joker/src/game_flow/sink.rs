//! Score-table output of the game loop.

use serde::Serialize;
use thiserror::Error;

/// One seat's cell in a hand row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandRowEntry {
    pub name: String,
    pub bid: u8,
    pub score: i32,
}

/// One seat's cell in the row written after each set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetRowEntry {
    pub name: String,
    pub total: i32,
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("writing score file: {0}")]
    Io(#[from] std::io::Error),
    #[error("encoding score table: {0}")]
    Json(#[from] serde_json::Error),
}

/// Receives a row after every hand and after every set. Entries are in seat
/// order. A row must be fully stored before the call returns.
pub trait ScoreSink {
    fn record_hand_row(&mut self, entries: &[HandRowEntry]) -> Result<(), SinkError>;

    fn record_set_row(&mut self, entries: &[SetRowEntry]) -> Result<(), SinkError>;
}
