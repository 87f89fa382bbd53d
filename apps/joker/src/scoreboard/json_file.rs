use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::table::ScoreTable;
use crate::game_flow::{HandRowEntry, ScoreSink, SetRowEntry, SinkError};

/// Score table mirrored to a JSON file after every row.
///
/// Each write goes to a sibling temp file that is then renamed over the
/// target, so the file always holds a complete document.
#[derive(Debug)]
pub struct JsonScoreFile {
    path: PathBuf,
    table: ScoreTable,
}

impl JsonScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            table: ScoreTable::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn table(&self) -> &ScoreTable {
        &self.table
    }

    fn flush(&self) -> Result<(), SinkError> {
        let body = serde_json::to_string_pretty(&self.table.to_json())?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, body)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), rows = self.table.rows().len(), "Score file written");
        Ok(())
    }
}

impl ScoreSink for JsonScoreFile {
    fn record_hand_row(&mut self, entries: &[HandRowEntry]) -> Result<(), SinkError> {
        self.table.record_hand_row(entries)?;
        self.flush()
    }

    fn record_set_row(&mut self, entries: &[SetRowEntry]) -> Result<(), SinkError> {
        self.table.record_set_row(entries)?;
        self.flush()
    }
}
