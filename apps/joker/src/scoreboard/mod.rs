//! `ScoreSink` implementations: the in-memory score table and its JSON file.

mod json_file;
mod table;


pub use json_file::JsonScoreFile;
pub use table::{ScoreRow, ScoreTable};
