use serde_json::{Map, Value};

use crate::game_flow::{HandRowEntry, ScoreSink, SetRowEntry, SinkError};

/// One row of the score table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreRow {
    /// `"{bid}: {score}"` per seat.
    Hand(Vec<HandRowEntry>),
    /// Running totals per seat, followed by a divider.
    Set(Vec<SetRowEntry>),
}

impl ScoreRow {
    fn cells(&self) -> Vec<String> {
        match self {
            ScoreRow::Hand(entries) => entries
                .iter()
                .map(|e| format!("{}: {}", e.bid, e.score))
                .collect(),
            ScoreRow::Set(entries) => entries.iter().map(|e| e.total.to_string()).collect(),
        }
    }

    /// Object keyed by player name.
    fn to_json(&self) -> Value {
        let mut obj = Map::new();
        match self {
            ScoreRow::Hand(entries) => {
                for e in entries {
                    obj.insert(e.name.clone(), Value::from(format!("{}: {}", e.bid, e.score)));
                }
            }
            ScoreRow::Set(entries) => {
                for e in entries {
                    obj.insert(e.name.clone(), Value::from(e.total));
                }
            }
        }
        Value::Object(obj)
    }
}

/// Score table kept in memory, in play order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTable {
    names: Vec<String>,
    rows: Vec<ScoreRow>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[ScoreRow] {
        &self.rows
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    fn learn_names<'a>(&mut self, names: impl Iterator<Item = &'a String>) {
        if self.names.is_empty() {
            self.names = names.cloned().collect();
        }
    }

    /// JSON array of row objects.
    pub fn to_json(&self) -> Value {
        Value::Array(self.rows.iter().map(ScoreRow::to_json).collect())
    }

    /// Plain-text table with a divider under every set row.
    pub fn render(&self) -> String {
        const PADDING: usize = 5;

        let mut widths: Vec<usize> = self.names.iter().map(|n| n.chars().count()).collect();
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row.cells()) {
                *w = (*w).max(cell.chars().count());
            }
        }
        let widths: Vec<usize> = widths.iter().map(|w| w + 2 * PADDING).collect();

        let border = {
            let parts: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
            format!("+{}+", parts.join("+"))
        };
        let line = |cells: &[String]| {
            let parts: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(c, &w)| format!("{c:^w$}"))
                .collect();
            format!("|{}|", parts.join("|"))
        };

        let mut out = vec![border.clone(), line(&self.names[..]), border.clone()];
        for row in &self.rows {
            out.push(line(&row.cells()[..]));
            if matches!(row, ScoreRow::Set(_)) {
                out.push(border.clone());
            }
        }
        if !matches!(self.rows.last(), Some(ScoreRow::Set(_))) {
            out.push(border);
        }
        out.join("\n")
    }
}

impl ScoreSink for ScoreTable {
    fn record_hand_row(&mut self, entries: &[HandRowEntry]) -> Result<(), SinkError> {
        self.learn_names(entries.iter().map(|e| &e.name));
        self.rows.push(ScoreRow::Hand(entries.to_vec()));
        Ok(())
    }

    fn record_set_row(&mut self, entries: &[SetRowEntry]) -> Result<(), SinkError> {
        self.learn_names(entries.iter().map(|e| &e.name));
        self.rows.push(ScoreRow::Set(entries.to_vec()));
        Ok(())
    }
}
