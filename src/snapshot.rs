//! Display snapshots for testing and debugging
//!
//! Snapshots capture the globally addressable state (history plus live
//! rows) in a serializable form for deterministic tests and bug reports.

use serde::{Deserialize, Serialize};

use crate::display::Display;

/// A text-level snapshot of a display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    /// Live grid dimensions
    pub rows: usize,
    pub cols: usize,
    /// Number of archived rows included
    pub history_len: usize,
    /// Whether the display archives scrolled-off rows
    pub record_history: bool,
    /// Text of every global row, history first, trailing blanks trimmed
    pub lines: Vec<String>,
    /// Global indices of rows needing a repaint
    pub dirty_rows: Vec<usize>,
}

impl DisplaySnapshot {
    /// Capture the current state of a display.
    pub fn from_display(display: &Display) -> Self {
        let history_len = display.history_len();
        let mut lines: Vec<String> = display.history().iter().map(|l| l.text()).collect();
        lines.extend(display.live_lines().map(|l| l.text()));
        let dirty_rows = (0..display.rows())
            .filter(|&row| display.row_dirty(row))
            .map(|row| history_len + row)
            .collect();

        DisplaySnapshot {
            rows: display.rows(),
            cols: display.cols(),
            history_len,
            record_history: display.records_history(),
            lines,
            dirty_rows,
        }
    }

    /// Text of one global row (empty when out of range)
    pub fn row_text(&self, row: usize) -> String {
        self.lines.get(row).cloned().unwrap_or_default()
    }

    /// The whole display as one string, one row per line
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
