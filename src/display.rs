//! Display state: the live grid plus scrollback history.
//!
//! The display owns the visible rows, the retired rows, and a dirty flag
//! per live row. Consumers address both regions through one global
//! coordinate space: row 0 is the oldest archived row and the highest row
//! is the bottom of the live grid. Archived rows are frozen, so only live
//! rows can ever be dirty.
//!
//! Two parties drive a display. An escape-sequence interpreter writes
//! cells, scrolls, and resizes; a renderer reads globally, paints dirty
//! rows, and calls [`reset_changes`](Display::reset_changes). The model
//! expects one writer at a time, with render passes between mutation
//! batches.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::glyph::Glyph;
use crate::history::History;
use crate::line::Line;

/// Where a global row index lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowRef {
    /// Index into the history buffer (0 = oldest)
    History(usize),
    /// Index into the live grid (0 = top row)
    Live(usize),
}

/// The full display model: live grid, history, and dirty tracking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Display {
    /// Live grid dimensions
    rows: usize,
    cols: usize,
    /// Live rows, top to bottom
    lines: Vec<Line>,
    /// Retired rows, oldest first
    history: History,
    /// Per-live-row dirty flags
    dirty: Vec<bool>,
    /// Whether scrolled-off rows are archived rather than dropped
    record_history: bool,
}

impl Display {
    /// Create a display that drops scrolled-off rows. Every row starts
    /// dirty so the first paint is a full one.
    pub fn new(rows: usize, cols: usize) -> Self {
        Display {
            rows,
            cols,
            lines: (0..rows).map(|_| Line::new(cols)).collect(),
            history: History::new(0),
            dirty: vec![true; rows],
            record_history: false,
        }
    }

    /// Create a display that archives scrolled-off rows, keeping at most
    /// `max_history` of them (`usize::MAX` for no bound).
    pub fn with_history(rows: usize, cols: usize, max_history: usize) -> Self {
        Display {
            history: History::new(max_history),
            record_history: true,
            ..Self::new(rows, cols)
        }
    }

    /// Number of live rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether scrolled-off rows are archived
    pub fn records_history(&self) -> bool {
        self.record_history
    }

    /// The retired-row buffer
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Iterate over the live rows, top to bottom
    pub fn live_lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Checked access to a live row
    pub fn line(&self, row: usize) -> Option<&Line> {
        self.lines.get(row)
    }

    /// Mutable access to a live row for batch writers. Callers mark the
    /// row dirty and `touch` the line themselves.
    pub fn line_mut(&mut self, row: usize) -> Option<&mut Line> {
        self.lines.get_mut(row)
    }

    /// Checked access to a live cell
    pub fn glyph(&self, col: usize, row: usize) -> Option<&Glyph> {
        self.lines.get(row).and_then(|line| line.get(col))
    }

    /// Write one live cell, bump its line's modification time, and mark
    /// the row dirty.
    ///
    /// # Panics
    ///
    /// Panics if `col` or `row` is out of range.
    pub fn set_glyph(&mut self, col: usize, row: usize, glyph: Glyph) {
        self.lines[row].set(col, glyph);
        self.dirty[row] = true;
    }

    /// Mark a live row as needing a repaint.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn mark_row_dirty(&mut self, row: usize) {
        self.dirty[row] = true;
    }

    /// Dirty flag of a live row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn row_dirty(&self, row: usize) -> bool {
        self.dirty[row]
    }

    /// True when any live row needs a repaint
    pub fn is_dirty(&self) -> bool {
        self.dirty.iter().any(|d| *d)
    }

    /// Clear every live dirty flag. Renderers call this after a paint.
    pub fn reset_changes(&mut self) {
        for d in &mut self.dirty {
            *d = false;
        }
    }

    fn mark_all_dirty(&mut self) {
        for d in &mut self.dirty {
            *d = true;
        }
    }

    /// Retire the top `count` live rows and shift the rest up, leaving
    /// blank rows at the bottom. Retired rows move into history when
    /// recording, and are dropped otherwise. Every live row changes, so
    /// all are marked dirty. Counts beyond the live height retire the
    /// whole grid once.
    pub fn scroll_up(&mut self, count: usize) {
        let count = count.min(self.rows);
        if count == 0 {
            return;
        }
        log::trace!("scroll_up: retiring {} of {} rows", count, self.rows);

        if self.record_history {
            for line in self.lines.drain(..count) {
                self.history.push(line);
            }
        } else {
            self.lines.drain(..count);
        }
        for _ in 0..count {
            self.lines.push(Line::new(self.cols));
        }
        self.mark_all_dirty();
    }

    /// Reshape the live grid. Columns are resized in place with blank
    /// fill; shrinking the row count drops rows from the top, growing
    /// appends blank rows at the bottom. History is never touched, so
    /// archived rows keep the width they had when retired. The whole grid
    /// is marked dirty. Callers treat this as a batch boundary.
    pub fn resize(&mut self, new_rows: usize, new_cols: usize) {
        if new_rows == self.rows && new_cols == self.cols {
            return;
        }
        log::debug!(
            "resize: {}x{} -> {}x{}",
            self.rows,
            self.cols,
            new_rows,
            new_cols
        );

        for line in &mut self.lines {
            line.resize(new_cols);
        }
        while self.lines.len() > new_rows {
            self.lines.remove(0);
        }
        while self.lines.len() < new_rows {
            self.lines.push(Line::new(new_cols));
        }

        self.rows = new_rows;
        self.cols = new_cols;
        self.dirty = vec![true; new_rows];
    }

    /// Drop every archived row (erase scrollback). Live rows and their
    /// dirty flags are untouched.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Resolve a global row index into its region. History rows come
    /// first while recording; without recording the space is the live
    /// grid alone.
    fn resolve_row(&self, row: usize) -> Option<RowRef> {
        if self.record_history {
            let hist = self.history.len();
            if row < hist {
                Some(RowRef::History(row))
            } else if row - hist < self.rows {
                Some(RowRef::Live(row - hist))
            } else {
                None
            }
        } else if row < self.rows {
            Some(RowRef::Live(row))
        } else {
            None
        }
    }

    fn global_line(&self, row: usize) -> Option<&Line> {
        match self.resolve_row(row)? {
            RowRef::History(index) => self.history.get(index),
            RowRef::Live(index) => self.lines.get(index),
        }
    }

    /// Dimensions of the globally addressable area as (rows, cols). The
    /// row count includes history only while recording.
    pub fn global_size(&self) -> (usize, usize) {
        if self.record_history {
            (self.rows + self.history.len(), self.cols)
        } else {
            (self.rows, self.cols)
        }
    }

    /// Number of archived rows
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Archived rows plus live rows, independent of the recording flag
    pub fn total_len(&self) -> usize {
        self.history.len() + self.rows
    }

    /// Read one cell through the global row space, along with the time
    /// its line was last written.
    ///
    /// # Panics
    ///
    /// Panics if `row` is outside the global row space or `col` is outside
    /// the resolved line. Archived rows keep their retirement-time width,
    /// which can be narrower than the current grid.
    pub fn global_glyph(&self, col: usize, row: usize) -> (Glyph, SystemTime) {
        let line = match self.global_line(row) {
            Some(line) => line,
            None => panic!(
                "global row {} out of range (0..{})",
                row,
                self.global_size().0
            ),
        };
        match line.get(col) {
            Some(glyph) => (*glyph, line.last_modified()),
            None => panic!("column {} out of range (0..{})", col, line.len()),
        }
    }

    /// Dirty flag of a global row. Archived rows are frozen and always
    /// report false.
    ///
    /// # Panics
    ///
    /// Panics if `row` is outside the global row space.
    pub fn global_row_dirty(&self, row: usize) -> bool {
        match self.resolve_row(row) {
            Some(RowRef::History(_)) => false,
            Some(RowRef::Live(index)) => self.dirty[index],
            None => panic!(
                "global row {} out of range (0..{})",
                row,
                self.global_size().0
            ),
        }
    }

    /// Global index of the last row holding any non-blank character.
    /// Archived rows count as content. `None` means history is empty and
    /// the live grid is entirely blank.
    pub fn last_non_blank_row(&self) -> Option<usize> {
        match self.lines.iter().rposition(|line| !line.is_blank()) {
            Some(row) => Some(self.history.len() + row),
            None => self.history.len().checked_sub(1),
        }
    }
}
