//! Line representation for the display grid.
//!
//! A line is a fixed-width row of glyphs plus the time it was last written.
//! The timestamp travels with the line when it is retired into history, so
//! consumers can tell how stale an archived row is.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::glyph::Glyph;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    cells: Vec<Glyph>,
    last_modified: SystemTime,
}

impl Line {
    /// Create a blank line with the given number of columns. The
    /// modification time stays at the epoch until the first write.
    pub fn new(cols: usize) -> Self {
        Line {
            cells: vec![Glyph::default(); cols],
            last_modified: SystemTime::UNIX_EPOCH,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, col: usize) -> Option<&Glyph> {
        self.cells.get(col)
    }

    /// Mutable cell access for batch writers. Call [`touch`](Self::touch)
    /// once the batch is done so the modification time stays accurate.
    pub fn get_mut(&mut self, col: usize) -> Option<&mut Glyph> {
        self.cells.get_mut(col)
    }

    /// Write one cell and bump the modification time.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of range.
    pub fn set(&mut self, col: usize, glyph: Glyph) {
        self.cells[col] = glyph;
        self.last_modified = SystemTime::now();
    }

    pub fn cells(&self) -> &[Glyph] {
        &self.cells
    }

    /// See [`get_mut`](Self::get_mut) about `touch`.
    pub fn cells_mut(&mut self) -> &mut [Glyph] {
        &mut self.cells
    }

    /// Record a mutation made through `get_mut` or `cells_mut`.
    pub fn touch(&mut self) {
        self.last_modified = SystemTime::now();
    }

    /// When this line was last written. `UNIX_EPOCH` means never.
    pub fn last_modified(&self) -> SystemTime {
        self.last_modified
    }

    /// Reset every cell to the blank glyph.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Glyph::default();
        }
        self.last_modified = SystemTime::now();
    }

    /// Grow or shrink to `new_cols` columns. Grown cells are blank.
    /// Reshaping is not a write, so the modification time is left alone.
    pub fn resize(&mut self, new_cols: usize) {
        if new_cols > self.cells.len() {
            self.cells.resize(new_cols, Glyph::default());
        } else {
            self.cells.truncate(new_cols);
        }
    }

    /// True when every cell holds the blank character.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|glyph| glyph.is_blank())
    }

    /// Text content with trailing blanks trimmed.
    pub fn text(&self) -> String {
        let s: String = self.cells.iter().map(|glyph| glyph.c).collect();
        s.trim_end().to_string()
    }
}
