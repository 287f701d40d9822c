//! History buffer for retired display lines.
//!
//! Rows pushed off the top of the live grid land here, oldest first. The
//! buffer is a ring: at capacity the oldest line is recycled. Archived
//! lines are frozen; the buffer never hands out mutable references.

use serde::{Deserialize, Serialize};

use crate::line::Line;

/// Ring buffer of retired lines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct History {
    /// Ring storage
    lines: Vec<Line>,
    /// Index of the oldest line
    start: usize,
    /// Number of lines currently stored
    len: usize,
    /// Maximum number of lines to store
    max_lines: usize,
}

impl History {
    /// Create a history buffer keeping at most `max_lines` lines.
    /// Zero disables storage entirely.
    pub fn new(max_lines: usize) -> Self {
        History {
            lines: Vec::new(),
            start: 0,
            len: 0,
            max_lines,
        }
    }

    /// A history buffer that never evicts.
    pub fn unbounded() -> Self {
        Self::new(usize::MAX)
    }

    /// Number of archived lines
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum number of lines this buffer will hold
    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Append a retired line. At capacity the oldest line is evicted
    /// first; with `max_lines` of zero the line is dropped.
    pub fn push(&mut self, line: Line) {
        if self.max_lines == 0 {
            return;
        }

        if self.lines.len() < self.max_lines {
            // Not yet at capacity, just append
            self.lines.push(line);
            self.len += 1;
        } else {
            // At capacity: recycle the oldest slot
            self.lines[self.start] = line;
            self.start = (self.start + 1) % self.max_lines;
        }
    }

    /// Get a line by index (0 = oldest)
    pub fn get(&self, index: usize) -> Option<&Line> {
        if index >= self.len {
            return None;
        }
        let actual = (self.start + index) % self.lines.len();
        Some(&self.lines[actual])
    }

    /// Get a line counting back from the newest end (0 = most recent).
    /// Scrollback views walk the buffer this way.
    pub fn get_from_newest(&self, index: usize) -> Option<&Line> {
        if index >= self.len {
            return None;
        }
        self.get(self.len - 1 - index)
    }

    /// Drop every archived line (the erase-scrollback path).
    pub fn clear(&mut self) {
        self.lines.clear();
        self.start = 0;
        self.len = 0;
    }

    /// Iterate over lines from oldest to newest
    pub fn iter(&self) -> HistoryIter<'_> {
        HistoryIter {
            history: self,
            index: 0,
        }
    }
}

/// Iterator over archived lines, oldest first
pub struct HistoryIter<'a> {
    history: &'a History,
    index: usize,
}

impl<'a> Iterator for HistoryIter<'a> {
    type Item = &'a Line;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.history.len {
            return None;
        }
        let line = self.history.get(self.index);
        self.index += 1;
        line
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.history.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for HistoryIter<'a> {}
