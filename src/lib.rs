//! Terminal display state
//!
//! This crate provides an in-memory model of a character-grid terminal
//! display:
//! - Glyphs with colors and attribute flags
//! - Fixed-width lines carrying modification times
//! - A ring-buffered history of rows scrolled off the top
//! - A display aggregate with one global coordinate space spanning history
//!   and live rows, plus per-row dirty tracking for renderers
//! - Exact xterm 256-color resolution to RGB
//!
//! Escape-sequence parsing, PTY I/O, and pixel rendering live in consumer
//! crates; this crate has no platform dependencies and can be driven
//! headlessly for testing.
//!
//! The display expects a single writer: an interpreter applies a batch of
//! updates, then renderers read between batches. All operations are O(1)
//! or O(row length).

pub mod color;
pub mod display;
pub mod glyph;
pub mod history;
pub mod line;
pub mod snapshot;

pub use color::{Color, Rgb};
pub use display::Display;
pub use glyph::{Attrs, Glyph};
pub use history::History;
pub use line::Line;
pub use snapshot::DisplaySnapshot;
