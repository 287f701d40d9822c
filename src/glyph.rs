//! Glyph representation
//!
//! A glyph is a single character position in the display grid:
//! - A character (`' '` when the cell is blank)
//! - Foreground and background colors
//! - Attribute flags (bold, underline, blink, etc.)
//!
//! Glyph comparison comes in two strengths. `similar` checks style only and
//! masks the wrap-continuation bit, so renderers can merge a run of cells
//! into one draw call even across a soft line break. `equal` adds the
//! character.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Flags for glyph text attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Attrs {
    bits: u16,
}

impl Attrs {
    pub const NONE: u16 = 0;
    /// Swap foreground and background
    pub const REVERSE: u16 = 1 << 0;
    pub const UNDERLINE: u16 = 1 << 1;
    pub const BOLD: u16 = 1 << 2;
    /// Line-drawing (graphics) character set
    pub const GFX: u16 = 1 << 3;
    pub const ITALIC: u16 = 1 << 4;
    pub const BLINK: u16 = 1 << 5;
    /// The cell continues a soft-wrapped logical line. Layout metadata,
    /// not styling.
    pub const WRAP: u16 = 1 << 6;

    pub const fn empty() -> Self {
        Attrs { bits: Self::NONE }
    }

    pub const fn new(bits: u16) -> Self {
        Attrs { bits }
    }

    pub fn contains(&self, flag: u16) -> bool {
        self.bits & flag != 0
    }

    pub fn set(&mut self, flag: u16, value: bool) {
        if value {
            self.bits |= flag;
        } else {
            self.bits &= !flag;
        }
    }

    pub fn insert(&mut self, flag: u16) {
        self.bits |= flag;
    }

    pub fn remove(&mut self, flag: u16) {
        self.bits &= !flag;
    }

    pub fn bits(&self) -> u16 {
        self.bits
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Attribute bits with the wrap-continuation marker masked out.
    /// Style comparisons use this so a soft line break never splits a
    /// styled run.
    pub fn style_bits(&self) -> u16 {
        self.bits & !Self::WRAP
    }
}

/// A single cell in the display grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyph {
    /// The character in this cell; `' '` means the cell is blank
    pub c: char,
    /// Attribute flags
    pub attrs: Attrs,
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
}

impl Default for Glyph {
    fn default() -> Self {
        Glyph {
            c: ' ',
            attrs: Attrs::empty(),
            fg: Color::DefaultFg,
            bg: Color::DefaultBg,
        }
    }
}

impl Glyph {
    /// Create a glyph with the given character and default styling
    pub fn new(c: char) -> Self {
        Glyph {
            c,
            ..Default::default()
        }
    }

    /// Create a fully specified glyph
    pub fn with_style(c: char, attrs: Attrs, fg: Color, bg: Color) -> Self {
        Glyph { c, attrs, fg, bg }
    }

    /// True when both glyphs carry the same style: equal colors and equal
    /// attributes apart from the wrap-continuation bit. The characters are
    /// not compared.
    pub fn similar(&self, other: &Glyph) -> bool {
        self.fg == other.fg
            && self.bg == other.bg
            && self.attrs.style_bits() == other.attrs.style_bits()
    }

    /// True when both glyphs render identically: same character and
    /// `similar`. Unlike `==`, a wrap-continuation marker on one side does
    /// not break equality.
    pub fn equal(&self, other: &Glyph) -> bool {
        self.c == other.c && self.similar(other)
    }

    /// Check if this glyph holds the blank character. Styling is ignored.
    pub fn is_blank(&self) -> bool {
        self.c == ' '
    }

    /// Display width in columns. Wide characters (CJK, some emoji) are 2.
    pub fn width(&self) -> usize {
        use unicode_width::UnicodeWidthChar;
        self.c.width().unwrap_or(1).max(1)
    }
}
