//! Terminal color representation and RGB resolution
//!
//! Colors are abstract until a renderer needs pixels:
//! - The two default sentinels (foreground and background)
//! - The 256-entry xterm palette: 16 named colors, a 6x6x6 cube, and a
//!   24-step grayscale ramp
//!
//! `to_rgb` maps any color to a concrete triple. The resolver is total:
//! the index space is `u8`, so there is no invalid palette index to
//! handle at runtime.

use serde::{Deserialize, Serialize};

/// A resolved color, ready for a renderer. Always fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// An abstract terminal color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    /// Default foreground color
    DefaultFg,
    /// Default background color
    DefaultBg,
    /// Entry in the 256-color xterm palette
    Indexed(u8),
}

impl Color {
    pub const BLACK: Color = Color::Indexed(0);
    pub const RED: Color = Color::Indexed(1);
    pub const GREEN: Color = Color::Indexed(2);
    pub const YELLOW: Color = Color::Indexed(3);
    pub const BLUE: Color = Color::Indexed(4);
    pub const MAGENTA: Color = Color::Indexed(5);
    pub const CYAN: Color = Color::Indexed(6);
    pub const WHITE: Color = Color::Indexed(7);
    pub const BRIGHT_BLACK: Color = Color::Indexed(8);
    pub const BRIGHT_RED: Color = Color::Indexed(9);
    pub const BRIGHT_GREEN: Color = Color::Indexed(10);
    pub const BRIGHT_YELLOW: Color = Color::Indexed(11);
    pub const BRIGHT_BLUE: Color = Color::Indexed(12);
    pub const BRIGHT_MAGENTA: Color = Color::Indexed(13);
    pub const BRIGHT_CYAN: Color = Color::Indexed(14);
    pub const BRIGHT_WHITE: Color = Color::Indexed(15);

    /// Resolve to a concrete RGB triple.
    ///
    /// The default foreground shares black's triple and the default
    /// background shares bright white's, matching a light-background
    /// terminal profile.
    pub fn to_rgb(self) -> Rgb {
        match self {
            Color::DefaultFg => NAMED_RGB[0],
            Color::DefaultBg => NAMED_RGB[15],
            Color::Indexed(index) => indexed_rgb(index),
        }
    }
}

/// RGB values for the 16 named palette entries (light-background profile).
const NAMED_RGB: [Rgb; 16] = [
    Rgb::new(0x00, 0x00, 0x00), // black
    Rgb::new(0xc9, 0x1b, 0x00), // red
    Rgb::new(0x00, 0xc2, 0x00), // green
    Rgb::new(0xc7, 0xc4, 0x00), // yellow
    Rgb::new(0x02, 0x25, 0xc7), // blue
    Rgb::new(0xc9, 0x30, 0xc7), // magenta
    Rgb::new(0x00, 0xc5, 0xc7), // cyan
    Rgb::new(0xc7, 0xc7, 0xc7), // white (light grey)
    Rgb::new(0x67, 0x67, 0x67), // bright black (dark grey)
    Rgb::new(0xff, 0x6d, 0x67), // bright red
    Rgb::new(0x5f, 0xf9, 0x67), // bright green
    Rgb::new(0xfe, 0xfb, 0x67), // bright yellow
    Rgb::new(0x68, 0x71, 0xff), // bright blue
    Rgb::new(0xff, 0x76, 0xff), // bright magenta
    Rgb::new(0x5f, 0xfd, 0xff), // bright cyan
    Rgb::new(0xff, 0xfe, 0xfe), // bright white
];

/// Channel steps for the 6x6x6 color cube (indices 16-231).
const CUBE_STEPS: [u8; 6] = [0x00, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

/// The grayscale ramp (indices 232-255).
const GRAY_RAMP: [u8; 24] = [
    0x08, 0x12, 0x1c, 0x26, 0x30, 0x3a, 0x44, 0x4e, 0x58, 0x62, 0x6c, 0x76,
    0x80, 0x8a, 0x94, 0x9e, 0xa8, 0xb2, 0xbc, 0xc6, 0xd0, 0xda, 0xe4, 0xee,
];

/// Resolve a 256-color palette index.
fn indexed_rgb(index: u8) -> Rgb {
    match index {
        0..=15 => NAMED_RGB[index as usize],
        16..=231 => {
            // Cube digits are extracted least significant first: blue,
            // then green, then red.
            let mut n = index as usize - 16;
            let b = CUBE_STEPS[n % 6];
            n /= 6;
            let g = CUBE_STEPS[n % 6];
            n /= 6;
            let r = CUBE_STEPS[n % 6];
            Rgb::new(r, g, b)
        }
        232..=255 => {
            let v = GRAY_RAMP[index as usize - 232];
            Rgb::new(v, v, v)
        }
    }
}
