//! RGBA colors and the fixed named palette.
//!
//! Channels are 0–255 integers; alpha is a 0–1 factor. The named constants
//! reproduce the classic CAD palette exactly, and [`ColorDefinition`] pairs
//! each base value with its display name and light variant in a flat lookup
//! table rather than a type hierarchy.

use serde::{Deserialize, Serialize};

/// An RGBA color with integer channels and a fractional alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: f32,
}

impl Color {
    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a color with an explicit alpha in `[0, 1]`.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Red channel.
    pub fn r(self) -> u8 {
        self.r
    }

    /// Green channel.
    pub fn g(self) -> u8 {
        self.g
    }

    /// Blue channel.
    pub fn b(self) -> u8 {
        self.b
    }

    /// Alpha factor in `[0, 1]`.
    pub fn alpha(self) -> f32 {
        self.a
    }

    /// Blends two colors by component-wise bitwise OR, keeping the brighter
    /// bits of each channel. Alphas multiply.
    ///
    /// This is the both-sides copper convention, not alpha compositing.
    pub fn mix(self, other: Color) -> Self {
        Self {
            r: self.r | other.r,
            g: self.g | other.g,
            b: self.b | other.b,
            a: self.a * other.a,
        }
    }

    /// Formats the color as a CSS `rgba(...)` string.
    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const DARK_DARK_GRAY: Color = Color::rgb(72, 72, 72);
    pub const DARK_GRAY: Color = Color::rgb(132, 132, 132);
    pub const LIGHT_GRAY: Color = Color::rgb(194, 194, 194);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const LIGHT_YELLOW: Color = Color::rgb(255, 255, 194);
    pub const DARK_BLUE: Color = Color::rgb(0, 0, 72);
    pub const DARK_GREEN: Color = Color::rgb(0, 72, 0);
    pub const DARK_CYAN: Color = Color::rgb(0, 72, 72);
    pub const DARK_RED: Color = Color::rgb(72, 0, 0);
    pub const DARK_MAGENTA: Color = Color::rgb(72, 0, 72);
    pub const DARK_BROWN: Color = Color::rgb(72, 72, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 132);
    pub const GREEN: Color = Color::rgb(0, 132, 0);
    pub const CYAN: Color = Color::rgb(0, 132, 132);
    pub const RED: Color = Color::rgb(132, 0, 0);
    pub const MAGENTA: Color = Color::rgb(132, 0, 132);
    pub const BROWN: Color = Color::rgb(132, 132, 0);
    pub const LIGHT_BLUE: Color = Color::rgb(0, 0, 194);
    pub const LIGHT_GREEN: Color = Color::rgb(0, 194, 0);
    pub const LIGHT_CYAN: Color = Color::rgb(0, 194, 194);
    pub const LIGHT_RED: Color = Color::rgb(194, 0, 0);
    pub const LIGHT_MAGENTA: Color = Color::rgb(194, 0, 194);
    pub const YELLOW: Color = Color::rgb(194, 194, 0);
    pub const PURE_BLUE: Color = Color::rgb(0, 0, 255);
    pub const PURE_GREEN: Color = Color::rgb(0, 255, 0);
    pub const PURE_CYAN: Color = Color::rgb(0, 255, 255);
    pub const PURE_RED: Color = Color::rgb(255, 0, 0);
    pub const PURE_MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const PURE_YELLOW: Color = Color::rgb(255, 255, 0);
}

/// A palette entry: a base color, its display name and its light variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorDefinition {
    pub color: Color,
    pub name: &'static str,
    pub light: Color,
}

impl ColorDefinition {
    const fn new(color: Color, name: &'static str, light: Color) -> Self {
        Self { color, name, light }
    }

    /// The fixed palette definition table.
    pub const TABLE: &'static [ColorDefinition] = &[
        ColorDefinition::new(Color::BLACK, "Black", Color::DARK_DARK_GRAY),
        ColorDefinition::new(Color::DARK_DARK_GRAY, "Gray 1", Color::DARK_GRAY),
        ColorDefinition::new(Color::DARK_GRAY, "Gray 2", Color::LIGHT_GRAY),
        ColorDefinition::new(Color::LIGHT_GRAY, "Gray 3", Color::WHITE),
        ColorDefinition::new(Color::WHITE, "White", Color::WHITE),
        ColorDefinition::new(Color::LIGHT_YELLOW, "L.Yellow", Color::WHITE),
        ColorDefinition::new(Color::DARK_BLUE, "Blue 1", Color::BLUE),
        ColorDefinition::new(Color::DARK_GREEN, "Green 1", Color::GREEN),
        ColorDefinition::new(Color::DARK_CYAN, "Cyan 1", Color::CYAN),
        ColorDefinition::new(Color::DARK_RED, "Red 1", Color::RED),
        ColorDefinition::new(Color::DARK_MAGENTA, "Magenta 1", Color::MAGENTA),
        ColorDefinition::new(Color::DARK_BROWN, "Brown 1", Color::BROWN),
        ColorDefinition::new(Color::BLUE, "Blue 2", Color::LIGHT_BLUE),
        ColorDefinition::new(Color::GREEN, "Green 2", Color::LIGHT_GREEN),
        ColorDefinition::new(Color::CYAN, "Cyan 2", Color::LIGHT_CYAN),
        ColorDefinition::new(Color::RED, "Red 2", Color::LIGHT_RED),
        ColorDefinition::new(Color::MAGENTA, "Magenta 2", Color::LIGHT_MAGENTA),
        ColorDefinition::new(Color::BROWN, "Brown 2", Color::YELLOW),
        ColorDefinition::new(Color::LIGHT_BLUE, "Blue 3", Color::PURE_BLUE),
        ColorDefinition::new(Color::LIGHT_GREEN, "Green 3", Color::PURE_GREEN),
        ColorDefinition::new(Color::LIGHT_CYAN, "Cyan 3", Color::PURE_CYAN),
        ColorDefinition::new(Color::LIGHT_RED, "Red 3", Color::PURE_RED),
        ColorDefinition::new(Color::LIGHT_MAGENTA, "Magenta 3", Color::PURE_MAGENTA),
        ColorDefinition::new(Color::YELLOW, "Yellow 3", Color::PURE_YELLOW),
        ColorDefinition::new(Color::PURE_BLUE, "Blue 4", Color::WHITE),
        ColorDefinition::new(Color::PURE_GREEN, "Green 4", Color::WHITE),
        ColorDefinition::new(Color::PURE_CYAN, "Cyan 4", Color::WHITE),
        ColorDefinition::new(Color::PURE_RED, "Red 4", Color::WHITE),
        ColorDefinition::new(Color::PURE_MAGENTA, "Magenta 4", Color::WHITE),
        ColorDefinition::new(Color::PURE_YELLOW, "Yellow 4", Color::WHITE),
    ];

    /// Looks up the definition whose base value equals `color`.
    pub fn find(color: Color) -> Option<&'static ColorDefinition> {
        Self::TABLE.iter().find(|def| def.color == color)
    }
}
