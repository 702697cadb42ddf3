//! Layer color resolution policy.
//!
//! Two fixed palettes exist: the standard per-layer display colors and a
//! greyscale palette used when two board revisions are plotted on top of
//! each other for visual differencing. Both are process-wide constant
//! tables, built once into a [`LayerPalette`] and injected into the plot
//! engine so tests can substitute their own.

use std::collections::HashMap;

use gravure_core::{Color, LayerId};

/// Standard display colors indexed by layer id.
///
/// Lookups past the end of the table resolve to white, which the policy
/// then remaps to light gray for visibility against a white canvas.
pub const DEFAULT_LAYER_COLORS: [Color; 48] = [
    Color::RED,
    Color::YELLOW,
    Color::LIGHT_MAGENTA,
    Color::LIGHT_RED,
    Color::CYAN,
    Color::GREEN,
    Color::BLUE,
    Color::DARK_GRAY,
    Color::MAGENTA,
    Color::LIGHT_GRAY,
    Color::MAGENTA,
    Color::RED,
    Color::BROWN,
    Color::LIGHT_GRAY,
    Color::BLUE,
    Color::GREEN,
    Color::RED,
    Color::YELLOW,
    Color::LIGHT_MAGENTA,
    Color::LIGHT_RED,
    Color::CYAN,
    Color::GREEN,
    Color::BLUE,
    Color::DARK_GRAY,
    Color::MAGENTA,
    Color::LIGHT_GRAY,
    Color::MAGENTA,
    Color::RED,
    Color::BROWN,
    Color::LIGHT_GRAY,
    Color::BLUE,
    Color::GREEN,
    Color::BLUE,
    Color::MAGENTA,
    Color::LIGHT_CYAN,
    Color::RED,
    Color::MAGENTA,
    Color::CYAN,
    Color::BROWN,
    Color::MAGENTA,
    Color::LIGHT_GRAY,
    Color::BLUE,
    Color::GREEN,
    Color::YELLOW,
    Color::YELLOW,
    Color::LIGHT_MAGENTA,
    Color::YELLOW,
    Color::DARK_GRAY,
];

/// Greyscale diff-mode colors keyed by layer id index.
pub const DIFF_LAYER_COLORS: [(u32, Color); 50] = [
    (0, Color::rgb(33, 33, 33)),
    (1, Color::rgb(66, 66, 66)),
    (2, Color::rgb(54, 54, 54)),
    (3, Color::rgb(89, 89, 89)),
    (4, Color::rgb(47, 47, 47)),
    (5, Color::rgb(79, 77, 77)),
    (6, Color::rgb(105, 105, 105)),
    (7, Color::rgb(87, 87, 87)),
    (8, Color::rgb(71, 71, 71)),
    (9, Color::rgb(63, 63, 63)),
    (10, Color::rgb(39, 39, 39)),
    (11, Color::rgb(74, 74, 74)),
    (12, Color::rgb(81, 81, 81)),
    (13, Color::rgb(199, 199, 199)),
    (14, Color::rgb(207, 198, 198)),
    (15, Color::rgb(222, 222, 222)),
    (16, Color::rgb(171, 164, 164)),
    (17, Color::rgb(122, 118, 118)),
    (18, Color::rgb(74, 71, 71)),
    (19, Color::rgb(99, 96, 96)),
    (20, Color::rgb(195, 195, 195)),
    (21, Color::rgb(223, 223, 223)),
    (22, Color::rgb(231, 231, 231)),
    (23, Color::rgb(214, 214, 214)),
    (24, Color::rgb(225, 225, 225)),
    (25, Color::rgb(202, 202, 202)),
    (26, Color::rgb(233, 233, 233)),
    (27, Color::rgb(194, 194, 194)),
    (28, Color::rgb(223, 223, 223)),
    (29, Color::rgb(199, 199, 199)),
    (30, Color::rgb(212, 212, 212)),
    (31, Color::rgb(79, 79, 79)),
    (32, Color::rgb(176, 176, 176)),
    (33, Color::rgb(156, 156, 156)),
    (34, Color::rgb(97, 97, 97)),
    (35, Color::rgb(82, 82, 82)),
    (36, Color::rgb(138, 138, 138)),
    (37, Color::rgb(122, 122, 122)),
    (38, Color::rgb(59, 59, 59)),
    (39, Color::rgb(41, 41, 41)),
    (40, Color::rgb(112, 112, 112)),
    (41, Color::rgb(161, 161, 161)),
    (42, Color::rgb(148, 148, 148)),
    (43, Color::rgb(166, 166, 166)),
    (44, Color::rgb(0, 0, 0)),
    (45, Color::rgb(191, 191, 191)),
    (46, Color::rgb(128, 128, 128)),
    (47, Color::rgb(112, 112, 112)),
    (48, Color::rgb(177, 177, 177)),
    (49, Color::rgb(196, 196, 196)),
];

/// The injected color policy: standard and diff palettes.
#[derive(Debug, Clone)]
pub struct LayerPalette {
    standard: Vec<Color>,
    diffing: HashMap<u32, Color>,
}

impl Default for LayerPalette {
    fn default() -> Self {
        Self {
            standard: DEFAULT_LAYER_COLORS.to_vec(),
            diffing: DIFF_LAYER_COLORS.iter().copied().collect(),
        }
    }
}

impl LayerPalette {
    /// Builds a palette from explicit tables, mostly for tests.
    pub fn new(standard: Vec<Color>, diffing: HashMap<u32, Color>) -> Self {
        Self { standard, diffing }
    }

    /// Resolves the standard display color for a layer.
    ///
    /// Falls back to white past the table, and remaps a pure-white result
    /// to light gray so it stays visible on a white canvas.
    pub fn standard_color(&self, layer: LayerId) -> Color {
        let color = self
            .standard
            .get(layer.index() as usize)
            .copied()
            .unwrap_or(Color::WHITE);
        if color == Color::WHITE {
            Color::LIGHT_GRAY
        } else {
            color
        }
    }

    /// Resolves the diff-mode color for a layer, if one is defined.
    pub fn diff_color(&self, layer: LayerId) -> Option<Color> {
        self.diffing.get(&layer.index()).copied()
    }
}
