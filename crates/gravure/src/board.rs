//! The consumed board entity model.
//!
//! These are read-only snapshot types: the caller (a board-file loader, an
//! editor, a diff tool) owns and mutates them; the plot engine only
//! traverses them for the duration of one plot call. Nothing here is
//! parsed or validated by this crate.

use gravure_core::{LayerId, LayerSet, Point, Size};

use crate::plotter::{TextHJustify, TextVJustify};

/// A complete board snapshot.
#[derive(Debug, Clone, Default)]
pub struct Board {
    pub modules: Vec<Module>,
    pub tracks: Vec<Track>,
    pub vias: Vec<Via>,
    pub zones: Vec<Zone>,
    pub draw_segments: Vec<DrawSegment>,
    pub dimensions: Vec<Dimension>,
    pub texts: Vec<TextItem>,
    pub targets: Vec<Target>,
    pub design_settings: DesignSettings,
}

/// Board-wide design settings consumed by the plot engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesignSettings {
    /// Minimum solder mask web width; nonzero selects the mask-swell pass.
    pub solder_mask_min_width: f64,
}

/// A placed footprint with its pads, graphics and texts.
#[derive(Debug, Clone, Default)]
pub struct Module {
    pub name: String,
    pub layer: LayerId,
    pub position: Point,
    /// Placement orientation in decidegrees.
    pub orientation: f64,
    pub pads: Vec<Pad>,
    pub graphics: Vec<ModuleGraphic>,
    pub reference: TextModule,
    pub value: TextModule,
}

/// A graphic item owned by a module.
#[derive(Debug, Clone)]
pub enum ModuleGraphic {
    Edge(EdgeModule),
    Text(TextModule),
}

/// The shape variant of a pad.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PadShape {
    #[default]
    Circle,
    Oval,
    Rect,
    Trapezoid,
    RoundRect,
    /// Free-form pads carry caller-defined geometry this engine cannot
    /// flash; plotting one is an error, never a silent skip.
    Custom,
}

/// The drill-hole shape of a pad.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PadDrillShape {
    #[default]
    Circle,
    Oblong,
}

/// Electrical/mechanical pad attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PadAttribute {
    /// Plated through-hole pad.
    #[default]
    Standard,
    /// Surface-mount pad, no hole.
    Smd,
    /// Mechanical hole without plating; skippable on copper plots.
    HoleNotPlated,
}

/// A module pad.
///
/// The drill size is expected to sit strictly inside the pad body; drill
/// marks re-clamp it defensively at plot time.
#[derive(Debug, Clone, Default)]
pub struct Pad {
    pub position: Point,
    pub size: Size,
    /// Trapezoid skew deltas (width, height).
    pub delta: Size,
    /// Pad orientation in decidegrees.
    pub orientation: f64,
    pub shape: PadShape,
    pub drill_shape: PadDrillShape,
    pub drill_size: Size,
    /// Corner radius of a round-rect pad as a fraction of the smaller
    /// body dimension.
    pub round_rect_ratio: f64,
    pub attribute: PadAttribute,
    pub layers: LayerSet,
}

/// A straight copper track segment.
#[derive(Debug, Clone, Default)]
pub struct Track {
    pub start: Point,
    pub end: Point,
    pub width: f64,
    pub layer: LayerId,
}

/// A via connecting two copper layers.
#[derive(Debug, Clone, Default)]
pub struct Via {
    pub position: Point,
    pub width: f64,
    pub drill: Option<f64>,
    pub layer_pair: (LayerId, LayerId),
}

/// How a zone's fill geometry was precomputed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZoneFillMode {
    /// The filled polygons are the fill.
    #[default]
    Polygon,
    /// The fill is a list of stroked segments plus the polygon outline.
    Segments,
}

/// A plain start/end segment, used for zone fill geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

/// A filled copper zone with precomputed fill geometry.
///
/// Polygon clipping is a caller concern: `filled_polygons` and
/// `fill_segments` arrive ready to draw.
#[derive(Debug, Clone, Default)]
pub struct Zone {
    pub layer: LayerId,
    pub min_thickness: f64,
    pub fill_mode: ZoneFillMode,
    pub filled_polygons: Vec<Vec<Point>>,
    pub fill_segments: Vec<Segment>,
}

/// The shape variant of a graphic edge or draw segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EdgeShape {
    #[default]
    Segment,
    Rect,
    Circle,
    Arc,
    Polygon,
    Curve,
    Last,
}

/// A graphic edge owned by a module, in module-local coordinates.
#[derive(Debug, Clone, Default)]
pub struct EdgeModule {
    pub shape: EdgeShape,
    /// Undefined endpoints mean "nothing to draw", not an error.
    pub start: Option<Point>,
    pub end: Option<Point>,
    /// Arc sweep in decidegrees.
    pub angle: f64,
    pub line_width: f64,
    pub layer: LayerId,
    pub bezier_c1: Point,
    pub bezier_c2: Point,
    pub polygon_points: Vec<Point>,
}

/// A board-level graphic segment.
#[derive(Debug, Clone, Default)]
pub struct DrawSegment {
    pub shape: EdgeShape,
    pub start: Point,
    pub end: Point,
    /// Arc sweep in decidegrees.
    pub angle: f64,
    pub line_width: f64,
    pub layer: LayerId,
    /// Pre-flattened points of a curve segment.
    pub bezier_points: Vec<Point>,
}

/// A board-level text item.
#[derive(Debug, Clone, Default)]
pub struct TextItem {
    pub text: String,
    pub position: Point,
    pub angle: f64,
    pub size: f64,
    pub line_width: f64,
    pub layer: LayerId,
    pub h_justify: TextHJustify,
    pub v_justify: TextVJustify,
    pub italic: bool,
    pub bold: bool,
}

/// A text item owned by a module, in module-local coordinates.
#[derive(Debug, Clone, Default)]
pub struct TextModule {
    pub text: String,
    pub position: Point,
    pub angle: f64,
    pub size: f64,
    pub line_width: f64,
    pub layer: LayerId,
    pub h_justify: TextHJustify,
    pub v_justify: TextVJustify,
    pub italic: bool,
    pub bold: bool,
    pub mirror: bool,
    pub visible: bool,
}

/// A dimension annotation: crossbar, two feature lines, four arrow
/// segments and a text label.
#[derive(Debug, Clone, Default)]
pub struct Dimension {
    pub layer: LayerId,
    pub line_width: f64,
    pub text: TextItem,
    pub cross_bar_origin: Point,
    pub cross_bar_end: Point,
    pub feature_line_g_origin: Point,
    pub feature_line_g_end: Point,
    pub feature_line_d_origin: Point,
    pub feature_line_d_end: Point,
    pub arrow_d1_end: Point,
    pub arrow_d2_end: Point,
    pub arrow_g1_end: Point,
    pub arrow_g2_end: Point,
}

/// The shape of an alignment target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TargetShape {
    #[default]
    Plus,
    Cross,
}

/// An alignment target (mire).
#[derive(Debug, Clone, Default)]
pub struct Target {
    pub shape: TargetShape,
    pub position: Point,
    pub size: f64,
    pub line_width: f64,
    pub layer: LayerId,
}
