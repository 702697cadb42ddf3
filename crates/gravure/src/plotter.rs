//! The abstract drawing backend consumed by the plot engine.
//!
//! A [`Plotter`] turns device-independent drawing commands into a concrete
//! output format (SVG, Gerber, a canvas, a diff stream). The engine assumes
//! a deliberately minimal backend: move/draw at a current line width, plus
//! filled-or-outline closed shapes. Everything richer (width-compensated
//! strokes, pad silhouettes) is composed from these calls by the engine.
//!
//! All lengths are board native units, all angles decidegrees. Calls are
//! ordered side effects: the command sequence, including intentional
//! overlapping strokes, is part of the observable contract.

use gravure_core::{Color, ElementMeta, Point};
use serde::{Deserialize, Serialize};

/// Whether a closed shape renders filled or as an outline stroke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fill {
    #[default]
    NoFill,
    Filled,
}

/// Horizontal text justification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHJustify {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical text justification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextVJustify {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Device-independent drawing surface.
///
/// Implementations perform no validation: the plot engine guarantees
/// normalized angles and non-negative widths. The optional [`ElementMeta`]
/// on emitting calls carries provenance only and must not affect output
/// geometry.
pub trait Plotter {
    /// Sets the current drawing color.
    fn set_color(&mut self, color: Color);

    /// Sets the current line width for subsequent move/finish strokes.
    fn set_current_line_width(&mut self, width: f64);

    /// Sets the current fill mode.
    fn set_fill(&mut self, fill: Fill);

    /// Starts a stroked path at `p`.
    fn move_to(&mut self, p: Point);

    /// Draws from the current position to `p` and ends the path.
    fn finish_to(&mut self, p: Point, meta: Option<ElementMeta>);

    /// Draws a circle given its center and diameter.
    fn circle(
        &mut self,
        center: Point,
        diameter: f64,
        fill: Fill,
        width: f64,
        meta: Option<ElementMeta>,
    );

    /// Draws an axis-aligned rectangle between two corners.
    fn rect(&mut self, p1: Point, p2: Point, fill: Fill, width: f64);

    /// Draws a circular arc between two decidegree angles.
    #[allow(clippy::too_many_arguments)]
    fn arc(
        &mut self,
        center: Point,
        start_angle: f64,
        end_angle: f64,
        radius: f64,
        fill: Fill,
        width: f64,
        meta: Option<ElementMeta>,
    );

    /// Draws a polyline through `points`; a closed polyline repeats its
    /// first point at the end.
    fn polyline(&mut self, points: &[Point], fill: Fill, width: f64, meta: Option<ElementMeta>);

    /// Draws a cubic Bezier curve.
    fn curve(
        &mut self,
        start: Point,
        end: Point,
        ctrl1: Point,
        ctrl2: Point,
        width: f64,
        meta: Option<ElementMeta>,
    );

    /// Draws a text string.
    #[allow(clippy::too_many_arguments)]
    fn text(
        &mut self,
        pos: Point,
        color: Color,
        text: &str,
        angle: f64,
        size: f64,
        h_justify: TextHJustify,
        v_justify: TextVJustify,
        width: f64,
        italic: bool,
        bold: bool,
        mirrored: bool,
        meta: Option<ElementMeta>,
    );
}
