//! Width-compensated rendering of stroked primitives.
//!
//! In filled mode a thick primitive is one stroke at its real width. In
//! outline mode the pen stays at [`DEFAULT_LINE_WIDTH`] and the desired
//! width is shown by geometry instead: a segment becomes a capsule
//! silhouette, arcs, rectangles and circles become two offset strokes
//! half the extra width apart on each side.

use gravure_core::{ElementMeta, Point, Size, arc_tangente};

use crate::plot::{BoardPlotter, DEFAULT_LINE_WIDTH};
use crate::plotter::{Fill, Plotter};

impl<P: Plotter> BoardPlotter<'_, P> {
    /// Draws a segment of the given width.
    pub fn thick_segment(
        &mut self,
        start: Point,
        end: Point,
        width: f64,
        fill: Fill,
        meta: Option<ElementMeta>,
    ) {
        if fill == Fill::Filled {
            self.plotter.set_fill(Fill::NoFill);
            self.plotter.set_current_line_width(width);
            self.plotter.move_to(start);
            self.plotter.finish_to(end, meta);
        } else {
            self.plotter.set_current_line_width(DEFAULT_LINE_WIDTH);
            self.segment_as_oval(start, end, width, fill, meta);
        }
    }

    /// Draws a segment as the oval capsule spanning its endpoints.
    pub fn segment_as_oval(
        &mut self,
        start: Point,
        end: Point,
        line_width: f64,
        fill: Fill,
        meta: Option<ElementMeta>,
    ) {
        let center = Point::new(
            (start.x() + end.x()) / 2.0,
            (start.y() + end.y()) / 2.0,
        );
        let size = Point::new(end.x() - start.x(), end.y() - start.y());
        let orientation = if size.y() == 0.0 {
            0.0
        } else if size.x() == 0.0 {
            900.0
        } else {
            -arc_tangente(size.y(), size.x())
        };
        let size = Size::new(size.hypot() + line_width, line_width);
        self.flash_pad_oval(center, size, orientation, fill, meta);
    }

    /// Draws an arc of the given width.
    #[allow(clippy::too_many_arguments)]
    pub fn thick_arc(
        &mut self,
        center: Point,
        start_angle: f64,
        end_angle: f64,
        radius: f64,
        width: f64,
        fill: Fill,
        meta: Option<ElementMeta>,
    ) {
        if fill == Fill::Filled {
            self.plotter
                .arc(center, start_angle, end_angle, radius, Fill::NoFill, width, meta);
        } else {
            self.plotter.set_current_line_width(DEFAULT_LINE_WIDTH);
            let offset = (width - DEFAULT_LINE_WIDTH) / 2.0;
            self.plotter.arc(
                center,
                start_angle,
                end_angle,
                radius - offset,
                Fill::NoFill,
                width,
                meta.clone(),
            );
            self.plotter.arc(
                center,
                start_angle,
                end_angle,
                radius + offset,
                Fill::NoFill,
                width,
                meta,
            );
        }
    }

    /// Draws a rectangle outline of the given stroke width.
    pub fn thick_rect(&mut self, p1: Point, p2: Point, width: f64, fill: Fill) {
        if fill == Fill::Filled {
            self.plotter.rect(p1, p2, Fill::NoFill, width);
        } else {
            self.plotter.set_current_line_width(DEFAULT_LINE_WIDTH);
            let offset = (width - DEFAULT_LINE_WIDTH) / 2.0;
            let outer1 = Point::new(p1.x() - offset, p1.y() - offset);
            let outer2 = Point::new(p2.x() + offset, p2.y() + offset);
            self.plotter
                .rect(outer1, outer2, Fill::NoFill, DEFAULT_LINE_WIDTH);
            let grow = width - DEFAULT_LINE_WIDTH;
            let inner1 = Point::new(outer1.x() + grow, outer1.y() + grow);
            let inner2 = Point::new(outer2.x() - grow, outer2.y() - grow);
            self.plotter
                .rect(inner1, inner2, Fill::NoFill, DEFAULT_LINE_WIDTH);
        }
    }

    /// Draws a circle outline of the given stroke width.
    pub fn thick_circle(
        &mut self,
        center: Point,
        diameter: f64,
        width: f64,
        fill: Fill,
        meta: Option<ElementMeta>,
    ) {
        if fill == Fill::Filled {
            self.plotter.circle(center, diameter, Fill::NoFill, width, meta);
        } else {
            self.plotter.set_current_line_width(DEFAULT_LINE_WIDTH);
            self.plotter.circle(
                center,
                diameter - width + DEFAULT_LINE_WIDTH,
                Fill::NoFill,
                DEFAULT_LINE_WIDTH,
                meta.clone(),
            );
            self.plotter.circle(
                center,
                diameter + width - DEFAULT_LINE_WIDTH,
                Fill::NoFill,
                DEFAULT_LINE_WIDTH,
                meta,
            );
        }
    }

    /// Draws a cubic Bezier curve as a single stroke. A zero width falls
    /// back to the default pen.
    pub fn thick_curve(
        &mut self,
        start: Point,
        end: Point,
        ctrl1: Point,
        ctrl2: Point,
        width: f64,
        meta: Option<ElementMeta>,
    ) {
        let width = if width == 0.0 { DEFAULT_LINE_WIDTH } else { width };
        self.plotter.set_current_line_width(width);
        self.plotter.curve(start, end, ctrl1, ctrl2, width, meta);
    }
}
