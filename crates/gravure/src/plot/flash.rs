//! Pad flashing: pad silhouettes emitted as drawing primitives.
//!
//! In filled mode a pad flashes at its nominal size. In outline mode the
//! silhouette shrinks by the default pen width so the stroked boundary
//! stays inside the nominal footprint.
//!
//! Pads are modeled at the origin in their own frame, rotated by the pad
//! orientation and then translated to the pad position, so every shape
//! honors arbitrary decidegree rotations.

use gravure_core::{ElementMeta, Point, Size, add_angles};

use crate::plot::{BoardPlotter, DEFAULT_LINE_WIDTH};
use crate::plotter::{Fill, Plotter};

impl<P: Plotter> BoardPlotter<'_, P> {
    /// Flashes a circular pad of the given diameter.
    ///
    /// In outline mode a nominal diameter below 2 drives the capped pen
    /// width negative and the plotter receives that width unchanged.
    pub fn flash_pad_circle(
        &mut self,
        pos: Point,
        diameter: f64,
        fill: Fill,
        meta: Option<ElementMeta>,
    ) {
        if fill == Fill::Filled {
            self.plotter.circle(pos, diameter, fill, 0.0, meta);
        } else {
            let mut line_width = DEFAULT_LINE_WIDTH;
            self.plotter.set_current_line_width(line_width);
            // Keep the stroke inside the pad, with a one unit floor on
            // the drawn diameter.
            if line_width > diameter - 2.0 {
                line_width = diameter - 2.0;
            }
            self.plotter
                .circle(pos, diameter - line_width, Fill::NoFill, line_width, meta);
        }
    }

    /// Flashes an oval pad. The silhouette is normalized so its height
    /// is the long axis, adjusting the orientation by a quarter turn
    /// when the nominal size is wider than tall.
    pub fn flash_pad_oval(
        &mut self,
        pos: Point,
        size: Size,
        orientation: f64,
        fill: Fill,
        meta: Option<ElementMeta>,
    ) {
        let (size, orientation) = if size.width() > size.height() {
            (size.swapped(), add_angles(orientation, 900.0))
        } else {
            (size, orientation)
        };

        if fill == Fill::Filled {
            // A filled capsule is a thick segment between the two cap
            // centers.
            let delta = size.height() - size.width();
            let start = Point::new(0.0, -delta / 2.0).rotated(orientation).add(pos);
            let end = Point::new(0.0, delta / 2.0).rotated(orientation).add(pos);
            self.thick_segment(start, end, size.width(), fill, meta);
        } else {
            self.sketch_oval(pos, size, orientation, DEFAULT_LINE_WIDTH, meta);
        }
    }

    /// Strokes an oval outline: the two straight flanks, then the two
    /// semicircular caps.
    pub fn sketch_oval(
        &mut self,
        pos: Point,
        size: Size,
        orientation: f64,
        line_width: f64,
        meta: Option<ElementMeta>,
    ) {
        self.plotter.set_current_line_width(line_width);
        let (size, orientation) = if size.width() > size.height() {
            (size.swapped(), add_angles(orientation, 900.0))
        } else {
            (size, orientation)
        };
        let delta = size.height() - size.width();
        let radius = (size.width() - line_width) / 2.0;

        let p = Point::new(-radius, -delta / 2.0).rotated(orientation);
        self.plotter.move_to(p.add(pos));
        let p = Point::new(-radius, delta / 2.0).rotated(orientation);
        self.plotter.finish_to(p.add(pos), None);

        let p = Point::new(radius, -delta / 2.0).rotated(orientation);
        self.plotter.move_to(p.add(pos));
        let p = Point::new(radius, delta / 2.0).rotated(orientation);
        self.plotter.finish_to(p.add(pos), None);

        let cap = Point::new(0.0, delta / 2.0).rotated(orientation);
        self.plotter.arc(
            cap.add(pos),
            orientation + 1800.0,
            orientation + 3600.0,
            radius,
            Fill::NoFill,
            DEFAULT_LINE_WIDTH,
            None,
        );
        let cap = Point::new(0.0, -delta / 2.0).rotated(orientation);
        self.plotter.arc(
            cap.add(pos),
            orientation,
            orientation + 1800.0,
            radius,
            Fill::NoFill,
            DEFAULT_LINE_WIDTH,
            meta,
        );
    }

    /// Flashes a rectangular pad as a closed five point polyline.
    pub fn flash_pad_rect(&mut self, pos: Point, size: Size, orientation: f64, fill: Fill) {
        let line_width = DEFAULT_LINE_WIDTH;
        if fill == Fill::Filled {
            self.plotter.set_current_line_width(0.0);
        } else {
            self.plotter.set_current_line_width(line_width);
        }

        let width = (size.width() - line_width).max(1.0);
        let height = (size.height() - line_width).max(1.0);
        let dx = width / 2.0;
        let dy = height / 2.0;

        let mut points = vec![
            Point::new(pos.x() - dx, pos.y() + dy),
            Point::new(pos.x() - dx, pos.y() - dy),
            Point::new(pos.x() + dx, pos.y() - dy),
            Point::new(pos.x() + dx, pos.y() + dy),
        ];
        for p in &mut points {
            *p = p.rotated_about(pos, orientation);
        }
        points.push(points[0]);
        self.plotter.polyline(&points, fill, line_width, None);
    }

    /// Flashes a rounded rectangle pad: the four corner arcs, then the
    /// edge strokes.
    pub fn flash_pad_round_rect(
        &mut self,
        pos: Point,
        size: Size,
        corner_radius: f64,
        orientation: f64,
        fill: Fill,
    ) {
        let mut line_width = DEFAULT_LINE_WIDTH;
        let (size, corner_radius) = if fill == Fill::Filled {
            line_width = 0.0;
            (size, corner_radius)
        } else {
            (
                Size::new(size.width() - line_width, size.height() - line_width),
                corner_radius - line_width / 2.0,
            )
        };

        // Shapes are built in a corner origin frame, then rotated and
        // translated onto the pad position.
        let place = |p: Point| p.rotated(orientation).add(pos);

        let top_left = place(Point::new(corner_radius, 0.0));
        let top_right = place(Point::new(size.width(), 0.0));
        let bottom_left = place(Point::new(corner_radius, size.height()));
        let bottom_right = place(Point::new(size.width(), size.height()));
        let left_top = place(Point::new(0.0, corner_radius));
        let left_bottom = place(Point::new(0.0, size.height()));
        let right_top = place(Point::new(size.width(), corner_radius));
        let right_bottom = place(Point::new(size.width(), size.height()));

        let corner_tl = place(Point::new(corner_radius, corner_radius));
        let corner_bl = place(Point::new(corner_radius, size.height() - corner_radius));
        let corner_tr = place(Point::new(size.width() - corner_radius, corner_radius));
        let corner_br = place(Point::new(
            size.width() - corner_radius,
            size.height() - corner_radius,
        ));

        self.plotter.arc(
            corner_tl,
            orientation + 900.0,
            orientation + 1800.0,
            corner_radius,
            fill,
            line_width,
            None,
        );
        self.plotter.arc(
            corner_bl,
            orientation + 1800.0,
            orientation + 2700.0,
            corner_radius,
            fill,
            line_width,
            None,
        );
        self.plotter.arc(
            corner_tr,
            orientation,
            orientation + 900.0,
            corner_radius,
            fill,
            line_width,
            None,
        );
        self.plotter.arc(
            corner_br,
            orientation + 2700.0,
            orientation + 3600.0,
            corner_radius,
            fill,
            line_width,
            None,
        );

        self.plotter.polyline(
            &[top_left, top_right, bottom_right, bottom_left, top_left],
            fill,
            line_width,
            None,
        );
        self.plotter.polyline(
            &[left_top, right_top, right_bottom, left_bottom, left_top],
            fill,
            line_width,
            None,
        );
    }

    /// Flashes a trapezoid pad from its four corner offsets, given in
    /// the pad frame.
    pub fn flash_pad_trapezoid(
        &mut self,
        pos: Point,
        corners: [Point; 4],
        orientation: f64,
        fill: Fill,
    ) {
        let mut line_width = DEFAULT_LINE_WIDTH;
        let mut corners = corners;
        if fill == Fill::Filled {
            line_width = 0.0;
        } else {
            // Pull every corner inward so the stroke stays inside the
            // nominal outline.
            corners[0] = Point::new(corners[0].x() + line_width, corners[0].y() - line_width);
            corners[1] = Point::new(corners[1].x() + line_width, corners[1].y() + line_width);
            corners[2] = Point::new(corners[2].x() - line_width, corners[2].y() + line_width);
            corners[3] = Point::new(corners[3].x() - line_width, corners[3].y() - line_width);
        }

        let mut points: Vec<Point> = corners
            .iter()
            .map(|p| p.rotated(orientation).add(pos))
            .collect();
        points.push(points[0]);
        self.plotter.polyline(&points, fill, line_width, None);
    }
}
