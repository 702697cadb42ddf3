//! The plot engine: walks a [`Board`] and drives a [`Plotter`].
//!
//! One [`BoardPlotter`] plots one or more layers of a board into an
//! abstract command stream. The order of emission is fixed and observable:
//! pads, then vias, then tracks, then zone fills, then module edges, then
//! drill marks on standard layers; board graphics then module texts on
//! silkscreen layers. Consumers that diff command streams depend on this
//! order, so it is part of the contract rather than an implementation
//! detail.
//!
//! All coordinates are board native units and all angles decidegrees.

mod flash;
mod thick;

use log::debug;
use serde::{Deserialize, Serialize};

use gravure_core::{Color, ElementMeta, LayerId, LayerSet, Point, Size, arc_tangente, line_length};

use crate::board::{
    Board, Dimension, DrawSegment, EdgeModule, EdgeShape, Module, ModuleGraphic, Pad,
    PadAttribute, PadDrillShape, PadShape, TextItem, TextModule, Zone, ZoneFillMode,
};
use crate::error::PlotError;
use crate::palette::LayerPalette;
use crate::plotter::{Fill, Plotter};

/// Pen width used for outline strokes and as the minimum rendered width,
/// in board native units.
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

/// How pad and via drill holes are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrillMarks {
    /// No drill marks at all.
    None,
    /// Circular drills capped to a fixed small diameter.
    #[default]
    Small,
    /// Drills at their real size.
    Full,
}

/// Tunable plot behavior, shared by every layer pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotOptions {
    /// Whether closed shapes render filled or as outline strokes.
    pub mode: Fill,
    /// Drill mark rendering. Forced off on mask, paste and adhesive
    /// layers by the per-layer dispatch.
    pub drill_marks: DrillMarks,
    /// Skip pads whose hole is not plated. Forced on for copper layers
    /// by the per-layer dispatch.
    pub skip_npth_pads: bool,
    /// Use the greyscale diffing palette for copper pads where defined.
    pub diffing: bool,
    /// Diameter cap for circular drill marks when [`DrillMarks::Small`].
    pub small_drill_width: f64,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            mode: Fill::Filled,
            drill_marks: DrillMarks::Small,
            skip_npth_pads: true,
            diffing: false,
            small_drill_width: 15.0,
        }
    }
}

/// Plots board layers into an abstract [`Plotter`].
pub struct BoardPlotter<'a, P: Plotter> {
    plotter: &'a mut P,
    options: PlotOptions,
    palette: LayerPalette,
    layer_mask: LayerSet,
}

impl<'a, P: Plotter> BoardPlotter<'a, P> {
    /// Creates a plotter over `plotter` with default options and the
    /// default palette, masked to the two outer copper layers.
    pub fn new(plotter: &'a mut P) -> Self {
        Self::with_options(plotter, PlotOptions::default())
    }

    /// Creates a plotter with explicit options.
    pub fn with_options(plotter: &'a mut P, options: PlotOptions) -> Self {
        Self {
            plotter,
            options,
            palette: LayerPalette::default(),
            layer_mask: LayerSet::from_layers(&[LayerId::F_CU, LayerId::B_CU]),
        }
    }

    /// Replaces the layer palette.
    pub fn set_palette(&mut self, palette: LayerPalette) {
        self.palette = palette;
    }

    /// The current options.
    pub fn options(&self) -> &PlotOptions {
        &self.options
    }

    /// Restricts subsequent passes to `mask`.
    pub fn set_layer_mask(&mut self, mask: LayerSet) {
        self.layer_mask = mask;
    }

    fn plot_mode(&self) -> Fill {
        self.options.mode
    }

    /// Resolves the drawing color for `layer` from the active palette.
    /// In diffing mode a layer without a greyscale entry renders light
    /// gray rather than in its standard color.
    pub fn color_for_layer(&self, layer: LayerId) -> Color {
        if self.options.diffing {
            self.palette
                .diff_color(layer)
                .unwrap_or(Color::LIGHT_GRAY)
        } else {
            self.palette.standard_color(layer)
        }
    }

    /// Plots every layer in `mask` as one combined pass: the standard
    /// items first, then the silkscreen items.
    pub fn plot_board_layers(&mut self, board: &Board, mask: LayerSet) -> Result<(), PlotError> {
        self.layer_mask = mask;
        self.plot_standard_layer(board)?;
        self.plot_silk_screen(board)
    }

    /// Plots a single layer, applying the per-family policy: copper
    /// layers force NPTH skipping, mask/paste/adhesive layers suppress
    /// drill marks, and technical layers render as silkscreen.
    pub fn plot_one_board_layer(&mut self, board: &Board, layer: LayerId) -> Result<(), PlotError> {
        debug!(layer:% = layer; "plotting board layer");
        self.layer_mask = LayerSet::single(layer);
        if layer.is_copper() {
            self.options.skip_npth_pads = true;
            return self.plot_standard_layer(board);
        }
        match layer {
            LayerId::B_MASK | LayerId::F_MASK => {
                self.options.skip_npth_pads = false;
                self.options.drill_marks = DrillMarks::None;
                let min_width = board.design_settings.solder_mask_min_width;
                if min_width == 0.0 {
                    self.plot_standard_layer(board)
                } else {
                    self.plot_solder_mask_layer(board, min_width)
                }
            }
            LayerId::B_ADHES | LayerId::F_ADHES | LayerId::B_PASTE | LayerId::F_PASTE => {
                self.options.skip_npth_pads = false;
                self.options.drill_marks = DrillMarks::None;
                self.plot_standard_layer(board)
            }
            LayerId::B_SILKS | LayerId::F_SILKS => self.plot_silk_screen(board),
            _ => {
                self.options.skip_npth_pads = false;
                self.options.drill_marks = DrillMarks::None;
                self.plot_silk_screen(board)
            }
        }
    }

    /// Plots pads, vias, tracks, zone fills, module edges and drill
    /// marks for the layers in the current mask, in that order.
    pub fn plot_standard_layer(&mut self, board: &Board) -> Result<(), PlotError> {
        debug!("plotting standard layer items");
        let mode = self.plot_mode();

        for module in &board.modules {
            for pad in &module.pads {
                if self.layer_mask.intersection(pad.layers).is_empty() {
                    continue;
                }
                if self.options.skip_npth_pads && pad.attribute == PadAttribute::HoleNotPlated {
                    continue;
                }
                // Copper pads ignore the layer palette: back copper is
                // green, front copper mixes in red, so a through pad on
                // both coppers reads as their blend.
                let mut color = Color::BLACK;
                if pad.layers.contains(LayerId::B_CU) {
                    let diff = self.options.diffing.then(|| self.palette.diff_color(LayerId::B_CU));
                    color = diff.flatten().unwrap_or(Color::GREEN);
                }
                if pad.layers.contains(LayerId::F_CU) {
                    let diff = self.options.diffing.then(|| self.palette.diff_color(LayerId::F_CU));
                    color = diff.flatten().unwrap_or_else(|| color.mix(Color::RED));
                }
                let meta = ElementMeta::new("module", &module.name, module.layer, "pad");
                self.plot_pad(pad, color, mode, Some(meta))?;
            }
        }

        for via in &board.vias {
            let (layer1, layer2) = via.layer_pair;
            if !self.layer_mask.contains(layer1) && self.layer_mask.contains(layer2) {
                continue;
            }
            let diameter = via.width + 2.0;
            if diameter <= 0.0 {
                continue;
            }
            self.plotter.set_color(Color::BLACK);
            self.flash_pad_circle(via.position, diameter, mode, None);
        }

        for track in &board.tracks {
            if !self.layer_mask.contains(track.layer) {
                continue;
            }
            self.plotter.set_color(self.color_for_layer(track.layer));
            self.thick_segment(track.start, track.end, track.width, mode, None);
        }

        for zone in &board.zones {
            if !self.layer_mask.contains(zone.layer) {
                continue;
            }
            self.plot_filled_areas(zone);
        }

        for module in &board.modules {
            for graphic in &module.graphics {
                if let ModuleGraphic::Edge(edge) = graphic {
                    if self.layer_mask.contains(edge.layer) {
                        self.plot_edge_module(edge, module)?;
                    }
                }
            }
        }

        self.plot_drill_marks(board);
        Ok(())
    }

    /// Plots board-level graphics then module text fields for the layers
    /// in the current mask.
    pub fn plot_silk_screen(&mut self, board: &Board) -> Result<(), PlotError> {
        debug!("plotting silkscreen items");
        self.plot_board_graphic_items(board)?;
        for module in &board.modules {
            self.plot_all_text_module(module);
        }
        Ok(())
    }

    /// Mask layers with a nonzero minimum web width need pad silhouettes
    /// swollen and re-merged before stroking. That pass is not built yet,
    /// so the layer plots nothing rather than plotting wrong clearances.
    fn plot_solder_mask_layer(&mut self, _board: &Board, min_width: f64) -> Result<(), PlotError> {
        debug!(min_width; "solder mask swell pass not implemented, layer left empty");
        Ok(())
    }

    /// Plots board-level draw segments, dimensions and free texts.
    pub fn plot_board_graphic_items(&mut self, board: &Board) -> Result<(), PlotError> {
        for segment in &board.draw_segments {
            self.plot_draw_segment(segment);
        }
        for dimension in &board.dimensions {
            self.plot_dimension(dimension);
        }
        for text in &board.texts {
            self.plot_board_text(text);
        }
        // TODO: render board targets (ring plus Plus/Cross hairlines).
        Ok(())
    }

    /// Flashes one pad in `color`. The provenance tag is attached to the
    /// circular silhouette only.
    pub fn plot_pad(
        &mut self,
        pad: &Pad,
        color: Color,
        fill: Fill,
        meta: Option<ElementMeta>,
    ) -> Result<(), PlotError> {
        self.plotter.set_color(color);
        match pad.shape {
            PadShape::Circle => {
                self.flash_pad_circle(pad.position, pad.size.width(), fill, meta);
            }
            PadShape::Rect => {
                self.flash_pad_rect(pad.position, pad.size, pad.orientation, fill);
            }
            PadShape::Oval => {
                self.flash_pad_oval(pad.position, pad.size, pad.orientation, fill, None);
            }
            PadShape::Trapezoid => {
                // Half dimensions and skew deltas use integer halving.
                let half_width = ((pad.size.width() as i64) >> 1) as f64;
                let half_height = ((pad.size.height() as i64) >> 1) as f64;
                let mut delta_w = ((pad.delta.width() as i64) >> 1) as f64;
                let mut delta_h = ((pad.delta.height() as i64) >> 1) as f64;

                // The skew must stay strictly inside the opposite half
                // dimension or the outline self-intersects.
                if delta_w < 0.0 && delta_w <= -half_height {
                    delta_w = -half_height + 1.0;
                }
                if delta_w > 0.0 && delta_w >= half_height {
                    delta_w = half_height - 1.0;
                }
                if delta_h < 0.0 && delta_h <= -half_width {
                    delta_h = -half_width + 1.0;
                }
                if delta_h > 0.0 && delta_h >= half_width {
                    delta_h = half_width - 1.0;
                }

                let corners = [
                    Point::new(-half_width - delta_h, half_height + delta_w),
                    Point::new(-half_width + delta_h, -half_height - delta_w),
                    Point::new(half_width - delta_h, -half_height + delta_w),
                    Point::new(half_width + delta_h, half_height - delta_w),
                ];
                self.flash_pad_trapezoid(pad.position, corners, pad.orientation, fill);
            }
            PadShape::RoundRect => {
                let smaller = pad.size.width().min(pad.size.height());
                let corner_radius = (smaller * pad.round_rect_ratio).floor();
                self.flash_pad_round_rect(pad.position, pad.size, corner_radius, pad.orientation, fill);
            }
            PadShape::Custom => return Err(PlotError::UnsupportedPadShape(pad.shape)),
        }
        Ok(())
    }

    /// Plots one module on its own: its edges, then its pads as plain
    /// outlines. Trapezoid and round-rect pads are not flashed by this
    /// pass, only by the standard-layer pad pass.
    pub fn plot_module(&mut self, module: &Module) -> Result<(), PlotError> {
        for graphic in &module.graphics {
            if let ModuleGraphic::Edge(edge) = graphic {
                self.plot_edge_module(edge, module)?;
            }
        }

        for pad in &module.pads {
            match pad.shape {
                PadShape::Circle => {
                    self.flash_pad_circle(pad.position, pad.size.width(), Fill::NoFill, None);
                }
                PadShape::Rect => {
                    self.flash_pad_rect(pad.position, pad.size, pad.orientation, Fill::NoFill);
                }
                PadShape::Oval => {
                    self.flash_pad_oval(pad.position, pad.size, pad.orientation, Fill::NoFill, None);
                }
                PadShape::Trapezoid | PadShape::RoundRect => {}
                PadShape::Custom => return Err(PlotError::UnsupportedPadShape(pad.shape)),
            }
        }
        Ok(())
    }

    /// Plots a module edge. An edge with a missing endpoint is dropped.
    pub fn plot_edge_module(
        &mut self,
        edge: &EdgeModule,
        module: &Module,
    ) -> Result<(), PlotError> {
        let (Some(start), Some(end)) = (edge.start, edge.end) else {
            return Ok(());
        };
        self.plotter.set_color(self.color_for_layer(edge.layer));

        let mode = self.plot_mode();
        let line_width = edge.line_width;
        let pos = start
            .rotated_about(Point::new(0.0, 0.0), module.orientation)
            .add(module.position);
        let end = end
            .rotated_about(Point::new(0.0, 0.0), module.orientation)
            .add(module.position);

        match edge.shape {
            EdgeShape::Segment => {
                let meta = ElementMeta::new("module", &module.name, edge.layer, "segment");
                self.thick_segment(pos, end, line_width, mode, Some(meta));
            }
            EdgeShape::Circle => {
                let radius = line_length(pos, end);
                let meta = ElementMeta::new("module", &module.name, edge.layer, "circle");
                self.thick_circle(pos, radius * 2.0, line_width, mode, Some(meta));
            }
            EdgeShape::Arc => {
                let radius = line_length(pos, end);
                let start_angle = arc_tangente(end.y() - pos.y(), end.x() - pos.x());
                let end_angle = start_angle + edge.angle;
                let meta = ElementMeta::new("module", &module.name, edge.layer, "arc");
                self.thick_arc(pos, end_angle, start_angle, radius, line_width, mode, Some(meta));
            }
            EdgeShape::Polygon => {
                if edge.polygon_points.len() <= 1 {
                    return Ok(());
                }
                let corners: Vec<Point> = edge
                    .polygon_points
                    .iter()
                    .map(|p| {
                        p.rotated_about(Point::new(0.0, 0.0), module.orientation)
                            .add(module.position)
                    })
                    .collect();
                let meta = ElementMeta::new("module", &module.name, edge.layer, "polygon");
                self.plotter
                    .polyline(&corners, Fill::Filled, line_width, Some(meta));
            }
            EdgeShape::Curve => {
                let ctrl1 = edge
                    .bezier_c1
                    .rotated_about(Point::new(0.0, 0.0), module.orientation)
                    .add(module.position);
                let ctrl2 = edge
                    .bezier_c2
                    .rotated_about(Point::new(0.0, 0.0), module.orientation)
                    .add(module.position);
                let meta = ElementMeta::new("module", &module.name, edge.layer, "curve");
                self.thick_curve(pos, end, ctrl1, ctrl2, line_width, Some(meta));
            }
            EdgeShape::Rect | EdgeShape::Last => {
                return Err(PlotError::UnsupportedEdgeShape(edge.shape));
            }
        }
        Ok(())
    }

    /// Plots a module's reference, value and free text fields, each on
    /// its own layer and only when that layer is in the mask.
    pub fn plot_all_text_module(&mut self, module: &Module) {
        if self.layer_mask.contains(module.reference.layer) {
            let color = self.color_for_layer(module.reference.layer);
            self.plot_text_module(module, &module.reference, color);
        }
        if self.layer_mask.contains(module.value.layer) {
            let color = self.color_for_layer(module.value.layer);
            self.plot_text_module(module, &module.value, color);
        }
        for graphic in &module.graphics {
            let ModuleGraphic::Text(text) = graphic else {
                continue;
            };
            if !text.visible || !self.layer_mask.contains(text.layer) {
                continue;
            }
            let color = self.color_for_layer(text.layer);
            self.plot_text_module(module, text, color);
        }
    }

    fn plot_text_module(&mut self, module: &Module, text: &TextModule, color: Color) {
        let pos = text
            .position
            .rotated_about(Point::new(0.0, 0.0), module.orientation)
            .add(module.position);
        let size = if text.mirror { -text.size } else { text.size };
        let meta = ElementMeta::new("module", &module.name, text.layer, "text");
        self.plotter.text(
            pos,
            color,
            &text.text,
            text.angle,
            size,
            text.h_justify,
            text.v_justify,
            text.line_width,
            text.italic,
            text.bold,
            false,
            Some(meta),
        );
    }

    /// Plots a free board text. Literal `\n` sequences embed line breaks.
    pub fn plot_board_text(&mut self, text: &TextItem) {
        if !self.layer_mask.contains(text.layer) {
            return;
        }
        let color = self.color_for_layer(text.layer);
        let unescaped = text.text.replace("\\n", "\n");
        self.plotter.text(
            text.position,
            color,
            &unescaped,
            text.angle,
            text.size,
            text.h_justify,
            text.v_justify,
            text.line_width,
            text.italic,
            text.bold,
            false,
            None,
        );
    }

    /// Plots one board-level draw segment. Arc and circle segments store
    /// their center in `start` and a circumference point in `end`; any
    /// shape without a dedicated rendering falls back to a segment.
    pub fn plot_draw_segment(&mut self, segment: &DrawSegment) {
        let mode = self.plot_mode();
        let start = segment.start;
        let end = segment.end;
        let line_width = segment.line_width;

        self.plotter.set_color(self.color_for_layer(segment.layer));
        self.plotter.set_current_line_width(line_width);

        match segment.shape {
            EdgeShape::Circle => {
                let radius = line_length(end, start);
                self.thick_circle(start, radius * 2.0, line_width, mode, None);
            }
            EdgeShape::Arc => {
                let radius = line_length(end, start);
                let start_angle = arc_tangente(end.y() - start.y(), end.x() - start.x());
                let end_angle = start_angle + segment.angle;
                self.thick_arc(start, end_angle, start_angle, radius, line_width, mode, None);
            }
            EdgeShape::Curve => {
                for pair in segment.bezier_points.windows(2) {
                    self.thick_segment(pair[0], pair[1], line_width, mode, None);
                }
            }
            _ => {
                self.thick_segment(start, end, line_width, mode, None);
            }
        }
    }

    /// Plots a dimension annotation: its text, then the crossbar, the
    /// two feature lines and the four arrow strokes.
    pub fn plot_dimension(&mut self, dimension: &Dimension) {
        if !self.layer_mask.contains(dimension.layer) {
            return;
        }
        self.plotter
            .set_color(self.color_for_layer(dimension.layer));
        self.plot_board_text(&dimension.text);

        let strokes = [
            (dimension.cross_bar_origin, dimension.cross_bar_end),
            (dimension.feature_line_g_origin, dimension.feature_line_g_end),
            (dimension.feature_line_d_origin, dimension.feature_line_d_end),
            (dimension.cross_bar_end, dimension.arrow_d1_end),
            (dimension.cross_bar_end, dimension.arrow_d2_end),
            (dimension.cross_bar_origin, dimension.arrow_g1_end),
            (dimension.cross_bar_origin, dimension.arrow_g2_end),
        ];
        for (start, end) in strokes {
            let segment = DrawSegment {
                shape: EdgeShape::Segment,
                start,
                end,
                angle: 0.0,
                line_width: dimension.line_width,
                layer: dimension.layer,
                bezier_points: Vec::new(),
            };
            self.plot_draw_segment(&segment);
        }
    }

    /// Plots the fill of one zone. Polygon-filled zones stroke their
    /// outlines filled; segment-filled zones draw every fill segment and
    /// then the outline unfilled when the zone has a minimum thickness.
    /// In outline mode only the boundary is drawn, and only when the
    /// zone has a minimum thickness.
    pub fn plot_filled_areas(&mut self, zone: &Zone) {
        if zone.filled_polygons.is_empty() {
            return;
        }
        let mode = self.plot_mode();
        self.plotter.set_color(self.color_for_layer(zone.layer));

        for polygon in &zone.filled_polygons {
            if polygon.is_empty() {
                continue;
            }
            let mut corners = polygon.clone();
            corners.push(corners[0]);

            if mode == Fill::Filled {
                match zone.fill_mode {
                    ZoneFillMode::Polygon => {
                        self.plotter
                            .polyline(&corners, Fill::Filled, zone.min_thickness, None);
                    }
                    ZoneFillMode::Segments => {
                        for segment in &zone.fill_segments {
                            self.thick_segment(
                                segment.start,
                                segment.end,
                                zone.min_thickness,
                                mode,
                                None,
                            );
                        }
                        if zone.min_thickness > 0.0 {
                            self.plotter
                                .polyline(&corners, Fill::NoFill, zone.min_thickness, None);
                        }
                    }
                }
            } else if zone.min_thickness > 0.0 {
                for pair in corners.windows(2) {
                    self.thick_segment(pair[0], pair[1], zone.min_thickness, mode, None);
                }
            }
        }
    }

    /// Plots drill marks for every via and every drilled pad, honoring
    /// the configured drill mark mode.
    pub fn plot_drill_marks(&mut self, board: &Board) {
        if self.options.drill_marks == DrillMarks::None {
            return;
        }
        if self.plot_mode() == Fill::Filled {
            self.plotter.set_color(Color::BLACK);
        }
        let small_drill = if self.options.drill_marks == DrillMarks::Small {
            self.options.small_drill_width
        } else {
            0.0
        };

        for via in &board.vias {
            self.plot_one_drill_mark(
                PadDrillShape::Circle,
                via.position,
                Size::new(via.drill.unwrap_or(0.0), 0.0),
                Size::new(via.width, 0.0),
                0.0,
                small_drill,
            );
        }
        for module in &board.modules {
            for pad in &module.pads {
                if pad.drill_size.width() == 0.0 {
                    continue;
                }
                self.plot_one_drill_mark(
                    pad.drill_shape,
                    pad.position,
                    pad.drill_size,
                    pad.size,
                    pad.orientation,
                    small_drill,
                );
            }
        }
    }

    /// Plots one drill mark, clamped to stay strictly inside the pad
    /// body with at least one unit of annular remainder.
    fn plot_one_drill_mark(
        &mut self,
        shape: PadDrillShape,
        position: Point,
        drill_size: Size,
        pad_size: Size,
        orientation: f64,
        small_drill: f64,
    ) {
        let mode = self.plot_mode();
        let mut width = drill_size.width();
        let mut height = drill_size.height();

        if small_drill > 0.0 && shape == PadDrillShape::Circle {
            width = width.min(small_drill);
        }
        width = gravure_core::clamp(1.0, width, pad_size.width() - 1.0);
        height = gravure_core::clamp(1.0, height, pad_size.height() - 1.0);

        if shape == PadDrillShape::Oblong {
            self.flash_pad_oval(position, Size::new(width, height), orientation, mode, None);
        } else {
            self.flash_pad_circle(position, width, mode, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Segment, Target, TargetShape, Track, Via};
    use crate::record::{CommandRecorder, PlotCommand};

    fn circular_pad(diameter: f64, layers: &[LayerId]) -> Pad {
        Pad {
            size: Size::new(diameter, diameter),
            layers: LayerSet::from_layers(layers),
            ..Pad::default()
        }
    }

    fn board_with_pad(pad: Pad) -> Board {
        let module = Module {
            name: "R1".to_string(),
            pads: vec![pad],
            ..Module::default()
        };
        Board {
            modules: vec![module],
            ..Board::default()
        }
    }

    #[test]
    fn test_copper_layer_forces_npth_skip() {
        let mut recorder = CommandRecorder::new();
        let mut plotter = BoardPlotter::with_options(
            &mut recorder,
            PlotOptions {
                skip_npth_pads: false,
                ..PlotOptions::default()
            },
        );
        plotter
            .plot_one_board_layer(&Board::default(), LayerId::F_CU)
            .unwrap();
        assert!(plotter.options().skip_npth_pads);
    }

    #[test]
    fn test_mask_layer_suppresses_drill_marks() {
        let mut recorder = CommandRecorder::new();
        let mut plotter = BoardPlotter::new(&mut recorder);
        plotter
            .plot_one_board_layer(&Board::default(), LayerId::F_MASK)
            .unwrap();
        assert!(!plotter.options().skip_npth_pads);
        assert_eq!(plotter.options().drill_marks, DrillMarks::None);
    }

    #[test]
    fn test_mask_layer_with_min_width_plots_nothing() {
        let mut pad = circular_pad(40.0, &[LayerId::F_MASK]);
        pad.attribute = PadAttribute::Smd;
        let mut board = board_with_pad(pad);
        board.design_settings.solder_mask_min_width = 5.0;

        let mut recorder = CommandRecorder::new();
        let mut plotter = BoardPlotter::new(&mut recorder);
        plotter.plot_one_board_layer(&board, LayerId::F_MASK).unwrap();
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_npth_pad_skipped_on_copper() {
        let mut pad = circular_pad(40.0, &[LayerId::F_CU]);
        pad.attribute = PadAttribute::HoleNotPlated;
        let board = board_with_pad(pad);

        let mut recorder = CommandRecorder::new();
        let mut plotter = BoardPlotter::new(&mut recorder);
        plotter.plot_one_board_layer(&board, LayerId::F_CU).unwrap();
        assert!(
            !recorder
                .commands()
                .iter()
                .any(|c| matches!(c, PlotCommand::Circle { .. }))
        );
    }

    #[test]
    fn test_pad_outside_mask_skipped() {
        let pad = circular_pad(40.0, &[LayerId::B_CU]);
        let board = board_with_pad(pad);

        let mut recorder = CommandRecorder::new();
        let mut plotter = BoardPlotter::new(&mut recorder);
        plotter.plot_one_board_layer(&board, LayerId::F_CU).unwrap();
        assert!(
            !recorder
                .commands()
                .iter()
                .any(|c| matches!(c, PlotCommand::Circle { .. }))
        );
    }

    #[test]
    fn test_trapezoid_pad_skew_clamped_inside_pad() {
        // Half dimensions come from integer halving: 41x21 halves to
        // 20x10. The nominal width delta of 30 halves to 15, past the
        // half height, and is pulled back to 9.
        let pad = Pad {
            size: Size::new(41.0, 21.0),
            delta: Size::new(30.0, 0.0),
            shape: PadShape::Trapezoid,
            ..Pad::default()
        };
        let mut recorder = CommandRecorder::new();
        let mut plotter = BoardPlotter::new(&mut recorder);
        plotter
            .plot_pad(&pad, Color::BLACK, Fill::Filled, None)
            .unwrap();

        let PlotCommand::Polyline { points, fill, .. } = &recorder.commands()[1] else {
            panic!("expected a polyline");
        };
        assert_eq!(*fill, Fill::Filled);
        assert_eq!(
            points,
            &[
                Point::new(-20.0, 19.0),
                Point::new(-20.0, -19.0),
                Point::new(20.0, -1.0),
                Point::new(20.0, 1.0),
                Point::new(-20.0, 19.0),
            ]
        );
    }

    #[test]
    fn test_round_rect_pad_radius_floored() {
        // 30 * 0.25 = 7.5, floored to 7 before flashing.
        let pad = Pad {
            size: Size::new(40.0, 30.0),
            shape: PadShape::RoundRect,
            round_rect_ratio: 0.25,
            ..Pad::default()
        };
        let mut recorder = CommandRecorder::new();
        let mut plotter = BoardPlotter::new(&mut recorder);
        plotter
            .plot_pad(&pad, Color::BLACK, Fill::Filled, None)
            .unwrap();

        assert_eq!(
            recorder.commands()[1],
            PlotCommand::Arc {
                center: Point::new(7.0, 7.0),
                start_angle: 900.0,
                end_angle: 1800.0,
                radius: 7.0,
                fill: Fill::Filled,
                width: 0.0,
                meta: None,
            }
        );
    }

    #[test]
    fn test_pad_copper_colors() {
        // Back copper only: green. Both coppers: green mixed with red.
        let board = board_with_pad(circular_pad(40.0, &[LayerId::B_CU]));
        let mut recorder = CommandRecorder::new();
        let mut plotter = BoardPlotter::new(&mut recorder);
        plotter.plot_one_board_layer(&board, LayerId::B_CU).unwrap();
        assert_eq!(recorder.commands()[0], PlotCommand::SetColor(Color::GREEN));

        let board = board_with_pad(circular_pad(40.0, &[LayerId::F_CU, LayerId::B_CU]));
        let mut recorder = CommandRecorder::new();
        let mut plotter = BoardPlotter::new(&mut recorder);
        plotter.plot_one_board_layer(&board, LayerId::F_CU).unwrap();
        assert_eq!(
            recorder.commands()[0],
            PlotCommand::SetColor(Color::GREEN.mix(Color::RED))
        );
    }

    #[test]
    fn test_plot_module_flashes_outlines_only() {
        let mut trapezoid = circular_pad(40.0, &[LayerId::F_CU]);
        trapezoid.shape = PadShape::Trapezoid;
        let mut module = Module {
            name: "Q1".to_string(),
            ..Module::default()
        };
        module.pads = vec![circular_pad(40.0, &[LayerId::F_CU]), trapezoid];

        let mut recorder = CommandRecorder::new();
        let mut plotter = BoardPlotter::new(&mut recorder);
        plotter.plot_module(&module).unwrap();

        // The circular pad strokes its outline; the trapezoid pad is
        // not flashed by this pass.
        let circles = recorder
            .commands()
            .iter()
            .filter(|c| matches!(c, PlotCommand::Circle { fill: Fill::NoFill, .. }))
            .count();
        let polylines = recorder
            .commands()
            .iter()
            .filter(|c| matches!(c, PlotCommand::Polyline { .. }))
            .count();
        assert_eq!(circles, 1);
        assert_eq!(polylines, 0);
    }

    #[test]
    fn test_custom_pad_shape_fails() {
        let mut pad = circular_pad(40.0, &[LayerId::F_CU]);
        pad.shape = PadShape::Custom;
        let board = board_with_pad(pad);

        let mut recorder = CommandRecorder::new();
        let mut plotter = BoardPlotter::new(&mut recorder);
        let err = plotter
            .plot_one_board_layer(&board, LayerId::F_CU)
            .unwrap_err();
        assert!(matches!(err, PlotError::UnsupportedPadShape(PadShape::Custom)));
    }

    #[test]
    fn test_via_skipped_by_layer_pair_rule() {
        // A via is dropped only when its first layer is out of the mask
        // while its second is in.
        let via = Via {
            position: Point::new(0.0, 0.0),
            width: 10.0,
            drill: None,
            layer_pair: (LayerId::F_CU, LayerId::B_CU),
        };
        let board = Board {
            vias: vec![via],
            ..Board::default()
        };

        let mut recorder = CommandRecorder::new();
        let mut plotter = BoardPlotter::with_options(
            &mut recorder,
            PlotOptions {
                drill_marks: DrillMarks::None,
                ..PlotOptions::default()
            },
        );
        plotter.set_layer_mask(LayerSet::single(LayerId::B_CU));
        plotter.plot_standard_layer(&board).unwrap();
        assert!(recorder.is_empty());

        let mut recorder = CommandRecorder::new();
        let mut plotter = BoardPlotter::with_options(
            &mut recorder,
            PlotOptions {
                drill_marks: DrillMarks::None,
                ..PlotOptions::default()
            },
        );
        plotter.set_layer_mask(LayerSet::single(LayerId::F_CU));
        plotter.plot_standard_layer(&board).unwrap();
        assert_eq!(recorder.commands()[0], PlotCommand::SetColor(Color::BLACK));
        assert_eq!(
            recorder.commands()[1],
            PlotCommand::Circle {
                center: Point::new(0.0, 0.0),
                diameter: 12.0,
                fill: Fill::Filled,
                width: 0.0,
                meta: None,
            }
        );
    }

    #[test]
    fn test_track_plotted_as_thick_segment() {
        let track = Track {
            start: Point::new(0.0, 0.0),
            end: Point::new(100.0, 0.0),
            width: 8.0,
            layer: LayerId::F_CU,
        };
        let board = Board {
            tracks: vec![track],
            ..Board::default()
        };

        let mut recorder = CommandRecorder::new();
        let mut plotter = BoardPlotter::new(&mut recorder);
        plotter.plot_one_board_layer(&board, LayerId::F_CU).unwrap();
        let commands = recorder.commands();
        assert_eq!(commands[0], PlotCommand::SetColor(Color::RED));
        assert_eq!(commands[1], PlotCommand::SetFill(Fill::NoFill));
        assert_eq!(commands[2], PlotCommand::SetCurrentLineWidth(8.0));
        assert_eq!(commands[3], PlotCommand::MoveTo(Point::new(0.0, 0.0)));
        assert_eq!(
            commands[4],
            PlotCommand::FinishTo {
                p: Point::new(100.0, 0.0),
                meta: None,
            }
        );
    }

    #[test]
    fn test_zone_polygon_fill() {
        let zone = Zone {
            layer: LayerId::F_CU,
            min_thickness: 2.0,
            fill_mode: ZoneFillMode::Polygon,
            filled_polygons: vec![vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
            ]],
            fill_segments: Vec::new(),
        };
        let board = Board {
            zones: vec![zone],
            ..Board::default()
        };

        let mut recorder = CommandRecorder::new();
        let mut plotter = BoardPlotter::with_options(
            &mut recorder,
            PlotOptions {
                drill_marks: DrillMarks::None,
                ..PlotOptions::default()
            },
        );
        plotter.set_layer_mask(LayerSet::single(LayerId::F_CU));
        plotter.plot_standard_layer(&board).unwrap();

        let commands = recorder.commands();
        assert_eq!(commands[0], PlotCommand::SetColor(Color::RED));
        assert_eq!(
            commands[1],
            PlotCommand::Polyline {
                points: vec![
                    Point::new(0.0, 0.0),
                    Point::new(10.0, 0.0),
                    Point::new(10.0, 10.0),
                    Point::new(0.0, 0.0),
                ],
                fill: Fill::Filled,
                width: 2.0,
                meta: None,
            }
        );
    }

    #[test]
    fn test_zone_outline_mode_without_thickness_plots_nothing() {
        let zone = Zone {
            layer: LayerId::F_CU,
            min_thickness: 0.0,
            fill_mode: ZoneFillMode::Polygon,
            filled_polygons: vec![vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]],
            fill_segments: Vec::new(),
        };

        let mut recorder = CommandRecorder::new();
        let mut plotter = BoardPlotter::with_options(
            &mut recorder,
            PlotOptions {
                mode: Fill::NoFill,
                ..PlotOptions::default()
            },
        );
        plotter.plot_filled_areas(&zone);
        // Only the color is set; no boundary strokes without thickness.
        assert_eq!(recorder.commands().len(), 1);
        assert!(matches!(recorder.commands()[0], PlotCommand::SetColor(_)));
    }

    #[test]
    fn test_zone_without_filled_polygons_plots_nothing() {
        let zone = Zone {
            layer: LayerId::F_CU,
            min_thickness: 2.0,
            fill_mode: ZoneFillMode::Segments,
            filled_polygons: Vec::new(),
            fill_segments: vec![Segment {
                start: Point::new(0.0, 0.0),
                end: Point::new(5.0, 0.0),
            }],
        };

        let mut recorder = CommandRecorder::new();
        let mut plotter = BoardPlotter::new(&mut recorder);
        plotter.plot_filled_areas(&zone);
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_drill_marks_suppressed() {
        let via = Via {
            position: Point::new(0.0, 0.0),
            width: 10.0,
            drill: Some(4.0),
            layer_pair: (LayerId::F_CU, LayerId::B_CU),
        };
        let board = Board {
            vias: vec![via],
            ..Board::default()
        };

        let mut recorder = CommandRecorder::new();
        let mut plotter = BoardPlotter::with_options(
            &mut recorder,
            PlotOptions {
                drill_marks: DrillMarks::None,
                ..PlotOptions::default()
            },
        );
        plotter.plot_drill_marks(&board);
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_drill_mark_clamped_inside_pad() {
        let mut pad = circular_pad(10.0, &[LayerId::F_CU]);
        pad.drill_size = Size::new(40.0, 40.0);
        let board = board_with_pad(pad);

        let mut recorder = CommandRecorder::new();
        let mut plotter = BoardPlotter::with_options(
            &mut recorder,
            PlotOptions {
                drill_marks: DrillMarks::Full,
                ..PlotOptions::default()
            },
        );
        plotter.plot_drill_marks(&board);
        let diameter = recorder.commands().iter().find_map(|c| match c {
            PlotCommand::Circle { diameter, .. } => Some(*diameter),
            _ => None,
        });
        assert_eq!(diameter, Some(9.0));
    }

    #[test]
    fn test_small_drill_caps_circular_marks() {
        let mut pad = circular_pad(100.0, &[LayerId::F_CU]);
        pad.drill_size = Size::new(40.0, 40.0);
        let board = board_with_pad(pad);

        let mut recorder = CommandRecorder::new();
        let mut plotter = BoardPlotter::with_options(
            &mut recorder,
            PlotOptions {
                drill_marks: DrillMarks::Small,
                small_drill_width: 15.0,
                ..PlotOptions::default()
            },
        );
        plotter.plot_drill_marks(&board);
        let diameter = recorder.commands().iter().find_map(|c| match c {
            PlotCommand::Circle { diameter, .. } => Some(*diameter),
            _ => None,
        });
        assert_eq!(diameter, Some(15.0));
    }

    #[test]
    fn test_dimension_emits_seven_strokes_and_text() {
        let dimension = Dimension {
            layer: LayerId::DWGS_USER,
            line_width: 2.0,
            text: TextItem {
                text: "10 mm".to_string(),
                layer: LayerId::DWGS_USER,
                size: 10.0,
                ..TextItem::default()
            },
            cross_bar_origin: Point::new(0.0, 0.0),
            cross_bar_end: Point::new(100.0, 0.0),
            ..Dimension::default()
        };
        let board = Board {
            dimensions: vec![dimension],
            ..Board::default()
        };

        let mut recorder = CommandRecorder::new();
        let mut plotter = BoardPlotter::new(&mut recorder);
        plotter
            .plot_one_board_layer(&board, LayerId::DWGS_USER)
            .unwrap();

        let commands = recorder.commands();
        let texts = commands
            .iter()
            .filter(|c| matches!(c, PlotCommand::Text { .. }))
            .count();
        let strokes = commands
            .iter()
            .filter(|c| matches!(c, PlotCommand::FinishTo { .. }))
            .count();
        assert_eq!(texts, 1);
        assert_eq!(strokes, 7);
    }

    #[test]
    fn test_board_text_unescapes_newlines() {
        let text = TextItem {
            text: "line1\\nline2".to_string(),
            layer: LayerId::F_SILKS,
            ..TextItem::default()
        };
        let board = Board {
            texts: vec![text],
            ..Board::default()
        };

        let mut recorder = CommandRecorder::new();
        let mut plotter = BoardPlotter::new(&mut recorder);
        plotter
            .plot_one_board_layer(&board, LayerId::F_SILKS)
            .unwrap();
        let rendered = recorder.commands().iter().find_map(|c| match c {
            PlotCommand::Text { text, .. } => Some(text.clone()),
            _ => None,
        });
        assert_eq!(rendered, Some("line1\nline2".to_string()));
    }

    #[test]
    fn test_hidden_module_text_not_plotted() {
        let mut module = Module {
            name: "U1".to_string(),
            ..Module::default()
        };
        module.reference = TextModule {
            text: "U1".to_string(),
            layer: LayerId::F_SILKS,
            visible: true,
            ..TextModule::default()
        };
        module.value = TextModule {
            text: "74HC00".to_string(),
            layer: LayerId::F_SILKS,
            visible: true,
            ..TextModule::default()
        };
        module.graphics = vec![ModuleGraphic::Text(TextModule {
            text: "hidden".to_string(),
            layer: LayerId::F_SILKS,
            visible: false,
            ..TextModule::default()
        })];
        let board = Board {
            modules: vec![module],
            ..Board::default()
        };

        let mut recorder = CommandRecorder::new();
        let mut plotter = BoardPlotter::new(&mut recorder);
        plotter
            .plot_one_board_layer(&board, LayerId::F_SILKS)
            .unwrap();
        let texts: Vec<String> = recorder
            .commands()
            .iter()
            .filter_map(|c| match c {
                PlotCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["U1".to_string(), "74HC00".to_string()]);
    }

    #[test]
    fn test_edge_module_with_missing_endpoint_skipped() {
        let module = Module {
            name: "J1".to_string(),
            graphics: vec![ModuleGraphic::Edge(EdgeModule {
                shape: EdgeShape::Segment,
                start: None,
                end: Some(Point::new(10.0, 0.0)),
                layer: LayerId::F_SILKS,
                line_width: 2.0,
                ..EdgeModule::default()
            })],
            ..Module::default()
        };
        let board = Board {
            modules: vec![module],
            ..Board::default()
        };

        let mut recorder = CommandRecorder::new();
        let mut plotter = BoardPlotter::with_options(
            &mut recorder,
            PlotOptions {
                drill_marks: DrillMarks::None,
                ..PlotOptions::default()
            },
        );
        plotter.set_layer_mask(LayerSet::single(LayerId::F_SILKS));
        plotter.plot_standard_layer(&board).unwrap();
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_edge_module_rect_shape_fails() {
        let module = Module {
            name: "J1".to_string(),
            graphics: vec![ModuleGraphic::Edge(EdgeModule {
                shape: EdgeShape::Rect,
                start: Some(Point::new(0.0, 0.0)),
                end: Some(Point::new(10.0, 10.0)),
                layer: LayerId::F_SILKS,
                line_width: 2.0,
                ..EdgeModule::default()
            })],
            ..Module::default()
        };
        let board = Board {
            modules: vec![module],
            ..Board::default()
        };

        let mut recorder = CommandRecorder::new();
        let mut plotter = BoardPlotter::with_options(
            &mut recorder,
            PlotOptions {
                drill_marks: DrillMarks::None,
                ..PlotOptions::default()
            },
        );
        plotter.set_layer_mask(LayerSet::single(LayerId::F_SILKS));
        let err = plotter.plot_standard_layer(&board).unwrap_err();
        assert!(matches!(
            err,
            PlotError::UnsupportedEdgeShape(EdgeShape::Rect)
        ));
    }

    #[test]
    fn test_edge_module_rotates_with_module() {
        let module = Module {
            name: "J1".to_string(),
            position: Point::new(100.0, 100.0),
            orientation: 900.0,
            graphics: vec![ModuleGraphic::Edge(EdgeModule {
                shape: EdgeShape::Segment,
                start: Some(Point::new(0.0, 0.0)),
                end: Some(Point::new(10.0, 0.0)),
                layer: LayerId::F_SILKS,
                line_width: 2.0,
                ..EdgeModule::default()
            })],
            ..Module::default()
        };
        let board = Board {
            modules: vec![module],
            ..Board::default()
        };

        let mut recorder = CommandRecorder::new();
        let mut plotter = BoardPlotter::with_options(
            &mut recorder,
            PlotOptions {
                drill_marks: DrillMarks::None,
                ..PlotOptions::default()
            },
        );
        plotter.set_layer_mask(LayerSet::single(LayerId::F_SILKS));
        plotter.plot_standard_layer(&board).unwrap();

        // (10, 0) rotated a quarter turn lands at (0, -10).
        assert!(recorder.commands().iter().any(|c| matches!(
            c,
            PlotCommand::FinishTo { p, .. } if *p == Point::new(100.0, 90.0)
        )));
    }

    #[test]
    fn test_targets_not_rendered() {
        let board = Board {
            targets: vec![Target {
                shape: TargetShape::Plus,
                position: Point::new(0.0, 0.0),
                size: 10.0,
                line_width: 1.0,
                layer: LayerId::EDGE_CUTS,
            }],
            ..Board::default()
        };

        let mut recorder = CommandRecorder::new();
        let mut plotter = BoardPlotter::new(&mut recorder);
        plotter
            .plot_one_board_layer(&board, LayerId::EDGE_CUTS)
            .unwrap();
        assert!(recorder.is_empty());
    }
}
