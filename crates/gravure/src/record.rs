//! A plotter that records the abstract command stream.
//!
//! [`CommandRecorder`] captures every drawing call as a [`PlotCommand`]
//! value, in order. This is the device-independent plot itself: consumers
//! diff two recordings to compare board revisions, and the crate's own
//! tests assert on the recorded sequence rather than on a rendered picture.

use gravure_core::{Color, ElementMeta, Point};

use crate::plotter::{Fill, Plotter, TextHJustify, TextVJustify};

/// One recorded drawing command with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotCommand {
    SetColor(Color),
    SetCurrentLineWidth(f64),
    SetFill(Fill),
    MoveTo(Point),
    FinishTo {
        p: Point,
        meta: Option<ElementMeta>,
    },
    Circle {
        center: Point,
        diameter: f64,
        fill: Fill,
        width: f64,
        meta: Option<ElementMeta>,
    },
    Rect {
        p1: Point,
        p2: Point,
        fill: Fill,
        width: f64,
    },
    Arc {
        center: Point,
        start_angle: f64,
        end_angle: f64,
        radius: f64,
        fill: Fill,
        width: f64,
        meta: Option<ElementMeta>,
    },
    Polyline {
        points: Vec<Point>,
        fill: Fill,
        width: f64,
        meta: Option<ElementMeta>,
    },
    Curve {
        start: Point,
        end: Point,
        ctrl1: Point,
        ctrl2: Point,
        width: f64,
        meta: Option<ElementMeta>,
    },
    Text {
        pos: Point,
        color: Color,
        text: String,
        angle: f64,
        size: f64,
        h_justify: TextHJustify,
        v_justify: TextVJustify,
        width: f64,
        italic: bool,
        bold: bool,
        mirrored: bool,
        meta: Option<ElementMeta>,
    },
}

/// Collects plot commands in emission order.
#[derive(Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<PlotCommand>,
}

impl CommandRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded command sequence.
    pub fn commands(&self) -> &[PlotCommand] {
        &self.commands
    }

    /// Consumes the recorder, returning its commands.
    pub fn into_commands(self) -> Vec<PlotCommand> {
        self.commands
    }

    /// True when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Plotter for CommandRecorder {
    fn set_color(&mut self, color: Color) {
        self.commands.push(PlotCommand::SetColor(color));
    }

    fn set_current_line_width(&mut self, width: f64) {
        self.commands.push(PlotCommand::SetCurrentLineWidth(width));
    }

    fn set_fill(&mut self, fill: Fill) {
        self.commands.push(PlotCommand::SetFill(fill));
    }

    fn move_to(&mut self, p: Point) {
        self.commands.push(PlotCommand::MoveTo(p));
    }

    fn finish_to(&mut self, p: Point, meta: Option<ElementMeta>) {
        self.commands.push(PlotCommand::FinishTo { p, meta });
    }

    fn circle(
        &mut self,
        center: Point,
        diameter: f64,
        fill: Fill,
        width: f64,
        meta: Option<ElementMeta>,
    ) {
        self.commands.push(PlotCommand::Circle {
            center,
            diameter,
            fill,
            width,
            meta,
        });
    }

    fn rect(&mut self, p1: Point, p2: Point, fill: Fill, width: f64) {
        self.commands.push(PlotCommand::Rect {
            p1,
            p2,
            fill,
            width,
        });
    }

    fn arc(
        &mut self,
        center: Point,
        start_angle: f64,
        end_angle: f64,
        radius: f64,
        fill: Fill,
        width: f64,
        meta: Option<ElementMeta>,
    ) {
        self.commands.push(PlotCommand::Arc {
            center,
            start_angle,
            end_angle,
            radius,
            fill,
            width,
            meta,
        });
    }

    fn polyline(&mut self, points: &[Point], fill: Fill, width: f64, meta: Option<ElementMeta>) {
        self.commands.push(PlotCommand::Polyline {
            points: points.to_vec(),
            fill,
            width,
            meta,
        });
    }

    fn curve(
        &mut self,
        start: Point,
        end: Point,
        ctrl1: Point,
        ctrl2: Point,
        width: f64,
        meta: Option<ElementMeta>,
    ) {
        self.commands.push(PlotCommand::Curve {
            start,
            end,
            ctrl1,
            ctrl2,
            width,
            meta,
        });
    }

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
    ) {
        self.commands.push(PlotCommand::Text {
            pos,
            color,
            text: text.to_string(),
            angle,
            size,
            h_justify,
            v_justify,
            width,
            italic,
            bold,
            mirrored,
            meta,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_emission_order() {
        let mut recorder = CommandRecorder::new();
        assert!(recorder.is_empty());

        recorder.set_color(Color::GREEN);
        recorder.move_to(Point::new(0.0, 0.0));
        recorder.finish_to(Point::new(1.0, 1.0), None);

        let commands = recorder.into_commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0], PlotCommand::SetColor(Color::GREEN));
        assert_eq!(commands[1], PlotCommand::MoveTo(Point::new(0.0, 0.0)));
        assert!(matches!(commands[2], PlotCommand::FinishTo { .. }));
    }
}
