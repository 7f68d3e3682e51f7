//! Backend-neutral drawing target.
//!
//! Widgets draw through this trait instead of a concrete graphics library so
//! that the registry can be used from any frontend.

use dashkit_types::Color;

pub type Point = (f64, f64);

/// Minimal set of drawing primitives widgets may use
pub trait DrawSurface {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);

    fn stroke_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
        line_width: f64,
    );

    /// Fill the closed polygon described by `points`
    fn fill_path(&mut self, points: &[Point], color: Color);

    /// Stroke the open polyline described by `points`
    fn stroke_path(&mut self, points: &[Point], color: Color, line_width: f64);

    fn text(&mut self, x: f64, y: f64, text: &str, color: Color);
}

/// A single recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
    StrokeRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
        line_width: f64,
    },
    FillPath {
        points: Vec<Point>,
        color: Color,
    },
    StrokePath {
        points: Vec<Point>,
        color: Color,
        line_width: f64,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        color: Color,
    },
}

/// Surface that records every operation instead of rasterizing.
///
/// Used for headless checks and tests.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All text drawn so far, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn stroke_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
        line_width: f64,
    ) {
        self.commands.push(DrawCommand::StrokeRect {
            x,
            y,
            width,
            height,
            color,
            line_width,
        });
    }

    fn fill_path(&mut self, points: &[Point], color: Color) {
        self.commands.push(DrawCommand::FillPath {
            points: points.to_vec(),
            color,
        });
    }

    fn stroke_path(&mut self, points: &[Point], color: Color, line_width: f64) {
        self.commands.push(DrawCommand::StrokePath {
            points: points.to_vec(),
            color,
            line_width,
        });
    }

    fn text(&mut self, x: f64, y: f64, text: &str, color: Color) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            color,
        });
    }
}
