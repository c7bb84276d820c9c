//! Drawing context abstraction
//!
//! The ruler is drawn through [`Canvas`], a small immediate-mode interface with
//! an affine transform stack. Hosts adapt their native graphics context to it;
//! [`RecordingCanvas`] captures calls for inspection and
//! [`SvgCanvas`](crate::svg::SvgCanvas) writes them out as SVG.

use glam::{DAffine2, DVec2};

use crate::geometry::Rect;
use crate::types::{Color, Degrees};

/// Immediate-mode drawing target with a transform stack.
///
/// Coordinates passed to drawing calls are in the current local frame; the
/// accumulated transform maps them to device pixels.
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);

    fn line(&mut self, from: DVec2, to: DVec2, color: Color, width: f64);

    /// Draw `text` with its top-left corner at `origin`.
    fn text(&mut self, origin: DVec2, text: &str, size: f64, color: Color);

    /// Push the current transform.
    fn save(&mut self);

    /// Pop back to the transform at the matching [`Canvas::save`].
    fn restore(&mut self);

    fn translate(&mut self, by: DVec2);

    /// Rotate the local frame; positive is clockwise on a y-down device.
    fn rotate(&mut self, angle: Degrees);

    fn rotate_about(&mut self, pivot: DVec2, angle: Degrees) {
        self.translate(pivot);
        self.rotate(angle);
        self.translate(-pivot);
    }
}

/// A draw call with its coordinates already mapped to device pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect {
        corners: [DVec2; 4],
        color: Color,
    },
    StrokeRect {
        corners: [DVec2; 4],
        color: Color,
        width: f64,
    },
    Line {
        from: DVec2,
        to: DVec2,
        color: Color,
        width: f64,
    },
    Text {
        origin: DVec2,
        text: String,
        size: f64,
        color: Color,
    },
}

/// Canvas that remembers what was drawn, in device coordinates.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    transform: DAffine2,
    stack: Vec<DAffine2>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Current local-to-device transform.
    pub fn transform(&self) -> DAffine2 {
        self.transform
    }

    /// Nesting depth of unmatched saves.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn map_rect(&self, rect: Rect) -> [DVec2; 4] {
        rect.corners().map(|c| self.transform.transform_point2(c))
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let corners = self.map_rect(rect);
        self.commands.push(DrawCommand::FillRect { corners, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        let corners = self.map_rect(rect);
        self.commands.push(DrawCommand::StrokeRect {
            corners,
            color,
            width,
        });
    }

    fn line(&mut self, from: DVec2, to: DVec2, color: Color, width: f64) {
        self.commands.push(DrawCommand::Line {
            from: self.transform.transform_point2(from),
            to: self.transform.transform_point2(to),
            color,
            width,
        });
    }

    fn text(&mut self, origin: DVec2, text: &str, size: f64, color: Color) {
        self.commands.push(DrawCommand::Text {
            origin: self.transform.transform_point2(origin),
            text: text.to_owned(),
            size,
            color,
        });
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(transform) => self.transform = transform,
            None => {
                crate::log::warn!("restore without matching save");
            }
        }
    }

    fn translate(&mut self, by: DVec2) {
        self.transform = self.transform * DAffine2::from_translation(by);
    }

    fn rotate(&mut self, angle: Degrees) {
        self.transform = self.transform * DAffine2::from_angle(angle.radians());
    }
}
