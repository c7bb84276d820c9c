//! Graduation marks derived from display DPI
//!
//! Each whole-pixel offset along the ruler gets a millimeter tick when it is
//! within one pixel past a millimeter boundary, and a centimeter tick plus a
//! label when it is within one pixel past a centimeter boundary. The spacing
//! is fractional (37.795… px/cm at 96 DPI) and is never rounded, so the marks
//! do not drift over long rulers.
//!
//! Everything here works in the ruler's own unrotated frame. The caller sets
//! up the rotation on the canvas before drawing.

use enum_dispatch::enum_dispatch;

use crate::canvas::Canvas;
use crate::defaults;
use crate::geometry::Rect;
use crate::types::Dpi;
use glam::dvec2;

/// Common behavior for graduation marks
#[enum_dispatch]
pub trait Mark {
    /// Pixel offset from the left edge of the ruler body.
    fn offset(&self) -> u32;

    /// Draw this mark into `body`, the unrotated ruler rectangle.
    fn draw(&self, canvas: &mut dyn Canvas, body: Rect);
}

/// Millimeter tick: a short line rising from the bottom edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinorTick {
    pub offset: u32,
}

impl Mark for MinorTick {
    fn offset(&self) -> u32 {
        self.offset
    }

    fn draw(&self, canvas: &mut dyn Canvas, body: Rect) {
        let x = body.left() + self.offset as f64;
        canvas.line(
            dvec2(x, body.bottom() - defaults::MINOR_TICK_LENGTH),
            dvec2(x, body.bottom()),
            defaults::INK,
            defaults::STROKE_WIDTH,
        );
    }
}

/// Centimeter tick: a line from under the number band to the bottom edge,
/// labelled with the whole centimeters from the left end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MajorTick {
    pub offset: u32,
    pub centimeters: u32,
}

impl Mark for MajorTick {
    fn offset(&self) -> u32 {
        self.offset
    }

    fn draw(&self, canvas: &mut dyn Canvas, body: Rect) {
        let x = body.left() + self.offset as f64;
        canvas.line(
            dvec2(x, body.top() + defaults::NUMBER_BAND),
            dvec2(x, body.bottom()),
            defaults::INK,
            defaults::STROKE_WIDTH,
        );
        canvas.text(
            dvec2(x + defaults::LABEL_INSET, body.top() + defaults::LABEL_INSET),
            &self.centimeters.to_string(),
            defaults::LABEL_FONT_SIZE,
            defaults::INK,
        );
    }
}

#[enum_dispatch(Mark)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Graduation {
    Minor(MinorTick),
    Major(MajorTick),
}

/// All marks for a ruler `width` pixels long, in drawing order (by offset,
/// minor before major at the same offset).
pub fn graduations(width: u32, dpi: Dpi) -> Vec<Graduation> {
    let per_cm = dpi.pixels_per_cm();
    let per_mm = dpi.pixels_per_mm();
    let mut marks = Vec::new();
    for offset in 0..width {
        let i = offset as f64;
        if i % per_mm < 1.0 {
            marks.push(MinorTick { offset }.into());
        }
        if i % per_cm < 1.0 {
            let centimeters = (i / per_cm).floor() as u32;
            marks.push(MajorTick { offset, centimeters }.into());
        }
    }
    marks
}

/// Draw the ruler body: background, border, then every graduation.
pub fn draw_ruler(canvas: &mut dyn Canvas, body: Rect, dpi: Dpi) {
    canvas.fill_rect(body, defaults::BODY_FILL);
    canvas.stroke_rect(body, defaults::INK, defaults::STROKE_WIDTH);
    let width = body.size.x.max(0.0) as u32;
    for mark in graduations(width, dpi) {
        mark.draw(canvas, body);
    }
}
