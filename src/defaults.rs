//! Default sizes and settings (all in device pixels unless noted)

use crate::types::{Color, Degrees, Opacity};

pub const INITIAL_WIDTH: u32 = 600;
pub const RULER_HEIGHT: u32 = 50;
pub const MIN_WIDTH: u32 = 100;
/// Horizontal band at either end of the window that starts a resize.
pub const RESIZE_MARGIN: u32 = 15;
/// Added to both window axes so antialiased edges are not clipped.
pub const WINDOW_PADDING: u32 = 20;

pub const FINE_STEP: Degrees = Degrees(2.0);
pub const SNAP_STEP: Degrees = Degrees(45.0);

pub const OPACITY: Opacity = Opacity::new_unchecked(0.95);
pub const WINDOW_BACKGROUND: Color = Color::BLACK;

pub const BODY_FILL: Color = Color::WHITE_SMOKE;
pub const INK: Color = Color::BLACK;
/// Band at the top of the body that holds the centimeter labels.
pub const NUMBER_BAND: f64 = 18.0;
pub const MINOR_TICK_LENGTH: f64 = 10.0;
pub const LABEL_INSET: f64 = 2.0;
pub const LABEL_FONT_SIZE: f64 = 12.0;
pub const STROKE_WIDTH: f64 = 1.0;
