//! Geometry and interaction core of an on-screen ruler overlay.
//!
//! The ruler is a semi-transparent strip graduated in centimeters and
//! millimeters that floats above other windows and can be dragged, stretched
//! from either end and rotated with the mouse wheel. This crate holds
//! everything that is not platform glue:
//!
//! - [`geometry`]: window bounds and the rotated clip/hit polygon
//! - [`interaction`]: the drag / resize pointer state machine
//! - [`rotation`]: fine and snapping wheel rotation
//! - [`ticks`]: DPI-accurate graduation marks
//! - [`surface`]: [`OverlaySurface`], which owns the state and drives a
//!   [`Host`] window
//!
//! A host implements [`Host`] and a [`Canvas`] over its native window and
//! forwards input events to the surface.

pub mod canvas;
pub mod config;
pub mod defaults;
pub mod errors;
pub mod geometry;
pub mod host;
pub mod interaction;
pub mod log;
pub mod rotation;
pub mod state;
pub mod surface;
pub mod svg;
pub mod ticks;
pub mod types;

pub use canvas::{Canvas, DrawCommand, RecordingCanvas};
pub use config::{RulerConfig, WindowStyle};
pub use errors::{ConfigError, RenderError};
pub use geometry::HitRegion;
pub use host::Host;
pub use interaction::{CursorHint, Interaction};
pub use state::RulerState;
pub use surface::{OverlaySurface, PointerButton};
pub use svg::SvgCanvas;
pub use types::{Degrees, Dpi, ScreenPoint, Size};

/// Render a ruler headlessly as an SVG document the size of its window,
/// clipped to the rotated body the way the host window would be.
pub fn render_svg(
    ruler: &RulerState,
    config: &RulerConfig,
    dpi: Dpi,
) -> Result<String, RenderError> {
    let window = ruler.window_size(config.padding);
    let region = ruler.hit_region(window);
    let mut canvas = SvgCanvas::new(window)
        .with_background(config.style.background)
        .with_clip(&region);
    surface::paint_ruler(&mut canvas, ruler, window, dpi);
    canvas.finish()
}
