//! Capabilities the overlay needs from the windowing system
//!
//! A host owns the real top-level window and forwards pointer, wheel and
//! paint events to an [`OverlaySurface`](crate::surface::OverlaySurface). The
//! surface calls back through this trait whenever its state changes.

use crate::config::WindowStyle;
use crate::geometry::HitRegion;
use crate::interaction::CursorHint;
use crate::types::{ScreenPoint, Size};

pub trait Host {
    /// Apply borderless / topmost / opacity / background once at start-up.
    fn apply_style(&mut self, style: &WindowStyle);

    fn set_window_size(&mut self, size: Size<u32>);

    fn set_window_position(&mut self, position: ScreenPoint);

    /// Clip the window, both drawing and hit-testing, to `region`.
    fn set_clip_region(&mut self, region: &HitRegion);

    fn set_cursor(&mut self, cursor: CursorHint);

    /// Ask for a repaint; the host later calls
    /// [`OverlaySurface::paint`](crate::surface::OverlaySurface::paint).
    fn invalidate(&mut self);

    /// Horizontal DPI of the display the window is on.
    fn query_dpi_x(&self) -> f64;
}
