//! The live ruler: angle, length and where its window sits on screen.

use crate::config::RulerConfig;
use crate::geometry::{self, HitRegion, Rect};
use crate::types::{Degrees, ScreenPoint, Size};

/// Ruler state owned by the overlay surface.
///
/// Bounds and hit region are always derived from these fields, never stored
/// alongside them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RulerState {
    /// Unbounded; reduce with [`RulerState::display_angle`] for presentation.
    pub angle: Degrees,
    pub width: u32,
    pub height: u32,
    /// Top-left corner of the enclosing window in screen coordinates.
    pub position: ScreenPoint,
}

impl RulerState {
    pub fn new(config: &RulerConfig) -> Self {
        Self {
            angle: Degrees::ZERO,
            width: config.initial_width,
            height: config.height,
            position: ScreenPoint::default(),
        }
    }

    pub fn display_angle(&self) -> Degrees {
        self.angle.normalized()
    }

    pub fn window_size(&self, padding: u32) -> Size<u32> {
        geometry::window_size(self.width, self.height, self.angle, padding)
    }

    pub fn body(&self, window: Size<u32>) -> Rect {
        geometry::centered_rect(window, self.width, self.height)
    }

    pub fn hit_region(&self, window: Size<u32>) -> HitRegion {
        geometry::hit_region(window, self.width, self.height, self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_flat_at_configured_size() {
        let state = RulerState::new(&RulerConfig::default());
        assert_eq!(state.angle, Degrees::ZERO);
        assert_eq!((state.width, state.height), (600, 50));
        assert_eq!(state.window_size(20), Size::new(620, 70));
    }

    #[test]
    fn display_angle_wraps_but_state_does_not() {
        let state = RulerState {
            angle: Degrees(-90.0),
            ..RulerState::new(&RulerConfig::default())
        };
        assert_eq!(state.display_angle(), Degrees(270.0));
        assert_eq!(state.angle, Degrees(-90.0));
    }
}
