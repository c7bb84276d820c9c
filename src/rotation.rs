//! Wheel-driven rotation
//!
//! A plain wheel notch turns the ruler by a fine step. With the modifier held
//! the ruler jumps to the next multiple of the snap step in the scroll
//! direction, anchored on the current angle: from 10° scrolling up lands on
//! 45°, from 50° on 90°.

use crate::types::Degrees;

/// One wheel event as delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wheel {
    /// Signed scroll amount; only the sign matters. Positive is "up".
    pub delta: i32,
    /// Snap modifier (Ctrl on most platforms) held during the event.
    pub snap: bool,
}

impl Wheel {
    pub fn up() -> Self {
        Wheel { delta: 1, snap: false }
    }

    pub fn down() -> Self {
        Wheel { delta: -1, snap: false }
    }

    pub fn snapped(self) -> Self {
        Wheel { snap: true, ..self }
    }

    /// Zero deltas count as downward, like any non-positive delta.
    fn direction(self) -> f64 {
        if self.delta > 0 { 1.0 } else { -1.0 }
    }
}

/// Step sizes for the two wheel modes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationSteps {
    pub fine: Degrees,
    pub snap: Degrees,
}

/// Angle after applying one wheel event. The result is not wrapped into any
/// range.
pub fn rotate(angle: Degrees, wheel: Wheel, steps: RotationSteps) -> Degrees {
    let direction = wheel.direction();
    if wheel.snap {
        let step = steps.snap.raw();
        // Ties round to even, so an angle exactly between two multiples
        // resolves the same way on every platform.
        Degrees(((angle.raw() + step * direction) / step).round_ties_even() * step)
    } else {
        Degrees(angle.raw() + steps.fine.raw() * direction)
    }
}
