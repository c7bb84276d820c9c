//! Geometry of the rotated ruler: window bounds, body rectangle and hit region
//!
//! The ruler is a `width × height` rectangle rotated about its own center. The
//! host window is the axis-aligned box around it plus padding, and the window
//! is clipped to the rotated rectangle so only the ruler itself is visible and
//! clickable.

use glam::{DAffine2, DVec2, dvec2};

use crate::types::{Degrees, Size};

/// Axis-aligned rectangle in window-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Rect {
            origin: dvec2(x, y),
            size: dvec2(w, h),
        }
    }

    pub fn left(&self) -> f64 {
        self.origin.x
    }

    pub fn top(&self) -> f64 {
        self.origin.y
    }

    pub fn right(&self) -> f64 {
        self.origin.x + self.size.x
    }

    pub fn bottom(&self) -> f64 {
        self.origin.y + self.size.y
    }

    /// Corners clockwise from the top-left (y grows downward).
    pub fn corners(&self) -> [DVec2; 4] {
        [
            dvec2(self.left(), self.top()),
            dvec2(self.right(), self.top()),
            dvec2(self.right(), self.bottom()),
            dvec2(self.left(), self.bottom()),
        ]
    }
}

/// Extents of the smallest axis-aligned box holding a `width × height`
/// rectangle rotated by `angle`. Padding is not included.
pub fn bounding_size(width: f64, height: f64, angle: Degrees) -> DVec2 {
    let (sin, cos) = angle.radians().sin_cos();
    dvec2(
        (width * cos).abs() + (height * sin).abs(),
        (width * sin).abs() + (height * cos).abs(),
    )
}

/// Integer window size for the rotated ruler: the bounding extents truncated
/// to whole pixels, plus `padding` on each axis.
pub fn window_size(width: u32, height: u32, angle: Degrees, padding: u32) -> Size<u32> {
    let extents = bounding_size(width as f64, height as f64, angle);
    Size::new(extents.x as u32 + padding, extents.y as u32 + padding)
}

/// The unrotated ruler body centered in the window.
///
/// The origin is whole pixels (halving truncates toward zero) and may be
/// negative when the ruler stands upright in a narrow window.
pub fn centered_rect(window: Size<u32>, width: u32, height: u32) -> Rect {
    let x = (window.w as i64 - width as i64) / 2;
    let y = (window.h as i64 - height as i64) / 2;
    Rect::new(x as f64, y as f64, width as f64, height as f64)
}

/// Rotation by `angle` about `pivot`: translate(pivot) · rotate · translate(-pivot).
///
/// Positive angles turn clockwise on screen because window y grows downward.
pub fn rotation_about(pivot: DVec2, angle: Degrees) -> DAffine2 {
    DAffine2::from_translation(pivot)
        * DAffine2::from_angle(angle.radians())
        * DAffine2::from_translation(-pivot)
}

/// The ruler body rotated into window coordinates.
///
/// Used both as the window clip region and as the pointer hit area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitRegion {
    corners: [DVec2; 4],
}

impl HitRegion {
    pub fn corners(&self) -> &[DVec2; 4] {
        &self.corners
    }

    /// Even-odd containment test.
    pub fn contains(&self, point: DVec2) -> bool {
        let mut inside = false;
        let mut j = self.corners.len() - 1;
        for i in 0..self.corners.len() {
            let (a, b) = (self.corners[i], self.corners[j]);
            if (a.y > point.y) != (b.y > point.y)
                && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Axis-aligned extents of the polygon as `(min, max)`.
    pub fn extents(&self) -> (DVec2, DVec2) {
        self.corners.iter().fold(
            (DVec2::splat(f64::INFINITY), DVec2::splat(f64::NEG_INFINITY)),
            |(min, max), &c| (min.min(c), max.max(c)),
        )
    }
}

/// Hit region for a ruler in a window of the given size: the centered body
/// rotated about the window center.
pub fn hit_region(window: Size<u32>, width: u32, height: u32, angle: Degrees) -> HitRegion {
    let body = centered_rect(window, width, height);
    let transform = rotation_about(window.center(), angle);
    HitRegion {
        corners: body.corners().map(|c| transform.transform_point2(c)),
    }
}
