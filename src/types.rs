//! Strongly-typed numeric primitives for the ruler (zero-cost newtypes).
//!
//! Values coming from the host (DPI, opacity) go through `try_new`, which
//! rejects NaN, infinities and out-of-range numbers. Everything downstream can
//! then assume finite, positive inputs.

use std::fmt;
use std::ops::{Add, Sub};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
    /// Value is above the allowed maximum
    TooLarge,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
            NumericError::TooLarge => write!(f, "value is too large"),
        }
    }
}

impl std::error::Error for NumericError {}

fn check_positive(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Rotation angle in degrees.
///
/// The stored value is never wrapped; use [`Degrees::normalized`] when a value
/// in `[0, 360)` is needed for display.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    pub const ZERO: Degrees = Degrees(0.0);

    #[inline]
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    /// The same direction reduced into `[0, 360)`.
    #[inline]
    pub fn normalized(self) -> Degrees {
        Degrees(self.0.rem_euclid(360.0))
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Horizontal display resolution in dots per inch.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Dpi(f64);

impl Dpi {
    /// 100% scaling on most desktop systems.
    pub const STANDARD: Dpi = Dpi(96.0);

    /// Create a Dpi with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(val: f64) -> Result<Dpi, NumericError> {
        check_positive(val).map(Dpi)
    }

    /// Pixels in one centimeter. Not rounded; tick placement depends on the
    /// fractional part.
    #[inline]
    pub fn pixels_per_cm(self) -> f64 {
        self.0 / CM_PER_INCH
    }

    #[inline]
    pub fn pixels_per_mm(self) -> f64 {
        self.pixels_per_cm() / 10.0
    }
}

impl Default for Dpi {
    fn default() -> Self {
        Dpi::STANDARD
    }
}

/// Window opacity in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Opacity(f64);

impl Opacity {
    pub(crate) const fn new_unchecked(val: f64) -> Opacity {
        Opacity(val)
    }

    /// Create an Opacity with validation. Zero is allowed (fully transparent).
    pub fn try_new(val: f64) -> Result<Opacity, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else if val > 1.0 {
            Err(NumericError::TooLarge)
        } else {
            Ok(Opacity(val))
        }
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub struct Size<T> {
    pub w: T,
    pub h: T,
}

impl<T> Size<T> {
    pub fn new(w: T, h: T) -> Self {
        Size { w, h }
    }
}

impl Size<u32> {
    /// Float center of an integer-sized area.
    pub fn center(self) -> glam::DVec2 {
        glam::dvec2(self.w as f64 / 2.0, self.h as f64 / 2.0)
    }
}

/// Integer position in global screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        ScreenPoint { x, y }
    }
}

/// A displacement between two screen points (not an absolute position).
/// ScreenPoint + ScreenOffset = ScreenPoint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub struct ScreenOffset {
    pub dx: i32,
    pub dy: i32,
}

impl ScreenOffset {
    pub const fn new(dx: i32, dy: i32) -> Self {
        ScreenOffset { dx, dy }
    }
}

impl Add<ScreenOffset> for ScreenPoint {
    type Output = ScreenPoint;
    fn add(self, rhs: ScreenOffset) -> ScreenPoint {
        ScreenPoint {
            x: self.x + rhs.dx,
            y: self.y + rhs.dy,
        }
    }
}

impl Sub<ScreenPoint> for ScreenPoint {
    type Output = ScreenOffset;
    fn sub(self, rhs: ScreenPoint) -> ScreenOffset {
        ScreenOffset {
            dx: self.x - rhs.x,
            dy: self.y - rhs.y,
        }
    }
}

impl Add for ScreenOffset {
    type Output = ScreenOffset;
    fn add(self, rhs: ScreenOffset) -> ScreenOffset {
        ScreenOffset {
            dx: self.dx + rhs.dx,
            dy: self.dy + rhs.dy,
        }
    }
}

/// Opaque-or-translucent RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE_SMOKE: Color = Color::rgb(0xF5, 0xF5, 0xF5);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "rgba({},{},{},{:.3})",
                self.r,
                self.g,
                self.b,
                self.a as f64 / 255.0
            )
        }
    }
}
