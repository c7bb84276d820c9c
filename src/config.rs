//! Construction-time configuration.
//!
//! Nothing here changes after an [`OverlaySurface`](crate::surface::OverlaySurface)
//! is built.

use crate::defaults;
use crate::errors::ConfigError;
use crate::types::{Color, Degrees, NumericError, Opacity};

/// How the host should present the overlay window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowStyle {
    pub borderless: bool,
    pub always_on_top: bool,
    pub opacity: Opacity,
    /// Shows only where antialiasing bleeds past the clip region.
    pub background: Color,
}

impl Default for WindowStyle {
    fn default() -> Self {
        Self {
            borderless: true,
            always_on_top: true,
            opacity: defaults::OPACITY,
            background: defaults::WINDOW_BACKGROUND,
        }
    }
}

impl WindowStyle {
    /// Replace the opacity, validating the raw value.
    pub fn with_opacity(self, value: f64) -> Result<Self, ConfigError> {
        let opacity = Opacity::try_new(value)
            .map_err(|reason| ConfigError::InvalidOpacity { value, reason })?;
        Ok(Self { opacity, ..self })
    }
}

/// Ruler dimensions and interaction tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RulerConfig {
    pub initial_width: u32,
    pub height: u32,
    pub min_width: u32,
    pub resize_margin: u32,
    pub padding: u32,
    pub fine_step: Degrees,
    pub snap_step: Degrees,
    pub style: WindowStyle,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            initial_width: defaults::INITIAL_WIDTH,
            height: defaults::RULER_HEIGHT,
            min_width: defaults::MIN_WIDTH,
            resize_margin: defaults::RESIZE_MARGIN,
            padding: defaults::WINDOW_PADDING,
            fine_step: defaults::FINE_STEP,
            snap_step: defaults::SNAP_STEP,
            style: WindowStyle::default(),
        }
    }
}

impl RulerConfig {
    /// Check the invariants the interaction code relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_width < defaults::MIN_WIDTH {
            return Err(ConfigError::MinWidthBelowFloor {
                min_width: self.min_width,
                floor: defaults::MIN_WIDTH,
            });
        }
        if self.initial_width < self.min_width {
            return Err(ConfigError::WidthBelowMinimum {
                width: self.initial_width,
                min: self.min_width,
            });
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.resize_margin.saturating_mul(2) >= self.min_width {
            return Err(ConfigError::MarginTooWide {
                margin: self.resize_margin,
                min_width: self.min_width,
            });
        }
        check_step("fine", self.fine_step)?;
        check_step("snap", self.snap_step)?;
        Ok(())
    }
}

fn check_step(which: &'static str, step: Degrees) -> Result<(), ConfigError> {
    let value = step.raw();
    let reason = if value.is_nan() {
        NumericError::NaN
    } else if value.is_infinite() {
        NumericError::Infinite
    } else if value == 0.0 {
        NumericError::Zero
    } else if value < 0.0 {
        NumericError::Negative
    } else {
        return Ok(());
    };
    Err(ConfigError::InvalidRotationStep { which, value, reason })
}
