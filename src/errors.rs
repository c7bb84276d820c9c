//! Error types with rich diagnostics using miette
//!
//! The geometry and interaction code is total and never fails. These errors
//! come out of configuration checks made before a surface is built, and out
//! of serializing a headless SVG rendering.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Errors in a [`RulerConfig`](crate::config::RulerConfig) or
/// [`WindowStyle`](crate::config::WindowStyle)
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid opacity {value}: {reason}")]
    #[diagnostic(
        code(screenruler::config::opacity),
        help("opacity is a fraction between 0.0 (invisible) and 1.0 (opaque)")
    )]
    InvalidOpacity { value: f64, reason: NumericError },

    #[error("minimum width {min_width}px is below the {floor}px floor")]
    #[diagnostic(
        code(screenruler::config::min_width),
        help("raise the minimum width to at least 100px")
    )]
    MinWidthBelowFloor { min_width: u32, floor: u32 },

    #[error("initial width {width}px is below the {min}px minimum")]
    #[diagnostic(
        code(screenruler::config::width_below_minimum),
        help("raise the initial width or lower the minimum width")
    )]
    WidthBelowMinimum { width: u32, min: u32 },

    #[error("ruler height must be positive")]
    #[diagnostic(code(screenruler::config::zero_height))]
    ZeroHeight,

    #[error("resize margin {margin}px leaves no drag area in a {min_width}px ruler")]
    #[diagnostic(
        code(screenruler::config::margin_too_wide),
        help("both resize margins together must be narrower than the minimum width")
    )]
    MarginTooWide { margin: u32, min_width: u32 },

    #[error("invalid {which} rotation step {value}: {reason}")]
    #[diagnostic(code(screenruler::config::rotation_step))]
    InvalidRotationStep {
        which: &'static str,
        value: f64,
        reason: NumericError,
    },
}

/// Errors producing an SVG document
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("failed to write SVG")]
    #[diagnostic(code(screenruler::render::write))]
    Write(#[from] std::io::Error),

    #[error("SVG output is not valid UTF-8")]
    #[diagnostic(code(screenruler::render::encoding))]
    Encoding(#[from] std::string::FromUtf8Error),
}
