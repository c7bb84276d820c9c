//! The overlay surface: sole owner and mutator of the ruler state
//!
//! Host events come in through the methods on [`OverlaySurface`]. Each one runs
//! a pure transition, stores the result and pushes whatever changed (window
//! size, clip region, position, cursor, repaint) back out through [`Host`].

use glam::DVec2;

use crate::canvas::Canvas;
use crate::config::RulerConfig;
use crate::errors::ConfigError;
use crate::geometry::HitRegion;
use crate::host::Host;
use crate::interaction::{self, Effect, Interaction, Limits, PointerEvent};
use crate::log::{debug, trace, warn};
use crate::rotation::{self, RotationSteps, Wheel};
use crate::state::RulerState;
use crate::ticks;
use crate::types::{Dpi, ScreenOffset, ScreenPoint, Size};

/// Which pointer button was pressed. Every button starts an interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

pub struct OverlaySurface<H: Host> {
    host: H,
    config: RulerConfig,
    ruler: RulerState,
    interaction: Interaction,
    window: Size<u32>,
    region: HitRegion,
}

impl<H: Host> OverlaySurface<H> {
    /// Validate `config`, style the host window and give it its initial
    /// bounds and clip region.
    pub fn new(mut host: H, config: RulerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let ruler = RulerState::new(&config);
        let window = ruler.window_size(config.padding);
        let region = ruler.hit_region(window);

        host.apply_style(&config.style);
        host.set_window_position(ruler.position);

        let mut surface = Self {
            host,
            config,
            ruler,
            interaction: Interaction::Idle,
            window,
            region,
        };
        surface.push_shape();
        Ok(surface)
    }

    pub fn ruler(&self) -> &RulerState {
        &self.ruler
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn window_size(&self) -> Size<u32> {
        self.window
    }

    pub fn hit_region(&self) -> &HitRegion {
        &self.region
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Place the window centered on a screen of the given size.
    pub fn center_on(&mut self, screen: Size<u32>) {
        let x = (screen.w as i64 - self.window.w as i64) / 2;
        let y = (screen.h as i64 - self.window.h as i64) / 2;
        self.ruler.position = ScreenPoint::new(x as i32, y as i32);
        self.host.set_window_position(self.ruler.position);
    }

    /// Screen position of a window-local pointer position.
    fn to_global(&self, local: DVec2) -> ScreenPoint {
        self.ruler.position
            + ScreenOffset::new(local.x.round() as i32, local.y.round() as i32)
    }

    fn limits(&self) -> Limits {
        Limits {
            resize_margin: self.config.resize_margin,
            min_width: self.config.min_width,
        }
    }

    // `button` is only read by the log macros.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn pointer_down(&mut self, local: DVec2, button: PointerButton) {
        if !self.region.contains(local) {
            trace!(?local, ?button, "pointer down outside the ruler");
            return;
        }
        let global = self.to_global(local);
        self.dispatch(PointerEvent::Down { local, global });
    }

    pub fn pointer_move(&mut self, local: DVec2) {
        let global = self.to_global(local);
        self.dispatch(PointerEvent::Move { local, global });
    }

    /// Ends any drag or resize, matched or not.
    pub fn pointer_up(&mut self) {
        self.dispatch(PointerEvent::Up);
    }

    pub fn wheel(&mut self, delta: i32, modifier_held: bool) {
        let steps = RotationSteps {
            fine: self.config.fine_step,
            snap: self.config.snap_step,
        };
        let wheel = Wheel {
            delta,
            snap: modifier_held,
        };
        let angle = rotation::rotate(self.ruler.angle, wheel, steps);
        debug!(from = %self.ruler.angle, to = %angle, snap = modifier_held, "rotate");
        self.ruler.angle = angle;
        self.push_shape();
    }

    fn dispatch(&mut self, event: PointerEvent) {
        let step = interaction::transition(
            self.ruler,
            self.interaction,
            event,
            self.window.w,
            self.limits(),
        );
        if step.interaction != self.interaction {
            debug!(from = ?self.interaction, to = ?step.interaction, "interaction");
        }
        self.ruler = step.ruler;
        self.interaction = step.interaction;
        match step.effect {
            Effect::None => {}
            Effect::Moved => self.host.set_window_position(self.ruler.position),
            Effect::Reshaped => self.push_shape(),
            Effect::Cursor(hint) => self.host.set_cursor(hint),
        }
    }

    /// Recompute bounds and region from the current state, hand them to the
    /// host and request a repaint.
    fn push_shape(&mut self) {
        self.window = self.ruler.window_size(self.config.padding);
        self.region = self.ruler.hit_region(self.window);
        trace!(
            width = self.ruler.width,
            angle = %self.ruler.angle,
            window = ?self.window,
            "reshape"
        );
        self.host.set_window_size(self.window);
        self.host.set_clip_region(&self.region);
        self.host.invalidate();
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn dpi(&self) -> Dpi {
        let raw = self.host.query_dpi_x();
        Dpi::try_new(raw).unwrap_or_else(|reason| {
            warn!(raw, %reason, "unusable DPI from host, assuming 96");
            Dpi::STANDARD
        })
    }

    /// Render callback: draw the rotated ruler into `canvas`.
    pub fn paint(&self, canvas: &mut dyn Canvas) {
        paint_ruler(canvas, &self.ruler, self.window, self.dpi());
    }
}

/// Draw `ruler` into a window of size `window`: rotate the frame about the
/// window center, then draw the body and graduations unrotated.
pub fn paint_ruler(canvas: &mut dyn Canvas, ruler: &RulerState, window: Size<u32>, dpi: Dpi) {
    canvas.save();
    canvas.rotate_about(window.center(), ruler.angle);
    ticks::draw_ruler(canvas, ruler.body(window), dpi);
    canvas.restore();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, RecordingCanvas};
    use crate::config::WindowStyle;
    use crate::interaction::CursorHint;
    use crate::types::Degrees;
    use glam::dvec2;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Style,
        Size(Size<u32>),
        Position(ScreenPoint),
        Clip,
        Cursor(CursorHint),
        Invalidate,
    }

    #[derive(Default)]
    struct FakeHost {
        calls: Vec<Call>,
        dpi: f64,
    }

    impl FakeHost {
        fn with_dpi(dpi: f64) -> Self {
            FakeHost {
                calls: Vec::new(),
                dpi,
            }
        }

        fn take(&mut self) -> Vec<Call> {
            std::mem::take(&mut self.calls)
        }
    }

    impl Host for FakeHost {
        fn apply_style(&mut self, _style: &WindowStyle) {
            self.calls.push(Call::Style);
        }
        fn set_window_size(&mut self, size: Size<u32>) {
            self.calls.push(Call::Size(size));
        }
        fn set_window_position(&mut self, position: ScreenPoint) {
            self.calls.push(Call::Position(position));
        }
        fn set_clip_region(&mut self, _region: &HitRegion) {
            self.calls.push(Call::Clip);
        }
        fn set_cursor(&mut self, cursor: CursorHint) {
            self.calls.push(Call::Cursor(cursor));
        }
        fn invalidate(&mut self) {
            self.calls.push(Call::Invalidate);
        }
        fn query_dpi_x(&self) -> f64 {
            self.dpi
        }
    }

    fn surface() -> OverlaySurface<FakeHost> {
        OverlaySurface::new(FakeHost::with_dpi(96.0), RulerConfig::default()).unwrap()
    }

    #[test]
    fn construction_configures_host() {
        let mut surface = surface();
        assert_eq!(
            surface.host_mut().take(),
            vec![
                Call::Style,
                Call::Position(ScreenPoint::default()),
                Call::Size(Size::new(620, 70)),
                Call::Clip,
                Call::Invalidate,
            ]
        );
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = RulerConfig {
            height: 0,
            ..RulerConfig::default()
        };
        assert!(matches!(
            OverlaySurface::new(FakeHost::default(), config),
            Err(ConfigError::ZeroHeight)
        ));
    }

    #[test]
    fn minimum_width_cannot_be_lowered() {
        let config = RulerConfig {
            min_width: 40,
            ..RulerConfig::default()
        };
        assert!(matches!(
            OverlaySurface::new(FakeHost::default(), config),
            Err(ConfigError::MinWidthBelowFloor { min_width: 40, .. })
        ));
    }

    #[test]
    fn raised_minimum_width_floors_resize() {
        let config = RulerConfig {
            min_width: 200,
            ..RulerConfig::default()
        };
        let mut surface = OverlaySurface::new(FakeHost::with_dpi(96.0), config).unwrap();
        surface.pointer_down(dvec2(607.0, 35.0), PointerButton::Primary);
        surface.pointer_move(dvec2(-500.0, 35.0));
        surface.pointer_up();
        assert_eq!(surface.ruler().width, 200);
    }

    #[test]
    fn wheel_reshapes_and_redraws() {
        let mut surface = surface();
        surface.host_mut().take();
        surface.wheel(120, true);
        assert_eq!(surface.ruler().angle, Degrees(45.0));
        assert_eq!(surface.window_size(), Size::new(479, 479));
        assert_eq!(
            surface.host_mut().take(),
            vec![Call::Size(Size::new(479, 479)), Call::Clip, Call::Invalidate]
        );
    }

    #[test]
    fn drag_moves_window_without_reshaping() {
        let mut surface = surface();
        surface.host_mut().take();
        surface.pointer_down(dvec2(300.0, 35.0), PointerButton::Primary);
        // Cursor moves 40 right and 10 down on screen; the window has not
        // moved yet so local coordinates shift by the same amount.
        surface.pointer_move(dvec2(340.0, 45.0));
        assert_eq!(surface.ruler().position, ScreenPoint::new(40, 10));
        // The window followed, so the next local position is relative to it.
        surface.pointer_move(dvec2(300.0, 35.0));
        assert_eq!(surface.ruler().position, ScreenPoint::new(40, 10));
        surface.pointer_up();
        assert_eq!(surface.interaction(), Interaction::Idle);
        assert_eq!(
            surface.host_mut().take(),
            vec![
                Call::Position(ScreenPoint::new(40, 10)),
                Call::Position(ScreenPoint::new(40, 10)),
            ]
        );
    }

    #[test]
    fn press_outside_region_is_ignored() {
        let mut surface = surface();
        surface.wheel(1, true);
        surface.pointer_down(dvec2(2.0, 2.0), PointerButton::Primary);
        assert_eq!(surface.interaction(), Interaction::Idle);
    }

    #[test]
    fn hover_sets_cursor() {
        let mut surface = surface();
        surface.host_mut().take();
        surface.pointer_move(dvec2(12.0, 30.0));
        surface.pointer_move(dvec2(300.0, 30.0));
        assert_eq!(
            surface.host_mut().take(),
            vec![
                Call::Cursor(CursorHint::ResizeHorizontal),
                Call::Cursor(CursorHint::Move)
            ]
        );
    }

    #[test]
    fn center_on_screen() {
        let mut surface = surface();
        surface.center_on(Size::new(1920, 1080));
        assert_eq!(surface.ruler().position, ScreenPoint::new(650, 505));
    }

    #[test]
    fn paint_rotates_about_window_center() {
        let mut surface = surface();
        surface.wheel(1, true);
        surface.wheel(1, true);
        assert_eq!(surface.ruler().angle, Degrees(90.0));

        let mut canvas = RecordingCanvas::new();
        surface.paint(&mut canvas);
        assert_eq!(canvas.depth(), 0);
        let DrawCommand::FillRect { corners, .. } = &canvas.commands()[0] else {
            panic!("background must come first");
        };
        // Upright body spans the padded window: x 10..60, y 10..610.
        let region = surface.hit_region().corners();
        for (drawn, clip) in corners.iter().zip(region.iter()) {
            assert!((*drawn - *clip).length() < 1e-9, "{drawn:?} vs {clip:?}");
        }
    }

    #[test]
    fn bad_dpi_falls_back_to_standard() {
        let mut surface =
            OverlaySurface::new(FakeHost::with_dpi(0.0), RulerConfig::default()).unwrap();
        let mut fallback = RecordingCanvas::new();
        surface.paint(&mut fallback);

        surface.host_mut().dpi = 96.0;
        let mut standard = RecordingCanvas::new();
        surface.paint(&mut standard);
        assert_eq!(fallback.commands(), standard.commands());
    }
}
