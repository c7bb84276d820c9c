//! Pointer state machine for dragging and edge resizing
//!
//! ```text
//!            down (x < margin)            down (x > W - margin)
//!   ResizingLeft <───────── Idle ─────────> ResizingRight
//!                             │
//!                             │ down (elsewhere)
//!                             v
//!                          Dragging
//!
//!   up: any state ──> Idle
//! ```
//!
//! Transitions are pure: they take the current [`RulerState`] and
//! [`Interaction`] and return the next ones plus an [`Effect`] telling the
//! surface what to push to the host. Nothing here renders or talks to a window.

use glam::DVec2;

use crate::state::RulerState;
use crate::types::ScreenPoint;

/// Where a pointer interaction currently stands.
///
/// Active variants carry the global pointer position of the previous event;
/// deltas are taken against it and it is replaced after every move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Dragging { anchor: ScreenPoint },
    ResizingLeft { anchor: ScreenPoint },
    ResizingRight { anchor: ScreenPoint },
}

impl Interaction {
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }
}

/// Cursor shape suggested while hovering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorHint {
    /// Over a resize margin.
    ResizeHorizontal,
    /// Over the body.
    Move,
}

/// Pointer input in the form the machine consumes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down { local: DVec2, global: ScreenPoint },
    Move { local: DVec2, global: ScreenPoint },
    Up,
}

/// Tuning the machine needs from the configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    pub resize_margin: u32,
    pub min_width: u32,
}

/// What changed, so the caller knows which host calls to make.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Window position changed; shape unchanged.
    Moved,
    /// Width changed; bounds and region must be recomputed and redrawn.
    Reshaped,
    Cursor(CursorHint),
}

/// Result of one transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub ruler: RulerState,
    pub interaction: Interaction,
    pub effect: Effect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Zone {
    LeftMargin,
    RightMargin,
    Body,
}

/// Classify a window-local x coordinate against the resize margins of a
/// window `window_width` pixels wide.
fn zone(local_x: f64, window_width: u32, margin: u32) -> Zone {
    let margin = margin as f64;
    if local_x < margin {
        Zone::LeftMargin
    } else if local_x > window_width as f64 - margin {
        Zone::RightMargin
    } else {
        Zone::Body
    }
}

/// Advance the machine by one pointer event.
pub fn transition(
    ruler: RulerState,
    interaction: Interaction,
    event: PointerEvent,
    window_width: u32,
    limits: Limits,
) -> Transition {
    match event {
        PointerEvent::Down { local, global } => {
            press(ruler, interaction, local, global, window_width, limits)
        }
        PointerEvent::Move { local, global } => {
            motion(ruler, interaction, local, global, window_width, limits)
        }
        PointerEvent::Up => Transition {
            ruler,
            interaction: Interaction::Idle,
            effect: Effect::None,
        },
    }
}

fn press(
    ruler: RulerState,
    interaction: Interaction,
    local: DVec2,
    global: ScreenPoint,
    window_width: u32,
    limits: Limits,
) -> Transition {
    if !interaction.is_idle() {
        // A press while already active restarts from the new position.
        crate::log::debug!(?interaction, "pointer down without pointer up");
    }
    let anchor = global;
    let next = match zone(local.x, window_width, limits.resize_margin) {
        Zone::LeftMargin => Interaction::ResizingLeft { anchor },
        Zone::RightMargin => Interaction::ResizingRight { anchor },
        Zone::Body => Interaction::Dragging { anchor },
    };
    crate::log::debug!(?next, x = local.x, window_width, "pointer down");
    Transition {
        ruler,
        interaction: next,
        effect: Effect::None,
    }
}

fn motion(
    ruler: RulerState,
    interaction: Interaction,
    local: DVec2,
    global: ScreenPoint,
    window_width: u32,
    limits: Limits,
) -> Transition {
    match interaction {
        Interaction::Idle => {
            let hint = match zone(local.x, window_width, limits.resize_margin) {
                Zone::LeftMargin | Zone::RightMargin => CursorHint::ResizeHorizontal,
                Zone::Body => CursorHint::Move,
            };
            Transition {
                ruler,
                interaction,
                effect: Effect::Cursor(hint),
            }
        }
        Interaction::Dragging { anchor } => Transition {
            ruler: RulerState {
                position: ruler.position + (global - anchor),
                ..ruler
            },
            interaction: Interaction::Dragging { anchor: global },
            effect: Effect::Moved,
        },
        Interaction::ResizingLeft { anchor } => {
            let diff = (global.x - anchor.x) as i64;
            Transition {
                ruler: resized(ruler, ruler.width as i64 - diff, limits),
                interaction: Interaction::ResizingLeft { anchor: global },
                effect: Effect::Reshaped,
            }
        }
        Interaction::ResizingRight { anchor } => {
            let diff = (global.x - anchor.x) as i64;
            Transition {
                ruler: resized(ruler, ruler.width as i64 + diff, limits),
                interaction: Interaction::ResizingRight { anchor: global },
                effect: Effect::Reshaped,
            }
        }
    }
}

fn resized(ruler: RulerState, width: i64, limits: Limits) -> RulerState {
    let width = width.clamp(limits.min_width as i64, u32::MAX as i64) as u32;
    RulerState { width, ..ruler }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RulerConfig;
    use crate::types::ScreenOffset;
    use glam::dvec2;

    const LIMITS: Limits = Limits {
        resize_margin: 15,
        min_width: 100,
    };
    const WINDOW_W: u32 = 620;

    fn ruler() -> RulerState {
        RulerState::new(&RulerConfig::default())
    }

    fn down(x: f64, global: ScreenPoint) -> PointerEvent {
        PointerEvent::Down {
            local: dvec2(x, 30.0),
            global,
        }
    }

    fn moved(global: ScreenPoint) -> PointerEvent {
        PointerEvent::Move {
            local: dvec2(300.0, 30.0),
            global,
        }
    }

    fn step(ruler: RulerState, interaction: Interaction, event: PointerEvent) -> Transition {
        transition(ruler, interaction, event, WINDOW_W, LIMITS)
    }

    #[test]
    fn press_picks_mode_by_margin() {
        let at = ScreenPoint::new(500, 400);
        let cases = [
            (0.0, Interaction::ResizingLeft { anchor: at }),
            (14.9, Interaction::ResizingLeft { anchor: at }),
            (15.0, Interaction::Dragging { anchor: at }),
            (300.0, Interaction::Dragging { anchor: at }),
            (605.0, Interaction::Dragging { anchor: at }),
            (605.5, Interaction::ResizingRight { anchor: at }),
            (619.0, Interaction::ResizingRight { anchor: at }),
        ];
        for (x, want) in cases {
            let t = step(ruler(), Interaction::Idle, down(x, at));
            assert_eq!(t.interaction, want, "x = {x}");
            assert_eq!(t.ruler, ruler());
        }
    }

    #[test]
    fn release_always_returns_to_idle() {
        let at = ScreenPoint::new(1, 2);
        let states = [
            Interaction::Idle,
            Interaction::Dragging { anchor: at },
            Interaction::ResizingLeft { anchor: at },
            Interaction::ResizingRight { anchor: at },
        ];
        for state in states {
            let t = step(ruler(), state, PointerEvent::Up);
            assert_eq!(t.interaction, Interaction::Idle);
            assert_eq!(t.effect, Effect::None);
        }
    }

    #[test]
    fn drag_translates_by_sum_of_deltas() {
        let start = ScreenPoint::new(100, 100);
        let mut t = step(ruler(), Interaction::Idle, down(300.0, start));
        let deltas = [(3, 4), (-10, 2), (0, 0), (25, -7), (1, 1)];
        let mut cursor = start;
        let mut total = ScreenOffset::default();
        for (dx, dy) in deltas {
            let delta = ScreenOffset::new(dx, dy);
            cursor = cursor + delta;
            total = total + delta;
            t = step(t.ruler, t.interaction, moved(cursor));
            assert_eq!(t.effect, Effect::Moved);
        }
        assert_eq!(t.ruler.position, ScreenPoint::default() + total);
        assert_eq!(t.ruler.width, 600);
    }

    #[test]
    fn drag_is_independent_of_granularity() {
        let start = ScreenPoint::new(0, 0);
        let target = ScreenPoint::new(90, -30);

        let coarse = step(ruler(), Interaction::Idle, down(300.0, start));
        let coarse = step(coarse.ruler, coarse.interaction, moved(target));

        let mut fine = step(ruler(), Interaction::Idle, down(300.0, start));
        for i in 1..=30 {
            fine = step(fine.ruler, fine.interaction, moved(ScreenPoint::new(3 * i, -i)));
        }
        assert_eq!(coarse.ruler.position, fine.ruler.position);
    }

    #[test]
    fn right_edge_resize_floors_at_minimum() {
        let start = ScreenPoint::new(1000, 0);
        let mut t = step(ruler(), Interaction::Idle, down(610.0, start));
        assert!(matches!(t.interaction, Interaction::ResizingRight { .. }));
        for i in 1..=100 {
            t = step(t.ruler, t.interaction, moved(ScreenPoint::new(1000 - 10 * i, 0)));
            assert!(t.ruler.width >= 100);
            assert_eq!(t.effect, Effect::Reshaped);
        }
        assert_eq!(t.ruler.width, 100);
    }

    #[test]
    fn left_edge_resize_grows_when_dragged_left() {
        let start = ScreenPoint::new(200, 0);
        let t = step(ruler(), Interaction::Idle, down(5.0, start));
        let t = step(t.ruler, t.interaction, moved(ScreenPoint::new(150, 0)));
        assert_eq!(t.ruler.width, 650);
        let t = step(t.ruler, t.interaction, moved(ScreenPoint::new(170, 0)));
        assert_eq!(t.ruler.width, 630);
        // Resizing never moves the window.
        assert_eq!(t.ruler.position, ScreenPoint::default());
    }

    #[test]
    fn resize_ignores_vertical_motion() {
        let start = ScreenPoint::new(0, 0);
        let t = step(ruler(), Interaction::Idle, down(612.0, start));
        let t = step(t.ruler, t.interaction, moved(ScreenPoint::new(0, 500)));
        assert_eq!(t.ruler.width, 600);
    }

    #[test]
    fn hover_only_changes_cursor() {
        let hover = |x: f64| {
            let event = PointerEvent::Move {
                local: dvec2(x, 30.0),
                global: ScreenPoint::new(9, 9),
            };
            step(ruler(), Interaction::Idle, event)
        };
        let edge = hover(3.0);
        assert_eq!(edge.effect, Effect::Cursor(CursorHint::ResizeHorizontal));
        assert_eq!(edge.ruler, ruler());
        assert_eq!(edge.interaction, Interaction::Idle);
        assert_eq!(hover(618.0).effect, Effect::Cursor(CursorHint::ResizeHorizontal));
        assert_eq!(hover(310.0).effect, Effect::Cursor(CursorHint::Move));
    }
}
