//! Drive an overlay surface with a scripted gesture and log every host call.
//!
//! Run with: RUST_LOG=debug cargo run --example interact --features tracing

use glam::dvec2;
use screenruler::{
    CursorHint, HitRegion, Host, OverlaySurface, PointerButton, RulerConfig, ScreenPoint, Size,
    WindowStyle,
};

struct PrintingHost;

impl Host for PrintingHost {
    fn apply_style(&mut self, style: &WindowStyle) {
        println!("style      {style:?}");
    }

    fn set_window_size(&mut self, size: Size<u32>) {
        println!("size       {}x{}", size.w, size.h);
    }

    fn set_window_position(&mut self, position: ScreenPoint) {
        println!("position   {},{}", position.x, position.y);
    }

    fn set_clip_region(&mut self, region: &HitRegion) {
        println!("clip       {}", screenruler::svg::polygon_points(region));
    }

    fn set_cursor(&mut self, cursor: CursorHint) {
        println!("cursor     {cursor:?}");
    }

    fn invalidate(&mut self) {
        println!("invalidate");
    }

    fn query_dpi_x(&self) -> f64 {
        96.0
    }
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut surface = OverlaySurface::new(PrintingHost, RulerConfig::default())?;
    surface.center_on(Size::new(1920, 1080));

    // Hover, then drag the body 40 px to the right.
    surface.pointer_move(dvec2(300.0, 35.0));
    surface.pointer_down(dvec2(300.0, 35.0), PointerButton::Primary);
    surface.pointer_move(dvec2(340.0, 35.0));
    surface.pointer_up();

    // Stretch the right end by 100 px.
    surface.pointer_down(dvec2(607.0, 35.0), PointerButton::Primary);
    surface.pointer_move(dvec2(707.0, 35.0));
    surface.pointer_up();

    // Tilt a little, then snap to the next 45°.
    surface.wheel(120, false);
    surface.wheel(120, true);

    let ruler = surface.ruler();
    println!(
        "final      {}px at {} ({})",
        ruler.width,
        ruler.angle,
        ruler.display_angle()
    );
    Ok(())
}
