//! Render a ruler to SVG on stdout.
//!
//! Usage: cargo run --example render_svg -- [angle] [width] [dpi]

use screenruler::{Degrees, Dpi, RulerConfig, RulerState, render_svg};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let angle: f64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(0.0);
    let config = RulerConfig::default();
    let width: u32 = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or(config.initial_width)
        .max(config.min_width);
    let dpi = match args.next() {
        Some(arg) => {
            let raw: f64 = arg
                .parse()
                .map_err(|e| miette::miette!("dpi {arg:?}: {e}"))?;
            Dpi::try_new(raw).map_err(|e| miette::miette!("dpi {raw}: {e}"))?
        }
        None => Dpi::STANDARD,
    };

    let ruler = RulerState {
        angle: Degrees(angle),
        width,
        ..RulerState::new(&config)
    };
    print!("{}", render_svg(&ruler, &config, dpi)?);
    Ok(())
}
