//! Möbius strip demo: estimates area and boundary length, then writes a
//! surface plot.
//!
//! Usage:
//! ```text
//! cargo run --example mobius                      # writes mobius_strip.obj
//! cargo run --example mobius -- out/strip.obj     # custom output path
//! RUST_LOG=mobius=debug cargo run --example mobius
//! ```

use std::path::PathBuf;

use mobius::plot::SurfacePlot;
use mobius::{MobiusStrip, Result};
use tracing::info;

const LOOP_RADIUS: f64 = 5.0;
const STRIP_WIDTH: f64 = 1.0;
const MESH_POINTS: usize = 250;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for mobius.
    // Override with RUST_LOG env var (e.g. RUST_LOG=mobius=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("mobius=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let output = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("mobius_strip.obj"), PathBuf::from);

    let strip = MobiusStrip::new(LOOP_RADIUS, STRIP_WIDTH, MESH_POINTS)?;
    let area = strip.estimate_area();
    let boundary = strip.boundary_length();
    info!(area, boundary, "estimates ready");

    println!("Estimated Surface Area: {area}");
    println!("Boundary Length: {boundary}");

    SurfacePlot::new(&strip).save(&output)
}
