//! Equigate demo: authors two curves with the spacing rules, solves the
//! gateway geometry between them, and prints the render-ready scene.
//!
//! ```text
//! cargo run --example solve
//! RUST_LOG=equigate=debug cargo run --example solve
//! ```

use equigate::geometry::{CurveId, PolylineBuilder};
use equigate::math::Point2;
use equigate::operations::{GatewaySolve, SolveInput};
use equigate::tessellation::{SceneParams, TessellateScene};
use equigate::{EquigateError, SolverConfig};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;
const SPACING: f64 = 10.0;

fn main() -> Result<(), EquigateError> {
    // Default: WARN for everything, INFO for equigate.
    // Override with RUST_LOG (e.g. RUST_LOG=equigate=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("equigate=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Red: a gentle arch across the top half.
    let mut red = PolylineBuilder::new(CurveId::Red, Point2::new(0.0, 200.0), SPACING)?;
    for &(x, y) in &[(200.0, 150.0), (400.0, 140.0), (600.0, 170.0), (780.0, 210.0)] {
        while red.extend_toward(&Point2::new(x, y), None).is_some() {}
    }
    red.finish_at_edge(WIDTH, HEIGHT, 210.0, None);
    let red = red.build()?;

    // Blue: a valley across the bottom half, kept clear of red.
    let mut blue = PolylineBuilder::new(CurveId::Blue, Point2::new(0.0, 420.0), SPACING)?;
    for &(x, y) in &[(250.0, 470.0), (420.0, 380.0), (620.0, 450.0), (780.0, 400.0)] {
        while blue.extend_toward(&Point2::new(x, y), Some(&red)).is_some() {}
    }
    blue.finish_at_edge(WIDTH, HEIGHT, 400.0, Some(&red));
    let blue = blue.build()?;

    let input = SolveInput::from_probe(red, blue, &Point2::new(400.0, 300.0));
    let report = GatewaySolve::new(&input).execute(&SolverConfig::default())?;
    println!("{}", report.summary());

    let scene = TessellateScene::new(
        &report,
        SceneParams {
            ray_length: WIDTH.max(HEIGHT),
            ..SceneParams::default()
        },
    )
    .execute()?;

    for marker in &scene.markers {
        println!(
            "  {} crossing at ({:.2}, {:.2})",
            marker.owner, marker.point.x, marker.point.y
        );
    }
    match report.bisectors() {
        Ok(b) => println!(
            "  bisectors at {:.1}° and {:.1}° ({} rays)",
            b.first.to_degrees(),
            b.second.to_degrees(),
            scene.rays.len()
        ),
        Err(err) => println!("  {err}"),
    }
    Ok(())
}
