//! Show hulls of a few sampled clouds for quick visual sanity on counts.
//!
//! Usage:
//!   cargo run -p exacthull --example hull_demo -- uniform
//!   cargo run -p exacthull --example hull_demo -- lattice
//!
//! Prints input size, hull dimension, vertex count, and how many predicate
//! calls fell through to the exact stage.

use exacthull::hull::ConvexHull2;
use exacthull::sample::{draw_lattice_cloud, draw_uniform_cloud, CloudCfg, ReplayToken};

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "uniform".to_string());
    let draw = match mode.as_str() {
        "uniform" => draw_uniform_cloud,
        "lattice" => draw_lattice_cloud,
        _ => {
            eprintln!("usage: hull_demo [uniform|lattice]");
            return;
        }
    };

    let mut builder = ConvexHull2::new();
    for i in 0..5u64 {
        let points = draw(
            CloudCfg {
                count: 256,
                extent: 10.0,
            },
            ReplayToken { seed: 2026, index: i },
        );
        let hull = builder.compute(&points).unwrap();
        println!(
            "{mode} sample {i}: n={}, dimension={}, hull={}, exact fallbacks={}",
            points.len(),
            hull.dimension,
            hull.vertices.len(),
            builder.exact_calls()
        );
    }
}
