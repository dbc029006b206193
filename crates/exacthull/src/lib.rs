//! Exact planar predicates and a robust divide-and-conquer convex hull.
//!
//! Purpose
//! - Compute signs of geometric test expressions (orientation of a point
//!   relative to a directed line) with no rounding error, and drive a 2D
//!   divide-and-conquer convex hull from that single oracle.
//! - Every geometric branch in the hull builder goes through the two-stage
//!   evaluator in `predicates`; there is no epsilon anywhere in the hull.
//!
//! Why this design (short)
//! - A conservative interval filter resolves the sign of almost every real
//!   input at floating-point cost; the arbitrary-precision rational fallback
//!   runs only when the filter interval straddles zero.
//! - Keeping both stages structurally identical (same sub-expression order)
//!   makes them easy to audit against each other and to test in isolation.
//!
//! Code cross-refs: `interval::Interval`, `predicates::{Sign, OrientQuery}`,
//! `hull::{ConvexHull2, HullResult}`.

pub mod hull;
pub mod interval;
pub mod predicates;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-export so callers can name points without importing nalgebra.
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{convex_hull, ConvexHull2, HullError, HullResult};
    pub use crate::interval::Interval;
    pub use crate::predicates::{orientation_sign, OrientQuery, Sign, SignEstimate};
    pub use crate::sample::{draw_circle_cloud, draw_lattice_cloud, draw_uniform_cloud, CloudCfg, ReplayToken};
    pub use nalgebra::Vector2 as Vec2;
}
