//! Two-stage exact sign evaluation for planar orientation.
//!
//! Purpose
//! - Answer "on which side of the directed line A→B does C lie" with a
//!   mathematically exact sign, at floating-point cost for generic inputs.
//!
//! Why this design (short)
//! - Stage one (`filter`) evaluates the orientation determinant in
//!   conservative interval arithmetic and reports a sign only when the
//!   interval misses zero; this resolves almost all real inputs.
//! - Stage two (`exact`) re-runs the identical sub-expression sequence over
//!   arbitrary-precision rationals in a fixed slot pool; its sign carries no
//!   rounding error and needs no epsilon.
//! - Float→rational conversion is lossless and memoized per point index
//!   (`cache`), so repeated predicate calls on the same point pay it once.
//!
//! Code cross-refs: `filter::orient2d_filter`, `exact::OrientPool`,
//! `cache::RationalCache`, consumed by `crate::hull`.

mod cache;
mod exact;
mod filter;

pub use cache::{RationalCache, RationalPoint};
pub use exact::OrientPool;
pub use filter::orient2d_filter;

use nalgebra::Vector2;

/// Sign of an exactly evaluated expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Conventional -1/0/+1 encoding.
    #[inline]
    pub fn value(self) -> i32 {
        match self {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }

    #[inline]
    pub fn from_cmp(ord: std::cmp::Ordering) -> Self {
        match ord {
            std::cmp::Ordering::Less => Sign::Negative,
            std::cmp::Ordering::Equal => Sign::Zero,
            std::cmp::Ordering::Greater => Sign::Positive,
        }
    }
}

/// Filter-stage verdict: a certified sign, or no decision.
///
/// The filter never certifies `Sign::Zero`; an exactly-zero determinant
/// always lands in `Inconclusive` and is settled by the exact stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignEstimate {
    Definite(Sign),
    Inconclusive,
}

/// Orientation of `c` relative to the directed line `a`→`b`.
///
/// Positive = left of the line (counter-clockwise triple), negative =
/// right, zero = collinear. Exact for all finite inputs.
///
/// This is the stateless entry point; it owns a throwaway slot pool for the
/// rare exact path. Callers issuing many queries against one point set
/// should use [`OrientQuery`] to reuse the pool and the rational cache.
pub fn orientation_sign(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Sign {
    match orient2d_filter(a, b, c) {
        SignEstimate::Definite(sign) => sign,
        SignEstimate::Inconclusive => {
            let mut pool = OrientPool::new();
            pool.sign(
                &RationalPoint::from_f64(a),
                &RationalPoint::from_f64(b),
                &RationalPoint::from_f64(c),
            )
        }
    }
}

/// Reusable orientation oracle over an indexed point set.
///
/// Owns the exact-stage slot pool and the per-index rational cache; both
/// are allocated once and reused across calls. `reset` must be called when
/// switching to a (possibly) different point set.
#[derive(Debug, Default)]
pub struct OrientQuery {
    pool: OrientPool,
    cache: RationalCache,
    exact_calls: u64,
}

impl OrientQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate the rational cache for a new point set of length `n`.
    pub fn reset(&mut self, n: usize) {
        self.cache.reset(n);
        self.exact_calls = 0;
    }

    /// Number of queries that fell through to the exact stage since the
    /// last `reset`.
    #[inline]
    pub fn exact_calls(&self) -> u64 {
        self.exact_calls
    }

    /// Orientation of `points[c]` relative to the line `points[a]`→`points[b]`.
    pub fn sign(&mut self, points: &[Vector2<f64>], a: usize, b: usize, c: usize) -> Sign {
        match orient2d_filter(points[a], points[b], points[c]) {
            SignEstimate::Definite(sign) => sign,
            SignEstimate::Inconclusive => {
                self.exact_calls += 1;
                log::trace!("orientation filter inconclusive for ({a}, {b}, {c}); using exact stage");
                self.cache.ensure(points, a);
                self.cache.ensure(points, b);
                self.cache.ensure(points, c);
                self.pool
                    .sign(self.cache.get(a), self.cache.get(b), self.cache.get(c))
            }
        }
    }
}
