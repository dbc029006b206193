//! Lazy, index-keyed cache of exact rational point coordinates.
//!
//! Float→rational conversion is exact (every finite `f64` is a dyadic
//! rational) but allocates; the cache pays it at most once per point index
//! per top-level computation. Keyed by explicit index into the caller's
//! point slice, never by address, and cleared on `reset`.

use nalgebra::Vector2;
use num_rational::BigRational;

/// Exact rational counterpart of one input point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RationalPoint {
    pub x: BigRational,
    pub y: BigRational,
}

impl RationalPoint {
    /// Lossless conversion. The hull entry point validates finiteness, so
    /// the conversion cannot fail there; other callers must uphold it.
    pub fn from_f64(p: Vector2<f64>) -> Self {
        Self {
            x: BigRational::from_float(p.x).expect("finite coordinate"),
            y: BigRational::from_float(p.y).expect("finite coordinate"),
        }
    }
}

/// Dense per-index memo of rational points.
///
/// The `Option` doubles as the conversion flag: a slot is `Some` exactly
/// when its point has been materialized.
#[derive(Debug, Default)]
pub struct RationalCache {
    slots: Vec<Option<RationalPoint>>,
}

impl RationalCache {
    /// Invalidate all entries and size the cache for `n` points.
    pub fn reset(&mut self, n: usize) {
        self.slots.clear();
        self.slots.resize_with(n, || None);
    }

    /// Materialize the rational form of `points[index]` if not cached yet.
    pub fn ensure(&mut self, points: &[Vector2<f64>], index: usize) {
        let slot = &mut self.slots[index];
        if slot.is_none() {
            *slot = Some(RationalPoint::from_f64(points[index]));
        }
    }

    /// Cached rational point; `ensure` must have run for this index.
    #[inline]
    pub fn get(&self, index: usize) -> &RationalPoint {
        self.slots[index]
            .as_ref()
            .expect("rational point not materialized")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use num_bigint::BigInt;
    use num_traits::ToPrimitive;

    #[test]
    fn conversion_is_lossless() {
        let p = vector![0.1, -3.75];
        let r = RationalPoint::from_f64(p);
        // Round-tripping through the rational recovers the bit pattern.
        assert_eq!(r.x.to_f64().unwrap(), 0.1);
        assert_eq!(r.y.to_f64().unwrap(), -3.75);
        // The conversion is bit-exact, not decimal: 0.1 is a dyadic
        // rational with denominator 2^55, while -3.75 is exactly -15/4.
        assert_ne!(r.x, BigRational::new(BigInt::from(1), BigInt::from(10)));
        assert_eq!(r.y, BigRational::new(BigInt::from(-15), BigInt::from(4)));
    }

    #[test]
    fn ensure_is_idempotent_and_reset_clears() {
        let points = vec![vector![1.5, 2.5], vector![0.0, -1.0]];
        let mut cache = RationalCache::default();
        cache.reset(points.len());
        cache.ensure(&points, 1);
        let first = cache.get(1).clone();
        cache.ensure(&points, 1);
        assert_eq!(*cache.get(1), first);
        cache.reset(points.len());
        cache.ensure(&points, 0);
        assert_eq!(cache.get(0).y.to_f64().unwrap(), 2.5);
    }
}
