//! Interval filter for the orientation determinant.
//!
//! Evaluates `(a.x-c.x)(b.y-c.y) - (a.y-c.y)(b.x-c.x)` with every
//! elementary operation replaced by its conservative interval counterpart.
//! The sub-expression order here is the contract: `exact::OrientPool` runs
//! the same sequence over rationals, slot for slot.

use nalgebra::Vector2;

use super::{Sign, SignEstimate};
use crate::interval::Interval;

/// Filtered orientation sign of `c` relative to the line `a`→`b`.
///
/// Definite only when the result interval lies strictly on one side of
/// zero. Pure; a fixed number of interval temporaries, no allocation.
pub fn orient2d_filter(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> SignEstimate {
    let acx = Interval::point(a.x) - Interval::point(c.x);
    let bcy = Interval::point(b.y) - Interval::point(c.y);
    let acy = Interval::point(a.y) - Interval::point(c.y);
    let bcx = Interval::point(b.x) - Interval::point(c.x);
    let det = acx * bcy - acy * bcx;
    if det.lower() > 0.0 {
        SignEstimate::Definite(Sign::Positive)
    } else if det.upper() < 0.0 {
        SignEstimate::Definite(Sign::Negative)
    } else {
        SignEstimate::Inconclusive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn wide_margin_triples_are_definite() {
        let a = vector![0.0, 0.0];
        let b = vector![4.0, 0.0];
        let c = vector![2.0, 3.0];
        assert_eq!(orient2d_filter(a, b, c), SignEstimate::Definite(Sign::Positive));
        assert_eq!(orient2d_filter(b, a, c), SignEstimate::Definite(Sign::Negative));
    }

    #[test]
    fn collinear_triples_are_inconclusive() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 1.0];
        let c = vector![2.0, 2.0];
        assert_eq!(orient2d_filter(a, b, c), SignEstimate::Inconclusive);
    }

    #[test]
    fn one_ulp_offsets_are_inconclusive() {
        // The determinant magnitude is far below the interval width the
        // filter can certify at this scale.
        let a = vector![12.0, 12.0];
        let b = vector![24.0, 24.0];
        let c = vector![18.0, 18.0_f64.next_up()];
        assert_eq!(orient2d_filter(a, b, c), SignEstimate::Inconclusive);
    }
}
