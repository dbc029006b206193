//! Exact evaluator: the orientation determinant over a fixed slot pool.
//!
//! Purpose
//! - Settle the sign when the interval filter cannot: re-run the identical
//!   sub-expression sequence over arbitrary-precision rationals.
//!
//! Why this design (short)
//! - The expression tree is fixed, so its intermediates are too: a flat
//!   pool of 13 rational slots with compile-time indices, written in a
//!   hand-unrolled sequence ending in one designated result slot. The pool
//!   is allocated once per evaluator and reused across calls.
//! - Rationals grow as needed: no intermediate can overflow, for any
//!   finite `f64` input, so the pool needs no width headroom.
//!
//! Slot discipline: each slot has exactly one writer before its readers
//! within a single evaluation; no two live values share a slot.

use num_rational::BigRational;
use num_traits::Zero;

use super::cache::RationalPoint;
use super::Sign;

// Slot layout for the determinant
//   (ax - cx)(by - cy) - (ay - cy)(bx - cx)
// mirroring `filter::orient2d_filter` operation for operation.
const AX: usize = 0;
const AY: usize = 1;
const BX: usize = 2;
const BY: usize = 3;
const CX: usize = 4;
const CY: usize = 5;
const ACX: usize = 6;
const BCY: usize = 7;
const ACY: usize = 8;
const BCX: usize = 9;
const LHS: usize = 10;
const RHS: usize = 11;
const DET: usize = 12;
const NUM_SLOTS: usize = 13;

/// Fixed-size scratch pool for exact orientation evaluation.
#[derive(Debug)]
pub struct OrientPool {
    node: Vec<BigRational>,
}

impl Default for OrientPool {
    fn default() -> Self {
        Self::new()
    }
}

impl OrientPool {
    pub fn new() -> Self {
        Self {
            node: vec![BigRational::zero(); NUM_SLOTS],
        }
    }

    #[inline]
    fn load(&mut self, slot: usize, value: &BigRational) {
        self.node[slot].clone_from(value);
    }

    #[inline]
    fn sub(&mut self, out: usize, a: usize, b: usize) {
        let v = &self.node[a] - &self.node[b];
        self.node[out] = v;
    }

    #[inline]
    fn mul(&mut self, out: usize, a: usize, b: usize) {
        let v = &self.node[a] * &self.node[b];
        self.node[out] = v;
    }

    /// Exact orientation sign of `c` relative to the line `a`→`b`.
    pub fn sign(&mut self, a: &RationalPoint, b: &RationalPoint, c: &RationalPoint) -> Sign {
        self.load(AX, &a.x);
        self.load(AY, &a.y);
        self.load(BX, &b.x);
        self.load(BY, &b.y);
        self.load(CX, &c.x);
        self.load(CY, &c.y);

        self.sub(ACX, AX, CX);
        self.sub(BCY, BY, CY);
        self.sub(ACY, AY, CY);
        self.sub(BCX, BX, CX);
        self.mul(LHS, ACX, BCY);
        self.mul(RHS, ACY, BCX);
        self.sub(DET, LHS, RHS);

        Sign::from_cmp(self.node[DET].cmp(&BigRational::zero()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn rp(x: f64, y: f64) -> RationalPoint {
        RationalPoint::from_f64(vector![x, y])
    }

    #[test]
    fn signs_match_hand_computed_determinants() {
        let mut pool = OrientPool::new();
        assert_eq!(
            pool.sign(&rp(0.0, 0.0), &rp(1.0, 0.0), &rp(0.0, 1.0)),
            Sign::Positive
        );
        assert_eq!(
            pool.sign(&rp(0.0, 0.0), &rp(0.0, 1.0), &rp(1.0, 0.0)),
            Sign::Negative
        );
        assert_eq!(
            pool.sign(&rp(-3.0, -3.0), &rp(5.0, 5.0), &rp(0.25, 0.25)),
            Sign::Zero
        );
    }

    #[test]
    fn pool_is_reusable_across_calls() {
        let mut pool = OrientPool::new();
        for _ in 0..3 {
            assert_eq!(
                pool.sign(&rp(0.0, 0.0), &rp(2.0, 0.0), &rp(1.0, 1.0)),
                Sign::Positive
            );
            assert_eq!(
                pool.sign(&rp(0.0, 0.0), &rp(2.0, 0.0), &rp(1.0, -1.0)),
                Sign::Negative
            );
        }
    }

    #[test]
    fn resolves_one_ulp_from_collinear() {
        let mut pool = OrientPool::new();
        let c_up = rp(1.0, 1.0_f64.next_up());
        assert_eq!(
            pool.sign(&rp(0.0, 0.0), &rp(3.0, 3.0), &c_up),
            Sign::Positive
        );
    }
}
