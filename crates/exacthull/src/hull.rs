//! 2D convex hull by divide and conquer over exact predicates.
//!
//! Purpose
//! - Compute the convex hull of a planar point set as an ordered index
//!   list, classifying the result as a point, a segment, or a CCW polygon.
//!
//! Why this design (short)
//! - Lexicographic sort plus midpoint splits give sub-hulls that are
//!   spatially separated, so merging reduces to finding the two tangent
//!   lines between them: a bounded alternating walk whose every comparison
//!   goes through the exact orientation oracle. No epsilon, no special
//!   slivers; degeneracy is handled by the predicate being exact.
//! - The recursion permutes one shared work array of positions in place and
//!   stages each merge in one pre-sized scratch buffer, so a top-level call
//!   performs no per-merge allocation.
//!
//! Conventions
//! - "Position" means an index into the sorted, deduplicated order; since
//!   that order is lexicographic, comparing positions compares points
//!   lexicographically. Output vertices are indices into the caller slice.
//! - Sub-hulls and the final polygon are counter-clockwise circular
//!   sequences; segments are `[lexmin, lexmax]`; polygons start at the
//!   lexicographic minimum vertex.
//!
//! Code cross-refs: `predicates::{OrientQuery, Sign}`.

use std::fmt;

use nalgebra::Vector2;

use crate::predicates::{OrientQuery, Sign};

/// Errors reported by the hull entry point, before any computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    /// The input slice is empty.
    EmptyInput,
    /// A coordinate is NaN or infinite.
    NonFiniteCoordinate { index: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::EmptyInput => write!(f, "convex hull of an empty point set"),
            HullError::NonFiniteCoordinate { index } => {
                write!(f, "point {} has a non-finite coordinate", index)
            }
        }
    }
}

impl std::error::Error for HullError {}

/// Hull of a point set: dimension classifier plus ordered vertex indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HullResult {
    /// 0 = single point, 1 = segment, 2 = convex polygon.
    pub dimension: usize,
    /// Indices into the input slice: one index, the segment's two extreme
    /// endpoints, or a counter-clockwise convex polygon starting at the
    /// lexicographically smallest vertex.
    pub vertices: Vec<usize>,
}

/// Reusable divide-and-conquer hull builder.
///
/// Owns the orientation oracle (exact-stage pool and rational cache) and
/// the sort/work/scratch buffers; all are reused across `compute` calls.
#[derive(Debug, Default)]
pub struct ConvexHull2 {
    query: OrientQuery,
    sorted: Vec<usize>,
    work: Vec<usize>,
    merged: Vec<usize>,
}

impl ConvexHull2 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of predicate calls that fell through to the exact stage
    /// during the most recent `compute`.
    #[inline]
    pub fn exact_calls(&self) -> u64 {
        self.query.exact_calls()
    }

    /// Compute the hull of `points`.
    ///
    /// Validates arguments here and only here; the recursion assumes a
    /// non-empty, finite, sorted, deduplicated input.
    pub fn compute(&mut self, points: &[Vector2<f64>]) -> Result<HullResult, HullError> {
        if points.is_empty() {
            return Err(HullError::EmptyInput);
        }
        if let Some(index) = points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(HullError::NonFiniteCoordinate { index });
        }

        self.query.reset(points.len());

        // Lexicographic order with the original index as tie-break, then
        // exact-equal coordinate dedup keeping the smallest index.
        self.sorted.clear();
        self.sorted.extend(0..points.len());
        self.sorted
            .sort_by(|&i, &j| lex_cmp(points[i], points[j]).then(i.cmp(&j)));
        self.sorted.dedup_by(|a, b| points[*a] == points[*b]);
        let m = self.sorted.len();

        self.work.clear();
        self.work.extend(0..m);
        self.merged.clear();
        self.merged.resize(m, 0);

        let hull_n = {
            let mut ctx = HullCtx {
                points,
                sorted: &self.sorted,
                query: &mut self.query,
            };
            build_range(&mut ctx, &mut self.work, &mut self.merged, 0, m)
        };

        // Canonical start: position 0 is the lexicographic minimum of the
        // whole set and is always a hull vertex.
        if hull_n >= 3 {
            let k = self.work[..hull_n]
                .iter()
                .position(|&p| p == 0)
                .expect("lexicographic minimum missing from hull");
            self.work[..hull_n].rotate_left(k);
        }

        let dimension = (hull_n - 1).min(2);
        let vertices: Vec<usize> = self.work[..hull_n].iter().map(|&p| self.sorted[p]).collect();
        log::debug!(
            "hull: {} points ({} unique), dimension {}, {} vertices, {} exact fallbacks",
            points.len(),
            m,
            dimension,
            hull_n,
            self.query.exact_calls()
        );
        Ok(HullResult { dimension, vertices })
    }
}

/// One-shot convenience wrapper around [`ConvexHull2`].
pub fn convex_hull(points: &[Vector2<f64>]) -> Result<HullResult, HullError> {
    ConvexHull2::new().compute(points)
}

#[inline]
fn lex_cmp(a: Vector2<f64>, b: Vector2<f64>) -> std::cmp::Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal) {
        std::cmp::Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal),
        o => o,
    }
}

/// Shared read context for the recursion: the caller's points, the sorted
/// index order, and the orientation oracle.
struct HullCtx<'a> {
    points: &'a [Vector2<f64>],
    sorted: &'a [usize],
    query: &'a mut OrientQuery,
}

impl HullCtx<'_> {
    /// Orientation of position `r` relative to the line through positions
    /// `p`→`q`.
    #[inline]
    fn orient(&mut self, p: usize, q: usize, r: usize) -> Sign {
        self.query
            .sign(self.points, self.sorted[p], self.sorted[q], self.sorted[r])
    }
}

/// Recursive split: compacts the hull of `work[start..start+count]` to the
/// front of the range and returns its vertex count.
fn build_range(
    ctx: &mut HullCtx<'_>,
    work: &mut [usize],
    merged: &mut [usize],
    start: usize,
    count: usize,
) -> usize {
    if count == 1 {
        return 1;
    }
    let half = count / 2;
    let left_n = build_range(ctx, work, merged, start, half);
    let right_n = build_range(ctx, work, merged, start + half, count - half);
    merge_ranges(ctx, work, merged, start, left_n, start + half, right_n)
}

/// Merge two compacted sub-hulls into one, in place.
///
/// The left hull occupies `work[start..start+left_n]`, the right hull
/// `work[mid..mid+right_n]`; every left position is lexicographically
/// smaller than every right position.
fn merge_ranges(
    ctx: &mut HullCtx<'_>,
    work: &mut [usize],
    merged: &mut [usize],
    start: usize,
    left_n: usize,
    mid: usize,
    right_n: usize,
) -> usize {
    // Degenerate merge: two sub-hulls of at most two vertices whose points
    // are all collinear (this covers singleton/singleton) collapse to the
    // two lexicographic extremes. This is the only path that produces
    // segments, so segments are always `[lexmin, lexmax]`.
    if left_n <= 2 && right_n <= 2 {
        let mut pts = [0usize; 4];
        let mut k = 0;
        for i in 0..left_n {
            pts[k] = work[start + i];
            k += 1;
        }
        for i in 0..right_n {
            pts[k] = work[mid + i];
            k += 1;
        }
        let lo = *pts[..k].iter().min().expect("non-empty merge");
        let hi = *pts[..k].iter().max().expect("non-empty merge");
        let collinear = pts[..k]
            .iter()
            .all(|&p| p == lo || p == hi || ctx.orient(lo, hi, p) == Sign::Zero);
        if collinear {
            work[start] = lo;
            work[start + 1] = hi;
            return 2;
        }
    }

    let left = &work[start..start + left_n];
    let right = &work[mid..mid + right_n];
    let (low_l, low_r) = tangent(ctx, left, right, true);
    let (up_l, up_r) = tangent(ctx, left, right, false);

    // Reassemble counter-clockwise: left arc from the upper-tangent vertex
    // to the lower-tangent vertex, then right arc from the lower-tangent
    // vertex to the upper-tangent vertex, staged in the shared scratch.
    let mut k = 0;
    let mut i = up_l;
    loop {
        merged[k] = left[i];
        k += 1;
        if i == low_l {
            break;
        }
        i = (i + 1) % left.len();
    }
    let mut i = low_r;
    loop {
        merged[k] = right[i];
        k += 1;
        if i == up_r {
            break;
        }
        i = (i + 1) % right.len();
    }

    work[start..start + k].copy_from_slice(&merged[..k]);
    k
}

/// Verdict for one neighbor probe during a tangent walk.
///
/// `RightOfLine` and `CollinearBeyond` both advance the walk. The latter is
/// the collinear tie-break: a candidate exactly on the candidate tangent
/// line counts as advance-worthy when it lies lexicographically beyond the
/// current touch vertex in the walk direction (away from the other hull),
/// so collinear runs converge to the extreme touch point instead of
/// oscillating, and on-tangent interior vertices drop out of the merge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Probe {
    LeftOfLine,
    RightOfLine,
    CollinearBeyond,
    CollinearBehind,
}

#[inline]
fn probe(side: Sign, beyond: bool) -> Probe {
    match side {
        Sign::Positive => Probe::LeftOfLine,
        Sign::Negative => Probe::RightOfLine,
        Sign::Zero if beyond => Probe::CollinearBeyond,
        Sign::Zero => Probe::CollinearBehind,
    }
}

#[inline]
fn advances(p: Probe) -> bool {
    matches!(p, Probe::RightOfLine | Probe::CollinearBeyond)
}

/// Tangent between two lexicographically separated sub-hulls.
///
/// Returns the touch vertices `(l, r)` as indices into `left`/`right`. For
/// `lower = true` the tangent line is directed `left[l]`→`right[r]` with
/// both hulls on its left; for `lower = false` it is `right[r]`→`left[l]`.
///
/// The walk starts at the extreme vertices facing the other hull (the
/// left hull's lexicographic maximum, the right hull's minimum) and
/// alternates advancing each side while its next vertex disqualifies the
/// candidate line. Total advances are capped by the combined sub-hull
/// size; exceeding the cap means the orientation oracle or the walk itself
/// is defective, which is fatal. A corrupt hull must not be returned.
fn tangent(ctx: &mut HullCtx<'_>, left: &[usize], right: &[usize], lower: bool) -> (usize, usize) {
    let mut l = 0;
    for i in 1..left.len() {
        if left[i] > left[l] {
            l = i;
        }
    }
    let mut r = 0;
    for i in 1..right.len() {
        if right[i] < right[r] {
            r = i;
        }
    }

    let cap = left.len() + right.len();
    let mut steps = 0usize;
    loop {
        let mut moved = false;
        // Advance the right touch vertex: CCW along the bottom chain for
        // the lower tangent, CW (toward the top chain) for the upper.
        while right.len() > 1 {
            let cand = if lower {
                (r + 1) % right.len()
            } else {
                (r + right.len() - 1) % right.len()
            };
            let side = if lower {
                ctx.orient(left[l], right[r], right[cand])
            } else {
                ctx.orient(right[r], left[l], right[cand])
            };
            if advances(probe(side, right[cand] > right[r])) {
                r = cand;
                moved = true;
                steps += 1;
                assert!(steps <= cap, "tangent walk exceeded its iteration bound");
            } else {
                break;
            }
        }
        // Advance the left touch vertex, mirrored.
        while left.len() > 1 {
            let cand = if lower {
                (l + left.len() - 1) % left.len()
            } else {
                (l + 1) % left.len()
            };
            let side = if lower {
                ctx.orient(left[l], right[r], left[cand])
            } else {
                ctx.orient(right[r], left[l], left[cand])
            };
            if advances(probe(side, left[cand] < left[l])) {
                l = cand;
                moved = true;
                steps += 1;
                assert!(steps <= cap, "tangent walk exceeded its iteration bound");
            } else {
                break;
            }
        }
        if !moved {
            break;
        }
    }
    (l, r)
}
