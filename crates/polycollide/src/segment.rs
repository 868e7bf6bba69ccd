//! Segment–segment and segment–polygon intersection.
//!
//! The segment test works on the slope/intercept form of each supporting
//! line, branching on verticality so that no slope is ever formed from two
//! points sharing an x-coordinate:
//! - both non-vertical: equal slopes are parallel (collinear iff equal
//!   intercepts), otherwise solve for the unique x;
//! - one vertical: evaluate the other line at the vertical x;
//! - both vertical: overlap iff same x and overlapping y-ranges.
//!
//! A bounding-interval check runs first and rejects most disjoint pairs.

use nalgebra::Vector2;

use crate::geom2::{CollideCfg, Point, Polygon, Segment};

/// Outcome of a segment–segment test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentIntersection {
    /// Disjoint.
    None,
    /// Unique common point (possibly a shared endpoint).
    Point(Point),
    /// Collinear or coincident-vertical overlap without a unique point.
    Overlapping,
}

impl SegmentIntersection {
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, SegmentIntersection::None)
    }

    /// True for both `Point` and `Overlapping`.
    #[inline]
    pub fn intersects(&self) -> bool {
        !self.is_none()
    }

    #[inline]
    pub fn point(&self) -> Option<Point> {
        match *self {
            SegmentIntersection::Point(p) => Some(p),
            _ => None,
        }
    }
}

/// Closed interval `[lo, hi]`; empty when `lo > hi`.
#[derive(Clone, Copy, Debug)]
struct Interval {
    lo: f64,
    hi: f64,
}

impl Interval {
    #[inline]
    fn is_empty_eps(&self, eps: f64) -> bool {
        self.lo > self.hi + eps
    }

    #[inline]
    fn contains_eps(&self, v: f64, eps: f64) -> bool {
        v >= self.lo - eps && v <= self.hi + eps
    }
}

/// Shorthand for `segments_intersect_with(a, b, &CollideCfg::default())`.
#[inline]
pub fn segments_intersect(a: &Segment, b: &Segment) -> SegmentIntersection {
    segments_intersect_with(a, b, &CollideCfg::default())
}

/// Intersect two segments under the tolerance policy of `cfg`.
///
/// Symmetric: the arguments are put in a canonical order first, so swapping
/// them yields a bit-identical result.
pub fn segments_intersect_with(a: &Segment, b: &Segment, cfg: &CollideCfg) -> SegmentIntersection {
    let (s1, s2) = canonical_order(a, b);
    let eps = cfg.eps;
    let (b1, b2) = (s1.bounds(), s2.bounds());
    let ix = Interval {
        lo: b1.min.x.max(b2.min.x),
        hi: b1.max.x.min(b2.max.x),
    };
    if ix.is_empty_eps(eps) {
        return SegmentIntersection::None;
    }
    let iy = Interval {
        lo: b1.min.y.max(b2.min.y),
        hi: b1.max.y.min(b2.max.y),
    };
    if iy.is_empty_eps(eps) {
        return SegmentIntersection::None;
    }

    match (s1.is_vertical(cfg), s2.is_vertical(cfg)) {
        (false, false) => {
            let (k1, c1) = s1.slope_intercept();
            let (k2, c2) = s2.slope_intercept();
            if cfg.approx_eq(k1, k2) {
                // Parallel: collinear iff the intercepts agree; the boxes already overlap.
                return if cfg.approx_eq(c1, c2) {
                    SegmentIntersection::Overlapping
                } else {
                    SegmentIntersection::None
                };
            }
            let x = (c2 - c1) / (k1 - k2);
            if !ix.contains_eps(x, eps) {
                return SegmentIntersection::None;
            }
            SegmentIntersection::Point(Vector2::new(x, k1 * x + c1))
        }
        (true, false) => vertical_crossing(s1, s2, ix, iy, eps),
        (false, true) => vertical_crossing(s2, s1, ix, iy, eps),
        (true, true) => {
            if cfg.approx_eq(ix.lo, ix.hi) && !iy.is_empty_eps(eps) {
                SegmentIntersection::Overlapping
            } else {
                SegmentIntersection::None
            }
        }
    }
}

/// `vertical` has (near-)equal x; `other` is non-vertical.
fn vertical_crossing(
    vertical: &Segment,
    other: &Segment,
    ix: Interval,
    iy: Interval,
    eps: f64,
) -> SegmentIntersection {
    let x = vertical.a.x;
    if !ix.contains_eps(x, eps) {
        return SegmentIntersection::None;
    }
    let (k, c) = other.slope_intercept();
    let y = k * x + c;
    if !iy.contains_eps(y, eps) {
        return SegmentIntersection::None;
    }
    SegmentIntersection::Point(Vector2::new(x, y))
}

/// Order the pair lexicographically by endpoint coordinates.
fn canonical_order<'s>(a: &'s Segment, b: &'s Segment) -> (&'s Segment, &'s Segment) {
    let ka = [a.a.x, a.a.y, a.b.x, a.b.y];
    let kb = [b.a.x, b.a.y, b.b.x, b.b.y];
    for (u, v) in ka.iter().zip(kb.iter()) {
        match u.partial_cmp(v) {
            Some(std::cmp::Ordering::Less) => return (a, b),
            Some(std::cmp::Ordering::Greater) => return (b, a),
            _ => {}
        }
    }
    (a, b)
}

/// Shorthand for `segment_intersects_polygon_with(seg, poly, &CollideCfg::default())`.
#[inline]
pub fn segment_intersects_polygon(seg: &Segment, poly: &Polygon) -> bool {
    segment_intersects_polygon_with(seg, poly, &CollideCfg::default())
}

/// True iff `seg` touches or crosses at least one boundary edge of `poly`.
///
/// Stops at the first hit. A segment strictly inside the polygon does not count.
pub fn segment_intersects_polygon_with(seg: &Segment, poly: &Polygon, cfg: &CollideCfg) -> bool {
    poly.edges()
        .any(|edge| segments_intersect_with(&edge, seg, cfg).intersects())
}
