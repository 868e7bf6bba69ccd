//! Point-in-polygon by horizontal-ray parity (convex and concave polygons).
//!
//! The row `y = p.y` is intersected with every boundary edge. Each hit is
//! classified as right of the point (`p.x < hit.x`) or left of it (ties go
//! left), and the point is inside iff either count is odd.
//!
//! Which edges produce a hit is decided by `RayRule`:
//! - `HalfOpen` (default): an edge counts iff exactly one endpoint lies strictly
//!   above the row. A vertex on the row is attributed to exactly one of its two
//!   edges when the boundary passes through it, to both or neither when it only
//!   touches, so the counts are true crossing counts.
//! - `Inclusive`: every edge whose closed y-range contains the row counts, and a
//!   flat edge on the row hits at its first endpoint. Pass-through vertices are
//!   counted twice, which can flip the result; kept for comparison runs.
//!
//! Boundary points are not classified reliably: a point on a non-horizontal
//! edge ties with that edge's hit, and ties are counted on the left.

use crate::geom2::{CollideCfg, Point, Polygon, Segment};

pub use crate::geom2::RayRule;

/// Hits of the row through a test point, split by side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowCrossings {
    /// Hits with `hit.x <= p.x` (within eps).
    pub left: usize,
    /// Hits with `hit.x > p.x`.
    pub right: usize,
}

impl RowCrossings {
    #[inline]
    pub fn is_odd(&self) -> bool {
        self.left % 2 == 1 || self.right % 2 == 1
    }
}

/// Shorthand for `point_in_polygon_with(p, poly, &CollideCfg::default())`.
#[inline]
pub fn point_in_polygon(p: Point, poly: &Polygon) -> bool {
    point_in_polygon_with(p, poly, &CollideCfg::default())
}

/// True iff `p` lies inside `poly` (boundary points unspecified).
///
/// Points outside the polygon's bounding box (by more than eps) are rejected
/// before counting.
pub fn point_in_polygon_with(p: Point, poly: &Polygon, cfg: &CollideCfg) -> bool {
    match poly.bounds() {
        Some(bounds) if bounds.contains_eps(p, cfg.eps) => row_crossings(p, poly, cfg).is_odd(),
        _ => false,
    }
}

/// Count boundary hits of the row through `p`, without bounding-box rejection.
pub fn row_crossings(p: Point, poly: &Polygon, cfg: &CollideCfg) -> RowCrossings {
    let mut out = RowCrossings::default();
    for edge in poly.edges() {
        if let Some(x) = row_hit_x(&edge, p.y, cfg) {
            if p.x < x - cfg.eps {
                out.right += 1;
            } else {
                out.left += 1;
            }
        }
    }
    out
}

/// x where the row `y = row` meets `edge`, if the edge contributes under the ray rule.
fn row_hit_x(edge: &Segment, row: f64, cfg: &CollideCfg) -> Option<f64> {
    let eps = cfg.eps;
    let contributes = match cfg.ray_rule {
        RayRule::HalfOpen => (edge.a.y > row + eps) != (edge.b.y > row + eps),
        RayRule::Inclusive => {
            let lo = edge.a.y.min(edge.b.y);
            let hi = edge.a.y.max(edge.b.y);
            hi >= row - eps && lo <= row + eps
        }
    };
    if !contributes {
        return None;
    }
    if edge.is_horizontal(cfg) || edge.is_vertical(cfg) {
        return Some(edge.a.x);
    }
    // Neither flat nor vertical, so the slope is finite and non-zero.
    let (k, c) = edge.slope_intercept();
    Some((row - c) / k)
}
