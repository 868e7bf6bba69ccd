//! Basic 2D types and tolerances shared by the intersection predicates.
//!
//! - `CollideCfg`: centralizes the comparison epsilon and the ray-counting rule.
//! - `Segment`: bounded piece between two distinct points.
//! - `Aabb`: closed axis-aligned bounds used for cheap rejection.
//! - `Placement`: 2D affine map placing a footprint at a pose.

use nalgebra::{Matrix2, Vector2};

/// Planar point. Exact equality is coordinate equality.
pub type Point = Vector2<f64>;

/// How edges hit by the horizontal test row are counted in `point_in_polygon`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RayRule {
    /// An edge counts iff exactly one endpoint lies strictly above the row.
    /// A row through a vertex is counted once; flat edges on the row count zero.
    #[default]
    HalfOpen,
    /// Every edge whose closed y-range contains the row counts once; flat edges
    /// on the row hit at their first x. Double-counts pass-through vertices.
    Inclusive,
}

/// Tolerance configuration for all derived-coordinate comparisons.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollideCfg {
    /// Absolute slack for equality and ordering of coordinates, slopes, intercepts.
    pub eps: f64,
    pub ray_rule: RayRule,
}

impl Default for CollideCfg {
    fn default() -> Self {
        Self {
            eps: 1e-9,
            ray_rule: RayRule::HalfOpen,
        }
    }
}

impl CollideCfg {
    /// Exact comparisons (`eps = 0`), default ray rule.
    #[inline]
    pub fn exact() -> Self {
        Self {
            eps: 0.0,
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_eps(self, eps: f64) -> Self {
        Self { eps, ..self }
    }

    #[inline]
    pub fn with_ray_rule(self, ray_rule: RayRule) -> Self {
        Self { ray_rule, ..self }
    }

    #[inline]
    pub(crate) fn approx_eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.eps
    }
}

/// Segment between two endpoints `a` and `b`.
///
/// Pre: `a != b`. Zero-length segments are not detected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb {
            min: Vector2::new(self.a.x.min(self.b.x), self.a.y.min(self.b.y)),
            max: Vector2::new(self.a.x.max(self.b.x), self.a.y.max(self.b.y)),
        }
    }

    /// Vertical iff the x-coordinates agree within `eps`.
    #[inline]
    pub fn is_vertical(&self, cfg: &CollideCfg) -> bool {
        cfg.approx_eq(self.a.x, self.b.x)
    }

    /// Horizontal iff the y-coordinates agree within `eps`.
    #[inline]
    pub fn is_horizontal(&self, cfg: &CollideCfg) -> bool {
        cfg.approx_eq(self.a.y, self.b.y)
    }

    /// Slope and intercept `(k, b)` of the supporting line `y = k x + b`.
    ///
    /// Pre: not vertical. The intercept is taken through `a`.
    #[inline]
    pub(crate) fn slope_intercept(&self) -> (f64, f64) {
        let k = (self.a.y - self.b.y) / (self.a.x - self.b.x);
        (k, self.a.y - k * self.a.x)
    }
}

/// Closed axis-aligned box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Point,
    pub max: Point,
}

impl Aabb {
    /// Bounds of a non-empty point set; `None` for an empty slice.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = *points.first()?;
        let mut min = first;
        let mut max = first;
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Self { min, max })
    }

    /// Membership with slack `eps` (positive eps enlarges the box).
    #[inline]
    pub fn contains_eps(&self, p: Point, eps: f64) -> bool {
        p.x >= self.min.x - eps
            && p.x <= self.max.x + eps
            && p.y >= self.min.y - eps
            && p.y <= self.max.y + eps
    }

    #[inline]
    pub fn overlaps_eps(&self, other: &Aabb, eps: f64) -> bool {
        self.min.x <= other.max.x + eps
            && other.min.x <= self.max.x + eps
            && self.min.y <= other.max.y + eps
            && other.min.y <= self.max.y + eps
    }
}

/// 2D affine map `x ↦ M x + t` used to place a footprint at a pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Placement {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }

    /// Rigid motion: rotate by `theta` (radians, CCW) about the origin, then translate by `(x, y)`.
    pub fn from_pose(x: f64, y: f64, theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Self {
            m: Matrix2::new(c, -s, s, c),
            t: Vector2::new(x, y),
        }
    }

    #[inline]
    pub fn translation(x: f64, y: f64) -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::new(x, y),
        }
    }

    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        self.m * p + self.t
    }

    /// Composition `self ∘ other`.
    #[inline]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            m: self.m * other.m,
            t: self.m * other.t + self.t,
        }
    }

    /// Inverse map if `m` is invertible.
    pub fn inverse(&self) -> Option<Self> {
        self.m.try_inverse().map(|minv| Self {
            m: minv,
            t: -minv * self.t,
        })
    }

    /// Orientation-preserving maps keep the winding order of a polygon.
    #[inline]
    pub fn is_orientation_preserving(&self) -> bool {
        self.m.determinant() > 0.0
    }
}
