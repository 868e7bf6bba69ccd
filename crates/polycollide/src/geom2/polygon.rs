//! Vertex-cycle polygons and their boundary decomposition.
//!
//! A `Polygon` is an ordered cycle of at least three vertices in either winding
//! order, convex or concave. Validation is opt-in: `Polygon::new` checks the
//! cheap invariants, `Polygon::new_simple` additionally rejects self-crossing
//! boundaries, and `Polygon::new_unchecked` trusts the caller.

use std::fmt;

use super::types::{Aabb, CollideCfg, Placement, Point, Segment};
use crate::segment::{segments_intersect_with, SegmentIntersection};

/// Reasons a vertex list is rejected as a polygon.
#[derive(Clone, Debug, PartialEq)]
pub enum PolygonError {
    /// Fewer than three vertices.
    TooFewVertices { count: usize },
    /// A coordinate is NaN or infinite.
    NonFinite { index: usize },
    /// Vertex `index` equals its successor (the last vertex wraps to the first).
    RepeatedVertex { index: usize },
    /// Two non-adjacent boundary edges touch or cross.
    SelfIntersecting { edges: (usize, usize) },
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolygonError::TooFewVertices { count } => {
                write!(f, "polygon needs at least 3 vertices, got {count}")
            }
            PolygonError::NonFinite { index } => {
                write!(f, "vertex {index} has a non-finite coordinate")
            }
            PolygonError::RepeatedVertex { index } => {
                write!(f, "vertex {index} repeats its successor")
            }
            PolygonError::SelfIntersecting { edges } => write!(
                f,
                "boundary edges {} and {} intersect (polygon is not simple)",
                edges.0, edges.1
            ),
        }
    }
}

impl std::error::Error for PolygonError {}

/// Closed polygon given by its vertex cycle.
///
/// Invariants (checked by `new`, assumed by `new_unchecked`):
/// - at least three vertices, all finite;
/// - no vertex equals its successor, including the closing pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Validate count, finiteness and consecutive duplicates.
    pub fn new(vertices: Vec<Point>) -> Result<Self, PolygonError> {
        let n = vertices.len();
        if n < 3 {
            return Err(PolygonError::TooFewVertices { count: n });
        }
        if let Some(index) = vertices
            .iter()
            .position(|v| !(v.x.is_finite() && v.y.is_finite()))
        {
            return Err(PolygonError::NonFinite { index });
        }
        if let Some(index) = (0..n).find(|&i| vertices[i] == vertices[(i + 1) % n]) {
            return Err(PolygonError::RepeatedVertex { index });
        }
        Ok(Self { vertices })
    }

    /// Like `new`, and also reject boundaries where non-adjacent edges meet.
    ///
    /// O(n²) in the vertex count.
    pub fn new_simple(vertices: Vec<Point>) -> Result<Self, PolygonError> {
        let poly = Self::new(vertices)?;
        if let Some(edges) = poly.first_self_intersection(&CollideCfg::default()) {
            return Err(PolygonError::SelfIntersecting { edges });
        }
        Ok(poly)
    }

    /// Wrap a vertex list without any checks.
    ///
    /// Operations on a list that violates the invariants have unspecified results.
    #[inline]
    pub fn new_unchecked(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Convenience constructor from coordinate pairs (validated like `new`).
    pub fn from_xy(coords: &[(f64, f64)]) -> Result<Self, PolygonError> {
        Self::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Boundary edges in traversal order, closing back to the first vertex.
    #[inline]
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        edge_iter(&self.vertices)
    }

    /// Bounding box; `None` only for an (unchecked) empty polygon.
    #[inline]
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(&self.vertices)
    }

    /// Shoelace signed area: positive for counterclockwise vertex order.
    pub fn signed_area(&self) -> f64 {
        let twice: f64 = self
            .edges()
            .map(|e| e.a.x * e.b.y - e.b.x * e.a.y)
            .sum();
        0.5 * twice
    }

    /// Image of the polygon under `f` (vertex order preserved).
    pub fn push_forward(&self, f: &Placement) -> Polygon {
        Polygon {
            vertices: self.vertices.iter().map(|&v| f.apply(v)).collect(),
        }
    }

    /// First pair of non-adjacent edges that intersect, if any.
    fn first_self_intersection(&self, cfg: &CollideCfg) -> Option<(usize, usize)> {
        let edges = edges_of(&self.vertices);
        let n = edges.len();
        for i in 0..n {
            for j in (i + 2)..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                if segments_intersect_with(&edges[i], &edges[j], cfg) != SegmentIntersection::None {
                    return Some((i, j));
                }
            }
        }
        None
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = PolygonError;

    fn try_from(vertices: Vec<Point>) -> Result<Self, Self::Error> {
        Polygon::new(vertices)
    }
}

/// Boundary segments of a vertex cycle: `(v0,v1), …, (v(n-1), v0)`.
///
/// Returns exactly `n` segments for `n >= 2` and none for fewer vertices.
pub fn edges_of(vertices: &[Point]) -> Vec<Segment> {
    edge_iter(vertices).collect()
}

fn edge_iter(vertices: &[Point]) -> impl Iterator<Item = Segment> + '_ {
    let n = if vertices.len() < 2 { 0 } else { vertices.len() };
    (0..n).map(move |i| Segment::new(vertices[i], vertices[(i + 1) % n]))
}
