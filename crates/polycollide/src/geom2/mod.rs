//! Planar geometry types for the collision predicates.
//!
//! Purpose
//! - Plain value types (`Point`, `Segment`, `Polygon`) built fresh per check
//!   from caller data, plus the tolerance policy (`CollideCfg`) that every
//!   predicate threads through.
//! - `Polygon::edges` / `edges_of` decompose a vertex cycle into its closed
//!   boundary; every consumer visits each edge exactly once in that order.
//!
//! Assumptions and conventions
//! - Polygons are simple (not self-crossing), have at least three vertices and
//!   no repeated consecutive vertices. `Polygon::new` checks the cheap part of
//!   this; `Polygon::new_simple` checks all of it.
//! - Derived coordinates (slopes, intercepts, intersection points) are compared
//!   with the absolute slack `CollideCfg::eps`.

pub mod polygon;
pub mod rand;
mod types;

pub use polygon::{edges_of, Polygon, PolygonError};
pub use types::{Aabb, CollideCfg, Placement, Point, RayRule, Segment};

#[cfg(test)]
mod tests;
