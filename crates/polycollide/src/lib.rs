//! Polygon collision checks for a robot footprint among polygonal obstacles.
//!
//! Given the robot's polygon at a fixed pose and a list of obstacle polygons,
//! report which obstacles it overlaps. This is the configuration validity test
//! used inside sampling-based motion planners.
//!
//! Layers, leaves first
//! - `geom2`: points, segments, polygons, boundary decomposition, tolerances.
//! - `segment`: segment–segment and segment–polygon intersection.
//! - `containment`: horizontal-ray parity point-in-polygon.
//! - `collision`: robot–obstacle overlap and the obstacle-set check.
//!
//! All operations are pure and synchronous. Each has a default-tolerance form
//! and a `_with(cfg)` form taking a `CollideCfg`.

pub mod collision;
pub mod containment;
pub mod geom2;
pub mod segment;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use collision::{
    check_collisions, check_collisions_at, check_collisions_with, is_collision_free,
    robot_intersects_obstacle, robot_intersects_obstacle_with,
};
pub use containment::{point_in_polygon, point_in_polygon_with, row_crossings, RowCrossings};
pub use geom2::{
    edges_of, Aabb, CollideCfg, Placement, Point, Polygon, PolygonError, RayRule, Segment,
};
pub use segment::{
    segment_intersects_polygon, segment_intersects_polygon_with, segments_intersect,
    segments_intersect_with, SegmentIntersection,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_scene, draw_star_polygon, ReplayToken, Scene, SceneCfg, StarCfg, VertexCount,
    };
    pub use crate::{
        check_collisions, check_collisions_with, point_in_polygon, robot_intersects_obstacle,
        segments_intersect, CollideCfg, Placement, Point, Polygon, RayRule, Segment,
        SegmentIntersection,
    };
    pub use nalgebra::Vector2 as Vec2;
}
