//! Robot–obstacle overlap and the obstacle-set collision check.
//!
//! Purpose
//! - Decide, for a robot footprint at a fixed pose, which obstacles it overlaps.
//!   This is the configuration validity test used inside sampling-based planners.
//!
//! Method
//! - Boundary crossing: any robot edge touching any obstacle edge means overlap.
//! - Containment: with no crossing, each boundary lies entirely inside or
//!   entirely outside the other region, so one representative vertex per side
//!   decides whether the robot sits inside the obstacle or vice versa.
//!
//! Obstacles are identified by their position in the input slice; equal-valued
//! obstacles at different positions are reported separately.

use crate::containment::point_in_polygon_with;
use crate::geom2::{CollideCfg, Placement, Polygon};
use crate::segment::segment_intersects_polygon_with;

/// Shorthand for `robot_intersects_obstacle_with(robot, obstacle, &CollideCfg::default())`.
#[inline]
pub fn robot_intersects_obstacle(robot: &Polygon, obstacle: &Polygon) -> bool {
    robot_intersects_obstacle_with(robot, obstacle, &CollideCfg::default())
}

/// True iff the two polygons overlap: boundaries touch or cross, or one encloses the other.
pub fn robot_intersects_obstacle_with(robot: &Polygon, obstacle: &Polygon, cfg: &CollideCfg) -> bool {
    if robot
        .edges()
        .any(|edge| segment_intersects_polygon_with(&edge, obstacle, cfg))
    {
        return true;
    }
    let robot_inside = robot
        .vertices()
        .first()
        .is_some_and(|&v| point_in_polygon_with(v, obstacle, cfg));
    if robot_inside {
        return true;
    }
    obstacle
        .vertices()
        .first()
        .is_some_and(|&v| point_in_polygon_with(v, robot, cfg))
}

/// Shorthand for `check_collisions_with(robot, obstacles, &CollideCfg::default())`.
#[inline]
pub fn check_collisions(robot: &Polygon, obstacles: &[Polygon]) -> Vec<usize> {
    check_collisions_with(robot, obstacles, &CollideCfg::default())
}

/// Indices of all obstacles overlapping `robot`, ascending.
///
/// Every obstacle is tested exactly once; there is no early exit.
pub fn check_collisions_with(robot: &Polygon, obstacles: &[Polygon], cfg: &CollideCfg) -> Vec<usize> {
    obstacles
        .iter()
        .enumerate()
        .filter(|(_, obstacle)| robot_intersects_obstacle_with(robot, obstacle, cfg))
        .map(|(index, _)| index)
        .collect()
}

/// Place `footprint` with `pose`, then check it against `obstacles`.
pub fn check_collisions_at(
    footprint: &Polygon,
    pose: &Placement,
    obstacles: &[Polygon],
    cfg: &CollideCfg,
) -> Vec<usize> {
    let robot = footprint.push_forward(pose);
    check_collisions_with(&robot, obstacles, cfg)
}

/// True iff the placed footprint overlaps no obstacle. Stops at the first hit.
pub fn is_collision_free(
    footprint: &Polygon,
    pose: &Placement,
    obstacles: &[Polygon],
    cfg: &CollideCfg,
) -> bool {
    let robot = footprint.push_forward(pose);
    !obstacles
        .iter()
        .any(|obstacle| robot_intersects_obstacle_with(&robot, obstacle, cfg))
}
