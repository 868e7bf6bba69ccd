//! SVG rendering of a world for visual checks.
//!
//! World coordinates are written as-is, so y grows downward on screen.
//! Obstacles are outlined and labelled with their index; those in `hits` are
//! filled. The robot is drawn last, on top.

use anyhow::Result;
use polycollide::{Aabb, Point, Polygon};
use std::fmt::Write as _;

use crate::world::World;

const OBSTACLE_STROKE: &str = "#7b3fa0";
const HIT_FILL: &str = "#f4a6a6";
const ROBOT_STROKE: &str = "#e07b00";

fn path_data(vertices: &[Point]) -> String {
    let mut d = String::new();
    for (i, p) in vertices.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { " L" };
        d.push_str(&format!("{cmd} {} {}", p.x, p.y));
    }
    if !vertices.is_empty() {
        d.push_str(" Z");
    }
    d
}

fn centroid(poly: &Polygon) -> Point {
    let vs = poly.vertices();
    vs.iter().fold(Point::zeros(), |acc, v| acc + v) / vs.len().max(1) as f64
}

fn world_bounds(world: &World) -> Option<Aabb> {
    let all: Vec<Point> = world
        .obstacles
        .iter()
        .chain(std::iter::once(&world.robot))
        .flat_map(|p| p.vertices().iter().copied())
        .collect();
    Aabb::from_points(&all)
}

pub fn render_svg(world: &World, hits: &[usize]) -> Result<String> {
    let (min, size) = match world_bounds(world) {
        Some(b) => {
            let span = b.max - b.min;
            let pad = 0.05 * span.x.max(span.y).max(1.0);
            (
                b.min - Point::new(pad, pad),
                span + Point::new(2.0 * pad, 2.0 * pad),
            )
        }
        None => (Point::zeros(), Point::new(1.0, 1.0)),
    };
    let font = 0.03 * size.x.max(size.y);

    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        min.x, min.y, size.x, size.y
    )?;
    for (i, obstacle) in world.obstacles.iter().enumerate() {
        let fill = if hits.contains(&i) { HIT_FILL } else { "none" };
        writeln!(
            out,
            r#"  <path d="{}" fill="{fill}" stroke="{OBSTACLE_STROKE}" stroke-width="1.5" vector-effect="non-scaling-stroke"/>"#,
            path_data(obstacle.vertices())
        )?;
        let c = centroid(obstacle);
        writeln!(
            out,
            r#"  <text x="{}" y="{}" font-size="{font}" text-anchor="middle">{i}</text>"#,
            c.x, c.y
        )?;
    }
    writeln!(
        out,
        r#"  <path d="{}" fill="none" stroke="{ROBOT_STROKE}" stroke-width="2" vector-effect="non-scaling-stroke"/>"#,
        path_data(world.robot.vertices())
    )?;
    writeln!(out, "</svg>")?;
    Ok(out)
}
