//! World files: obstacle polygons followed by the robot polygon, as plain text.
//!
//! Format
//! - line 1: declared obstacle count;
//! - line 2: vertex count of the first polygon;
//! - `x y` lines add a vertex to the current polygon;
//! - a line with a single value closes the current polygon as an obstacle and
//!   starts the next one (the value is that polygon's vertex count);
//! - the last polygon is the robot. Blank lines are ignored.

use anyhow::{anyhow, bail, Context, Result};
use polycollide::{Point, Polygon};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Obstacles and robot as read from a world file.
#[derive(Clone, Debug)]
pub struct World {
    pub declared_obstacles: usize,
    pub obstacles: Vec<Polygon>,
    pub robot: Polygon,
}

/// Vertices collected for one polygon plus where they came from.
struct Group {
    expected: usize,
    first_line: usize,
    vertices: Vec<Point>,
}

impl Group {
    fn new(expected: usize, first_line: usize) -> Self {
        Self {
            expected,
            first_line,
            vertices: Vec::new(),
        }
    }

    fn finish(self, what: &str) -> Result<Polygon> {
        if self.vertices.len() != self.expected {
            tracing::warn!(
                what,
                line = self.first_line,
                expected = self.expected,
                found = self.vertices.len(),
                "vertex count marker disagrees with vertex lines"
            );
        }
        Polygon::new(self.vertices)
            .with_context(|| format!("{what} starting at line {}", self.first_line))
    }
}

pub fn load_world(path: &Path) -> Result<World> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading world {}", path.display()))?;
    parse_world(&text).with_context(|| format!("parsing world {}", path.display()))
}

pub fn parse_world(text: &str) -> Result<World> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (n, header) = lines.next().ok_or_else(|| anyhow!("empty world file"))?;
    let declared_obstacles = parse_count(header, n)?;
    let (n, first) = lines
        .next()
        .ok_or_else(|| anyhow!("line {n}: missing vertex count after obstacle count"))?;
    let mut current = Group::new(parse_count(first, n)?, n + 1);

    let mut obstacles = Vec::new();
    for (n, line) in lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [count] => {
                let expected = parse_count(count, n)?;
                let what = format!("obstacle {}", obstacles.len());
                let done = std::mem::replace(&mut current, Group::new(expected, n + 1));
                obstacles.push(done.finish(&what)?);
            }
            [x, y] => current.vertices.push(Point::new(parse_coord(x, n)?, parse_coord(y, n)?)),
            _ => bail!("line {n}: expected a count or an `x y` pair, got {line:?}"),
        }
    }
    let robot = current.finish("robot")?;

    if declared_obstacles != obstacles.len() {
        tracing::warn!(
            declared = declared_obstacles,
            parsed = obstacles.len(),
            "declared obstacle count disagrees with file contents"
        );
    }
    Ok(World {
        declared_obstacles,
        obstacles,
        robot,
    })
}

fn parse_count(s: &str, line: usize) -> Result<usize> {
    s.parse::<usize>()
        .with_context(|| format!("line {line}: invalid count {s:?}"))
}

fn parse_coord(s: &str, line: usize) -> Result<f64> {
    let v = s
        .parse::<f64>()
        .with_context(|| format!("line {line}: invalid coordinate {s:?}"))?;
    if !v.is_finite() {
        bail!("line {line}: non-finite coordinate {s:?}");
    }
    Ok(v)
}

/// Serialize obstacles and robot in the format `parse_world` reads.
pub fn format_world(obstacles: &[Polygon], robot: &Polygon) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{}", obstacles.len())?;
    // The first count doubles as line 2 of the header; later ones are group markers.
    for poly in obstacles.iter().chain(std::iter::once(robot)) {
        writeln!(out, "{}", poly.len())?;
        for v in poly.vertices() {
            writeln!(out, "{} {}", v.x, v.y)?;
        }
    }
    Ok(out)
}

pub fn write_world(path: &Path, obstacles: &[Polygon], robot: &Polygon) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating world dir {}", parent.display()))?;
        }
    }
    let text = format_world(obstacles, robot)?;
    fs::write(path, text).with_context(|| format!("writing world {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const TWO_OBSTACLES: &str = "\
2
4
0 0
10 0
10 10
0 10
3
20 20
25 20
22 24
4
5 5
6 5
6 6
5 6
";

    #[test]
    fn parses_obstacles_then_robot() {
        let world = parse_world(TWO_OBSTACLES).unwrap();
        assert_eq!(world.declared_obstacles, 2);
        assert_eq!(world.obstacles.len(), 2);
        assert_eq!(world.obstacles[0].len(), 4);
        assert_eq!(world.obstacles[1].vertices()[2], Point::new(22.0, 24.0));
        assert_eq!(world.robot.vertices()[0], Point::new(5.0, 5.0));
        assert_eq!(
            polycollide::check_collisions(&world.robot, &world.obstacles),
            vec![0]
        );
    }

    #[test]
    fn accepts_reals_and_blank_lines() {
        let text = "1\n3\n0 0\n1.5 0\n\n0 1.5\n3\n-0.5 -0.5\n0.25 -0.5\n0.25 0.25\n";
        let world = parse_world(text).unwrap();
        assert_eq!(world.obstacles.len(), 1);
        assert_eq!(world.robot.vertices()[1], Point::new(0.25, -0.5));
    }

    #[test]
    fn single_group_is_the_robot() {
        let world = parse_world("0\n3\n0 0\n1 0\n0 1\n").unwrap();
        assert!(world.obstacles.is_empty());
        assert_eq!(world.robot.len(), 3);
    }

    #[test]
    fn errors_carry_line_numbers() {
        let err = parse_world("1\n3\n0 0\n1 x\n0 1\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 4"), "{err:#}");
        let err = parse_world("1\n3\n0 0\n1 1 1\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 4"), "{err:#}");
        let err = parse_world("1\n2\n0 0\n1 0\n3\n0 0\n1 0\n0 1\n").unwrap_err();
        assert!(format!("{err:#}").contains("obstacle 0"), "{err:#}");
        assert!(parse_world("").is_err());
    }

    #[test]
    fn write_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/world.txt");
        let world = parse_world(TWO_OBSTACLES).unwrap();
        write_world(&path, &world.obstacles, &world.robot).unwrap();
        let back = load_world(&path).unwrap();
        assert_eq!(back.obstacles, world.obstacles);
        assert_eq!(back.robot, world.robot);
        assert_eq!(fs::read_to_string(&path).unwrap(), TWO_OBSTACLES);
    }
}
