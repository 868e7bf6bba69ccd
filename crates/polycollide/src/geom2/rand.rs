//! Random star-shaped polygons and obstacle scenes (radial jitter + replay tokens).
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, and connect the vertices in angle order around the centre.
//!   Angular jitter stays below half the spacing, so angles remain strictly
//!   increasing and the polygon is simple. With at least four vertices every
//!   angular gap is below π and the polygon is star-shaped around its centre.
//!   Radial jitter makes it concave in general.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::polygon::Polygon;
use super::types::Point;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Star polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii are `base_radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`. Clamped to [0, 0.95].
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 3, max: 9 },
            angle_jitter_frac: 0.3,
            radial_jitter: 0.5,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a star-shaped polygon centred at `centre`.
///
/// Returns `None` only when the configuration yields non-finite vertices.
pub fn draw_star_polygon(cfg: StarCfg, centre: Point, tok: ReplayToken) -> Option<Polygon> {
    let mut rng = tok.to_std_rng();
    star_with_rng(&cfg, centre, &mut rng)
}

fn star_with_rng<R: Rng>(cfg: &StarCfg, centre: Point, rng: &mut R) -> Option<Polygon> {
    let n = cfg.vertex_count.sample(rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let vertices: Vec<Point> = (0..n)
        .map(|k| {
            let theta = phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let r = r0 * (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj);
            centre + Vector2::new(theta.cos(), theta.sin()) * r
        })
        .collect();
    Polygon::new(vertices).ok()
}

/// Random world: obstacles and a robot footprint with centres uniform in `[0, extent]²`.
#[derive(Clone, Copy, Debug)]
pub struct SceneCfg {
    pub obstacles: usize,
    pub obstacle: StarCfg,
    pub robot: StarCfg,
    pub extent: f64,
}

impl Default for SceneCfg {
    fn default() -> Self {
        Self {
            obstacles: 10,
            obstacle: StarCfg {
                base_radius: 8.0,
                ..StarCfg::default()
            },
            robot: StarCfg {
                vertex_count: VertexCount::Fixed(4),
                radial_jitter: 0.1,
                base_radius: 5.0,
                ..StarCfg::default()
            },
            extent: 100.0,
        }
    }
}

/// Obstacles plus robot, in the order the loader expects.
#[derive(Clone, Debug)]
pub struct Scene {
    pub obstacles: Vec<Polygon>,
    pub robot: Polygon,
}

/// Draw a reproducible scene; `None` if any polygon degenerates.
pub fn draw_scene(cfg: &SceneCfg, tok: ReplayToken) -> Option<Scene> {
    let mut rng = tok.to_std_rng();
    let extent = cfg.extent.max(0.0);
    let centre = |rng: &mut StdRng| {
        Vector2::new(rng.gen::<f64>() * extent, rng.gen::<f64>() * extent)
    };
    let mut obstacles = Vec::with_capacity(cfg.obstacles);
    for _ in 0..cfg.obstacles {
        let c = centre(&mut rng);
        obstacles.push(star_with_rng(&cfg.obstacle, c, &mut rng)?);
    }
    let c = centre(&mut rng);
    let robot = star_with_rng(&cfg.robot, c, &mut rng)?;
    Some(Scene { obstacles, robot })
}
