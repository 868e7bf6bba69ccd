use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use polycollide::geom2::rand::{draw_scene, ReplayToken, SceneCfg};
use polycollide::{check_collisions_with, CollideCfg, Placement, RayRule};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod figure;
mod provenance;
mod world;

use provenance::{write_sidecar, Payload};
use world::{load_world, write_world, World};

#[derive(Parser)]
#[command(name = "polycollide-cli")]
#[command(about = "Collision checks between a robot polygon and polygonal obstacles")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the indices of obstacles the robot overlaps
    Check {
        #[command(flatten)]
        world: WorldOpts,
        /// Also write a JSON report (plus provenance sidecar) here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Render obstacles and robot to SVG, highlighting collisions
    Figure {
        #[command(flatten)]
        world: WorldOpts,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write a random world file
    Sample {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 10)]
        obstacles: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Side length of the square that obstacle centres are drawn from
        #[arg(long, default_value_t = 100.0)]
        extent: f64,
    },
}

#[derive(Args, Clone, Debug)]
struct WorldOpts {
    /// World file: obstacle polygons followed by the robot polygon
    #[arg(long)]
    input: PathBuf,
    /// Absolute tolerance for coordinate comparisons
    #[arg(long, default_value_t = 1e-9)]
    eps: f64,
    /// Treatment of edges whose endpoint lies on a test point's row
    #[arg(long, value_enum, default_value_t = Rule::HalfOpen)]
    rule: Rule,
    /// Move the robot to `x,y,theta` (theta in radians) before checking
    #[arg(long, value_parser = parse_pose, allow_hyphen_values = true)]
    pose: Option<Pose>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Rule {
    HalfOpen,
    Inclusive,
}

impl Rule {
    fn name(self) -> &'static str {
        match self {
            Rule::HalfOpen => "half-open",
            Rule::Inclusive => "inclusive",
        }
    }
}

impl From<Rule> for RayRule {
    fn from(r: Rule) -> Self {
        match r {
            Rule::HalfOpen => RayRule::HalfOpen,
            Rule::Inclusive => RayRule::Inclusive,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
struct Pose {
    x: f64,
    y: f64,
    theta: f64,
}

fn parse_pose(s: &str) -> Result<Pose, String> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>().map_err(|e| format!("{p:?}: {e}")))
        .collect::<Result<_, _>>()?;
    match parts.as_slice() {
        [x, y, theta] if parts.iter().all(|v| v.is_finite()) => Ok(Pose {
            x: *x,
            y: *y,
            theta: *theta,
        }),
        [_, _, _] => Err("pose components must be finite".to_string()),
        _ => Err(format!("expected x,y,theta, got {} values", parts.len())),
    }
}

#[derive(Serialize)]
struct CheckReport<'a> {
    input: &'a Path,
    obstacles: usize,
    robot_vertices: usize,
    eps: f64,
    rule: &'static str,
    pose: Option<Pose>,
    collisions: &'a [usize],
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Check { world, out } => {
            let hits = check(&world, out.as_deref())?;
            println!("{hits:?}");
            Ok(())
        }
        Action::Figure { world, out } => render_figure(&world, &out),
        Action::Sample {
            out,
            obstacles,
            seed,
            extent,
        } => sample(&out, obstacles, seed, extent),
    }
}

fn collide_cfg(opts: &WorldOpts) -> Result<CollideCfg> {
    if !(opts.eps.is_finite() && opts.eps >= 0.0) {
        bail!("--eps must be a finite non-negative number, got {}", opts.eps);
    }
    Ok(CollideCfg::default()
        .with_eps(opts.eps)
        .with_ray_rule(opts.rule.into()))
}

/// Load the world, place the robot if a pose is given, and run the check.
fn load_and_check(opts: &WorldOpts) -> Result<(World, Vec<usize>)> {
    let cfg = collide_cfg(opts)?;
    let mut world = load_world(&opts.input)?;
    tracing::info!(
        input = %opts.input.display(),
        obstacles = world.obstacles.len(),
        robot_vertices = world.robot.len(),
        "loaded world"
    );
    if let Some(p) = opts.pose {
        world.robot = world
            .robot
            .push_forward(&Placement::from_pose(p.x, p.y, p.theta));
        tracing::debug!(x = p.x, y = p.y, theta = p.theta, "placed robot");
    }
    let hits = check_collisions_with(&world.robot, &world.obstacles, &cfg);
    tracing::info!(collisions = ?hits, rule = opts.rule.name(), eps = opts.eps, "checked");
    Ok((world, hits))
}

fn params_json(opts: &WorldOpts) -> serde_json::Value {
    serde_json::json!({
        "eps": opts.eps,
        "rule": opts.rule.name(),
        "pose": opts.pose,
    })
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

fn check(opts: &WorldOpts, out: Option<&Path>) -> Result<Vec<usize>> {
    let (world, hits) = load_and_check(opts)?;
    if let Some(out) = out {
        let report = CheckReport {
            input: &opts.input,
            obstacles: world.obstacles.len(),
            robot_vertices: world.robot.len(),
            eps: opts.eps,
            rule: opts.rule.name(),
            pose: opts.pose,
            collisions: &hits,
        };
        create_parent(out)?;
        fs::write(out, serde_json::to_vec_pretty(&report)?)
            .with_context(|| format!("writing report {}", out.display()))?;
        let payload = Payload::new("check", params_json(opts)).with_input(&opts.input);
        write_sidecar(out, payload)?;
        tracing::info!(out = %out.display(), "wrote report");
    }
    Ok(hits)
}

fn render_figure(opts: &WorldOpts, out: &Path) -> Result<()> {
    let (world, hits) = load_and_check(opts)?;
    let svg = figure::render_svg(&world, &hits)?;
    create_parent(out)?;
    fs::write(out, svg).with_context(|| format!("writing figure {}", out.display()))?;
    let payload = Payload::new("figure", params_json(opts)).with_input(&opts.input);
    write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), "wrote figure");
    Ok(())
}

fn sample(out: &Path, obstacles: usize, seed: u64, extent: f64) -> Result<()> {
    if !(extent.is_finite() && extent > 0.0) {
        bail!("--extent must be a finite positive number, got {extent}");
    }
    let cfg = SceneCfg {
        obstacles,
        extent,
        ..SceneCfg::default()
    };
    let scene = draw_scene(&cfg, ReplayToken::new(seed, 0))
        .ok_or_else(|| anyhow!("sampler produced a degenerate polygon (seed {seed})"))?;
    write_world(out, &scene.obstacles, &scene.robot)?;
    let params = serde_json::json!({"obstacles": obstacles, "seed": seed, "extent": extent});
    write_sidecar(out, Payload::new("sample", params))?;
    tracing::info!(out = %out.display(), obstacles, seed, "wrote world");
    Ok(())
}
