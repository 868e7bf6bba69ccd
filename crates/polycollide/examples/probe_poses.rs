//! Sample random robot poses in a random world and report how many are collision-free.
//!
//! Usage:
//!   cargo run -p polycollide --example probe_poses -- 500
//!
//! Prints the free fraction and the first few colliding poses with their obstacle indices.

use polycollide::collision::{check_collisions_at, is_collision_free};
use polycollide::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn main() {
    let samples: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(200);
    let cfg = SceneCfg {
        obstacles: 15,
        ..SceneCfg::default()
    };
    let Some(scene) = draw_scene(&cfg, ReplayToken::new(2025, 0)) else {
        eprintln!("degenerate scene");
        return;
    };
    // Footprint centred at the origin; poses move it around the world.
    let footprint = Polygon::from_xy(&[(-3.0, -2.0), (3.0, -2.0), (3.0, 2.0), (-3.0, 2.0)])
        .expect("rectangle footprint");
    let check = CollideCfg::default();
    let mut rng = StdRng::seed_from_u64(7);
    let mut free = 0usize;
    let mut shown = 0usize;
    for _ in 0..samples {
        let pose = Placement::from_pose(
            rng.gen_range(0.0..cfg.extent),
            rng.gen_range(0.0..cfg.extent),
            rng.gen_range(0.0..std::f64::consts::TAU),
        );
        if is_collision_free(&footprint, &pose, &scene.obstacles, &check) {
            free += 1;
        } else if shown < 5 {
            let hits = check_collisions_at(&footprint, &pose, &scene.obstacles, &check);
            println!("pose t=({:.1}, {:.1}) collides with {hits:?}", pose.t.x, pose.t.y);
            shown += 1;
        }
    }
    println!(
        "free poses: {free}/{samples} ({:.1}%)",
        100.0 * free as f64 / samples.max(1) as f64
    );
}
