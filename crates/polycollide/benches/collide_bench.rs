//! Criterion benchmarks for the obstacle-set collision check.
//! Focus sizes: obstacle count in {1, 10, 50, 100}.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polycollide::geom2::rand::{draw_scene, ReplayToken, SceneCfg};
use polycollide::{check_collisions_with, point_in_polygon, CollideCfg, RayRule};

fn scene(obstacles: usize, seed: u64) -> polycollide::geom2::rand::Scene {
    let cfg = SceneCfg {
        obstacles,
        ..SceneCfg::default()
    };
    draw_scene(&cfg, ReplayToken::new(seed, 0)).expect("finite scene")
}

fn bench_check_collisions(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_collisions");
    for &m in &[1usize, 10, 50, 100] {
        for rule in [RayRule::HalfOpen, RayRule::Inclusive] {
            let cfg = CollideCfg::default().with_ray_rule(rule);
            group.bench_with_input(BenchmarkId::new(format!("{rule:?}"), m), &m, |b, &m| {
                b.iter_batched(
                    || scene(m, 43),
                    |s| {
                        let _hits = check_collisions_with(&s.robot, &s.obstacles, &cfg);
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_point_in_polygon(c: &mut Criterion) {
    let s = scene(1, 7);
    let obstacle = &s.obstacles[0];
    let probe = obstacle.vertices()[0] * 0.5 + obstacle.vertices()[1] * 0.5;
    c.bench_function("point_in_polygon", |b| {
        b.iter(|| point_in_polygon(probe, obstacle))
    });
}

criterion_group!(benches, bench_check_collisions, bench_point_in_polygon);
criterion_main!(benches);
