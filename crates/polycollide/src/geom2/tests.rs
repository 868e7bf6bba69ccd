use super::rand::{draw_scene, draw_star_polygon, ReplayToken, SceneCfg, StarCfg, VertexCount};
use super::*;
use nalgebra::vector;

#[test]
fn edges_close_the_loop() {
    let vs = vec![vector![0.0, 0.0], vector![2.0, 0.0], vector![1.0, 3.0]];
    let edges = edges_of(&vs);
    assert_eq!(edges.len(), 3);
    assert_eq!(edges[0], Segment::new(vs[0], vs[1]));
    assert_eq!(edges[1], Segment::new(vs[1], vs[2]));
    assert_eq!(edges[2], Segment::new(vs[2], vs[0]));
    let poly = Polygon::new(vs).unwrap();
    assert_eq!(poly.edges().collect::<Vec<_>>(), edges);
}

#[test]
fn edges_of_degenerate_lists() {
    assert!(edges_of(&[]).is_empty());
    assert!(edges_of(&[vector![1.0, 1.0]]).is_empty());
}

#[test]
fn validation_rejects_bad_vertex_lists() {
    assert_eq!(
        Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0)]),
        Err(PolygonError::TooFewVertices { count: 2 })
    );
    assert_eq!(
        Polygon::from_xy(&[(0.0, 0.0), (1.0, f64::NAN), (1.0, 1.0)]),
        Err(PolygonError::NonFinite { index: 1 })
    );
    assert_eq!(
        Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (0.0, 1.0)]),
        Err(PolygonError::RepeatedVertex { index: 1 })
    );
    // The closing pair counts as consecutive.
    assert_eq!(
        Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.0, 0.0)]),
        Err(PolygonError::RepeatedVertex { index: 3 })
    );
}

#[test]
fn simple_validation_rejects_bow_tie() {
    let bow_tie = vec![
        vector![0.0, 0.0],
        vector![2.0, 2.0],
        vector![2.0, 0.0],
        vector![0.0, 2.0],
    ];
    assert!(Polygon::new(bow_tie.clone()).is_ok());
    assert_eq!(
        Polygon::new_simple(bow_tie),
        Err(PolygonError::SelfIntersecting { edges: (0, 2) })
    );
    let concave = vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![2.0, 2.0],
        vector![4.0, 4.0],
        vector![0.0, 4.0],
    ];
    assert!(Polygon::new_simple(concave).is_ok());
}

#[test]
fn error_messages_name_the_problem() {
    let msg = PolygonError::SelfIntersecting { edges: (0, 2) }.to_string();
    assert!(msg.contains("0") && msg.contains("2") && msg.contains("not simple"));
    assert!(PolygonError::TooFewVertices { count: 1 }
        .to_string()
        .contains("at least 3"));
}

#[test]
fn bounds_and_area() {
    let poly = Polygon::from_xy(&[(1.0, -1.0), (4.0, -1.0), (4.0, 2.0), (1.0, 2.0)]).unwrap();
    let b = poly.bounds().unwrap();
    assert_eq!(b.min, vector![1.0, -1.0]);
    assert_eq!(b.max, vector![4.0, 2.0]);
    assert!((poly.signed_area() - 9.0).abs() < 1e-12);
    let cw = Polygon::new(poly.vertices().iter().rev().copied().collect()).unwrap();
    assert!((cw.signed_area() + 9.0).abs() < 1e-12);
}

#[test]
fn push_forward_rigid_motion() {
    let square = Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
    let f = Placement::from_pose(3.0, -2.0, std::f64::consts::FRAC_PI_2);
    let placed = square.push_forward(&f);
    // (1,0) rotates to (0,1), then shifts.
    let v1 = placed.vertices()[1];
    assert!((v1 - vector![3.0, -1.0]).norm() < 1e-12);
    assert!((placed.signed_area() - square.signed_area()).abs() < 1e-12);
    assert!(f.is_orientation_preserving());
    let back = placed.push_forward(&f.inverse().unwrap());
    for (a, b) in back.vertices().iter().zip(square.vertices()) {
        assert!((a - b).norm() < 1e-12);
    }
}

#[test]
fn placement_compose_matches_sequential_application() {
    let f = Placement::from_pose(1.0, 2.0, 0.4);
    let g = Placement::translation(-3.0, 0.5);
    let p = vector![0.3, -0.7];
    let lhs = f.compose(&g).apply(p);
    let rhs = f.apply(g.apply(p));
    assert!((lhs - rhs).norm() < 1e-12);
    assert_eq!(Placement::identity().apply(p), p);
}

#[test]
fn cfg_builders() {
    let cfg = CollideCfg::exact().with_ray_rule(RayRule::Inclusive);
    assert_eq!(cfg.eps, 0.0);
    assert_eq!(cfg.ray_rule, RayRule::Inclusive);
    assert_eq!(CollideCfg::default().with_eps(1e-6).eps, 1e-6);
    assert!(CollideCfg::default().approx_eq(1.0, 1.0 + 1e-10));
    assert!(!CollideCfg::exact().approx_eq(1.0, 1.0 + 1e-10));
}

#[test]
fn star_sampler_is_reproducible_and_simple() {
    let cfg = StarCfg {
        vertex_count: VertexCount::Uniform { min: 3, max: 14 },
        radial_jitter: 0.8,
        ..StarCfg::default()
    };
    let centre = vector![10.0, -4.0];
    for index in 0..100 {
        let tok = ReplayToken::new(99, index);
        let a = draw_star_polygon(cfg, centre, tok).unwrap();
        let b = draw_star_polygon(cfg, centre, tok).unwrap();
        assert_eq!(a, b);
        assert!((3..=14).contains(&a.len()));
        assert!(Polygon::new_simple(a.into_vertices()).is_ok());
    }
    let a = draw_star_polygon(cfg, centre, ReplayToken::new(99, 0)).unwrap();
    let b = draw_star_polygon(cfg, centre, ReplayToken::new(99, 1)).unwrap();
    assert_ne!(a, b);
}

#[test]
fn scene_sampler_counts() {
    let cfg = SceneCfg {
        obstacles: 7,
        ..SceneCfg::default()
    };
    let scene = draw_scene(&cfg, ReplayToken::new(5, 0)).unwrap();
    assert_eq!(scene.obstacles.len(), 7);
    assert_eq!(scene.robot.len(), 4);
}
