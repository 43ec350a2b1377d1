//! Integration tests for wobble-solver.

use wobble_mesh::{CurvePathBuilder, EdgeMask, PathSegment, Rect, Vec2};
use wobble_solver::{
    AnchorTarget, DynamicPoint, FrameClock, ManualFrameClock, MeshState, SimulatorState,
    SpringAttachment, WobbleConfig, WobbleSimulator,
};
use wobble_types::constants::{DEFAULT_DT, MAX_FREQUENCY_HZ, MIN_FREQUENCY_HZ, SETTLE_EPSILON};
use wobble_types::{EdgeIndex, PointId};

const SQUARE: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

fn excited(config: WobbleConfig) -> (WobbleSimulator, ManualFrameClock) {
    let mut sim = WobbleSimulator::with_rect(config, SQUARE).unwrap();
    let mut clock = ManualFrameClock::default();
    sim.on_geometry_changed(Rect::new(0.0, 0.0, 140.0, 100.0), &mut clock)
        .unwrap();
    (sim, clock)
}

// ─── SpringAttachment Tests ───────────────────────────────────

#[test]
fn attachment_converges_to_anchor() {
    let anchor = Vec2::new(30.0, -20.0);
    for damping in [0.05, 0.3, 1.0, 1.8] {
        let spring = SpringAttachment::new(
            PointId(0),
            AnchorTarget::Corner(EdgeIndex(0)),
            anchor,
            3.0,
            damping,
        );
        let mut point = DynamicPoint::at(Vec2::new(-50.0, 80.0));
        for _ in 0..3000 {
            spring.step(&mut point, DEFAULT_DT);
        }
        assert!(
            (point.position - anchor).length() < 1e-3,
            "damping {damping}: ended at {}",
            point.position
        );
    }
}

#[test]
fn attachment_step_returns_new_position() {
    let spring = SpringAttachment::new(
        PointId(0),
        AnchorTarget::Corner(EdgeIndex(0)),
        Vec2::ZERO,
        3.0,
        0.3,
    );
    let mut point = DynamicPoint::at(Vec2::new(10.0, 0.0));
    let returned = spring.step(&mut point, DEFAULT_DT);
    assert_eq!(returned, point.position);
    assert!(point.position.x < 10.0);
    assert!(point.velocity.x < 0.0);
}

#[test]
fn attachment_clamps_parameters() {
    let spring = SpringAttachment::new(
        PointId(0),
        AnchorTarget::Corner(EdgeIndex(0)),
        Vec2::ZERO,
        -4.0,
        f32::NAN,
    );
    assert!(spring.frequency_hz() > 0.0);
    assert_eq!(spring.damping_ratio(), 0.0);
}

#[test]
fn equivalent_spring_pulls_to_mean_anchor() {
    let a = SpringAttachment::new(
        PointId(1),
        AnchorTarget::Corner(EdgeIndex(1)),
        Vec2::new(100.0, 0.0),
        3.0,
        0.3,
    );
    let b = SpringAttachment::new(
        PointId(1),
        AnchorTarget::Corner(EdgeIndex(2)),
        Vec2::new(100.0, 100.0),
        3.0,
        0.3,
    );
    let combined = SpringAttachment::equivalent([&a, &b]).unwrap();
    assert!((combined.anchor - Vec2::new(100.0, 50.0)).length() < 1e-4);
    assert!((combined.frequency_hz() - 3.0 * 2f32.sqrt()).abs() < 1e-4);
    assert!((combined.damping_ratio() - 0.3 * 2f32.sqrt()).abs() < 1e-4);
    assert!(SpringAttachment::equivalent(std::iter::empty::<&SpringAttachment>()).is_none());
}

#[test]
fn equivalent_spring_matches_summed_forces() {
    let point = DynamicPoint {
        position: Vec2::new(20.0, 5.0),
        velocity: Vec2::new(-3.0, 7.0),
    };
    let springs = [
        SpringAttachment::new(PointId(0), AnchorTarget::Corner(EdgeIndex(0)), Vec2::ZERO, 2.0, 0.4),
        SpringAttachment::new(PointId(0), AnchorTarget::Corner(EdgeIndex(1)), Vec2::new(40.0, 0.0), 2.0, 0.4),
    ];
    let summed: Vec2 = springs.iter().map(|s| s.acceleration(&point)).sum();
    let combined = SpringAttachment::equivalent(&springs).unwrap();
    assert!((combined.acceleration(&point) - summed).length() < 1e-2);
}

#[test]
fn attachment_clamps_extreme_frequency() {
    let spring = SpringAttachment::new(
        PointId(0),
        AnchorTarget::Corner(EdgeIndex(0)),
        Vec2::ZERO,
        1.0e18,
        0.3,
    );
    assert_eq!(spring.frequency_hz(), MAX_FREQUENCY_HZ);
    let spring = SpringAttachment::new(
        PointId(0),
        AnchorTarget::Corner(EdgeIndex(0)),
        Vec2::ZERO,
        f32::INFINITY,
        0.3,
    );
    assert_eq!(spring.frequency_hz(), MAX_FREQUENCY_HZ);
}

#[test]
fn equivalent_spring_weights_unequal_frequencies() {
    let point = DynamicPoint {
        position: Vec2::new(12.0, -6.0),
        velocity: Vec2::new(4.0, 1.0),
    };
    let springs = [
        SpringAttachment::new(PointId(0), AnchorTarget::Corner(EdgeIndex(0)), Vec2::ZERO, 2.0, 0.2),
        SpringAttachment::new(PointId(0), AnchorTarget::Corner(EdgeIndex(1)), Vec2::new(30.0, 10.0), 5.0, 0.6),
    ];
    let summed: Vec2 = springs.iter().map(|s| s.acceleration(&point)).sum();
    let combined = SpringAttachment::equivalent(&springs).unwrap();
    let relative = (combined.acceleration(&point) - summed).length() / summed.length();
    assert!(relative < 1e-4, "relative error {relative}");
}

#[test]
fn equivalent_spring_stays_finite_at_max_frequency() {
    let springs = [
        SpringAttachment::new(PointId(1), AnchorTarget::Corner(EdgeIndex(1)), Vec2::new(140.0, 0.0), 1.0e18, 0.3),
        SpringAttachment::new(PointId(1), AnchorTarget::Corner(EdgeIndex(2)), Vec2::new(140.0, 100.0), 1.0e18, 0.3),
    ];
    let combined = SpringAttachment::equivalent(&springs).unwrap();
    assert!(combined.anchor.is_finite());
    assert!((combined.anchor - Vec2::new(140.0, 50.0)).length() < 1e-3);
    assert!(combined.frequency_hz().is_finite());
}

// ─── MeshState Tests ──────────────────────────────────────────

#[test]
fn mesh_state_at_rest() {
    let set = wobble_mesh::ControlPointSet::from_rect(SQUARE);
    let mesh = MeshState::at_rest(&set);
    assert_eq!(mesh.midpoints(), *set.midpoint_anchors());
    assert_eq!(mesh.curvature_centers(), *set.curvature_anchors());
    assert_eq!(mesh.max_speed(), 0.0);
    assert_eq!(mesh.kinetic_energy(), 0.0);
    assert_eq!(MeshState::ids().count(), 8);
}

// ─── Config Tests ─────────────────────────────────────────────

#[test]
fn config_defaults() {
    let config = WobbleConfig::default();
    assert_eq!(config.frequency_hz, 3.0);
    assert_eq!(config.damping_ratio, 0.3);
    assert_eq!(config.edges, EdgeMask::RIGHT);
    assert_eq!(config.settle_epsilon, SETTLE_EPSILON);
    assert!(config.validate().is_ok());
}

#[test]
fn config_rejects_invalid_values() {
    let bad = [
        WobbleConfig { frequency_hz: 0.0, ..Default::default() },
        WobbleConfig { frequency_hz: f32::NAN, ..Default::default() },
        WobbleConfig { damping_ratio: -0.1, ..Default::default() },
        WobbleConfig { settle_epsilon: 0.0, ..Default::default() },
    ];
    for config in bad {
        assert!(config.validate().is_err(), "{config:?} accepted");
        assert!(WobbleSimulator::new(config).is_err());
    }
}

#[test]
fn config_rejects_out_of_range_frequency() {
    for frequency_hz in [1.0e18, 1.0e-30, MIN_FREQUENCY_HZ * 0.5, MAX_FREQUENCY_HZ * 2.0, f32::INFINITY] {
        let config = WobbleConfig { frequency_hz, ..Default::default() };
        assert!(config.validate().is_err(), "{frequency_hz} Hz accepted");
    }
    for frequency_hz in [MIN_FREQUENCY_HZ, MAX_FREQUENCY_HZ] {
        let config = WobbleConfig { frequency_hz, ..Default::default() };
        assert!(config.validate().is_ok(), "{frequency_hz} Hz rejected");
    }
}

#[test]
fn config_frequency_matches_attachments() {
    let config = WobbleConfig { frequency_hz: MIN_FREQUENCY_HZ, ..Default::default() };
    let sim = WobbleSimulator::with_rect(config, SQUARE).unwrap();
    assert!(sim.attachments().iter().all(|a| a.frequency_hz() == sim.config().frequency_hz));
}

#[test]
fn fastest_config_keeps_mesh_finite() {
    let config = WobbleConfig {
        frequency_hz: MAX_FREQUENCY_HZ,
        ..Default::default()
    }
    .with_edges(EdgeMask::ALL);
    let (mut sim, _clock) = excited(config);
    for _ in 0..120 {
        sim.tick(DEFAULT_DT);
    }
    assert!(sim.mesh().points().iter().all(|p| p.position.is_finite() && p.velocity.is_finite()));
    assert!(sim.build_path().vertices().iter().all(|p| p.is_finite()));
    for segment in &sim.build_path().segments {
        if let PathSegment::Quad { control, .. } = segment {
            assert!(control.is_finite());
        }
    }
}

#[test]
fn config_allows_overdamped_and_undamped() {
    assert!(WobbleConfig { damping_ratio: 2.0, ..Default::default() }.validate().is_ok());
    assert!(WobbleConfig::undamped().validate().is_ok());
}

#[test]
fn config_from_toml() {
    let config = WobbleConfig::from_toml_str(
        r#"
        frequency_hz = 4.5
        edges = "right|bottom"
        "#,
    )
    .unwrap();
    assert_eq!(config.frequency_hz, 4.5);
    assert_eq!(config.damping_ratio, 0.3);
    assert_eq!(config.edges, EdgeMask::RIGHT | EdgeMask::BOTTOM);

    assert!(WobbleConfig::from_toml_str("frequency_hz = -1.0").is_err());
    assert!(WobbleConfig::from_toml_str("frequency_hz = [").is_err());
}

#[test]
fn config_serialization() {
    let config = WobbleConfig::jelly();
    let json = serde_json::to_string(&config).unwrap();
    let recovered: WobbleConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, config);
}

// ─── Clock Tests ──────────────────────────────────────────────

#[test]
fn manual_clock_starts_paused() {
    let mut clock = ManualFrameClock::default();
    assert!(clock.is_paused());
    assert_eq!(clock.next_frame(), None);
}

#[test]
fn manual_clock_pause_resume_idempotent() {
    let mut clock = ManualFrameClock::new(0.01);
    clock.resume();
    clock.resume();
    assert_eq!(clock.resume_count(), 1);
    assert_eq!(clock.next_frame(), Some(0.01));
    clock.pause();
    clock.pause();
    assert_eq!(clock.pause_count(), 1);
    assert_eq!(clock.next_frame(), None);
    assert_eq!(clock.frames_delivered(), 1);
}

// ─── Simulator State Machine Tests ────────────────────────────

#[test]
fn simulator_starts_idle() {
    let sim = WobbleSimulator::new(WobbleConfig::default()).unwrap();
    assert_eq!(sim.state(), SimulatorState::Idle);
    assert!(!sim.has_geometry());
    assert!(sim.attachments().is_empty());
}

#[test]
fn tick_before_geometry_is_noop() {
    let mut sim = WobbleSimulator::new(WobbleConfig::default()).unwrap();
    let report = sim.tick(DEFAULT_DT);
    assert!(!report.stepped);
    assert_eq!(sim.ticks(), 0);
}

#[test]
fn tick_while_idle_is_noop() {
    let mut sim = WobbleSimulator::with_rect(WobbleConfig::default(), SQUARE).unwrap();
    let before = sim.mesh().clone();
    let report = sim.tick(DEFAULT_DT);
    assert!(!report.stepped);
    assert_eq!(sim.mesh(), &before);
}

#[test]
fn geometry_change_activates_and_arms_clock() {
    let mut sim = WobbleSimulator::new(WobbleConfig::default()).unwrap();
    let mut clock = ManualFrameClock::default();
    sim.on_geometry_changed(SQUARE, &mut clock).unwrap();

    assert_eq!(sim.state(), SimulatorState::Active);
    assert!(!clock.is_paused());
    assert_eq!(sim.attachments().len(), 12);
    // First geometry seeds the points at rest; nothing was stepped.
    assert_eq!(sim.ticks(), 0);
    assert_eq!(sim.mesh().midpoints(), *sim.control_points().midpoint_anchors());
}

#[test]
fn rest_report_returns_to_idle() {
    let (mut sim, mut clock) = excited(WobbleConfig::default());
    let mut settled_at = None;
    for frame in 0..2000 {
        let report = sim.tick(DEFAULT_DT);
        if report.settled {
            settled_at = Some(frame);
            break;
        }
    }
    assert!(settled_at.is_some(), "mesh never settled");
    // Settling alone does not change state; the clock decides.
    assert!(sim.is_active());
    clock.pause();
    sim.did_come_to_rest();
    assert_eq!(sim.state(), SimulatorState::Idle);
}

#[test]
fn invalid_geometry_is_rejected() {
    let mut sim = WobbleSimulator::new(WobbleConfig::default()).unwrap();
    let mut clock = ManualFrameClock::default();
    assert!(sim
        .on_geometry_changed(Rect::new(0.0, f32::NAN, 10.0, 10.0), &mut clock)
        .is_err());
    assert_eq!(sim.state(), SimulatorState::Idle);
    assert!(clock.is_paused());
}

#[test]
fn non_positive_dt_is_absorbed() {
    let (mut sim, _clock) = excited(WobbleConfig::default());
    assert!(!sim.tick(0.0).stepped);
    assert!(!sim.tick(f32::NAN).stepped);
    assert!(sim.tick(DEFAULT_DT).stepped);
}

// ─── Dynamics Properties ──────────────────────────────────────

#[test]
fn rest_is_idempotent() {
    let mut sim = WobbleSimulator::with_rect(WobbleConfig::default(), SQUARE).unwrap();
    let mut clock = ManualFrameClock::default();
    sim.on_geometry_changed(SQUARE, &mut clock).unwrap();
    for _ in 0..200 {
        let report = sim.tick(DEFAULT_DT);
        assert!(report.settled);
        assert!(report.motion < SETTLE_EPSILON);
    }
}

#[test]
fn retarget_does_not_teleport() {
    let (mut sim, mut clock) = excited(WobbleConfig::default());
    for _ in 0..7 {
        sim.tick(DEFAULT_DT);
    }

    let before = sim.mesh().clone();
    sim.on_geometry_changed(Rect::new(-20.0, 15.0, 90.0, 160.0), &mut clock)
        .unwrap();
    assert_eq!(sim.mesh(), &before, "geometry change moved points");

    // Energy never grows under damping, so speed during the step is bounded
    // by the motion magnitude against the new anchors.
    let bound = sim.motion() * DEFAULT_DT * 1.001;
    sim.tick(DEFAULT_DT);
    for id in MeshState::ids() {
        let moved = (sim.mesh().point(id).position - before.point(id).position).length();
        assert!(moved <= bound, "{id:?} moved {moved}, bound {bound}");
    }
}

#[test]
fn repeated_geometry_changes_keep_attachments() {
    let (mut sim, mut clock) = excited(WobbleConfig::default());
    sim.tick(DEFAULT_DT);
    let velocity = sim.mesh().point(PointId::midpoint(EdgeIndex(1))).velocity;
    assert!(velocity.length() > 0.0);

    sim.on_geometry_changed(Rect::new(0.0, 0.0, 150.0, 100.0), &mut clock)
        .unwrap();
    sim.on_geometry_changed(Rect::new(0.0, 0.0, 160.0, 100.0), &mut clock)
        .unwrap();

    assert_eq!(sim.attachments().len(), 12);
    assert_eq!(sim.mesh().point(PointId::midpoint(EdgeIndex(1))).velocity, velocity);
    let right_corner = sim
        .attachments()
        .iter()
        .find(|a| a.target == AnchorTarget::Corner(EdgeIndex(1)))
        .unwrap();
    assert_eq!(right_corner.anchor, Vec2::new(160.0, 0.0));
}

#[test]
fn square_settles_to_exact_outline() {
    let mut sim = WobbleSimulator::new(WobbleConfig::default()).unwrap();
    let mut clock = ManualFrameClock::default();
    sim.on_geometry_changed(SQUARE, &mut clock).unwrap();

    for _ in 0..500 {
        sim.tick(1.0 / 60.0);
    }

    let path = sim.build_path();
    assert_eq!(path.segment_count(), 4);
    assert!(path.is_closed());

    let rest = CurvePathBuilder::control_point(
        &wobble_mesh::MeshFrame {
            midpoints: *sim.control_points().midpoint_anchors(),
            ..sim.mesh_frame()
        },
        EdgeIndex(1),
    );
    match path.segments[1] {
        PathSegment::Quad { control, to } => {
            assert!((control - rest).length() < 1e-3, "control {control}, rest {rest}");
            assert_eq!(to, Vec2::new(100.0, 100.0));
        }
        other => panic!("right edge not curved: {other:?}"),
    }

    let expected = [
        (0, Vec2::new(100.0, 0.0)),
        (2, Vec2::new(0.0, 100.0)),
        (3, Vec2::new(0.0, 0.0)),
    ];
    for (index, to) in expected {
        assert_eq!(path.segments[index], PathSegment::Line { to });
    }
    assert_eq!(path.start, Vec2::new(0.0, 0.0));
}

#[test]
fn disturbed_square_converges_back() {
    let (mut sim, _clock) = excited(WobbleConfig::default());
    for _ in 0..1500 {
        sim.tick(DEFAULT_DT);
    }
    let set = sim.control_points();
    for edge in EdgeIndex::ALL {
        let mid = sim.mesh().point(PointId::midpoint(edge)).position;
        let center = sim.mesh().point(PointId::curvature_center(edge)).position;
        assert!((mid - set.midpoint_anchor(edge)).length() < 1e-3);
        assert!((center - set.curvature_anchor(edge)).length() < 1e-3);
    }
}

#[test]
fn undamped_mesh_never_settles() {
    let (mut sim, _clock) = excited(WobbleConfig::undamped());
    for tick in 0..10_000 {
        let report = sim.tick(DEFAULT_DT);
        assert!(report.stepped);
        assert!(
            !report.settled && report.motion >= SETTLE_EPSILON,
            "settled at tick {tick} with motion {}",
            report.motion
        );
    }
}

// ─── Reset Tests ──────────────────────────────────────────────

#[test]
fn reset_rebuilds_attachments_at_rest() {
    let (mut sim, _clock) = excited(WobbleConfig::default());
    for _ in 0..5 {
        sim.tick(DEFAULT_DT);
    }
    sim.reset(WobbleConfig::stiff()).unwrap();

    assert_eq!(sim.attachments().len(), 12);
    assert!(sim.attachments().iter().all(|a| a.frequency_hz() == 6.0));
    assert_eq!(sim.mesh().midpoints(), *sim.control_points().midpoint_anchors());
    assert_eq!(sim.mesh().max_speed(), 0.0);
}

#[test]
fn reset_rejects_invalid_config() {
    let (mut sim, _clock) = excited(WobbleConfig::default());
    sim.tick(DEFAULT_DT);
    let before = sim.mesh().clone();
    let bad = WobbleConfig { damping_ratio: -1.0, ..Default::default() };
    assert!(sim.reset(bad).is_err());
    assert_eq!(sim.mesh(), &before);
    assert_eq!(sim.config(), &WobbleConfig::default());
}

#[test]
fn degenerate_rect_is_simulated() {
    let mut sim = WobbleSimulator::new(WobbleConfig::default().with_edges(EdgeMask::ALL)).unwrap();
    let mut clock = ManualFrameClock::default();
    sim.on_geometry_changed(Rect::new(0.0, 0.0, 50.0, 0.0), &mut clock)
        .unwrap();
    let report = sim.tick(DEFAULT_DT);
    assert!(report.stepped && report.settled);
    let path = sim.build_path();
    assert!(path.is_closed());
    assert!(path.vertices().iter().all(|p| p.is_finite()));
}
