use drape::{Cloth, ClothConfig, GridConfig, NoOpStepObserver, Particle, StepStats, Vec3, WindConfig};

fn quiet_config() -> ClothConfig<f32> {
    ClothConfig::new()
        .with_gravity(Vec3::zero())
        .with_wind(WindConfig::disabled())
}

#[test]
fn free_fall_gravity() {
    let mut p: Particle<f32> = Particle::new(Vec3::new(0.0, 100.0, 0.0), 1.0);
    let g = Vec3::new(0.0, -9.8, 0.0);
    let dt = 0.016;
    let steps = 60;

    for _ in 0..steps {
        p.apply_acceleration(g);
        p.integrate(dt, 1.0);
    }

    let t = dt * steps as f32;
    let expected_y = 100.0 - 0.5 * 9.8 * t * t;
    assert!((p.pos.y - expected_y).abs() < 0.1, "pos.y = {}, expected ~ {}", p.pos.y, expected_y);
}

#[test]
fn pinned_row_never_moves() {
    let grid = GridConfig::new(6, 8).with_extent(2.0f32, 1.5).with_vertical_offset(0.3);
    let mut cloth = Cloth::new(&grid, ClothConfig::new()).unwrap();
    let top: Vec<_> = (0..=8).map(|col| cloth.position_at(0, col)).collect();

    for frame in 0..200 {
        cloth.step(frame as f32 * 0.016, &mut NoOpStepObserver);
        for col in 0..=8 {
            assert_eq!(cloth.position_at(0, col), top[col], "frame {} col {}", frame, col);
        }
    }
}

#[test]
fn rest_lengths_hold_without_external_force() {
    let grid = GridConfig::new(5, 5).with_extent(1.0f32, 1.0);
    let mut cloth = Cloth::new(&grid, quiet_config()).unwrap();

    for frame in 0..300 {
        cloth.step(frame as f32 * 0.016, &mut NoOpStepObserver);
    }

    for c in cloth.constraints() {
        let len = c.current_length(cloth.particles());
        assert!(
            (len - c.rest_length).abs() < 1e-4,
            "constraint {}-{} drifted: {} vs rest {}",
            c.a, c.b, len, c.rest_length,
        );
    }
}

#[test]
fn coincident_particles_stay_finite() {
    let mut cloth = Cloth::new(&GridConfig::new(2, 2), quiet_config()).unwrap();
    let shared = cloth.position_at(1, 1);

    // Hold a neighbour exactly on top of (1, 1).
    cloth.grab_index(cloth.index(1, 2)).unwrap();
    cloth.move_pointer(shared);

    let mut stats = StepStats::default();
    for frame in 0..10 {
        cloth.step(frame as f32 * 0.016, &mut stats);
    }
    assert!(stats.degenerate_skips > 0, "expected at least one zero-length link");

    cloth.release();
    for frame in 10..40 {
        cloth.step(frame as f32 * 0.016, &mut stats);
    }

    for p in cloth.positions() {
        assert!(p.is_finite(), "non-finite position {:?}", p);
    }
}

#[test]
fn exactly_configured_pass_count_per_frame() {
    let config = quiet_config().with_iterations(3);
    let mut cloth = Cloth::new(&GridConfig::new(2, 2), config).unwrap();
    let mut stats = StepStats::default();
    for frame in 0..5 {
        cloth.step(frame as f32 * 0.016, &mut stats);
    }
    assert_eq!(stats.passes, 15);
}
