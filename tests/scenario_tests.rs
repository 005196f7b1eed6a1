use drape::{Cloth, ClothConfig, GridConfig, NoOpStepObserver, Vec3, WindConfig};

#[test]
fn small_sheet_sags_and_settles_under_gravity() {
    let config = ClothConfig::new().with_wind(WindConfig::disabled());
    let mut cloth: Cloth<f32> = Cloth::new(&GridConfig::new(2, 2), config).unwrap();
    assert_eq!(cloth.particle_count(), 9);

    let initial: Vec<Vec3<f32>> = cloth.positions().to_vec();
    let mut previous = initial.clone();
    let mut deltas = Vec::new();

    for frame in 0..100 {
        cloth.step(frame as f32 * 0.016, &mut NoOpStepObserver);
        let delta = cloth
            .positions()
            .iter()
            .zip(previous.iter())
            .map(|(a, b)| a.distance(*b))
            .fold(0.0, f32::max);
        deltas.push(delta);
        previous = cloth.positions().to_vec();
    }

    let last_delta = deltas[deltas.len() - 1];
    assert!(last_delta < 1e-4, "still moving: {}", last_delta);

    let sag = |row: usize| -> f32 {
        (0..=2)
            .map(|col| initial[cloth.index(row, col)].y - cloth.position_at(row, col).y)
            .sum::<f32>()
            / 3.0
    };
    assert_eq!(sag(0), 0.0);
    assert!(sag(1) > 0.0, "middle row should drop, sag {}", sag(1));
    assert!(sag(2) > sag(1), "bottom row {} should drop more than middle {}", sag(2), sag(1));

    assert!(cloth.max_strain() < 0.05, "strain {}", cloth.max_strain());
}
