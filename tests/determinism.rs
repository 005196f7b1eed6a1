use drape::{Cloth, ClothConfig, GridConfig, NoOpStepObserver};

fn run(frames: usize) -> Vec<f32> {
    let grid = GridConfig::new(10, 14).with_extent(2.0, 1.4).with_vertical_offset(0.2);
    let mut cloth = Cloth::new(&grid, ClothConfig::new()).unwrap();
    for frame in 0..frames {
        cloth.step(frame as f32 * 0.016, &mut NoOpStepObserver);
    }
    cloth.positions_flat()
}

#[test]
fn cloth_deterministic() {
    let results: Vec<_> = (0..4).map(|_| run(240)).collect();
    for r in &results[1..] {
        assert_eq!(&results[0], r);
    }
}

#[test]
fn wind_keeps_idle_sheet_moving() {
    let a = run(120);
    let b = run(121);
    assert_ne!(a, b, "wind should keep the sheet in motion");
}
