use tearcloth::{ClothConfig, ClothMesh, ManualClock, Vec2};

fn build(width: f32, height: f32, spacing: f32) -> ClothMesh<f32> {
    let config = ClothConfig::new()
        .with_cloth_size(width, height)
        .with_spacing(spacing);
    ClothMesh::setup(config, &ManualClock::new(0)).unwrap()
}

#[test]
fn link_count_matches_grid_topology() {
    for &(w, h) in &[(1usize, 1usize), (1, 5), (5, 1), (2, 2), (4, 3), (32, 24)] {
        let cloth = build(w as f32 * 25.0, h as f32 * 25.0, 25.0);
        assert_eq!(cloth.cols(), w);
        assert_eq!(cloth.rows(), h);
        assert_eq!(cloth.particle_count(), w * h);
        assert_eq!(
            cloth.link_count(),
            (w - 1) * h + w * (h - 1),
            "wrong link count for a {}x{} grid",
            w,
            h,
        );
    }
}

#[test]
fn two_by_two_scenario() {
    let cloth = build(50.0, 50.0, 25.0);

    let positions = cloth.positions();
    assert_eq!(
        positions,
        [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 25.0),
            Vec2::new(25.0, 0.0),
            Vec2::new(25.0, 25.0),
        ]
    );

    // Only column 0 of the top row is pinned.
    let pinned: Vec<bool> = cloth.particles().iter().map(|p| p.pinned).collect();
    assert_eq!(pinned, [true, false, false, false]);

    // New particle first, neighbour second; horizontal before vertical.
    let ends: Vec<(usize, usize)> = cloth.links().iter().map(|l| (l.p1, l.p2)).collect();
    assert_eq!(ends, [(1, 0), (2, 0), (3, 1), (3, 2)]);

    for link in cloth.links() {
        assert!((link.rest_length - 25.0).abs() < 1e-6);
        assert_eq!(link.max_length, 50.0);
    }
}

#[test]
fn partial_cells_are_dropped() {
    let cloth = build(110.0, 60.0, 25.0);
    assert_eq!((cloth.cols(), cloth.rows()), (4, 2));
    assert_eq!(cloth.position_at(3, 1), Vec2::new(75.0, 25.0));
}

#[test]
fn pin_pattern_every_other_top_column() {
    let cloth = build(800.0, 600.0, 25.0);
    for col in 0..cloth.cols() {
        for row in 0..cloth.rows() {
            let p = cloth.particle(cloth.index(col, row));
            assert_eq!(p.pinned, row == 0 && col % 2 == 0, "col {} row {}", col, row);
            if p.pinned {
                assert!(p.mass.is_infinite());
            } else {
                assert_eq!(p.mass, 10000.0);
            }
        }
    }
}

#[test]
fn custom_pin_stride() {
    let config = ClothConfig::new()
        .with_cloth_size(200.0, 50.0)
        .with_spacing(25.0)
        .with_pin_every(3);
    let cloth: ClothMesh<f32> = ClothMesh::setup(config, &ManualClock::new(0)).unwrap();
    let pinned_cols: Vec<usize> = (0..cloth.cols())
        .filter(|&c| cloth.particle(cloth.index(c, 0)).pinned)
        .collect();
    assert_eq!(pinned_cols, [0, 3, 6]);
}
