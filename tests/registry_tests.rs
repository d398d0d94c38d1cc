use tearaway::{SubsectionRegistry, Vec2};

#[test]
fn every_grid_origin_respects_the_radius_margin() {
    let cases: &[(f32, f32, f32, f32, f32)] = &[
        (800.0, 1000.0, 50.0, 50.0, 5.0),
        (800.0, 1000.0, 10.0, 10.0, 1.0),
        (640.0, 480.0, 120.0, 75.0, 30.0),
        (1920.0, 1080.0, 500.0, 500.0, 15.0),
    ];

    for &(w, h, tw, th, r) in cases {
        let mut registry: SubsectionRegistry<f32> = SubsectionRegistry::new();
        registry.rebuild_grid(Vec2::new(w, h), tw, th, r);

        assert!(!registry.is_empty(), "grid {}x{} tile {}x{} should not be empty", w, h, tw, th);
        for s in registry.subsections() {
            assert!(
                s.origin.x >= r && s.origin.x < w - r,
                "origin.x {} out of [{}, {}) for grid {}x{}",
                s.origin.x, r, w - r, w, h,
            );
            assert!(
                s.origin.y >= r && s.origin.y < h - r,
                "origin.y {} out of [{}, {}) for grid {}x{}",
                s.origin.y, r, h - r, w, h,
            );
        }

        // Origins are unique.
        let subsections = registry.subsections();
        for (i, a) in subsections.iter().enumerate() {
            for b in &subsections[i + 1..] {
                assert!(a.origin != b.origin);
            }
        }
    }
}

#[test]
fn rebuilding_twice_yields_the_same_grid() {
    let mut registry: SubsectionRegistry<f32> = SubsectionRegistry::new();
    registry.rebuild_grid(Vec2::new(800.0, 1000.0), 50.0, 50.0, 5.0);
    let first = registry.subsections().to_vec();

    registry.rebuild_grid(Vec2::new(800.0, 1000.0), 50.0, 50.0, 5.0);
    assert_eq!(registry.subsections(), first.as_slice());
}

#[test]
fn tearing_one_origin_repeatedly_keeps_one_entry() {
    let mut registry: SubsectionRegistry<f32> = SubsectionRegistry::new();
    registry.rebuild_grid(Vec2::new(800.0, 1000.0), 50.0, 50.0, 5.0);

    let origin = Vec2::new(55.0, 105.0);
    let num_filters = 8;
    let initial = 0;

    for tear_count in 1..=20 {
        let filter = (initial + tear_count) % num_filters;
        registry.record_tear(origin, filter);

        let matching = registry.torn().iter().filter(|t| t.origin == origin).count();
        assert_eq!(matching, 1, "exactly one torn entry per origin");
        assert_eq!(registry.torn()[0].filter_index, filter);
    }
}
