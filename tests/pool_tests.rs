use tearaway::{
    Bounds, NoOpStepObserver, Rect, SoftBody, SoftBodyPool, SoftBodyProperties, Vec2, World,
    WorldConfig,
};

fn props() -> SoftBodyProperties<f32> {
    SoftBodyProperties {
        mesh_rows: 5,
        mesh_columns: 5,
        ..SoftBodyProperties::default()
    }
}

#[test]
fn stepping_never_leaves_outside_bodies_behind() {
    let world = World::new(WorldConfig::new());
    let mut pool = SoftBodyPool::new();
    let playfield = Rect::from_size(800.0f32, 1000.0);

    for x in 0..6 {
        let origin = Vec2::new(x as f32 * 300.0 - 200.0, 500.0);
        pool.add(SoftBody::build(&world, origin, &props()));
    }

    pool.step(&world, &playfield, 1.0 / 60.0, &mut NoOpStepObserver);

    for body in pool.iter() {
        assert!(!body.is_outside());
        assert!(playfield.contains(body.centroid()));
    }
}

#[test]
fn falling_bodies_get_pruned_once_off_screen() {
    let world = World::new(
        WorldConfig::new()
            .with_gravity(Vec2::new(0.0, 600.0))
            .with_iterations(4),
    );
    let mut pool = SoftBodyPool::new();
    let playfield = Rect::from_size(800.0f32, 1000.0);

    pool.add(SoftBody::build(&world, Vec2::new(400.0, 900.0), &props()));
    assert_eq!(pool.len(), 1);

    // ~10 seconds of simulated fall is plenty to clear a 1000 px drop.
    for _ in 0..600 {
        pool.step(&world, &playfield, 1.0 / 60.0, &mut NoOpStepObserver);
        if pool.is_empty() {
            break;
        }
    }
    assert!(pool.is_empty(), "body should have fallen off-screen and been pruned");
}

#[test]
fn floored_world_keeps_bodies_alive() {
    let world = World::new(
        WorldConfig::new()
            .with_gravity(Vec2::new(0.0, 600.0))
            .with_iterations(8)
            .with_bounds(Bounds::Floor(1000.0)),
    );
    let mut pool = SoftBodyPool::new();
    let playfield = Rect::from_size(800.0f32, 1000.0);

    pool.add(SoftBody::build(&world, Vec2::new(400.0, 800.0), &props()));

    for _ in 0..600 {
        pool.step(&world, &playfield, 1.0 / 60.0, &mut NoOpStepObserver);
    }

    // The flap settles on the floor instead of falling out.
    assert_eq!(pool.len(), 1);
    let body = pool.get(0).unwrap();
    assert!(body.centroid().y < 1000.0);
}
