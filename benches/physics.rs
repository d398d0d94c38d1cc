//! Benchmarks for the tear simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use tearaway::*;

fn bench_mesh_build(c: &mut Criterion) {
    c.bench_function("build_20x20_mesh_body", |b| {
        let world = World::new(WorldConfig::new());
        let props: SoftBodyProperties<f32> = SoftBodyProperties::default();
        b.iter(|| SoftBody::build(&world, Vec2::new(100.0, 100.0), &props));
    });
}

fn bench_pool_step(c: &mut Criterion) {
    c.bench_function("pool_4_bodies_60_steps", |b| {
        b.iter(|| {
            let world = World::new(
                WorldConfig::new()
                    .with_gravity(Vec2::new(0.0, 300.0))
                    .with_iterations(4),
            );
            let props: SoftBodyProperties<f32> = SoftBodyProperties::default();
            let mut pool = SoftBodyPool::new();
            for i in 0..4 {
                let origin = Vec2::new(100.0 + 150.0 * i as f32, 100.0);
                pool.add(SoftBody::build(&world, origin, &props));
            }
            let playfield = Rect::from_size(800.0, 1000.0);
            for _ in 0..60 {
                pool.step(&world, &playfield, 1.0 / 60.0, &mut NoOpStepObserver);
            }
            pool.len()
        });
    });
}

fn bench_session_frames(c: &mut Criterion) {
    c.bench_function("session_300_frames", |b| {
        b.iter(|| {
            let props: SoftBodyProperties<f32> = SoftBodyProperties::default();
            let config = SessionConfig::new()
                .with_spawn_interval_ms(500)
                .with_world(WorldConfig::new().with_gravity(Vec2::new(0.0, 300.0)));
            let mut session = Session::new(config, props.clone(), FilterBank::image_variants(8), 42);
            for frame in 0..300u64 {
                session.update(frame * 16, 1.0 / 60.0, props.clone(), &mut NoOpStepObserver);
            }
            session.torn().len()
        });
    });
}

criterion_group!(benches, bench_mesh_build, bench_pool_step, bench_session_frames);
criterion_main!(benches);
