//! Benchmarks for tearcloth simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use tearcloth::*;

fn bench_cloth_setup(c: &mut Criterion) {
    c.bench_function("cloth_32x24_setup", |b| {
        b.iter(|| {
            let cloth: ClothMesh<f32> =
                ClothMesh::setup(ClothConfig::default(), &ManualClock::new(0)).unwrap();
            cloth.link_count()
        });
    });
}

fn bench_cloth_simulation(c: &mut Criterion) {
    c.bench_function("cloth_32x24_60_steps", |b| {
        b.iter(|| {
            let mut cloth: ClothMesh<f32> =
                ClothMesh::setup(ClothConfig::default(), &ManualClock::new(0)).unwrap();
            let away = Vec2::new(-10.0, -10.0);
            for _ in 0..60 {
                cloth.step(1.0 / 60.0, away, away, &mut NoOpStepObserver);
            }
            cloth.positions()
        });
    });
}

fn bench_cloth_tearing(c: &mut Criterion) {
    c.bench_function("cloth_32x24_60_steps_dragging", |b| {
        b.iter(|| {
            let mut cloth: ClothMesh<f32> =
                ClothMesh::setup(ClothConfig::default(), &ManualClock::new(0)).unwrap();
            let mut prev = Vec2::new(50.0, 300.0);
            for frame in 0..60 {
                let now = Vec2::new(50.0 + frame as f32 * 12.0, 300.0);
                cloth.step(1.0 / 60.0, now, prev, &mut NoOpStepObserver);
                prev = now;
            }
            cloth.link_count()
        });
    });
}

fn bench_render(c: &mut Criterion) {
    let cloth: ClothMesh<f32> =
        ClothMesh::setup(ClothConfig::default(), &ManualClock::new(0)).unwrap();
    let mut frame = CommandBuffer::new();
    c.bench_function("cloth_32x24_render", |b| {
        b.iter(|| {
            frame.clear();
            cloth.render(&mut frame);
            frame.len()
        });
    });
}

criterion_group!(benches, bench_cloth_setup, bench_cloth_simulation, bench_cloth_tearing, bench_render);
criterion_main!(benches);
