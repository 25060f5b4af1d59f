//! Criterion micro-benchmarks for the wave field engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tremor_bench::{reference_profile, stress_profile};
use tremor_core::constants::QUAKE_EPICENTER;
use tremor_physics::smoothing::gaussian_smooth;
use tremor_physics::WaveFieldEngine;

/// Benchmark: one full field step on the 100x100 reference terrain.
fn bench_step_reference(c: &mut Criterion) {
    let config = reference_profile(42);
    let event = config.events[0].clone();
    let mut engine = WaveFieldEngine::new(config.grid);

    c.bench_function("wave_step_100x100", |b| {
        b.iter(|| {
            engine.step(QUAKE_EPICENTER, &event, black_box(2.5));
            black_box(engine.max_amplitude());
        });
    });
}

/// Benchmark: one full field step on the 316x316 stress terrain.
fn bench_step_stress(c: &mut Criterion) {
    let config = stress_profile(42);
    let event = config.events[0].clone();
    let mut engine = WaveFieldEngine::new(config.grid);

    c.bench_function("wave_step_316x316", |b| {
        b.iter(|| {
            engine.step((158, 158), &event, black_box(2.5));
            black_box(engine.max_amplitude());
        });
    });
}

/// Benchmark: the smoothing pass alone on a 100x100 field.
fn bench_smoothing(c: &mut Criterion) {
    let size = 100;
    let mut field: Vec<f64> = (0..size * size).map(|i| (i % 17) as f64).collect();

    c.bench_function("gaussian_smooth_100x100", |b| {
        b.iter(|| {
            gaussian_smooth(black_box(&mut field), size, 0.5);
        });
    });
}

criterion_group!(benches, bench_step_reference, bench_step_stress, bench_smoothing);
criterion_main!(benches);
