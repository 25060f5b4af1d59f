//! Criterion benchmark for a complete simulation tick: wave step plus
//! both structure evaluations plus snapshot construction.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tremor_bench::reference_profile;
use tremor_engine::{SimulationState, TickStats};

fn bench_full_tick(c: &mut Criterion) {
    let config = reference_profile(42);
    let mut state = SimulationState::new(&config);
    state.start(0).expect("start");

    c.bench_function("sim_tick_100x100", |b| {
        b.iter(|| {
            // Restart before the auto-stop ceiling is reached.
            if !state.is_active() {
                state.start(0).expect("restart");
            }
            state.tick();
        });
    });
}

fn bench_snapshot_build(c: &mut Criterion) {
    let config = reference_profile(42);
    let mut state = SimulationState::new(&config);
    state.start(0).expect("start");
    for _ in 0..10 {
        state.tick();
    }

    c.bench_function("snapshot_build_100x100", |b| {
        b.iter(|| {
            black_box(state.snapshot(TickStats::default()));
        });
    });
}

criterion_group!(benches, bench_full_tick, bench_snapshot_build);
criterion_main!(benches);
