//! # Qubit Engine Benchmarks
//!
//! Measures construction, gate application, measurement and Bloch derivation.
//! Every operation is O(1) over a fixed pair of amplitudes.
//!
//! Run: `cargo bench --bench engine_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qubit_core::{format_amplitude, Amplitude, Basis, Gate, QubitEngine, QubitState};

/// Benchmark state construction + normalization
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("from_parts", |b| {
        b.iter(|| black_box(QubitState::from_parts(black_box(0.6), 0.1, black_box(0.3), 0.7)))
    });

    group.bench_function("try_from_parts", |b| {
        b.iter(|| black_box(QubitState::try_from_parts(black_box(0.6), 0.1, 0.3, 0.7)))
    });

    group.finish();
}

/// Benchmark each gate
fn bench_gates(c: &mut Criterion) {
    let mut group = c.benchmark_group("gates");
    let state = QubitState::from_parts(0.6, 0.1, 0.3, 0.7);

    for gate in Gate::ALL {
        group.bench_with_input(BenchmarkId::new("apply", gate.symbol()), &gate, |b, &gate| {
            b.iter(|| black_box(black_box(state).apply(gate)))
        });
    }

    let engine = QubitEngine::new();
    group.bench_function("engine_apply_gate_id", |b| {
        b.iter(|| black_box(engine.apply_gate(&state, black_box("H"))))
    });

    group.finish();
}

/// Benchmark measurement and Bloch derivation
fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");
    let state = QubitState::from_parts(0.6, 0.1, 0.3, 0.7);

    for basis in Basis::ALL {
        group.bench_with_input(BenchmarkId::new("measure", basis), &basis, |b, &basis| {
            b.iter(|| black_box(black_box(state).measure(basis)))
        });
    }

    group.bench_function("bloch", |b| b.iter(|| black_box(black_box(state).bloch())));

    group.bench_function("format_amplitude", |b| {
        b.iter(|| black_box(format_amplitude(black_box(Amplitude::new(0.5, -0.25)))))
    });

    group.finish();
}

criterion_group!(benches, bench_construction, bench_gates, bench_queries);
criterion_main!(benches);
