//! Benchmarks for QOCA circuit operations
//!
//! Run with: cargo bench -p qoca-ir

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qoca_ir::unitary::circuit_unitary;
use qoca_ir::{Circuit, ParameterExpression, QubitId};
use rustc_hash::FxHashMap;

/// A chain of zy/zx pairs with symbolic angles.
fn rotation_chain(n: u32) -> Circuit {
    let mut circuit = Circuit::with_size("bench", n);
    let params = ParameterExpression::vector("t", 2 * n as usize);
    for i in 0..n.saturating_sub(1) {
        let (a, b) = (QubitId(i), QubitId(i + 1));
        circuit.zy(params[2 * i as usize].clone(), a, b).unwrap();
        circuit.zx(params[2 * i as usize + 1].clone(), a, b).unwrap();
        circuit.cx(a, b).unwrap();
    }
    circuit
}

/// Benchmark appending composite gates
fn bench_gate_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_addition");

    group.bench_function("zx_gate", |b| {
        let mut circuit = Circuit::with_size("bench", 10);
        b.iter(|| {
            circuit
                .zx(black_box(0.3), black_box(QubitId(0)), black_box(QubitId(1)))
                .unwrap();
        });
    });

    group.bench_function("zy_gate", |b| {
        let mut circuit = Circuit::with_size("bench", 10);
        b.iter(|| {
            circuit
                .zy(black_box(0.3), black_box(QubitId(0)), black_box(QubitId(1)))
                .unwrap();
        });
    });

    group.finish();
}

/// Benchmark decomposition and binding
fn bench_transformations(c: &mut Criterion) {
    let mut group = c.benchmark_group("transformations");

    for n in &[4u32, 16, 64] {
        let circuit = rotation_chain(*n);
        group.bench_with_input(BenchmarkId::new("decompose_all", n), &circuit, |b, c| {
            b.iter(|| black_box(c).decompose_all().unwrap());
        });

        let values: FxHashMap<String, f64> = circuit
            .parameters()
            .into_iter()
            .enumerate()
            .map(|(k, name)| (name, k as f64 * 0.01))
            .collect();
        group.bench_with_input(BenchmarkId::new("bind_parameters", n), &circuit, |b, c| {
            b.iter(|| black_box(c).bind_parameters(black_box(&values)));
        });
    }

    group.finish();
}

/// Benchmark dense unitary construction
fn bench_unitary(c: &mut Criterion) {
    let mut group = c.benchmark_group("unitary");

    for n in &[2u32, 4, 6] {
        let circuit = rotation_chain(*n);
        let values: FxHashMap<String, f64> = circuit
            .parameters()
            .into_iter()
            .map(|name| (name, 0.25))
            .collect();
        let bound = circuit.bind_parameters(&values);
        group.bench_with_input(BenchmarkId::new("circuit_unitary", n), &bound, |b, c| {
            b.iter(|| circuit_unitary(black_box(c)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_gate_addition,
    bench_transformations,
    bench_unitary
);
criterion_main!(benches);
