//! Benchmarks for QOCA circuit construction
//!
//! Run with: cargo bench -p qoca-ansatz

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qoca_ansatz::hamiltonian::QubitOperator;
use qoca_ansatz::{HamiltonianMode, QocaAnsatz, VariationalForm};

/// Nearest-neighbour ZZ plus transverse X terms.
fn ising(n: u32) -> QubitOperator {
    let mut terms: Vec<String> = (0..n - 1).map(|i| format!("-1.0 * Z{i} Z{}", i + 1)).collect();
    terms.extend((0..n).map(|i| format!("-0.5 * X{i}")));
    QubitOperator::from_strs(n, terms.iter().map(String::as_str)).unwrap()
}

/// Benchmark drive-only construction
fn bench_drive_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("drive_only");

    for n in &[4u32, 16, 64] {
        let ansatz = QocaAnsatz::new(*n, 4).unwrap();
        group.bench_with_input(BenchmarkId::new("zeros", n), &ansatz, |b, a| {
            b.iter(|| black_box(a).construct_circuit(None).unwrap());
        });

        let symbols = ansatz.parameter_symbols("theta");
        group.bench_with_input(BenchmarkId::new("symbolic", n), &ansatz, |b, a| {
            b.iter(|| a.construct_circuit(Some(black_box(&symbols))).unwrap());
        });
    }

    group.finish();
}

/// Benchmark construction with a Hamiltonian layer
fn bench_with_hamiltonian(c: &mut Criterion) {
    let mut group = c.benchmark_group("with_hamiltonian");

    for n in &[4u32, 16, 64] {
        let ansatz = QocaAnsatz::new(*n, 4)
            .unwrap()
            .with_hamiltonian(ising(*n), HamiltonianMode::Parameterized)
            .unwrap();
        group.bench_with_input(BenchmarkId::new("ising", n), &ansatz, |b, a| {
            b.iter(|| black_box(a).construct_circuit(None).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_drive_only, bench_with_hamiltonian);
criterion_main!(benches);
