//! Criterion micro-benchmarks for ensemble reduction.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use dyngill_bench::{reference_config, reference_network};
use dyngill_obs::{final_size_histogram, EnsembleSummary};
use dyngill_sis::sis_poisson_homogeneous;

fn bench_summary(c: &mut Criterion) {
    let result = sis_poisson_homogeneous(&reference_network(42), &reference_config(42)).unwrap();

    c.bench_function("summary_100x100", |b| {
        b.iter(|| black_box(EnsembleSummary::from_runs(result.i()).unwrap()));
    });
    c.bench_function("final_size_histogram_100", |b| {
        b.iter(|| black_box(final_size_histogram(result.hist(), 10).unwrap()));
    });
}

criterion_group!(benches, bench_summary);
criterion_main!(benches);
