//! Benchmarks for benchmark search and spread reports.
//!
//! Run with: cargo bench -p curvespread-spreads

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use curvespread_core::{BondCategory, BondRecord, BondSet};
use curvespread_math::search::nearest_bracket_by;
use curvespread_spreads::SpreadSession;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn government_curve(n: usize) -> Vec<BondRecord> {
    (0..n)
        .map(|i| {
            let term = 0.25 + i as f64 * 30.0 / n as f64;
            let yield_rate = 1.5 + 3.0 * (1.0 - (-term / 8.0).exp());
            BondRecord::new(format!("G{i}"), BondCategory::Government, term, yield_rate)
        })
        .collect()
}

fn corporate_bonds(n: usize) -> Vec<BondRecord> {
    (0..n)
        .map(|i| {
            let term = 0.1 + (i * 7919 % 3000) as f64 / 100.0;
            BondRecord::new(format!("C{i}"), BondCategory::Corporate, term, 3.0 + (i % 17) as f64 / 10.0)
        })
        .collect()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_bracket");

    for size in [8usize, 64, 1024, 16_384] {
        let set = BondSet::new(government_curve(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &set, |b, set| {
            b.iter(|| nearest_bracket_by(set.as_slice(), black_box(7.3), BondRecord::term));
        });
    }

    group.finish();
}

fn bench_reports(c: &mut Criterion) {
    let mut group = c.benchmark_group("reports");

    for size in [100usize, 10_000] {
        let session = SpreadSession::from_records(
            government_curve(30).into_iter().chain(corporate_bonds(size)),
        )
        .expect("generated bonds are valid");
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("yield_spread", size), &session, |b, s| {
            b.iter(|| s.yield_spreads());
        });
        group.bench_with_input(BenchmarkId::new("spread_to_curve", size), &session, |b, s| {
            b.iter(|| s.spreads_to_curve());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_search, bench_reports);
criterion_main!(benches);
