//! # Level Filter Benchmarks
//!
//! Performance benchmarks for holler-core filtering.
//!
//! Run with: `cargo bench -p holler-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use holler_core::{LevelFilter, LevelSeed, Severity, SeverityId};
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_allows(c: &mut Criterion) {
    let filter = LevelFilter::new()
        .greater_or_equal(Severity::Info)
        .less_or_equal(Severity::Error);

    let mut group = c.benchmark_group("allows");

    group.bench_function("severity", |b| {
        b.iter(|| {
            for severity in Severity::ALL {
                black_box(filter.allows(black_box(severity)));
            }
        });
    });

    group.bench_function("rank", |b| {
        b.iter(|| {
            for rank in 0..6 {
                black_box(filter.allows_rank(black_box(rank)));
            }
        });
    });

    group.bench_function("name", |b| {
        b.iter(|| {
            for name in ["debug", "INFO", "Warn", "error", "fatal", "unknown"] {
                black_box(filter.allows(black_box(name)));
            }
        });
    });

    group.bench_function("unresolvable", |b| {
        b.iter(|| black_box(filter.allows(black_box(SeverityId::Rank(-1)))));
    });

    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    let seeds = [
        ("all", LevelSeed::All),
        ("single", LevelSeed::from(Severity::Warn)),
        ("list", LevelSeed::from(vec![Severity::Debug, Severity::Fatal])),
        ("range", LevelSeed::from(Severity::Info..=Severity::Error)),
    ];

    for (name, seed) in seeds.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(name), seed, |b, seed| {
            b.iter(|| black_box(LevelFilter::from_seed(seed)));
        });
    }

    group.bench_function("parse_and_build", |b| {
        b.iter(|| {
            let seed: Result<LevelSeed, _> = black_box("info..error").parse();
            black_box(seed.map(LevelFilter::from_seed))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_allows, bench_construction);
criterion_main!(benches);
