//! # Classification Benchmarks
//!
//! Performance benchmarks for the classify and render stages.
//!
//! Run with: `cargo bench -p tlsgroups-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tlsgroups_core::{Classifier, EmitOptions, Emitter, GroupsError, Pipeline, RawRecord};

const NAMES: [&str; 8] = [
    "secp256r1",
    "sect571k1",
    "brainpoolP384r1",
    "x25519",
    "ffdhe4096",
    "Unassigned",
    "arbitrary_explicit_prime_curves",
    "GC512A",
];

/// A registry-shaped record set of N rows cycling through every rule.
fn synthetic_registry(size: usize) -> Vec<RawRecord> {
    (0..size)
        .map(|i| {
            let reference = if i % 5 == 0 {
                "[draft-ietf-tls-hybrid-design-10]"
            } else {
                "[RFC8422][RFC9874]"
            };
            RawRecord::new(i.to_string(), NAMES[i % NAMES.len()], reference)
        })
        .collect()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for size in [100, 1000, 10000].iter() {
        let records = synthetic_registry(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| {
                for record in records {
                    let _ = black_box(Classifier::classify(record));
                }
            });
        });
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let options = EmitOptions::new("tlsgroups", "January 01, 2024");

    for size in [100, 1000, 10000].iter() {
        let records = synthetic_registry(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| {
                let rows = records
                    .iter()
                    .cloned()
                    .map(Ok::<RawRecord, GroupsError>);
                let generated = Pipeline::collect(rows).expect("collect");
                black_box(Emitter::render(&options, &generated.descriptors))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_generate);

criterion_main!(benches);
