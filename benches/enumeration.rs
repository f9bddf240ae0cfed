// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration benchmarks.
//!
//! Run with: cargo bench --bench enumeration

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, SeedableRng};
use std::time::Duration;
use tableau_tuples::enumerate::{RowStandardShapeTableaux, StandardShapeTableaux};
use tableau_tuples::residue::ResidueSequence;
use tableau_tuples::shape::PartitionTuple;

fn shapes() -> Vec<(&'static str, PartitionTuple)> {
    [
        ("2.1|2", vec![vec![2, 1], vec![2]]),
        ("3.2|2.1", vec![vec![3, 2], vec![2, 1]]),
        ("2.1|1|2.1", vec![vec![2, 1], vec![1], vec![2, 1]]),
        ("3.2.1|2.1", vec![vec![3, 2, 1], vec![2, 1]]),
    ]
    .into_iter()
    .map(|(name, rows)| {
        let shape = PartitionTuple::from_rows(rows).expect("benchmark shapes are partitions");
        (name, shape)
    })
    .collect()
}

fn bench_shape_enumerators(c: &mut Criterion) {
    let mut group = c.benchmark_group("shape_enumerators");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(5));

    for (name, shape) in shapes() {
        group.throughput(Throughput::Elements(shape.standard_count() as u64));
        let standard = StandardShapeTableaux::new(shape.clone());
        group.bench_with_input(BenchmarkId::new("standard", name), &standard, |b, family| {
            b.iter(|| family.iter().count())
        });

        if shape.size() <= 7 {
            let rows = RowStandardShapeTableaux::new(shape);
            group.bench_with_input(BenchmarkId::new("row_standard", name), &rows, |b, family| {
                b.iter(|| family.iter().count())
            });
        }
    }
    group.finish();
}

fn bench_random_elements(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_element");
    for (name, shape) in shapes() {
        let family = StandardShapeTableaux::new(shape);
        let mut rng = StdRng::seed_from_u64(42);
        group.bench_function(BenchmarkId::new("standard", name), |b| {
            b.iter(|| black_box(family.random_element(&mut rng)))
        });
    }
    group.finish();
}

fn bench_residue_enumerators(c: &mut Criterion) {
    let mut group = c.benchmark_group("residue_enumerators");
    group.sample_size(20);

    let cases = [
        ("e3_level2", 3, vec![0, 1], vec![0, 1, 2, 0, 2, 1, 0]),
        ("e2_level2", 2, vec![0, 0], vec![0, 1, 0, 1, 0, 1]),
        ("e0_level3", 0, vec![0, 1, 2], vec![0, 1, 2, 1, -1, 3]),
    ];
    for (name, e, multicharge, residues) in cases {
        let res = ResidueSequence::new(e, multicharge, residues)
            .expect("benchmark multicharges are nonempty");
        let standard = res
            .standard_tableaux(None)
            .expect("no shape to disagree with");
        group.bench_with_input(BenchmarkId::new("standard", name), &standard, |b, family| {
            b.iter(|| family.iter().count())
        });
        let rows = res
            .row_standard_tableaux(None)
            .expect("no shape to disagree with");
        group.bench_with_input(BenchmarkId::new("row_standard", name), &rows, |b, family| {
            b.iter(|| family.iter().count())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_shape_enumerators,
    bench_random_elements,
    bench_residue_enumerators
);
criterion_main!(benches);
