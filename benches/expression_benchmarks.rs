//! Benchmarks for the formula pipeline
//!
//! Covers the full data flow: parsing, truth-table enumeration,
//! Zhegalkin derivation (including its re-parse round-trip) and the
//! completeness check over a small system.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use boolcalc::{is_full_system, BooleanExpression};

/// Formulas of increasing variable count; table work doubles per step.
const FORMULAS: &[(&str, &str)] = &[
    ("2-vars", "x1 | x2"),
    ("4-vars", "~x1 & x2 v ~x3 & x4"),
    ("6-vars", "x1 & ~x2 v x3 = x4 | x5 ^ x6"),
    (
        "9-vars",
        "x1 + x2 + x3 + x4 + x5 + x6 + x7 + x8 + x9 v x1 & x2 & x3 & x4 & x5 & x6 & x7 & x8 & x9",
    ),
];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for (name, text) in FORMULAS {
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| BooleanExpression::parse(black_box(text)).unwrap());
        });
    }
    group.finish();
}

fn bench_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("table");
    for (name, text) in FORMULAS {
        let formula = BooleanExpression::parse(text).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &formula, |b, formula| {
            b.iter(|| black_box(formula).table());
        });
    }
    group.finish();
}

fn bench_zhegalkin(c: &mut Criterion) {
    let mut group = c.benchmark_group("zhegalkin");
    for (name, text) in FORMULAS {
        let formula = BooleanExpression::parse(text).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &formula, |b, formula| {
            b.iter(|| black_box(formula).zhegalkin());
        });
    }
    group.finish();
}

fn bench_is_full_system(c: &mut Criterion) {
    let system: Vec<BooleanExpression> = ["~x1", "x1 & x2", "x1 v x2", "x1 > x2 = ~x3"]
        .iter()
        .map(|text| BooleanExpression::parse(text).unwrap())
        .collect();

    c.bench_function("is_full_system/4-formulas", |b| {
        b.iter(|| is_full_system(black_box(&system)));
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_table,
    bench_zhegalkin,
    bench_is_full_system
);
criterion_main!(benches);
