//! Performance benchmarks for a3s-quartz
//!
//! Run with: cargo bench

use a3s_quartz::{split_fields, validate, Evaluation, Validator, ValidatorConfig, Whitespace};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const EXPRESSIONS: [&str; 6] = [
    "0 0 12 * * ?",
    "0 15 10 ? * MON-FRI",
    "0 0/5 14,18 * * ? 2030",
    "0 0 0 ? * MON#1",
    "61 0 12 * * ?",
    "* * * * * *",
];

fn bench_split(c: &mut Criterion) {
    c.bench_function("split_fields", |b| {
        b.iter(|| split_fields(black_box("0 0/5 14,18 * * ? 2030"), Whitespace::SingleSpace));
    });
}

fn bench_validate(c: &mut Criterion) {
    let validator = Validator::default();

    let mut group = c.benchmark_group("validate");
    for expr in EXPRESSIONS {
        group.bench_function(expr, |b| {
            b.iter(|| validator.is_valid(black_box(expr)));
        });
    }
    group.finish();
}

fn bench_verbose_modes(c: &mut Criterion) {
    let fail_fast = ValidatorConfig::default().with_verbose(true);
    let exhaustive = fail_fast.clone().with_evaluation(Evaluation::Exhaustive);
    let expr = "99 99 99 99 99 ? 1900";

    c.bench_function("verbose fail-fast", |b| {
        b.iter(|| validate(black_box(expr), &fail_fast));
    });

    c.bench_function("verbose exhaustive", |b| {
        b.iter(|| validate(black_box(expr), &exhaustive));
    });
}

criterion_group!(benches, bench_split, bench_validate, bench_verbose_modes);
criterion_main!(benches);
