//! Benchmarks for context rounding and specification operations

extern crate bigdecimal_context;
extern crate criterion;
extern crate oorandom;

use std::time::Duration;

use bigdecimal_context::{spec_ops, Context, Decimal};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

criterion_main!(spec_ops_benches);

criterion_group!(
    name = spec_ops_benches;
    config = Criterion::default()
                       .measurement_time(Duration::from_secs(5))
                       .sample_size(300);
    targets =
        bench_round,
        bench_compare_total,
        bench_classify,
        bench_logical,
);

/// Seeded spread of decimals: long and short coefficients, small and
/// huge exponents, both signs
fn make_decimals(count: usize, seed: u64) -> Vec<Decimal> {
    let mut rng = oorandom::Rand64::new(seed as u128);
    (0..count)
        .map(|_| {
            let digits = rng.rand_i64() as i128 * rng.rand_range(1..1_000_000) as i128;
            let exponent = rng.rand_range(0..800) as i64 - 400;
            Decimal::new(digits.into(), exponent)
        })
        .collect()
}

fn make_logical_operands(count: usize, seed: u64) -> Vec<Decimal> {
    let mut rng = oorandom::Rand32::new(seed);
    (0..count)
        .map(|_| {
            let len = rng.rand_range(1..35);
            let digits: String = (0..len).map(|_| if rng.rand_u32() & 1 == 1 { '1' } else { '0' }).collect();
            digits.parse().unwrap()
        })
        .collect()
}

fn bench_round(c: &mut Criterion) {
    let decs = make_decimals(500, 7);
    let ctx = Context::decimal64();

    c.bench_function("round_decimal64", |b| {
        b.iter(|| {
            let mut ctx = ctx.clone();
            for d in decs.iter() {
                black_box(d.round(&mut ctx).unwrap());
            }
        })
    });
}

fn bench_compare_total(c: &mut Criterion) {
    let decs = make_decimals(500, 7);

    c.bench_function("compare_total_pairwise", |b| {
        b.iter(|| {
            for pair in decs.windows(2) {
                black_box(spec_ops::compare_total(&pair[0], &pair[1], None).unwrap());
            }
        })
    });
}

fn bench_classify(c: &mut Criterion) {
    let decs = make_decimals(500, 7);
    let ctx = Context::decimal32();

    c.bench_function("number_class_decimal32", |b| {
        b.iter(|| {
            for d in decs.iter() {
                black_box(spec_ops::number_class(d, Some(&ctx)));
            }
        })
    });
}

fn bench_logical(c: &mut Criterion) {
    let operands = make_logical_operands(200, 11);
    let ctx = Context::decimal128();

    c.bench_function("logical_xor", |b| {
        b.iter(|| {
            for pair in operands.windows(2) {
                black_box(spec_ops::logical_xor(&pair[0], &pair[1], None).unwrap());
            }
        })
    });

    c.bench_function("logical_invert_decimal128", |b| {
        b.iter(|| {
            let mut ctx = ctx.clone();
            for d in operands.iter() {
                black_box(spec_ops::logical_invert(d, Some(&mut ctx)).unwrap());
            }
        })
    });
}
