//! Benchmarks for `BigInt` arithmetic and rendering.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bitnum_integers::BigInt;

/// Builds a value with roughly `bits` significant bits.
fn wide_value(bits: usize) -> BigInt {
    (BigInt::from(0x5DEE_CE66_Du64) << bits.saturating_sub(36)) + BigInt::from(12_345)
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("bigint_add");

    for bits in [64, 256, 1024, 4096] {
        let a = wide_value(bits);
        let b = -wide_value(bits / 2);

        group.bench_with_input(BenchmarkId::new("mixed_sign", bits), &bits, |bench, _| {
            bench.iter(|| black_box(&a + &b));
        });
    }

    group.finish();
}

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("bigint_mul");

    for bits in [64, 256, 1024] {
        let a = wide_value(bits);
        let b = wide_value(bits);

        group.bench_with_input(BenchmarkId::new("shift_and_add", bits), &bits, |bench, _| {
            bench.iter(|| black_box(&a * &b));
        });
    }

    group.finish();
}

fn bench_display(c: &mut Criterion) {
    let mut group = c.benchmark_group("bigint_display");

    for bits in [64, 512, 2048] {
        let a = wide_value(bits);

        group.bench_with_input(BenchmarkId::new("decimal", bits), &bits, |bench, _| {
            bench.iter(|| black_box(a.to_string()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add, bench_mul, bench_display);
criterion_main!(benches);
