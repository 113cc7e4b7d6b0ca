//! Fast-path vs promoted-path micro-benchmarks.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use num_bigint::BigInt;
use vesta_int::{ByteOrder, Int};

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    let a = Int::new(123_456_789);
    let b = Int::new(987_654_321);
    group.bench_function("word_word", |bench| {
        bench.iter(|| black_box(&a).add(black_box(&b)));
    });

    let wide_a = Int::Big(BigInt::from(i64::MAX) * 3);
    let wide_b = Int::Big(BigInt::from(i64::MIN) * 5);
    group.bench_function("big_big", |bench| {
        bench.iter(|| black_box(&wide_a).add(black_box(&wide_b)));
    });

    group.finish();
}

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");

    let a = Int::new(0x1234_5678);
    let b = Int::new(0x9abc_def0);
    group.bench_function("word_word", |bench| {
        bench.iter(|| black_box(&a).mul(black_box(&b)));
    });

    let wide = Int::Big(BigInt::from(1u8) << 300);
    let pow2 = Int::Big(BigInt::from(1u8) << 128);
    group.bench_function("big_power_of_two_shortcut", |bench| {
        bench.iter(|| black_box(&wide).mul(black_box(&pow2)));
    });

    group.finish();
}

fn bench_pow(c: &mut Criterion) {
    let mut group = c.benchmark_group("pow");

    let base = Int::new(3);
    let exp = Int::new(20);
    group.bench_function("word_fast_path", |bench| {
        bench.iter(|| black_box(&base).pow(black_box(&exp), None).unwrap());
    });

    let modulus = Int::new(1_000_000_007);
    let big_exp = Int::new(1 << 20);
    group.bench_function("modular", |bench| {
        bench.iter(|| {
            black_box(&base)
                .pow(black_box(&big_exp), Some(black_box(&modulus)))
                .unwrap()
        });
    });

    group.finish();
}

fn bench_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("bytes");

    let word = Int::new(i64::MIN);
    group.bench_function("to_bytes_word", |bench| {
        bench.iter(|| black_box(&word).to_bytes(8, ByteOrder::Little, true).unwrap());
    });

    let wide = Int::Big((BigInt::from(1u8) << 256) - 1);
    group.bench_function("to_bytes_big", |bench| {
        bench.iter(|| black_box(&wide).to_bytes(32, ByteOrder::Big, false).unwrap());
    });

    let buffer = wide.to_bytes(32, ByteOrder::Big, false).unwrap();
    group.bench_function("from_bytes_big", |bench| {
        bench.iter(|| Int::from_bytes(black_box(&buffer), ByteOrder::Big, false));
    });

    group.finish();
}

criterion_group!(benches, bench_add, bench_mul, bench_pow, bench_bytes);
criterion_main!(benches);
