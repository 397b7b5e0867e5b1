use std::fmt;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use digitlog::{baseline, digits, ilog};
use rand::{random, thread_rng, Rng};

/// Benchmarks every kernel on every input separately.
fn bench_each<T, R>(
    c: &mut Criterion,
    name: &str,
    kernels: &[(&str, fn(T) -> R)],
    inputs: &[T],
) where
    T: Copy + fmt::Display,
{
    let mut group = c.benchmark_group(name);
    for &x in inputs {
        for &(kernel, f) in kernels {
            group.bench_with_input(BenchmarkId::new(kernel, x), &x, |b, &x| {
                b.iter(|| f(black_box(x)));
            });
        }
    }
    group.finish();
}

/// Benchmarks every kernel cycling through all of `inputs`.
fn bench_mixed<T, R>(
    c: &mut Criterion,
    name: &str,
    kernels: &[(&str, fn(T) -> R)],
    inputs: &[T],
) where
    T: Copy,
{
    let mut group = c.benchmark_group(name);
    for &(kernel, f) in kernels {
        group.bench_function(kernel, |b| {
            let mut i = 0;
            b.iter(|| {
                let x = inputs[i % inputs.len()];
                black_box(f(black_box(x)));
                i = i.wrapping_add(1);
            });
        });
    }
    group.finish();
}

fn bench_digits8(c: &mut Criterion) {
    let kernels = [
        ("ladder", digits::digits8::ladder as fn(u8) -> u32),
        ("math", baseline::math8 as fn(u8) -> u32),
        ("text", baseline::text8 as fn(u8) -> u32),
    ];
    let inputs = [0, 1, 8, 9, 10, 30, 98, 99, 100, 200, 255];
    bench_each(c, "digits/u8", &kernels, &inputs);
}

fn bench_digits16(c: &mut Criterion) {
    let kernels = [
        ("ladder", digits::digits16::ladder as fn(u16) -> u32),
        ("math", baseline::math16 as fn(u16) -> u32),
        ("text", baseline::text16 as fn(u16) -> u32),
    ];
    let inputs = [
        0,
        1,
        8,
        9,
        10,
        30,
        98,
        99,
        100,
        200,
        255,
        999,
        1000,
        2000,
        9999,
        10000,
        20000,
        u16::MAX,
    ];
    bench_each(c, "digits/u16", &kernels, &inputs);
}

fn bench_digits32(c: &mut Criterion) {
    let inputs = [
        0,
        1,
        9,
        10,
        99,
        100,
        255,
        999,
        1000,
        9999,
        10000,
        99999,
        100000,
        999999,
        1000000,
        9999999,
        10000000,
        99999999,
        100000000,
        999999999,
        1000000000,
        u32::MAX,
    ];
    bench_each(c, "digits/u32", &digits::KERNELS32, &inputs);
    bench_each(
        c,
        "digits/u32/baseline",
        &[
            ("math", baseline::math32 as fn(u32) -> u32),
            ("text", baseline::text32 as fn(u32) -> u32),
        ],
        &inputs,
    );

    let mut random_inputs = [0u32; 1 << 14];
    for v in &mut random_inputs {
        *v = random::<u32>() >> thread_rng().gen_range(0..32);
    }
    bench_mixed(c, "digits/u32/random", &digits::KERNELS32, &random_inputs);
}

fn bench_digits64(c: &mut Criterion) {
    let inputs = [
        0,
        1,
        9,
        10,
        99,
        100,
        999,
        1000,
        9999,
        10000,
        99999,
        1000000,
        9999999,
        100000000,
        999999999,
        10000000000,
        99999999999,
        u32::MAX as u64,
        u64::MAX,
    ];
    bench_each(c, "digits/u64", &digits::KERNELS64, &inputs);

    // A fixed mix of small and large values.
    let mix = [
        1,
        2,
        100321,
        38,
        13290,
        3128791238719,
        u64::MAX,
        9401,
        100000000,
        10341245214532535663,
        132904351211,
        5429138726719879,
        103,
        5429138726719812379,
        0,
        u64::MAX,
    ];
    bench_mixed(c, "digits/u64/mix", &digits::KERNELS64, &mix);

    let mut random_inputs = [0u64; 1 << 14];
    for v in &mut random_inputs {
        *v = random::<u64>() >> thread_rng().gen_range(0..64);
    }
    bench_mixed(c, "digits/u64/random", &digits::KERNELS64, &random_inputs);
}

const FLOATS: [f64; 26] = [
    0.000000001,
    0.00000001,
    0.0000001,
    0.000001,
    0.00001,
    0.0001,
    0.001,
    0.01,
    0.1,
    1.0,
    9.0,
    9.999999,
    10.0,
    19.0,
    99.999,
    100.0,
    999.0,
    1000.0,
    9999.0,
    10000.0,
    99999.0,
    999999.0,
    9999999.0,
    10000000.0,
    100000000.0,
    9999999999.0,
];

fn bench_ilog64(c: &mut Criterion) {
    bench_each(c, "ilog/f64/full", &ilog::FULL64, &FLOATS);
    bench_each(c, "ilog/f64/non_negative", &ilog::NON_NEGATIVE64, &FLOATS);
    bench_each(
        c,
        "ilog/f64/baseline",
        &[("log10", f64::log10 as fn(f64) -> f64)],
        &FLOATS,
    );
}

fn bench_ilog32(c: &mut Criterion) {
    let floats = FLOATS.map(|x| x as f32);
    bench_each(c, "ilog/f32/full", &ilog::FULL32, &floats);
    bench_each(c, "ilog/f32/non_negative", &ilog::NON_NEGATIVE32, &floats);
    bench_each(
        c,
        "ilog/f32/baseline",
        &[("log10", f32::log10 as fn(f32) -> f32)],
        &floats,
    );
}

fn bench_search_order(c: &mut Criterion) {
    let mut random_inputs = [0f64; 1 << 14];
    for v in &mut random_inputs {
        *v = 10f64.powf(thread_rng().gen_range(-10.0..10.0));
    }
    bench_mixed(
        c,
        "ilog/f64/search_order",
        &ilog::FULL64[..2],
        &random_inputs,
    );
}

criterion_group!(
    benches,
    bench_digits8,
    bench_digits16,
    bench_digits32,
    bench_digits64,
    bench_ilog32,
    bench_ilog64,
    bench_search_order
);
criterion_main!(benches);
