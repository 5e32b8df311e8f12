use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qrgen::tools::{bench_limit_from_env, byte_payload, numeric_payload, smoke_from_env};
use qrgen::{encode_alphanumeric, encode_binary, encode_numeric, encode_text, ECLevel};

fn bench_encode_text_small(c: &mut Criterion) {
    c.bench_function("encode_text_hello_world", |b| {
        b.iter(|| encode_text(black_box("Hello, World!"), black_box(ECLevel::H)))
    });
}

fn bench_encode_alphanumeric_v1(c: &mut Criterion) {
    c.bench_function("encode_alphanumeric_v1", |b| {
        b.iter(|| encode_alphanumeric(black_box("HELLO WORLD"), black_box(ECLevel::Q)))
    });
}

fn bench_encode_numeric_near_capacity(c: &mut Criterion) {
    // 7000 digits push the symbol to version 40; this exercises the
    // version search, the interleaver, and mask selection on the largest
    // matrix.
    let digits = numeric_payload(7000);

    c.bench_function("encode_numeric_7000_digits", |b| {
        b.iter(|| encode_numeric(black_box(&digits), black_box(ECLevel::L)))
    });
}

fn bench_encode_binary_sizes(c: &mut Criterion) {
    const ALL_SIZES: [usize; 4] = [100, 500, 1000, 2000];
    let take = if smoke_from_env() {
        1
    } else {
        bench_limit_from_env()
            .unwrap_or(ALL_SIZES.len())
            .min(ALL_SIZES.len())
    };
    let sizes = &ALL_SIZES[..take];

    let mut group = c.benchmark_group("encode_binary");
    for &len in sizes {
        let data = byte_payload(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
            b.iter(|| encode_binary(black_box(data), black_box(ECLevel::L)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_encode_text_small,
    bench_encode_alphanumeric_v1,
    bench_encode_numeric_near_capacity,
    bench_encode_binary_sizes
);
criterion_main!(benches);
