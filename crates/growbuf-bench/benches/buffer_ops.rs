//! Criterion micro-benchmarks for buffer append, read, snapshot and blob operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use growbuf::blob::{build_from_blob, to_blob};
use growbuf::convert::build_from_fixed;
use growbuf::GrowableBuffer;
use growbuf_bench::{filled_buffer, seeded_values, SIZES};

/// Benchmark: append N values to a buffer that starts unallocated.
fn bench_add_from_zero(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_from_zero");
    for n in SIZES {
        let values = seeded_values(n, 1);
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let mut buf = GrowableBuffer::new(0);
                for &v in values {
                    buf.add(v);
                }
                black_box(buf.size());
            });
        });
    }
    group.finish();
}

/// Benchmark: append N values with the first allocation sized to N.
fn bench_add_presized(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_presized");
    for n in SIZES {
        let values = seeded_values(n, 2);
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let mut buf = GrowableBuffer::new(values.len());
                for &v in values {
                    buf.add(v);
                }
                black_box(buf.size());
            });
        });
    }
    group.finish();
}

/// Benchmark: sum every element through `get` versus the iterator.
fn bench_read(c: &mut Criterion) {
    let buf = filled_buffer(100_000, 3);

    c.bench_function("read_by_index_100k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..buf.size() {
                sum = sum.wrapping_add(*buf.get(i));
            }
            black_box(sum);
        });
    });

    c.bench_function("read_by_iter_100k", |b| {
        b.iter(|| {
            let sum = buf.iter().fold(0u64, |acc, &v| acc.wrapping_add(v));
            black_box(sum);
        });
    });
}

/// Benchmark: add/remove_last churn at a steady size (no growth after warmup).
fn bench_push_pop_churn(c: &mut Criterion) {
    let mut buf = filled_buffer(1_000, 4);
    c.bench_function("push_pop_churn_1k", |b| {
        b.iter(|| {
            buf.add(black_box(7));
            black_box(buf.remove_last());
        });
    });
}

/// Benchmark: snapshot and clone of a 100K-element buffer.
fn bench_snapshot(c: &mut Criterion) {
    let buf = filled_buffer(100_000, 5);

    c.bench_function("to_fixed_100k", |b| {
        b.iter(|| black_box(buf.to_fixed()));
    });

    c.bench_function("clone_100k", |b| {
        b.iter(|| black_box(buf.clone()));
    });

    let values = seeded_values(100_000, 6);
    c.bench_function("build_from_fixed_100k", |b| {
        b.iter(|| black_box(build_from_fixed(&values)));
    });
}

/// Benchmark: byte blob round trip (build + snapshot).
fn bench_blob_roundtrip(c: &mut Criterion) {
    let bytes: Vec<u8> = seeded_values(8_192, 7)
        .into_iter()
        .flat_map(u64::to_le_bytes)
        .collect();

    c.bench_function("blob_roundtrip_64k", |b| {
        b.iter(|| {
            let buf = build_from_blob(&bytes);
            black_box(to_blob(&buf));
        });
    });
}

criterion_group!(
    benches,
    bench_add_from_zero,
    bench_add_presized,
    bench_read,
    bench_push_pop_churn,
    bench_snapshot,
    bench_blob_roundtrip
);
criterion_main!(benches);
