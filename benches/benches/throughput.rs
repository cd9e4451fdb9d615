//! MD5 Engine Criterion Benchmark
//!
//! Latency and throughput across input sizes, batch scaling and verification.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency around the padding boundaries (one vs two final blocks).
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [
        (0, "0B"),
        (16, "16B"),
        (55, "55B-one-block"),
        (56, "56B-two-blocks"),
        (64, "64B"),
        (256, "256B"),
        (KB, "1KB"),
    ];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size.max(1) as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| md5_engine::transform(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: FILES
// =============================================================================

/// Throughput for whole in-memory files.
fn bench_files(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Files");

    let sizes = [
        (8 * KB, "8KB"),
        (64 * KB, "64KB"),
        (512 * KB, "512KB"),
        (4 * MB, "4MB"),
    ];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| md5_engine::transform(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: BATCH THREAD SCALING
// =============================================================================

/// Batch throughput using Rayon (1 to N threads), 256 inputs of 64 KB.
#[cfg(feature = "multithread")]
fn bench_thread_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Batch-Thread-Scaling");
    group.sample_size(30);

    let count = 256;
    let size = 64 * KB;
    let owned: Vec<Vec<u8>> = (0..count)
        .map(|_| {
            let mut input = vec![0u8; size];
            rand::rng().fill(&mut input[..]);
            input
        })
        .collect();
    let inputs: Vec<&[u8]> = owned.iter().map(Vec::as_slice).collect();
    group.throughput(Throughput::Bytes((count * size) as u64));

    let max_threads = num_cpus::get();
    let thread_counts: Vec<usize> = [1, 2, 4, 8, 16, 32]
        .iter()
        .copied()
        .filter(|&t| t <= max_threads)
        .collect();

    for threads in thread_counts {
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(format!("{threads}threads")),
            &threads,
            |b, &t| {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(t)
                    .build()
                    .unwrap();
                pool.install(|| b.iter(|| md5_engine::transform_batch(black_box(&inputs))));
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: VERIFICATION
// =============================================================================

/// Constant-time verification vs plain digest.
fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Verify");

    let size = 64 * KB;
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_function("transform", |b| {
        b.iter(|| md5_engine::transform(black_box(&input)))
    });

    let digest = md5_engine::transform(&input);
    group.bench_function("verify", |b| {
        b.iter(|| md5_engine::verify(black_box(&input), black_box(&digest)))
    });

    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(benches, bench_latency, bench_files, bench_verify);

#[cfg(feature = "multithread")]
criterion_group!(benches_multithread, bench_thread_scaling);

#[cfg(feature = "multithread")]
criterion_main!(benches, benches_multithread);

#[cfg(not(feature = "multithread"))]
criterion_main!(benches);
