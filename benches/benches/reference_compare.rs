//! Reference Comparison Benchmark
//!
//! Compares the engine with the RustCrypto `md-5` crate on identical inputs.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use md5::{Digest, Md5};
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_reference(c: &mut Criterion) {
    let mut group = c.benchmark_group("MD5 Implementations");

    // Scenarios:
    // - Small (7B): padding + single block
    // - Medium (1KB): L1 cache hot-path
    // - Large (256KB): bulk compression
    let sizes = [7, 1024, 256 * 1024];

    for size in sizes {
        let input = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(format!("md5-engine - {size} bytes"), |b| {
            b.iter(|| md5_engine::transform(black_box(&input)));
        });

        group.bench_function(format!("md-5 (RustCrypto) - {size} bytes"), |b| {
            b.iter(|| Md5::digest(black_box(&input)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reference);
criterion_main!(benches);
