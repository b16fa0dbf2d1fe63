//! Benchmarks for the sliding-window delta matcher.
//!
//! Covers the three scan regimes: targets identical to the reference (every
//! window jumps a whole block), lightly edited targets (jumps interleaved
//! with byte-by-byte slides), and unrelated targets (the window slides the
//! whole way without a single candidate).
//!
//! ```bash
//! cargo bench -p matching --bench delta_matching_benchmark
//! ```

use std::hint::black_box;
use std::num::NonZeroU32;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use checksums::HashParams;
use matching::compute_delta;
use signature::generate_signatures;

// ============================================================================
// Test Data Utilities
// ============================================================================

/// Creates reference data with deterministic patterns.
fn make_reference(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 251) as u8).collect()
}

/// Edits roughly every tenth block: replaces a few bytes and inserts a short
/// run, so matching alternates between block jumps and literal scanning.
fn make_edited_target(reference: &[u8], block_size: usize) -> Vec<u8> {
    let mut target = Vec::with_capacity(reference.len() + reference.len() / 64);
    for (block_index, block) in reference.chunks(block_size).enumerate() {
        if block_index % 10 == 3 {
            target.extend_from_slice(b"edit run");
            target.extend(block.iter().map(|byte| byte.wrapping_add(1)));
        } else {
            target.extend_from_slice(block);
        }
    }
    target
}

/// Creates data that shares no content with the deterministic reference.
fn make_unrelated_target(size: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(0x00c0_ffee);
    let mut data = vec![0u8; size];
    rng.fill_bytes(&mut data);
    data
}

fn params(block_size: u32) -> HashParams {
    HashParams::new(NonZeroU32::new(block_size).expect("block size must be non-zero"))
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_identical_target(c: &mut Criterion) {
    let mut group = c.benchmark_group("delta_identical_target");
    for size in [64 * 1024, 1024 * 1024] {
        let params = params(1_024);
        let reference = make_reference(size);
        let table = generate_signatures(&params, &reference);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                compute_delta(black_box(&params), black_box(&table), black_box(&reference))
                    .expect("parameters agree")
            });
        });
    }
    group.finish();
}

fn bench_edited_target(c: &mut Criterion) {
    let mut group = c.benchmark_group("delta_edited_target");
    for size in [64 * 1024, 1024 * 1024] {
        let params = params(1_024);
        let reference = make_reference(size);
        let table = generate_signatures(&params, &reference);
        let target = make_edited_target(&reference, 1_024);

        group.throughput(Throughput::Bytes(target.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                compute_delta(black_box(&params), black_box(&table), black_box(&target))
                    .expect("parameters agree")
            });
        });
    }
    group.finish();
}

fn bench_unrelated_target(c: &mut Criterion) {
    let mut group = c.benchmark_group("delta_unrelated_target");
    let size = 256 * 1024;
    let params = params(1_024);
    let table_source = make_reference(size);
    let table = generate_signatures(&params, &table_source);
    let target = make_unrelated_target(size);

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("slide_only_scan", |b| {
        b.iter(|| {
            compute_delta(black_box(&params), black_box(&table), black_box(&target))
                .expect("parameters agree")
        });
    });
    group.finish();
}

fn bench_block_size_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("delta_block_size_sweep");
    let reference = make_reference(1024 * 1024);

    for block_size in [256u32, 1_024, 4_096] {
        let params = params(block_size);
        let table = generate_signatures(&params, &reference);
        let target = make_edited_target(&reference, block_size as usize);

        group.throughput(Throughput::Bytes(target.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(block_size),
            &block_size,
            |b, _| {
                b.iter(|| {
                    compute_delta(black_box(&params), black_box(&table), black_box(&target))
                        .expect("parameters agree")
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_identical_target,
    bench_edited_target,
    bench_unrelated_target,
    bench_block_size_sweep
);
criterion_main!(benches);
