use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simd_compat::simd::*;

// ====================================================================================
// --- Configuration: buffer sizes covering different cache levels ---
// ====================================================================================

/// Buffer sizes chosen to test throughput across the cache hierarchy.
///
/// *   4 KiB: fits in L1. Tests raw issue rate of the resolved intrinsics.
/// *   64 KiB: pushes the limits of L1, starts involving L2.
/// *   1 MiB: fits in L2 but not L1.
/// *   16 MiB: exceeds most L2 caches; memory-bound on many machines.
const BUFFER_SIZES: &[usize] = &[
    4 * 1024,
    64 * 1024,
    1024 * 1024,
    16 * 1024 * 1024,
];

/// Generates a pseudo-random byte buffer. A fixed seed keeps the data
/// identical across runs so results stay comparable over time.
fn generate_random_data(len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| rng.random::<u8>()).collect()
}

// ====================================================================================
// --- Kernels: each walks a buffer 16 bytes at a time through the resolver ---
// ====================================================================================

/// Sums all bytes as i32 lanes using intrinsics resolved for this target.
fn simd_byte_sum(data: &[u8]) -> i32 {
    let zero = unsafe { _mm_setzero_si128() };
    let mut acc = zero;
    for chunk in data.chunks_exact(16) {
        let v = unsafe { _mm_loadu_si128(chunk.as_ptr() as *const __m128i) };
        // widen u8 lanes to i16 pairs against zero, then accumulate
        let lo = unsafe { _mm_unpacklo_epi8(v, zero) };
        let hi = unsafe { _mm_unpackhi_epi8(v, zero) };
        acc = unsafe { _mm_add_epi32(acc, _mm_unpacklo_epi16(lo, zero)) };
        acc = unsafe { _mm_add_epi32(acc, _mm_unpackhi_epi16(lo, zero)) };
        acc = unsafe { _mm_add_epi32(acc, _mm_unpacklo_epi16(hi, zero)) };
        acc = unsafe { _mm_add_epi32(acc, _mm_unpackhi_epi16(hi, zero)) };
    }
    let mut lanes = [0u8; 16];
    unsafe { _mm_storeu_si128(lanes.as_mut_ptr() as *mut __m128i, acc) };
    lanes
        .chunks_exact(4)
        .map(|c| i32::from_le_bytes(c.try_into().unwrap()))
        .sum()
}

/// Same reduction through the scalar reference model, for comparison.
fn model_byte_sum(data: &[u8]) -> i32 {
    data.iter().map(|&b| i32::from(b)).sum()
}

/// Counts bytes equal to `needle` using compare + movemask.
fn simd_count_byte(data: &[u8], needle: u8) -> u32 {
    let splat = unsafe { _mm_set1_epi8(needle as i8) };
    let mut count = 0u32;
    for chunk in data.chunks_exact(16) {
        let v = unsafe { _mm_loadu_si128(chunk.as_ptr() as *const __m128i) };
        let mask = unsafe { _mm_movemask_epi8(_mm_cmpeq_epi8(v, splat)) };
        count += mask.count_ones();
    }
    count
}

fn model_count_byte(data: &[u8], needle: u8) -> u32 {
    data.iter().filter(|&&b| b == needle).count() as u32
}

// ====================================================================================
// --- Main benchmark definitions ---
// ====================================================================================

fn all_benchmarks(c: &mut Criterion) {
    for &size in BUFFER_SIZES {
        let data = generate_random_data(size);

        let mut group = c.benchmark_group("ByteSum");
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("resolved", size), &data, |b, data| {
            b.iter(|| simd_byte_sum(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("scalar", size), &data, |b, data| {
            b.iter(|| model_byte_sum(black_box(data)))
        });
        group.finish();

        let mut group = c.benchmark_group("CountByte");
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("resolved", size), &data, |b, data| {
            b.iter(|| simd_count_byte(black_box(data), 0x42))
        });
        group.bench_with_input(BenchmarkId::new("scalar", size), &data, |b, data| {
            b.iter(|| model_count_byte(black_box(data), 0x42))
        });
        group.finish();
    }
}

criterion_group!(benches, all_benchmarks);
criterion_main!(benches);
