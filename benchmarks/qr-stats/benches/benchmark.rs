//! QR pair analysis benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Orthogonality check scaling (O(n³))
//! - Strict validation of JSON candidates
//! - Statistics over the combined values (median sort dominates)
//! - Full report through the analyzer entry point
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use qr_stats::prelude::*;
use qr_stats::{PropertyAnalyzer, StatisticsEngine};
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use serde_json::{Value, json};
use std::f64::consts::PI;
use std::hint::black_box;

const SIZES: [usize; 4] = [8, 32, 128, 256];

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Block-diagonal matrix of random 2x2 rotations (orthogonal by construction).
fn generate_orthogonal(n: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let angle_dist = Uniform::new(0.0, 2.0 * PI).unwrap();

    let mut rows = vec![vec![0.0; n]; n];
    let mut i = 0;
    while i + 1 < n {
        let (s, c) = angle_dist.sample(&mut rng).sin_cos();
        rows[i][i] = c;
        rows[i][i + 1] = -s;
        rows[i + 1][i] = s;
        rows[i + 1][i + 1] = c;
        i += 2;
    }
    if i < n {
        rows[i][i] = 1.0;
    }
    rows
}

/// Upper-triangular matrix with Gaussian entries on and above the diagonal.
fn generate_upper_triangular(n: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(0.0, 3.0).unwrap();

    (0..n)
        .map(|i| {
            (0..n)
                .map(|j| if j >= i { dist.sample(&mut rng) } else { 0.0 })
                .collect()
        })
        .collect()
}

fn generate_request(n: usize, seed: u64) -> StatisticsRequest {
    StatisticsRequest::new(
        json!(generate_orthogonal(n, seed)),
        json!(generate_upper_triangular(n, seed + 1)),
    )
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_orthogonality(c: &mut Criterion) {
    let mut group = c.benchmark_group("orthogonality");
    group.sample_size(20);

    for size in SIZES {
        let q = generate_orthogonal(size, 42);
        group.throughput(Throughput::Elements((size * size * size) as u64));
        group.bench_with_input(BenchmarkId::new("is_orthogonal", size), &size, |b, _| {
            b.iter(|| PropertyAnalyzer::is_orthogonal(black_box(&q)))
        });
    }
    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");
    group.sample_size(50);

    for size in SIZES {
        let candidate: Value = json!(generate_upper_triangular(size, 7));
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::new("parse", size), &size, |b, _| {
            b.iter(|| Validator::parse(black_box(&candidate)).unwrap())
        });
    }
    group.finish();
}

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");
    group.sample_size(50);

    for size in SIZES {
        let request = generate_request(size, 3);
        let (q, r) = (
            request.matrix_q.clone().unwrap(),
            request.matrix_r.clone().unwrap(),
        );
        group.throughput(Throughput::Elements((2 * size * size) as u64));
        group.bench_with_input(BenchmarkId::new("pair", size), &size, |b, _| {
            b.iter(|| StatisticsEngine::calculate_statistics(black_box(&q), black_box(&r)).unwrap())
        });
    }
    group.finish();
}

fn bench_full_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_report");
    group.sample_size(20);

    let analyzer = QrStats::new().build().unwrap();
    for size in SIZES {
        let request = generate_request(size, 11);
        group.bench_with_input(BenchmarkId::new("analyzer", size), &size, |b, _| {
            b.iter(|| analyzer.full_report(black_box(&request)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_orthogonality,
    bench_validation,
    bench_statistics,
    bench_full_report,
);

criterion_main!(benches);
