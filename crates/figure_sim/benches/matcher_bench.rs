//! Benchmarks for the greedy color matcher - figure-sized assignment
//! workloads.
//!
//! The matcher is quadratic in ensemble size and runs once per rebuild
//! command, so the interesting sizes are real figure sizes: a few hundred
//! to a few thousand voxels.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use figure_sim::{matcher, MatchConfig, Rgb};

/// Deterministic pseudo-palette: cycles hue-like ramps without pulling in
/// an RNG, so runs are comparable.
fn palette(n: usize, salt: u32) -> Vec<Rgb> {
  (0..n)
    .map(|i| {
      let v = (i as u32).wrapping_mul(2654435761).wrapping_add(salt);
      Rgb::from_hex(v & 0xFF_FF_FF)
    })
    .collect()
}

/// Assignment cost across ensemble sizes, disjoint palettes (worst case:
/// no early exact-match exit).
fn bench_sizes(c: &mut Criterion) {
  let mut group = c.benchmark_group("matcher_assign");
  let cfg = MatchConfig::default();

  for size in [256, 1024, 4096] {
    let pool = palette(size, 1);
    let targets = palette(size, 2);
    group.throughput(Throughput::Elements(size as u64));
    group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
      b.iter(|| black_box(matcher::assign(&pool, &targets, &cfg)))
    });
  }

  group.finish();
}

/// Identical palettes: every scan short-circuits on an exact match. This is
/// the common rebuild-same-figure path.
fn bench_exact_match_fast_path(c: &mut Criterion) {
  let mut group = c.benchmark_group("matcher_assign_identity");
  let cfg = MatchConfig::default();

  for size in [1024, 4096] {
    let pool = palette(size, 1);
    group.throughput(Throughput::Elements(size as u64));
    group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
      b.iter(|| black_box(matcher::assign(&pool, &pool, &cfg)))
    });
  }

  group.finish();
}

criterion_group!(benches, bench_sizes, bench_exact_match_fast_path);
criterion_main!(benches);
