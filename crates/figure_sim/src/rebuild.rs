//! Reassembly progress math shared by the auto and manual rebuild modes.
//!
//! One interpolation law serves every mode: an exponential approach toward
//! the target scaled by a cubic-eased per-voxel progress. Per-voxel stagger
//! keeps the swarm from converging in lockstep - auto mode staggers by
//! random jitter plus distance, manual mode by index.

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::config::RebuildConfig;
use crate::types::SimVoxel;

/// Cubic ease-out over clamped progress: fast start, soft landing.
pub fn ease_out_cubic(t: f32) -> f32 {
  let t = t.clamp(0.0, 1.0);
  1.0 - (1.0 - t).powi(3)
}

/// Scheduling delay for one voxel in an auto rebuild.
///
/// Random jitter plus a distance term, so near targets and lucky draws
/// finish first and convergence looks organic rather than swept.
pub fn auto_delay_ms(rng: &mut SmallRng, distance: f32, cfg: &RebuildConfig) -> f32 {
  rng.random_range(0.0..cfg.delay_jitter_ms) + distance * cfg.delay_per_unit_ms
}

/// Raw progress of one voxel in an auto rebuild, 0 before its delay has
/// elapsed, 1 once its flight window is over.
pub fn auto_progress(elapsed_ms: f32, delay_ms: f32, cfg: &RebuildConfig) -> f32 {
  ((elapsed_ms - delay_ms) / cfg.flight_ms).clamp(0.0, 1.0)
}

/// Deterministic per-voxel stagger for manual rebuilds, a wave ordered by
/// index.
pub fn manual_stagger(index: usize) -> f32 {
  (index % 100) as f32 / 100.0
}

/// Raw progress of one voxel in a manual rebuild driven by the external
/// progress scalar.
pub fn manual_progress(progress: f32, stagger: f32, cfg: &RebuildConfig) -> f32 {
  let span = cfg.manual_stagger_span;
  ((progress - stagger * span) / (1.0 - span)).clamp(0.0, 1.0)
}

/// Apply one tick of the interpolation law: exponential approach on
/// position, decay on rotation. Never a straight lerp - the remaining gap
/// shrinks by `eased * gain` each tick.
pub fn approach(v: &mut SimVoxel, destination: Vec3, eased: f32, cfg: &RebuildConfig) {
  v.position += (destination - v.position) * eased * cfg.gain;
  v.rotation *= 1.0 - eased;
}

#[cfg(test)]
#[path = "rebuild_test.rs"]
mod rebuild_test;
