//! Per-voxel kinematic integration: gravity, floor bounce, settling.
//!
//! There is no inter-voxel collision and no rigid-body rotation; rotation is
//! integrated only as a decorative spin. The floor is an infinite plane at a
//! configured height.

use crate::config::PhysicsConfig;
use crate::types::SimVoxel;

/// Advance one voxel by `step` reference frames (`step = dt_ms / FRAME_MS`).
///
/// Returns true while the voxel is still in motion. Settled voxels can be
/// skipped by the caller, but any externally applied velocity makes them
/// eligible again on the next call.
pub fn step(v: &mut SimVoxel, cfg: &PhysicsConfig, step: f32) -> bool {
  v.velocity.y -= cfg.gravity * step;
  v.position += v.velocity * step;
  v.rotation += v.angular_velocity * step;

  let floor_top = cfg.floor_top();
  if v.position.y < floor_top {
    v.position.y = floor_top;
    v.velocity.y = -v.velocity.y * cfg.restitution;
    v.velocity.x *= cfg.friction;
    v.velocity.z *= cfg.friction;
    v.angular_velocity *= cfg.friction;
  }

  !is_settled(v, cfg)
}

/// A voxel resting at floor height with negligible speed.
pub fn is_settled(v: &SimVoxel, cfg: &PhysicsConfig) -> bool {
  (v.position.y - cfg.floor_top()).abs() <= cfg.half_extent * 0.1
    && v.velocity.length_squared() < cfg.rest_speed * cfg.rest_speed
}

#[cfg(test)]
#[path = "physics_test.rs"]
mod physics_test;
