use glam::Vec3;

use super::*;
use crate::color::DEFAULT_GRAY;
use crate::types::{SimVoxel, VoxelCell};

fn voxel_at(x: f32, y: f32, z: f32) -> SimVoxel {
  SimVoxel::from_cell(&VoxelCell::new(Vec3::new(x, y, z), DEFAULT_GRAY))
}

#[test]
fn gravity_pulls_down() {
  let cfg = PhysicsConfig::default();
  let mut v = voxel_at(0.0, 10.0, 0.0);

  let before = v.velocity.y;
  step(&mut v, &cfg, 1.0);
  assert!(v.velocity.y < before);
  assert!(v.position.y < 10.0);
}

#[test]
fn floor_bounce_inverts_and_damps() {
  let cfg = PhysicsConfig::default();
  let mut v = voxel_at(0.0, cfg.floor_top() + 0.01, 0.0);
  v.velocity = Vec3::new(1.0, -2.0, -1.0);
  v.angular_velocity = Vec3::splat(0.2);

  step(&mut v, &cfg, 1.0);

  assert_eq!(v.position.y, cfg.floor_top());
  // Vertical velocity inverted and scaled by restitution.
  assert!(v.velocity.y > 0.0);
  assert!((v.velocity.y - (2.0 + cfg.gravity) * cfg.restitution).abs() < 1e-4);
  // Horizontal and angular components damped by friction.
  assert!((v.velocity.x - cfg.friction).abs() < 1e-6);
  assert!((v.velocity.z + cfg.friction).abs() < 1e-6);
  assert!((v.angular_velocity.x - 0.2 * cfg.friction).abs() < 1e-6);
}

#[test]
fn rotation_integrates_angular_velocity() {
  let cfg = PhysicsConfig::default();
  let mut v = voxel_at(0.0, 10.0, 0.0);
  v.angular_velocity = Vec3::new(0.1, -0.2, 0.3);

  step(&mut v, &cfg, 1.0);
  assert!((v.rotation - Vec3::new(0.1, -0.2, 0.3)).length() < 1e-6);
}

#[test]
fn dropped_voxel_eventually_settles() {
  let cfg = PhysicsConfig::default();
  let mut v = voxel_at(0.0, 5.0, 0.0);
  v.velocity = Vec3::new(0.5, 0.3, -0.4);

  let mut moving = true;
  for _ in 0..5000 {
    moving = step(&mut v, &cfg, 1.0);
    if !moving {
      break;
    }
  }

  assert!(!moving, "voxel never settled");
  assert!((v.position.y - cfg.floor_top()).abs() < 0.1);
  assert!(is_settled(&v, &cfg));
}

#[test]
fn settled_voxel_resumes_after_kick() {
  let cfg = PhysicsConfig::default();
  let mut v = voxel_at(0.0, cfg.floor_top(), 0.0);
  assert!(is_settled(&v, &cfg));

  v.velocity.y += 0.5;
  assert!(!is_settled(&v, &cfg));
  assert!(step(&mut v, &cfg, 1.0));
  assert!(v.position.y > cfg.floor_top());
}

#[test]
fn airborne_voxel_is_never_settled() {
  let cfg = PhysicsConfig::default();
  let v = voxel_at(0.0, 10.0, 0.0);
  assert!(!is_settled(&v, &cfg));
}

#[test]
fn fractional_step_scales_integration() {
  let cfg = PhysicsConfig::default();
  let mut whole = voxel_at(0.0, 10.0, 0.0);
  let mut halves = voxel_at(0.0, 10.0, 0.0);

  step(&mut whole, &cfg, 1.0);
  step(&mut halves, &cfg, 0.5);
  step(&mut halves, &cfg, 0.5);

  // Not exactly equal (gravity applies mid-step), but close.
  assert!((whole.position.y - halves.position.y).abs() < 0.02);
}
