use glam::{Vec2, Vec3};

use super::*;

#[test]
fn center_ray_points_at_target() {
  let rig = CameraRig::default();
  let ray = rig.screen_ray(Vec2::ZERO);

  let to_target = (rig.target - rig.eye).normalize();
  assert!((ray.dir - to_target).length() < 1e-5);
  assert_eq!(ray.origin, rig.eye);
}

#[test]
fn ray_direction_is_unit_length() {
  let rig = CameraRig::default();
  for ndc in [
    Vec2::new(1.0, 1.0),
    Vec2::new(-1.0, 0.5),
    Vec2::new(0.3, -0.9),
  ] {
    let ray = rig.screen_ray(ndc);
    assert!((ray.dir.length() - 1.0).abs() < 1e-5);
  }
}

#[test]
fn point_on_ray_has_zero_distance() {
  let ray = Ray {
    origin: Vec3::ZERO,
    dir: Vec3::Z,
  };
  assert_eq!(ray.distance_to_point(Vec3::new(0.0, 0.0, 5.0)), Some(0.0));
}

#[test]
fn perpendicular_offset_is_measured() {
  let ray = Ray {
    origin: Vec3::ZERO,
    dir: Vec3::Z,
  };
  let d = ray.distance_to_point(Vec3::new(3.0, 4.0, 10.0)).unwrap();
  assert!((d - 5.0).abs() < 1e-5);
}

#[test]
fn points_behind_origin_are_rejected() {
  let ray = Ray {
    origin: Vec3::ZERO,
    dir: Vec3::Z,
  };
  assert_eq!(ray.distance_to_point(Vec3::new(0.0, 0.0, -1.0)), None);
}

#[test]
fn project_inverts_screen_ray() {
  let rig = CameraRig::default();
  for ndc in [
    Vec2::ZERO,
    Vec2::new(0.4, -0.2),
    Vec2::new(-0.8, 0.7),
  ] {
    let ray = rig.screen_ray(ndc);
    let point = ray.origin + ray.dir * 25.0;
    let back = rig.project(point).unwrap();
    assert!((back - ndc).length() < 1e-4);
  }
}

#[test]
fn project_rejects_points_behind_eye() {
  let rig = CameraRig::default();
  let forward = (rig.target - rig.eye).normalize();
  let behind = rig.eye - forward * 10.0;
  assert!(rig.project(behind).is_none());
}

#[test]
fn projected_point_is_hit_by_its_own_ray() {
  let rig = CameraRig::default();
  let voxel = Vec3::new(4.0, -2.0, 1.0);
  let ndc = rig.project(voxel).unwrap();
  let d = rig.screen_ray(ndc).distance_to_point(voxel).unwrap();
  assert!(d < 1e-3);
}
