//! Camera rig and pointer rays for the collection minigame.
//!
//! The engine never renders; it only needs enough camera state to turn a
//! normalized pointer position into a world-space ray and back. Hosts keep
//! their own camera and mirror it here via `FigureEngine::set_camera`.

use glam::{Vec2, Vec3};

/// Look-at camera description: eye, target, vertical field of view, aspect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraRig {
  pub eye: Vec3,
  pub target: Vec3,
  /// Vertical field of view in radians.
  pub fov_y: f32,
  /// Width over height.
  pub aspect: f32,
}

impl Default for CameraRig {
  fn default() -> Self {
    Self {
      eye: Vec3::new(30.0, 30.0, 60.0),
      target: Vec3::new(0.0, 5.0, 0.0),
      fov_y: 45f32.to_radians(),
      aspect: 16.0 / 9.0,
    }
  }
}

impl CameraRig {
  pub fn new(eye: Vec3, target: Vec3) -> Self {
    Self {
      eye,
      target,
      ..Self::default()
    }
  }

  pub fn with_aspect(mut self, aspect: f32) -> Self {
    self.aspect = aspect;
    self
  }

  /// Orthonormal view basis. Assumes the view direction is never parallel
  /// to world up, which holds for every rig the engine produces.
  fn basis(&self) -> (Vec3, Vec3, Vec3) {
    let forward = (self.target - self.eye).normalize();
    let right = forward.cross(Vec3::Y).normalize();
    let up = right.cross(forward);
    (forward, right, up)
  }

  /// Ray from the eye through a screen point in NDC ([-1, 1] on both axes,
  /// +y up).
  pub fn screen_ray(&self, ndc: Vec2) -> Ray {
    let (forward, right, up) = self.basis();
    let half_h = (self.fov_y * 0.5).tan();
    let half_w = half_h * self.aspect;
    let dir = (forward + right * ndc.x * half_w + up * ndc.y * half_h).normalize();
    Ray {
      origin: self.eye,
      dir,
    }
  }

  /// Project a world point to NDC. `None` when the point is at or behind
  /// the eye plane.
  pub fn project(&self, point: Vec3) -> Option<Vec2> {
    let (forward, right, up) = self.basis();
    let rel = point - self.eye;
    let depth = rel.dot(forward);
    if depth <= 1e-6 {
      return None;
    }
    let half_h = (self.fov_y * 0.5).tan();
    let half_w = half_h * self.aspect;
    Some(Vec2::new(
      rel.dot(right) / (depth * half_w),
      rel.dot(up) / (depth * half_h),
    ))
  }
}

/// World-space ray with unit direction.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
  pub origin: Vec3,
  pub dir: Vec3,
}

impl Ray {
  /// Shortest distance from a point to the ray. `None` when the closest
  /// approach falls behind the origin - points behind the camera never
  /// count as hits.
  pub fn distance_to_point(&self, point: Vec3) -> Option<f32> {
    let t = (point - self.origin).dot(self.dir);
    if t < 0.0 {
      return None;
    }
    Some((self.origin + self.dir * t).distance(point))
  }
}

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;
