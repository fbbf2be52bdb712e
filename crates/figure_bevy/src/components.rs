//! Bevy components for figure rendering.

use bevy::prelude::*;

/// Component for cube entities mirroring simulated voxels.
///
/// Each instance renders one voxel of the ensemble; the index is the
/// voxel's identity in the engine's arrays and never changes while the
/// entity is alive.
#[derive(Component)]
pub struct VoxelInstance {
  pub index: usize,
  /// Packed 0xRRGGBB of the material currently attached, so the sync
  /// system can detect color changes after a model reload.
  pub color: u32,
}

/// Orbit camera around a fixed pivot with optional idle auto-rotation.
///
/// Right-click drag orbits, the scroll wheel zooms. While the collection
/// minigame runs the engine owns the view and input is ignored.
#[derive(Component)]
pub struct OrbitCamera {
  /// Horizontal angle around the pivot in radians.
  pub yaw: f32,
  /// Elevation angle in radians, clamped short of the poles.
  pub pitch: f32,
  /// Eye distance from the pivot.
  pub distance: f32,
  pub pivot: Vec3,
  /// Mouse sensitivity in radians per pixel.
  pub sensitivity: f32,
  /// Zoom speed in units per scroll line.
  pub zoom_speed: f32,
  /// Slow idle spin while the user is not dragging.
  pub auto_rotate: bool,
  /// Auto-rotation speed in radians per second.
  pub auto_rotate_speed: f32,
}

impl Default for OrbitCamera {
  fn default() -> Self {
    // Matches the engine's default rig: eye (30, 30, 60) looking at (0, 5, 0).
    Self {
      yaw: 0.4636,
      pitch: 0.3567,
      distance: 71.6,
      pivot: Vec3::new(0.0, 5.0, 0.0),
      sensitivity: 0.005,
      zoom_speed: 4.0,
      auto_rotate: true,
      auto_rotate_speed: 0.25,
    }
  }
}

impl OrbitCamera {
  /// World-space eye position for the current orbit angles.
  pub fn eye(&self) -> Vec3 {
    self.pivot
      + Vec3::new(
        self.distance * self.pitch.cos() * self.yaw.sin(),
        self.distance * self.pitch.sin(),
        self.distance * self.pitch.cos() * self.yaw.cos(),
      )
  }
}
