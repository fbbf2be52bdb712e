//! Procedural demo figures.
//!
//! Figures are painted into a position-keyed map so overlapping strokes
//! never produce two voxels in the same grid cell; the last stroke wins.
//! A `BTreeMap` keeps the output order deterministic, which keeps voxel
//! identities stable across runs.

use std::collections::BTreeMap;

use figure_sim::{Rgb, VoxelCell};
use glam::Vec3;

const FLOOR_Y: f32 = -12.0;

const DARK: u32 = 0x4A3728;
const LIGHT: u32 = 0x654321;
const WHITE: u32 = 0xF0F0F0;
const GOLD: u32 = 0xFFD700;
const BLACK: u32 = 0x111111;
const WOOD: u32 = 0x3B2F2F;
const GREEN: u32 = 0x228B22;
const NOSE: u32 = 0xE5C100;

#[derive(Default)]
struct VoxelMap {
  cells: BTreeMap<(i32, i32, i32), u32>,
}

impl VoxelMap {
  /// Paint one voxel, snapped to the integer grid.
  fn set(&mut self, x: f32, y: f32, z: f32, color: u32) {
    let key = (
      x.round() as i32,
      y.round() as i32,
      z.round() as i32,
    );
    self.cells.insert(key, color);
  }

  fn fill_box(&mut self, x: (i32, i32), y: (i32, i32), z: (i32, i32), color: u32) {
    for x in x.0.min(x.1)..=x.0.max(x.1) {
      for y in y.0.min(y.1)..=y.0.max(y.1) {
        for z in z.0.min(z.1)..=z.0.max(z.1) {
          self.set(x as f32, y as f32, z as f32, color);
        }
      }
    }
  }

  /// Paint a solid sphere, optionally squashed vertically by `squash_y`.
  fn sphere(&mut self, cx: f32, cy: f32, cz: f32, r: f32, color: u32, squash_y: f32) {
    let r2 = r * r;
    let x_range = (cx - r).floor() as i32..=(cx + r).ceil() as i32;
    let y_range = (cy - r * squash_y).floor() as i32..=(cy + r * squash_y).ceil() as i32;
    let z_range = (cz - r).floor() as i32..=(cz + r).ceil() as i32;

    for x in x_range {
      for y in y_range.clone() {
        for z in z_range.clone() {
          let dx = x as f32 - cx;
          let dy = (y as f32 - cy) / squash_y;
          let dz = z as f32 - cz;
          if dx * dx + dy * dy + dz * dz <= r2 {
            self.set(x as f32, y as f32, z as f32, color);
          }
        }
      }
    }
  }

  fn into_cells(self) -> Vec<VoxelCell> {
    self
      .cells
      .into_iter()
      .map(|((x, y, z), color)| {
        VoxelCell::new(
          Vec3::new(x as f32, y as f32, z as f32),
          Rgb::from_hex(color),
        )
      })
      .collect()
  }
}

/// A sitting cat with a curled tail.
pub fn cat() -> Vec<VoxelCell> {
  let mut map = VoxelMap::default();
  let base = FLOOR_Y + 1.0;

  // Front paws
  map.sphere(-3.0, base + 2.0, 0.0, 2.2, DARK, 1.2);
  map.sphere(3.0, base + 2.0, 0.0, 2.2, DARK, 1.2);

  // Body, tapering upward, with a white chest patch
  for y in 0..7 {
    let r = 3.5 - y as f32 * 0.2;
    map.sphere(0.0, base + 2.0 + y as f32, 0.0, r, DARK, 1.0);
    map.sphere(0.0, base + 2.0 + y as f32, 2.0, r * 0.6, WHITE, 1.0);
  }

  // Front legs
  for y in 0..5 {
    for x in [-1.5, 1.5] {
      map.set(x, base + y as f32, 3.0, WHITE);
      map.set(x, base + y as f32, 2.0, WHITE);
    }
  }

  // Head
  let head_y = base + 9.0;
  map.sphere(0.0, head_y, 0.0, 3.2, LIGHT, 0.8);

  // Ears, dark outside with a white inner face
  for side in [-2.0f32, 2.0] {
    map.set(side, head_y + 3.0, 0.0, DARK);
    map.set(side * 0.8, head_y + 3.0, 1.0, WHITE);
    map.set(side, head_y + 4.0, 0.0, DARK);
  }

  // Tail curling around the front
  for i in 0..12 {
    let a = i as f32 * 0.3;
    let tx = a.cos() * 4.5;
    let tz = a.sin() * 4.5;
    if tz > -2.0 {
      map.set(tx, base, tz, DARK);
      map.set(tx, base + 1.0, tz, DARK);
    }
  }

  // Eyes and nose
  map.set(-1.0, head_y + 0.5, 2.5, GOLD);
  map.set(1.0, head_y + 0.5, 2.5, GOLD);
  map.set(-1.0, head_y + 0.5, 3.0, BLACK);
  map.set(1.0, head_y + 0.5, 3.0, BLACK);
  map.set(0.0, head_y, 3.0, NOSE);

  map.into_cells()
}

/// A white rabbit sitting on a mossy log.
pub fn rabbit() -> Vec<VoxelCell> {
  let mut map = VoxelMap::default();
  let log_y = FLOOR_Y + 2.5;

  // Log with exposed end grain and a few moss tufts
  for x in -6..=6 {
    let radius = 2.8 + (x as f32 * 0.5).sin() * 0.2;
    map.sphere(x as f32, log_y, 0.0, radius, DARK, 1.0);
    if x == -6 || x == 6 {
      map.sphere(x as f32, log_y, 0.0, radius - 0.5, WOOD, 1.0);
    }
    if x % 3 == 0 {
      map.set(x as f32, log_y + radius, 0.5, GREEN);
    }
  }

  // Haunches, body, chest
  let body_y = log_y + 2.5;
  map.sphere(-1.5, body_y + 1.5, -1.5, 1.8, WHITE, 1.0);
  map.sphere(1.5, body_y + 1.5, -1.5, 1.8, WHITE, 1.0);
  map.sphere(0.0, body_y + 2.0, 0.0, 2.2, WHITE, 0.8);
  map.sphere(0.0, body_y + 2.5, 1.5, 1.5, WHITE, 1.0);

  // Feet and tail
  map.set(-1.2, body_y, 2.2, LIGHT);
  map.set(1.2, body_y, 2.2, LIGHT);
  map.set(-2.2, body_y, -0.5, WHITE);
  map.set(2.2, body_y, -0.5, WHITE);
  map.sphere(0.0, body_y + 1.5, -2.5, 1.0, WHITE, 1.0);

  // Head and cheeks
  let head_y = body_y + 4.5;
  let head_z = 1.0;
  map.sphere(0.0, head_y, head_z, 1.7, WHITE, 1.0);
  map.sphere(-1.1, head_y - 0.5, head_z + 0.5, 1.0, WHITE, 1.0);
  map.sphere(1.1, head_y - 0.5, head_z + 0.5, 1.0, WHITE, 1.0);

  // Ears curving back, pink inner stripe
  for y in 0..5 {
    let curve = y as f32 * 0.2;
    for side in [-1.0f32, 1.0] {
      map.set(side * 0.8, head_y + 1.5 + y as f32, head_z - curve, WHITE);
      map.set(side * 1.2, head_y + 1.5 + y as f32, head_z - curve, WHITE);
      map.set(side, head_y + 1.5 + y as f32, head_z - curve + 0.5, LIGHT);
    }
  }

  // Face
  map.set(-0.8, head_y + 0.2, head_z + 1.5, BLACK);
  map.set(0.8, head_y + 0.2, head_z + 1.5, BLACK);
  map.set(0.0, head_y - 0.5, head_z + 1.8, NOSE);

  map.into_cells()
}
