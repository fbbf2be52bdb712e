use glam::Vec3;

use super::*;
use crate::color::Rgb;

#[test]
fn voxel_spawns_at_rest_on_cell() {
  let cell = VoxelCell::new(Vec3::new(1.0, 2.0, 3.0), Rgb::from_hex(0xFF0000));
  let v = SimVoxel::from_cell(&cell);

  assert_eq!(v.position, cell.position);
  assert_eq!(v.color, cell.color);
  assert_eq!(v.velocity, Vec3::ZERO);
  assert_eq!(v.rotation, Vec3::ZERO);
  assert_eq!(v.scale, 1.0);
  assert!(!v.collected);
  assert!(v.collected_at_ms.is_none());
}

#[test]
fn rubble_target_parks_in_place() {
  let t = RebuildTarget::rubble_at(Vec3::new(4.0, -12.0, 0.0));
  assert!(t.rubble);
  assert_eq!(t.delay_ms, 0.0);
  assert_eq!(t.destination, Vec3::new(4.0, -12.0, 0.0));
}

#[test]
fn explode_only_from_stable() {
  assert!(FigureState::Stable.allows_explode());
  assert!(!FigureState::Dismantling.allows_explode());
  assert!(!FigureState::Rebuilding.allows_explode());
  assert!(!FigureState::ManualRebuilding.allows_explode());
  assert!(!FigureState::Collecting.allows_explode());
}

#[test]
fn rebuild_blocked_while_reassembling() {
  assert!(FigureState::Stable.allows_rebuild());
  assert!(FigureState::Dismantling.allows_rebuild());
  assert!(FigureState::Collecting.allows_rebuild());
  assert!(!FigureState::Rebuilding.allows_rebuild());
  assert!(!FigureState::ManualRebuilding.allows_rebuild());
}

#[test]
fn collection_only_from_debris() {
  assert!(FigureState::Dismantling.allows_collection_start());
  assert!(!FigureState::Stable.allows_collection_start());
  assert!(!FigureState::Rebuilding.allows_collection_start());
  assert!(!FigureState::Collecting.allows_collection_start());
}
