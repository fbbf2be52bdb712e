//! Core data types for the voxel figure simulation.

use glam::Vec3;

use crate::color::Rgb;

/// One cell of an input model: where a cube sits and what color it is.
///
/// This is the shape every model source produces - procedural generators,
/// JSON import, and external generation services alike.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoxelCell {
  pub position: Vec3,
  pub color: Rgb,
}

impl VoxelCell {
  pub fn new(position: Vec3, color: Rgb) -> Self {
    Self { position, color }
  }
}

/// Simulated voxel: kinematic state plus collection bookkeeping.
///
/// Identity is the index into the ensemble array; it never changes while the
/// ensemble is alive. Rotation is a decorative Euler-angle spin, not a
/// physically meaningful orientation.
#[derive(Clone, Copy, Debug)]
pub struct SimVoxel {
  pub position: Vec3,
  pub velocity: Vec3,
  pub rotation: Vec3,
  pub angular_velocity: Vec3,
  pub color: Rgb,
  /// Render scale in [0, 1]; 0 hides the voxel without resizing the
  /// instance buffer.
  pub scale: f32,
  pub collected: bool,
  /// Phase-relative time of collection in milliseconds. `None` for voxels
  /// hidden without an exit animation (rubble at collection start).
  pub collected_at_ms: Option<f32>,
}

impl SimVoxel {
  /// Spawn a voxel at rest on an input cell.
  pub fn from_cell(cell: &VoxelCell) -> Self {
    Self {
      position: cell.position,
      velocity: Vec3::ZERO,
      rotation: Vec3::ZERO,
      angular_velocity: Vec3::ZERO,
      color: cell.color,
      scale: 1.0,
      collected: false,
      collected_at_ms: None,
    }
  }
}

/// Destination descriptor for one voxel during a reassembly pass.
///
/// Parallel to the ensemble array: `targets[i]` belongs to `voxels[i]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RebuildTarget {
  pub destination: Vec3,
  /// Scheduling offset in milliseconds. Only meaningful for auto rebuilds;
  /// manual rebuilds derive their stagger from the voxel index instead.
  pub delay_ms: f32,
  /// No destination this pass - park and hide.
  pub rubble: bool,
}

impl RebuildTarget {
  /// A rubble target parked at the given position.
  pub fn rubble_at(position: Vec3) -> Self {
    Self {
      destination: position,
      delay_ms: 0.0,
      rubble: true,
    }
  }
}

/// How a reassembly pass is paced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RebuildMode {
  /// Wall-clock driven with per-voxel randomized delay.
  Auto,
  /// Externally driven 0..1 progress scalar.
  Manual,
}

/// Lifecycle state of the whole ensemble.
///
/// ```text
/// Stable -> Dismantling -> { Rebuilding | ManualRebuilding | Collecting } -> Stable
/// ```
///
/// Dismantling never exits on its own; a rebuild or collection command is
/// required. Every completion path converges back to Stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FigureState {
  Stable,
  Dismantling,
  Rebuilding,
  ManualRebuilding,
  Collecting,
}

impl FigureState {
  /// `explode` is legal only from Stable.
  pub fn allows_explode(self) -> bool {
    self == FigureState::Stable
  }

  /// At most one reassembly in flight: `rebuild` is a no-op while one runs.
  pub fn allows_rebuild(self) -> bool {
    !matches!(
      self,
      FigureState::Rebuilding | FigureState::ManualRebuilding
    )
  }

  /// The collection minigame starts from debris only.
  pub fn allows_collection_start(self) -> bool {
    self == FigureState::Dismantling
  }

  /// True for the states where a reassembly pass is converging.
  pub fn is_reassembling(self) -> bool {
    matches!(
      self,
      FigureState::Rebuilding | FigureState::ManualRebuilding | FigureState::Collecting
    )
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
