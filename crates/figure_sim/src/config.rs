//! Engine configuration.
//!
//! Every tunable in the simulation lives here so hosts can reshape behavior
//! without touching the update loops. Defaults reproduce the reference
//! figure: a 1-unit voxel grid over a floor at y = -12, 60 fps pacing.

use glam::Vec3;

use crate::color::Rgb;

/// Reference frame duration; tick deltas are normalized against this so
/// integration keeps the same feel at any frame rate.
pub const FRAME_MS: f32 = 1000.0 / 60.0;

/// Free-fall and floor-contact tuning.
#[derive(Clone, Copy, Debug)]
pub struct PhysicsConfig {
  /// Downward acceleration per reference frame.
  pub gravity: f32,
  /// Fraction of vertical speed kept (and inverted) on a floor bounce.
  pub restitution: f32,
  /// Horizontal and angular damping applied on each floor contact.
  pub friction: f32,
  /// World-space height of the floor plane.
  pub floor_y: f32,
  /// Half the voxel edge length; voxels rest at `floor_y + half_extent`.
  pub half_extent: f32,
  /// Speed below which a floor-level voxel counts as settled. Must sit
  /// above the residual bounce speed `restitution * gravity / (1 +
  /// restitution)` or voxels jitter forever.
  pub rest_speed: f32,
}

impl Default for PhysicsConfig {
  fn default() -> Self {
    Self {
      gravity: 0.035,
      restitution: 0.55,
      friction: 0.8,
      floor_y: -12.0,
      half_extent: 0.5,
      rest_speed: 0.025,
    }
  }
}

impl PhysicsConfig {
  /// Resting height for a voxel sitting on the floor.
  pub fn floor_top(&self) -> f32 {
    self.floor_y + self.half_extent
  }
}

/// Color matcher tuning.
///
/// The natural-material penalty is an aesthetic rule: foliage-green and
/// dark-wood source cells look wrong reused as skin or cloth, so assigning
/// them to a target outside the natural palette costs a flat penalty far
/// larger than any real color distance.
#[derive(Clone, Debug)]
pub struct MatchConfig {
  /// Flat cost for giving a natural-looking source to a non-natural target.
  pub natural_penalty: f32,
  /// Distances below this count as an exact match and stop the scan early.
  pub exact_epsilon: f32,
  /// Green channel at or above this marks a source as foliage-like.
  pub leaf_green_min: f32,
  /// Red and blue channels below this mark a source as dark-wood-like.
  pub wood_dark_max: f32,
  /// Target colors considered natural (penalty does not apply).
  pub natural_palette: Vec<Rgb>,
}

impl Default for MatchConfig {
  fn default() -> Self {
    Self {
      natural_penalty: 100.0,
      exact_epsilon: 0.01,
      leaf_green_min: 0.4,
      wood_dark_max: 0.25,
      // Foliage green and trunk wood from the reference palette.
      natural_palette: vec![Rgb::from_hex(0x228B22), Rgb::from_hex(0x3B2F2F)],
    }
  }
}

impl MatchConfig {
  /// True for source colors the penalty protects: bright foliage green or
  /// dark wood tones.
  pub fn is_natural_source(&self, color: Rgb) -> bool {
    color.g > self.leaf_green_min || (color.r < self.wood_dark_max && color.b < self.wood_dark_max)
  }

  /// True when a target color belongs to the natural palette.
  pub fn is_natural_target(&self, color: Rgb) -> bool {
    self
      .natural_palette
      .iter()
      .any(|p| p.distance(color) < self.exact_epsilon)
  }
}

/// Reassembly animation tuning.
#[derive(Clone, Copy, Debug)]
pub struct RebuildConfig {
  /// Exponential-approach gain per tick, applied after easing.
  pub gain: f32,
  /// Per-voxel flight duration for auto rebuilds.
  pub flight_ms: f32,
  /// Upper bound of the random component of an auto-rebuild delay.
  pub delay_jitter_ms: f32,
  /// Extra delay per world unit of distance to the target.
  pub delay_per_unit_ms: f32,
  /// Fraction of the manual progress range consumed by index stagger.
  pub manual_stagger_span: f32,
}

impl Default for RebuildConfig {
  fn default() -> Self {
    Self {
      gain: 0.15,
      flight_ms: 800.0,
      delay_jitter_ms: 1000.0,
      delay_per_unit_ms: 20.0,
      manual_stagger_span: 0.3,
    }
  }
}

/// Collection minigame tuning.
#[derive(Clone, Copy, Debug)]
pub struct CollectConfig {
  /// Maximum ray-to-voxel distance counted as a capture.
  pub radius: f32,
  /// Upward velocity kick on capture.
  pub pop_velocity: f32,
  /// Duration of the shrink-and-float exit animation.
  pub exit_ms: f32,
  /// Upward drift per reference frame while the exit animation plays.
  pub float_rate: f32,
  /// Camera placement while the minigame runs: a wide overview.
  pub overview_eye: Vec3,
  pub overview_target: Vec3,
}

impl Default for CollectConfig {
  fn default() -> Self {
    Self {
      radius: 3.0,
      pop_velocity: 0.5,
      exit_ms: 450.0,
      float_rate: 0.08,
      overview_eye: Vec3::new(0.0, 25.0, 70.0),
      overview_target: Vec3::new(0.0, 5.0, 0.0),
    }
  }
}

/// Top-level engine configuration.
#[derive(Clone, Debug, Default)]
pub struct EngineConfig {
  pub physics: PhysicsConfig,
  pub matching: MatchConfig,
  pub rebuild: RebuildConfig,
  pub collect: CollectConfig,
  /// Capability flag: when false, `start_collection` is a no-op.
  pub collection_enabled: bool,
  /// Seed for explosion velocities and rebuild delay jitter.
  pub rng_seed: u64,
}

impl EngineConfig {
  pub fn new() -> Self {
    Self {
      collection_enabled: true,
      ..Self::default()
    }
  }

  pub fn with_collection_enabled(mut self, enabled: bool) -> Self {
    self.collection_enabled = enabled;
    self
  }

  pub fn with_rng_seed(mut self, seed: u64) -> Self {
    self.rng_seed = seed;
    self
  }

  pub fn with_floor_y(mut self, floor_y: f32) -> Self {
    self.physics.floor_y = floor_y;
    self
  }

  pub fn with_natural_penalty(mut self, penalty: f32) -> Self {
    self.matching.natural_penalty = penalty;
    self
  }

  pub fn with_collect_radius(mut self, radius: f32) -> Self {
    self.collect.radius = radius;
    self
  }
}
