//! The figure engine: ensemble owner, lifecycle state machine, tick driver.
//!
//! Single-threaded and frame-driven: the host calls `tick` once per rendered
//! frame and every per-voxel mutation for that frame happens inside the
//! call, so a renderer reading positions afterwards never observes a torn
//! update. Pointer and camera updates arriving between ticks are buffered
//! and take effect at the next tick boundary.
//!
//! Commands issued in an illegal source state are silent no-ops, never
//! errors - the host may race the engine's own completion by a frame.

use glam::{Vec2, Vec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::debug;

use crate::camera::CameraRig;
use crate::color::Rgb;
use crate::config::{EngineConfig, FRAME_MS};
use crate::error::FigureError;
use crate::events::{EngineEvent, EventTap};
use crate::matcher;
use crate::model;
use crate::physics;
use crate::rebuild;
use crate::types::{FigureState, RebuildMode, RebuildTarget, SimVoxel, VoxelCell};

/// Receiving half of the engine's notification channel.
pub type EventReceiver = crossbeam_channel::Receiver<EngineEvent>;

/// Simulation engine for one voxel figure.
pub struct FigureEngine {
  config: EngineConfig,
  voxels: Vec<SimVoxel>,
  /// Parallel to `voxels` whenever non-empty.
  targets: Vec<RebuildTarget>,
  state: FigureState,
  /// Accumulated tick time since the current phase started.
  phase_elapsed_ms: f32,
  /// External pacing scalar for manual rebuilds, 0..1.
  manual_progress: f32,
  /// Non-rubble voxels collected so far this pass.
  collected: usize,
  /// Non-rubble target count of the current pass.
  collectible: usize,
  /// Buffered pointer position in NDC; applied at the next tick.
  pointer: Option<Vec2>,
  camera: CameraRig,
  /// Host camera stashed while the collection minigame owns the view.
  saved_camera: Option<CameraRig>,
  rng: SmallRng,
  events: EventTap,
}

impl FigureEngine {
  /// Create an engine and the receiving end of its notification channel.
  pub fn new(config: EngineConfig) -> (Self, EventReceiver) {
    let (events, rx) = EventTap::channel();
    let rng = SmallRng::seed_from_u64(config.rng_seed);
    let engine = Self {
      config,
      voxels: Vec::new(),
      targets: Vec::new(),
      state: FigureState::Stable,
      phase_elapsed_ms: 0.0,
      manual_progress: 0.0,
      collected: 0,
      collectible: 0,
      pointer: None,
      camera: CameraRig::default(),
      saved_camera: None,
      rng,
      events,
    };
    (engine, rx)
  }

  // ===========================================================================
  // Read access
  // ===========================================================================

  pub fn state(&self) -> FigureState {
    self.state
  }

  pub fn voxels(&self) -> &[SimVoxel] {
    &self.voxels
  }

  pub fn targets(&self) -> &[RebuildTarget] {
    &self.targets
  }

  pub fn voxel_count(&self) -> usize {
    self.voxels.len()
  }

  pub fn collected_count(&self) -> usize {
    self.collected
  }

  pub fn manual_progress(&self) -> f32 {
    self.manual_progress
  }

  pub fn config(&self) -> &EngineConfig {
    &self.config
  }

  /// The camera the host should render with. While collecting this is the
  /// engine-owned overview rig; otherwise whatever the host last set.
  pub fn camera(&self) -> CameraRig {
    self.camera
  }

  /// False while the collection minigame owns the camera.
  pub fn camera_interactive(&self) -> bool {
    self.state != FigureState::Collecting
  }

  /// Mean raw progress of the active reassembly pass over non-rubble
  /// voxels, in [0, 1]. Monotonically non-decreasing within a pass.
  pub fn rebuild_completion(&self) -> f32 {
    if self.collectible == 0 {
      return if self.state == FigureState::Stable && !self.targets.is_empty() {
        1.0
      } else {
        0.0
      };
    }
    let sum: f32 = match self.state {
      FigureState::Rebuilding => self
        .targets
        .iter()
        .filter(|t| !t.rubble)
        .map(|t| rebuild::auto_progress(self.phase_elapsed_ms, t.delay_ms, &self.config.rebuild))
        .sum(),
      FigureState::ManualRebuilding => (0..self.targets.len())
        .filter(|&i| !self.targets[i].rubble)
        .map(|i| {
          rebuild::manual_progress(
            self.manual_progress,
            rebuild::manual_stagger(i),
            &self.config.rebuild,
          )
        })
        .sum(),
      FigureState::Collecting => self.collected as f32,
      FigureState::Stable => self.collectible as f32,
      FigureState::Dismantling => 0.0,
    };
    sum / self.collectible as f32
  }

  /// Distinct colors present in the ensemble, as `#RRGGBB` strings in
  /// first-seen order.
  pub fn unique_colors(&self) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for v in &self.voxels {
      let hex = v.color.hex_string();
      if !out.contains(&hex) {
        out.push(hex);
      }
    }
    out
  }

  /// Serialize the current shape; see `model::export_json`.
  pub fn export_json(&self) -> Result<String, FigureError> {
    model::export_json(&self.voxels, &self.targets)
  }

  // ===========================================================================
  // Commands
  // ===========================================================================

  /// Replace the ensemble with a fresh model: one voxel per cell, at rest.
  pub fn load_model(&mut self, cells: &[VoxelCell]) {
    self.voxels = cells.iter().map(SimVoxel::from_cell).collect();
    self.targets.clear();
    self.collected = 0;
    self.collectible = 0;
    self.manual_progress = 0.0;
    self.phase_elapsed_ms = 0.0;
    self.restore_camera();
    self.state = FigureState::Stable;
    debug!(count = self.voxels.len(), "model loaded");
    self.events.emit(EngineEvent::CountChanged(self.voxels.len()));
    self.events.emit(EngineEvent::StateChanged(self.state));
  }

  /// Parse and load an imported model. On error the live model is left
  /// untouched.
  pub fn import_model(&mut self, text: &str) -> Result<(), FigureError> {
    let cells = model::import_json(text)?;
    self.load_model(&cells);
    Ok(())
  }

  /// Blow the figure apart: seed explosive velocities and enter
  /// Dismantling. Legal only from Stable.
  pub fn explode(&mut self) {
    if !self.state.allows_explode() {
      debug!(state = ?self.state, "explode ignored");
      return;
    }
    for v in &mut self.voxels {
      v.velocity = Vec3::new(
        self.rng.random_range(-0.6..0.6),
        self.rng.random_range(0.0..0.8),
        self.rng.random_range(-0.6..0.6),
      );
      v.angular_velocity = Vec3::new(
        self.rng.random_range(-0.15..0.15),
        self.rng.random_range(-0.15..0.15),
        self.rng.random_range(-0.15..0.15),
      );
    }
    self.set_state(FigureState::Dismantling);
  }

  /// Start a reassembly pass toward `cells`. No-op while another rebuild
  /// is already in flight.
  pub fn rebuild(&mut self, cells: &[VoxelCell], mode: RebuildMode) {
    if !self.state.allows_rebuild() {
      debug!(state = ?self.state, "rebuild ignored");
      return;
    }
    self.restore_camera();
    self.compute_targets(cells, mode == RebuildMode::Auto);
    self.phase_elapsed_ms = 0.0;
    self.manual_progress = 0.0;
    self.set_state(match mode {
      RebuildMode::Auto => FigureState::Rebuilding,
      RebuildMode::Manual => FigureState::ManualRebuilding,
    });
  }

  /// Start the collection minigame toward `cells`. Legal only from
  /// Dismantling, and only when the capability is enabled.
  pub fn start_collection(&mut self, cells: &[VoxelCell]) {
    if !self.config.collection_enabled || !self.state.allows_collection_start() {
      debug!(state = ?self.state, "collection start ignored");
      return;
    }
    self.compute_targets(cells, false);
    self.collected = 0;
    self.phase_elapsed_ms = 0.0;
    self.pointer = None;

    // Rubble never appears in the minigame: hidden outright, no exit
    // animation, not counted.
    for i in 0..self.voxels.len() {
      if self.targets[i].rubble {
        let v = &mut self.voxels[i];
        v.collected = true;
        v.collected_at_ms = None;
        v.scale = 0.0;
      }
    }

    self.saved_camera = Some(self.camera);
    self.camera = CameraRig {
      eye: self.config.collect.overview_eye,
      target: self.config.collect.overview_target,
      ..self.camera
    };
    self.set_state(FigureState::Collecting);
    self.events.emit(EngineEvent::CountChanged(0));
  }

  /// Drive a manual rebuild. Input is 0..100; anything outside clamps.
  /// Ignored outside ManualRebuilding.
  pub fn set_manual_progress(&mut self, value: f32) {
    if self.state != FigureState::ManualRebuilding {
      debug!(state = ?self.state, "manual progress ignored");
      return;
    }
    self.manual_progress = (value / 100.0).clamp(0.0, 1.0);
  }

  /// Buffer the pointer position (NDC, [-1, 1] on both axes, +y up). Takes
  /// effect at the next tick.
  pub fn set_pointer(&mut self, ndc: Vec2) {
    self.pointer = Some(ndc);
  }

  /// Mirror the host camera. Ignored while the collection minigame owns
  /// the view.
  pub fn set_camera(&mut self, rig: CameraRig) {
    if self.state == FigureState::Collecting {
      return;
    }
    self.camera = rig;
  }

  // ===========================================================================
  // Tick
  // ===========================================================================

  /// Advance the active phase by one frame of `dt_ms` milliseconds.
  pub fn tick(&mut self, dt_ms: f32) {
    let step = dt_ms / FRAME_MS;
    match self.state {
      FigureState::Stable => {}
      FigureState::Dismantling => self.tick_dismantle(step),
      FigureState::Rebuilding | FigureState::ManualRebuilding => {
        self.tick_reassemble(dt_ms);
      }
      FigureState::Collecting => self.tick_collect(dt_ms, step),
    }
  }

  fn tick_dismantle(&mut self, step: f32) {
    let cfg = self.config.physics;
    self.voxels.par_iter_mut().for_each(|v| {
      if !physics::is_settled(v, &cfg) {
        physics::step(v, &cfg, step);
      }
    });
  }

  fn tick_reassemble(&mut self, dt_ms: f32) {
    self.phase_elapsed_ms += dt_ms;
    let rcfg = self.config.rebuild;
    let manual = self.state == FigureState::ManualRebuilding;

    let mut all_arrived = true;
    for i in 0..self.voxels.len() {
      let target = self.targets[i];
      let v = &mut self.voxels[i];
      if target.rubble {
        // Surplus debris fades out where it lies.
        v.scale -= v.scale * rcfg.gain;
        continue;
      }

      let raw = if manual {
        rebuild::manual_progress(self.manual_progress, rebuild::manual_stagger(i), &rcfg)
      } else {
        rebuild::auto_progress(self.phase_elapsed_ms, target.delay_ms, &rcfg)
      };
      if raw < 1.0 {
        all_arrived = false;
      }
      if raw <= 0.0 {
        continue;
      }
      rebuild::approach(v, target.destination, rebuild::ease_out_cubic(raw), &rcfg);
    }

    let complete = if manual {
      self.manual_progress >= 1.0
    } else {
      all_arrived
    };
    if complete {
      self.snap_to_targets();
      self.set_state(FigureState::Stable);
    }
  }

  fn tick_collect(&mut self, dt_ms: f32, step: f32) {
    self.phase_elapsed_ms += dt_ms;
    let now = self.phase_elapsed_ms;
    let pcfg = self.config.physics;
    let ccfg = self.config.collect;
    let ray = self.pointer.map(|ndc| self.camera.screen_ray(ndc));

    for i in 0..self.voxels.len() {
      if self.targets[i].rubble {
        continue;
      }
      let v = &mut self.voxels[i];

      if v.collected {
        // Decorative exit: shrink and drift upward, then disappear.
        if let Some(at) = v.collected_at_ms {
          let age = now - at;
          if age < ccfg.exit_ms {
            v.scale = 1.0 - age / ccfg.exit_ms;
            v.position.y += ccfg.float_rate * step;
          } else {
            v.scale = 0.0;
          }
        }
        continue;
      }

      // Still loose: keep falling until captured.
      if !physics::is_settled(v, &pcfg) {
        physics::step(v, &pcfg, step);
      }

      let captured = ray
        .as_ref()
        .and_then(|r| r.distance_to_point(v.position))
        .is_some_and(|d| d <= ccfg.radius);
      if captured {
        v.collected = true;
        v.collected_at_ms = Some(now);
        v.velocity.y += ccfg.pop_velocity;
        self.collected += 1;
        // Immediate feedback: the count the observer sees includes this
        // frame's capture.
        let count = self.collected;
        self.events.emit(EngineEvent::CountChanged(count));
      }
    }

    if self.collected >= self.collectible {
      self.snap_to_targets();
      self.restore_camera();
      self.set_state(FigureState::Stable);
    }
  }

  // ===========================================================================
  // Internals
  // ===========================================================================

  fn set_state(&mut self, state: FigureState) {
    if self.state == state {
      return;
    }
    debug!(from = ?self.state, to = ?state, "state transition");
    self.state = state;
    self.events.emit(EngineEvent::StateChanged(state));
  }

  fn restore_camera(&mut self) {
    if let Some(rig) = self.saved_camera.take() {
      self.camera = rig;
    }
  }

  /// Grow the ensemble to `needed` voxels. Extras spawn scattered on the
  /// floor; the count never shrinks within a session, so the host's
  /// instance buffer is sized once per high-water mark.
  fn ensure_capacity(&mut self, needed: usize) {
    if self.voxels.len() >= needed {
      return;
    }
    let floor_top = self.config.physics.floor_top();
    while self.voxels.len() < needed {
      let cell = VoxelCell::new(
        Vec3::new(
          self.rng.random_range(-10.0..10.0),
          floor_top,
          self.rng.random_range(-10.0..10.0),
        ),
        crate::color::DEFAULT_GRAY,
      );
      self.voxels.push(SimVoxel::from_cell(&cell));
    }
    self.events.emit(EngineEvent::CountChanged(self.voxels.len()));
  }

  /// Run the matcher and build the parallel target array for a new pass.
  /// Replaces any previous pass atomically: no tick ever sees a mix of
  /// old and new targets.
  fn compute_targets(&mut self, cells: &[VoxelCell], auto_delays: bool) {
    self.ensure_capacity(cells.len());

    let pool: Vec<Rgb> = self.voxels.iter().map(|v| v.color).collect();
    let wanted: Vec<Rgb> = cells.iter().map(|c| c.color).collect();
    let assignment = matcher::assign(&pool, &wanted, &self.config.matching);

    let mut targets: Vec<RebuildTarget> = self
      .voxels
      .iter()
      .map(|v| RebuildTarget::rubble_at(v.position))
      .collect();
    let mut collectible = 0;

    for (cell, source) in cells.iter().zip(&assignment) {
      let Some(i) = *source else {
        // Pool exhausted: this target simply goes unbuilt.
        continue;
      };
      let delay_ms = if auto_delays {
        let distance = self.voxels[i].position.distance(cell.position);
        rebuild::auto_delay_ms(&mut self.rng, distance, &self.config.rebuild)
      } else {
        0.0
      };
      collectible += 1;
      targets[i] = RebuildTarget {
        destination: cell.position,
        delay_ms,
        rubble: false,
      };
      // A voxel hidden as rubble in an earlier pass may be recycled here;
      // make it visible and capturable again before it starts moving.
      let v = &mut self.voxels[i];
      v.scale = 1.0;
      v.collected = false;
      v.collected_at_ms = None;
    }

    self.targets = targets;
    self.collectible = collectible;
    debug!(
      targets = cells.len(),
      assigned = collectible,
      rubble = self.voxels.len() - collectible,
      "targets computed"
    );
  }

  /// Eliminate residual interpolation error: non-rubble voxels land
  /// exactly on their destinations, rubble disappears.
  fn snap_to_targets(&mut self) {
    for i in 0..self.voxels.len() {
      let target = self.targets[i];
      let v = &mut self.voxels[i];
      if target.rubble {
        v.scale = 0.0;
        continue;
      }
      v.position = target.destination;
      v.velocity = Vec3::ZERO;
      v.rotation = Vec3::ZERO;
      v.angular_velocity = Vec3::ZERO;
      v.scale = 1.0;
      v.collected = false;
      v.collected_at_ms = None;
    }
  }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;
