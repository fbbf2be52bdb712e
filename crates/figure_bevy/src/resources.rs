//! Bevy resources bridging the simulation engine into the ECS.

use std::collections::HashMap;

use bevy::prelude::*;
use figure_sim::{EngineConfig, EventReceiver, FigureEngine, FigureState};

/// Resource owning the simulation engine and its notification channel.
///
/// Game code issues commands through `engine` directly; the plugin's
/// systems handle ticking, instance sync, and event draining.
#[derive(Resource)]
pub struct FigureSim {
  pub engine: FigureEngine,
  pub events: EventReceiver,
}

impl FigureSim {
  pub fn new(config: EngineConfig) -> Self {
    let (engine, events) = FigureEngine::new(config);
    Self { engine, events }
  }
}

impl Default for FigureSim {
  fn default() -> Self {
    Self::new(EngineConfig::new())
  }
}

/// Shared unit-cube mesh plus one `StandardMaterial` per distinct voxel
/// color, created lazily. Figures reuse a small palette, so this stays
/// tiny and instances batch well.
#[derive(Resource)]
pub struct VoxelAssets {
  pub mesh: Handle<Mesh>,
  materials: HashMap<u32, Handle<StandardMaterial>>,
}

impl VoxelAssets {
  pub fn new(mesh: Handle<Mesh>) -> Self {
    Self {
      mesh,
      materials: HashMap::new(),
    }
  }

  /// Material for a packed 0xRRGGBB color, created on first use.
  pub fn material(
    &mut self,
    hex: u32,
    materials: &mut Assets<StandardMaterial>,
  ) -> Handle<StandardMaterial> {
    self
      .materials
      .entry(hex)
      .or_insert_with(|| {
        materials.add(StandardMaterial {
          base_color: Color::srgb_u8(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
          ),
          perceptual_roughness: 0.9,
          ..default()
        })
      })
      .clone()
  }
}

/// Entities mirroring the engine's ensemble, index-aligned with its
/// voxel array.
#[derive(Resource, Default)]
pub struct InstanceMap {
  pub entities: Vec<Entity>,
}

/// Latest readouts drained from engine notifications, for HUD display.
#[derive(Resource)]
pub struct HudState {
  pub state: FigureState,
  /// Ensemble size normally; collected-so-far during the minigame.
  pub count: usize,
}

impl Default for HudState {
  fn default() -> Self {
    Self {
      state: FigureState::Stable,
      count: 0,
    }
  }
}
