//! Bevy presentation layer for figure_sim.
//!
//! This crate bridges the engine-independent figure simulation with Bevy:
//! it ticks the engine each frame, mirrors the voxel ensemble onto cube
//! entities, routes pointer and camera input into the engine, and drains
//! engine notifications into a HUD resource. Game code issues commands
//! (explode, rebuild, collect) through the [`FigureSim`] resource.

pub mod components;
pub mod resources;
pub mod systems;

use bevy::prelude::*;
pub use components::*;
pub use resources::*;

/// Bevy plugin wiring the figure simulation into an app.
pub struct FigureBevyPlugin;

impl Plugin for FigureBevyPlugin {
  fn build(&self, app: &mut App) {
    app
      .init_resource::<FigureSim>()
      .init_resource::<InstanceMap>()
      .init_resource::<HudState>()
      .add_systems(Startup, systems::startup::setup_scene)
      .add_systems(
        Update,
        (
          // Input first so this frame's tick sees it, sync after the tick.
          systems::pointer::track_pointer,
          systems::camera::update_orbit_camera,
          systems::sync::drive_engine,
          systems::sync::sync_instances,
          systems::sync::pump_events,
        )
          .chain(),
      );
  }
}
