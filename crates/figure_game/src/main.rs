//! figure_game - interactive voxel figure demo
//!
//! Explode a voxel figure into debris, watch it reassemble, or collect
//! the pieces by hand.
//!
//! Controls:
//! - E: explode the figure
//! - R: rebuild (animated)
//! - M: rebuild (manual); Space advances it step by step
//! - C: collection minigame (hover the debris to collect it)
//! - 1 / 2: switch figure (cat / rabbit)
//! - T: toggle camera auto-rotation
//! - J: dump the current model as JSON to the log

mod generators;

use bevy::prelude::*;
use figure_bevy::{FigureBevyPlugin, FigureSim, HudState, OrbitCamera};
use figure_sim::{EngineConfig, FigureState, RebuildMode, VoxelCell};
use web_time::SystemTime;

/// Manual-rebuild advance per Space press, on the 0..100 scale.
const MANUAL_STEP: f32 = 4.0;

/// The model every rebuild and collection command aims at.
#[derive(Resource)]
struct CurrentModel {
  cells: Vec<VoxelCell>,
}

fn main() {
  let seed = SystemTime::now()
    .duration_since(SystemTime::UNIX_EPOCH)
    .map(|d| d.as_millis() as u64)
    .unwrap_or(0);

  App::new()
    .add_plugins(DefaultPlugins.set(WindowPlugin {
      primary_window: Some(Window {
        title: "Voxel Figures".into(),
        resolution: (1600.0, 900.0).into(),
        ..default()
      }),
      ..default()
    }))
    .insert_resource(ClearColor(Color::srgb_u8(0x87, 0xCE, 0xEB)))
    .insert_resource(FigureSim::new(EngineConfig::new().with_rng_seed(seed)))
    .insert_resource(CurrentModel {
      cells: generators::cat(),
    })
    .add_plugins(FigureBevyPlugin)
    .add_systems(Startup, load_initial_model)
    .add_systems(Update, (keyboard_commands, log_collection_progress))
    .run();
}

fn load_initial_model(mut sim: ResMut<FigureSim>, model: Res<CurrentModel>) {
  sim.engine.load_model(&model.cells);
}

fn keyboard_commands(
  keys: Res<ButtonInput<KeyCode>>,
  mut sim: ResMut<FigureSim>,
  mut model: ResMut<CurrentModel>,
  mut cameras: Query<&mut OrbitCamera>,
) {
  if keys.just_pressed(KeyCode::KeyE) {
    sim.engine.explode();
  }
  if keys.just_pressed(KeyCode::KeyR) {
    sim.engine.rebuild(&model.cells, RebuildMode::Auto);
  }
  if keys.just_pressed(KeyCode::KeyM) {
    sim.engine.rebuild(&model.cells, RebuildMode::Manual);
  }
  if keys.just_pressed(KeyCode::Space) {
    let next = sim.engine.manual_progress() * 100.0 + MANUAL_STEP;
    sim.engine.set_manual_progress(next);
  }
  if keys.just_pressed(KeyCode::KeyC) {
    sim.engine.start_collection(&model.cells);
  }
  if keys.just_pressed(KeyCode::Digit1) {
    switch_model(&mut sim, &mut model, generators::cat());
  }
  if keys.just_pressed(KeyCode::Digit2) {
    switch_model(&mut sim, &mut model, generators::rabbit());
  }
  if keys.just_pressed(KeyCode::KeyT) {
    if let Ok(mut orbit) = cameras.single_mut() {
      orbit.auto_rotate = !orbit.auto_rotate;
      info!(enabled = orbit.auto_rotate, "auto-rotate");
    }
  }
  if keys.just_pressed(KeyCode::KeyJ) {
    match sim.engine.export_json() {
      Ok(json) => info!("model export:\n{json}"),
      Err(err) => warn!("export failed: {err}"),
    }
  }
}

fn switch_model(sim: &mut FigureSim, model: &mut CurrentModel, cells: Vec<VoxelCell>) {
  model.cells = cells;
  sim.engine.load_model(&model.cells);
}

fn log_collection_progress(hud: Res<HudState>, sim: Res<FigureSim>) {
  if hud.is_changed() && hud.state == FigureState::Collecting {
    info!(
      "collected {}/{}",
      hud.count,
      sim.engine.voxel_count()
    );
  }
}
