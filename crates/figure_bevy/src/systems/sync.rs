//! Engine tick and instance synchronization.
//!
//! The engine is the single source of truth for voxel kinematics; every
//! frame we tick it once and then copy its state onto index-aligned cube
//! entities. Entities are spawned and despawned only when the ensemble
//! size changes, which is rare.

use bevy::prelude::*;
use figure_sim::EngineEvent;

use crate::components::VoxelInstance;
use crate::resources::{FigureSim, HudState, InstanceMap, VoxelAssets};

/// Advance the simulation by the frame delta.
pub fn drive_engine(time: Res<Time>, mut sim: ResMut<FigureSim>) {
  sim.engine.tick(time.delta_secs() * 1000.0);
}

/// Mirror the engine's voxel array onto cube entities.
pub fn sync_instances(
  mut commands: Commands,
  sim: Res<FigureSim>,
  mut assets: ResMut<VoxelAssets>,
  mut materials: ResMut<Assets<StandardMaterial>>,
  mut instances: ResMut<InstanceMap>,
  mut query: Query<(&mut VoxelInstance, &mut Transform, &mut Visibility)>,
) {
  let voxels = sim.engine.voxels();

  // Ensemble shrank (model reload): drop surplus entities.
  if instances.entities.len() > voxels.len() {
    for entity in instances.entities.drain(voxels.len()..) {
      commands.entity(entity).despawn();
    }
  }

  // Ensemble grew: spawn instances for the new tail.
  for index in instances.entities.len()..voxels.len() {
    let v = &voxels[index];
    let hex = v.color.to_hex();
    let entity = commands
      .spawn((
        VoxelInstance { index, color: hex },
        Mesh3d(assets.mesh.clone()),
        MeshMaterial3d(assets.material(hex, &mut materials)),
        voxel_transform(v),
        visibility_for(v.scale),
      ))
      .id();
    instances.entities.push(entity);
  }

  // Steady state: copy kinematics onto existing entities. Entities
  // spawned above are not queryable until next frame, but they were
  // spawned with current state already.
  for (mut instance, mut transform, mut visibility) in &mut query {
    let Some(v) = voxels.get(instance.index) else {
      continue;
    };
    *transform = voxel_transform(v);
    *visibility = visibility_for(v.scale);

    // Model reloads recolor voxels in place.
    let hex = v.color.to_hex();
    if instance.color != hex {
      instance.color = hex;
      if let Some(entity) = instances.entities.get(instance.index) {
        commands
          .entity(*entity)
          .insert(MeshMaterial3d(assets.material(hex, &mut materials)));
      }
    }
  }
}

/// Drain engine notifications into the HUD readout.
pub fn pump_events(sim: Res<FigureSim>, mut hud: ResMut<HudState>) {
  for event in sim.events.try_iter() {
    match event {
      EngineEvent::StateChanged(state) => {
        info!(?state, "figure state");
        hud.state = state;
      }
      EngineEvent::CountChanged(count) => hud.count = count,
    }
  }
}

fn voxel_transform(v: &figure_sim::SimVoxel) -> Transform {
  Transform {
    translation: v.position,
    rotation: Quat::from_euler(EulerRot::XYZ, v.rotation.x, v.rotation.y, v.rotation.z),
    scale: Vec3::splat(v.scale.max(0.0)),
  }
}

fn visibility_for(scale: f32) -> Visibility {
  if scale > 0.001 {
    Visibility::Inherited
  } else {
    Visibility::Hidden
  }
}
