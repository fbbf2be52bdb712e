//! Startup system for scene initialization.

use bevy::prelude::*;

use crate::components::OrbitCamera;
use crate::resources::{FigureSim, VoxelAssets};

/// Startup system: camera, lights, floor, and the shared voxel assets.
pub fn setup_scene(
  mut commands: Commands,
  mut meshes: ResMut<Assets<Mesh>>,
  mut materials: ResMut<Assets<StandardMaterial>>,
  sim: Res<FigureSim>,
) {
  // Orbit camera starting on the engine's default rig
  let orbit = OrbitCamera::default();
  commands.spawn((
    Camera3d::default(),
    Transform::from_translation(orbit.eye()).looking_at(orbit.pivot, Vec3::Y),
    orbit,
  ));

  // Directional light (sun)
  commands.spawn((
    DirectionalLight {
      illuminance: 10000.0,
      shadows_enabled: true,
      ..default()
    },
    Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.8, 0.5, 0.0)),
  ));

  // Ambient light
  commands.insert_resource(AmbientLight {
    color: Color::srgb(0.6, 0.7, 0.8),
    brightness: 200.0,
    affects_lightmapped_meshes: false,
  });

  // Floor slab, top face flush with the simulation's floor plane
  let floor_y = sim.engine.config().physics.floor_y;
  commands.spawn((
    Mesh3d(meshes.add(Cuboid::new(80.0, 1.0, 80.0))),
    MeshMaterial3d(materials.add(StandardMaterial {
      base_color: Color::srgb(0.16, 0.16, 0.18),
      perceptual_roughness: 1.0,
      ..default()
    })),
    Transform::from_xyz(0.0, floor_y - 0.5, 0.0),
  ));

  // One unit cube shared by every voxel instance
  let cube = meshes.add(Cuboid::from_length(1.0));
  commands.insert_resource(VoxelAssets::new(cube));
}
