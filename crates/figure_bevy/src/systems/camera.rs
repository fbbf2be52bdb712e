//! Orbit camera controller with right-drag orbit and scroll zoom.

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use figure_sim::CameraRig;

use crate::components::OrbitCamera;
use crate::resources::FigureSim;

const MIN_DISTANCE: f32 = 10.0;
const MAX_DISTANCE: f32 = 200.0;
const MAX_PITCH: f32 = 1.4;

/// System to update the orbit camera and mirror it into the engine.
///
/// While the collection minigame runs the flow reverses: input is ignored
/// and the Bevy camera follows the engine's overview rig instead.
pub fn update_orbit_camera(
  time: Res<Time>,
  mouse_button: Res<ButtonInput<MouseButton>>,
  mouse_motion: Res<AccumulatedMouseMotion>,
  mouse_scroll: Res<AccumulatedMouseScroll>,
  windows: Query<&Window, With<PrimaryWindow>>,
  mut sim: ResMut<FigureSim>,
  mut query: Query<(&mut OrbitCamera, &mut Transform)>,
) {
  let Ok((mut orbit, mut transform)) = query.single_mut() else {
    return;
  };

  if !sim.engine.camera_interactive() {
    let rig = sim.engine.camera();
    *transform = Transform::from_translation(rig.eye).looking_at(rig.target, Vec3::Y);
    return;
  }

  // Mouse orbit (right-click drag)
  let dragging = mouse_button.pressed(MouseButton::Right);
  if dragging {
    let delta = mouse_motion.delta;
    orbit.yaw -= delta.x * orbit.sensitivity;
    orbit.pitch = (orbit.pitch + delta.y * orbit.sensitivity).clamp(-MAX_PITCH, MAX_PITCH);
  } else if orbit.auto_rotate {
    orbit.yaw += orbit.auto_rotate_speed * time.delta_secs();
  }

  orbit.distance =
    (orbit.distance - mouse_scroll.delta.y * orbit.zoom_speed).clamp(MIN_DISTANCE, MAX_DISTANCE);

  let eye = orbit.eye();
  *transform = Transform::from_translation(eye).looking_at(orbit.pivot, Vec3::Y);

  let aspect = windows
    .single()
    .map(|w| w.width() / w.height())
    .unwrap_or(16.0 / 9.0);
  sim
    .engine
    .set_camera(CameraRig::new(eye, orbit.pivot).with_aspect(aspect));
}
