//! Cursor tracking for the collection minigame.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::resources::FigureSim;

/// Feed the cursor position to the engine as an NDC pointer.
pub fn track_pointer(windows: Query<&Window, With<PrimaryWindow>>, mut sim: ResMut<FigureSim>) {
  let Ok(window) = windows.single() else {
    return;
  };
  let Some(cursor) = window.cursor_position() else {
    return;
  };
  let size = window.size();
  if size.x <= 0.0 || size.y <= 0.0 {
    return;
  }
  sim.engine.set_pointer(cursor_to_ndc(cursor, size));
}

/// Window coordinates (origin top-left, y down) to NDC ([-1, 1], y up).
fn cursor_to_ndc(cursor: Vec2, size: Vec2) -> Vec2 {
  Vec2::new(
    cursor.x / size.x * 2.0 - 1.0,
    1.0 - cursor.y / size.y * 2.0,
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn window_corners_map_to_ndc_corners() {
    let size = Vec2::new(800.0, 600.0);
    assert_eq!(cursor_to_ndc(Vec2::new(400.0, 300.0), size), Vec2::ZERO);
    assert_eq!(cursor_to_ndc(Vec2::ZERO, size), Vec2::new(-1.0, 1.0));
    assert_eq!(cursor_to_ndc(size, size), Vec2::new(1.0, -1.0));
  }
}
