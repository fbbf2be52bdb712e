//! Model serialization: tolerant JSON import and rounded JSON export.
//!
//! The wire shape is an array of `{x, y, z, color}` objects. Import is
//! deliberately forgiving about field spelling and color encoding because
//! payloads come from hand-edited textboxes and external generation
//! services; only a structurally broken document fails the whole import.

use glam::Vec3;
use serde::Serialize;
use serde_json::Value;

use crate::color::{Rgb, DEFAULT_GRAY};
use crate::error::FigureError;
use crate::types::{RebuildTarget, SimVoxel, VoxelCell};

/// Decimal places kept in exported coordinates.
const EXPORT_PRECISION: f32 = 100.0;

#[derive(Serialize)]
struct ExportCell {
  x: f32,
  y: f32,
  z: f32,
  color: String,
}

fn round2(value: f32) -> f32 {
  (value * EXPORT_PRECISION).round() / EXPORT_PRECISION
}

/// Parse an import payload into cells.
///
/// Tolerated per cell: `color` or shorthand `c`, encoded as `#RRGGBB`
/// string or packed integer; missing or invalid colors fall back to gray,
/// non-numeric coordinates to 0. A document that is not a JSON array fails
/// as a whole - no partial result is returned.
pub fn import_json(text: &str) -> Result<Vec<VoxelCell>, FigureError> {
  let root: Value = serde_json::from_str(text)?;
  let entries = root.as_array().ok_or(FigureError::NotAnArray)?;
  Ok(entries.iter().map(parse_cell).collect())
}

fn parse_cell(entry: &Value) -> VoxelCell {
  VoxelCell {
    position: Vec3::new(coord(entry, "x"), coord(entry, "y"), coord(entry, "z")),
    color: cell_color(entry),
  }
}

fn coord(entry: &Value, key: &str) -> f32 {
  entry
    .get(key)
    .and_then(Value::as_f64)
    .map(|v| v as f32)
    .unwrap_or(0.0)
}

fn cell_color(entry: &Value) -> Rgb {
  let field = entry.get("color").or_else(|| entry.get("c"));
  match field {
    Some(Value::String(s)) => Rgb::parse_hex(s).unwrap_or(DEFAULT_GRAY),
    Some(Value::Number(n)) => n
      .as_u64()
      .filter(|&v| v <= 0xFF_FF_FF)
      .map(|v| Rgb::from_hex(v as u32))
      .unwrap_or(DEFAULT_GRAY),
    _ => DEFAULT_GRAY,
  }
}

/// Serialize the ensemble for export.
///
/// With targets in effect only non-rubble voxels are written, i.e. the
/// shape currently being assembled; without targets the full ensemble is.
pub fn export_json(voxels: &[SimVoxel], targets: &[RebuildTarget]) -> Result<String, FigureError> {
  let cells: Vec<ExportCell> = voxels
    .iter()
    .enumerate()
    .filter(|(i, _)| targets.get(*i).map_or(targets.is_empty(), |t| !t.rubble))
    .map(|(_, v)| ExportCell {
      x: round2(v.position.x),
      y: round2(v.position.y),
      z: round2(v.position.z),
      color: v.color.hex_string(),
    })
    .collect();

  Ok(serde_json::to_string_pretty(&cells)?)
}

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;
