//! Error taxonomy for model import and load.
//!
//! Only whole-operation failures surface as errors; recoverable field
//! problems are patched with substitution defaults during import, and
//! illegal state-machine commands are silent no-ops rather than errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FigureError {
  /// The import text is not valid JSON at all.
  #[error("invalid JSON: {0}")]
  Json(#[from] serde_json::Error),

  /// The import parsed, but the top level is not an array of cells.
  #[error("import root must be a JSON array of cells")]
  NotAnArray,
}
