//! figure_sim - Framework/engine independent voxel figure simulation
//!
//! This crate simulates an interactive voxel figure: explode it into
//! physically simulated debris, reassemble it along animated flight paths,
//! or collect the debris voxel by voxel with a pointer. Rendering is the
//! host's job; the engine exposes per-voxel kinematic state each tick and
//! the host draws it however it likes.
//!
//! # Features
//!
//! - **Lifecycle state machine**: Stable, Dismantling, Rebuilding,
//!   ManualRebuilding, Collecting, with silent rejection of illegal commands
//! - **Greedy color matcher**: luma-weighted reuse of existing voxels when
//!   rebuilding into a different model, with a natural-material penalty
//! - **Debris physics**: gravity, floor bounce and friction, settling
//! - **Tolerant model import**: forgiving JSON with substitution defaults
//!
//! # Example
//!
//! ```ignore
//! use figure_sim::{EngineConfig, FigureEngine, RebuildMode};
//!
//! let (mut engine, events) = FigureEngine::new(EngineConfig::new());
//! engine.load_model(&cells);
//! engine.explode();
//! // ... some frames later ...
//! engine.rebuild(&cells, RebuildMode::Auto);
//! loop {
//!     engine.tick(16.7);
//!     // draw engine.voxels() ...
//! }
//! ```

pub mod color;
pub mod config;
pub mod types;

// Re-export commonly used items
pub use color::{Rgb, DEFAULT_GRAY};
pub use config::{
  CollectConfig, EngineConfig, MatchConfig, PhysicsConfig, RebuildConfig, FRAME_MS,
};
pub use types::{FigureState, RebuildMode, RebuildTarget, SimVoxel, VoxelCell};

// Greedy color assignment between voxel pools and target models
pub mod matcher;
pub use matcher::Assignment;

// Debris free-fall and floor contact
pub mod physics;

// Shared reassembly interpolation math
pub mod rebuild;

// Camera rig and pointer rays
pub mod camera;
pub use camera::{CameraRig, Ray};

// Tolerant JSON import / rounded export
pub mod model;
pub use model::{export_json, import_json};

pub mod error;
pub use error::FigureError;

// Engine-to-host notifications
pub mod events;
pub use events::EngineEvent;

// The engine itself
pub mod engine;
pub use engine::{EventReceiver, FigureEngine};
