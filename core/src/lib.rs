//! Reefscape Core - Underwater scene simulation
//!
//! This crate loads the scene's meshes and drives its tick-based animation,
//! producing renderer-agnostic draw commands each frame.
//!
//! # Architecture
//!
//! - [`MeshAsset`] - Indexed-triangle mesh with derived bounding geometry
//! - [`SceneLayout`] - Barrel, fish and dolphin placements
//! - [`SceneAnimator`] - Per-tick animation state machine
//! - [`SceneComposer`] - Shadow and lit pass draw commands
//! - [`SceneRuntime`] - Fixed timestep frame driver

pub mod animator;
pub mod composer;
pub mod config;
pub mod draw;
pub mod error;
pub mod layout;
pub mod mesh;
pub mod placement;
pub mod runtime;

// Re-export core types
pub use animator::{AnimationState, AnimatorConfig, PcgRoam, RoamSource, SceneAnimator};
pub use composer::{Frame, RenderPass, SceneComposer};
pub use config::{RenderSection, SceneConfig};
pub use draw::{DrawCommand, DrawMode, Primitive, TextureSlot};
pub use error::{ConfigError, MeshError};
pub use layout::{BarrelSlot, FishSlot, SceneLayout, fish_slots_for};
pub use mesh::{Bounds, BoundsSeed, MeshAsset, MeshLibrary, MeshPaths, RenderStyle, Triangle};
pub use placement::ActorPlacement;
pub use runtime::{RuntimeConfig, SceneRuntime};
