//! HydroVR interaction library.
//!
//! This module exposes the crate's ECS components, resources, systems, events,
//! and scene loader for use in integration tests and as a reusable library.

pub mod components;
pub mod events;
pub mod resources;
pub mod scene;
pub mod systems;
