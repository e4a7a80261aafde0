//! ECS resources shared across systems.
//!
//! Submodules overview:
//! - [`feedback`] – channel bridge to the host feedback thread
//! - [`sceneindex`] – name-to-entity registry for scene-spawned objects
//! - [`simconfig`] – INI-backed simulation settings
//! - [`worldtime`] – per-frame clock (elapsed, delta, time scale)

pub mod feedback;
pub mod sceneindex;
pub mod simconfig;
pub mod worldtime;
