//! Interaction systems.
//!
//! This module groups the ECS systems that advance the simulation each frame
//! and the world-level socket operations.
//!
//! Submodules overview
//! - [`audiofade`] – ramp audio channel volumes down and stop playback
//! - [`feedback`] – bridge with the host feedback thread (forward/poll queues)
//! - [`socket`] – power on/off operations and the insert/remove observers
//! - [`time`] – update simulation time and delta
//! - [`trigger`] – gate physics trigger transitions and drive docking

pub mod audiofade;
pub mod feedback;
pub mod socket;
pub mod time;
pub mod trigger;
