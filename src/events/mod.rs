//! Event and message types exchanged across systems.
//!
//! This module groups the frame messages coming from or going to the host
//! engine and the observer events used inside the world. Events provide a
//! decoupled way for systems to communicate without direct dependencies.
//!
//! Submodules:
//! - [`feedback`] – commands and acknowledgements for the host feedback thread
//! - [`select`] – dock/undock notifications consumed by observers
//! - [`trigger`] – trigger volume transitions reported by host physics
//!
//! See each submodule for concrete event data and semantics.
pub mod feedback;
pub mod select;
pub mod trigger;
