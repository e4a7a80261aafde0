//! ECS components for interactable entities.
//!
//! Submodules overview:
//! - [`audiofade`] – linear volume ramp driven once per frame
//! - [`filter`] – filter root tag, kind, condition flag, and collider marker
//! - [`socket`] – the filter socket receptacle and its docking state machine

pub mod audiofade;
pub mod filter;
pub mod socket;
