//! Select events fired when a filter docks into or undocks from a socket.
//!
//! These are observer events, not frame messages: the trigger system fires
//! them through `Commands::trigger` and registered observers run synchronously
//! at the next command flush. Observers are registered once during setup (see
//! [`setup_sockets`](crate::systems::socket::setup_sockets)) and torn down
//! with the world.

use bevy_ecs::prelude::{Entity, Event};

/// A filter docked into a socket.
#[derive(Event, Debug, Clone, Copy)]
pub struct SelectEntered {
    /// The receiving socket entity.
    pub socket: Entity,
    /// The docked filter root entity.
    pub interactable: Entity,
}

/// A filter undocked from a socket.
#[derive(Event, Debug, Clone, Copy)]
pub struct SelectExited {
    /// The releasing socket entity.
    pub socket: Entity,
    /// The removed filter root entity.
    pub interactable: Entity,
}
