//! Trigger volume messages delivered by the host physics engine.
//!
//! The host engine owns collider shapes and overlap detection. Each frame it
//! writes one message per trigger transition into the world's
//! `Messages<TriggerEnter>` / `Messages<TriggerExit>` queues. The collider
//! entity is a proxy spawned by the scene loader; the socket trigger system
//! resolves it to the owning filter before doing anything with it.

use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;

/// A collider entered a socket's trigger volume.
#[derive(Message, Debug, Clone, Copy)]
pub struct TriggerEnter {
    /// The socket whose volume was entered.
    pub socket: Entity,
    /// The collider that entered.
    pub collider: Entity,
}

/// A collider left a socket's trigger volume.
#[derive(Message, Debug, Clone, Copy)]
pub struct TriggerExit {
    /// The socket whose volume was left.
    pub socket: Entity,
    /// The collider that left.
    pub collider: Entity,
}
