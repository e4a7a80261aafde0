//! Socket trigger gating and docking system.
//!
//! Each frame, [`socket_trigger_system`] drains the trigger transition
//! messages written by the host physics engine and gates them before any
//! docking happens:
//!
//! 1. Resolve the collider entity to its owning filter by walking the
//!    `ChildOf` ancestry. No [`Filter`] anywhere up the chain → ignore.
//! 2. Compare the filter's kind with the socket's accepted kind. Mismatch →
//!    ignore.
//! 3. Forward the contact to the socket's docking state machine
//!    ([`FilterSocket::contact_enter`] / [`FilterSocket::contact_exit`]) and
//!    fire [`SelectEntered`] / [`SelectExited`] for every resulting change.
//!
//! Ignored events leave the socket's contact state completely untouched.
//!
//! [`FilterSocket::contact_enter`]: crate::components::socket::FilterSocket::contact_enter
//! [`FilterSocket::contact_exit`]: crate::components::socket::FilterSocket::contact_exit

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;

use crate::components::filter::Filter;
use crate::components::socket::{DockChange, FilterSocket};
use crate::events::select::{SelectEntered, SelectExited};
use crate::events::trigger::{TriggerEnter, TriggerExit};

/// Walk up the `ChildOf` ancestry of `entity` until a [`Filter`] is found.
///
/// Returns the filter root entity, or `None` when the collider belongs to no
/// filter hierarchy at all.
fn filter_root(
    entity: Entity,
    filters: &Query<&Filter>,
    parents: &Query<&ChildOf>,
) -> Option<Entity> {
    let mut current = entity;
    loop {
        if filters.contains(current) {
            return Some(current);
        }
        match parents.get(current) {
            Ok(child_of) => current = child_of.0,
            Err(_) => return None,
        }
    }
}

/// Gate trigger transitions by filter kind and drive socket docking.
pub fn socket_trigger_system(
    mut enters: MessageReader<TriggerEnter>,
    mut exits: MessageReader<TriggerExit>,
    mut sockets: Query<&mut FilterSocket>,
    filters: Query<&Filter>,
    parents: Query<&ChildOf>,
    mut commands: Commands,
) {
    for msg in enters.read() {
        let Ok(mut socket) = sockets.get_mut(msg.socket) else {
            continue;
        };
        let Some(root) = filter_root(msg.collider, &filters, &parents) else {
            continue;
        };
        let Ok(filter) = filters.get(root) else {
            continue;
        };
        if filter.kind != socket.accepts {
            continue;
        }
        if let Some(change) = socket.contact_enter(msg.collider, root) {
            fire_change(msg.socket, change, &mut commands);
        }
    }

    for msg in exits.read() {
        let Ok(mut socket) = sockets.get_mut(msg.socket) else {
            continue;
        };
        let Some(root) = filter_root(msg.collider, &filters, &parents) else {
            continue;
        };
        let Ok(filter) = filters.get(root) else {
            continue;
        };
        if filter.kind != socket.accepts {
            continue;
        }
        for change in socket.contact_exit(msg.collider) {
            fire_change(msg.socket, change, &mut commands);
        }
    }
}

fn fire_change(socket: Entity, change: DockChange, commands: &mut Commands) {
    match change {
        DockChange::Docked(root) => {
            log::debug!("socket {:?}: filter {:?} docked", socket, root);
            commands.trigger(SelectEntered {
                socket,
                interactable: root,
            });
        }
        DockChange::Undocked(root) => {
            log::debug!("socket {:?}: filter {:?} undocked", socket, root);
            commands.trigger(SelectExited {
                socket,
                interactable: root,
            });
        }
    }
}

/// Advance the trigger message queues so same-frame readers can observe writes.
///
/// Run this before [`socket_trigger_system`] in the schedule.
pub fn update_trigger_messages(
    mut enters: ResMut<Messages<TriggerEnter>>,
    mut exits: ResMut<Messages<TriggerExit>>,
) {
    enters.update();
    exits.update();
}
