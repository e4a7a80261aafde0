//! Filter socket component and docking state machine.
//!
//! The [`FilterSocket`] is the receptacle behavior: it accepts one filter of a
//! configured [`FilterKind`], tracks whether the socket is powered, and names
//! the particle/audio handles used for trouble and leakage feedback.
//!
//! Docking itself is a small state machine over the colliders currently inside
//! the socket's trigger volume. The trigger system feeds gated enter/exit
//! contacts into [`FilterSocket::contact_enter`] / [`FilterSocket::contact_exit`]
//! and fires select events for the returned [`DockChange`]s.
//!
//! # Related
//!
//! - [`crate::systems::trigger::socket_trigger_system`] – gates and forwards contacts
//! - [`crate::systems::socket`] – power operations and insert/remove observers

use bevy_ecs::prelude::{Component, Entity};
use smallvec::SmallVec;

use crate::components::filter::FilterKind;

/// Outcome of a power-on attempt.
///
/// The default variant is [`SocketProblem::FilterMissing`]: a silent power-on
/// performs no check and returns the default unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SocketProblem {
    /// Attached filter present and in good condition.
    NoProblem,
    /// Nothing docked in the socket.
    #[default]
    FilterMissing,
    /// Docked filter has a degraded condition flag.
    FilterInBadCondition,
}

/// Named handles for the feedback effects wired to a socket.
///
/// These are identifiers on the host engine side (particle systems and audio
/// channels pre-authored in the scene). They are required configuration; a
/// socket with dangling handles fails at the host, not here.
#[derive(Debug, Clone)]
pub struct FeedbackHandles {
    /// Particle effect played on a failed power-on.
    pub trouble_particles: String,
    /// Particle effect played when the filter is pulled under power.
    pub leakage_particles: String,
    /// Audio channel shared by both cues.
    pub trouble_audio: String,
}

/// A docking transition produced by contact bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockChange {
    /// The filter root entity docked into the socket.
    Docked(Entity),
    /// The filter root entity undocked from the socket.
    Undocked(Entity),
}

/// Receptacle that accepts a matching filter object.
///
/// State is mutated only by the trigger system (docking) and the power
/// operations in [`crate::systems::socket`]. Configuration fields are set at
/// spawn and not touched afterwards.
#[derive(Component, Debug, Clone)]
pub struct FilterSocket {
    /// The only filter kind this socket docks.
    pub accepts: FilterKind,
    /// Feedback effect handles on the host engine.
    pub handles: FeedbackHandles,
    /// Power state. Defaults to on.
    pub powered: bool,
    /// Currently docked filter root, if any.
    pub attached: Option<Entity>,
    /// (collider, filter root) pairs currently inside the trigger volume.
    contacts: SmallVec<[(Entity, Entity); 4]>,
}

impl FilterSocket {
    /// Create a powered socket accepting `accepts` with the given handles.
    pub fn new(accepts: FilterKind, handles: FeedbackHandles) -> Self {
        FilterSocket {
            accepts,
            handles,
            powered: true,
            attached: None,
            contacts: SmallVec::new(),
        }
    }

    /// Override the initial power state.
    pub fn with_powered(mut self, powered: bool) -> Self {
        self.powered = powered;
        self
    }

    /// Number of colliders currently inside the trigger volume.
    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    /// A gated collider of `root` entered the trigger volume.
    ///
    /// Docks the filter when the socket is empty. Re-entry of a collider
    /// already tracked is ignored.
    pub fn contact_enter(&mut self, collider: Entity, root: Entity) -> Option<DockChange> {
        if self.contacts.iter().any(|(c, _)| *c == collider) {
            return None;
        }
        self.contacts.push((collider, root));
        if self.attached.is_none() {
            self.attached = Some(root);
            return Some(DockChange::Docked(root));
        }
        None
    }

    /// A gated collider of a tracked filter left the trigger volume.
    ///
    /// The docked filter undocks only once all of its colliders have left.
    /// When it does, the oldest remaining contact (if any) docks in its place,
    /// so a waiting filter snaps in as the old one is withdrawn.
    pub fn contact_exit(&mut self, collider: Entity) -> SmallVec<[DockChange; 2]> {
        let mut changes = SmallVec::new();
        let Some(idx) = self.contacts.iter().position(|(c, _)| *c == collider) else {
            return changes;
        };
        let (_, root) = self.contacts.remove(idx);

        if self.attached == Some(root) && !self.contacts.iter().any(|(_, r)| *r == root) {
            self.attached = None;
            changes.push(DockChange::Undocked(root));
            if let Some(&(_, next)) = self.contacts.first() {
                self.attached = Some(next);
                changes.push(DockChange::Docked(next));
            }
        }
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handles() -> FeedbackHandles {
        FeedbackHandles {
            trouble_particles: "s.trouble".to_string(),
            leakage_particles: "s.leak".to_string(),
            trouble_audio: "s.alarm".to_string(),
        }
    }

    fn socket() -> FilterSocket {
        FilterSocket::new(FilterKind::Large, handles())
    }

    fn ent(bits: u64) -> Entity {
        Entity::from_bits(bits)
    }

    #[test]
    fn test_new_socket_is_powered_and_empty() {
        let s = socket();
        assert!(s.powered);
        assert!(s.attached.is_none());
        assert_eq!(s.contact_count(), 0);
    }

    #[test]
    fn test_with_powered_off() {
        let s = socket().with_powered(false);
        assert!(!s.powered);
    }

    #[test]
    fn test_first_contact_docks() {
        let mut s = socket();
        let change = s.contact_enter(ent(1), ent(100));
        assert_eq!(change, Some(DockChange::Docked(ent(100))));
        assert_eq!(s.attached, Some(ent(100)));
    }

    #[test]
    fn test_duplicate_collider_enter_ignored() {
        let mut s = socket();
        s.contact_enter(ent(1), ent(100));
        assert_eq!(s.contact_enter(ent(1), ent(100)), None);
        assert_eq!(s.contact_count(), 1);
    }

    #[test]
    fn test_second_filter_does_not_steal_dock() {
        let mut s = socket();
        s.contact_enter(ent(1), ent(100));
        assert_eq!(s.contact_enter(ent(2), ent(200)), None);
        assert_eq!(s.attached, Some(ent(100)));
        assert_eq!(s.contact_count(), 2);
    }

    #[test]
    fn test_exit_of_last_collider_undocks() {
        let mut s = socket();
        s.contact_enter(ent(1), ent(100));
        let changes = s.contact_exit(ent(1));
        assert_eq!(changes.as_slice(), &[DockChange::Undocked(ent(100))]);
        assert!(s.attached.is_none());
    }

    #[test]
    fn test_exit_with_remaining_collider_keeps_dock() {
        let mut s = socket();
        s.contact_enter(ent(1), ent(100));
        s.contact_enter(ent(2), ent(100));
        let changes = s.contact_exit(ent(1));
        assert!(changes.is_empty());
        assert_eq!(s.attached, Some(ent(100)));
    }

    #[test]
    fn test_waiting_filter_docks_after_undock() {
        let mut s = socket();
        s.contact_enter(ent(1), ent(100));
        s.contact_enter(ent(2), ent(200));
        let changes = s.contact_exit(ent(1));
        assert_eq!(
            changes.as_slice(),
            &[DockChange::Undocked(ent(100)), DockChange::Docked(ent(200))]
        );
        assert_eq!(s.attached, Some(ent(200)));
    }

    #[test]
    fn test_exit_of_untracked_collider_is_noop() {
        let mut s = socket();
        s.contact_enter(ent(1), ent(100));
        let changes = s.contact_exit(ent(99));
        assert!(changes.is_empty());
        assert_eq!(s.attached, Some(ent(100)));
        assert_eq!(s.contact_count(), 1);
    }

    #[test]
    fn test_socket_problem_default_is_missing() {
        assert_eq!(SocketProblem::default(), SocketProblem::FilterMissing);
    }
}
