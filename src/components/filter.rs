//! Filter components for the interaction world.
//!
//! A filter is a consumable world object that a [`FilterSocket`] can accept.
//! The root entity of a filter carries the [`Filter`] component; its physics
//! colliders are child entities (via `ChildOf`) tagged with [`Collider`].
//! Trigger messages from the host physics engine reference collider entities,
//! and the socket trigger system walks the hierarchy up to the owning filter.
//!
//! # Related
//!
//! - [`crate::components::socket::FilterSocket`] – the receptacle behavior
//! - [`crate::systems::trigger::socket_trigger_system`] – hierarchy walk + gating
//!
//! [`FilterSocket`]: crate::components::socket::FilterSocket
//! [`Collider`]: Collider

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Category of a filter. Sockets only accept their configured kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Large-bore filter cartridge.
    Large,
    /// Small inline filter.
    Small,
}

/// Filter root component.
///
/// `good_condition` is read by the socket at power-on time; it is owned by
/// whatever gameplay code degrades filters over use.
#[derive(Component, Debug, Clone, Copy)]
pub struct Filter {
    /// Which sockets this filter fits.
    pub kind: FilterKind,
    /// Condition flag. `false` means the filter is degraded.
    pub good_condition: bool,
}

impl Filter {
    /// Create a filter of the given kind in good condition.
    pub fn new(kind: FilterKind) -> Self {
        Filter {
            kind,
            good_condition: true,
        }
    }

    /// Set the condition flag.
    pub fn with_condition(mut self, good: bool) -> Self {
        self.good_condition = good;
        self
    }
}

/// Marker for collider proxy entities owned by the host physics engine.
///
/// The engine reports trigger enter/exit against these entities; this crate
/// never does overlap math itself.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Collider;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_new_is_good_condition() {
        let f = Filter::new(FilterKind::Large);
        assert_eq!(f.kind, FilterKind::Large);
        assert!(f.good_condition);
    }

    #[test]
    fn test_filter_with_condition() {
        let f = Filter::new(FilterKind::Small).with_condition(false);
        assert!(!f.good_condition);
    }

    #[test]
    fn test_filter_kind_deserializes_lowercase() {
        let kind: FilterKind = serde_json::from_str("\"large\"").unwrap();
        assert_eq!(kind, FilterKind::Large);
        let kind: FilterKind = serde_json::from_str("\"small\"").unwrap();
        assert_eq!(kind, FilterKind::Small);
    }
}
