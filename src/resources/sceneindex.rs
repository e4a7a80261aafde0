//! Name-to-entity index for scene-spawned objects.
//!
//! The scene loader registers every socket, filter root, and collider proxy it
//! spawns under the name given in the scene file. Gameplay code and the demo
//! scenario resolve entities by name instead of holding raw IDs.

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::FxHashMap;

/// Registry of named entities spawned from a scene document.
#[derive(Resource, Debug, Default)]
pub struct SceneIndex {
    entities: FxHashMap<String, Entity>,
}

impl SceneIndex {
    /// Register `entity` under `name`. A repeated name replaces the old entry.
    pub fn insert(&mut self, name: impl Into<String>, entity: Entity) {
        self.entities.insert(name.into(), entity);
    }

    /// Look up an entity by name.
    pub fn get(&self, name: &str) -> Option<Entity> {
        self.entities.get(name).copied()
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// True when nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut index = SceneIndex::default();
        let e = Entity::from_bits(42);
        index.insert("main_socket", e);
        assert_eq!(index.get("main_socket"), Some(e));
        assert_eq!(index.get("missing"), None);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_repeated_name_replaces() {
        let mut index = SceneIndex::default();
        index.insert("x", Entity::from_bits(1));
        index.insert("x", Entity::from_bits(2));
        assert_eq!(index.get("x"), Some(Entity::from_bits(2)));
        assert_eq!(index.len(), 1);
    }
}
