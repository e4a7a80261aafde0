//! Scene loading from JSON documents.
//!
//! A scene file declares the sockets and filters of an interaction setup,
//! replacing per-object inspector wiring with one explicit document:
//!
//! ```json
//! {
//!   "sockets": [
//!     {
//!       "name": "main_socket",
//!       "accepts": "large",
//!       "powered": false,
//!       "trouble_particles": "main_socket.trouble",
//!       "leakage_particles": "main_socket.leak",
//!       "trouble_audio": "main_socket.alarm"
//!     }
//!   ],
//!   "filters": [
//!     { "name": "fresh_filter", "kind": "large", "colliders": 2 }
//!   ]
//! }
//! ```
//!
//! [`spawn_scene`] spawns one entity per socket and filter root, plus one
//! child entity per declared collider (linked via `ChildOf`). Every spawned
//! entity is registered in the [`SceneIndex`] resource: filters under their
//! name, colliders under `"<name>/col<i>"`.
//!
//! # Related
//!
//! - [`crate::resources::sceneindex::SceneIndex`] – the name registry
//! - [`crate::components::socket::FilterSocket`] – the spawned receptacle

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;
use serde::Deserialize;
use std::path::Path;

use crate::components::filter::{Collider, Filter, FilterKind};
use crate::components::socket::{FeedbackHandles, FilterSocket};
use crate::resources::sceneindex::SceneIndex;

/// Root of a scene document.
#[derive(Debug, Deserialize)]
pub struct SceneDoc {
    /// Sockets to spawn.
    #[serde(default)]
    pub sockets: Vec<SocketDef>,
    /// Filters to spawn.
    #[serde(default)]
    pub filters: Vec<FilterDef>,
}

/// Declaration of one filter socket.
#[derive(Debug, Deserialize)]
pub struct SocketDef {
    /// Registry name.
    pub name: String,
    /// The only filter kind this socket docks.
    pub accepts: FilterKind,
    /// Initial power state. Defaults to on.
    #[serde(default = "default_powered")]
    pub powered: bool,
    /// Host handle of the trouble particle effect.
    pub trouble_particles: String,
    /// Host handle of the leakage particle effect.
    pub leakage_particles: String,
    /// Host handle of the trouble audio channel.
    pub trouble_audio: String,
}

/// Declaration of one filter object.
#[derive(Debug, Deserialize)]
pub struct FilterDef {
    /// Registry name.
    pub name: String,
    /// Filter category.
    pub kind: FilterKind,
    /// Condition flag. Defaults to good.
    #[serde(default = "default_good")]
    pub good_condition: bool,
    /// Number of collider proxy children to spawn.
    #[serde(default = "default_colliders")]
    pub colliders: u32,
}

fn default_powered() -> bool {
    true
}

fn default_good() -> bool {
    true
}

fn default_colliders() -> u32 {
    1
}

impl SceneDoc {
    /// Parse a scene document from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| format!("Failed to parse scene: {}", e))
    }

    /// Load and parse a scene document from a file.
    pub fn load_from_file(path: &Path) -> Result<Self, String> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read scene file {:?}: {}", path, e))?;
        Self::from_json(&raw)
    }
}

/// Spawn all sockets and filters of `doc` and register them by name.
///
/// Initializes the [`SceneIndex`] resource when absent. Filter colliders are
/// spawned as `ChildOf` children of their root so trigger messages against
/// them resolve up the hierarchy.
pub fn spawn_scene(world: &mut World, doc: &SceneDoc) {
    world.init_resource::<SceneIndex>();
    let mut named: Vec<(String, Entity)> = Vec::new();

    for def in &doc.sockets {
        let socket = FilterSocket::new(
            def.accepts,
            FeedbackHandles {
                trouble_particles: def.trouble_particles.clone(),
                leakage_particles: def.leakage_particles.clone(),
                trouble_audio: def.trouble_audio.clone(),
            },
        )
        .with_powered(def.powered);
        let entity = world.spawn(socket).id();
        named.push((def.name.clone(), entity));
    }

    for def in &doc.filters {
        let root = world
            .spawn(Filter::new(def.kind).with_condition(def.good_condition))
            .id();
        named.push((def.name.clone(), root));
        for i in 0..def.colliders {
            let collider = world.spawn((Collider, ChildOf(root))).id();
            named.push((format!("{}/col{}", def.name, i), collider));
        }
    }

    world.flush();

    let mut index = world.resource_mut::<SceneIndex>();
    for (name, entity) in named {
        index.insert(name, entity);
    }

    log::info!(
        "Scene spawned: {} sockets, {} filters",
        doc.sockets.len(),
        doc.filters.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_defaults() {
        let doc = SceneDoc::from_json(
            r#"{ "filters": [ { "name": "f", "kind": "small" } ] }"#,
        )
        .unwrap();
        assert!(doc.sockets.is_empty());
        assert_eq!(doc.filters.len(), 1);
        assert!(doc.filters[0].good_condition);
        assert_eq!(doc.filters[0].colliders, 1);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(SceneDoc::from_json("not json").is_err());
        assert!(SceneDoc::from_json(r#"{ "sockets": [ {} ] }"#).is_err());
    }

    #[test]
    fn test_load_from_file_missing_path() {
        let err = SceneDoc::load_from_file(Path::new("/nonexistent/scene.json")).unwrap_err();
        assert!(err.contains("Failed to read scene file"));
    }
}
