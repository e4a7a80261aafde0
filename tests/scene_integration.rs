//! Integration tests for scene loading and the end-to-end interaction
//! pipeline built from a scene document.

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;

use hydrovr::components::filter::{Filter, FilterKind};
use hydrovr::components::socket::{FilterSocket, SocketProblem};
use hydrovr::events::feedback::FeedbackCmd;
use hydrovr::events::trigger::TriggerEnter;
use hydrovr::resources::sceneindex::SceneIndex;
use hydrovr::resources::worldtime::WorldTime;
use hydrovr::scene::{SceneDoc, spawn_scene};
use hydrovr::systems::socket::{power_on, setup_sockets};
use hydrovr::systems::trigger::socket_trigger_system;

const SCENE: &str = r#"
{
  "sockets": [
    {
      "name": "main_socket",
      "accepts": "large",
      "powered": false,
      "trouble_particles": "main_socket.trouble",
      "leakage_particles": "main_socket.leak",
      "trouble_audio": "main_socket.alarm"
    }
  ],
  "filters": [
    { "name": "fresh_filter", "kind": "large", "good_condition": true, "colliders": 2 },
    { "name": "worn_filter", "kind": "large", "good_condition": false, "colliders": 2 },
    { "name": "inline_filter", "kind": "small" }
  ]
}
"#;

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.init_resource::<Messages<FeedbackCmd>>();
    setup_sockets(&mut world);
    world
}

fn tick_trigger(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(socket_trigger_system);
    schedule.run(world);
}

#[test]
fn scene_spawns_sockets_and_filters_with_index() {
    let mut world = make_world();
    let doc = SceneDoc::from_json(SCENE).unwrap();
    spawn_scene(&mut world, &doc);

    let index = world.resource::<SceneIndex>();
    // 1 socket + 3 filters + 5 colliders
    assert_eq!(index.len(), 9);

    let socket = index.get("main_socket").unwrap();
    let fresh = index.get("fresh_filter").unwrap();
    let worn = index.get("worn_filter").unwrap();
    let inline_col = index.get("inline_filter/col0").unwrap();

    let sock = world.get::<FilterSocket>(socket).unwrap();
    assert_eq!(sock.accepts, FilterKind::Large);
    assert!(!sock.powered);
    assert_eq!(sock.handles.trouble_audio, "main_socket.alarm");

    let filter = world.get::<Filter>(fresh).unwrap();
    assert!(filter.good_condition);
    let filter = world.get::<Filter>(worn).unwrap();
    assert!(!filter.good_condition);

    // Colliders are parented to their filter root.
    let parent = world.get::<ChildOf>(inline_col).unwrap();
    assert_eq!(parent.0, index.get("inline_filter").unwrap());
}

#[test]
fn scene_collider_names_are_indexed_per_filter() {
    let mut world = make_world();
    let doc = SceneDoc::from_json(SCENE).unwrap();
    spawn_scene(&mut world, &doc);

    let index = world.resource::<SceneIndex>();
    assert!(index.get("fresh_filter/col0").is_some());
    assert!(index.get("fresh_filter/col1").is_some());
    assert!(index.get("fresh_filter/col2").is_none());
}

#[test]
fn scene_docked_worn_filter_fails_power_on() {
    let mut world = make_world();
    let doc = SceneDoc::from_json(SCENE).unwrap();
    spawn_scene(&mut world, &doc);

    let (socket, worn, collider) = {
        let index = world.resource::<SceneIndex>();
        (
            index.get("main_socket").unwrap(),
            index.get("worn_filter").unwrap(),
            index.get("worn_filter/col0").unwrap(),
        )
    };

    world
        .resource_mut::<Messages<TriggerEnter>>()
        .write(TriggerEnter { socket, collider });
    tick_trigger(&mut world);

    assert_eq!(world.get::<FilterSocket>(socket).unwrap().attached, Some(worn));
    assert_eq!(
        power_on(&mut world, socket, false),
        SocketProblem::FilterInBadCondition
    );
}

#[test]
fn scene_small_filter_is_rejected_by_large_socket() {
    let mut world = make_world();
    let doc = SceneDoc::from_json(SCENE).unwrap();
    spawn_scene(&mut world, &doc);

    let (socket, collider) = {
        let index = world.resource::<SceneIndex>();
        (
            index.get("main_socket").unwrap(),
            index.get("inline_filter/col0").unwrap(),
        )
    };

    world
        .resource_mut::<Messages<TriggerEnter>>()
        .write(TriggerEnter { socket, collider });
    tick_trigger(&mut world);

    assert!(world.get::<FilterSocket>(socket).unwrap().attached.is_none());
}
