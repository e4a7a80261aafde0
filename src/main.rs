//! HydroVR filter socket demo.
//!
//! A headless VR interaction behavior built with:
//! - **bevy_ecs** for entity-component-system architecture
//! - **crossbeam-channel** for the bridge to the host feedback thread
//!
//! This executable runs a scripted maintenance scenario against a filter
//! socket: power on with an empty socket, dock a filter, power on again, yank
//! the filter out under power, and power off with the trouble audio fading
//! out. The host engine's particle and audio backends are stood in for by a
//! logging feedback thread, so every cue the socket would trigger in VR shows
//! up in the log.
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (filter, socket, audio fade)
//! - [`events`] – Event types (trigger transitions, select, feedback commands)
//! - [`resources`] – ECS resources (time, feedback bridge, scene index, config)
//! - [`scene`] – JSON scene loading
//! - [`systems`] – ECS systems (trigger gating, power ops, fade, bridge)
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

mod components;
mod events;
mod resources;
mod scene;
mod systems;

use crate::events::trigger::{TriggerEnter, TriggerExit};
use crate::resources::feedback::{setup_feedback, shutdown_feedback};
use crate::resources::sceneindex::SceneIndex;
use crate::resources::simconfig::SimConfig;
use crate::resources::worldtime::WorldTime;
use crate::scene::{SceneDoc, spawn_scene};
use crate::systems::audiofade::audio_fade_system;
use crate::systems::feedback::{
    forward_feedback_cmds, poll_feedback_messages, update_feedback_cmds, update_feedback_messages,
};
use crate::systems::socket::{TROUBLE_FADE_SECONDS, power_off, power_on, setup_sockets};
use crate::systems::time::update_world_time;
use crate::systems::trigger::{socket_trigger_system, update_trigger_messages};
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Built-in scene used when no scene file is found.
const DEMO_SCENE: &str = include_str!("../assets/scene.json");

/// HydroVR filter socket demo
#[derive(Parser)]
#[command(version, about = "Headless demo of the HydroVR filter socket interaction")]
struct Cli {
    /// Path to the scene JSON document (overrides the config file).
    #[arg(long, value_name = "PATH")]
    scene: Option<PathBuf>,

    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Fixed tick rate override.
    #[arg(long)]
    tick_rate: Option<u32>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => SimConfig::with_path(path),
        None => SimConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults
    if let Some(rate) = cli.tick_rate {
        config.tick_rate = rate;
    }
    if let Some(scene) = cli.scene {
        config.scene_path = scene;
    }
    let dt = config.frame_delta();

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.init_resource::<SceneIndex>();

    // Init the feedback bridge and the socket observers.
    // Both must go before the scene spawn.
    setup_feedback(&mut world);
    setup_sockets(&mut world);

    let doc = match SceneDoc::load_from_file(&config.scene_path) {
        Ok(doc) => doc,
        Err(e) => {
            log::warn!("{}; using built-in demo scene", e);
            SceneDoc::from_json(DEMO_SCENE).expect("built-in demo scene must parse")
        }
    };
    spawn_scene(&mut world, &doc);
    world.insert_resource(config);

    let mut update = Schedule::default();
    update.add_systems((update_trigger_messages, socket_trigger_system).chain());
    update.add_systems(audio_fade_system.after(socket_trigger_system));
    update.add_systems(
        // feedback systems must be together
        (
            update_feedback_cmds,
            forward_feedback_cmds,
            poll_feedback_messages,
            update_feedback_messages,
        )
            .chain()
            .after(audio_fade_system),
    );
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Scripted scenario ---------------
    let socket = world
        .resource::<SceneIndex>()
        .get("main_socket")
        .expect("scene must define a socket named 'main_socket'");
    let filter_colliders: Vec<Entity> = ["fresh_filter/col0", "fresh_filter/col1"]
        .iter()
        .filter_map(|name| world.resource::<SceneIndex>().get(name))
        .collect();

    let problem = power_on(&mut world, socket, false);
    log::info!("power on with empty socket -> {:?}", problem);
    run_frames(&mut world, &mut update, 5, dt);

    log::info!("slotting the fresh filter in");
    for collider in &filter_colliders {
        world
            .resource_mut::<Messages<TriggerEnter>>()
            .write(TriggerEnter {
                socket,
                collider: *collider,
            });
    }
    run_frames(&mut world, &mut update, 5, dt);

    let problem = power_on(&mut world, socket, false);
    log::info!("power on with fresh filter -> {:?}", problem);
    run_frames(&mut world, &mut update, 5, dt);

    log::info!("yanking the filter out under power");
    for collider in &filter_colliders {
        world
            .resource_mut::<Messages<TriggerExit>>()
            .write(TriggerExit {
                socket,
                collider: *collider,
            });
    }
    run_frames(&mut world, &mut update, 5, dt);

    power_off(&mut world, socket);
    log::info!("power off, letting the alarm fade out");
    let fade_frames = (TROUBLE_FADE_SECONDS / dt).ceil() as u32 + 2;
    run_frames(&mut world, &mut update, fade_frames, dt);

    shutdown_feedback(&mut world);
}

/// Advance the world by `frames` fixed-delta frames.
fn run_frames(world: &mut World, update: &mut Schedule, frames: u32, dt: f32) {
    for _ in 0..frames {
        update_world_time(world, dt);
        update.run(world);
        world.clear_trackers(); // Clear changed components for next frame
    }
}
