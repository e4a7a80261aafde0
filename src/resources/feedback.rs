//! ECS resources that bridge the main thread with the host feedback thread.
//!
//! Use [`setup_feedback`] once during initialization to spawn the feedback
//! thread and insert the [`FeedbackBridge`] and message queue resources. Call
//! [`shutdown_feedback`] during teardown to gracefully stop the thread.

use crate::events::feedback::{FeedbackCmd, FeedbackMessage};
use crate::systems::feedback::feedback_thread;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

/// Shared bridge between the ECS world and the feedback thread.
///
/// This resource is created by [`setup_feedback`]. Systems send commands via
/// [`FeedbackBridge::tx_cmd`] and poll for acknowledgements via
/// [`FeedbackBridge::rx_msg`].
#[derive(Resource)]
pub struct FeedbackBridge {
    /// Sender for [`FeedbackCmd`] messages (ECS -> feedback thread).
    pub tx_cmd: Sender<FeedbackCmd>,
    /// Receiver for [`FeedbackMessage`] messages (feedback thread -> ECS).
    pub rx_msg: Receiver<FeedbackMessage>,
    /// Join handle for the background feedback thread.
    pub handle: std::thread::JoinHandle<()>,
}

/// Spawn the feedback thread and register bridge resources.
///
/// This function:
/// - Creates command/acknowledgement channels.
/// - Spawns the background thread running [`feedback_thread`].
/// - Inserts [`FeedbackBridge`] and initializes the `Messages` queues so
///   systems can send commands and poll for acknowledgements.
pub fn setup_feedback(world: &mut World) {
    let (tx_cmd, rx_cmd) = unbounded::<FeedbackCmd>();
    let (tx_msg, rx_msg) = unbounded::<FeedbackMessage>();

    let handle = std::thread::spawn(move || feedback_thread(rx_cmd, tx_msg));

    world.insert_resource(FeedbackBridge {
        tx_cmd,
        rx_msg,
        handle,
    });
    world.insert_resource(Messages::<FeedbackMessage>::default());
    world.insert_resource(Messages::<FeedbackCmd>::default());
}

/// Gracefully request shutdown of the feedback thread and join it.
///
/// If the bridge resource exists, sends [`FeedbackCmd::Shutdown`], waits for
/// the thread to exit, and removes the resource from the world.
pub fn shutdown_feedback(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<FeedbackBridge>() {
        let _ = bridge.tx_cmd.send(FeedbackCmd::Shutdown);
        let _ = bridge.handle.join();
    }
}
