//! Feedback bridge systems and the host-side feedback thread.
//!
//! This module hosts the background feedback thread and the systems that
//! bridge it with the ECS world:
//! - [`feedback_thread`] runs on its own OS thread, stands in for the host
//!   engine's particle and audio backends, and processes
//!   [`FeedbackCmd`](crate::events::feedback::FeedbackCmd) messages, emitting
//!   [`FeedbackMessage`](crate::events::feedback::FeedbackMessage) responses.
//! - [`forward_feedback_cmds`] sends ECS command messages over the bridge.
//! - [`poll_feedback_messages`] non-blockingly drains the thread's responses
//!   into the ECS message queue each frame.
//! - [`update_feedback_cmds`] / [`update_feedback_messages`] advance the ECS
//!   message queues so writes become readable.
//!
//! The thread keeps no timing of its own; it blocks on the command channel
//! and reacts. Real integrations replace [`feedback_thread`] with the host
//! engine's particle/audio dispatcher behind the same channel pair.
//!
//! See also: [`crate::events::feedback`] and [`crate::resources::feedback`].

use crate::events::feedback::{FeedbackCmd, FeedbackMessage};
use crate::resources::feedback::FeedbackBridge;
use bevy_ecs::prelude::Messages;
use bevy_ecs::prelude::{MessageReader, MessageWriter, Res};
use bevy_ecs::system::ResMut;
use crossbeam_channel::{Receiver, Sender};
use rustc_hash::{FxHashMap, FxHashSet};

/// Drain any pending responses from the feedback thread and enqueue them into
/// the ECS [`Messages<FeedbackMessage>`] mailbox.
///
/// Non-blocking; intended to run each frame on the main thread. It does not
/// mutate world state beyond writing messages.
pub fn poll_feedback_messages(
    bridge: Res<FeedbackBridge>,
    mut writer: MessageWriter<FeedbackMessage>,
) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`FeedbackMessage`].
///
/// Run this after [`poll_feedback_messages`] in your schedule.
pub fn update_feedback_messages(mut msgs: ResMut<Messages<FeedbackMessage>>) {
    msgs.update();
}

/// Forward ECS [`FeedbackCmd`] messages to the feedback thread.
pub fn forward_feedback_cmds(
    bridge: Res<FeedbackBridge>,
    mut reader: MessageReader<FeedbackCmd>,
) {
    for cmd in reader.read() {
        // Forward clone to crossbeam channel; ignore send error on shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for [`FeedbackCmd`] so same-frame readers can
/// observe writes.
pub fn update_feedback_cmds(mut msgs: ResMut<Messages<FeedbackCmd>>) {
    msgs.update();
}

/// Entry point of the host feedback thread.
///
/// Responsibilities:
/// - Track which particle effects are emitting and each audio channel's
///   playing state and volume.
/// - React to [`FeedbackCmd`] inputs and acknowledge with [`FeedbackMessage`]s.
/// - Log every transition so headless runs show the full feedback trace.
///
/// The thread blocks on the command channel; there is nothing to pump between
/// commands. It exits on [`FeedbackCmd::Shutdown`] or when the sending side of
/// the channel is dropped.
pub fn feedback_thread(rx_cmd: Receiver<FeedbackCmd>, tx_msg: Sender<FeedbackMessage>) {
    log::debug!(
        "[feedback] thread starting (id={:?})",
        std::thread::current().id()
    );

    let mut emitting: FxHashSet<String> = FxHashSet::default();
    let mut playing: FxHashSet<String> = FxHashSet::default();
    let mut volumes: FxHashMap<String, f32> = FxHashMap::default();

    for cmd in rx_cmd.iter() {
        match cmd {
            FeedbackCmd::PlayParticles { id } => {
                // Play restarts the effect from its first frame.
                log::info!("[feedback] particles play id='{}'", id);
                emitting.insert(id.clone());
                let _ = tx_msg.send(FeedbackMessage::ParticlesStarted { id });
            }
            FeedbackCmd::StopParticles { id } => {
                log::info!("[feedback] particles stop id='{}'", id);
                emitting.remove(&id);
                let _ = tx_msg.send(FeedbackMessage::ParticlesStopped { id });
            }
            FeedbackCmd::PlayAudio { id } => {
                log::info!("[feedback] audio play id='{}'", id);
                playing.insert(id.clone());
                let _ = tx_msg.send(FeedbackMessage::AudioStarted { id });
            }
            FeedbackCmd::StopAudio { id } => {
                log::info!("[feedback] audio stop id='{}'", id);
                playing.remove(&id);
                let _ = tx_msg.send(FeedbackMessage::AudioStopped { id });
            }
            FeedbackCmd::SetVolume { id, vol } => {
                log::debug!("[feedback] volume id='{}' vol={:.3}", id, vol);
                volumes.insert(id.clone(), vol);
                let _ = tx_msg.send(FeedbackMessage::VolumeChanged { id, vol });
            }
            FeedbackCmd::Shutdown => {
                log::debug!("[feedback] shutdown requested");
                break;
            }
        }
    }

    log::debug!(
        "[feedback] thread exiting (id={:?})",
        std::thread::current().id()
    );
}
