//! Socket power operations and insert/remove observers.
//!
//! The power operations are world-level functions invoked by gameplay code
//! (a wall switch, a control panel button). They read and mutate the socket
//! directly and queue [`FeedbackCmd`]s for the host feedback thread.
//!
//! The observers react to the select events fired by the trigger system:
//! - [`observe_filter_inserted`] stops leakage particles whenever a filter
//!   docks, powered or not.
//! - [`observe_filter_removed`] starts leakage feedback when a filter is
//!   pulled out of a powered socket.
//!
//! Call [`setup_sockets`] once during initialization to register the
//! observers and the trigger message queues.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::audiofade::AudioFade;
use crate::components::filter::Filter;
use crate::components::socket::{FilterSocket, SocketProblem};
use crate::events::feedback::FeedbackCmd;
use crate::events::select::{SelectEntered, SelectExited};
use crate::events::trigger::{TriggerEnter, TriggerExit};

/// Seconds the trouble audio takes to fade out after a power-off.
pub const TROUBLE_FADE_SECONDS: f32 = 0.5;

/// Register the select observers and trigger message queues.
///
/// Must run before any system that may fire select events.
pub fn setup_sockets(world: &mut World) {
    world.init_resource::<Messages<TriggerEnter>>();
    world.init_resource::<Messages<TriggerExit>>();
    world.add_observer(observe_filter_inserted);
    world.add_observer(observe_filter_removed);
    world.flush();
}

/// Power the socket on, checking the docked filter unless `silent`.
///
/// When not silent: no attachment reports [`SocketProblem::FilterMissing`],
/// a degraded attachment reports [`SocketProblem::FilterInBadCondition`], and
/// any problem restarts the trouble particles and plays the trouble audio at
/// full volume.
///
/// The socket is marked powered in every case, silent or not. A silent call
/// performs no check and returns the problem enum's default variant
/// (`FilterMissing`) even though nothing was evaluated; callers that power on
/// silently must not interpret the returned value.
pub fn power_on(world: &mut World, socket: Entity, silent: bool) -> SocketProblem {
    let mut problem = SocketProblem::default();

    let Some(sock) = world.get::<FilterSocket>(socket) else {
        return problem;
    };
    let attached = sock.attached;
    let handles = sock.handles.clone();

    if !silent {
        if let Some(target) = attached {
            let good = world
                .get::<Filter>(target)
                .map(|f| f.good_condition)
                .unwrap_or(false);
            problem = if good {
                SocketProblem::NoProblem
            } else {
                SocketProblem::FilterInBadCondition
            };
        }

        // Problem feedback
        if problem != SocketProblem::NoProblem {
            log::info!("socket {:?}: power on problem {:?}", socket, problem);
            let mut msgs = world.resource_mut::<Messages<FeedbackCmd>>();
            msgs.write(FeedbackCmd::PlayParticles {
                id: handles.trouble_particles.clone(),
            });
            msgs.write(FeedbackCmd::SetVolume {
                id: handles.trouble_audio.clone(),
                vol: 1.0,
            });
            msgs.write(FeedbackCmd::PlayAudio {
                id: handles.trouble_audio.clone(),
            });
        }
    }

    if let Some(mut sock) = world.get_mut::<FilterSocket>(socket) {
        sock.powered = true;
    }
    problem
}

/// Power the socket off and fade the trouble audio out.
///
/// Both particle effects are halted immediately. The audio is handed to an
/// [`AudioFade`] over [`TROUBLE_FADE_SECONDS`]; inserting the component
/// replaces any fade already in flight, so a repeated power-off restarts the
/// ramp from full volume instead of racing the old one.
pub fn power_off(world: &mut World, socket: Entity) {
    let Some(handles) = world.get::<FilterSocket>(socket).map(|s| s.handles.clone()) else {
        return;
    };

    if let Some(mut sock) = world.get_mut::<FilterSocket>(socket) {
        sock.powered = false;
    }
    log::info!("socket {:?}: power off", socket);

    {
        let mut msgs = world.resource_mut::<Messages<FeedbackCmd>>();
        msgs.write(FeedbackCmd::StopParticles {
            id: handles.trouble_particles.clone(),
        });
        msgs.write(FeedbackCmd::StopParticles {
            id: handles.leakage_particles.clone(),
        });
    }

    world
        .entity_mut(socket)
        .insert(AudioFade::new(handles.trouble_audio, TROUBLE_FADE_SECONDS));
}

/// Observer: a filter docked. Stops leakage particles regardless of power.
pub fn observe_filter_inserted(
    trigger: On<SelectEntered>,
    sockets: Query<&FilterSocket>,
    mut writer: MessageWriter<FeedbackCmd>,
) {
    let Ok(socket) = sockets.get(trigger.event().socket) else {
        return;
    };
    writer.write(FeedbackCmd::StopParticles {
        id: socket.handles.leakage_particles.clone(),
    });
}

/// Observer: a filter undocked. Starts leakage feedback if the socket is
/// still powered; a powered-off socket does nothing.
pub fn observe_filter_removed(
    trigger: On<SelectExited>,
    sockets: Query<&FilterSocket>,
    mut writer: MessageWriter<FeedbackCmd>,
) {
    let Ok(socket) = sockets.get(trigger.event().socket) else {
        return;
    };
    if !socket.powered {
        return;
    }
    log::info!(
        "socket {:?}: filter removed under power, leaking",
        trigger.event().socket
    );
    writer.write(FeedbackCmd::PlayParticles {
        id: socket.handles.leakage_particles.clone(),
    });
    writer.write(FeedbackCmd::SetVolume {
        id: socket.handles.trouble_audio.clone(),
        vol: 1.0,
    });
    writer.write(FeedbackCmd::PlayAudio {
        id: socket.handles.trouble_audio.clone(),
    });
}
