#![allow(dead_code, unused_variables)]

use bevy_ecs::message::Message;

/// Commands sent *to* the host feedback thread.
///
/// Particle semantics follow the host engine: `PlayParticles` restarts the
/// effect from its first frame, `StopParticles` halts emission while letting
/// live particles finish out.
#[derive(Message, Debug, Clone)]
pub enum FeedbackCmd {
    PlayParticles { id: String },
    StopParticles { id: String },
    PlayAudio { id: String },
    StopAudio { id: String },
    SetVolume { id: String, vol: f32 },
    Shutdown,
}

/// Events sent *back* from the host feedback thread.
#[derive(Message, Debug, Clone)]
pub enum FeedbackMessage {
    ParticlesStarted { id: String },
    ParticlesStopped { id: String },
    AudioStarted { id: String },
    AudioStopped { id: String },
    VolumeChanged { id: String, vol: f32 },
}
