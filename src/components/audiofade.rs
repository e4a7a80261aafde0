//! Audio fade component for ramping a channel down to silence.
//!
//! Inserted on a socket entity by [`power_off`](crate::systems::socket::power_off).
//! The [`audio_fade_system`](crate::systems::audiofade::audio_fade_system)
//! advances `elapsed` each frame, lowers the channel volume linearly from 1.0
//! to 0.0, and removes the component once the duration is reached.
//!
//! Inserting a new `AudioFade` replaces one already in flight, so a repeated
//! power-off restarts the fade from full volume instead of racing it.

use bevy_ecs::prelude::Component;

/// Linear volume ramp from 1.0 to 0.0 on a named audio channel.
#[derive(Component, Debug, Clone)]
pub struct AudioFade {
    /// Host audio channel to drive.
    pub channel: String,
    /// Total fade time in seconds.
    pub duration: f32,
    /// Time accumulated so far.
    pub elapsed: f32,
}

impl AudioFade {
    /// Start a fade over `duration` seconds.
    pub fn new(channel: impl Into<String>, duration: f32) -> Self {
        AudioFade {
            channel: channel.into(),
            duration,
            elapsed: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_fade_starts_at_zero_elapsed() {
        let fade = AudioFade::new("socket.alarm", 0.5);
        assert_eq!(fade.channel, "socket.alarm");
        assert!(fade.elapsed.abs() < 1e-6);
        assert!((fade.duration - 0.5).abs() < 1e-6);
    }
}
