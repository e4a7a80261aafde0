//! Audio fade system.
//!
//! Drives every [`AudioFade`](crate::components::audiofade::AudioFade) in the
//! world once per frame: the accumulator advances by the frame delta and the
//! channel volume is interpolated linearly from 1.0 down to 0.0. When the
//! accumulator reaches the duration the channel is set to exactly 0.0,
//! playback is stopped, and the component is removed.

use bevy_ecs::prelude::*;

use crate::components::audiofade::AudioFade;
use crate::events::feedback::FeedbackCmd;
use crate::resources::worldtime::WorldTime;

/// Linearly interpolate between two floats.
pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Advance active fades and emit volume commands for the host.
pub fn audio_fade_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut AudioFade)>,
    mut writer: MessageWriter<FeedbackCmd>,
    mut commands: Commands,
) {
    let dt = world_time.delta.max(0.0);
    for (entity, mut fade) in query.iter_mut() {
        fade.elapsed += dt;
        if fade.elapsed >= fade.duration {
            writer.write(FeedbackCmd::SetVolume {
                id: fade.channel.clone(),
                vol: 0.0,
            });
            writer.write(FeedbackCmd::StopAudio {
                id: fade.channel.clone(),
            });
            commands.entity(entity).remove::<AudioFade>();
        } else {
            let vol = lerp_f32(1.0, 0.0, fade.elapsed / fade.duration);
            writer.write(FeedbackCmd::SetVolume {
                id: fade.channel.clone(),
                vol,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_lerp_f32_basic() {
        assert!(approx_eq(lerp_f32(1.0, 0.0, 0.0), 1.0));
        assert!(approx_eq(lerp_f32(1.0, 0.0, 0.5), 0.5));
        assert!(approx_eq(lerp_f32(1.0, 0.0, 1.0), 0.0));
    }

    #[test]
    fn test_lerp_f32_quarter_points() {
        assert!(approx_eq(lerp_f32(1.0, 0.0, 0.25), 0.75));
        assert!(approx_eq(lerp_f32(1.0, 0.0, 0.75), 0.25));
    }
}
