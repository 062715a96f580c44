//! Sound cues
//!
//! The rules never play audio themselves. They emit a [`SoundEffect`] in the
//! tick outbox and the host's audio system plays the named resource as a
//! fire-and-forget, non-positional source.

use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Ball hits a brick or the paddle
    BallHit,
}

impl SoundEffect {
    /// Resource path of the sound file
    pub fn asset(&self) -> &'static str {
        match self {
            SoundEffect::BallHit => "Sounds/PlayerFistHit.wav",
        }
    }

    /// Playback gain, kept below 1.0 so music underneath doesn't clip
    pub fn gain(&self) -> f32 {
        match self {
            SoundEffect::BallHit => 0.75,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_hit_cue() {
        assert_eq!(SoundEffect::BallHit.asset(), "Sounds/PlayerFistHit.wav");
        assert!(SoundEffect::BallHit.gain() < 1.0);
    }
}
