//! Arkanoid - brick breaking gameplay rules for a host 3D engine
//!
//! Core modules:
//! - `sim`: Deterministic gameplay rules (ball, paddle, bricks, bonuses, round loop)
//! - `tuning`: Data-driven game balance and host asset bounds
//! - `assets`: Resource names the host loads models/materials by
//! - `audio`: Sound cues emitted by the rules, played by the host
//!
//! Physics integration, collision detection, rendering and input capture
//! belong to the host engine. It reports contacts and body positions in,
//! and consumes the per-tick event outbox.

pub mod assets;
pub mod audio;
pub mod sim;
pub mod tuning;

pub use audio::SoundEffect;
pub use tuning::Tuning;

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// Fixed simulation timestep used by headless drivers
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Field dimensions (centred on the origin)
    pub const FIELD_WIDTH: f32 = 2.0;
    pub const FIELD_HEIGHT: f32 = 2.0;

    /// Ball flight speed
    pub const SPEED_NORMAL: f32 = 1.0;
    /// Debug turbo speed while the ball is in flight
    pub const SPEED_TURBO: f32 = 2.0;
    /// Smallest vertical speed kept when re-normalising flight velocity
    pub const MIN_VERTICAL_SPEED: f32 = 0.05;
    /// Height of the serve offset above the paddle centre
    pub const SERVE_LIFT: f32 = 0.075;

    /// Paddle defaults; the start height scales with the field (see `paddle_start`)
    pub const PADDLE_START: Vec3 = Vec3::new(0.0, -0.9, 0.0);
    pub const PADDLE_SPEED: f32 = 10.0;
    pub const PADDLE_SCALE_SPEED: f32 = 1.0;
    pub const PADDLE_SCALE_MIN: u8 = 0;
    pub const PADDLE_SCALE_BASE: u8 = 1;
    pub const PADDLE_SCALE_MAX: u8 = 4;

    /// Brick defaults
    pub const SHRINK_TIME: f32 = 0.5;
    pub const BRICK_SCORES: u32 = 10;
    /// Fraction of the grid rows filled with bricks (numerator over 16)
    pub const BRICK_ROWS_SIXTEENTHS: i32 = 11;

    /// Bonus fall speed
    pub const BONUS_SPEED: f32 = 0.2;
}

/// Target visual x-scale of the paddle for a scale level
#[inline]
pub fn paddle_target_scale(level: u8) -> f32 {
    0.75 + 0.25 * level as f32
}

/// Move `current` toward `target` by at most `max_delta`, never overshooting
#[inline]
pub fn approach(current: f32, target: f32, max_delta: f32) -> f32 {
    let diff = target - current;
    let delta = max_delta.min(diff.abs());
    current + delta * diff.signum()
}

/// Paddle spawn point for a field of the given height
#[inline]
pub fn paddle_start(field_height: f32) -> Vec3 {
    Vec3::new(0.0, -0.45 * field_height, 0.0)
}

/// Height below which the ball counts as dropped
#[inline]
pub fn ball_loss_y(field_height: f32) -> f32 {
    -0.5 * field_height
}

/// Height below which a falling bonus leaves the field
#[inline]
pub fn bonus_exit_y(field_height: f32) -> f32 {
    -0.75 * field_height
}

/// Serve offset of the ball relative to the paddle centre
#[inline]
pub fn serve_offset(ball_radius: f32) -> Vec3 {
    Vec3::new(0.0, consts::SERVE_LIFT, ball_radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approach_stops_at_target() {
        assert_eq!(approach(0.0, 0.05, 0.1), 0.05);
        assert_eq!(approach(0.0, -1.0, 0.1), -0.1);
        assert_eq!(approach(0.3, 0.3, 0.1), 0.3);
    }

    #[test]
    fn paddle_start_stays_above_loss_line() {
        assert_eq!(paddle_start(consts::FIELD_HEIGHT), consts::PADDLE_START);
        for height in [0.5, 1.0, 1.5, 2.0, 6.0] {
            let serve_y = paddle_start(height).y + consts::SERVE_LIFT;
            assert!(serve_y > ball_loss_y(height));
        }
    }

    #[test]
    fn target_scale_spans_levels() {
        assert_eq!(paddle_target_scale(0), 0.75);
        assert_eq!(paddle_target_scale(1), 1.0);
        assert_eq!(paddle_target_scale(4), 1.75);
    }
}
