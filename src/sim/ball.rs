//! The ball
//!
//! The host integrates the ball body; the rules keep it on the play plane,
//! park it on the paddle while serving and keep its flight speed constant.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::bounds::Aabb;
use super::contact::{Collider, Effect};
use crate::audio::SoundEffect;
use crate::consts::MIN_VERTICAL_SPEED;
use crate::serve_offset;

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec3,
    pub vel: Vec3,
    pub angular_vel: Vec3,
    radius: f32,
    /// Offset from the paddle centre; zero while in free flight
    offset: Vec3,
    /// Offset restored on every serve
    serve_offset: Vec3,
}

impl Ball {
    /// Create a ball sized from its visual bounds, resting on a paddle at `paddle_pos`
    pub fn from_bounds(bounds: &Aabb, paddle_pos: Vec3) -> Self {
        let radius = bounds.inscribed_radius();
        let offset = serve_offset(radius);
        Self {
            pos: paddle_pos + offset,
            vel: Vec3::ZERO,
            angular_vel: Vec3::ZERO,
            radius,
            offset,
            serve_offset: offset,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Current offset from the paddle (zero in flight)
    #[inline]
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// True while the ball rests on the paddle waiting for launch
    #[inline]
    pub fn is_serving(&self) -> bool {
        self.offset.length_squared() != 0.0
    }

    /// Physics step: pin the depth axis so the ball stays on the play plane
    pub fn fixed_update(&mut self) {
        self.pos.z = self.radius;
    }

    /// Track the paddle while serving
    pub fn follow(&mut self, paddle_pos: Vec3) {
        if self.is_serving() {
            self.pos = paddle_pos + self.offset;
        }
    }

    /// Leave the paddle with an upward impulse (unit mass)
    pub fn launch(&mut self, speed: f32) {
        if self.is_serving() {
            self.offset = Vec3::ZERO;
            self.vel += Vec3::new(0.0, speed, 0.0);
        }
    }

    /// Keep flight speed constant and never let the ball go purely horizontal
    pub fn stabilize_velocity(&mut self, speed: f32) {
        if self.is_serving() {
            return;
        }
        let sign = if self.vel.y == 0.0 { 1.0 } else { self.vel.y.signum() };
        let vel = Vec3::new(
            self.vel.x,
            self.vel.y.abs().max(MIN_VERTICAL_SPEED) * sign,
            0.0,
        );
        self.vel = vel.normalize_or_zero() * speed;
    }

    /// Put the ball back on the paddle, motionless
    pub fn reset_to(&mut self, paddle_pos: Vec3) {
        self.offset = self.serve_offset;
        self.pos = paddle_pos + self.offset;
        self.vel = Vec3::ZERO;
        self.angular_vel = Vec3::ZERO;
    }

    pub fn on_contact(&mut self, other: &Collider) -> Option<Effect> {
        match other {
            Collider::Brick(_) | Collider::Paddle => Some(Effect::Sound(SoundEffect::BallHit)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PADDLE_START;
    use crate::sim::level::CellId;

    fn ball() -> Ball {
        Ball::from_bounds(&Aabb::from_half_extents(Vec3::splat(0.03)), PADDLE_START)
    }

    #[test]
    fn test_serves_from_paddle() {
        let ball = ball();
        assert!(ball.is_serving());
        assert!((ball.radius() - 0.03).abs() < 1e-6);
        assert!((ball.pos.y - (PADDLE_START.y + 0.075)).abs() < 1e-6);
        assert!((ball.pos.z - ball.radius()).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_bounds_zero_radius() {
        let ball = Ball::from_bounds(&Aabb::default(), PADDLE_START);
        assert_eq!(ball.radius(), 0.0);
    }

    #[test]
    fn test_depth_clamped() {
        let mut ball = ball();
        ball.pos.z = 0.4;
        ball.fixed_update();
        assert_eq!(ball.pos.z, ball.radius());
    }

    #[test]
    fn test_launch_clears_offset() {
        let mut ball = ball();
        ball.launch(1.0);
        assert!(!ball.is_serving());
        assert_eq!(ball.vel, Vec3::new(0.0, 1.0, 0.0));

        // Following only applies while serving
        let before = ball.pos;
        ball.follow(Vec3::new(0.5, -0.9, 0.0));
        assert_eq!(ball.pos, before);
    }

    #[test]
    fn test_horizontal_flight_gets_vertical_component() {
        let mut ball = ball();
        ball.launch(1.0);
        ball.vel = Vec3::new(3.0, 0.0, 0.7);
        ball.stabilize_velocity(1.0);
        assert!((ball.vel.length() - 1.0).abs() < 1e-5);
        assert!(ball.vel.y > 0.0);
        assert_eq!(ball.vel.z, 0.0);

        ball.vel = Vec3::new(-2.0, -0.001, 0.0);
        ball.stabilize_velocity(2.0);
        assert!((ball.vel.length() - 2.0).abs() < 1e-5);
        assert!(ball.vel.y < 0.0);
    }

    #[test]
    fn test_reset_restores_serve() {
        let mut ball = ball();
        ball.launch(1.0);
        ball.angular_vel = Vec3::ONE;
        ball.reset_to(PADDLE_START);
        assert!(ball.is_serving());
        assert_eq!(ball.vel, Vec3::ZERO);
        assert_eq!(ball.angular_vel, Vec3::ZERO);
        assert_eq!(ball.offset(), serve_offset(ball.radius()));
    }

    #[test]
    fn test_hit_sound_on_brick_and_paddle_only() {
        let mut ball = ball();
        let hit = Some(Effect::Sound(SoundEffect::BallHit));
        assert_eq!(ball.on_contact(&Collider::Brick(CellId(3))), hit);
        assert_eq!(ball.on_contact(&Collider::Paddle), hit);
        assert_eq!(ball.on_contact(&Collider::Field), None);
    }
}
