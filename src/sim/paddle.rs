//! The player's paddle
//!
//! Input only sets a target; the paddle glides toward it at a bounded speed
//! and glides its width toward the size picked by shrink/extend bonuses.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::bounds::Aabb;
use super::contact::{Collider, Effect};
use super::level::BonusKind;
use crate::consts::{PADDLE_SCALE_BASE, PADDLE_SCALE_MAX, PADDLE_SCALE_MIN};
use crate::tuning::Tuning;
use crate::{approach, paddle_target_scale};

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec3,
    /// Visual x-scale
    pub scale: f32,
    /// Desired horizontal position
    target_x: f32,
    /// Size step in `[PADDLE_SCALE_MIN, PADDLE_SCALE_MAX]`
    scale_level: u8,
    /// Points from collected bonuses, drained by the orchestrator
    scores: u32,
    /// Model bounds at scale 1.0
    bounds: Aabb,
}

impl Paddle {
    pub fn new(pos: Vec3, bounds: Aabb) -> Self {
        Self {
            pos,
            scale: paddle_target_scale(PADDLE_SCALE_BASE),
            target_x: pos.x,
            scale_level: PADDLE_SCALE_BASE,
            scores: 0,
            bounds,
        }
    }

    #[inline]
    pub fn target_x(&self) -> f32 {
        self.target_x
    }

    #[inline]
    pub fn scale_level(&self) -> u8 {
        self.scale_level
    }

    /// Half-width at the current visual scale
    #[inline]
    pub fn half_width(&self) -> f32 {
        self.bounds.max.x * self.scale
    }

    pub fn move_paddle(&mut self, target_x: f32) {
        self.target_x = target_x;
    }

    /// Frame step: keep the target inside the field, then glide position and scale
    pub fn update(&mut self, dt: f32, tuning: &Tuning) {
        let half_field = 0.5 * tuning.field_width;
        let half_width = self.half_width();
        // An oversized paddle pins to the right edge
        self.target_x = self
            .target_x
            .max(-half_field + half_width)
            .min(half_field - half_width);

        self.pos.x = approach(self.pos.x, self.target_x, dt * tuning.paddle_speed);
        self.scale = approach(
            self.scale,
            paddle_target_scale(self.scale_level),
            dt * tuning.paddle_scale_speed,
        );
    }

    /// Back to baseline size, without gliding
    pub fn reset_scale(&mut self) {
        self.scale_level = PADDLE_SCALE_BASE;
        self.scale = paddle_target_scale(self.scale_level);
    }

    /// Apply a collected bonus
    pub fn collect(&mut self, kind: BonusKind) {
        match kind {
            BonusKind::ShrinkPaddle => {
                if self.scale_level > PADDLE_SCALE_MIN {
                    self.scale_level -= 1;
                }
            }
            BonusKind::ExtendPaddle => {
                if self.scale_level < PADDLE_SCALE_MAX {
                    self.scale_level += 1;
                }
            }
            _ => self.scores += kind.points(),
        }
    }

    /// Drain accumulated bonus points
    pub fn take_scores(&mut self) -> u32 {
        std::mem::take(&mut self.scores)
    }

    pub fn on_contact(&mut self, other: &Collider) -> Option<Effect> {
        match *other {
            Collider::Bonus { cell, kind, .. } => {
                self.collect(kind);
                Some(Effect::BonusCollected { cell, kind })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{PADDLE_START, SIM_DT};
    use crate::sim::level::CellId;
    use proptest::prelude::*;

    fn paddle() -> Paddle {
        Paddle::new(
            PADDLE_START,
            Aabb::from_half_extents(Vec3::new(0.15, 0.025, 0.025)),
        )
    }

    #[test]
    fn test_extend_twice_shrink_once() {
        let mut paddle = paddle();
        paddle.collect(BonusKind::ExtendPaddle);
        paddle.collect(BonusKind::ExtendPaddle);
        paddle.collect(BonusKind::ShrinkPaddle);
        assert_eq!(paddle.scale_level(), 2);
    }

    #[test]
    fn test_point_bonuses_drain_once() {
        let mut paddle = paddle();
        paddle.collect(BonusKind::Points100);
        paddle.collect(BonusKind::Points10000);
        assert_eq!(paddle.take_scores(), 10100);
        assert_eq!(paddle.take_scores(), 0);
    }

    #[test]
    fn test_moves_at_bounded_speed() {
        let tuning = Tuning::default();
        let mut paddle = paddle();
        paddle.move_paddle(0.5);
        paddle.update(0.01, &tuning);
        assert!((paddle.pos.x - 0.1).abs() < 1e-6);
        for _ in 0..10 {
            paddle.update(0.01, &tuning);
        }
        assert!((paddle.pos.x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_target_kept_inside_field() {
        let tuning = Tuning::default();
        let mut paddle = paddle();
        paddle.move_paddle(5.0);
        paddle.update(SIM_DT, &tuning);
        assert!((paddle.target_x() - (1.0 - 0.15)).abs() < 1e-6);

        paddle.move_paddle(-5.0);
        paddle.update(SIM_DT, &tuning);
        assert!((paddle.target_x() + (1.0 - 0.15)).abs() < 1e-6);
    }

    #[test]
    fn test_scale_glides_and_resets_instantly() {
        let tuning = Tuning::default();
        let mut paddle = paddle();
        paddle.collect(BonusKind::ExtendPaddle);
        paddle.update(0.1, &tuning);
        assert!((paddle.scale - 1.1).abs() < 1e-6);
        paddle.update(1.0, &tuning);
        assert!((paddle.scale - 1.25).abs() < 1e-6);

        paddle.reset_scale();
        assert_eq!(paddle.scale_level(), 1);
        assert_eq!(paddle.scale, 1.0);
    }

    #[test]
    fn test_bonus_contact_collects() {
        let mut paddle = paddle();
        let effect = paddle.on_contact(&Collider::Bonus {
            cell: CellId(7),
            kind: BonusKind::Points200,
            y: -0.9,
        });
        assert_eq!(
            effect,
            Some(Effect::BonusCollected {
                cell: CellId(7),
                kind: BonusKind::Points200
            })
        );
        assert_eq!(paddle.take_scores(), 200);
        assert_eq!(paddle.on_contact(&Collider::Ball), None);
    }

    proptest! {
        #[test]
        fn prop_scale_level_stays_in_range(extends in proptest::collection::vec(any::<bool>(), 0..64)) {
            let mut paddle = paddle();
            for extend in extends {
                paddle.collect(if extend { BonusKind::ExtendPaddle } else { BonusKind::ShrinkPaddle });
                prop_assert!(paddle.scale_level() <= PADDLE_SCALE_MAX);
            }
        }
    }
}
