//! Falling bonuses
//!
//! Every bonus waits hidden inside its brick until the brick collapses, then
//! falls straight down at a constant speed until the paddle collects it or it
//! leaves the bottom of the field.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::contact::{Collider, Effect};
use super::level::{BonusKind, CellId};
use crate::bonus_exit_y;
use crate::tuning::Tuning;

/// Bonus lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusState {
    /// Hidden in its brick, not simulated
    Dormant,
    /// Active and descending
    Falling,
    /// Collected or missed; kept until the level is swept
    Spent,
}

/// A bonus entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bonus {
    pub cell: CellId,
    pub pos: Vec3,
    kind: BonusKind,
    state: BonusState,
    /// Fall speed for the next physics step
    fall_speed: f32,
}

impl Bonus {
    pub fn new(cell: CellId, kind: BonusKind, pos: Vec3, fall_speed: f32) -> Self {
        Self {
            cell,
            pos,
            kind,
            state: BonusState::Dormant,
            fall_speed,
        }
    }

    #[inline]
    pub fn kind(&self) -> BonusKind {
        self.kind
    }

    #[inline]
    pub fn state(&self) -> BonusState {
        self.state
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == BonusState::Falling
    }

    #[inline]
    pub fn fall_speed(&self) -> f32 {
        self.fall_speed
    }

    /// Start falling; only a dormant bonus can be armed
    pub fn arm(&mut self) -> bool {
        if self.state != BonusState::Dormant {
            return false;
        }
        self.state = BonusState::Falling;
        true
    }

    pub fn deactivate(&mut self) {
        self.state = BonusState::Spent;
    }

    /// Physics step: descend, then restore nominal speed for the next step.
    /// Returns true when the bonus just left the bottom of the field.
    pub fn fixed_update(&mut self, dt: f32, tuning: &Tuning) -> bool {
        if !self.is_active() {
            return false;
        }
        self.pos.y -= self.fall_speed * dt;
        self.fall_speed = tuning.bonus_speed;
        if self.pos.y < bonus_exit_y(tuning.field_height) {
            self.deactivate();
            return true;
        }
        false
    }

    /// React to a contact; `nominal_speed` is the undisturbed fall speed
    pub fn on_contact(&mut self, other: &Collider, nominal_speed: f32) -> Option<Effect> {
        if !self.is_active() {
            return None;
        }
        match other {
            Collider::Paddle => {
                self.deactivate();
                None
            }
            // Soft separation: the lower of two overlapping bonuses slows down
            Collider::Bonus { y, .. } if *y > self.pos.y => {
                self.fall_speed = 0.5 * nominal_speed;
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BONUS_SPEED;

    fn bonus(y: f32) -> Bonus {
        Bonus::new(CellId(1), BonusKind::Points500, Vec3::new(0.0, y, 0.0), BONUS_SPEED)
    }

    #[test]
    fn test_dormant_until_armed() {
        let tuning = Tuning::default();
        let mut bonus = bonus(0.5);
        assert!(!bonus.fixed_update(1.0, &tuning));
        assert_eq!(bonus.pos.y, 0.5);

        assert!(bonus.arm());
        assert!(!bonus.arm());
        bonus.fixed_update(1.0, &tuning);
        assert!((bonus.pos.y - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_missed_below_field() {
        let tuning = Tuning::default();
        let mut bonus = bonus(-1.49);
        bonus.arm();
        assert!(bonus.fixed_update(0.1, &tuning));
        assert_eq!(bonus.state(), BonusState::Spent);
        assert!(!bonus.fixed_update(0.1, &tuning));
    }

    #[test]
    fn test_lower_bonus_halves_for_one_step() {
        let tuning = Tuning::default();
        let mut lower = bonus(0.0);
        lower.arm();
        let above = Collider::Bonus {
            cell: CellId(2),
            kind: BonusKind::ShrinkPaddle,
            y: 0.05,
        };
        lower.on_contact(&above, BONUS_SPEED);
        assert_eq!(lower.fall_speed(), 0.5 * BONUS_SPEED);

        lower.fixed_update(1.0, &tuning);
        assert!((lower.pos.y + 0.1).abs() < 1e-6);
        assert_eq!(lower.fall_speed(), BONUS_SPEED);
    }

    #[test]
    fn test_upper_bonus_keeps_speed() {
        let mut upper = bonus(0.05);
        upper.arm();
        let below = Collider::Bonus {
            cell: CellId(2),
            kind: BonusKind::ShrinkPaddle,
            y: 0.0,
        };
        upper.on_contact(&below, BONUS_SPEED);
        assert_eq!(upper.fall_speed(), BONUS_SPEED);
    }

    #[test]
    fn test_paddle_contact_spends() {
        let mut bonus = bonus(-0.9);
        bonus.arm();
        bonus.on_contact(&Collider::Paddle, BONUS_SPEED);
        assert!(!bonus.is_active());
        assert_eq!(bonus.state(), BonusState::Spent);
    }
}
