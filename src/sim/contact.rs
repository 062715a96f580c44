//! Typed collision contacts
//!
//! The host physics world reports touching body pairs as [`Contact`]s. The
//! orchestrator resolves each body into a [`Collider`] (dropping bodies that
//! are gone or disabled) and hands every participant the other side. Entity
//! handlers return at most one [`Effect`] for the orchestrator to publish.

use serde::{Deserialize, Serialize};

use super::level::{BonusKind, CellId};
use crate::audio::SoundEffect;

/// Host-facing identity of a physics body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyId {
    Ball,
    Paddle,
    Brick(CellId),
    Bonus(CellId),
    /// Field borders, floor and ceiling planes
    Field,
}

/// A touching pair reported by the host for this step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub a: BodyId,
    pub b: BodyId,
}

impl Contact {
    pub fn new(a: BodyId, b: BodyId) -> Self {
        Self { a, b }
    }
}

/// The other party of a contact, as seen by an entity handler
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Collider {
    Ball,
    Paddle,
    Brick(CellId),
    /// Only falling bonuses are ever resolved
    Bonus { cell: CellId, kind: BonusKind, y: f32 },
    Field,
}

/// Side effect produced by an entity reacting to a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Sound(SoundEffect),
    BrickStruck(CellId),
    BonusCollected { cell: CellId, kind: BonusKind },
}
