//! Game events
//!
//! The per-tick outbox. Everything that happened during a tick is published
//! here in order; the host consumes the list once (play sounds, remove nodes,
//! refresh the score text) and discards it.

use serde::{Deserialize, Serialize};

use super::level::{BonusKind, CellId};
use crate::audio::SoundEffect;

/// Where awarded points came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreSource {
    Brick(CellId),
    /// Point bonuses collected by the paddle this tick
    Bonus,
}

/// An entity the host should destroy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entity {
    Brick(CellId),
    Bonus(CellId),
}

/// Game event data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Sound(SoundEffect),
    /// A brick started collapsing
    BrickStruck { cell: CellId },
    ScoreAwarded { points: u32, source: ScoreSource },
    /// A bonus was released by its collapsing brick
    BonusArmed { cell: CellId, kind: BonusKind },
    BonusCollected { cell: CellId, kind: BonusKind },
    /// A bonus fell out of the field
    BonusMissed { cell: CellId },
    EntityRemoved(Entity),
    BallLaunched,
    /// Ball dropped below the field and went back to the paddle
    BallLost,
    RoundCleared { level: u32 },
    LevelGenerated { level: u32, bricks: usize },
    Paused,
    Resumed,
}
