//! Bricks
//!
//! A struck brick shrinks away over [`SHRINK_TIME`] and then reports itself
//! collapsed. The orchestrator reads two things from it independently: the
//! one-shot collapse edge (award score, arm the bonus) and the terminal
//! collapsed level (remove the brick).

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::contact::{Collider, Effect};
use super::level::{BrickSkin, CellId};
use crate::consts::{BRICK_SCORES, SHRINK_TIME};

/// Remaining shrink time under which the brick counts as gone
const COLLAPSE_EPSILON: f32 = 1e-6;

/// Brick lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BrickPhase {
    Idle,
    /// Shrinking; `timer` counts down from `SHRINK_TIME`
    Collapsing { timer: f32 },
    Collapsed,
}

/// A brick entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub cell: CellId,
    pub skin: BrickSkin,
    pub pos: Vec3,
    phase: BrickPhase,
    /// Collapse edge not yet read
    edge_pending: bool,
    /// Base score, zeroed once claimed
    scores: u32,
}

impl Brick {
    pub fn new(cell: CellId, skin: BrickSkin, pos: Vec3) -> Self {
        Self {
            cell,
            skin,
            pos,
            phase: BrickPhase::Idle,
            edge_pending: false,
            scores: BRICK_SCORES,
        }
    }

    #[inline]
    pub fn phase(&self) -> BrickPhase {
        self.phase
    }

    /// Seconds of shrinking left (zero when idle or collapsed)
    pub fn shrink_timer(&self) -> f32 {
        match self.phase {
            BrickPhase::Collapsing { timer } => timer,
            _ => 0.0,
        }
    }

    /// Uniform visual scale
    pub fn scale(&self) -> f32 {
        match self.phase {
            BrickPhase::Idle => 1.0,
            BrickPhase::Collapsing { timer } => timer / SHRINK_TIME,
            BrickPhase::Collapsed => 0.0,
        }
    }

    /// Begin collapsing; only an idle brick can be struck
    pub fn strike(&mut self) -> bool {
        if self.phase != BrickPhase::Idle {
            return false;
        }
        self.phase = BrickPhase::Collapsing { timer: SHRINK_TIME };
        self.edge_pending = true;
        true
    }

    /// Frame step: advance the shrink timer
    pub fn update(&mut self, dt: f32) {
        if let BrickPhase::Collapsing { timer } = self.phase {
            let timer = timer - dt.min(timer);
            self.phase = if timer.abs() < COLLAPSE_EPSILON {
                BrickPhase::Collapsed
            } else {
                BrickPhase::Collapsing { timer }
            };
        }
    }

    /// True exactly once after the brick was struck
    pub fn take_collapse_edge(&mut self) -> bool {
        std::mem::take(&mut self.edge_pending)
    }

    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.phase == BrickPhase::Collapsed
    }

    /// Base score the first time it is read after being struck, zero otherwise
    pub fn take_scores(&mut self) -> u32 {
        match self.phase {
            BrickPhase::Idle => 0,
            _ => std::mem::take(&mut self.scores),
        }
    }

    pub fn on_contact(&mut self, other: &Collider) -> Option<Effect> {
        match other {
            Collider::Ball if self.strike() => Some(Effect::BrickStruck(self.cell)),
            _ => None,
        }
    }
}
