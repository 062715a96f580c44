//! Level layout
//!
//! A level is a grid of cells. Each cell owns its brick and the bonus hidden
//! inside it, so the pair can never fall out of step. The brick is dropped
//! from the cell when it has collapsed; the bonus stays until it is swept.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bonus::Bonus;
use super::brick::Brick;
use crate::consts::BRICK_ROWS_SIXTEENTHS;
use crate::tuning::Tuning;

/// Most bricks along either axis; finer grids count as degenerate
const MAX_GRID_SIDE: i32 = 256;

/// Stable index of a cell within the current level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellId(pub u32);

/// Brick colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrickSkin {
    Yellow,
    Red,
    Green,
    Blue,
}

impl BrickSkin {
    pub const ALL: [BrickSkin; 4] = [
        BrickSkin::Yellow,
        BrickSkin::Red,
        BrickSkin::Green,
        BrickSkin::Blue,
    ];
}

/// Bonus types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusKind {
    ShrinkPaddle,
    ExtendPaddle,
    Points100,
    Points200,
    Points500,
    Points1000,
    Points2000,
    Points5000,
    Points10000,
}

impl BonusKind {
    pub const ALL: [BonusKind; 9] = [
        BonusKind::ShrinkPaddle,
        BonusKind::ExtendPaddle,
        BonusKind::Points100,
        BonusKind::Points200,
        BonusKind::Points500,
        BonusKind::Points1000,
        BonusKind::Points2000,
        BonusKind::Points5000,
        BonusKind::Points10000,
    ];

    /// Score granted on pickup (paddle-size bonuses grant none)
    pub fn points(&self) -> u32 {
        match self {
            BonusKind::ShrinkPaddle | BonusKind::ExtendPaddle => 0,
            BonusKind::Points100 => 100,
            BonusKind::Points200 => 200,
            BonusKind::Points500 => 500,
            BonusKind::Points1000 => 1000,
            BonusKind::Points2000 => 2000,
            BonusKind::Points5000 => 5000,
            BonusKind::Points10000 => 10000,
        }
    }

    /// Uniform draw over every kind plus "no bonus"
    pub fn roll<R: Rng>(rng: &mut R) -> Option<BonusKind> {
        let index = rng.random_range(0..=Self::ALL.len());
        if index == 0 {
            None
        } else {
            Some(Self::ALL[index - 1])
        }
    }
}

/// One grid cell: a brick and the bonus it releases
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub id: CellId,
    pub brick: Option<Brick>,
    pub bonus: Option<Bonus>,
}

/// Grid dimensions for a brick size: (columns, brick rows)
pub fn grid_size(tuning: &Tuning) -> (i32, i32) {
    let bounds = &tuning.assets.brick;
    if bounds.is_degenerate() {
        return (0, 0);
    }
    let count_x = (tuning.field_width / bounds.width()) as i32;
    let count_y = (tuning.field_height / bounds.height()) as i32;
    if count_x > MAX_GRID_SIDE || count_y > MAX_GRID_SIDE {
        return (0, 0);
    }
    (count_x, count_y * BRICK_ROWS_SIXTEENTHS / 16)
}

/// Lay out a fresh level: every cell draws its skin and bonus independently
pub fn generate_level<R: Rng>(rng: &mut R, tuning: &Tuning) -> Vec<Cell> {
    let bounds = &tuning.assets.brick;
    let (columns, rows) = grid_size(tuning);
    if columns <= 0 || rows <= 0 {
        log::warn!("Brick bounds {:?} leave no room for a level", bounds);
        return Vec::new();
    }

    let width = bounds.width();
    let height = bounds.height();
    let count_y = (tuning.field_height / height) as i32;
    let shift_x = 0.5 * width * (columns - 1) as f32;
    let shift_y = 0.5 * height * (count_y - 1) as f32;

    let mut cells = Vec::with_capacity((columns * rows) as usize);
    for j in 0..rows {
        for i in 0..columns {
            let id = CellId(cells.len() as u32);
            let pos = Vec3::new(shift_x - i as f32 * width, shift_y - j as f32 * height, 0.0);
            let skin = BrickSkin::ALL[rng.random_range(0..BrickSkin::ALL.len())];
            let bonus = BonusKind::roll(rng).map(|kind| Bonus::new(id, kind, pos, tuning.bonus_speed));
            cells.push(Cell {
                id,
                brick: Some(Brick::new(id, skin, pos)),
                bonus,
            });
        }
    }
    cells
}
