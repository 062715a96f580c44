//! Host resources
//!
//! Resource names the host looks models and materials up by, and the
//! model-space bounds the rules size their geometry from.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::sim::{Aabb, BonusKind, BrickSkin};

/// A model plus the material to render it with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelAsset {
    pub model: &'static str,
    pub material: &'static str,
}

pub const BALL: ModelAsset = ModelAsset {
    model: "Models/Ball.mdl",
    material: "Materials/Ball.xml",
};

pub const PADDLE: ModelAsset = ModelAsset {
    model: "Models/Paddle.mdl",
    material: "Materials/Paddle.xml",
};

impl BrickSkin {
    pub fn asset(&self) -> ModelAsset {
        match self {
            BrickSkin::Yellow => ModelAsset {
                model: "Models/Brick_Yellow.mdl",
                material: "Materials/Brick_Yellow.xml",
            },
            BrickSkin::Red => ModelAsset {
                model: "Models/Brick_Red.mdl",
                material: "Materials/Brick_Red.xml",
            },
            BrickSkin::Green => ModelAsset {
                model: "Models/Brick_Green.mdl",
                material: "Materials/Brick_Green.xml",
            },
            BrickSkin::Blue => ModelAsset {
                model: "Models/Brick_Blue.mdl",
                material: "Materials/Brick_Blue.xml",
            },
        }
    }
}

impl BonusKind {
    pub fn asset(&self) -> ModelAsset {
        match self {
            BonusKind::ShrinkPaddle => ModelAsset {
                model: "Models/ShrinkPaddle.mdl",
                material: "Materials/ShrinkPaddle.xml",
            },
            BonusKind::ExtendPaddle => ModelAsset {
                model: "Models/ExtendPaddle.mdl",
                material: "Materials/ExtendPaddle.xml",
            },
            BonusKind::Points100 => ModelAsset {
                model: "Models/Bonus100.mdl",
                material: "Materials/Bonus100.xml",
            },
            BonusKind::Points200 => ModelAsset {
                model: "Models/Bonus200.mdl",
                material: "Materials/Bonus200.xml",
            },
            BonusKind::Points500 => ModelAsset {
                model: "Models/Bonus500.mdl",
                material: "Materials/Bonus500.xml",
            },
            BonusKind::Points1000 => ModelAsset {
                model: "Models/Bonus1000.mdl",
                material: "Materials/Bonus1000.xml",
            },
            BonusKind::Points2000 => ModelAsset {
                model: "Models/Bonus2000.mdl",
                material: "Materials/Bonus2000.xml",
            },
            BonusKind::Points5000 => ModelAsset {
                model: "Models/Bonus5000.mdl",
                material: "Materials/Bonus5000.xml",
            },
            BonusKind::Points10000 => ModelAsset {
                model: "Models/Bonus10000.mdl",
                material: "Materials/Bonus10000.xml",
            },
        }
    }
}

/// Model-space bounds reported by the host for each model the rules measure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetBounds {
    pub ball: Aabb,
    pub paddle: Aabb,
    /// Every brick skin shares one mesh size
    pub brick: Aabb,
}

impl Default for AssetBounds {
    fn default() -> Self {
        Self {
            ball: Aabb::from_half_extents(Vec3::splat(0.03)),
            paddle: Aabb::from_half_extents(Vec3::new(0.15, 0.025, 0.025)),
            brick: Aabb::from_half_extents(Vec3::new(0.125, 0.0625, 0.05)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_bonus_has_distinct_model() {
        let mut models: Vec<_> = BonusKind::ALL.iter().map(|k| k.asset().model).collect();
        models.sort_unstable();
        models.dedup();
        assert_eq!(models.len(), BonusKind::ALL.len());
    }

    #[test]
    fn test_skin_material_matches_model() {
        for skin in BrickSkin::ALL {
            let asset = skin.asset();
            let colour = asset.model.trim_start_matches("Models/").trim_end_matches(".mdl");
            assert!(asset.material.contains(colour));
        }
    }
}
