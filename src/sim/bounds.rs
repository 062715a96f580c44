//! Axis-aligned bounds of host visual meshes
//!
//! The host reports the bounding box of each loaded model. Geometry the rules
//! need (ball radius, paddle half-width, brick grid pitch) is derived from it.
//! A missing model shows up as zero or inverted bounds and simply yields zero
//! sizes.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in model space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for Aabb {
    fn default() -> Self {
        Self {
            min: Vec3::ZERO,
            max: Vec3::ZERO,
        }
    }
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box centred on the origin with the given half extents
    pub fn from_half_extents(half: Vec3) -> Self {
        Self {
            min: -half,
            max: half,
        }
    }

    /// Edge lengths, clamped to zero for inverted boxes
    #[inline]
    pub fn size(&self) -> Vec3 {
        (self.max - self.min).max(Vec3::ZERO)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size().x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size().y
    }

    /// Length of the box diagonal
    #[inline]
    pub fn diagonal(&self) -> f32 {
        self.size().length()
    }

    /// True if the box has no area in the x/y plane
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Radius of the sphere inscribed in a cube with this diagonal
    pub fn inscribed_radius(&self) -> f32 {
        self.diagonal() * 0.5 / 3.0_f32.sqrt()
    }
}
