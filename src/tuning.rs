//! Data-driven game balance
//!
//! Loaded from a JSON file when one is given; any field left out keeps its
//! default, and an unreadable file falls back to defaults entirely.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::assets::AssetBounds;
use crate::consts::*;

/// Gameplay tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Ball ===
    /// Flight speed
    pub ball_speed: f32,
    /// Debug turbo flight speed
    pub turbo_speed: f32,

    // === Paddle ===
    pub paddle_speed: f32,
    pub paddle_scale_speed: f32,

    // === Bonuses ===
    pub bonus_speed: f32,

    // === Host models ===
    pub assets: AssetBounds,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            ball_speed: SPEED_NORMAL,
            turbo_speed: SPEED_TURBO,

            paddle_speed: PADDLE_SPEED,
            paddle_scale_speed: PADDLE_SCALE_SPEED,

            bonus_speed: BONUS_SPEED,

            assets: AssetBounds::default(),
        }
    }
}

impl Tuning {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load tuning from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Malformed tuning file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "bonus_speed": 0.4, "field_width": 3.0 }"#)
            .expect("valid tuning");
        assert_eq!(tuning.bonus_speed, 0.4);
        assert_eq!(tuning.field_width, 3.0);
        assert_eq!(tuning.paddle_speed, PADDLE_SPEED);
        assert_eq!(tuning.assets.brick.width(), 0.25);
    }

    #[test]
    fn test_nested_bounds_override() {
        let json = r#"{ "assets": { "ball": { "min": [-0.05, -0.05, -0.05], "max": [0.05, 0.05, 0.05] } } }"#;
        let tuning = Tuning::from_json(json).expect("valid tuning");
        assert!((tuning.assets.ball.inscribed_radius() - 0.05).abs() < 1e-6);
        assert_eq!(tuning.assets.paddle.max.x, 0.15);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Tuning::from_json("{ bonus_speed: }").is_err());
    }

    #[test]
    fn test_json_roundtrip_preserves_speeds() {
        let tuning = Tuning::default();
        let json = tuning.to_json().expect("serializable");
        let back = Tuning::from_json(&json).expect("parseable");
        assert_eq!(back.ball_speed, tuning.ball_speed);
        assert_eq!(back.assets.brick, tuning.assets.brick);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let tuning = Tuning::load(Path::new("/nonexistent/arkanoid-tuning.json"));
        assert_eq!(tuning.field_height, FIELD_HEIGHT);
    }
}
