//! Scene configuration
//!
//! Controls only the initial random generation and how circles are drawn.
//! On the web it is read from the canvas element's `data-config` attribute.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::sim::{CollisionPolicy, Color};

/// Parameters for generating and drawing a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    // === Generation ===
    /// Number of circles spawned at startup
    pub circle_count: usize,
    /// Radius range (pixels)
    pub min_radius: f32,
    pub max_radius: f32,
    /// Speed range (pixels/frame, applied to both axes)
    pub min_speed: f32,
    pub max_speed: f32,
    /// Randomize the initial heading instead of always right-and-down
    pub randomize_direction: bool,
    /// Fixed RNG seed (None = time-based on the web)
    pub seed: Option<u64>,

    // === Collisions ===
    pub collision_policy: CollisionPolicy,
    pub collision_color: Color,

    // === Style ===
    /// CSS background of the canvas
    pub background: String,
    pub label_font: String,
    pub stroke_width: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            circle_count: CIRCLE_COUNT,
            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,
            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            randomize_direction: false,
            seed: None,

            collision_policy: CollisionPolicy::default(),
            collision_color: Color::RED,

            background: BACKGROUND.to_string(),
            label_font: LABEL_FONT.to_string(),
            stroke_width: STROKE_WIDTH,
        }
    }
}

impl SceneConfig {
    /// Parse JSON (missing fields take defaults) and validate
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges: radii, speeds and stroke width positive, min <= max
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("min_radius", self.min_radius),
            ("max_radius", self.max_radius),
            ("min_speed", self.min_speed),
            ("max_speed", self.max_speed),
            ("stroke_width", self.stroke_width),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if self.min_radius > self.max_radius {
            return Err(Error::InvalidConfig(format!(
                "min_radius {} exceeds max_radius {}",
                self.min_radius, self.max_radius
            )));
        }
        if self.min_speed > self.max_speed {
            return Err(Error::InvalidConfig(format!(
                "min_speed {} exceeds max_speed {}",
                self.min_speed, self.max_speed
            )));
        }
        Ok(())
    }

    /// Attribute on the canvas element holding JSON overrides
    const CONFIG_ATTRIBUTE: &'static str = "data-config";

    /// Load config from the canvas `data-config` attribute (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(canvas: &web_sys::Element) -> Self {
        if let Some(json) = canvas.get_attribute(Self::CONFIG_ATTRIBUTE) {
            match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded scene config from {}", Self::CONFIG_ATTRIBUTE);
                    return config;
                }
                Err(e) => log::warn!("{}; using defaults", e),
            }
        }

        log::info!("Using default scene config");
        Self::default()
    }

    /// Native runs use the defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        log::debug!("No {} source natively, using defaults", Self::CONFIG_ATTRIBUTE);
        Self::default()
    }
}
