//! Circle Bounce - randomized circles bouncing around a canvas
//!
//! Core modules:
//! - `sim`: Simulation (circles, motion, reflection, pairwise collisions)
//! - `render`: Drawing surface abstraction (Canvas 2D on web, recording surface natively)
//! - `config`: Scene generation and style parameters
//! - `error`: Crate error type

pub mod config;
pub mod error;
pub mod render;
pub mod sim;

pub use config::SceneConfig;
pub use error::{Error, Result};

/// Scene defaults
pub mod consts {
    /// Id of the canvas element the animation draws onto
    pub const CANVAS_ID: &str = "canvas";
    /// Number of circles spawned at startup
    pub const CIRCLE_COUNT: usize = 10;

    /// Circle radius range (pixels)
    pub const MIN_RADIUS: f32 = 20.0;
    pub const MAX_RADIUS: f32 = 50.0;

    /// Per-frame speed range (pixels/frame)
    pub const MIN_SPEED: f32 = 1.0;
    pub const MAX_SPEED: f32 = 3.0;

    /// Canvas background (light yellow)
    pub const BACKGROUND: &str = "#ff8";
    /// Outline color applied to both circles of an overlapping pair
    pub const COLLISION_COLOR: &str = "#ff0000";
    /// Label font
    pub const LABEL_FONT: &str = "20px Arial";
    /// Outline width (pixels)
    pub const STROKE_WIDTH: f32 = 2.0;

    /// Seed used by the native runner when the config doesn't pin one
    pub const NATIVE_SEED: u64 = 0x5eed;
    /// Frames simulated by the native runner
    pub const NATIVE_FRAMES: u64 = 600;
}
