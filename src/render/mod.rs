//! Rendering module
//!
//! The simulation draws through the [`Surface`] trait. On the web that is a
//! Canvas 2D context; natively (and in tests) a [`RecordingSurface`] keeps the
//! draw commands of the last frame.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use glam::Vec2;

use crate::config::SceneConfig;
use crate::consts::{LABEL_FONT, STROKE_WIDTH};
use crate::sim::Color;

/// A 2D drawing area circles are rendered onto
pub trait Surface {
    /// Drawable size in pixels (width, height)
    fn size(&self) -> Vec2;

    /// Erase everything drawn so far
    fn clear(&mut self);

    /// Outline a circle
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32);

    /// Draw text centered (horizontally and vertically) on `center`
    fn fill_text(&mut self, text: &str, center: Vec2, color: Color, font: &str);
}

/// How circles are drawn
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub label_font: String,
    pub label_color: Color,
    pub stroke_width: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            label_font: LABEL_FONT.to_string(),
            label_color: Color::BLACK,
            stroke_width: STROKE_WIDTH,
        }
    }
}

impl From<&SceneConfig> for Style {
    fn from(config: &SceneConfig) -> Self {
        Self {
            label_font: config.label_font.clone(),
            label_color: Color::BLACK,
            stroke_width: config.stroke_width,
        }
    }
}
