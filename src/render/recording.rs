//! Headless surface that records draw calls

use glam::Vec2;

use super::Surface;
use crate::sim::Color;

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
        line_width: f32,
    },
    Text {
        text: String,
        center: Vec2,
        color: Color,
        font: String,
    },
}

/// Surface with no pixels: keeps the commands issued since the last clear
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            commands: Vec::new(),
        }
    }

    /// Commands since (and including) the most recent clear
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Outlined circles of the current frame, in draw order
    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Color)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Circle {
                center,
                radius,
                color,
                ..
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    /// Labels of the current frame, in draw order
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            line_width,
        });
    }

    fn fill_text(&mut self, text: &str, center: Vec2, color: Color, font: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            center,
            color,
            font: font.to_string(),
        });
    }
}
