//! Canvas 2D surface (web only)

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::Surface;
use crate::error::{Error, Result};
use crate::sim::Color;

/// Draws onto an HTML canvas through its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    size: Vec2,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| Error::Canvas(format!("{e:?}")))?
            .ok_or_else(|| Error::Canvas("no 2d context".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| Error::Canvas("not a 2d context".to_string()))?;

        let size = Vec2::new(canvas.width() as f32, canvas.height() as f32);
        Ok(Self { canvas, ctx, size })
    }

    /// Size the canvas backing store to the full viewport
    pub fn fit_to_viewport(&mut self, window: &Window) {
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(self.size.x as f64);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(self.size.y as f64);

        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.size = Vec2::new(width as f32, height as f32);
    }

    /// Set the CSS background shown behind the cleared canvas
    pub fn set_background(&self, css_color: &str) {
        let _ = self.canvas.style().set_property("background", css_color);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.size.x as f64, self.size.y as f64);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(line_width as f64);
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.stroke();
        self.ctx.close_path();
    }

    fn fill_text(&mut self, text: &str, center: Vec2, color: Color, font: &str) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_font(font);
        let _ = self.ctx.fill_text(text, center.x as f64, center.y as f64);
    }
}
