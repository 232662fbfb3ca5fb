//! 2D canvas drawing surface

use glam::DVec2;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{DrawMode, Surface};
use crate::settings::Colour;

/// `Surface` backed by a canvas 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    pub size: (f64, f64),
}

impl CanvasSurface {
    /// Size the canvas to its client area and grab the 2D context
    pub fn new(canvas: &HtmlCanvasElement, line_width: f64) -> Result<Self, JsValue> {
        let width = canvas.client_width().max(0) as u32;
        let height = canvas.client_height().max(0) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;
        ctx.set_line_width(line_width);

        Ok(Self {
            ctx,
            size: (width as f64, height as f64),
        })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.size.0, self.size.1);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_arc(
        &mut self,
        center: DVec2,
        radius: f64,
        start: f64,
        end: f64,
        colour: &Colour,
        mode: DrawMode,
        opacity: f64,
    ) {
        self.ctx.begin_path();
        // Negative radius throws; nothing to draw then
        if self.ctx.arc(center.x, center.y, radius, start, end).is_err() {
            return;
        }

        self.ctx.set_global_alpha(opacity.clamp(0.0, 1.0));
        match mode {
            DrawMode::Stroke => {
                self.ctx.set_stroke_style_str(colour.as_str());
                self.ctx.stroke();
            }
            DrawMode::Fill => {
                self.ctx.set_fill_style_str(colour.as_str());
                self.ctx.fill();
            }
        }
    }
}
