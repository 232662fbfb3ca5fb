//! Rendering module
//!
//! The scene is drawn through the immediate-mode `Surface` trait: clear, then
//! arcs and dots with a colour and opacity.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::draw_frame;

use std::cell::RefCell;
use std::rc::Rc;

use glam::DVec2;

use crate::settings::Colour;

/// Stroke the outline or fill the shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    Stroke,
    Fill,
}

/// A 2D surface that can draw arcs
pub trait Surface {
    /// Clear the whole surface
    fn clear(&mut self);

    /// Draw an arc from `start` to `end` (radians). Opacity is in `[0, 1]`.
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
    );
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Arc {
        center: DVec2,
        radius: f64,
        start: f64,
        end: f64,
        colour: Colour,
        mode: DrawMode,
        opacity: f64,
    },
}

/// Surface that records draw calls instead of rasterizing them
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands issued since the most recent clear
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| *c == DrawCommand::Clear)
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.commands[start..]
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
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
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start,
            end,
            colour: colour.clone(),
            mode,
            opacity,
        });
    }
}

/// Shared surface, so a caller can inspect what the loop drew
impl<S: Surface> Surface for Rc<RefCell<S>> {
    fn clear(&mut self) {
        self.borrow_mut().clear();
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
        self.borrow_mut()
            .draw_arc(center, radius, start, end, colour, mode, opacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_frame_starts_after_clear() {
        let mut surface = RecordingSurface::new();
        let colour = Colour::default();
        surface.draw_arc(DVec2::ZERO, 1.0, 0.0, 1.0, &colour, DrawMode::Fill, 1.0);
        surface.clear();
        surface.draw_arc(DVec2::ZERO, 2.0, 0.0, 1.0, &colour, DrawMode::Stroke, 0.5);

        assert_eq!(surface.commands.len(), 3);
        let frame = surface.last_frame();
        assert_eq!(frame.len(), 1);
        assert!(matches!(frame[0], DrawCommand::Arc { radius, .. } if radius == 2.0));
    }
}
