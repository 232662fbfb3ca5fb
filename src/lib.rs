//! Arc Cradle - a Newton's-cradle style arc oscillator
//!
//! Core modules:
//! - `sim`: Time-driven motion, impact scheduling and pulse decay (no rendering)
//! - `renderer`: Drawing surface abstraction and per-frame scene drawing
//! - `platform`: Clock and frame scheduling (browser/native/manual)
//! - `audio`: Impact observers and clip playback
//! - `cradle`: The render loop orchestrator

pub mod audio;
pub mod cradle;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use cradle::Cradle;
pub use settings::{Colour, ConfigError, Layout, RuntimeState, Settings};

use glam::DVec2;

/// Wall-clock timestamp or duration in milliseconds
pub type Millis = f64;

/// Animation configuration constants
pub mod consts {
    use std::f64::consts::TAU;

    /// Vertical placement of the base line (fraction of canvas height)
    pub const LINE_Y_FRACTION: f64 = 0.6;
    /// Horizontal span of the base line (fraction of canvas width)
    pub const LINE_WIDTH_FRACTION: f64 = 0.9;

    /// Radius of the innermost arc
    pub const CENTER_ARC_RADIUS: f64 = 30.0;
    /// Radius of the moving and impact dots
    pub const MOVING_DOT_RADIUS: f64 = 7.0;
    /// Stroke width used for the arcs
    pub const LINE_WIDTH: f64 = 2.0;

    pub const NUMBER_OF_ARCS: usize = 15;
    /// Full loops completed by the innermost arc within one loop time
    pub const LOOPS: u32 = 30;
    /// Time for every arc to realign (seconds)
    pub const LOOP_TIME_SECS: f64 = 150.0;

    /// Angle the oscillator folds back at
    pub const MAX_ANGLE: f64 = TAU;

    /// Pulse fade after an impact
    pub const PULSE_DURATION_MS: f64 = 2000.0;
    pub const BASE_OPACITY: f64 = 0.15;
    pub const MAX_OPACITY: f64 = 0.8;

    /// Keeps the stroke ends of neighbouring arcs from lining up
    pub const ARC_GAP_FACTOR: f64 = 0.4;

    pub const DEFAULT_COLOUR: &str = "#6b21b6";

    /// Playback volume for impact notes
    pub const SOUND_VOLUME: f64 = 0.15;
}

/// Point on a circle of `radius` around `center` at angle `theta`
#[inline]
pub fn point_on_circle(center: DVec2, radius: f64, theta: f64) -> DVec2 {
    DVec2::new(
        radius * theta.cos() + center.x,
        radius * theta.sin() + center.y,
    )
}
