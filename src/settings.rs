//! Animation settings
//!
//! `Settings` is derived once from the canvas size and never recomputed.
//! The two fields that change at runtime live in `RuntimeState`.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::Millis;
use crate::consts::*;

/// Errors for settings that the motion model cannot work with
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Canvas width or height is not finite
    #[error("Invalid canvas size: {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },

    /// Radius spacing divides by `number_of_arcs - 2`
    #[error("At least 3 arcs are required, got {0}")]
    TooFewArcs(usize),

    /// The outermost arc would have a velocity <= 0
    #[error("{loops} loops cannot drive {arcs} arcs (need loops >= arcs)")]
    TooFewLoops { loops: u32, arcs: usize },

    /// Loop or pulse duration is zero or negative
    #[error("Duration must be positive: {0}")]
    InvalidDuration(f64),
}

/// Placement of the animation on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Vertical position of the base line (0 = top, 1 = bottom)
    pub line_y_fraction: f64,
    /// Share of the canvas width covered by the base line
    pub line_width_fraction: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            line_y_fraction: LINE_Y_FRACTION,
            line_width_fraction: LINE_WIDTH_FRACTION,
        }
    }
}

/// Opaque colour token handed to the drawing surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colour(String);

impl Colour {
    pub fn new(style: impl Into<String>) -> Self {
        Self(style.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::new(DEFAULT_COLOUR)
    }
}

/// Immutable animation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === Geometry ===
    pub line_start: DVec2,
    pub line_end: DVec2,
    pub circle_center: DVec2,
    pub line_length: f64,
    pub center_arc_radius: f64,
    pub moving_dot_radius: f64,

    // === Timing ===
    /// Timestamp every elapsed-time and impact calculation is measured from
    pub start_time: Millis,
    pub number_of_arcs: usize,
    pub loops: u32,
    pub loop_time_secs: f64,
    pub pulse_duration_ms: f64,
}

impl Settings {
    /// Derive settings for a canvas of the given size
    pub fn from_canvas(
        width: f64,
        height: f64,
        layout: Layout,
        start_time: Millis,
    ) -> Result<Self, ConfigError> {
        let line_y = height * layout.line_y_fraction;
        let start_x = width * ((1.0 - layout.line_width_fraction) / 2.0);
        let end_x = width * ((1.0 + layout.line_width_fraction) / 2.0);

        let settings = Self {
            line_start: DVec2::new(start_x, line_y),
            line_end: DVec2::new(end_x, line_y),
            circle_center: DVec2::new(width / 2.0, line_y),
            line_length: end_x - start_x,
            center_arc_radius: CENTER_ARC_RADIUS,
            moving_dot_radius: MOVING_DOT_RADIUS,
            start_time,
            number_of_arcs: NUMBER_OF_ARCS,
            loops: LOOPS,
            loop_time_secs: LOOP_TIME_SECS,
            pulse_duration_ms: PULSE_DURATION_MS,
        };

        if !(width.is_finite() && height.is_finite()) {
            return Err(ConfigError::InvalidCanvas { width, height });
        }
        settings.validate()?;

        if width <= 0.0 || height <= 0.0 {
            log::warn!("Canvas has no area yet: {width}x{height}");
        }

        if settings.half_line_length() <= settings.center_arc_radius {
            log::warn!(
                "Canvas too narrow: half line {:.1} <= centre arc radius {:.1}",
                settings.half_line_length(),
                settings.center_arc_radius
            );
        }

        log::info!(
            "Settings: centre ({:.1}, {:.1}), line length {:.1}, {} arcs",
            settings.circle_center.x,
            settings.circle_center.y,
            settings.line_length,
            settings.number_of_arcs
        );
        Ok(settings)
    }

    /// Check the preconditions the motion model relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.number_of_arcs < 3 {
            return Err(ConfigError::TooFewArcs(self.number_of_arcs));
        }
        if (self.loops as usize) < self.number_of_arcs {
            return Err(ConfigError::TooFewLoops {
                loops: self.loops,
                arcs: self.number_of_arcs,
            });
        }
        for duration in [self.loop_time_secs, self.pulse_duration_ms] {
            if duration.is_nan() || duration <= 0.0 {
                return Err(ConfigError::InvalidDuration(duration));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn half_line_length(&self) -> f64 {
        self.line_length / 2.0
    }

    /// Seconds elapsed since `start_time`
    #[inline]
    pub fn elapsed_secs(&self, now: Millis) -> f64 {
        (now - self.start_time) / 1000.0
    }
}

/// State that user input may change while the loop runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeState {
    pub sound_enabled: bool,
    pub colour: Colour,
}

impl Default for RuntimeState {
    fn default() -> Self {
        Self {
            sound_enabled: false,
            colour: Colour::default(),
        }
    }
}

impl RuntimeState {
    /// Flip the sound flag, or set it when `enabled` is given. Returns the new value.
    pub fn toggle_sound(&mut self, enabled: Option<bool>) -> bool {
        self.sound_enabled = enabled.unwrap_or(!self.sound_enabled);
        self.sound_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings::from_canvas(1000.0, 500.0, Layout::default(), 0.0).unwrap()
    }

    #[test]
    fn test_geometry_from_canvas() {
        let s = settings();
        assert!((s.line_start.x - 50.0).abs() < 1e-9);
        assert!((s.line_end.x - 950.0).abs() < 1e-9);
        assert!((s.line_start.y - 300.0).abs() < 1e-9);
        assert_eq!(s.circle_center, DVec2::new(500.0, 300.0));
        assert!((s.line_length - 900.0).abs() < 1e-9);
        assert!((s.half_line_length() - 450.0).abs() < 1e-9);
    }

    #[test]
    fn test_elapsed_secs() {
        let s = Settings::from_canvas(800.0, 600.0, Layout::default(), 5_000.0).unwrap();
        assert!((s.elapsed_secs(7_500.0) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_size_canvas_builds_settings() {
        let s = Settings::from_canvas(0.0, 0.0, Layout::default(), 0.0).unwrap();
        assert_eq!(s.circle_center, DVec2::ZERO);
        assert_eq!(s.line_length, 0.0);
        assert_eq!(s.number_of_arcs, NUMBER_OF_ARCS);
    }

    #[test]
    fn test_non_finite_canvas_rejected() {
        let err = Settings::from_canvas(f64::NAN, 600.0, Layout::default(), 0.0).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCanvas { .. }));
    }

    #[test]
    fn test_validate_arc_and_loop_counts() {
        let mut s = settings();
        s.number_of_arcs = 2;
        assert_eq!(s.validate(), Err(ConfigError::TooFewArcs(2)));

        let mut s = settings();
        s.loops = 10;
        assert_eq!(
            s.validate(),
            Err(ConfigError::TooFewLoops { loops: 10, arcs: 15 })
        );

        let mut s = settings();
        s.pulse_duration_ms = 0.0;
        assert_eq!(s.validate(), Err(ConfigError::InvalidDuration(0.0)));
    }

    #[test]
    fn test_toggle_sound_twice_restores_state() {
        let mut runtime = RuntimeState::default();
        assert!(!runtime.sound_enabled);
        assert!(runtime.toggle_sound(None));
        assert!(!runtime.toggle_sound(None));
        assert_eq!(runtime, RuntimeState::default());
    }

    #[test]
    fn test_toggle_sound_explicit() {
        let mut runtime = RuntimeState::default();
        assert!(runtime.toggle_sound(Some(true)));
        assert!(runtime.toggle_sound(Some(true)));
        assert!(!runtime.toggle_sound(Some(false)));
    }
}
