//! Arc registry
//!
//! Arcs are concentric half circles above the base line. Each one is described by:
//! - radius: distance from the circle centre, growing with the index
//! - velocity: angular speed, shrinking with the index so every arc finishes a
//!   whole number of loops in the shared loop time
//! - last_impact / next_impact: impact schedule in wall-clock milliseconds

use std::f64::consts::{PI, TAU};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::impact::next_impact_time;
use super::oscillator::position_on_arc;
use crate::Millis;
use crate::consts::{ARC_GAP_FACTOR, MAX_ANGLE};
use crate::settings::{Colour, ConfigError, Settings};

/// One oscillating ring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcRing {
    pub index: usize,
    pub radius: f64,
    /// Angular speed (radians/second)
    pub velocity: f64,
    pub colour: Colour,
    /// Most recent impact; `None` until the first one
    pub last_impact: Option<Millis>,
    pub next_impact: Millis,
}

impl ArcRing {
    pub fn new(
        index: usize,
        radius: f64,
        velocity: f64,
        colour: Colour,
        start_time: Millis,
    ) -> Self {
        Self {
            index,
            radius,
            velocity,
            colour,
            last_impact: None,
            next_impact: next_impact_time(start_time, velocity),
        }
    }

    /// Angle trimmed off both stroke ends so neighbouring gaps sit at different heights
    #[inline]
    pub fn gap_offset(&self, center_arc_radius: f64) -> f64 {
        center_arc_radius * ARC_GAP_FACTOR / self.radius
    }

    /// Start and end angle of the stroked arc
    pub fn stroke_span(&self, center_arc_radius: f64) -> (f64, f64) {
        let offset = self.gap_offset(center_arc_radius);
        (PI + offset, MAX_ANGLE - offset)
    }

    /// Left and right points where the dot meets the base line
    pub fn impact_points(&self, center: DVec2, line_y: f64) -> (DVec2, DVec2) {
        (
            DVec2::new(center.x - self.radius, line_y),
            DVec2::new(center.x + self.radius, line_y),
        )
    }

    /// Position of the moving dot at `now`
    pub fn position(&self, settings: &Settings, now: Millis) -> DVec2 {
        position_on_arc(
            settings.circle_center,
            self.radius,
            settings.elapsed_secs(now),
            self.velocity,
        )
    }
}

/// Ordered set of arcs, innermost first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcRegistry {
    arcs: Vec<ArcRing>,
}

impl ArcRegistry {
    /// Build every arc from the settings, rejecting settings that would give
    /// a zero spacing divisor or a non-positive velocity
    pub fn from_settings(settings: &Settings, colour: &Colour) -> Result<Self, ConfigError> {
        settings.validate()?;

        let n = settings.number_of_arcs;
        let spacing =
            (settings.half_line_length() - settings.center_arc_radius) / (n - 2) as f64;

        let arcs = (0..n)
            .map(|index| {
                let radius = settings.center_arc_radius + spacing * index as f64;
                let loops = (settings.loops as usize - index) as f64;
                let velocity = TAU * loops / settings.loop_time_secs;
                ArcRing::new(index, radius, velocity, colour.clone(), settings.start_time)
            })
            .collect();

        Ok(Self { arcs })
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ArcRing> {
        self.arcs.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArcRing> {
        self.arcs.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, ArcRing> {
        self.arcs.iter_mut()
    }
}

impl<'a> IntoIterator for &'a ArcRegistry {
    type Item = &'a ArcRing;
    type IntoIter = std::slice::Iter<'a, ArcRing>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
