//! Impact scheduling
//!
//! A dot hits the base line every half turn. Impact times are computed ahead
//! of time from the start timestamp, so they never drift with frame timing.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::arc::ArcRing;
use crate::Millis;

/// Time of the impact following `current` for an arc at `velocity` rad/s
#[inline]
pub fn next_impact_time(current: Millis, velocity: f64) -> Millis {
    current + (PI / velocity) * 1000.0
}

/// An arc's dot reached the base line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactEvent {
    pub arc_index: usize,
    /// Scheduled time of the impact (not the frame time it was noticed at)
    pub at: Millis,
}

impl ArcRing {
    /// Advance the schedule by one step if `now` has reached the next impact.
    ///
    /// Only one step is taken per call; missed impacts are caught up over
    /// later frames.
    pub fn check_impact(&mut self, now: Millis) -> Option<ImpactEvent> {
        if now < self.next_impact {
            return None;
        }

        let at = self.next_impact;
        self.last_impact = Some(at);
        self.next_impact = next_impact_time(at, self.velocity);

        Some(ImpactEvent {
            arc_index: self.index,
            at,
        })
    }
}
