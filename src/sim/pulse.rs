//! Opacity pulse after an impact

use serde::{Deserialize, Serialize};

use crate::Millis;
use crate::consts::{BASE_OPACITY, MAX_OPACITY, PULSE_DURATION_MS};

/// Linear fade from `max_opacity` at the impact to `base_opacity` after `duration_ms`
pub fn decay_opacity(
    last_impact: Millis,
    base_opacity: f64,
    max_opacity: f64,
    duration_ms: f64,
    now: Millis,
) -> f64 {
    let elapsed = now - last_impact;
    if elapsed >= duration_ms {
        return base_opacity;
    }
    let fraction = elapsed / duration_ms;
    max_opacity - (max_opacity - base_opacity) * fraction
}

/// Opacity range and fade time for the arc and impact dots
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PulseStyle {
    pub base_opacity: f64,
    pub max_opacity: f64,
    pub duration_ms: f64,
}

impl Default for PulseStyle {
    fn default() -> Self {
        Self {
            base_opacity: BASE_OPACITY,
            max_opacity: MAX_OPACITY,
            duration_ms: PULSE_DURATION_MS,
        }
    }
}

impl PulseStyle {
    pub fn with_duration(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            ..Self::default()
        }
    }

    /// Opacity at `now`; rests at the base until the first impact
    pub fn opacity(&self, last_impact: Option<Millis>, now: Millis) -> f64 {
        match last_impact {
            Some(t) => decay_opacity(
                t,
                self.base_opacity,
                self.max_opacity,
                self.duration_ms,
                now,
            ),
            None => self.base_opacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_at_impact() {
        assert_eq!(decay_opacity(500.0, 0.15, 0.8, 2000.0, 500.0), 0.8);
    }

    #[test]
    fn test_halfway() {
        let o = decay_opacity(0.0, 0.15, 0.8, 2000.0, 1000.0);
        assert!((o - 0.475).abs() < 1e-12);
    }

    #[test]
    fn test_holds_at_base() {
        assert_eq!(decay_opacity(0.0, 0.15, 0.8, 2000.0, 2000.0), 0.15);
        assert_eq!(decay_opacity(0.0, 0.15, 0.8, 2000.0, 60_000.0), 0.15);
    }

    #[test]
    fn test_no_impact_rests_at_base() {
        let style = PulseStyle::default();
        assert_eq!(style.opacity(None, 12_345.0), BASE_OPACITY);
        assert_eq!(style.opacity(Some(12_345.0), 12_345.0), MAX_OPACITY);
    }
}
