//! Oscillator model
//!
//! Each dot starts at angle π (left end of the base line) and accumulates angle
//! at a constant rate. The accumulated angle is folded so the dot sweeps up to 2π
//! and back down to π instead of wrapping around the circle.

use std::f64::consts::PI;

use glam::DVec2;

use crate::consts::MAX_ANGLE;
use crate::point_on_circle;

/// Fold an accumulated angle into the swing range `[π, 2π]`
#[inline]
pub fn bounce_angle(total_radian: f64) -> f64 {
    let mod_radian = total_radian.rem_euclid(MAX_ANGLE);
    if mod_radian >= PI {
        mod_radian
    } else {
        MAX_ANGLE - mod_radian
    }
}

/// Current position of a dot on an arc of `radius` around `center`
pub fn position_on_arc(center: DVec2, radius: f64, elapsed_secs: f64, velocity: f64) -> DVec2 {
    let total_radian = PI + elapsed_secs * velocity;
    point_on_circle(center, radius, bounce_angle(total_radian))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_starts_at_left_end() {
        let center = DVec2::new(400.0, 300.0);
        let p = position_on_arc(center, 30.0, 0.0, 1.0);
        assert!((p.x - 370.0).abs() < EPS);
        assert!((p.y - 300.0).abs() < EPS);
    }

    #[test]
    fn test_reaches_right_end_after_half_turn() {
        let center = DVec2::ZERO;
        // π radians at 1 rad/s
        let p = position_on_arc(center, 50.0, PI, 1.0);
        assert!((p.x - 50.0).abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
    }

    #[test]
    fn test_swings_back_instead_of_wrapping() {
        // Half a turn later the dot passes the top again on its way back
        let forward = bounce_angle(PI + PI / 2.0);
        let back = bounce_angle(PI + PI + PI / 2.0);
        assert!((forward - 1.5 * PI).abs() < EPS);
        assert!((back - 1.5 * PI).abs() < EPS);

        let past_end = bounce_angle(2.0 * PI + 0.25);
        assert!((past_end - (2.0 * PI - 0.25)).abs() < EPS);
    }

    #[test]
    fn test_dot_stays_above_base_line() {
        // Canvas y grows downward, so the swing range [π, 2π] has sin <= 0
        let center = DVec2::new(0.0, 100.0);
        for i in 0..200 {
            let p = position_on_arc(center, 40.0, i as f64 * 0.137, 2.3);
            assert!(p.y <= center.y + EPS);
        }
    }

    #[test]
    fn test_negative_total_stays_in_range() {
        for total in [-0.1, -PI, -7.5, -100.0] {
            let a = bounce_angle(total);
            assert!((PI..=2.0 * PI).contains(&a), "{total} -> {a}");
        }
    }
}
