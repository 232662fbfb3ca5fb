//! Property-based tests for the motion, impact and pulse model

use std::f64::consts::PI;

use glam::DVec2;
use proptest::prelude::*;

use arc_cradle::settings::{Colour, Layout, Settings};
use arc_cradle::sim::{ArcRegistry, bounce_angle, decay_opacity, next_impact_time, position_on_arc};

proptest! {
    #[test]
    fn position_lies_on_circle(
        radius in 0.1f64..2000.0,
        velocity in 0.01f64..50.0,
        elapsed in 0.0f64..100_000.0,
        cx in -1000.0f64..1000.0,
        cy in -1000.0f64..1000.0,
    ) {
        let center = DVec2::new(cx, cy);
        let p = position_on_arc(center, radius, elapsed, velocity);
        let dist_sq = (p - center).length_squared();
        let tolerance = radius * radius * 1e-9 + 1e-9;
        prop_assert!(
            (dist_sq - radius * radius).abs() < tolerance,
            "distance² {} != r² {}", dist_sq, radius * radius
        );
    }

    #[test]
    fn bounce_angle_in_swing_range(total in -1e6f64..1e6) {
        let angle = bounce_angle(total);
        prop_assert!((PI..=2.0 * PI).contains(&angle), "{} -> {}", total, angle);
    }

    #[test]
    fn impact_times_strictly_increase(
        start in 0.0f64..2e12,
        velocity in 0.01f64..100.0,
    ) {
        let step = (PI / velocity) * 1000.0;
        let mut t = start;
        for _ in 0..20 {
            let next = next_impact_time(t, velocity);
            prop_assert!(next > t);
            prop_assert!(((next - t) - step).abs() <= step * 1e-9 + 1e-3);
            t = next;
        }
    }

    #[test]
    fn opacity_bounded_and_non_increasing(
        base in 0.0f64..0.5,
        span in 0.0f64..0.5,
        duration in 1.0f64..10_000.0,
        e1 in 0.0f64..20_000.0,
        e2 in 0.0f64..20_000.0,
    ) {
        let max = base + span;
        let (early, late) = if e1 <= e2 { (e1, e2) } else { (e2, e1) };
        let a = decay_opacity(0.0, base, max, duration, early);
        let b = decay_opacity(0.0, base, max, duration, late);

        prop_assert!(a >= base - 1e-12 && a <= max + 1e-12);
        prop_assert!(b >= base - 1e-12 && b <= max + 1e-12);
        prop_assert!(a >= b - 1e-12, "opacity rose from {} to {}", a, b);
    }

    #[test]
    fn opacity_endpoints_exact(
        base in 0.0f64..0.5,
        span in 0.0f64..0.5,
        duration in 1.0f64..10_000.0,
        impact in 0.0f64..1e6,
        past in 1.0f64..10_000.0,
    ) {
        let max = base + span;
        prop_assert_eq!(decay_opacity(impact, base, max, duration, impact), max);
        prop_assert_eq!(decay_opacity(impact, base, max, duration, impact + duration + past), base);
    }

    #[test]
    fn registry_radius_up_velocity_down(
        width in 200.0f64..4000.0,
        height in 100.0f64..3000.0,
        start in 0.0f64..2e12,
    ) {
        let settings = Settings::from_canvas(width, height, Layout::default(), start).unwrap();
        let registry = ArcRegistry::from_settings(&settings, &Colour::default()).unwrap();
        let arcs: Vec<_> = registry.iter().collect();

        prop_assert_eq!(arcs[0].radius, settings.center_arc_radius);
        for pair in arcs.windows(2) {
            prop_assert!(pair[1].velocity < pair[0].velocity);
            prop_assert!(pair[0].velocity > 0.0);
            prop_assert!(pair[1].radius > pair[0].radius);
        }
    }
}
