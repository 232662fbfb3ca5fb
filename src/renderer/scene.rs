//! Per-frame scene drawing

use std::f64::consts::TAU;

use super::{DrawMode, Surface};
use crate::Millis;
use crate::settings::Settings;
use crate::sim::{ArcRegistry, PulseStyle};

/// Draw every arc, its two impact dots and its moving dot.
///
/// The arc stroke and impact dots pulse with the arc's last impact; the
/// moving dot is always fully opaque.
pub fn draw_frame(
    surface: &mut dyn Surface,
    settings: &Settings,
    registry: &ArcRegistry,
    pulse: &PulseStyle,
    now: Millis,
) {
    surface.clear();

    let center = settings.circle_center;
    let dot = settings.moving_dot_radius;

    for arc in registry {
        let opacity = pulse.opacity(arc.last_impact, now);

        let (start, end) = arc.stroke_span(settings.center_arc_radius);
        surface.draw_arc(
            center,
            arc.radius,
            start,
            end,
            &arc.colour,
            DrawMode::Stroke,
            opacity,
        );

        let (left, right) = arc.impact_points(center, settings.line_start.y);
        for point in [left, right] {
            surface.draw_arc(point, dot, 0.0, TAU, &arc.colour, DrawMode::Fill, opacity);
        }

        let moving = arc.position(settings, now);
        surface.draw_arc(moving, dot, 0.0, TAU, &arc.colour, DrawMode::Fill, 1.0);
    }

    log::trace!("Drew {} arcs", registry.len());
}
