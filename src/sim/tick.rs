//! Per-frame impact pass
//!
//! Runs after the frame is drawn, so the pulse seen this frame still belongs
//! to the previous impact.

use super::arc::ArcRegistry;
use super::impact::ImpactEvent;
use crate::Millis;

/// Advance every arc's impact schedule to `now`, one step per arc at most
pub fn advance_impacts(registry: &mut ArcRegistry, now: Millis) -> Vec<ImpactEvent> {
    let events: Vec<ImpactEvent> = registry
        .iter_mut()
        .filter_map(|arc| arc.check_impact(now))
        .collect();

    for event in &events {
        log::debug!("Impact on arc {} at {:.0}", event.arc_index, event.at);
    }
    events
}
