//! Time-driven simulation module
//!
//! Everything here is a pure function of wall-clock time:
//! - No physics state integrated across frames
//! - Impact times computed ahead from the start timestamp
//! - No rendering or platform dependencies

pub mod arc;
pub mod impact;
pub mod oscillator;
pub mod pulse;
pub mod tick;

pub use arc::{ArcRegistry, ArcRing};
pub use impact::{ImpactEvent, next_impact_time};
pub use oscillator::{bounce_angle, position_on_arc};
pub use pulse::{PulseStyle, decay_opacity};
pub use tick::advance_impacts;
