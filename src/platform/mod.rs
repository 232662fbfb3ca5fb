//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Wall-clock time
//! - Frame scheduling (requestAnimationFrame on web, manual stepping elsewhere)

pub mod frame;
pub mod time;

#[cfg(target_arch = "wasm32")]
pub use frame::AnimationFrameScheduler;
pub use frame::{FrameCallback, FrameScheduler, ManualScheduler, start_loop};
pub use time::{Clock, ManualClock, SystemClock};
