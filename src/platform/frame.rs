//! Frame scheduling
//!
//! The render loop re-requests itself after every frame. Schedulers only decide
//! when the next callback runs.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

pub type FrameCallback = Box<dyn FnOnce()>;

/// Runs a callback on the next display refresh
pub trait FrameScheduler {
    fn request_next(&mut self, callback: FrameCallback);
}

/// Run `frame` once per scheduled refresh, forever
pub fn start_loop<S>(scheduler: Rc<RefCell<S>>, frame: impl FnMut() + 'static)
where
    S: FrameScheduler + 'static,
{
    schedule(scheduler, Box::new(frame));
}

fn schedule<S>(scheduler: Rc<RefCell<S>>, frame: Box<dyn FnMut()>)
where
    S: FrameScheduler + 'static,
{
    let next = scheduler.clone();
    scheduler.borrow_mut().request_next(Box::new(move || {
        let mut frame = frame;
        frame();
        schedule(next, frame);
    }));
}

/// Scheduler driven by hand (tests, headless runs)
#[derive(Default)]
pub struct ManualScheduler {
    pending: VecDeque<FrameCallback>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Run the oldest pending callback. Returns false if none was waiting.
    pub fn fire(scheduler: &Rc<RefCell<Self>>) -> bool {
        // Release the borrow before the callback re-requests
        let callback = scheduler.borrow_mut().pending.pop_front();
        match callback {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_next(&mut self, callback: FrameCallback) {
        self.pending.push_back(callback);
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AnimationFrameScheduler;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::prelude::*;

    use super::{FrameCallback, FrameScheduler};

    /// `window.requestAnimationFrame`
    #[derive(Default)]
    pub struct AnimationFrameScheduler;

    impl FrameScheduler for AnimationFrameScheduler {
        fn request_next(&mut self, callback: FrameCallback) {
            let Some(window) = web_sys::window() else {
                log::error!("No window - animation loop stopped");
                return;
            };
            // Freed by wasm-bindgen once the browser has called it
            let js_callback = Closure::once_into_js(move |_time: f64| callback());
            if window
                .request_animation_frame(js_callback.unchecked_ref())
                .is_err()
            {
                log::error!("requestAnimationFrame failed - animation loop stopped");
            }
        }
    }
}
