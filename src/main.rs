//! Arc Cradle entry point
//!
//! Handles platform-specific initialization and starts the render loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use arc_cradle::audio::{AudioBridge, ClipPlayer};
    use arc_cradle::consts::LINE_WIDTH;
    use arc_cradle::platform::{AnimationFrameScheduler, Clock, SystemClock};
    use arc_cradle::renderer::CanvasSurface;
    use arc_cradle::ui::DomLabel;
    use arc_cradle::{Cradle, Layout, RuntimeState, Settings};

    /// Element holding the sound prompt
    const LABEL_SELECTOR: &str = "main > :first-child > :first-child";

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Arc Cradle starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let surface = CanvasSurface::new(&canvas, LINE_WIDTH)?;
        let (width, height) = surface.size;

        let clock = SystemClock;
        let settings = Settings::from_canvas(width, height, Layout::default(), clock.now_ms())
            .map_err(|e| {
                log::error!("Invalid settings: {e}");
                JsValue::from_str(&e.to_string())
            })?;

        let mut cradle = Cradle::new(settings, RuntimeState::default())
            .map_err(|e| JsValue::from_str(&e.to_string()))?
            .with_observer(AudioBridge::new(ClipPlayer::new()));
        cradle.set_label(Box::new(DomLabel::query(LABEL_SELECTOR)));
        let cradle = Rc::new(RefCell::new(cradle));

        setup_sound_toggle(&canvas, cradle.clone());

        let scheduler = Rc::new(RefCell::new(AnimationFrameScheduler));
        Cradle::start(cradle, scheduler, surface, clock);

        log::info!("Arc Cradle running!");
        Ok(())
    }

    /// Any click on the canvas flips the sound
    fn setup_sound_toggle(canvas: &HtmlCanvasElement, cradle: Rc<RefCell<Cradle>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            cradle.borrow_mut().toggle_sound(None);
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_app::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Arc Cradle (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    if let Err(e) = headless::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Steps the animation with a manual clock and reports the impacts
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::cell::RefCell;
    use std::rc::Rc;

    use serde::Serialize;

    use arc_cradle::audio::{AudioBridge, ImpactObserver, NullPlayer};
    use arc_cradle::platform::{Clock, ManualClock, ManualScheduler};
    use arc_cradle::renderer::RecordingSurface;
    use arc_cradle::sim::{ArcRing, ImpactEvent};
    use arc_cradle::{Cradle, Layout, RuntimeState, Settings};

    const WIDTH: f64 = 1280.0;
    const HEIGHT: f64 = 720.0;
    const FRAME_MS: f64 = 1000.0 / 60.0;
    const RUN_SECS: f64 = 30.0;

    /// Counts impacts per arc
    struct Tally(Rc<RefCell<Vec<u32>>>);

    impl ImpactObserver for Tally {
        fn on_impact(&mut self, event: &ImpactEvent, _runtime: &RuntimeState) {
            if let Some(count) = self.0.borrow_mut().get_mut(event.arc_index) {
                *count += 1;
            }
        }
    }

    #[derive(Serialize)]
    struct Summary<'a> {
        frames: u64,
        elapsed_ms: f64,
        impacts_per_arc: Vec<u32>,
        last_frame_draw_calls: usize,
        arcs: Vec<&'a ArcRing>,
    }

    pub fn run() -> Result<(), Box<dyn std::error::Error>> {
        let clock = ManualClock::new(0.0);
        let settings = Settings::from_canvas(WIDTH, HEIGHT, Layout::default(), clock.now_ms())?;

        let tally = Rc::new(RefCell::new(vec![0u32; settings.number_of_arcs]));
        let mut cradle = Cradle::new(settings, RuntimeState::default())?
            .with_observer(AudioBridge::new(NullPlayer::default()))
            .with_observer(Tally(tally.clone()));
        cradle.toggle_sound(Some(true));
        let cradle = Rc::new(RefCell::new(cradle));

        let scheduler = Rc::new(RefCell::new(ManualScheduler::new()));
        let surface = Rc::new(RefCell::new(RecordingSurface::new()));
        Cradle::start(cradle.clone(), scheduler.clone(), surface.clone(), clock.clone());

        let frames = (RUN_SECS * 1000.0 / FRAME_MS) as usize;
        for _ in 0..frames {
            clock.advance(FRAME_MS);
            // Only the latest frame is kept
            surface.borrow_mut().reset();
            if !ManualScheduler::fire(&scheduler) {
                break;
            }
        }

        let cradle = cradle.borrow();
        let summary = Summary {
            frames: cradle.frames(),
            elapsed_ms: clock.now_ms() - cradle.settings().start_time,
            impacts_per_arc: tally.borrow().clone(),
            last_frame_draw_calls: surface.borrow().last_frame().len(),
            arcs: cradle.registry().iter().collect(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        Ok(())
    }
}
