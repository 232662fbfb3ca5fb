//! Render loop orchestrator
//!
//! One `frame` per display refresh: draw every arc at the current time, then
//! advance the impact schedule and hand each impact to the observers.

use std::cell::RefCell;
use std::rc::Rc;

use crate::Millis;
use crate::audio::ImpactObserver;
use crate::platform::{Clock, FrameScheduler, start_loop};
use crate::renderer::{Surface, draw_frame};
use crate::settings::{ConfigError, RuntimeState, Settings};
use crate::sim::{ArcRegistry, ImpactEvent, PulseStyle, advance_impacts};
use crate::ui::{LabelSink, sound_label};

/// Owns all animation state
pub struct Cradle {
    settings: Settings,
    runtime: RuntimeState,
    registry: ArcRegistry,
    pulse: PulseStyle,
    observers: Vec<Box<dyn ImpactObserver>>,
    label: Option<Box<dyn LabelSink>>,
    frames: u64,
}

impl Cradle {
    pub fn new(settings: Settings, runtime: RuntimeState) -> Result<Self, ConfigError> {
        let registry = ArcRegistry::from_settings(&settings, &runtime.colour)?;
        let pulse = PulseStyle::with_duration(settings.pulse_duration_ms);

        log::info!("Cradle ready with {} arcs", registry.len());
        Ok(Self {
            settings,
            runtime,
            registry,
            pulse,
            observers: Vec::new(),
            label: None,
            frames: 0,
        })
    }

    pub fn with_observer(mut self, observer: impl ImpactObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Show the sound prompt in `sink`, now and after every toggle
    pub fn set_label(&mut self, mut sink: Box<dyn LabelSink>) {
        sink.set_label(sound_label(self.runtime.sound_enabled));
        self.label = Some(sink);
    }

    /// Draw one frame at `now` and process impacts. Returns the impacts seen.
    pub fn frame(&mut self, surface: &mut dyn Surface, now: Millis) -> Vec<ImpactEvent> {
        draw_frame(surface, &self.settings, &self.registry, &self.pulse, now);

        let events = advance_impacts(&mut self.registry, now);
        for event in &events {
            for observer in &mut self.observers {
                observer.on_impact(event, &self.runtime);
            }
        }

        self.frames += 1;
        log::trace!("Frame {} at {:.0}: {} impacts", self.frames, now, events.len());
        events
    }

    /// Flip (or set) the sound flag and refresh the prompt
    pub fn toggle_sound(&mut self, enabled: Option<bool>) -> bool {
        let enabled = self.runtime.toggle_sound(enabled);
        if let Some(label) = &mut self.label {
            label.set_label(sound_label(enabled));
        }
        log::info!("Sound {}", if enabled { "enabled" } else { "muted" });
        enabled
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn runtime(&self) -> &RuntimeState {
        &self.runtime
    }

    pub fn registry(&self) -> &ArcRegistry {
        &self.registry
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Drive `cradle` from `scheduler`, reading the time from `clock` each frame
    pub fn start<S, D, C>(
        cradle: Rc<RefCell<Self>>,
        scheduler: Rc<RefCell<S>>,
        mut surface: D,
        clock: C,
    ) where
        S: FrameScheduler + 'static,
        D: Surface + 'static,
        C: Clock + 'static,
    {
        start_loop(scheduler, move || {
            let now = clock.now_ms();
            cradle.borrow_mut().frame(&mut surface, now);
        });
    }
}
