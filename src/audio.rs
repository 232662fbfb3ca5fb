//! Impact sounds
//!
//! The simulation only emits `ImpactEvent`s. Observers decide what to do with
//! them; `AudioBridge` plays one note per impact while sound is enabled.

use crate::settings::RuntimeState;
use crate::sim::ImpactEvent;

/// Directory the numbered note clips are served from
pub const CLIP_DIR: &str = "./audio";

/// Path of the note clip for an arc
pub fn clip_path(dir: &str, index: usize) -> String {
    format!("{dir}/note-{index}.wav")
}

/// Fire-and-forget clip playback
pub trait AudioPlayer {
    fn play(&mut self, clip_index: usize);
}

/// Receives every impact the render loop detects
pub trait ImpactObserver {
    fn on_impact(&mut self, event: &ImpactEvent, runtime: &RuntimeState);
}

/// Plays the arc's note on impact when sound is enabled
pub struct AudioBridge<P> {
    player: P,
}

impl<P: AudioPlayer> AudioBridge<P> {
    pub fn new(player: P) -> Self {
        Self { player }
    }

    pub fn player(&self) -> &P {
        &self.player
    }
}

impl<P: AudioPlayer> ImpactObserver for AudioBridge<P> {
    fn on_impact(&mut self, event: &ImpactEvent, runtime: &RuntimeState) {
        if runtime.sound_enabled {
            self.player.play(event.arc_index);
        }
    }
}

/// Player with no audio output (native, or when audio is unavailable)
#[derive(Debug, Default)]
pub struct NullPlayer {
    pub played: usize,
}

impl AudioPlayer for NullPlayer {
    fn play(&mut self, clip_index: usize) {
        self.played += 1;
        log::debug!("Play {}", clip_path(CLIP_DIR, clip_index));
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::ClipPlayer;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::HtmlAudioElement;

    use super::{AudioPlayer, CLIP_DIR, clip_path};
    use crate::consts::SOUND_VOLUME;

    /// Plays numbered `.wav` clips through `<audio>` elements
    pub struct ClipPlayer {
        dir: String,
        volume: f64,
    }

    impl Default for ClipPlayer {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ClipPlayer {
        pub fn new() -> Self {
            Self {
                dir: CLIP_DIR.to_string(),
                volume: SOUND_VOLUME,
            }
        }
    }

    impl AudioPlayer for ClipPlayer {
        fn play(&mut self, clip_index: usize) {
            let src = clip_path(&self.dir, clip_index);
            let Ok(audio) = HtmlAudioElement::new_with_src(&src) else {
                log::warn!("Failed to create audio element for {src}");
                return;
            };
            audio.set_volume(self.volume);
            // Playback errors (missing clip, autoplay policy) are ignored
            let _ = audio.play();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<usize>);

    impl AudioPlayer for Recorder {
        fn play(&mut self, clip_index: usize) {
            self.0.push(clip_index);
        }
    }

    #[test]
    fn test_clip_path() {
        assert_eq!(clip_path(CLIP_DIR, 7), "./audio/note-7.wav");
    }

    #[test]
    fn test_bridge_respects_sound_flag() {
        let mut bridge = AudioBridge::new(Recorder::default());
        let mut runtime = RuntimeState::default();
        let event = ImpactEvent {
            arc_index: 3,
            at: 1000.0,
        };

        bridge.on_impact(&event, &runtime);
        assert!(bridge.player().0.is_empty());

        runtime.toggle_sound(Some(true));
        bridge.on_impact(&event, &runtime);
        bridge.on_impact(&event, &runtime);
        // No deduplication of overlapping notes
        assert_eq!(bridge.player().0, vec![3, 3]);
    }

    #[test]
    fn test_null_player_counts() {
        let mut player = NullPlayer::default();
        player.play(0);
        player.play(14);
        assert_eq!(player.played, 2);
    }
}
