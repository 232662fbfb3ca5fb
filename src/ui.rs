//! User-facing sound prompt

use std::cell::RefCell;
use std::rc::Rc;

pub const MUTE_PROMPT: &str = "Click anywhere to mute audio";
pub const PLAY_PROMPT: &str = "Click anywhere to play audio";

/// Prompt text for the current sound state
pub fn sound_label(sound_enabled: bool) -> &'static str {
    if sound_enabled { MUTE_PROMPT } else { PLAY_PROMPT }
}

/// Somewhere the prompt text is shown
pub trait LabelSink {
    fn set_label(&mut self, text: &str);
}

impl LabelSink for String {
    fn set_label(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

impl<L: LabelSink> LabelSink for Rc<RefCell<L>> {
    fn set_label(&mut self, text: &str) {
        self.borrow_mut().set_label(text);
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::DomLabel;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::Element;

    use super::LabelSink;

    /// Text content of a page element
    pub struct DomLabel {
        element: Option<Element>,
    }

    impl DomLabel {
        /// First element matching `selector`; missing elements are skipped silently
        pub fn query(selector: &str) -> Self {
            let element = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.query_selector(selector).ok().flatten());
            if element.is_none() {
                log::warn!("Label element '{selector}' not found");
            }
            Self { element }
        }
    }

    impl LabelSink for DomLabel {
        fn set_label(&mut self, text: &str) {
            if let Some(el) = &self.element {
                el.set_text_content(Some(text));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(sound_label(true), "Click anywhere to mute audio");
        assert_eq!(sound_label(false), "Click anywhere to play audio");
    }

    #[test]
    fn test_string_sink_replaces_text() {
        let mut label = String::from("old");
        label.set_label(PLAY_PROMPT);
        assert_eq!(label, PLAY_PROMPT);
    }
}
