//! Keyboard keys the page reacts to.

/// Keys with a meaning on the page, parsed from `KeyboardEvent.key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Closes the modal.
    Escape,
    /// Previous slide.
    ArrowLeft,
    /// Next slide.
    ArrowRight,
    /// Anything else.
    Other,
}

impl Key {
    /// Maps a `KeyboardEvent.key` value.
    pub fn from_event_key(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}
