//! Error type shared by every behavior.

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while validating page input.
///
/// None of these are fatal for the page: the browser layer logs them and
/// leaves the affected control unresponsive for that one event.
#[derive(Debug, Error)]
pub enum Error {
    /// A carousel needs at least one slide.
    #[error("carousel has no slides")]
    EmptyCarousel,

    /// A `data-slide` value was malformed or out of range.
    #[error("invalid slide index `{raw}` for a carousel of {count} slides")]
    InvalidSlideIndex {
        /// The raw value as found on the element.
        raw: String,
        /// Number of slides in the carousel.
        count: usize,
    },

    /// A `data-tab` value cannot name a content panel.
    #[error("invalid tab key `{0}`")]
    InvalidTabKey(String),

    /// An `href` that is not an in-page anchor.
    #[error("`{0}` is not an in-page anchor")]
    InvalidAnchor(String),

    /// Configuration parsed but holds an unusable value.
    #[error("invalid config: {field} = {value}")]
    InvalidConfig {
        /// Offending field, dotted path.
        field: &'static str,
        /// Offending value, rendered.
        value: String,
    },

    /// Configuration is not valid JSON for [`crate::PageConfig`].
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}
