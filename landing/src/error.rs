//! Errors raised while wiring behaviors to the DOM.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Convenience alias for behavior installation and event handling.
pub type Result<T> = std::result::Result<T, BehaviorError>;

/// Why a behavior could not be installed or an event was not handled.
#[derive(Debug, Error)]
pub enum BehaviorError {
    /// No browser window or document (not running in a page).
    #[error("no browser document available")]
    NoDocument,

    /// A selector the behavior depends on matched nothing.
    #[error("required element `{0}` not found")]
    MissingElement(String),

    /// Element is not of the expected interface, e.g. not an `HTMLElement`.
    #[error("element `{0}` has an unexpected type")]
    UnexpectedElement(String),

    /// A DOM call threw.
    #[error("javascript error: {0}")]
    Js(String),

    /// Page input failed validation.
    #[error(transparent)]
    Core(#[from] bankist::Error),
}

impl From<JsValue> for BehaviorError {
    fn from(value: JsValue) -> Self {
        BehaviorError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
