//! Operations tab strip.

use crate::error::{Error, Result};
use crate::selectors;

/// Validated `data-tab` value naming a content panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabKey(String);

impl TabKey {
    /// Accepts ASCII letters, digits, `-` and `_`; anything else could not
    /// be spliced into a class selector safely.
    ///
    /// `active` is rejected too: its panel class would be the active-state
    /// modifier and select whichever panel is currently shown.
    pub fn parse(raw: &str) -> Result<Self> {
        let key = raw.trim();
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        let key = Self(key.to_string());
        if valid && key.content_class() != selectors::CONTENT_ACTIVE {
            Ok(key)
        } else {
            Err(Error::InvalidTabKey(raw.to_string()))
        }
    }

    /// The key as written on the tab.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Class carried by the matching content panel.
    pub fn content_class(&self) -> String {
        format!("{}{}", selectors::CONTENT_PREFIX, self.0)
    }

    /// Selector for the matching content panel.
    pub fn content_selector(&self) -> String {
        format!(".{}", self.content_class())
    }
}
