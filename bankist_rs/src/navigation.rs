//! In-page anchor resolution for smooth scrolling.

use crate::error::{Error, Result};

/// `href="#id"` reduced to the target element id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor(String);

impl Anchor {
    /// Parses a link `href`. External URLs and a bare `#` are not anchors
    /// and keep their default browser behavior.
    pub fn from_href(href: &str) -> Result<Self> {
        match href.trim().strip_prefix('#') {
            Some(id) if !id.is_empty() && !id.contains(char::is_whitespace) => {
                Ok(Self(id.to_string()))
            }
            _ => Err(Error::InvalidAnchor(href.to_string())),
        }
    }

    /// Id of the element to scroll to.
    pub fn id(&self) -> &str {
        &self.0
    }
}
