//! Loading [`PageConfig`] from the host document.

use bankist::PageConfig;
use bankist::selectors::CONFIG_ELEMENT_ID;
use web_sys::Document;

use crate::error::Result;

/// Reads the JSON config element.
///
/// Returns `Ok(None)` when the page carries no config (or an empty one),
/// and an error when it carries an invalid one.
pub fn load_config(document: &Document) -> Result<Option<PageConfig>> {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };
    let data = element.text_content().unwrap_or_default();
    if data.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(PageConfig::from_json(&data)?))
}
