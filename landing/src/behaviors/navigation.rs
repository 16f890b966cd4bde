//! Smooth scrolling: the header call to action and the nav links.

use bankist::dispatch::{Capability, DispatchTable};
use bankist::navigation::Anchor;
use bankist::selectors::{FIRST_SECTION_ID, NAV_LINKS_SELECTOR, SCROLL_TO_SELECTOR};
use tracing::{debug, warn};
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions};

use super::dom::{self, DomTarget};
use crate::error::{BehaviorError, Result};

pub fn smooth_scroll(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn install(document: &Document) -> Result<()> {
    let button = dom::query(document, SCROLL_TO_SELECTOR)?;
    let first_section = document
        .get_element_by_id(FIRST_SECTION_ID)
        .ok_or_else(|| BehaviorError::MissingElement(format!("#{FIRST_SECTION_ID}")))?;
    dom::listen(&button, "click", move |_| smooth_scroll(&first_section))?;

    // One listener for all links.
    let links = dom::query(document, NAV_LINKS_SELECTOR)?;
    let table = DispatchTable::new().route(Capability::NavLink);
    let document = document.clone();
    dom::listen(&links, "click", move |event| {
        let Some(link) = dom::event_target(&event)
            .and_then(|target| table.resolve(DomTarget(target)))
            .map(|resolved| resolved.element.0)
        else {
            return;
        };

        let href = link.get_attribute("href").unwrap_or_default();
        let anchor = match Anchor::from_href(&href) {
            Ok(anchor) => anchor,
            Err(err) => {
                debug!(%err, "leaving link to the browser");
                return;
            }
        };

        event.prevent_default();
        match document.get_element_by_id(anchor.id()) {
            Some(target) => smooth_scroll(&target),
            None => warn!(id = anchor.id(), "scroll target not found"),
        }
    })?;

    Ok(())
}
