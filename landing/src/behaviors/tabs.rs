//! Operations tab strip.

use bankist::dispatch::{Capability, DispatchTable};
use bankist::selectors::{
    CONTENT_ACTIVE, CONTENT_SELECTOR, DATA_TAB, TAB_ACTIVE, TAB_CONTAINER_SELECTOR, TAB_SELECTOR,
};
use bankist::tabs::TabKey;
use tracing::{debug, warn};
use web_sys::{Document, Element};

use super::dom::{self, DomTarget};
use crate::error::Result;

struct TabStrip {
    document: Document,
    tabs: Vec<Element>,
    contents: Vec<Element>,
}

impl TabStrip {
    fn activate(&self, clicked: &Element) -> Result<()> {
        let key = TabKey::parse(&clicked.get_attribute(DATA_TAB).unwrap_or_default())?;
        // Resolve the panel first so a dangling key changes nothing.
        let panel = dom::query(&self.document, &key.content_selector())?;

        for tab in &self.tabs {
            dom::set_class(tab, TAB_ACTIVE, false)?;
        }
        for content in &self.contents {
            dom::set_class(content, CONTENT_ACTIVE, false)?;
        }

        dom::set_class(clicked, TAB_ACTIVE, true)?;
        dom::set_class(&panel, CONTENT_ACTIVE, true)?;
        debug!(tab = key.as_str(), "tab activated");
        Ok(())
    }
}

pub fn install(document: &Document) -> Result<()> {
    let container = dom::query(document, TAB_CONTAINER_SELECTOR)?;
    let strip = TabStrip {
        document: document.clone(),
        tabs: dom::query_all(document, TAB_SELECTOR)?,
        contents: dom::query_all(document, CONTENT_SELECTOR)?,
    };
    let table = DispatchTable::new().route(Capability::Tab);

    dom::listen(&container, "click", move |event| {
        let Some(clicked) = dom::event_target(&event)
            .and_then(|target| table.resolve(DomTarget(target)))
        else {
            return;
        };
        if let Err(err) = strip.activate(&clicked.element.0) {
            warn!(%err, "tab ignored");
        }
    })?;

    Ok(())
}
