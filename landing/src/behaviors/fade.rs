//! Menu fade: hovering a nav link dims its siblings and the logo.

use bankist::dispatch::{Capability, DispatchTable};
use bankist::fade::{FadeConfig, HoverPhase};
use bankist::selectors::{NAV_LINK_SELECTOR, NAV_LOGO_SELECTOR, NAV_SELECTOR};
use tracing::warn;
use web_sys::{Document, Element, Event};

use super::dom::{self, DomTarget};
use crate::error::{BehaviorError, Result};

pub fn install(document: &Document, fade: FadeConfig) -> Result<()> {
    let nav = dom::query(document, NAV_SELECTOR)?;
    // mouseenter does not bubble, so the nav listens for mouseover/mouseout.
    for phase in [HoverPhase::Enter, HoverPhase::Leave] {
        dom::listen(&nav, phase.event_name(), hover_handler(fade.css_opacity(phase)))?;
    }
    Ok(())
}

/// Builds the handler for one hover phase; `opacity` is what the siblings
/// and the logo get.
pub fn hover_handler(opacity: String) -> impl FnMut(Event) + 'static {
    let table = DispatchTable::new().route(Capability::NavLink);
    move |event| {
        let Some(link) = dom::event_target(&event)
            .and_then(|target| table.resolve(DomTarget(target)))
            .map(|resolved| resolved.element.0)
        else {
            return;
        };
        if let Err(err) = fade_siblings(&link, &opacity) {
            warn!(%err, "fade failed");
        }
    }
}

fn fade_siblings(link: &Element, opacity: &str) -> Result<()> {
    let nav = link
        .closest(NAV_SELECTOR)?
        .ok_or_else(|| BehaviorError::MissingElement(NAV_SELECTOR.to_string()))?;

    for sibling in dom::query_all_in(&nav, NAV_LINK_SELECTOR)? {
        if &sibling != link {
            dom::set_style(&sibling, "opacity", opacity)?;
        }
    }
    if let Some(logo) = nav.query_selector(NAV_LOGO_SELECTOR)? {
        dom::set_style(&logo, "opacity", opacity)?;
    }
    Ok(())
}
