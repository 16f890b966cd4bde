//! Sticky navigation once the header scrolls out of view.

use bankist::selectors::{HEADER_SELECTOR, NAV_SELECTOR, STICKY};
use bankist::viewport::{ObserverOptions, StickyChange, StickyMode, StickyNav};
use tracing::{debug, warn};
use web_sys::Document;

use super::{dom, observer};
use crate::error::Result;

pub fn install(document: &Document, mode: StickyMode) -> Result<()> {
    let nav = dom::query(document, NAV_SELECTOR)?;
    let header = dom::query(document, HEADER_SELECTOR)?;

    let nav_height = nav.get_bounding_client_rect().height();
    let options = ObserverOptions::sticky(nav_height);
    let mut state = StickyNav::new(mode);

    let watcher = observer::intersection_observer(options, move |entry, _| {
        let Some(change) = state.observe(observer::visibility(entry)) else {
            return;
        };
        debug!(?change, "sticky nav");
        if let Err(err) = dom::set_class(&nav, STICKY, change == StickyChange::Stick) {
            warn!(%err, "sticky class update failed");
        }
    })?;
    watcher.observe(&header);

    debug!(nav_height, root_margin = %options.root_margin, "sticky nav installed");
    Ok(())
}
