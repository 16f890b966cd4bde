//! Sections fade in the first time they scroll into view.

use bankist::selectors::{SECTION_HIDDEN, SECTION_SELECTOR};
use bankist::viewport::{ObserverOptions, RevealState, RevealStep};
use tracing::{debug, warn};
use web_sys::{Document, Element};

use super::{dom, observer};
use crate::error::Result;

pub fn install(document: &Document, threshold: f64) -> Result<()> {
    let sections = dom::query_all(document, SECTION_SELECTOR)?;
    let mut states: Vec<(Element, RevealState)> = sections
        .iter()
        .map(|section| (section.clone(), RevealState::default()))
        .collect();

    let watcher = observer::intersection_observer(
        ObserverOptions::reveal(threshold),
        move |entry, watcher| {
            let target = entry.target();
            let Some((_, state)) = states.iter_mut().find(|(section, _)| section == &target)
            else {
                return;
            };
            if state.observe(observer::visibility(entry), threshold) == RevealStep::Reveal {
                if let Err(err) = dom::set_class(&target, SECTION_HIDDEN, false) {
                    warn!(%err, "section reveal failed");
                }
                watcher.unobserve(&target);
            }
            states.retain(|(_, state)| !state.is_terminal());
        },
    )?;

    // Hidden only once the script runs, so the page reads fine without it.
    for section in &sections {
        dom::set_class(section, SECTION_HIDDEN, true)?;
        watcher.observe(section);
    }

    debug!(sections = sections.len(), threshold, "section reveal installed");
    Ok(())
}
