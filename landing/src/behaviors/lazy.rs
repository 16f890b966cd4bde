//! Lazy images: swap the blurred placeholder for `data-src` shortly before
//! the image scrolls in, and drop the blur once the real image has loaded.

use std::cell::RefCell;
use std::rc::Rc;

use bankist::selectors::{DATA_SRC, LAZY_IMAGE_SELECTOR, LAZY_IMG};
use bankist::viewport::{LazyImage, LazyStep, ObserverOptions};
use tracing::{debug, warn};
use web_sys::{Document, Element};

use super::{dom, observer};
use crate::error::Result;

pub type Shared = Rc<RefCell<LazyImage>>;

pub fn install(document: &Document, margin_px: u32) -> Result<()> {
    let images = dom::query_all(document, LAZY_IMAGE_SELECTOR)?;
    let mut states: Vec<(Element, Shared)> = images
        .iter()
        .map(|image| (image.clone(), Rc::new(RefCell::new(LazyImage::default()))))
        .collect();

    let watcher = observer::intersection_observer(
        ObserverOptions::lazy(margin_px),
        move |entry, watcher| {
            let target = entry.target();
            let Some((_, state)) = states.iter().find(|(image, _)| image == &target) else {
                return;
            };
            let step = state.borrow_mut().observe(observer::visibility(entry));
            if step == LazyStep::SwapSource {
                if let Err(err) = swap_source(&target, Rc::clone(state)) {
                    warn!(%err, "lazy image swap failed");
                }
                watcher.unobserve(&target);
            }
            // Swapped images are tracked by their load listener from here on.
            states.retain(|(_, state)| !state.borrow().is_swapped());
        },
    )?;

    for image in &images {
        watcher.observe(image);
    }

    debug!(images = images.len(), margin_px, "lazy images installed");
    Ok(())
}

/// Points `image` at its `data-src` and removes the blur once that source
/// has loaded. An image without `data-src` is left alone.
pub fn swap_source(image: &Element, state: Shared) -> Result<()> {
    let Some(source) = image.get_attribute(DATA_SRC) else {
        return Ok(());
    };

    // Listen before assigning `src` so a cached image cannot load unseen.
    let loaded = image.clone();
    dom::listen(image, "load", move |_| {
        if state.borrow_mut().loaded() == LazyStep::RemoveBlur {
            if let Err(err) = dom::set_class(&loaded, LAZY_IMG, false) {
                warn!(%err, "lazy image unblur failed");
            }
        }
    })?;

    image.set_attribute("src", &source)?;
    debug!(%source, "lazy image swapped");
    Ok(())
}
