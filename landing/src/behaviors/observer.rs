//! `IntersectionObserver` construction.

use bankist::viewport::{ObserverOptions, Visibility};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::Result;

/// Creates an observer that calls `on_entry` for every entry of every
/// notification batch, together with the observer itself so the handler can
/// unobserve.
pub fn intersection_observer(
    options: ObserverOptions,
    mut on_entry: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
) -> Result<IntersectionObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_entry(&entry, &observer);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin.to_string());

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();
    Ok(observer)
}

pub fn visibility(entry: &IntersectionObserverEntry) -> Visibility {
    Visibility {
        is_intersecting: entry.is_intersecting(),
        ratio: entry.intersection_ratio(),
    }
}
