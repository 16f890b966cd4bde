//! Thin helpers over `web-sys` shared by the behaviors.

use bankist::dispatch::DomNode;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList};

use crate::error::{BehaviorError, Result};

/// The page document.
pub fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(BehaviorError::NoDocument)
}

/// First element matching `selector`, or [`BehaviorError::MissingElement`].
pub fn query(document: &Document, selector: &str) -> Result<Element> {
    document
        .query_selector(selector)?
        .ok_or_else(|| BehaviorError::MissingElement(selector.to_string()))
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    Ok(elements(document.query_selector_all(selector)?))
}

/// Every descendant of `root` matching `selector`.
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>> {
    Ok(elements(root.query_selector_all(selector)?))
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Registers `handler` for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget(); // Keep the closure alive
    Ok(())
}

/// The element an event was dispatched to, if it is an element.
pub fn event_target(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// Adds or removes `class`.
pub fn set_class(element: &Element, class: &str, on: bool) -> Result<()> {
    let classes = element.class_list();
    if on {
        classes.add_1(class)?;
    } else {
        classes.remove_1(class)?;
    }
    Ok(())
}

/// Sets one inline style property.
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<()> {
    let html = element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| BehaviorError::UnexpectedElement(element.tag_name()))?;
    html.style().set_property(property, value)?;
    Ok(())
}

/// Event target as seen by [`bankist::dispatch::DispatchTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct DomTarget(pub Element);

impl DomNode for DomTarget {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn closest(&self, selector: &str) -> Option<Self> {
        self.0.closest(selector).ok().flatten().map(DomTarget)
    }
}
