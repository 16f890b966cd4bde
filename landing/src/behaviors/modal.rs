//! Account modal: open buttons, close button, overlay click, Escape.

use bankist::keys::Key;
use bankist::modal::{ModalCommand, ModalState};
use bankist::selectors::{
    CLOSE_MODAL_SELECTOR, HIDDEN, MODAL_SELECTOR, OVERLAY_SELECTOR, SHOW_MODAL_SELECTOR,
};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent};

use super::dom;
use crate::error::Result;

#[derive(Clone)]
struct Dialog {
    modal: Element,
    overlay: Element,
}

impl Dialog {
    fn state(&self) -> ModalState {
        ModalState::from_hidden_class(self.modal.class_list().contains(HIDDEN))
    }

    fn apply(&self, command: ModalCommand) {
        let hidden = self.state().apply(command) == ModalState::Closed;
        for element in [&self.modal, &self.overlay] {
            if let Err(err) = dom::set_class(element, HIDDEN, hidden) {
                warn!(%err, "modal class update failed");
            }
        }
        debug!(?command, "modal");
    }
}

pub fn install(document: &Document) -> Result<()> {
    let dialog = Dialog {
        modal: dom::query(document, MODAL_SELECTOR)?,
        overlay: dom::query(document, OVERLAY_SELECTOR)?,
    };
    let close_button = dom::query(document, CLOSE_MODAL_SELECTOR)?;
    let open_buttons = dom::query_all(document, SHOW_MODAL_SELECTOR)?;
    if open_buttons.is_empty() {
        warn!(selector = SHOW_MODAL_SELECTOR, "no modal open buttons on the page");
    }

    for button in &open_buttons {
        let dialog = dialog.clone();
        dom::listen(button, "click", move |event| {
            // Open buttons are links; don't jump to `#`.
            event.prevent_default();
            dialog.apply(ModalCommand::Open);
        })?;
    }

    for closer in [&close_button, &dialog.overlay] {
        let dialog = dialog.clone();
        dom::listen(closer, "click", move |_| dialog.apply(ModalCommand::Close))?;
    }

    let on_key = dialog.clone();
    dom::listen(document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if let Some(command) = on_key.state().on_key(Key::from_event_key(&event.key())) {
            on_key.apply(command);
        }
    })?;

    Ok(())
}
