//! Modal dialog open/close decisions.
//!
//! The modal has no state of its own: whether it is open is read from the
//! `hidden` class on the dialog element each time a key arrives.

use crate::keys::Key;

/// Visibility of the modal as found in the DOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    /// Dialog and overlay visible.
    Open,
    /// Dialog and overlay carry `hidden`.
    Closed,
}

/// Change to apply to the dialog and the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalCommand {
    /// Remove `hidden` from both.
    Open,
    /// Add `hidden` to both.
    Close,
}

impl ModalState {
    /// Reads the state from the dialog's `hidden` class.
    pub fn from_hidden_class(hidden: bool) -> Self {
        if hidden {
            ModalState::Closed
        } else {
            ModalState::Open
        }
    }

    /// Escape closes an open modal; every other combination is a no-op.
    pub fn on_key(self, key: Key) -> Option<ModalCommand> {
        match (self, key) {
            (ModalState::Open, Key::Escape) => Some(ModalCommand::Close),
            _ => None,
        }
    }

    /// State after applying `command`.
    pub fn apply(self, command: ModalCommand) -> Self {
        match command {
            ModalCommand::Open => ModalState::Open,
            ModalCommand::Close => ModalState::Closed,
        }
    }
}
