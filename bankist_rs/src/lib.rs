//! # bankist
//!
//! State machines and pure decisions behind the Bankist landing page.
//!
//! Nothing in this crate touches the DOM. Every behavior is split into a
//! platform-independent half that lives here (what should change, and
//! when) and a thin browser half in `bankist-landing` that applies the
//! result to real elements. That keeps the interesting parts testable with
//! plain `cargo test`.
//!
//! ## Modules
//!
//! - [`carousel`] - slide position, wrap-around navigation, indicator frame
//! - [`viewport`] - one-shot reveal, lazy image and sticky nav transitions
//! - [`dispatch`] - delegated event target classification
//! - [`modal`], [`tabs`], [`fade`], [`navigation`] - the smaller widgets
//! - [`config`] - page configuration read from the host document
//! - [`selectors`] - class names and selectors shared with the markup
//!
//! Developed by The Bankist Team (c)2025

#![warn(missing_docs)]

pub mod carousel;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod fade;
pub mod keys;
pub mod modal;
pub mod navigation;
pub mod selectors;
pub mod tabs;
pub mod viewport;

pub use carousel::{Carousel, Frame, SlideIndex};
pub use config::PageConfig;
pub use error::{Error, Result};
