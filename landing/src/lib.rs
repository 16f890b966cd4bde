//! # bankist-landing
//!
//! The Bankist landing page: Leptos markup plus the DOM behaviors that bring
//! it to life.
//!
//! Leptos renders the static structure once. After mount, [`start`] reads
//! the optional page config, installs the console logger and attaches every
//! behavior in [`behaviors`] to the rendered elements. The behaviors talk to
//! the DOM through `web-sys` and delegate every decision to the
//! platform-independent `bankist` crate.
//!
//! Developed by The Bankist Team (c)2025

pub mod behaviors;
pub mod config;
pub mod error;
pub mod logging;
mod sections;

use bankist::PageConfig;
use leptos::prelude::*;
use sections::*;
use tracing::warn;

pub use behaviors::{InstallReport, install_all};
pub use error::{BehaviorError, Result};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Behaviors />
        <Header />
        <Features />
        <Operations />
        <Testimonials />
        <Signup />
        <Footer />
        <Modal />
    }
}

/// Attaches the behaviors once the markup is in the document.
#[component]
#[allow(clippy::unused_unit)]
fn Behaviors() -> impl IntoView {
    Effect::new(move || {
        if let Err(err) = start() {
            web_sys::console::error_1(&err.to_string().into());
        }
    });

    view! {}
}

/// Loads config, installs logging and wires every behavior.
///
/// Only a missing `window`/`document` is an error here; individual
/// behaviors that cannot be installed are reported and skipped.
pub fn start() -> Result<InstallReport> {
    let document = behaviors::dom::document()?;

    // Config is read before the logger exists, so its problems are held
    // until logging is up.
    let (config, config_error) = match config::load_config(&document) {
        Ok(Some(config)) => (config, None),
        Ok(None) => (PageConfig::default(), None),
        Err(err) => (PageConfig::default(), Some(err)),
    };

    logging::init(&config.log_level);
    if let Some(err) = config_error {
        warn!(%err, "ignoring page config, using defaults");
    }

    Ok(install_all(&document, &config))
}
