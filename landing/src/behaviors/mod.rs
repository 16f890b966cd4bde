//! DOM behaviors, one module per widget.
//!
//! Each `install` looks up the elements it needs, registers its listeners
//! and returns. Widgets share nothing but the document, so one failing to
//! install leaves the others working.

pub mod dom;
pub mod fade;
pub mod lazy;
pub mod modal;
pub mod navigation;
pub mod observer;
pub mod reveal;
pub mod slider;
pub mod sticky;
pub mod tabs;

use bankist::PageConfig;
use tracing::{error, info};
use web_sys::Document;

use crate::error::{BehaviorError, Result};

/// Outcome of [`install_all`].
#[derive(Debug, Default)]
pub struct InstallReport {
    /// Behaviors attached to the page.
    pub installed: Vec<&'static str>,
    /// Behaviors that could not be attached, with the reason.
    pub failed: Vec<(&'static str, BehaviorError)>,
}

impl InstallReport {
    fn record(&mut self, name: &'static str, result: Result<()>) {
        match result {
            Ok(()) => self.installed.push(name),
            Err(err) => {
                error!(behavior = name, %err, "behavior not installed");
                self.failed.push((name, err));
            }
        }
    }

    /// Whether every behavior was attached.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Attaches every behavior to `document`.
pub fn install_all(document: &Document, config: &PageConfig) -> InstallReport {
    let mut report = InstallReport::default();

    report.record("modal", modal::install(document));
    report.record("navigation", navigation::install(document));
    report.record("tabs", tabs::install(document));
    report.record("fade", fade::install(document, config.fade));
    report.record("sticky", sticky::install(document, config.sticky_mode));
    report.record("reveal", reveal::install(document, config.reveal_threshold));
    report.record("lazy", lazy::install(document, config.lazy_root_margin_px));
    report.record("slider", slider::install(document));

    info!(
        installed = report.installed.len(),
        failed = report.failed.len(),
        "page behaviors ready"
    );
    report
}
