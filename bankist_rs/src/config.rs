//! Page configuration.
//!
//! The host page may embed a JSON object in
//! `<script type="application/json" id="bankist-config">`. Every field is
//! optional; a missing element means all defaults.
//!
//! ```json
//! { "log_level": "debug", "sticky_mode": "latch", "fade": { "dim_opacity": 0.3 } }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fade::FadeConfig;
use crate::viewport::StickyMode;

fn default_log_level() -> String {
    "info".to_string()
}

fn default_reveal_threshold() -> f64 {
    0.15
}

fn default_lazy_root_margin_px() -> u32 {
    200
}

/// Tunables for the page behaviors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Tracing level filter (`trace` .. `error`, or `off`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Visible fraction of a section before it is revealed.
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f64,
    /// How far ahead of the viewport lazy images start loading.
    #[serde(default = "default_lazy_root_margin_px")]
    pub lazy_root_margin_px: u32,
    /// Hover fade opacities.
    #[serde(default)]
    pub fade: FadeConfig,
    /// Whether the sticky nav is removed when scrolling back up.
    #[serde(default)]
    pub sticky_mode: StickyMode,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            reveal_threshold: default_reveal_threshold(),
            lazy_root_margin_px: default_lazy_root_margin_px(),
            fade: FadeConfig::default(),
            sticky_mode: StickyMode::default(),
        }
    }
}

impl PageConfig {
    /// Parses and validates a JSON config.
    pub fn from_json(data: &str) -> Result<Self> {
        let config: PageConfig = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges serde cannot express.
    pub fn validate(&self) -> Result<()> {
        let unit = [
            ("reveal_threshold", self.reveal_threshold),
            ("fade.dim_opacity", self.fade.dim_opacity),
            ("fade.restore_opacity", self.fade.restore_opacity),
        ];
        for (field, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfig {
                    field,
                    value: value.to_string(),
                });
            }
        }

        const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];
        if !LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(Error::InvalidConfig {
                field: "log_level",
                value: self.log_level.clone(),
            });
        }
        Ok(())
    }
}
