//! Hover fade on the navigation menu.

use serde::{Deserialize, Serialize};

/// Pointer entering or leaving a navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverPhase {
    /// `mouseover`
    Enter,
    /// `mouseout`
    Leave,
}

impl HoverPhase {
    /// DOM event name for this phase.
    pub fn event_name(self) -> &'static str {
        match self {
            HoverPhase::Enter => "mouseover",
            HoverPhase::Leave => "mouseout",
        }
    }
}

/// Opacities applied to the siblings of a hovered link and to the logo.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeConfig {
    /// Applied while a link is hovered.
    pub dim_opacity: f64,
    /// Applied when the pointer leaves.
    pub restore_opacity: f64,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            dim_opacity: 0.5,
            restore_opacity: 1.0,
        }
    }
}

impl FadeConfig {
    /// Opacity for the given phase.
    pub fn opacity(&self, phase: HoverPhase) -> f64 {
        match phase {
            HoverPhase::Enter => self.dim_opacity,
            HoverPhase::Leave => self.restore_opacity,
        }
    }

    /// Opacity for the given phase as a CSS value.
    pub fn css_opacity(&self, phase: HoverPhase) -> String {
        self.opacity(phase).to_string()
    }
}
