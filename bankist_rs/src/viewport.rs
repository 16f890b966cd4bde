//! Viewport-driven transitions.
//!
//! The browser reports intersection changes; these types decide what each
//! report means. Reveal and lazy loading are one-shot: once terminal, further
//! reports are ignored and the caller is told to stop watching the element.

use std::fmt;

use tracing::debug;

/// One intersection report for one watched element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    /// Whether the element crosses the observer threshold.
    pub is_intersecting: bool,
    /// Visible fraction of the element, 0..=1.
    pub ratio: f64,
}

impl Visibility {
    /// Report for an element fully outside the observed area.
    pub const HIDDEN: Visibility = Visibility {
        is_intersecting: false,
        ratio: 0.0,
    };

    /// Shorthand for an intersecting report.
    #[cfg(test)]
    pub(crate) fn visible(ratio: f64) -> Self {
        Self {
            is_intersecting: true,
            ratio,
        }
    }

    /// Whether the element intersects with at least `threshold` of it
    /// visible.
    ///
    /// Observers also report when `isIntersecting` flips below the
    /// threshold, so the flag alone is not enough.
    pub fn meets(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

/// Margin grown (positive) or shrunk (negative) around the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin(f64);

impl RootMargin {
    /// Margin in CSS pixels.
    pub fn px(value: f64) -> Self {
        Self(value)
    }

    /// Margin that shrinks the viewport by an element's height, so the
    /// transition fires when that much space is left.
    pub fn inset(height: f64) -> Self {
        Self(-height)
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Options handed to an intersection observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    /// Margin around the viewport.
    pub root_margin: RootMargin,
}

impl ObserverOptions {
    /// Sticky nav: header watched with the nav height taken off the viewport.
    pub fn sticky(nav_height: f64) -> Self {
        Self {
            threshold: 0.0,
            root_margin: RootMargin::inset(nav_height),
        }
    }

    /// Section reveal at the given threshold.
    pub fn reveal(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: RootMargin::px(0.0),
        }
    }

    /// Lazy images, loaded `margin_px` before they scroll in.
    pub fn lazy(margin_px: u32) -> Self {
        Self {
            threshold: 0.0,
            root_margin: RootMargin::px(f64::from(margin_px)),
        }
    }
}

// ============================================================================
// Section reveal
// ============================================================================

/// Reveal state of one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    /// Still carries the hidden class.
    #[default]
    Hidden,
    /// Hidden class removed, no longer watched.
    Revealed,
}

/// What the caller has to do after a reveal report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    /// Remove the hidden class and unobserve the section.
    Reveal,
    /// Nothing to do.
    Ignore,
}

impl RevealState {
    /// Feeds one report through the state machine. Only a report with at
    /// least `threshold` of the section visible reveals it.
    pub fn observe(&mut self, visibility: Visibility, threshold: f64) -> RevealStep {
        match self {
            RevealState::Hidden if visibility.meets(threshold) => {
                debug!(ratio = visibility.ratio, threshold, "section revealed");
                *self = RevealState::Revealed;
                RevealStep::Reveal
            }
            _ => RevealStep::Ignore,
        }
    }

    /// Whether no further report can change this section.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RevealState::Revealed)
    }
}

// ============================================================================
// Lazy images
// ============================================================================

/// Loading state of one lazy image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LazyImage {
    /// Showing the placeholder source.
    #[default]
    Lazy,
    /// Real source assigned, waiting for the load event.
    Loading,
    /// Real image decoded, blur removed.
    Loaded,
}

/// What the caller has to do after a lazy image event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LazyStep {
    /// Assign the real source, listen for `load`, unobserve.
    SwapSource,
    /// Drop the blur class.
    RemoveBlur,
    /// Nothing to do.
    Ignore,
}

impl LazyImage {
    /// Feeds an intersection report.
    pub fn observe(&mut self, visibility: Visibility) -> LazyStep {
        match self {
            LazyImage::Lazy if visibility.is_intersecting => {
                *self = LazyImage::Loading;
                LazyStep::SwapSource
            }
            _ => LazyStep::Ignore,
        }
    }

    /// Feeds the image `load` event.
    ///
    /// Only an image whose source was already swapped can lose its blur;
    /// the placeholder's own load event is ignored.
    pub fn loaded(&mut self) -> LazyStep {
        match self {
            LazyImage::Loading => {
                *self = LazyImage::Loaded;
                LazyStep::RemoveBlur
            }
            _ => LazyStep::Ignore,
        }
    }

    /// Whether intersection reports can no longer change this image.
    pub fn is_swapped(&self) -> bool {
        !matches!(self, LazyImage::Lazy)
    }
}

// ============================================================================
// Sticky navigation
// ============================================================================

/// Whether the sticky state is removed again when scrolling back up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StickyMode {
    /// Stick when the header leaves, unstick when it returns.
    #[default]
    Toggle,
    /// Stick once and stay stuck.
    Latch,
}

/// Change to apply to the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickyChange {
    /// Add the sticky class.
    Stick,
    /// Remove the sticky class.
    Unstick,
}

/// Sticky state of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StickyNav {
    mode: StickyMode,
    stuck: bool,
}

impl StickyNav {
    /// Starts unstuck.
    pub fn new(mode: StickyMode) -> Self {
        Self { mode, stuck: false }
    }

    /// Whether the nav currently carries the sticky class.
    pub fn is_stuck(&self) -> bool {
        self.stuck
    }

    /// Feeds a report about the header element.
    pub fn observe(&mut self, header: Visibility) -> Option<StickyChange> {
        match (header.is_intersecting, self.stuck, self.mode) {
            (false, false, _) => {
                self.stuck = true;
                Some(StickyChange::Stick)
            }
            (true, true, StickyMode::Toggle) => {
                self.stuck = false;
                Some(StickyChange::Unstick)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_root_margin_renders_css() {
        assert_eq!(RootMargin::px(200.0).to_string(), "200px");
        assert_eq!(RootMargin::inset(90.0).to_string(), "-90px");
        assert_eq!(ObserverOptions::sticky(72.5).root_margin.to_string(), "-72.5px");
        assert_eq!(ObserverOptions::lazy(200).threshold, 0.0);
    }

    #[test]
    fn test_section_reveals_exactly_once() {
        let mut state = RevealState::default();

        // Initial report on observe: not intersecting.
        assert_eq!(state.observe(Visibility::HIDDEN, 0.15), RevealStep::Ignore);
        assert_eq!(state.observe(Visibility::visible(0.2), 0.15), RevealStep::Reveal);
        assert!(state.is_terminal());

        // Leaving and re-entering never reveals again.
        assert_eq!(state.observe(Visibility::HIDDEN, 0.15), RevealStep::Ignore);
        assert_eq!(state.observe(Visibility::visible(0.9), 0.15), RevealStep::Ignore);
        assert_eq!(state, RevealState::Revealed);
    }

    #[test]
    fn test_section_below_threshold_stays_hidden() {
        let threshold = ObserverOptions::reveal(0.15).threshold;
        let mut state = RevealState::default();

        // The browser flips `isIntersecting` as soon as a sliver is visible.
        let sliver = Visibility {
            is_intersecting: true,
            ratio: 0.02,
        };
        assert_eq!(state.observe(sliver, threshold), RevealStep::Ignore);
        assert!(!state.is_terminal());

        assert_eq!(state.observe(Visibility::visible(0.15), threshold), RevealStep::Reveal);
    }

    #[test]
    fn test_zero_threshold_reveals_on_any_intersection() {
        let mut state = RevealState::default();
        assert_eq!(state.observe(Visibility::visible(0.0), 0.0), RevealStep::Reveal);
    }

    #[test]
    fn test_lazy_image_swaps_once_and_unblurs_after_load() {
        let mut image = LazyImage::default();

        // A load event from the placeholder must not remove the blur.
        assert_eq!(image.loaded(), LazyStep::Ignore);
        assert_eq!(image.observe(Visibility::HIDDEN), LazyStep::Ignore);
        assert_eq!(image, LazyImage::Lazy);

        assert_eq!(image.observe(Visibility::visible(0.0)), LazyStep::SwapSource);
        assert!(image.is_swapped());
        assert_eq!(image.observe(Visibility::visible(1.0)), LazyStep::Ignore);

        assert_eq!(image.loaded(), LazyStep::RemoveBlur);
        assert_eq!(image, LazyImage::Loaded);
        assert_eq!(image.loaded(), LazyStep::Ignore);
    }

    #[test]
    fn test_sticky_toggles_both_ways() {
        let mut nav = StickyNav::new(StickyMode::Toggle);

        assert_eq!(nav.observe(Visibility::visible(1.0)), None);
        assert_eq!(nav.observe(Visibility::HIDDEN), Some(StickyChange::Stick));
        assert_eq!(nav.observe(Visibility::HIDDEN), None);
        assert_eq!(nav.observe(Visibility::visible(0.1)), Some(StickyChange::Unstick));
        assert!(!nav.is_stuck());
    }

    #[test]
    fn test_sticky_latch_never_unsticks() {
        let mut nav = StickyNav::new(StickyMode::Latch);

        assert_eq!(nav.observe(Visibility::HIDDEN), Some(StickyChange::Stick));
        assert_eq!(nav.observe(Visibility::visible(1.0)), None);
        assert!(nav.is_stuck());
    }
}
