//! Manual image/text carousel.
//!
//! A [`Carousel`] owns the slide count and the current position. Every
//! navigation call returns a [`Frame`]: the horizontal offset of each slide
//! and the indicator that should be marked active. The browser layer applies
//! frames verbatim, so the DOM can never disagree with the position.

use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};

/// Position of a slide, validated against the carousel it came from.
///
/// The only ways to obtain one are [`Carousel::index`],
/// [`Carousel::parse_indicator`] and [`Carousel::position`], so an
/// out-of-range index never reaches [`Carousel::go_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlideIndex(usize);

impl SlideIndex {
    /// Zero-based slide number.
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for SlideIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Layout of the whole carousel for one position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    offsets: Vec<i64>,
    active: SlideIndex,
}

impl Frame {
    fn at(slide_count: usize, active: SlideIndex) -> Self {
        let offsets = (0..slide_count)
            .map(|i| 100 * (i as i64 - active.0 as i64))
            .collect();
        Self { offsets, active }
    }

    /// Horizontal offset of each slide, in percent of the track width.
    pub fn offsets(&self) -> &[i64] {
        &self.offsets
    }

    /// CSS `transform` value for one slide.
    pub fn transform(&self, slide: usize) -> Option<String> {
        self.offsets
            .get(slide)
            .map(|offset| format!("translateX({offset}%)"))
    }

    /// CSS `transform` values for all slides, in slide order.
    pub fn transforms(&self) -> impl Iterator<Item = String> + '_ {
        self.offsets
            .iter()
            .map(|offset| format!("translateX({offset}%)"))
    }

    /// The indicator that must carry the active state.
    pub fn active_indicator(&self) -> SlideIndex {
        self.active
    }

    /// Active flag per indicator, in slide order. Exactly one is `true`.
    pub fn indicator_states(&self) -> Vec<bool> {
        activate_indicator(self.offsets.len(), self.active)
    }
}

/// Clears every indicator and activates the one for `index`.
pub fn activate_indicator(indicator_count: usize, index: SlideIndex) -> Vec<bool> {
    (0..indicator_count).map(|i| i == index.0).collect()
}

/// Carousel position over a fixed, non-empty set of slides.
#[derive(Debug, Clone)]
pub struct Carousel {
    slide_count: usize,
    current: SlideIndex,
}

impl Carousel {
    /// Creates a carousel positioned on the first slide.
    pub fn new(slide_count: usize) -> Result<Self> {
        if slide_count == 0 {
            return Err(Error::EmptyCarousel);
        }
        Ok(Self {
            slide_count,
            current: SlideIndex(0),
        })
    }

    /// Number of slides, fixed at construction.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// The slide currently at offset zero.
    pub fn position(&self) -> SlideIndex {
        self.current
    }

    /// Validates a raw slide number.
    pub fn index(&self, raw: usize) -> Result<SlideIndex> {
        if raw < self.slide_count {
            Ok(SlideIndex(raw))
        } else {
            Err(Error::InvalidSlideIndex {
                raw: raw.to_string(),
                count: self.slide_count,
            })
        }
    }

    /// Validates the `data-slide` attribute of an indicator.
    pub fn parse_indicator(&self, raw: &str) -> Result<SlideIndex> {
        let invalid = || Error::InvalidSlideIndex {
            raw: raw.to_string(),
            count: self.slide_count,
        };
        let value = raw.trim().parse::<usize>().map_err(|_| invalid())?;
        self.index(value).map_err(|_| invalid())
    }

    /// Frame for the current position without moving.
    pub fn frame(&self) -> Frame {
        Frame::at(self.slide_count, self.current)
    }

    /// Moves to `index` and returns the resulting layout.
    pub fn go_to(&mut self, index: SlideIndex) -> Frame {
        debug!(from = self.current.0, to = index.0, "slide");
        self.current = index;
        self.frame()
    }

    /// Indicator click: jump straight to `index` without visiting the
    /// slides in between.
    pub fn jump_to(&mut self, index: SlideIndex) -> Frame {
        self.go_to(index)
    }

    /// Advances one slide, wrapping from the last to the first.
    pub fn next(&mut self) -> Frame {
        let target = if self.current.0 == self.slide_count - 1 {
            0
        } else {
            self.current.0 + 1
        };
        self.go_to(SlideIndex(target))
    }

    /// Steps back one slide, wrapping from the first to the last.
    pub fn previous(&mut self) -> Frame {
        let target = if self.current.0 == 0 {
            self.slide_count - 1
        } else {
            self.current.0 - 1
        };
        self.go_to(SlideIndex(target))
    }
}
