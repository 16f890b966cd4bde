//! Class names, selectors and data attributes shared with the page markup.
//!
//! Bare names (no leading dot) are used with `classList`; `*_SELECTOR`
//! constants are for `querySelector`.

#![allow(missing_docs)]

// Modal
pub const MODAL_SELECTOR: &str = ".modal";
pub const OVERLAY_SELECTOR: &str = ".overlay";
pub const CLOSE_MODAL_SELECTOR: &str = ".btn--close-modal";
pub const SHOW_MODAL_SELECTOR: &str = ".btn--show-modal";
pub const HIDDEN: &str = "hidden";

// Navigation
pub const NAV_SELECTOR: &str = ".nav";
pub const NAV_LINKS_SELECTOR: &str = ".nav__links";
pub const NAV_LINK: &str = "nav__link";
pub const NAV_LINK_SELECTOR: &str = ".nav__link";
pub const NAV_LOGO_SELECTOR: &str = "img";
pub const STICKY: &str = "sticky";
pub const SCROLL_TO_SELECTOR: &str = ".btn--scroll-to";
pub const FIRST_SECTION_ID: &str = "section--1";

// Tabs
pub const TAB_CONTAINER_SELECTOR: &str = ".operations__tab-container";
pub const TAB_SELECTOR: &str = ".operations__tab";
pub const TAB_ACTIVE: &str = "operations__tab--active";
pub const CONTENT_SELECTOR: &str = ".operations__content";
pub const CONTENT_ACTIVE: &str = "operations__content--active";
pub const CONTENT_PREFIX: &str = "operations__content--";

// Header and sections
pub const HEADER_SELECTOR: &str = ".header";
pub const SECTION_SELECTOR: &str = ".section";
pub const SECTION_HIDDEN: &str = "section--hidden";

// Lazy images
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const LAZY_IMG: &str = "lazy-img";

// Slider
pub const SLIDE_SELECTOR: &str = ".slide";
pub const SLIDER_LEFT_SELECTOR: &str = ".slider__btn--left";
pub const SLIDER_RIGHT_SELECTOR: &str = ".slider__btn--right";
pub const DOTS_SELECTOR: &str = ".dots";
pub const DOT: &str = "dots__dot";
pub const DOT_ACTIVE: &str = "dots__dot--active";

// Data attributes
pub const DATA_TAB: &str = "data-tab";
pub const DATA_SLIDE: &str = "data-slide";
pub const DATA_SRC: &str = "data-src";

// Config
pub const CONFIG_ELEMENT_ID: &str = "bankist-config";
