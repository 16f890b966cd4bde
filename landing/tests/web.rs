//! Browser tests for the page behaviors.
//!
//! Run with `wasm-pack test --headless --firefox landing`.

#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use bankist::PageConfig;
use bankist::viewport::{LazyImage, StickyMode, Visibility};
use bankist_landing::behaviors::{
    dom, fade, lazy, modal, navigation, reveal, slider, sticky, tabs,
};
use bankist_landing::install_all;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventInit, HtmlElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn page(html: &str) -> Document {
    let document = dom::document().unwrap();
    document.body().unwrap().set_inner_html(html);
    document
}

fn el(document: &Document, selector: &str) -> Element {
    dom::query(document, selector).unwrap()
}

fn click(element: &Element) {
    element.dyn_ref::<HtmlElement>().unwrap().click();
}

fn press(document: &Document, key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document.dispatch_event(&event).unwrap();
}

fn hover(element: &Element, event_name: &str) {
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict(event_name, &init).unwrap();
    element.dispatch_event(&event).unwrap();
}

fn fire(element: &Element, event_name: &str) {
    let event = Event::new(event_name).unwrap();
    element.dispatch_event(&event).unwrap();
}

/// Waits long enough for pending intersection observer callbacks to run.
async fn settle() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 150)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn has(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

fn transform(element: &Element) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("transform")
        .unwrap()
}

fn opacity(element: &Element) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("opacity")
        .unwrap()
}

const SLIDER: &str = r#"
    <div class="slider">
        <div class="slide">a</div>
        <div class="slide">b</div>
        <div class="slide">c</div>
        <button class="slider__btn slider__btn--left">l</button>
        <button class="slider__btn slider__btn--right">r</button>
        <div class="dots"></div>
    </div>
"#;

fn active_dot(document: &Document) -> Vec<bool> {
    dom::query_all(document, ".dots__dot")
        .unwrap()
        .iter()
        .map(|dot| has(dot, "dots__dot--active"))
        .collect()
}

fn transforms(document: &Document) -> Vec<String> {
    dom::query_all(document, ".slide")
        .unwrap()
        .iter()
        .map(transform)
        .collect()
}

#[wasm_bindgen_test]
fn test_slider_builds_dots_and_positions_slides() {
    let document = page(SLIDER);
    slider::install(&document).unwrap();

    let dots = dom::query_all(&document, ".dots__dot").unwrap();
    assert_eq!(dots.len(), 3);
    assert_eq!(dots[2].get_attribute("data-slide").as_deref(), Some("2"));
    assert_eq!(active_dot(&document), vec![true, false, false]);
    assert_eq!(
        transforms(&document),
        vec!["translateX(0%)", "translateX(100%)", "translateX(200%)"]
    );
}

#[wasm_bindgen_test]
fn test_slider_buttons_wrap_both_ways() {
    let document = page(SLIDER);
    slider::install(&document).unwrap();
    let right = el(&document, ".slider__btn--right");
    let left = el(&document, ".slider__btn--left");

    click(&right);
    assert_eq!(active_dot(&document), vec![false, true, false]);
    click(&right);
    click(&right);
    assert_eq!(active_dot(&document), vec![true, false, false]);

    // The left button goes back.
    click(&left);
    assert_eq!(active_dot(&document), vec![false, false, true]);
    assert_eq!(
        transforms(&document),
        vec!["translateX(-200%)", "translateX(-100%)", "translateX(0%)"]
    );
}

#[wasm_bindgen_test]
fn test_slider_indicator_jump_and_invalid_index() {
    let document = page(SLIDER);
    slider::install(&document).unwrap();
    let dots = dom::query_all(&document, ".dots__dot").unwrap();

    click(&dots[2]);
    assert_eq!(active_dot(&document), vec![false, false, true]);

    dots[1].set_attribute("data-slide", "9").unwrap();
    click(&dots[1]);
    assert_eq!(active_dot(&document), vec![false, false, true]);

    // Navigation continues from the jumped-to slide.
    click(&el(&document, ".slider__btn--right"));
    assert_eq!(active_dot(&document), vec![true, false, false]);
}

#[wasm_bindgen_test]
fn test_slider_arrow_keys() {
    let document = page(SLIDER);
    slider::install(&document).unwrap();

    press(&document, "ArrowLeft");
    assert_eq!(active_dot(&document), vec![false, false, true]);
    press(&document, "ArrowRight");
    assert_eq!(active_dot(&document), vec![true, false, false]);
}

#[wasm_bindgen_test]
fn test_slider_without_slides_fails_to_install() {
    let document = page(
        r#"<button class="slider__btn--left"></button>
           <button class="slider__btn--right"></button>
           <div class="dots"></div>"#,
    );
    assert!(slider::install(&document).is_err());
    assert!(dom::query_all(&document, ".dots__dot").unwrap().is_empty());
}

#[wasm_bindgen_test]
fn test_modal_open_and_escape() {
    let document = page(
        r##"<a class="btn--show-modal" href="#">open</a>
            <div class="modal hidden"><button class="btn--close-modal">x</button></div>
            <div class="overlay hidden"></div>"##,
    );
    modal::install(&document).unwrap();
    let dialog = el(&document, ".modal");
    let overlay = el(&document, ".overlay");

    click(&el(&document, ".btn--show-modal"));
    assert!(!has(&dialog, "hidden"));
    assert!(!has(&overlay, "hidden"));

    press(&document, "Escape");
    assert!(has(&dialog, "hidden"));
    assert!(has(&overlay, "hidden"));

    // Already closed: no-op.
    press(&document, "Escape");
    assert!(has(&dialog, "hidden"));

    click(&el(&document, ".btn--show-modal"));
    click(&overlay);
    assert!(has(&dialog, "hidden"));
}

#[wasm_bindgen_test]
fn test_tab_click_on_inner_span() {
    let document = page(
        r#"<div class="operations__tab-container">
               <button class="operations__tab operations__tab--active" data-tab="1"><span>01</span>One</button>
               <button class="operations__tab" data-tab="2"><span id="inner">02</span>Two</button>
           </div>
           <div class="operations__content operations__content--1 operations__content--active"></div>
           <div class="operations__content operations__content--2"></div>"#,
    );
    tabs::install(&document).unwrap();

    click(&el(&document, "#inner"));

    let tabs = dom::query_all(&document, ".operations__tab").unwrap();
    assert!(!has(&tabs[0], "operations__tab--active"));
    assert!(has(&tabs[1], "operations__tab--active"));
    assert!(!has(&el(&document, ".operations__content--1"), "operations__content--active"));
    assert!(has(&el(&document, ".operations__content--2"), "operations__content--active"));

    // Clicking the container itself changes nothing.
    click(&el(&document, ".operations__tab-container"));
    assert!(has(&tabs[1], "operations__tab--active"));
}

#[wasm_bindgen_test]
fn test_fade_dims_siblings_and_logo() {
    let document = page(
        r##"<nav class="nav">
               <img class="nav__logo" src="" />
               <ul class="nav__links">
                   <li><a class="nav__link" id="one" href="#a">a</a></li>
                   <li><a class="nav__link" id="two" href="#b">b</a></li>
               </ul>
           </nav>"##,
    );
    fade::install(&document, PageConfig::default().fade).unwrap();
    let one = el(&document, "#one");
    let two = el(&document, "#two");
    let logo = el(&document, ".nav__logo");

    hover(&one, "mouseover");
    assert_eq!(opacity(&two), "0.5");
    assert_eq!(opacity(&logo), "0.5");
    assert_eq!(opacity(&one), "");

    hover(&one, "mouseout");
    assert_eq!(opacity(&two), "1");
    assert_eq!(opacity(&logo), "1");
}

#[wasm_bindgen_test]
fn test_reveal_hides_sections_on_install() {
    let document = page(r#"<section class="section"></section><section class="section"></section>"#);
    reveal::install(&document, 0.15).unwrap();

    for section in dom::query_all(&document, ".section").unwrap() {
        assert!(has(&section, "section--hidden"));
    }
}

const SECTION_STYLE: &str = "position: fixed; left: 0; width: 200px;";

#[wasm_bindgen_test]
async fn test_reveal_needs_threshold_and_fires_once() {
    let document = page(&format!(
        r#"<section class="section" id="shown" style="{SECTION_STYLE} top: 0; height: 200px;"></section>
           <section class="section" id="sliver" style="{SECTION_STYLE} top: calc(100vh - 4px); height: 1000px;"></section>
           <section class="section" id="below" style="{SECTION_STYLE} top: 5000px; height: 200px;"></section>"#
    ));
    reveal::install(&document, 0.15).unwrap();
    settle().await;

    let shown = el(&document, "#shown");
    assert!(!has(&shown, "section--hidden"));
    // A few pixels on screen is below 15%.
    assert!(has(&el(&document, "#sliver"), "section--hidden"));
    assert!(has(&el(&document, "#below"), "section--hidden"));

    // Once revealed the section is no longer watched.
    dom::set_class(&shown, "section--hidden", true).unwrap();
    dom::set_style(&shown, "top", "5000px").unwrap();
    settle().await;
    dom::set_style(&shown, "top", "0px").unwrap();
    settle().await;
    assert!(has(&shown, "section--hidden"));
}

const MISSING_IMAGE: &str = "img/does-not-exist.jpg";

#[wasm_bindgen_test]
fn test_swap_source_keeps_blur_until_load() {
    let document = page(&format!(
        r#"<img class="features__img lazy-img" data-src="{MISSING_IMAGE}" />"#
    ));
    let image = el(&document, "img");
    let state: lazy::Shared = Rc::new(RefCell::new(LazyImage::default()));
    state.borrow_mut().observe(Visibility {
        is_intersecting: true,
        ratio: 1.0,
    });

    lazy::swap_source(&image, Rc::clone(&state)).unwrap();
    assert_eq!(image.get_attribute("src").as_deref(), Some(MISSING_IMAGE));
    assert!(has(&image, "lazy-img"));

    fire(&image, "load");
    assert!(!has(&image, "lazy-img"));
    assert_eq!(*state.borrow(), LazyImage::Loaded);
}

#[wasm_bindgen_test]
async fn test_lazy_install_swaps_visible_images_only() {
    let document = page(&format!(
        r#"<img id="near" class="lazy-img" data-src="{MISSING_IMAGE}"
                style="position: fixed; top: 0; width: 10px; height: 10px;" />
           <img id="far" class="lazy-img" data-src="{MISSING_IMAGE}"
                style="position: fixed; top: 9000px; width: 10px; height: 10px;" />"#
    ));
    lazy::install(&document, 200).unwrap();
    settle().await;

    let near = el(&document, "#near");
    let far = el(&document, "#far");
    assert_eq!(near.get_attribute("src").as_deref(), Some(MISSING_IMAGE));
    assert_eq!(far.get_attribute("src"), None);

    // The missing file fires `error`, never `load`: the blur stays.
    assert!(has(&near, "lazy-img"));
    fire(&near, "load");
    assert!(!has(&near, "lazy-img"));
    assert!(has(&far, "lazy-img"));
}

const STICKY_PAGE: &str = r#"
    <nav class="nav" style="height: 50px;"></nav>
    <header class="header" style="position: fixed; left: 0; top: -2000px; width: 100px; height: 300px;"></header>
"#;

#[wasm_bindgen_test]
async fn test_sticky_nav_toggles_with_header() {
    let document = page(STICKY_PAGE);
    sticky::install(&document, StickyMode::Toggle).unwrap();
    settle().await;

    let nav = el(&document, ".nav");
    assert!(has(&nav, "sticky"));

    dom::set_style(&el(&document, ".header"), "top", "0px").unwrap();
    settle().await;
    assert!(!has(&nav, "sticky"));
}

#[wasm_bindgen_test]
async fn test_sticky_nav_latch_stays_stuck() {
    let document = page(STICKY_PAGE);
    sticky::install(&document, StickyMode::Latch).unwrap();
    settle().await;

    let nav = el(&document, ".nav");
    assert!(has(&nav, "sticky"));

    dom::set_style(&el(&document, ".header"), "top", "0px").unwrap();
    settle().await;
    assert!(has(&nav, "sticky"));
}

const NAV_PAGE: &str = r##"
    <div id="page">
        <button class="btn--scroll-to">Learn more</button>
        <nav class="nav">
            <ul class="nav__links">
                <li><a class="nav__link" id="to-section" href="#section--2">Operations</a></li>
                <li><a class="nav__link" id="bare" href="#">Top</a></li>
                <li><a class="nav__link" id="external" href="https://example.com/">Elsewhere</a></li>
            </ul>
        </nav>
        <section class="section" id="section--1"></section>
        <section class="section" id="section--2"></section>
    </div>
"##;

/// Records, for each click bubbling out of `root`, whether a handler below
/// cancelled it, then cancels it so the test page never navigates.
fn record_cancellation(root: &Element) -> Rc<Cell<Option<bool>>> {
    let seen = Rc::new(Cell::new(None));
    let record = Rc::clone(&seen);
    dom::listen(root, "click", move |event| {
        record.set(Some(event.default_prevented()));
        event.prevent_default();
    })
    .unwrap();
    seen
}

fn click_cancelled(element: &Element, seen: &Cell<Option<bool>>) -> bool {
    seen.set(None);
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("click", &init).unwrap();
    element.dispatch_event(&event).unwrap();
    seen.get().unwrap()
}

#[wasm_bindgen_test]
fn test_nav_links_scroll_only_to_section_anchors() {
    let document = page(NAV_PAGE);
    navigation::install(&document).unwrap();
    let seen = record_cancellation(&el(&document, "#page"));

    assert!(click_cancelled(&el(&document, "#to-section"), &seen));
    assert!(!click_cancelled(&el(&document, "#bare"), &seen));
    assert!(!click_cancelled(&el(&document, "#external"), &seen));
    // The list between links is not a link.
    assert!(!click_cancelled(&el(&document, ".nav__links"), &seen));
}

#[wasm_bindgen_test]
fn test_navigation_requires_first_section() {
    let document = page(
        r#"<button class="btn--scroll-to"></button>
           <ul class="nav__links"></ul>"#,
    );
    assert!(navigation::install(&document).is_err());
}

#[wasm_bindgen_test]
fn test_install_all_isolates_failures() {
    let document = page(SLIDER);
    let report = install_all(&document, &PageConfig::default());

    assert!(!report.is_complete());
    assert!(report.installed.contains(&"slider"));
    assert!(report.installed.contains(&"reveal"));
    assert!(report.installed.contains(&"lazy"));
    assert!(report.failed.iter().any(|(name, _)| *name == "modal"));
}
