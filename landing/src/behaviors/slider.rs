//! Testimonials carousel: arrow buttons, arrow keys and indicator dots.

use std::cell::RefCell;
use std::rc::Rc;

use bankist::dispatch::{Capability, DispatchTable};
use bankist::keys::Key;
use bankist::selectors::{
    DATA_SLIDE, DOT, DOT_ACTIVE, DOTS_SELECTOR, SLIDE_SELECTOR, SLIDER_LEFT_SELECTOR,
    SLIDER_RIGHT_SELECTOR,
};
use bankist::{Carousel, Frame};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent};

use super::dom::{self, DomTarget};
use crate::error::Result;

#[derive(Debug, Clone, Copy)]
enum Step {
    Next,
    Previous,
}

struct Slider {
    carousel: Carousel,
    slides: Vec<Element>,
    dots: Vec<Element>,
}

impl Slider {
    fn step(&mut self, step: Step) -> Result<()> {
        let frame = match step {
            Step::Next => self.carousel.next(),
            Step::Previous => self.carousel.previous(),
        };
        self.render(&frame)
    }

    fn jump(&mut self, raw: &str) -> Result<()> {
        let index = self.carousel.parse_indicator(raw)?;
        let frame = self.carousel.jump_to(index);
        self.render(&frame)
    }

    fn render(&self, frame: &Frame) -> Result<()> {
        for (slide, transform) in self.slides.iter().zip(frame.transforms()) {
            dom::set_style(slide, "transform", &transform)?;
        }
        for (dot, active) in self.dots.iter().zip(frame.indicator_states()) {
            dom::set_class(dot, DOT_ACTIVE, active)?;
        }
        Ok(())
    }
}

/// One `button.dots__dot[data-slide=i]` per slide, appended in slide order.
fn create_dots(document: &Document, container: &Element, count: usize) -> Result<Vec<Element>> {
    (0..count)
        .map(|i| -> Result<Element> {
            let dot = document.create_element("button")?;
            dot.set_class_name(DOT);
            dot.set_attribute(DATA_SLIDE, &i.to_string())?;
            container.append_child(&dot)?;
            Ok(dot)
        })
        .collect()
}

pub fn install(document: &Document) -> Result<()> {
    let slides = dom::query_all(document, SLIDE_SELECTOR)?;
    let left = dom::query(document, SLIDER_LEFT_SELECTOR)?;
    let right = dom::query(document, SLIDER_RIGHT_SELECTOR)?;
    let dot_container = dom::query(document, DOTS_SELECTOR)?;

    let carousel = Carousel::new(slides.len())?;
    let dots = create_dots(document, &dot_container, slides.len())?;
    let slider = Slider {
        carousel,
        slides,
        dots,
    };
    slider.render(&slider.carousel.frame())?;
    let slider = Rc::new(RefCell::new(slider));

    for (button, step) in [(&right, Step::Next), (&left, Step::Previous)] {
        let slider = Rc::clone(&slider);
        dom::listen(button, "click", move |_| {
            if let Err(err) = slider.borrow_mut().step(step) {
                warn!(%err, ?step, "slide failed");
            }
        })?;
    }

    let on_key = Rc::clone(&slider);
    dom::listen(document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let step = match Key::from_event_key(&event.key()) {
            Key::ArrowLeft => Step::Previous,
            Key::ArrowRight => Step::Next,
            _ => return,
        };
        if let Err(err) = on_key.borrow_mut().step(step) {
            warn!(%err, ?step, "slide failed");
        }
    })?;

    let table = DispatchTable::new().route(Capability::SlideIndicator);
    let on_dot = Rc::clone(&slider);
    dom::listen(&dot_container, "click", move |event| {
        let Some(dot) = dom::event_target(&event)
            .and_then(|target| table.resolve(DomTarget(target)))
            .map(|resolved| resolved.element.0)
        else {
            return;
        };
        let raw = dot.get_attribute(DATA_SLIDE).unwrap_or_default();
        if let Err(err) = on_dot.borrow_mut().jump(&raw) {
            warn!(%err, "indicator ignored");
        }
    })?;

    debug!(slides = slider.borrow().carousel.slide_count(), "slider installed");
    Ok(())
}
