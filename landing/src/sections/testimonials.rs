use leptos::prelude::*;

struct Testimonial {
    headline: &'static str,
    quote: &'static str,
    author: &'static str,
    location: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        headline: "Best financial decision ever!",
        quote: "Moving my salary here took ten minutes. The app tells me exactly where my money goes, and the card works everywhere I travel.",
        author: "Aarav Lynn",
        location: "San Francisco, USA",
    },
    Testimonial {
        headline: "The last step to becoming a complete minimalist",
        quote: "One account, one card, one app. I closed three old accounts the week I joined and have not missed any of them.",
        author: "Miyah Miles",
        location: "London, UK",
    },
    Testimonial {
        headline: "Finally free from old-school banks",
        quote: "No queues, no hidden fees, and support that answers in minutes. Getting a loan approved from my phone still surprises me.",
        author: "Francisco Gomes",
        location: "Lisbon, Portugal",
    },
];

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="section" id="section--3">
            <div class="section__title section__title--testimonials">
                <h2 class="section__description">"Not sure yet?"</h2>
                <h3 class="section__header">
                    "Millions of Bankists are already making their lives simpler."
                </h3>
            </div>

            <div class="slider">
                {TESTIMONIALS
                    .iter()
                    .map(|t| view! { <Slide testimonial=t /> })
                    .collect_view()}
                <button class="slider__btn slider__btn--left">"←"</button>
                <button class="slider__btn slider__btn--right">"→"</button>
                // Indicator dots are created by the slider behavior, one per slide.
                <div class="dots"></div>
            </div>
        </section>
    }
}

#[component]
fn Slide(testimonial: &'static Testimonial) -> impl IntoView {
    view! {
        <div class="slide">
            <div class="testimonial">
                <h5 class="testimonial__header">{testimonial.headline}</h5>
                <blockquote class="testimonial__text">{testimonial.quote}</blockquote>
                <address class="testimonial__author">
                    <h6 class="testimonial__name">{testimonial.author}</h6>
                    <p class="testimonial__location">{testimonial.location}</p>
                </address>
            </div>
        </div>
    }
}
