use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="section" id="section--1">
            <div class="section__title">
                <h2 class="section__description">"Features"</h2>
                <h3 class="section__header">
                    "Everything you need in a modern bank and more."
                </h3>
            </div>

            <div class="features">
                <FeatureImage placeholder="img/digital-lazy.jpg" full="img/digital.jpg" alt="Computer" />
                <FeatureText
                    title="100% digital bank"
                    body="Open an account in minutes and manage it from any device, with no branch visits and no paperwork."
                />
                <FeatureText
                    title="Watch your money grow"
                    body="Savings goals and round-ups put spare change to work, with interest paid out every month."
                />
                <FeatureImage placeholder="img/grow-lazy.jpg" full="img/grow.jpg" alt="Plant" />
                <FeatureImage placeholder="img/card-lazy.jpg" full="img/card.jpg" alt="Credit card" />
                <FeatureText
                    title="Free debit card included"
                    body="Pay anywhere in the world without fees, and freeze or unfreeze the card from the app."
                />
            </div>
        </section>
    }
}

/// Lazy image: the blurred placeholder ships in `src`, the real image in
/// `data-src` until the lazy loader swaps them.
#[component]
fn FeatureImage(placeholder: &'static str, full: &'static str, alt: &'static str) -> impl IntoView {
    view! {
        <img src=placeholder data-src=full alt=alt class="features__img lazy-img" />
    }
}

#[component]
fn FeatureText(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="features__feature">
            <h5 class="features__header">{title}</h5>
            <p>{body}</p>
        </div>
    }
}
