use leptos::prelude::*;

#[component]
pub fn Signup() -> impl IntoView {
    view! {
        <section class="section section--sign-up">
            <div class="section__title">
                <h3 class="section__header">
                    "The best day to join Bankist was one year ago. The second best is today!"
                </h3>
            </div>
            <button class="btn btn--show-modal">"Open your free account today!"</button>
        </section>
    }
}
