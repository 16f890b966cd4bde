use super::Nav;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <Nav />
            <div class="header__title">
                <h1>
                    "When "
                    <span class="highlight">"banking"</span>
                    " meets"
                    <br />
                    <span class="highlight">"minimalist"</span>
                </h1>
                <h4>"A simpler banking experience for a simpler life."</h4>
                <button class="btn--text btn--scroll-to">"Learn more ↓"</button>
                <img src="img/hero.png" class="header__img" alt="Minimalist bank items" />
            </div>
        </header>
    }
}
