use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <ul class="footer__nav">
                <li class="footer__item"><a class="footer__link" href="#">"About"</a></li>
                <li class="footer__item"><a class="footer__link" href="#">"Pricing"</a></li>
                <li class="footer__item"><a class="footer__link" href="#">"Terms of Use"</a></li>
                <li class="footer__item"><a class="footer__link" href="#">"Privacy Policy"</a></li>
                <li class="footer__item"><a class="footer__link" href="#">"Careers"</a></li>
                <li class="footer__item"><a class="footer__link" href="#">"Blog"</a></li>
                <li class="footer__item"><a class="footer__link" href="#">"Contact Us"</a></li>
            </ul>
            <img src="img/icon.png" alt="Logo" class="footer__logo" />
            <p class="footer__copyright">"Developed by The Bankist Team (c)2025"</p>
        </footer>
    }
}
