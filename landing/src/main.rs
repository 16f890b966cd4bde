// Bankist Landing Page - Leptos 0.8 Edition
// Developed by The Bankist Team (c)2025

use bankist_landing::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}
