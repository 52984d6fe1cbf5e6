// Go Commerce Landing Page — Leptos 0.8 Edition
// Developed by The Go Commerce Team (c)2025

use leptos::prelude::*;
use storefront::components::StorefrontPage;
use storefront::styles::STOREFRONT_CSS;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!("mounting storefront landing page");
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <style>{STOREFRONT_CSS}</style>
        <StorefrontPage />
    }
}
