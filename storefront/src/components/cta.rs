use crate::types::SectionId;
use leptos::prelude::*;

#[component]
pub fn Cta() -> impl IntoView {
    view! {
        <section class="section section-cta">
            <div class="container cta-inner">
                <h2 class="cta-title">"Ready to Start Shopping?"</h2>
                <p class="cta-description">
                    "Join 10,000+ members and unlock exclusive deals on your first order."
                </p>
                <a href=SectionId::Products.href() class="btn btn-light">
                    "Browse Products"
                </a>
            </div>
        </section>
    }
}
