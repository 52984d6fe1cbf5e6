use super::{ICON_ARROW_DOWN, ICON_PHONE, ICON_SHIELD, ICON_TRUCK, Icon};
use crate::types::SectionId;
use leptos::prelude::*;

const TRUST_BADGES: [(&str, &str, &str); 3] = [
    ("Free Shipping", ICON_TRUCK, "trust-icon trust-icon-primary"),
    ("Secure Payment", ICON_SHIELD, "trust-icon trust-icon-accent"),
    ("24/7 Support", ICON_PHONE, "trust-icon trust-icon-secondary"),
];

#[component]
pub fn Hero() -> impl IntoView {
    let products_href = SectionId::Products.href();

    view! {
        <section id=SectionId::Hero.as_str() class="hero">
            <div class="hero-backdrop" aria-hidden="true">
                <div class="hero-blob hero-blob-1"></div>
                <div class="hero-blob hero-blob-2"></div>
                <div class="hero-blob hero-blob-3"></div>
                <div class="hero-blob hero-blob-4"></div>
                <div class="hero-grid"></div>
                <div class="hero-vignette"></div>
            </div>

            <div class="container hero-content">
                <div class="hero-badge fade-in-down">
                    <span class="hero-badge-dot"></span>
                    <span>"Trusted by 10,000+ Customers"</span>
                </div>

                <h1 class="hero-title fade-in-up">
                    <span class="hero-title-lead">"Discover Your"</span>
                    <span class="hero-title-accent">"Perfect Product"</span>
                </h1>

                <p class="hero-description fade-in-up delay-200">
                    "Shop 1000+ premium products with exclusive member deals and free shipping"
                </p>

                <div class="hero-actions fade-in-up delay-400">
                    <a href=products_href.clone() class="btn btn-primary">
                        "Start Shopping"
                        <span class="btn-arrow">"→"</span>
                    </a>
                    <a href=products_href class="btn btn-ghost">
                        "View Deals"
                    </a>
                </div>

                <div class="trust-badges fade-in-up delay-600">
                    {TRUST_BADGES
                        .iter()
                        .map(|&(label, icon, class)| {
                            view! {
                                <div class="trust-badge">
                                    <div class=class>
                                        <Icon path=icon />
                                    </div>
                                    <p>{label}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="scroll-indicator" aria-hidden="true">
                    <Icon path=ICON_ARROW_DOWN />
                </div>
            </div>
        </section>
    }
}
