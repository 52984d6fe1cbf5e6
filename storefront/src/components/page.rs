//! Page composer: navbar followed by the six landing sections.

use super::{BestSellers, Cta, FeaturedCategories, Hero, Navbar, SocialProof, WhyUs};
use leptos::prelude::*;

#[component]
pub fn StorefrontPage() -> impl IntoView {
    view! {
        <Navbar />
        <main>
            <Hero />
            <FeaturedCategories />
            <BestSellers />
            <WhyUs />
            <SocialProof />
            <Cta />
        </main>
    }
}
