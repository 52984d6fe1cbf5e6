use super::Icon;
use crate::catalog;
use crate::types::SectionId;
use leptos::prelude::*;

#[component]
pub fn WhyUs() -> impl IntoView {
    view! {
        <section id=SectionId::WhyUs.as_str() class="section section-why-us">
            <div class="container">
                <div class="section-header">
                    <span class="section-label">"Why Us"</span>
                    <h2 class="section-title">"Shopping, Minus the Hassle"</h2>
                </div>
                <div class="benefit-grid">
                    {catalog::benefits()
                        .into_iter()
                        .map(|benefit| {
                            view! {
                                <div class="benefit-card">
                                    <div class="benefit-icon">
                                        <Icon path=benefit.icon />
                                    </div>
                                    <h3 class="benefit-title">{benefit.title}</h3>
                                    <p class="benefit-description">{benefit.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
