use super::Stars;
use crate::catalog::{self, SOCIAL_STATS};
use crate::types::{SectionId, Testimonial};
use leptos::prelude::*;

#[component]
pub fn SocialProof() -> impl IntoView {
    view! {
        <section id=SectionId::Testimonials.as_str() class="section section-testimonials">
            <div class="container">
                <div class="section-header">
                    <span class="section-label">"Testimonials"</span>
                    <h2 class="section-title">"Loved by Shoppers"</h2>
                </div>
                <div class="testimonial-grid">
                    {catalog::testimonials()
                        .into_iter()
                        .map(|testimonial| view! { <TestimonialCard testimonial=testimonial /> })
                        .collect_view()}
                </div>
                <dl class="social-stats">
                    {SOCIAL_STATS
                        .iter()
                        .map(|&(value, label)| {
                            view! {
                                <div class="social-stat">
                                    <dt>{label}</dt>
                                    <dd>{value}</dd>
                                </div>
                            }
                        })
                        .collect_view()}
                </dl>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    view! {
        <figure class="testimonial-card">
            <Stars rating=testimonial.rating />
            <blockquote class="testimonial-quote">{testimonial.quote}</blockquote>
            <figcaption>
                <span class="testimonial-author">{testimonial.author}</span>
                <span class="testimonial-role">{testimonial.role}</span>
            </figcaption>
        </figure>
    }
}
