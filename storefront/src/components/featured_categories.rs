use crate::catalog;
use crate::types::{Category, SectionId};
use leptos::prelude::*;

#[component]
pub fn FeaturedCategories() -> impl IntoView {
    view! {
        <section id=SectionId::Products.as_str() class="section section-categories">
            <div class="container">
                <div class="section-header">
                    <span class="section-label">"Shop by Category"</span>
                    <h2 class="section-title">"Featured Categories"</h2>
                    <p class="section-description">
                        "Hand-picked collections, refreshed every week."
                    </p>
                </div>
                <div class="category-grid">
                    {catalog::featured_categories()
                        .into_iter()
                        .map(|category| view! { <CategoryCard category=category /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CategoryCard(category: Category) -> impl IntoView {
    let count = format!("{}+ items", category.item_count);

    view! {
        <div class="category-card" data-category=category.slug>
            <h3 class="category-name">{category.name}</h3>
            <p class="category-description">{category.description}</p>
            <span class="category-count">{count}</span>
        </div>
    }
}
