use super::Stars;
use crate::catalog;
use crate::types::{Product, StockStatus, format_rupiah};
use leptos::prelude::*;

#[component]
pub fn BestSellers() -> impl IntoView {
    view! {
        <section class="section section-best-sellers">
            <div class="container">
                <div class="section-header">
                    <span class="section-label">"Top Picks"</span>
                    <h2 class="section-title">"Best Sellers"</h2>
                    <p class="section-description">
                        "What everyone is adding to their cart this month."
                    </p>
                </div>
                <div class="product-grid">
                    {catalog::best_sellers()
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

fn stock_badge(status: StockStatus) -> Option<(&'static str, String)> {
    match status {
        StockStatus::InStock => None,
        StockStatus::Low(n) => Some(("stock-badge stock-low", format!("Only {n} left"))),
        StockStatus::SoldOut => Some(("stock-badge stock-out", "Sold out".to_string())),
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let badge = stock_badge(product.stock_status())
        .map(|(class, text)| view! { <span class=class>{text}</span> });
    let price = format_rupiah(product.price);
    let sold_out = product.stock_status() == StockStatus::SoldOut;

    view! {
        <article class="product-card" data-product-id=product.id>
            <div class="product-media">
                <span class="product-category">{product.category}</span>
                {badge}
            </div>
            <div class="product-body">
                <h3 class="product-name">{product.name}</h3>
                <Stars rating=product.rating />
                <p class="product-price">{price}</p>
                <button type="button" class="btn btn-primary btn-block" disabled=sold_out>
                    {if sold_out { "Sold out" } else { "Add to Cart" }}
                </button>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn product(stock: u32) -> Product {
        Product {
            id: "gc-test".into(),
            name: "Test Mug".into(),
            price: 59_000,
            stock,
            category: "home-living".into(),
            rating: 4.0,
        }
    }

    #[test]
    fn sold_out_button_is_disabled_and_says_so() {
        let html = view! { <ProductCard product=product(0) /> }.to_html();

        assert!(html.contains("disabled"));
        assert_eq!(html.matches("Sold out").count(), 2, "badge and button");
        assert!(!html.contains("Add to Cart"));
    }

    #[test]
    fn in_stock_button_adds_to_cart() {
        let html = view! { <ProductCard product=product(20) /> }.to_html();

        assert!(!html.contains("disabled"));
        assert!(html.contains("Add to Cart"));
        assert!(html.contains("Rp 59.000"));
    }

    #[test]
    fn badge_only_for_low_or_sold_out() {
        assert_eq!(stock_badge(StockStatus::InStock), None);
        assert_eq!(
            stock_badge(StockStatus::Low(2)),
            Some(("stock-badge stock-low", "Only 2 left".to_string()))
        );
        assert_eq!(
            stock_badge(StockStatus::SoldOut).map(|(_, text)| text),
            Some("Sold out".to_string())
        );
    }
}
