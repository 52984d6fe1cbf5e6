//! Static storefront content rendered by the landing sections.

use crate::types::{Benefit, Category, Product, Testimonial};

pub fn featured_categories() -> Vec<Category> {
    [
        ("electronics", "Electronics", "Phones, audio and smart gadgets", 240),
        ("fashion", "Fashion", "Everyday wear and seasonal drops", 380),
        ("home-living", "Home & Living", "Furniture, decor and kitchenware", 210),
        ("beauty", "Beauty", "Skincare, makeup and self-care", 170),
    ]
    .into_iter()
    .map(|(slug, name, description, item_count)| Category {
        slug: slug.into(),
        name: name.into(),
        description: description.into(),
        item_count,
    })
    .collect()
}

pub fn best_sellers() -> Vec<Product> {
    [
        ("gc-1001", "Wireless Noise-Cancelling Earbuds", 749_000, 42, "electronics", 4.8),
        ("gc-1002", "Everyday Canvas Sneakers", 329_000, 4, "fashion", 4.6),
        ("gc-1003", "Ceramic Pour-Over Set", 215_000, 18, "home-living", 4.7),
        ("gc-1004", "Hydrating Serum 30ml", 139_000, 0, "beauty", 4.9),
    ]
    .into_iter()
    .map(|(id, name, price, stock, category, rating)| Product {
        id: id.into(),
        name: name.into(),
        price,
        stock,
        category: category.into(),
        rating,
    })
    .collect()
}

pub fn benefits() -> Vec<Benefit> {
    [
        (
            "Free Shipping",
            "Free delivery across Indonesia on orders above Rp 150.000.",
            crate::components::ICON_TRUCK,
        ),
        (
            "Secure Payment",
            "Bank transfer, e-wallet and cards, all protected end to end.",
            crate::components::ICON_SHIELD,
        ),
        (
            "Easy Returns",
            "Changed your mind? Return within 14 days, no questions asked.",
            crate::components::ICON_RETURN,
        ),
        (
            "24/7 Support",
            "Real people on chat and phone, any time of day.",
            crate::components::ICON_PHONE,
        ),
    ]
    .into_iter()
    .map(|(title, description, icon)| Benefit {
        title: title.into(),
        description: description.into(),
        icon: icon.into(),
    })
    .collect()
}

pub fn testimonials() -> Vec<Testimonial> {
    [
        (
            "Rina Wulandari",
            "Member since 2023",
            "Orders arrive faster than anywhere else I shop, and the member deals are real.",
            5.0,
        ),
        (
            "Budi Santoso",
            "Verified buyer",
            "The earbuds were half the price of the mall. Returns were painless too.",
            4.5,
        ),
        (
            "Ayu Lestari",
            "Verified buyer",
            "Support answered at 2am and fixed my address in minutes.",
            5.0,
        ),
    ]
    .into_iter()
    .map(|(author, role, quote, rating)| Testimonial {
        author: author.into(),
        role: role.into(),
        quote: quote.into(),
        rating,
    })
    .collect()
}

/// Headline numbers shown under the testimonials.
pub const SOCIAL_STATS: &[(&str, &str)] = &[
    ("10,000+", "Happy customers"),
    ("1000+", "Products"),
    ("4.8/5", "Average rating"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn best_seller_ids_are_unique() {
        let products = best_sellers();
        let ids: HashSet<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn best_sellers_belong_to_featured_categories() {
        let slugs: HashSet<_> = featured_categories().into_iter().map(|c| c.slug).collect();
        for product in best_sellers() {
            assert!(
                slugs.contains(&product.category),
                "{} has unknown category {}",
                product.id,
                product.category
            );
        }
    }

    #[test]
    fn ratings_are_in_range() {
        for product in best_sellers() {
            assert!((0.0..=5.0).contains(&product.rating));
        }
        for testimonial in testimonials() {
            assert!((0.0..=5.0).contains(&testimonial.rating));
        }
    }
}
