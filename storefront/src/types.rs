//! Page data types.
//!
//! Everything here is plain data: serializable, clonable, and rendered by the
//! components in [`crate::components`]. The catalog content itself lives in
//! [`crate::catalog`].
//!
//! # Example
//!
//! ```rust
//! use storefront::types::{format_rupiah, Product};
//!
//! let product = Product {
//!     id: "p-1".into(),
//!     name: "Wireless Earbuds".into(),
//!     price: 349_000,
//!     stock: 12,
//!     category: "electronics".into(),
//!     rating: 4.7,
//! };
//! assert_eq!(format_rupiah(product.price), "Rp 349.000");
//! ```

use serde::{Deserialize, Serialize};

/// Anchor identifiers shared by the navbar and the sections it scrolls to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Products,
    WhyUs,
    Testimonials,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Hero,
        SectionId::Products,
        SectionId::WhyUs,
        SectionId::Testimonials,
    ];

    /// DOM id of the section element.
    pub const fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Products => "products",
            SectionId::WhyUs => "why-us",
            SectionId::Testimonials => "testimonials",
        }
    }

    /// `#id` form for plain anchor links.
    pub fn href(self) -> String {
        format!("#{}", self.as_str())
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document-level metadata for the static render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// `lang` attribute of the `<html>` element
    pub lang: String,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: "Go Commerce - Shop Your Perfect Product".into(),
            description: "Discover 1000+ products with exclusive member deals and benefits".into(),
            lang: "id".into(),
        }
    }
}

/// A product category tile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub item_count: u32,
}

/// A product as listed in the storefront catalog.
///
/// `price` is a whole amount in Indonesian Rupiah.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub stock: u32,
    pub category: String,
    pub rating: f64,
}

/// Stock level shown on a product card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockStatus {
    InStock,
    /// Few units left; carries the remaining count.
    Low(u32),
    SoldOut,
}

/// At or below this many units a card shows "Only N left".
pub const LOW_STOCK_THRESHOLD: u32 = 5;

impl Product {
    pub fn stock_status(&self) -> StockStatus {
        match self.stock {
            0 => StockStatus::SoldOut,
            n if n <= LOW_STOCK_THRESHOLD => StockStatus::Low(n),
            _ => StockStatus::InStock,
        }
    }
}

/// A "why shop with us" card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Benefit {
    pub title: String,
    pub description: String,
    /// SVG path data for the card icon
    pub icon: String,
}

/// A customer quote in the social proof section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub author: String,
    pub role: String,
    pub quote: String,
    pub rating: f64,
}

/// Format a Rupiah amount with `.` as the thousands separator.
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    out.push_str("Rp ");
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Full, half and empty star counts for a rating out of five.
///
/// Ratings are clamped to `0.0..=5.0` and rounded to the nearest half star.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    pub fn from_rating(rating: f64) -> Self {
        let clamped = if rating.is_nan() { 0.0 } else { rating.clamp(0.0, 5.0) };
        let halves = (clamped * 2.0).round() as u8;
        let full = halves / 2;
        let half = halves % 2 == 1;
        let empty = 5 - full - u8::from(half);
        Self { full, half, empty }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn section_ids_match_dom_anchors() {
        let ids: Vec<&str> = SectionId::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(ids, vec!["hero", "products", "why-us", "testimonials"]);
        assert_eq!(SectionId::WhyUs.href(), "#why-us");
        assert_eq!(SectionId::Products.to_string(), "products");
    }

    #[test]
    fn rupiah_uses_dot_separators() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(999), "Rp 999");
        assert_eq!(format_rupiah(1_000), "Rp 1.000");
        assert_eq!(format_rupiah(89_000), "Rp 89.000");
        assert_eq!(format_rupiah(1_250_000), "Rp 1.250.000");
        assert_eq!(format_rupiah(12_345_678), "Rp 12.345.678");
    }

    #[test]
    fn star_rating_rounds_to_half_stars() {
        assert_eq!(
            StarRating::from_rating(4.7),
            StarRating { full: 4, half: true, empty: 0 }
        );
        assert_eq!(
            StarRating::from_rating(4.8),
            StarRating { full: 5, half: false, empty: 0 }
        );
        assert_eq!(
            StarRating::from_rating(3.2),
            StarRating { full: 3, half: false, empty: 2 }
        );
        assert_eq!(
            StarRating::from_rating(9.0),
            StarRating { full: 5, half: false, empty: 0 }
        );
        assert_eq!(
            StarRating::from_rating(-1.0),
            StarRating { full: 0, half: false, empty: 5 }
        );
        assert_eq!(
            StarRating::from_rating(f64::NAN),
            StarRating { full: 0, half: false, empty: 5 }
        );
    }

    #[test]
    fn stock_status_thresholds() {
        let mut product = Product { stock: 0, ..Default::default() };
        assert_eq!(product.stock_status(), StockStatus::SoldOut);
        product.stock = 5;
        assert_eq!(product.stock_status(), StockStatus::Low(5));
        product.stock = 6;
        assert_eq!(product.stock_status(), StockStatus::InStock);
    }

    #[test]
    fn page_meta_fills_missing_fields() {
        let meta: PageMeta = serde_json::from_str(r#"{"title": "Flash Sale"}"#).unwrap();
        assert_eq!(meta.title, "Flash Sale");
        assert_eq!(meta.lang, "id");
        assert_eq!(meta.description, PageMeta::default().description);
    }

    #[test]
    fn product_deserializes_backend_shape() {
        let json = r#"{
            "id": "sku-42",
            "name": "Desk Lamp",
            "price": 215000,
            "stock": 3,
            "category": "home-living",
            "rating": 4.5
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "sku-42");
        assert_eq!(product.stock_status(), StockStatus::Low(3));
        assert_eq!(format_rupiah(product.price), "Rp 215.000");
    }
}
