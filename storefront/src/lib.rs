//! # storefront
//!
//! Leptos components for the Go Commerce landing page.
//!
//! The same component tree ships twice:
//!
//! - **In the browser** (`csr` feature): the `landing` crate mounts
//!   [`components::StorefrontPage`] into `<body>`. The navbar subscribes to
//!   window scroll events and smooth-scrolls to sections.
//! - **As static HTML** (`ssr` feature, default): [`render_page`] produces a
//!   complete document with `<head>` metadata and the inline stylesheet.
//!
//! ## Quick Start
//!
//! ```rust
//! use storefront::{render_page, types::PageMeta};
//!
//! let html = render_page(&PageMeta::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains(r#"id="products""#));
//! ```
//!
//! ## Architecture
//!
//! - [`scroll`] - scrolled-state rule, navbar themes, anchor scrolling
//! - [`browser`] - `window`-backed implementation of the scroll traits
//! - [`components`] - navbar, sections, page composer, document shell
//! - [`catalog`] - static content (categories, products, testimonials)
//! - [`types`] - data types and formatting helpers
//! - [`styles`] - CSS constants
//!
//! ---
//!
//! Developed by The Go Commerce Team (c)2025

pub mod browser;
pub mod catalog;
pub mod components;
pub mod scroll;
pub mod styles;
pub mod types;

use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::PageMeta;

/// Render the complete landing page as a standalone HTML document.
///
/// The navbar is rendered in its initial (unscrolled) theme; scroll behavior
/// attaches once the browser bundle mounts.
///
/// ```rust
/// use storefront::{render_page, types::PageMeta};
///
/// let meta = PageMeta { title: "Flash Sale".into(), ..Default::default() };
/// let html = render_page(&meta);
/// assert!(html.contains("<title>Flash Sale</title>"));
/// ```
pub fn render_page(meta: &PageMeta) -> String {
    let doc = view! { <PageDocument meta=meta.clone() /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::StorefrontPage;
    use crate::types::SectionId;

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("`{needle}` not found in rendered page"))
    }

    #[test]
    fn renders_default_document() {
        let html = render_page(&PageMeta::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"lang="id""#));
        assert!(html.contains("<title>Go Commerce - Shop Your Perfect Product</title>"));
        assert!(html.contains("Discover 1000+ products with exclusive member deals and benefits"));
        assert!(html.contains("fonts.googleapis.com"));
        assert!(html.contains("--header-height: 80px"));
    }

    #[test]
    fn page_has_six_sections_in_order_after_navbar() {
        let html = view! { <StorefrontPage /> }.to_html();

        assert_eq!(html.matches("<section").count(), 6);
        assert_eq!(html.matches("<nav").count(), 1);

        let order = [
            position(&html, "<nav"),
            position(&html, "<main"),
            position(&html, r#"id="hero""#),
            position(&html, r#"id="products""#),
            position(&html, "section-best-sellers"),
            position(&html, r#"id="why-us""#),
            position(&html, r#"id="testimonials""#),
            position(&html, "section-cta"),
        ];
        assert!(
            order.windows(2).all(|pair| pair[0] < pair[1]),
            "sections out of order: {order:?}"
        );
    }

    #[test]
    fn every_navbar_target_exists_once() {
        let html = view! { <StorefrontPage /> }.to_html();

        for section in SectionId::ALL {
            let anchor = format!(r#"id="{}""#, section.as_str());
            assert_eq!(html.matches(&anchor).count(), 1, "anchor {anchor}");
        }
    }

    #[test]
    fn navbar_starts_transparent() {
        let html = view! { <StorefrontPage /> }.to_html();

        assert!(html.contains(r#"class="navbar""#));
        assert!(!html.contains("navbar-solid"));
        assert!(html.contains("btn-login-ghost"));
        assert!(html.contains("Products"));
        assert!(html.contains("Why Us"));
        assert!(html.contains("Testimonials"));
        assert!(html.contains("Login"));
    }

    #[test]
    fn renders_catalog_content() {
        let html = view! { <StorefrontPage /> }.to_html();

        assert!(html.contains("Featured Categories"));
        assert!(html.contains("Home &amp; Living"));
        assert!(html.contains("Rp 749.000"));
        assert!(html.contains("Only 4 left"));
        assert!(html.contains("Sold out"));
        assert!(html.contains("Rina Wulandari"));
        assert!(html.contains("Ready to Start Shopping?"));
    }

    #[test]
    fn escapes_meta_text() {
        let meta = PageMeta {
            title: "Deals & <Offers>".into(),
            description: r#"Say "hi""#.into(),
            lang: "en".into(),
        };
        let html = render_page(&meta);

        assert!(html.contains("Deals &amp; &lt;Offers"));
        assert!(!html.contains("<Offers>"));
        assert!(!html.contains(r#"content="Say "hi"""#));
        assert!(html.contains(r#"lang="en""#));
    }
}
