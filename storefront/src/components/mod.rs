//! Leptos components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument (static render only)
//! └── StorefrontPage
//!     ├── Navbar              (scroll-dependent theme, section navigation)
//!     └── main
//!         ├── Hero            #hero
//!         ├── FeaturedCategories  #products
//!         ├── BestSellers
//!         │   └── ProductCard → Stars
//!         ├── WhyUs           #why-us
//!         ├── SocialProof     #testimonials
//!         │   └── TestimonialCard → Stars
//!         └── Cta
//! ```
//!
//! Sections take no props; their content comes from [`crate::catalog`].

mod best_sellers;
mod cta;
mod document;
mod featured_categories;
mod hero;
mod icons;
mod navbar;
mod page;
mod rating;
mod social_proof;
mod why_us;

pub use best_sellers::BestSellers;
pub use cta::Cta;
pub use document::PageDocument;
pub use featured_categories::FeaturedCategories;
pub use hero::Hero;
pub use icons::*;
pub use navbar::{BRAND_NAME, Navbar};
pub use page::StorefrontPage;
pub use rating::Stars;
pub use social_proof::SocialProof;
pub use why_us::WhyUs;
