//! Root document component - the complete HTML page for the static render.

use super::StorefrontPage;
use crate::styles::{FONT_STYLESHEET, STOREFRONT_CSS};
use crate::types::PageMeta;
use leptos::prelude::*;

/// The complete HTML document around [`StorefrontPage`]
#[component]
pub fn PageDocument(meta: PageMeta) -> impl IntoView {
    view! {
        <html lang=meta.lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{meta.title}</title>
                <meta name="description" content=meta.description />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link rel="stylesheet" href=FONT_STYLESHEET />
                <style>{STOREFRONT_CSS}</style>
            </head>
            <body class="antialiased">
                <StorefrontPage />
            </body>
        </html>
    }
}
