//! Browser-backed viewport: the window scroll event and DOM lookup.
//!
//! Only meaningful inside a browser (wasm32 + csr). Components touch it from
//! effects and event handlers, which never run during the static render.

use crate::scroll::{ScrollHost, ScrollSignal, ScrollSubscription};
use leptos::ev;
use leptos::prelude::window_event_listener;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

/// The page's `window`, seen through the scroll traits.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowViewport;

impl WindowViewport {
    /// Current `window.scrollY`, `0.0` when unavailable.
    pub fn offset(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }
}

impl ScrollSignal for WindowViewport {
    fn subscribe(&self, listener: Box<dyn Fn(f64)>) -> ScrollSubscription {
        let viewport = *self;
        let handle = window_event_listener(ev::scroll, move |_| listener(viewport.offset()));
        ScrollSubscription::new(move || handle.remove())
    }
}

impl ScrollHost for WindowViewport {
    fn element_top(&self, id: &str) -> Option<f64> {
        let element = web_sys::window()?.document()?.get_element_by_id(id)?;
        let element: HtmlElement = element.dyn_into().ok()?;
        Some(f64::from(element.offset_top()))
    }

    fn smooth_scroll_to(&self, top: f64) {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}
