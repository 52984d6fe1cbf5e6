//! Scroll-driven navbar state and in-page anchor navigation.
//!
//! The navbar needs exactly two things from the host page:
//!
//! - a stream of vertical scroll offsets ([`ScrollSignal`]), used to decide
//!   whether the header sits on top of the hero or over scrolled content;
//! - element lookup plus a smooth-scroll primitive ([`ScrollHost`]), used by
//!   the navigation buttons.
//!
//! Both are traits so the logic here runs the same against the browser
//! window ([`crate::browser::WindowViewport`]) and against test doubles.
//!
//! ```rust
//! use storefront::scroll::{is_scrolled, NavTheme};
//!
//! assert!(!is_scrolled(20.0));
//! assert!(is_scrolled(20.5));
//! assert_eq!(NavTheme::from_scrolled(true), NavTheme::Solid);
//! ```

use crate::types::SectionId;
use leptos::prelude::{Set, WriteSignal, on_cleanup};

/// Offset (logical px) past which the header switches to its solid theme.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Height reserved for the fixed header when scrolling to a section.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// `true` once the page has scrolled strictly past [`SCROLL_THRESHOLD_PX`].
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

/// Visual theme of the fixed header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavTheme {
    /// Top of page: transparent background, light text.
    #[default]
    Transparent,
    /// Scrolled: opaque blurred background, accent text, gradient button.
    Solid,
}

impl NavTheme {
    pub fn from_scrolled(scrolled: bool) -> Self {
        if scrolled { Self::Solid } else { Self::Transparent }
    }

    pub fn nav_class(self) -> &'static str {
        match self {
            Self::Transparent => "navbar",
            Self::Solid => "navbar navbar-solid",
        }
    }

    pub fn brand_class(self) -> &'static str {
        match self {
            Self::Transparent => "navbar-brand",
            Self::Solid => "navbar-brand navbar-brand-accent",
        }
    }

    pub fn link_class(self) -> &'static str {
        match self {
            Self::Transparent => "navbar-link",
            Self::Solid => "navbar-link navbar-link-muted",
        }
    }

    pub fn login_class(self) -> &'static str {
        match self {
            Self::Transparent => "btn-login btn-login-ghost",
            Self::Solid => "btn-login btn-login-gradient",
        }
    }
}

/// Releases a scroll listener when dropped.
///
/// Returned by [`ScrollSignal::subscribe`]. Holding it keeps the listener
/// registered; dropping it (or calling [`ScrollSubscription::release`])
/// deregisters it exactly once.
#[must_use = "dropping the subscription removes the listener immediately"]
pub struct ScrollSubscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl ScrollSubscription {
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl std::fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Source of vertical scroll offsets.
pub trait ScrollSignal {
    /// Register `listener`; it receives the current vertical offset on every
    /// scroll notification until the returned guard is dropped.
    fn subscribe(&self, listener: Box<dyn Fn(f64)>) -> ScrollSubscription;
}

/// Element lookup and animated scrolling.
pub trait ScrollHost {
    /// Document-relative top of the element with `id`, if it exists.
    fn element_top(&self, id: &str) -> Option<f64>;

    /// Fire-and-forget smooth scroll to `top`.
    fn smooth_scroll_to(&self, top: f64);
}

/// Subscribe `on_change` to scrolled-state updates.
///
/// Every scroll notification recomputes the state; there is no throttling and
/// no suppression of repeated values. Nothing is reported before the first
/// event, so callers start from `false`.
pub fn watch_scrolled<S>(signal: &S, on_change: impl Fn(bool) + 'static) -> ScrollSubscription
where
    S: ScrollSignal + ?Sized,
{
    signal.subscribe(Box::new(move |offset| on_change(is_scrolled(offset))))
}

/// Keep `scrolled` in sync with `signal` for the lifetime of the current
/// reactive owner.
///
/// The subscription is released by the owner's cleanup, so unmounting the
/// component that called this stops all further updates.
pub fn bind_scrolled<S>(signal: &S, scrolled: WriteSignal<bool>)
where
    S: ScrollSignal + ?Sized,
{
    let subscription = watch_scrolled(signal, move |value| scrolled.set(value));
    on_cleanup(move || subscription.release());
}

/// Smooth-scroll so `section` sits just below the fixed header.
///
/// A missing element is not an error: the request is dropped.
pub fn scroll_to_section<H>(host: &H, section: SectionId)
where
    H: ScrollHost + ?Sized,
{
    scroll_to_anchor(host, section.as_str());
}

/// Same as [`scroll_to_section`] for an arbitrary element id.
pub fn scroll_to_anchor<H>(host: &H, id: &str)
where
    H: ScrollHost + ?Sized,
{
    match host.element_top(id) {
        Some(top) => {
            let target = top - HEADER_OFFSET_PX;
            tracing::trace!(id, target, "smooth scroll");
            host.smooth_scroll_to(target);
        }
        None => tracing::debug!(id, "scroll target not found, ignoring"),
    }
}
