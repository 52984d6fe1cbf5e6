use super::{ICON_STAR, Icon};
use crate::types::StarRating;
use leptos::prelude::*;

/// Five-star rating row; half stars render with their own class.
#[component]
pub fn Stars(rating: f64) -> impl IntoView {
    let stars = StarRating::from_rating(rating);
    let label = format!("Rated {rating:.1} out of 5");

    let full = (0..stars.full).map(|_| {
        view! {
            <span class="star star-full">
                <Icon path=ICON_STAR size="16" />
            </span>
        }
    });
    let half = stars.half.then(|| {
        view! {
            <span class="star star-half">
                <Icon path=ICON_STAR size="16" />
            </span>
        }
    });
    let empty = (0..stars.empty).map(|_| {
        view! {
            <span class="star star-empty">
                <Icon path=ICON_STAR size="16" />
            </span>
        }
    });

    view! {
        <div class="stars" role="img" aria-label=label>
            {full.collect_view()}
            {half}
            {empty.collect_view()}
        </div>
    }
}
