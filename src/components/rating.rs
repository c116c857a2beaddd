//! Five-star profile rating widget with hover preview and persistence.
//!
//! DESIGN
//! ======
//! The committed rating round-trips through the preference store under the
//! `profileRating` key; hover previews never persist. Clicking a star plays
//! a short pop transient on that star only.

use leptos::prelude::*;

use crate::state::rating::{MAX_STARS, RatingState, parse_rating};
use crate::util::prefs;

#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;

const STORAGE_KEY: &str = "profileRating";
const POP_ANIMATION_MS: u32 = 200;

/// Interactive five-star rating block with its caption.
#[component]
pub fn RatingWidget() -> impl IntoView {
    let rating = RwSignal::new(RatingState::default());
    let popping = RwSignal::new(None::<u8>);

    if let Some(saved) = prefs::get(STORAGE_KEY).as_deref().and_then(parse_rating) {
        rating.update(|state| state.commit(saved));
    }

    let on_click = move |value: u8| {
        prefs::set(STORAGE_KEY, &value.to_string());
        rating.update(|state| state.commit(value));
        popping.set(Some(value));
        #[cfg(feature = "csr")]
        Timeout::new(POP_ANIMATION_MS, move || popping.set(None)).forget();
    };

    view! {
        <div class="rating">
            <p class="rating__prompt">"Enjoying this portfolio? Rate it:"</p>
            <div
                class="rating__stars"
                on:mouseleave=move |_| rating.update(RatingState::clear_preview)
            >
                {(1..=MAX_STARS)
                    .map(|value| {
                        view! {
                            <button
                                class="rating__star"
                                class=("rating__star--filled", move || rating.get().star_highlighted(value))
                                class=("rating__star--pop", move || popping.get() == Some(value))
                                aria-label=format!("Rate {value} out of 5")
                                on:mouseenter=move |_| rating.update(|state| state.preview(value))
                                on:click=move |_| on_click(value)
                            >
                                "★"
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <Show when=move || rating.get().label().is_some()>
                <p class="rating__text">{move || rating.get().label().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
