//! Custom cursor dot and trailing follower ring.
//!
//! The dot and follower chase the pointer with different smoothing factors
//! on a fixed tick; hovering any interactive element grows the follower.
//! The overlay is hidden on narrow viewports by the stylesheet.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[cfg(feature = "csr")]
use crate::util::events::{on_window_mousemove, on_window_mouseover};
#[cfg(feature = "csr")]
use crate::util::motion::{CURSOR_FOLLOW_FACTOR, FOLLOWER_FOLLOW_FACTOR, follow_step};
#[cfg(feature = "csr")]
use gloo_timers::callback::Interval;

#[cfg(feature = "csr")]
const CURSOR_TICK_MS: u32 = 16;

/// Elements that put the cursor into its hover presentation.
#[cfg(feature = "csr")]
const INTERACTIVE_SELECTOR: &str = "a, button, .project-card";

/// Pointer-tracking overlay rendered above the page.
#[component]
pub fn CursorOverlay() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let dot = RwSignal::new((0.0_f64, 0.0_f64));
    let follower = RwSignal::new((0.0_f64, 0.0_f64));

    #[cfg(feature = "csr")]
    {
        let mouse = RwSignal::new((0.0_f64, 0.0_f64));

        on_window_mousemove(move |x, y| mouse.set((x, y)));

        on_window_mouseover(move |target| {
            let hovering = target
                .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
                .is_some();
            ui.update(|state| state.cursor_hover = hovering);
        });

        Interval::new(CURSOR_TICK_MS, move || {
            let (mouse_x, mouse_y) = mouse.get_untracked();
            dot.update(|(x, y)| {
                *x = follow_step(*x, mouse_x, CURSOR_FOLLOW_FACTOR);
                *y = follow_step(*y, mouse_y, CURSOR_FOLLOW_FACTOR);
            });
            follower.update(|(x, y)| {
                *x = follow_step(*x, mouse_x, FOLLOWER_FOLLOW_FACTOR);
                *y = follow_step(*y, mouse_y, FOLLOWER_FOLLOW_FACTOR);
            });
        })
        .forget();
    }

    view! {
        <div class="cursor-overlay" aria-hidden="true">
            <div
                class="custom-cursor"
                style:left=move || format!("{:.1}px", dot.get().0)
                style:top=move || format!("{:.1}px", dot.get().1)
            ></div>
            <div
                class="cursor-follower"
                class=("cursor-follower--hover", move || ui.get().cursor_hover)
                style:left=move || format!("{:.1}px", follower.get().0)
                style:top=move || format!("{:.1}px", follower.get().1)
            ></div>
        </div>
    }
}
