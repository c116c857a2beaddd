//! Top navigation with smooth-scroll links, scroll shadow, and theme toggle.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::scroll::{NAV_OFFSET_FALLBACK_PX, scroll_to_section};
use crate::util::theme;
use crate::util::theme::Theme;

#[cfg(feature = "csr")]
use crate::util::events::on_window_scroll;
#[cfg(feature = "csr")]
use crate::util::scroll::nav_shadow_visible;
#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;

const SECTIONS: [(&str, &str); 4] = [
    ("about", "About"),
    ("projects", "Projects"),
    ("expertise", "Expertise"),
    ("contact", "Contact"),
];

const TOGGLE_SPIN_MS: u32 = 300;

/// Fixed navigation bar.
#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let nav_ref = NodeRef::<leptos::html::Nav>::new();
    let shadowed = RwSignal::new(false);
    let spinning = RwSignal::new(false);

    #[cfg(feature = "csr")]
    on_window_scroll(move |scroll_y| {
        shadowed.set(nav_shadow_visible(scroll_y));
    });

    let on_toggle_theme = move |_| {
        ui.update(|state| state.theme = theme::toggle(state.theme));
        spinning.set(true);
        #[cfg(feature = "csr")]
        Timeout::new(TOGGLE_SPIN_MS, move || spinning.set(false)).forget();
    };

    let nav_height = move || {
        nav_ref
            .get()
            .map_or(NAV_OFFSET_FALLBACK_PX, |nav| f64::from(nav.offset_height()))
    };

    view! {
        <nav class="nav" class=("nav--scrolled", move || shadowed.get()) node_ref=nav_ref>
            <a
                class="nav__brand"
                href="#top"
                on:click=move |ev| {
                    ev.prevent_default();
                    scroll_to_section("top", nav_height());
                }
            >
                "Portfolio"
            </a>
            <ul class="nav__links">
                {SECTIONS
                    .iter()
                    .map(|&(id, title)| {
                        view! {
                            <li>
                                <a
                                    class="nav__link"
                                    href=format!("#{id}")
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        scroll_to_section(id, nav_height());
                                    }
                                >
                                    {title}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button
                class="theme-toggle"
                class=("theme-toggle--spin", move || spinning.get())
                aria-label="Toggle theme"
                on:click=on_toggle_theme
            >
                {move || if ui.get().theme == Theme::Dark { "☀" } else { "☾" }}
            </button>
        </nav>
    }
}
