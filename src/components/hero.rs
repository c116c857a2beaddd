//! Hero section with parallax orbs and animated stats.

use leptos::prelude::*;

use crate::components::stat_counter::StatCounter;
use crate::util::motion::{parallax_offset, translate_css};
use crate::util::scroll::{NAV_OFFSET_FALLBACK_PX, scroll_to_section};

#[cfg(feature = "csr")]
use crate::util::events::on_window_mousemove;

const ORB_COUNT: u32 = 3;

/// Landing section: intro copy, call to action, parallax orbs, stats row.
#[component]
pub fn Hero() -> impl IntoView {
    let mouse_frac = RwSignal::new((0.5_f64, 0.5_f64));

    #[cfg(feature = "csr")]
    on_window_mousemove(move |x, y| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(1.0)
            .max(1.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(1.0)
            .max(1.0);
        mouse_frac.set((x / width, y / height));
    });

    let orb_style = move |index: u32| {
        let (frac_x, frac_y) = mouse_frac.get();
        let (dx, dy) = parallax_offset(frac_x, frac_y, index);
        translate_css(dx, dy)
    };

    view! {
        <section id="top" class="hero">
            <div class="hero__orbs" aria-hidden="true">
                {(0..ORB_COUNT)
                    .map(|index| {
                        view! {
                            <div
                                class=format!("gradient-orb gradient-orb--{index}")
                                style:transform=move || orb_style(index)
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="hero__copy">
                <h1 class="hero__title">"Building fast, thoughtful web experiences."</h1>
                <p class="hero__subtitle">
                    "Software engineer focused on performant front-ends, resilient back-ends, and the craft in between."
                </p>
                <a
                    class="hero__cta"
                    href="#contact"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_section("contact", NAV_OFFSET_FALLBACK_PX);
                    }
                >
                    "Get in Touch"
                </a>
            </div>
            <div class="hero__stats">
                <StatCounter value=50 suffix="+" label="Projects Shipped"/>
                <StatCounter value=8 suffix="+" label="Years Experience"/>
                <StatCounter value=99 suffix="%" label="Client Satisfaction"/>
            </div>
        </section>
    }
}
