//! Animated numeric stat readout.
//!
//! The markup carries the final value so the page reads correctly before
//! any animation runs; once the stat first scrolls at least half into view,
//! the display is rewound to zero and counted back up. The count-up fires
//! exactly once per element.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use gloo_timers::callback::Interval;

#[cfg(feature = "csr")]
use crate::util::counter::{CounterAnimation, DEFAULT_DURATION_MS, Suffix, TICK_MS, parse_target};
#[cfg(feature = "csr")]
use crate::util::viewport::observe_once;

/// Visibility fraction of the stat container that triggers the count-up.
#[cfg(feature = "csr")]
const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Stat tile that counts its value up from zero when first seen.
#[component]
pub fn StatCounter(
    value: u32,
    label: &'static str,
    #[prop(optional)] suffix: &'static str,
) -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let display = RwSignal::new(format!("{value}{suffix}"));

    #[cfg(feature = "csr")]
    {
        let observed = RwSignal::new(false);
        Effect::new(move || {
            let Some(container) = container_ref.get() else {
                return;
            };
            if observed.get_untracked() {
                return;
            }
            observed.set(true);

            observe_once(&container, VISIBILITY_THRESHOLD, None, move || {
                let text = display.get_untracked();
                let Some(target) = parse_target(&text) else {
                    return;
                };
                let suffix = Suffix::parse(&text);
                let mut animation = CounterAnimation::new(target, DEFAULT_DURATION_MS);
                display.set(suffix.decorate(0));

                let ticker: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                let ticker_in_cb = Rc::clone(&ticker);
                let interval = Interval::new(TICK_MS, move || {
                    display.set(suffix.decorate(animation.tick()));
                    if animation.is_done() {
                        ticker_in_cb.borrow_mut().take();
                    }
                });
                *ticker.borrow_mut() = Some(interval);
            });
        });
    }

    view! {
        <div class="stat" node_ref=container_ref>
            <span class="stat__value">{move || display.get()}</span>
            <span class="stat__label">{label}</span>
        </div>
    }
}
