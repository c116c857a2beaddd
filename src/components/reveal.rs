//! Scroll-triggered reveal wrapper.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::util::viewport::observe_once;

/// Visibility fraction that reveals the wrapped content.
#[cfg(feature = "csr")]
const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Bottom margin shrinking the observation box, so content reveals slightly
/// before it would otherwise be considered visible.
#[cfg(feature = "csr")]
const ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Wraps content that fades and slides in the first time it scrolls into
/// view. Without a browser the content renders visible.
#[component]
pub fn Reveal(children: Children) -> impl IntoView {
    let wrapper_ref = NodeRef::<leptos::html::Div>::new();
    let revealed = RwSignal::new(!cfg!(feature = "csr"));

    #[cfg(feature = "csr")]
    {
        let observed = RwSignal::new(false);
        Effect::new(move || {
            let Some(wrapper) = wrapper_ref.get() else {
                return;
            };
            if observed.get_untracked() {
                return;
            }
            observed.set(true);
            observe_once(&wrapper, VISIBILITY_THRESHOLD, Some(ROOT_MARGIN), move || {
                revealed.set(true);
            });
        });
    }

    view! {
        <div
            class="reveal"
            class=("reveal--visible", move || revealed.get())
            node_ref=wrapper_ref
        >
            {children()}
        </div>
    }
}
