//! Project showcase card with pointer tilt.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::util::motion::tilt_transform;

/// One project tile. Tilts toward the pointer while hovered and settles
/// back when the pointer leaves.
#[component]
pub fn ProjectCard(
    title: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
) -> impl IntoView {
    let card_ref = NodeRef::<leptos::html::Div>::new();
    let transform = RwSignal::new(String::new());

    let on_mouse_move = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let Some(card) = card_ref.get() else {
                return;
            };
            let rect = card.get_bounding_client_rect();
            let x = f64::from(ev.client_x()) - rect.left();
            let y = f64::from(ev.client_y()) - rect.top();
            transform.set(tilt_transform(rect.width(), rect.height(), x, y));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    view! {
        <div
            class="project-card"
            node_ref=card_ref
            style:transform=move || transform.get()
            on:mousemove=on_mouse_move
            on:mouseleave=move |_| transform.set(String::new())
        >
            <h3 class="project-card__title">{title}</h3>
            <p class="project-card__description">{description}</p>
            <ul class="project-card__tags">
                {tags
                    .iter()
                    .map(|&tag| view! { <li class="project-card__tag">{tag}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
