//! Root application component and shared context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::home::HomePage;
use crate::state::notifications::NotificationState;
use crate::state::ui::UiState;
use crate::util::theme;

/// Root application component.
///
/// Provides the shared state contexts, applies the persisted theme, and
/// renders the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState {
        theme: theme::read_preference(),
        ..UiState::default()
    });
    let toasts = RwSignal::new(NotificationState::default());

    provide_context(ui);
    provide_context(toasts);

    theme::apply(ui.get_untracked().theme);

    view! {
        <Title text="Portfolio"/>
        <HomePage/>
    }
}
