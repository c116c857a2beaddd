//! Contact form with submit button state and notification feedback.
//!
//! DESIGN
//! ======
//! The submit button's presentation is driven entirely by
//! [`crate::state::contact::SubmitPhase`]; the phase guard doubles as the
//! re-entrancy lock, so at most one submission is in flight per form. The
//! outcome is reported through the notification presenter, and the button
//! reverts to its pre-submission presentation after a fixed delay.

use leptos::prelude::*;

use crate::net::api::{CONTACT_ENDPOINT, ContactPayload};
use crate::state::contact::SubmitPhase;
use crate::state::notifications::NotificationState;

#[cfg(feature = "csr")]
use crate::components::notifications::notify;
#[cfg(feature = "csr")]
use crate::state::contact::RESET_DELAY_MS;
#[cfg(feature = "csr")]
use crate::state::notifications::NotificationKind;

/// Contact section form posting to the configured form relay.
#[component]
pub fn ContactForm(#[prop(optional)] endpoint: Option<&'static str>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<NotificationState>>();
    let phase = RwSignal::new(SubmitPhase::default());
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let endpoint = endpoint.unwrap_or(CONTACT_ENDPOINT);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if phase.get().disabled() {
            return;
        }
        phase.set(SubmitPhase::Submitting);
        let payload = ContactPayload {
            name: name.get(),
            email: email.get(),
            message: message.get(),
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_contact(endpoint, &payload).await {
                Ok(()) => {
                    phase.set(SubmitPhase::Success);
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                    notify(
                        toasts,
                        "Thank you! Your message has been sent successfully.",
                        NotificationKind::Success,
                    );
                }
                Err(cause) => {
                    log::error!("contact submission failed: {cause}");
                    phase.set(SubmitPhase::Failure);
                    notify(
                        toasts,
                        "Oops! Something went wrong. Please try again.",
                        NotificationKind::Error,
                    );
                }
            }
            gloo_timers::future::TimeoutFuture::new(RESET_DELAY_MS).await;
            phase.set(SubmitPhase::Idle);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (payload, endpoint, toasts);
        }
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <input
                class="contact-form__input"
                type="text"
                name="name"
                placeholder="Your Name"
                required
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                class="contact-form__input"
                type="email"
                name="email"
                placeholder="you@example.com"
                required
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <textarea
                class="contact-form__input contact-form__input--message"
                name="message"
                rows="5"
                placeholder="Your Message"
                required
                prop:value=move || message.get()
                on:input=move |ev| message.set(event_target_value(&ev))
            ></textarea>
            <button
                class="contact-form__submit"
                type="submit"
                disabled=move || phase.get().disabled()
                style:opacity=move || phase.get().opacity()
                style:background=move || phase.get().background().unwrap_or_default()
            >
                <span>{move || phase.get().label()}</span>
            </button>
        </form>
    }
}
