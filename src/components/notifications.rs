//! Transient notification host with timed and manual dismissal.
//!
//! DESIGN
//! ======
//! State transitions live in [`crate::state::notifications`]; this module
//! owns the browser side: the one-time stylesheet injection, the per-id
//! auto-dismiss timers, and the exit-then-remove sequencing. A manual
//! dismiss cancels the pending auto-dismiss timer; a timer that already
//! fired releases its own handle before routing through the same guarded
//! exit transition, so each notification plays at most one exit animation.

use leptos::prelude::*;

use crate::state::notifications::{Notification, NotificationKind, NotificationState};

#[cfg(feature = "csr")]
use crate::state::notifications::{AUTO_DISMISS_MS, EXIT_ANIMATION_MS};
#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::collections::HashMap;

#[cfg(feature = "csr")]
const STYLE_MARKER: &str = "data-notification-styles";

#[cfg(feature = "csr")]
const NOTIFICATION_CSS: &str = r"
.notification {
  position: fixed;
  top: 100px;
  right: 2rem;
  background: var(--bg-secondary);
  border: 1px solid var(--border-color);
  border-radius: 12px;
  padding: 1rem 1.5rem;
  box-shadow: var(--shadow-xl);
  z-index: 10000;
  animation: slide-in-right 0.3s ease-out;
  max-width: 400px;
}

.notification--success {
  border-left: 4px solid #10b981;
}

.notification--error {
  border-left: 4px solid #ef4444;
}

.notification--exiting {
  animation: slide-out-right 0.3s ease-out forwards;
}

.notification__content {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.notification__close {
  background: none;
  border: none;
  font-size: 1.5rem;
  cursor: pointer;
  color: var(--text-secondary);
  padding: 0;
  width: 24px;
  height: 24px;
  display: flex;
  align-items: center;
  justify-content: center;
}

.notification__close:hover {
  color: var(--text-primary);
}

@keyframes slide-in-right {
  from { transform: translateX(400px); opacity: 0; }
  to { transform: translateX(0); opacity: 1; }
}

@keyframes slide-out-right {
  from { transform: translateX(0); opacity: 1; }
  to { transform: translateX(400px); opacity: 0; }
}
";

#[cfg(feature = "csr")]
thread_local! {
    static DISMISS_TIMERS: RefCell<HashMap<u64, Timeout>> = RefCell::new(HashMap::new());
}

/// Inject the shared notification stylesheet once per page. Safe to call
/// repeatedly; a marker attribute guards re-insertion.
#[cfg(feature = "csr")]
fn ensure_notification_styles() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Ok(Some(_)) = document.query_selector(&format!("style[{STYLE_MARKER}]")) {
        return;
    }
    let Ok(style) = document.create_element("style") else {
        return;
    };
    let _ = style.set_attribute(STYLE_MARKER, "");
    style.set_text_content(Some(NOTIFICATION_CSS));
    if let Some(head) = document.head() {
        let _ = head.append_child(&style);
    }
}

/// Drop the pending auto-dismiss timer for `id`, cancelling it if it has
/// not fired yet.
#[cfg(feature = "csr")]
fn cancel_dismiss_timer(id: u64) {
    DISMISS_TIMERS.with(|timers| {
        timers.borrow_mut().remove(&id);
    });
}

/// Release the timer handle for `id` without cancelling. Called from inside
/// the timer's own callback, where dropping the handle would tear down the
/// closure that is currently executing.
#[cfg(feature = "csr")]
fn release_dismiss_timer(id: u64) {
    DISMISS_TIMERS.with(|timers| {
        if let Some(timer) = timers.borrow_mut().remove(&id) {
            timer.forget();
        }
    });
}

/// Present a notification and schedule its timed dismissal.
pub fn notify(toasts: RwSignal<NotificationState>, message: &str, kind: NotificationKind) {
    let mut id = 0;
    toasts.update(|state| id = state.push(message, kind));
    #[cfg(feature = "csr")]
    {
        ensure_notification_styles();
        let timer = Timeout::new(AUTO_DISMISS_MS, move || {
            release_dismiss_timer(id);
            dismiss(toasts, id);
        });
        DISMISS_TIMERS.with(|timers| {
            timers.borrow_mut().insert(id, timer);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

/// Start the exit sequence for `id` unless one is already running, then
/// remove the notification after the exit animation's grace period.
pub fn dismiss(toasts: RwSignal<NotificationState>, id: u64) {
    let mut started = false;
    toasts.update(|state| started = state.begin_exit(id));
    if !started {
        return;
    }
    #[cfg(feature = "csr")]
    {
        cancel_dismiss_timer(id);
        Timeout::new(EXIT_ANIMATION_MS, move || {
            toasts.update(|state| state.remove(id));
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        toasts.update(|state| state.remove(id));
    }
}

/// Fixed-position layer rendering every active notification.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<NotificationState>>();

    view! {
        <div class="notification-layer">
            <For
                each=move || toasts.get().active
                key=|n| (n.id, n.exiting)
                let:n
            >
                <NotificationToast notification=n/>
            </For>
        </div>
    }
}

/// One notification with its message and dismiss control.
#[component]
fn NotificationToast(notification: Notification) -> impl IntoView {
    let toasts = expect_context::<RwSignal<NotificationState>>();
    let id = notification.id;
    let class = if notification.exiting {
        format!("{} notification--exiting", notification.kind.css_class())
    } else {
        notification.kind.css_class().to_owned()
    };

    view! {
        <div class=class>
            <div class="notification__content">
                <span>{notification.message.clone()}</span>
                <button
                    class="notification__close"
                    aria-label="Dismiss"
                    on:click=move |_| dismiss(toasts, id)
                >
                    "×"
                </button>
            </div>
        </div>
    }
}
