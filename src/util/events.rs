//! Window-level event listener glue.
//!
//! Listeners registered here live for the lifetime of the page; this is a
//! single-page app whose chrome components never unmount, so the leaked
//! closures are bounded by the number of registrations.

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;
#[cfg(feature = "csr")]
use wasm_bindgen::closure::Closure;

#[cfg(feature = "csr")]
fn add_window_listener(event: &str, cb: Closure<dyn FnMut(web_sys::Event)>) {
    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    }
    cb.forget();
}

/// Run `handler` on every window scroll with the current vertical offset.
#[cfg(feature = "csr")]
pub fn on_window_scroll(mut handler: impl FnMut(f64) + 'static) {
    let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let scroll_y = web_sys::window()
            .and_then(|w| w.page_y_offset().ok())
            .unwrap_or(0.0);
        handler(scroll_y);
    }) as Box<dyn FnMut(web_sys::Event)>);
    add_window_listener("scroll", cb);
}

/// Run `handler` on every window mousemove with client coordinates.
#[cfg(feature = "csr")]
pub fn on_window_mousemove(mut handler: impl FnMut(f64, f64) + 'static) {
    let cb = Closure::wrap(Box::new(move |ev: web_sys::Event| {
        let Ok(ev) = ev.dyn_into::<web_sys::MouseEvent>() else {
            return;
        };
        handler(f64::from(ev.client_x()), f64::from(ev.client_y()));
    }) as Box<dyn FnMut(web_sys::Event)>);
    add_window_listener("mousemove", cb);
}

/// Run `handler` on every window mouseover with the event target, if any.
#[cfg(feature = "csr")]
pub fn on_window_mouseover(mut handler: impl FnMut(Option<web_sys::Element>) + 'static) {
    let cb = Closure::wrap(Box::new(move |ev: web_sys::Event| {
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok());
        handler(target);
    }) as Box<dyn FnMut(web_sys::Event)>);
    add_window_listener("mouseover", cb);
}
