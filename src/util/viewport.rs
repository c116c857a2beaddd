//! One-shot viewport intersection observation.
//!
//! Used to fire scroll-triggered behavior (stat count-ups, reveals) exactly
//! once per element: the observer disconnects itself after the first
//! qualifying intersection.

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;
#[cfg(feature = "csr")]
use wasm_bindgen::closure::Closure;

/// Invoke `on_visible` the first time `element` is at least `threshold`
/// visible (optionally shrunk by `root_margin`), then stop observing.
#[cfg(feature = "csr")]
pub fn observe_once(
    element: &web_sys::Element,
    threshold: f64,
    root_margin: Option<&str>,
    on_visible: impl FnOnce() + 'static,
) {
    let pending: Rc<RefCell<Option<Box<dyn FnOnce()>>>> =
        Rc::new(RefCell::new(Some(Box::new(on_visible))));

    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                observer.unobserve(&entry.target());
                observer.disconnect();
                if let Some(run) = pending.borrow_mut().take() {
                    run();
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let Ok(observer) =
        web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    observer.observe(element);

    // The observer owns the JS side of the callback for the page's lifetime.
    cb.forget();
}
