//! Best-effort `localStorage` access for user preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize browser-only read/write behavior so components
//! can persist small preference strings without repeating web-sys glue.
//! Storage failures (disabled storage, privacy mode, quota) degrade to
//! "no stored value": `get` returns `None`, `set` is a silent no-op.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

/// Read the stored preference string for `key`.
#[must_use]
pub fn get(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Store a preference string under `key`.
pub fn set(key: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(key, value);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}
