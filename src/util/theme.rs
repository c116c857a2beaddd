//! Theme initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back to
//! `localStorage` and updates that attribute. Requires a browser
//! environment; native builds no-op.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; an absent
//! or unparseable stored value means the light default, never an error.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::prefs;

const STORAGE_KEY: &str = "theme";

/// Page-wide color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The stored/attribute form of this theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored theme value.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Theme> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Read the theme preference from `localStorage`, defaulting to light.
#[must_use]
pub fn read_preference() -> Theme {
    prefs::get(STORAGE_KEY)
        .as_deref()
        .and_then(Theme::parse)
        .unwrap_or_default()
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Toggle the theme, apply it, and persist the new preference.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    prefs::set(STORAGE_KEY, next.as_str());
    next
}
