//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability. Everything that talks
//! to `web-sys` directly lives here behind the `csr` feature.

pub mod counter;
pub mod events;
pub mod motion;
pub mod prefs;
pub mod scroll;
pub mod theme;
pub mod viewport;
