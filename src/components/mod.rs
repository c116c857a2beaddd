//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and interaction surfaces while reading and
//! writing shared state from Leptos context providers. Transition logic
//! lives in `state`; components own the DOM nodes and browser timers.

pub mod contact_form;
pub mod cursor;
pub mod hero;
pub mod navbar;
pub mod notifications;
pub mod project_card;
pub mod rating;
pub mod reveal;
pub mod stat_counter;
