//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The portfolio is a single page; `home` owns section layout and content
//! and delegates rendering details to `components`.

pub mod home;
