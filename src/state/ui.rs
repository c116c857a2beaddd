//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns (theme, cursor hover) out of the
//! feature components so page chrome can evolve independently.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// UI state for the page chrome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    /// Whether the pointer is over an interactive element, which grows the
    /// custom cursor follower.
    pub cursor_hover: bool,
}
