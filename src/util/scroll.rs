//! Smooth in-page scrolling and the navbar shadow threshold.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Scroll depth past which the navbar shows its shadow.
pub const NAV_SHADOW_THRESHOLD_PX: f64 = 100.0;

/// Fallback offset when the nav bar cannot be measured.
pub const NAV_OFFSET_FALLBACK_PX: f64 = 72.0;

/// Whether the navbar shows its scrolled shadow at `scroll_y`.
#[must_use]
pub fn nav_shadow_visible(scroll_y: f64) -> bool {
    scroll_y > NAV_SHADOW_THRESHOLD_PX
}

/// Smooth-scroll the viewport to the section with `section_id`, leaving room
/// for the fixed nav bar. Missing targets are ignored.
pub fn scroll_to_section(section_id: &str, nav_height: f64) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Some(target) = document.get_element_by_id(section_id) else {
            return;
        };
        let page_y = window.page_y_offset().unwrap_or(0.0);
        let top = (target.get_bounding_client_rect().top() + page_y - nav_height).max(0.0);

        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (section_id, nav_height);
    }
}
