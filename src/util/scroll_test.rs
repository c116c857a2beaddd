use super::*;

#[test]
fn shadow_hidden_at_the_top() {
    assert!(!nav_shadow_visible(0.0));
    assert!(!nav_shadow_visible(100.0));
}

#[test]
fn shadow_visible_past_the_threshold() {
    assert!(nav_shadow_visible(100.5));
    assert!(nav_shadow_visible(2400.0));
}

#[cfg(not(feature = "csr"))]
#[test]
fn scroll_to_section_is_noop_without_a_browser() {
    scroll_to_section("contact", NAV_OFFSET_FALLBACK_PX);
}
