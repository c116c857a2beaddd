#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn parse_accepts_known_values_only() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("DARK"), None);
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("solarized"), None);
}

#[test]
fn as_str_round_trips_through_parse() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn toggled_flips_both_ways() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn read_preference_defaults_to_light_without_a_browser() {
    assert_eq!(read_preference(), Theme::Light);
}

#[test]
fn toggle_returns_the_next_theme() {
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    assert_eq!(toggle(Theme::Dark), Theme::Light);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
