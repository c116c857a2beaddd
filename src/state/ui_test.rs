use super::*;

#[test]
fn ui_state_defaults_to_light_theme() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn ui_state_defaults_cursor_hover_off() {
    let state = UiState::default();
    assert!(!state.cursor_hover);
}
