use super::*;

#[test]
fn parse_rating_accepts_one_through_five() {
    for value in 1..=5u8 {
        assert_eq!(parse_rating(&value.to_string()), Some(value));
    }
    assert_eq!(parse_rating(" 3 "), Some(3));
}

#[test]
fn parse_rating_rejects_out_of_range_and_junk() {
    assert_eq!(parse_rating("0"), None);
    assert_eq!(parse_rating("6"), None);
    assert_eq!(parse_rating("-1"), None);
    assert_eq!(parse_rating("abc"), None);
    assert_eq!(parse_rating(""), None);
    assert_eq!(parse_rating("3.5"), None);
}

#[test]
fn unrated_widget_highlights_nothing() {
    let state = RatingState::default();
    assert_eq!(state.displayed(), 0);
    for value in 1..=MAX_STARS {
        assert!(!state.star_highlighted(value));
    }
    assert_eq!(state.label(), None);
}

#[test]
fn commit_highlights_exactly_one_through_value() {
    for committed in 1..=MAX_STARS {
        let mut state = RatingState::default();
        state.commit(committed);
        for value in 1..=MAX_STARS {
            assert_eq!(state.star_highlighted(value), value <= committed);
        }
    }
}

#[test]
fn hover_preview_wins_over_committed() {
    let mut state = RatingState::default();
    state.commit(2);
    state.preview(5);
    assert_eq!(state.displayed(), 5);
    assert!(state.star_highlighted(4));
}

#[test]
fn clearing_preview_restores_committed_value() {
    let mut state = RatingState::default();
    state.commit(4);
    state.preview(1);
    state.clear_preview();
    assert_eq!(state.displayed(), 4);
}

#[test]
fn clearing_preview_without_commit_restores_nothing() {
    let mut state = RatingState::default();
    state.preview(3);
    state.clear_preview();
    assert_eq!(state.displayed(), 0);
}

#[test]
fn label_reflects_committed_rating() {
    let mut state = RatingState::default();
    state.commit(4);
    assert_eq!(state.label().as_deref(), Some("You rated this 4/5"));
}

#[test]
fn boundary_star_counts_as_highlighted() {
    let mut state = RatingState::default();
    state.commit(3);
    assert!(state.star_highlighted(3));
    assert!(!state.star_highlighted(4));
}
