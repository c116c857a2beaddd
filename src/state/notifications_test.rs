use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NotificationState::default();
    let first = state.push("one", NotificationKind::Info);
    let second = state.push("two", NotificationKind::Success);
    assert!(second > first);
    assert_eq!(state.active.len(), 2);
}

#[test]
fn ids_keep_increasing_after_removal() {
    let mut state = NotificationState::default();
    let first = state.push("one", NotificationKind::Info);
    state.remove(first);
    let second = state.push("two", NotificationKind::Info);
    assert!(second > first);
}

#[test]
fn kind_classes_carry_a_kind_marker() {
    assert!(NotificationKind::Success.css_class().contains("success"));
    assert!(NotificationKind::Error.css_class().contains("error"));
    assert!(NotificationKind::Info.css_class().contains("info"));
    assert!(NotificationKind::Info.css_class().starts_with("notification "));
}

#[test]
fn begin_exit_fires_exactly_once_per_id() {
    let mut state = NotificationState::default();
    let id = state.push("ok", NotificationKind::Success);
    assert!(state.begin_exit(id));
    assert!(!state.begin_exit(id), "second dismissal must not fire");
    assert!(state.active[0].exiting);
}

#[test]
fn begin_exit_on_missing_id_is_refused() {
    let mut state = NotificationState::default();
    assert!(!state.begin_exit(7));
}

#[test]
fn remove_is_idempotent() {
    let mut state = NotificationState::default();
    let id = state.push("bye", NotificationKind::Error);
    state.remove(id);
    state.remove(id);
    assert!(state.active.is_empty());
}

#[test]
fn concurrent_notifications_exit_independently() {
    let mut state = NotificationState::default();
    let first = state.push("one", NotificationKind::Info);
    let second = state.push("two", NotificationKind::Info);
    assert!(state.begin_exit(first));
    assert!(!state.active.iter().find(|n| n.id == second).unwrap().exiting);
    state.remove(first);
    assert!(state.begin_exit(second));
}
