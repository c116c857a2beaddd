use super::*;

#[test]
fn default_phase_is_idle() {
    assert_eq!(SubmitPhase::default(), SubmitPhase::Idle);
}

#[test]
fn labels_track_the_phase() {
    assert_eq!(SubmitPhase::Idle.label(), "Send Message");
    assert_eq!(SubmitPhase::Submitting.label(), "Sending...");
    assert_eq!(SubmitPhase::Success.label(), "Message Sent! ✓");
    assert_eq!(SubmitPhase::Failure.label(), "Error");
}

#[test]
fn button_is_disabled_whenever_not_idle() {
    assert!(!SubmitPhase::Idle.disabled());
    assert!(SubmitPhase::Submitting.disabled());
    assert!(SubmitPhase::Success.disabled());
    assert!(SubmitPhase::Failure.disabled());
}

#[test]
fn opacity_dims_outside_idle() {
    assert_eq!(SubmitPhase::Idle.opacity(), "1");
    assert_eq!(SubmitPhase::Submitting.opacity(), "0.7");
    assert_eq!(SubmitPhase::Failure.opacity(), "0.7");
}

#[test]
fn background_only_set_for_outcomes() {
    assert_eq!(SubmitPhase::Idle.background(), None);
    assert_eq!(SubmitPhase::Submitting.background(), None);
    assert_eq!(SubmitPhase::Success.background(), Some("#10b981"));
    assert_eq!(SubmitPhase::Failure.background(), Some("#ef4444"));
}

#[test]
fn idle_reset_restores_presubmission_presentation() {
    // The idle phase is the pre-submission presentation; a reset after
    // either outcome must land on identical label/enabled/opacity/color.
    let before = (
        SubmitPhase::Idle.label(),
        SubmitPhase::Idle.disabled(),
        SubmitPhase::Idle.opacity(),
        SubmitPhase::Idle.background(),
    );
    for outcome in [SubmitPhase::Success, SubmitPhase::Failure] {
        assert_ne!(outcome.label(), before.0);
        let reset = SubmitPhase::Idle;
        assert_eq!((reset.label(), reset.disabled(), reset.opacity(), reset.background()), before);
    }
}
