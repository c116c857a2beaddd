use super::*;

#[test]
fn follow_step_moves_by_the_given_fraction() {
    assert!((follow_step(0.0, 100.0, 0.5) - 50.0).abs() < f64::EPSILON);
    assert!((follow_step(50.0, 100.0, 0.1) - 55.0).abs() < f64::EPSILON);
}

#[test]
fn follow_step_converges_toward_target() {
    let mut position = 0.0;
    let mut last_distance = 100.0;
    for _ in 0..50 {
        position = follow_step(position, 100.0, FOLLOWER_FOLLOW_FACTOR);
        let distance = (100.0 - position).abs();
        assert!(distance < last_distance);
        last_distance = distance;
    }
    assert!(last_distance < 1.0);
}

#[test]
fn follow_step_is_stable_at_the_target() {
    assert!((follow_step(42.0, 42.0, CURSOR_FOLLOW_FACTOR) - 42.0).abs() < f64::EPSILON);
}

#[test]
fn parallax_offset_is_zero_at_viewport_center() {
    assert_eq!(parallax_offset(0.5, 0.5, 0), (0.0, 0.0));
    assert_eq!(parallax_offset(0.5, 0.5, 2), (0.0, 0.0));
}

#[test]
fn parallax_offset_speed_scales_with_index() {
    assert_eq!(parallax_offset(1.0, 0.0, 0), (10.0, -10.0));
    assert_eq!(parallax_offset(1.0, 0.0, 1), (20.0, -20.0));
    assert_eq!(parallax_offset(1.0, 0.0, 2), (30.0, -30.0));
}

#[test]
fn translate_css_formats_pixels() {
    assert_eq!(translate_css(10.0, -10.0), "translate(10.0px, -10.0px)");
    assert_eq!(translate_css(0.0, 0.0), "translate(0.0px, 0.0px)");
}

#[test]
fn tilt_transform_is_neutral_at_card_center() {
    assert_eq!(
        tilt_transform(200.0, 100.0, 100.0, 50.0),
        "perspective(1000px) rotateX(0.00deg) rotateY(0.00deg) translateY(-8px)"
    );
}

#[test]
fn tilt_transform_signs_follow_pointer_quadrant() {
    // Pointer at the bottom-right corner tips the card toward it.
    let transform = tilt_transform(200.0, 100.0, 200.0, 100.0);
    assert_eq!(
        transform,
        "perspective(1000px) rotateX(2.50deg) rotateY(-5.00deg) translateY(-8px)"
    );
}
