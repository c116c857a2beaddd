//! Pointer-driven motion math for cursor, parallax, and tilt effects.
//!
//! Pure math only; the components that own the DOM nodes feed pointer
//! coordinates in and apply the returned transforms.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Per-tick smoothing factor for the cursor dot.
pub const CURSOR_FOLLOW_FACTOR: f64 = 0.5;

/// Per-tick smoothing factor for the trailing follower ring.
pub const FOLLOWER_FOLLOW_FACTOR: f64 = 0.1;

/// Parallax translation gained per orb index.
pub const PARALLAX_SPEED_STEP: f64 = 20.0;

/// Divisor mapping pointer offset inside a card to tilt degrees.
pub const TILT_DIVISOR: f64 = 20.0;

/// Vertical lift applied to a tilted card.
pub const TILT_LIFT_PX: f64 = 8.0;

/// Move `current` toward `target` by `factor` of the remaining distance.
#[must_use]
pub fn follow_step(current: f64, target: f64, factor: f64) -> f64 {
    current + ((target - current) * factor)
}

/// Parallax translation for the orb at `index`, given pointer position as
/// viewport fractions in `0..=1`.
#[must_use]
pub fn parallax_offset(mouse_frac_x: f64, mouse_frac_y: f64, index: u32) -> (f64, f64) {
    let speed = (f64::from(index) + 1.0) * PARALLAX_SPEED_STEP;
    ((mouse_frac_x - 0.5) * speed, (mouse_frac_y - 0.5) * speed)
}

/// CSS `translate(..)` transform for a parallax offset.
#[must_use]
pub fn translate_css(x: f64, y: f64) -> String {
    format!("translate({x:.1}px, {y:.1}px)")
}

/// CSS transform for a tilted card given the pointer position inside it.
#[must_use]
pub fn tilt_transform(width: f64, height: f64, x: f64, y: f64) -> String {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let rotate_x = (y - center_y) / TILT_DIVISOR;
    let rotate_y = (center_x - x) / TILT_DIVISOR;
    format!(
        "perspective(1000px) rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg) translateY(-{TILT_LIFT_PX}px)"
    )
}
