//! Easing curves for window animations

/// Ease-out cubic; used for the slide-up enter animation
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Ease-in cubic; used for the slide-down exit animation
#[inline]
pub fn ease_in_cubic(t: f32) -> f32 {
    t * t * t
}
