//! Clamping helpers

use serde::{Deserialize, Serialize};
use super::Vec2;

/// Restrict `value` to `[min, max]`.
///
/// Unlike `f32::clamp` this never panics; an inverted range resolves to `max`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Allowed region for a window's top-left corner
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    /// Create new bounds
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
}

/// Restrict a position to the given bounds, axis by axis
#[inline]
pub fn clamp_position(pos: Vec2, bounds: Bounds) -> Vec2 {
    Vec2::new(
        clamp(pos.x, bounds.left, bounds.right),
        clamp(pos.y, bounds.top, bounds.bottom),
    )
}
