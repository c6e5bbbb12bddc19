//! Core geometry types for the window manager
//!
//! Positions, sizes and rectangles in logical (CSS) pixels, plus the pure
//! clamping helpers every gesture runs its output through.

mod bounds;
mod rect;
mod size;
mod vec2;

pub use bounds::{clamp, clamp_position, Bounds};
pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
