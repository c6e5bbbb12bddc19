//! Gesture input module
//!
//! Normalizes mouse and touch input into [`GesturePoint`]s at the boundary and
//! provides the per-window gesture state machines: drag, resize and the mobile
//! swipe-to-minimize.

mod drag;
mod host;
mod point;
mod resize;
mod result;
mod swipe;

pub use drag::{DragController, DragSession};
pub use host::{GestureHost, GestureKind, NullHost};
pub use point::{GesturePoint, PointerSource};
pub use resize::{calculate_resize, ResizeCommit, ResizeController, ResizeDirection, ResizeLimits, ResizeSession};
pub use result::InputResult;
pub use swipe::{SwipeGesture, SwipeOutcome};
