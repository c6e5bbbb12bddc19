//! Window presentation shells
//!
//! A [`WindowShell`] binds one window record to its own drag, resize and
//! swipe state plus its enter/exit animation, and turns finished gestures
//! into manager updates. [`WindowView`] is what the renderer draws.

mod frame;
mod layout;

pub use frame::WindowShell;
pub use layout::{FrameLayout, ResizeHandle, WindowView};
