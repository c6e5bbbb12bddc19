//! Window enter/exit animations
//!
//! Time is always passed in as `now_ms` (a `Date.now()` style timestamp);
//! nothing here reads a clock.

mod animation;
mod easing;

pub use animation::{AnimationPhase, ScheduledAction, ScheduledTransition, WindowAnimation};
pub use easing::{ease_in_cubic, ease_out_cubic};
