//! Per-window animation phase and its single pending timer

use serde::Serialize;
use tracing::trace;
use super::{ease_in_cubic, ease_out_cubic};

/// Visual phase of a window frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationPhase {
    /// Sliding in after becoming visible
    Entering,
    /// At rest
    #[default]
    Visible,
    /// Sliding out ahead of a minimize
    Exiting,
}

/// What happens when a scheduled transition comes due
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduledAction {
    /// Enter animation finished; settle to [`AnimationPhase::Visible`]
    Settle,
    /// Exit animation finished; the owner minimizes the window
    Minimize,
}

/// A delayed action
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduledTransition {
    /// When the transition was started
    pub start_ms: f64,
    /// When `action` fires
    pub due_ms: f64,
    pub action: ScheduledAction,
}

impl ScheduledTransition {
    /// Linear progress (0.0 to 1.0)
    pub fn progress(&self, now_ms: f64) -> f32 {
        let duration = self.due_ms - self.start_ms;
        if duration <= 0.0 {
            return 1.0;
        }
        (((now_ms - self.start_ms) / duration) as f32).clamp(0.0, 1.0)
    }

    /// Check if the transition is due
    #[inline]
    pub fn is_due(&self, now_ms: f64) -> bool {
        now_ms >= self.due_ms
    }
}

/// Animation phase plus at most one pending transition
///
/// Starting a new transition replaces (cancels) the pending one, so a stale
/// timer can never fire after a rapid re-trigger.
#[derive(Clone, Debug, Default)]
pub struct WindowAnimation {
    phase: AnimationPhase,
    pending: Option<ScheduledTransition>,
}

impl WindowAnimation {
    #[inline]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    #[inline]
    pub fn pending(&self) -> Option<&ScheduledTransition> {
        self.pending.as_ref()
    }

    /// Check if a transition is waiting to fire
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
    }

    /// Start the enter animation
    pub fn enter(&mut self, now_ms: f64, duration_ms: f64) {
        self.phase = AnimationPhase::Entering;
        self.schedule(now_ms, duration_ms, ScheduledAction::Settle);
    }

    /// Start the exit animation; [`poll`](Self::poll) reports
    /// [`ScheduledAction::Minimize`] once it has run
    pub fn exit(&mut self, now_ms: f64, duration_ms: f64) {
        self.phase = AnimationPhase::Exiting;
        self.schedule(now_ms, duration_ms, ScheduledAction::Minimize);
    }

    /// Drop the pending transition without firing it
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            trace!(action = ?pending.action, "transition cancelled");
        }
        if self.phase == AnimationPhase::Entering {
            self.phase = AnimationPhase::Visible;
        }
    }

    /// Fire the pending transition if it is due
    ///
    /// The phase stays `Exiting` after a minimize fires; the next enter resets it.
    pub fn poll(&mut self, now_ms: f64) -> Option<ScheduledAction> {
        if !self.pending.as_ref()?.is_due(now_ms) {
            return None;
        }
        let fired = self.pending.take()?;
        if fired.action == ScheduledAction::Settle {
            self.phase = AnimationPhase::Visible;
        }
        trace!(action = ?fired.action, "transition fired");
        Some(fired.action)
    }

    /// Eased progress of the running transition, 1.0 at rest
    pub fn eased_progress(&self, now_ms: f64) -> f32 {
        match &self.pending {
            Some(pending) => {
                let t = pending.progress(now_ms);
                match pending.action {
                    ScheduledAction::Settle => ease_out_cubic(t),
                    ScheduledAction::Minimize => ease_in_cubic(t),
                }
            }
            None => 1.0,
        }
    }

    fn schedule(&mut self, now_ms: f64, duration_ms: f64, action: ScheduledAction) {
        self.pending = Some(ScheduledTransition {
            start_ms: now_ms,
            due_ms: now_ms + duration_ms,
            action,
        });
    }
}
