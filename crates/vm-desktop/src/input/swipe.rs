//! Mobile swipe-to-minimize gesture

use tracing::trace;
use crate::config::SwipeConfig;

/// What a finished swipe asks for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Dragged far enough: minimize the window
    Commit,
    /// Snap back without a state change
    Cancel,
}

/// Vertical title bar swipe on mobile
///
/// Downward travel moves the window by up to `max_offset`; releasing past
/// `commit_threshold` commits the minimize.
#[derive(Clone, Debug)]
pub struct SwipeGesture {
    config: SwipeConfig,
    start_y: f32,
    offset: f32,
    active: bool,
}

impl SwipeGesture {
    /// Create an idle gesture
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            start_y: 0.0,
            offset: 0.0,
            active: false,
        }
    }

    /// Check if a finger is currently down on the title bar
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current visual offset in pixels
    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Opacity of the "release to minimize" indicator
    #[inline]
    pub fn indicator_opacity(&self) -> f32 {
        (self.offset / self.config.commit_threshold).min(1.0)
    }

    /// Start tracking from a touch at `client_y`
    pub fn begin(&mut self, client_y: f32) {
        self.start_y = client_y;
        self.active = true;
    }

    /// Follow the finger; upward travel leaves the offset where it was
    pub fn update(&mut self, client_y: f32) {
        if !self.active {
            return;
        }
        let delta = client_y - self.start_y;
        if delta > 0.0 {
            self.offset = delta.min(self.config.max_offset);
            trace!(offset = self.offset, "swipe moved");
        }
    }

    /// Release the finger
    ///
    /// A cancelled swipe resets the offset immediately. A committed swipe keeps
    /// its offset until [`reset`](Self::reset) is called after the exit animation.
    pub fn end(&mut self) -> Option<SwipeOutcome> {
        if !self.active {
            return None;
        }
        self.active = false;

        if self.offset > self.config.commit_threshold {
            Some(SwipeOutcome::Commit)
        } else {
            self.offset = 0.0;
            Some(SwipeOutcome::Cancel)
        }
    }

    /// Clear the offset
    pub fn reset(&mut self) {
        self.active = false;
        self.offset = 0.0;
    }
}
