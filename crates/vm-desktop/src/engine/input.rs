//! Pointer and touch routing

use tracing::trace;
use crate::input::{GestureHost, GesturePoint, InputResult};
use crate::window::WindowRegion;
use super::DesktopEngine;

impl DesktopEngine {
    /// Pointer or touch pressed on `region` of window `id`
    pub fn pointer_down(
        &mut self,
        id: &str,
        region: WindowRegion,
        point: GesturePoint,
        host: &mut dyn GestureHost,
        now_ms: f64,
    ) -> InputResult {
        let Some(index) = self.shell_index(id) else {
            trace!(window = id, "pointer down: unknown window");
            return InputResult::Unhandled;
        };

        let result = self.shells[index].pointer_down(&mut self.windows, region, point, host);
        self.sync_shells(now_ms);
        result
    }

    /// Pointer or touch moved anywhere in the document
    ///
    /// Delivered to every shell with a live gesture.
    pub fn pointer_move(&mut self, point: GesturePoint) -> InputResult {
        self.shells
            .iter_mut()
            .filter(|s| s.has_session())
            .map(|s| s.pointer_move(point))
            .fold(InputResult::Unhandled, strongest)
    }

    /// Pointer released anywhere in the document
    pub fn pointer_up(&mut self, host: &mut dyn GestureHost, now_ms: f64) -> InputResult {
        let mut result = InputResult::Unhandled;
        for shell in self.shells.iter_mut().filter(|s| s.has_session()) {
            result = strongest(result, shell.pointer_up(&mut self.windows, host, now_ms));
        }
        self.sync_shells(now_ms);
        result
    }

    /// Touch sequence cancelled by the browser; commits like a release
    pub fn pointer_cancel(&mut self, host: &mut dyn GestureHost, now_ms: f64) -> InputResult {
        trace!("pointer cancelled");
        self.pointer_up(host, now_ms)
    }
}

/// Combine two results, keeping the one that asks the host for more
fn strongest(a: InputResult, b: InputResult) -> InputResult {
    fn rank(result: &InputResult) -> u8 {
        match result {
            InputResult::Unhandled => 0,
            InputResult::Handled | InputResult::Forward { .. } => 1,
            InputResult::Consumed => 2,
        }
    }
    if rank(&b) > rank(&a) {
        b
    } else {
        a
    }
}
