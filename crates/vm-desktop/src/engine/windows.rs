//! Window lifecycle, taskbar and keyboard shortcuts

use serde::Serialize;
use tracing::debug;
use crate::input::InputResult;
use crate::window::WindowId;
use super::DesktopEngine;

/// Window opened by the Ctrl+Shift+A shortcut
const ADMIN_WINDOW: &str = "admin";

/// One taskbar button
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskbarEntry {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    pub minimized: bool,
    /// Holds focus
    pub active: bool,
}

impl DesktopEngine {
    /// Open a window (also used by content panels asking for another window)
    pub fn open(&mut self, id: &str, now_ms: f64) {
        self.windows.open(id);
        self.sync_shells(now_ms);
    }

    /// Close a window
    pub fn close(&mut self, id: &str, now_ms: f64) {
        self.windows.close(id);
        self.sync_shells(now_ms);
    }

    /// Minimize a window
    pub fn minimize(&mut self, id: &str, now_ms: f64) {
        self.windows.minimize(id);
        self.sync_shells(now_ms);
    }

    /// Restore a minimized window
    pub fn restore(&mut self, id: &str, now_ms: f64) {
        self.windows.restore(id);
        self.sync_shells(now_ms);
    }

    /// Toggle maximize
    pub fn maximize_toggle(&mut self, id: &str, now_ms: f64) {
        self.windows.maximize_toggle(id);
        self.sync_shells(now_ms);
    }

    /// Bring a window to the front
    pub fn focus(&mut self, id: &str, now_ms: f64) {
        self.windows.focus(id);
        self.sync_shells(now_ms);
    }

    // =========================================================================
    // Taskbar
    // =========================================================================

    /// Taskbar button or start menu click
    ///
    /// Minimized windows are restored, visible ones minimized and closed ones
    /// opened.
    pub fn taskbar_click(&mut self, id: &str, now_ms: f64) {
        let Some(state) = self.windows.get(id).map(|w| w.state) else {
            return;
        };

        if state.is_minimized() {
            self.restore(id, now_ms);
        } else if state.is_open() {
            self.minimize(id, now_ms);
        } else {
            self.open(id, now_ms);
        }
        debug!(window = id, "taskbar click");
    }

    /// Buttons for every open window, in catalog order
    pub fn taskbar_entries(&self) -> Vec<TaskbarEntry> {
        let focused = self.windows.focused();
        self.windows
            .open_windows()
            .map(|w| TaskbarEntry {
                id: w.id.clone(),
                title: w.title.clone(),
                icon: w.icon.clone(),
                minimized: w.state.is_minimized(),
                active: focused == Some(w.id.as_str()),
            })
            .collect()
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    /// Handle a key press
    ///
    /// Ctrl+Shift+A opens the admin window; everything else passes through.
    pub fn handle_key(&mut self, key: &str, ctrl: bool, shift: bool, now_ms: f64) -> InputResult {
        if ctrl && shift && key.eq_ignore_ascii_case("a") {
            debug!("admin shortcut");
            self.open(ADMIN_WINDOW, now_ms);
            return InputResult::Consumed;
        }
        InputResult::Unhandled
    }
}
