//! Window record and lifecycle state

use serde::Serialize;
use crate::math::{Size, Vec2};
use super::WindowId;

/// Lifecycle state of a window
///
/// Minimized windows remember whether they were maximized, so the
/// minimized-and-maximized combination is a remembered attribute rather than
/// two flags that could disagree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WindowState {
    #[default]
    Closed,
    Normal,
    Maximized,
    Minimized {
        /// Whether restore returns to the maximized layout
        maximized: bool,
    },
}

impl WindowState {
    /// Any state other than `Closed`
    #[inline]
    pub fn is_open(self) -> bool {
        self != WindowState::Closed
    }

    #[inline]
    pub fn is_minimized(self) -> bool {
        matches!(self, WindowState::Minimized { .. })
    }

    /// Maximized, or minimized from a maximized layout
    #[inline]
    pub fn is_maximized(self) -> bool {
        matches!(
            self,
            WindowState::Maximized | WindowState::Minimized { maximized: true }
        )
    }

    /// Open and drawn on screen
    #[inline]
    pub fn is_visible(self) -> bool {
        matches!(self, WindowState::Normal | WindowState::Maximized)
    }
}

/// One application window
#[derive(Clone, Debug, PartialEq)]
pub struct WindowRecord {
    /// Stable key
    pub id: WindowId,
    /// Title bar text
    pub title: String,
    /// Display glyph
    pub icon: String,
    /// Current lifecycle state
    pub state: WindowState,
    /// Stacking order (higher = on top)
    pub z_index: u32,
    /// Top-left corner in viewport coordinates
    pub position: Vec2,
    /// Current size
    pub size: Size,
    /// Template size responsive defaults are derived from
    pub default_size: Size,
}

impl WindowRecord {
    /// Flag view of the record for the renderer
    pub fn snapshot(&self) -> WindowSnapshot {
        WindowSnapshot {
            id: self.id.clone(),
            title: self.title.clone(),
            icon: self.icon.clone(),
            is_open: self.state.is_open(),
            is_minimized: self.state.is_minimized(),
            is_maximized: self.state.is_maximized(),
            z_index: self.z_index,
            position: self.position,
            size: self.size,
            default_size: self.default_size,
        }
    }
}

/// Serializable flag view of a [`WindowRecord`]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSnapshot {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    pub is_open: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub z_index: u32,
    pub position: Vec2,
    pub size: Size,
    pub default_size: Size,
}
