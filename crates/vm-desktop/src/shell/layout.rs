//! Render-ready window frame description

use serde::Serialize;
use crate::input::ResizeDirection;
use crate::math::Rect;
use crate::transition::AnimationPhase;
use crate::window::WindowId;

/// Where and how a window frame is drawn
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FrameLayout {
    /// Closed or minimized
    Hidden,
    /// Fills the viewport above the taskbar (mobile or maximized)
    Fullscreen {
        #[serde(rename = "zIndex")]
        z_index: u32,
        /// Vertical swipe translation in pixels
        #[serde(rename = "translateY")]
        translate_y: f32,
        /// False while a finger is down, so the frame tracks it without easing
        animate: bool,
    },
    /// Free-floating at `rect`
    Floating {
        rect: Rect,
        #[serde(rename = "zIndex")]
        z_index: u32,
    },
}

impl FrameLayout {
    #[inline]
    pub fn is_hidden(&self) -> bool {
        matches!(self, FrameLayout::Hidden)
    }

    #[inline]
    pub fn is_fullscreen(&self) -> bool {
        matches!(self, FrameLayout::Fullscreen { .. })
    }

    /// Floating rectangle, if floating
    pub fn rect(&self) -> Option<Rect> {
        match self {
            FrameLayout::Floating { rect, .. } => Some(*rect),
            _ => None,
        }
    }
}

/// One resize handle to draw, addressed as region `resize-<direction>`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ResizeHandle {
    pub direction: &'static str,
    pub cursor: &'static str,
}

impl From<ResizeDirection> for ResizeHandle {
    fn from(direction: ResizeDirection) -> Self {
        Self {
            direction: direction.as_str(),
            cursor: direction.cursor(),
        }
    }
}

/// Everything the renderer needs for one window
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowView {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    pub layout: FrameLayout,
    pub animation: AnimationPhase,
    /// Eased progress of the running animation, 1.0 at rest
    pub animation_progress: f32,
    pub focused: bool,
    pub dragging: bool,
    pub resizing: bool,
    pub swiping: bool,
    pub swipe_offset: f32,
    pub swipe_indicator_opacity: f32,
    pub show_resize_handles: bool,
    /// Empty unless `show_resize_handles`
    pub resize_handles: Vec<ResizeHandle>,
    /// CSS cursor over the title bar
    pub title_bar_cursor: &'static str,
    pub show_maximize_button: bool,
}
