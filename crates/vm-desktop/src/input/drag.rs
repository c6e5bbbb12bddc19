//! Title bar drag controller

use tracing::{debug, trace};
use crate::math::{clamp_position, Bounds, Rect, Vec2};
use super::{GestureHost, GestureKind, GesturePoint, PointerSource};

/// State of one active drag
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    /// Offset from the window's top-left corner to the pointer
    pub offset: Vec2,
    /// Live window position
    pub position: Vec2,
    /// Device that started the drag
    pub source: PointerSource,
}

/// Converts a title bar press plus a stream of moves into a window position
///
/// Only ever started for title bar origins; the shell filters out presses on
/// the content area and control buttons.
#[derive(Clone, Debug)]
pub struct DragController {
    session: Option<DragSession>,
    /// Optional caller-supplied region for the top-left corner
    bounds: Option<Bounds>,
    /// Hard floor applied after `bounds`
    floor: Vec2,
}

impl DragController {
    /// Create a controller with the given position floor
    pub fn new(floor: Vec2) -> Self {
        Self {
            session: None,
            bounds: None,
            floor,
        }
    }

    /// Restrict positions to `bounds` before the floor is applied
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Check if a drag is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Current session, if dragging
    #[inline]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Live position, if dragging
    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        self.session.as_ref().map(|s| s.position)
    }

    /// Start dragging from `point` on a window whose element box is `element`
    ///
    /// Captures global input on the first call; pressing again mid-drag only
    /// re-anchors the offset.
    pub fn begin(&mut self, point: GesturePoint, element: Rect, host: &mut dyn GestureHost) {
        let offset = point.position - element.position();

        if self.session.is_none() {
            host.capture(GestureKind::Drag);
        }
        self.session = Some(DragSession {
            offset,
            position: element.position(),
            source: point.source,
        });
        debug!(offset_x = offset.x, offset_y = offset.y, "drag started");
    }

    /// Move the live position; no-op when not dragging
    pub fn update(&mut self, pointer: Vec2) -> Option<Vec2> {
        let bounds = self.bounds;
        let floor = self.floor;
        let session = self.session.as_mut()?;

        let mut position = pointer - session.offset;
        if let Some(bounds) = bounds {
            position = clamp_position(position, bounds);
        }
        position = position.max(floor);

        session.position = position;
        trace!(x = position.x, y = position.y, "drag moved");
        Some(position)
    }

    /// Finish the drag and return the position to commit
    ///
    /// Cancellation goes through here too. No-op when not dragging.
    pub fn end(&mut self, host: &mut dyn GestureHost) -> Option<Vec2> {
        let session = self.session.take()?;
        host.release(GestureKind::Drag);
        debug!(x = session.position.x, y = session.position.y, "drag ended");
        Some(session.position)
    }
}
