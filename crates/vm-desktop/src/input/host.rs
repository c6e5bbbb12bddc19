//! Document-level capture seam

/// Kind of gesture holding a capture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    Drag,
    Resize,
}

impl GestureKind {
    /// Cursor the whole document shows while this gesture runs, if any
    ///
    /// Drags also suppress text selection for their duration.
    #[inline]
    pub fn document_cursor(self) -> Option<&'static str> {
        match self {
            GestureKind::Drag => Some("grabbing"),
            GestureKind::Resize => None,
        }
    }
}

/// Environment that delivers pointer events to an active gesture
///
/// Gestures keep receiving move/up/cancel events wherever the pointer travels,
/// so hosts install document-level listeners in [`capture`](Self::capture) and
/// remove them in [`release`](Self::release). Every capture is paired with
/// exactly one release, including when the gesture is cancelled.
pub trait GestureHost {
    /// Install global listeners (and document styles) for `kind`
    fn capture(&mut self, kind: GestureKind);

    /// Remove what [`capture`](Self::capture) installed
    fn release(&mut self, kind: GestureKind);
}

/// Host for environments that already route every event to the engine
#[derive(Clone, Copy, Debug, Default)]
pub struct NullHost;

impl GestureHost for NullHost {
    fn capture(&mut self, _kind: GestureKind) {}

    fn release(&mut self, _kind: GestureKind) {}
}
