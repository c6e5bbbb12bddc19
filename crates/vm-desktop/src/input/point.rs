//! Normalized pointer input

use crate::math::Vec2;

/// Device an interaction came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// A pointer position in client coordinates, tagged with its source
///
/// Mouse and touch events carry coordinates differently; both are reduced to
/// this type before reaching any gesture state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GesturePoint {
    pub position: Vec2,
    pub source: PointerSource,
}

impl GesturePoint {
    /// Adapter for mouse events
    #[inline]
    pub fn mouse(client_x: f32, client_y: f32) -> Self {
        Self {
            position: Vec2::new(client_x, client_y),
            source: PointerSource::Mouse,
        }
    }

    /// Adapter for touch events; uses the first active touch
    ///
    /// Returns `None` for touch lists without touches (e.g. `touchend`).
    #[inline]
    pub fn touch(touches: &[Vec2]) -> Option<Self> {
        touches.first().map(|&position| Self {
            position,
            source: PointerSource::Touch,
        })
    }

    #[inline]
    pub fn is_touch(&self) -> bool {
        self.source == PointerSource::Touch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_adapter() {
        let p = GesturePoint::mouse(100.0, 80.0);
        assert_eq!(p.position, Vec2::new(100.0, 80.0));
        assert!(!p.is_touch());
    }

    #[test]
    fn test_touch_adapter_uses_first_touch() {
        let p = GesturePoint::touch(&[Vec2::new(10.0, 20.0), Vec2::new(300.0, 400.0)]).unwrap();
        assert_eq!(p.position, Vec2::new(10.0, 20.0));
        assert!(p.is_touch());
        assert!(GesturePoint::touch(&[]).is_none());
    }
}
