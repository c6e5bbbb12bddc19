//! Edge and corner resize controller

use std::str::FromStr;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use crate::error::DesktopError;
use crate::math::{clamp, Size, Vec2};
use super::{GestureHost, GestureKind, GesturePoint};

/// Which edge(s) of a window a resize handle moves
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeDirection {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeDirection {
    /// Every handle, in render order
    pub const ALL: [ResizeDirection; 8] = [
        ResizeDirection::North,
        ResizeDirection::South,
        ResizeDirection::East,
        ResizeDirection::West,
        ResizeDirection::NorthEast,
        ResizeDirection::NorthWest,
        ResizeDirection::SouthEast,
        ResizeDirection::SouthWest,
    ];

    /// Short handle code (`"n"`, `"se"`, ...)
    pub fn as_str(self) -> &'static str {
        match self {
            ResizeDirection::North => "n",
            ResizeDirection::South => "s",
            ResizeDirection::East => "e",
            ResizeDirection::West => "w",
            ResizeDirection::NorthEast => "ne",
            ResizeDirection::NorthWest => "nw",
            ResizeDirection::SouthEast => "se",
            ResizeDirection::SouthWest => "sw",
        }
    }

    #[inline]
    pub fn moves_north(self) -> bool {
        matches!(
            self,
            ResizeDirection::North | ResizeDirection::NorthEast | ResizeDirection::NorthWest
        )
    }

    #[inline]
    pub fn moves_south(self) -> bool {
        matches!(
            self,
            ResizeDirection::South | ResizeDirection::SouthEast | ResizeDirection::SouthWest
        )
    }

    #[inline]
    pub fn moves_east(self) -> bool {
        matches!(
            self,
            ResizeDirection::East | ResizeDirection::NorthEast | ResizeDirection::SouthEast
        )
    }

    #[inline]
    pub fn moves_west(self) -> bool {
        matches!(
            self,
            ResizeDirection::West | ResizeDirection::NorthWest | ResizeDirection::SouthWest
        )
    }

    /// Whether resizing from this handle also moves the window origin
    #[inline]
    pub fn moves_origin(self) -> bool {
        self.moves_north() || self.moves_west()
    }

    /// Get CSS cursor style for this handle
    pub fn cursor(self) -> &'static str {
        match self {
            ResizeDirection::North | ResizeDirection::South => "ns-resize",
            ResizeDirection::East | ResizeDirection::West => "ew-resize",
            ResizeDirection::NorthEast | ResizeDirection::SouthWest => "nesw-resize",
            ResizeDirection::NorthWest | ResizeDirection::SouthEast => "nwse-resize",
        }
    }
}

impl FromStr for ResizeDirection {
    type Err = DesktopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResizeDirection::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| DesktopError::InvalidResizeDirection(s.to_string()))
    }
}

/// Minimum and maximum window size for resizing
///
/// `Default` gives the generic controller limits; windows use [`ResizeLimits::WINDOW`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeLimits {
    pub min: Size,
    pub max: Size,
}

impl ResizeLimits {
    /// Limits used when a caller supplies none
    pub const CONTROLLER: ResizeLimits = ResizeLimits {
        min: Size::new(200.0, 150.0),
        max: Size::new(1920.0, 1080.0),
    };

    /// Limits for desktop windows
    pub const WINDOW: ResizeLimits = ResizeLimits {
        min: Size::new(280.0, 200.0),
        max: Size::new(1600.0, 1000.0),
    };
}

impl Default for ResizeLimits {
    fn default() -> Self {
        Self::CONTROLLER
    }
}

/// Calculate new position and size after a resize by `delta`
///
/// East/south edges clamp the new size directly. West/north edges clamp the
/// amount of change, then shift the origin so the opposite edge stays put.
pub fn calculate_resize(
    direction: ResizeDirection,
    start_pos: Vec2,
    start_size: Size,
    delta: Vec2,
    limits: ResizeLimits,
) -> (Vec2, Size) {
    let ResizeLimits { min, max } = limits;
    let mut new_pos = start_pos;
    let mut new_size = start_size;

    if direction.moves_east() {
        new_size.width = clamp(start_size.width + delta.x, min.width, max.width);
    }
    if direction.moves_west() {
        let change = (start_size.width - min.width).min(delta.x.max(-(max.width - start_size.width)));
        new_size.width = min.width.max(start_size.width - change);
        new_pos.x = start_pos.x + (start_size.width - new_size.width);
    }
    if direction.moves_south() {
        new_size.height = clamp(start_size.height + delta.y, min.height, max.height);
    }
    if direction.moves_north() {
        let change = (start_size.height - min.height).min(delta.y.max(-(max.height - start_size.height)));
        new_size.height = min.height.max(start_size.height - change);
        new_pos.y = start_pos.y + (start_size.height - new_size.height);
    }

    (new_pos, new_size)
}

/// State of one active resize
#[derive(Clone, Debug, PartialEq)]
pub struct ResizeSession {
    pub direction: ResizeDirection,
    pub start_size: Size,
    pub start_position: Vec2,
    pub start_pointer: Vec2,
    /// Live size
    pub size: Size,
    /// Live position (only moves for north/west handles)
    pub position: Vec2,
}

/// Values to commit when a resize ends
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeCommit {
    pub size: Size,
    /// Set only when the handle moved the window origin
    pub position: Option<Vec2>,
}

/// Converts a handle press plus a stream of moves into a live size and position
#[derive(Clone, Debug, Default)]
pub struct ResizeController {
    session: Option<ResizeSession>,
    limits: ResizeLimits,
}

impl ResizeController {
    /// Create a controller enforcing `limits`
    pub fn new(limits: ResizeLimits) -> Self {
        Self {
            session: None,
            limits,
        }
    }

    /// Check if a resize is in progress
    #[inline]
    pub fn is_resizing(&self) -> bool {
        self.session.is_some()
    }

    /// Current session, if resizing
    #[inline]
    pub fn session(&self) -> Option<&ResizeSession> {
        self.session.as_ref()
    }

    /// Limits enforced on every update
    #[inline]
    pub fn limits(&self) -> ResizeLimits {
        self.limits
    }

    /// Start resizing from `direction`'s handle
    pub fn begin(
        &mut self,
        direction: ResizeDirection,
        point: GesturePoint,
        size: Size,
        position: Vec2,
        host: &mut dyn GestureHost,
    ) {
        if self.session.is_none() {
            host.capture(GestureKind::Resize);
        }
        self.session = Some(ResizeSession {
            direction,
            start_size: size,
            start_position: position,
            start_pointer: point.position,
            size,
            position,
        });
        debug!(direction = direction.as_str(), "resize started");
    }

    /// Recompute live geometry; no-op when not resizing
    pub fn update(&mut self, pointer: Vec2) -> Option<(Vec2, Size)> {
        let limits = self.limits;
        let session = self.session.as_mut()?;

        let delta = pointer - session.start_pointer;
        let (position, size) = calculate_resize(
            session.direction,
            session.start_position,
            session.start_size,
            delta,
            limits,
        );

        session.size = size;
        if session.direction.moves_origin() {
            session.position = position;
        }
        trace!(width = size.width, height = size.height, "resize moved");
        Some((session.position, session.size))
    }

    /// Finish the resize and return what to commit
    ///
    /// Cancellation goes through here too. No-op when not resizing.
    pub fn end(&mut self, host: &mut dyn GestureHost) -> Option<ResizeCommit> {
        let session = self.session.take()?;
        host.release(GestureKind::Resize);
        debug!(
            direction = session.direction.as_str(),
            width = session.size.width,
            height = session.size.height,
            "resize ended"
        );

        Some(ResizeCommit {
            size: session.size,
            position: session.direction.moves_origin().then_some(session.position),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::NullHost;

    const START_POS: Vec2 = Vec2::new(80.0, 60.0);
    const START_SIZE: Size = Size::new(500.0, 400.0);

    fn resize(direction: ResizeDirection, dx: f32, dy: f32) -> (Vec2, Size) {
        calculate_resize(direction, START_POS, START_SIZE, Vec2::new(dx, dy), ResizeLimits::WINDOW)
    }

    #[test]
    fn test_parse_directions() {
        for direction in ResizeDirection::ALL {
            assert_eq!(direction.as_str().parse::<ResizeDirection>().unwrap(), direction);
        }
        assert_eq!(
            "up".parse::<ResizeDirection>().unwrap_err(),
            DesktopError::InvalidResizeDirection("up".to_string())
        );
    }

    #[test]
    fn test_resize_south_east() {
        let (pos, size) = resize(ResizeDirection::SouthEast, 50.0, 30.0);
        assert_eq!(pos, START_POS);
        assert!((size.width - 550.0).abs() < 0.001);
        assert!((size.height - 430.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_north_west_anchors_bottom_right() {
        let (pos, size) = resize(ResizeDirection::NorthWest, -50.0, -30.0);
        assert!((size.width - 550.0).abs() < 0.001);
        assert!((size.height - 430.0).abs() < 0.001);
        assert!((pos.x - (START_POS.x + (START_SIZE.width - size.width))).abs() < 0.001);
        assert!((pos.y - (START_POS.y + (START_SIZE.height - size.height))).abs() < 0.001);
        assert!((pos.x + size.width - 580.0).abs() < 0.001);
        assert!((pos.y + size.height - 460.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_west_clamps_to_min() {
        let (pos, size) = resize(ResizeDirection::West, 400.0, 0.0);
        assert!((size.width - 280.0).abs() < 0.001);
        assert!((pos.x - 300.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_west_clamps_to_max() {
        let (pos, size) = resize(ResizeDirection::West, -5000.0, 0.0);
        assert!((size.width - 1600.0).abs() < 0.001);
        assert!((pos.x - (80.0 - 1100.0)).abs() < 0.001);
    }

    #[test]
    fn test_resize_east_clamps() {
        let (_, shrunk) = resize(ResizeDirection::East, -1000.0, 0.0);
        assert!((shrunk.width - 280.0).abs() < 0.001);
        let (_, grown) = resize(ResizeDirection::East, 5000.0, 0.0);
        assert!((grown.width - 1600.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_north_clamps_to_min() {
        let (pos, size) = resize(ResizeDirection::North, 0.0, 1000.0);
        assert!((size.height - 200.0).abs() < 0.001);
        assert!((pos.y - 260.0).abs() < 0.001);
        assert!((pos.x - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_edge_handles_ignore_other_axis() {
        let (_, size) = resize(ResizeDirection::South, 100.0, 20.0);
        assert!((size.width - 500.0).abs() < 0.001);
        assert!((size.height - 420.0).abs() < 0.001);
    }

    #[test]
    fn test_controller_commit_position_only_for_origin_handles() {
        let mut host = NullHost;
        let mut controller = ResizeController::new(ResizeLimits::WINDOW);

        controller.begin(ResizeDirection::SouthEast, GesturePoint::mouse(580.0, 460.0), START_SIZE, START_POS, &mut host);
        controller.update(Vec2::new(630.0, 490.0));
        let commit = controller.end(&mut host).unwrap();
        assert_eq!(commit.size, Size::new(550.0, 430.0));
        assert_eq!(commit.position, None);

        controller.begin(ResizeDirection::NorthEast, GesturePoint::mouse(580.0, 60.0), START_SIZE, START_POS, &mut host);
        controller.update(Vec2::new(600.0, 40.0));
        let commit = controller.end(&mut host).unwrap();
        assert_eq!(commit.size, Size::new(520.0, 420.0));
        assert_eq!(commit.position, Some(Vec2::new(80.0, 40.0)));
    }

    #[test]
    fn test_controller_noops_without_session() {
        let mut host = NullHost;
        let mut controller = ResizeController::default();
        assert_eq!(controller.limits(), ResizeLimits::CONTROLLER);
        assert!(controller.update(Vec2::new(1.0, 1.0)).is_none());
        assert!(controller.end(&mut host).is_none());
    }
}
