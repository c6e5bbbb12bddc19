//! Window region identification for pointer-down routing

use std::str::FromStr;
use crate::error::DesktopError;
use crate::input::ResizeDirection;

/// Title bar control buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlButton {
    Minimize,
    Maximize,
    Close,
}

/// Part of a window an interaction started on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRegion {
    /// Title bar chrome (drag / swipe origin)
    TitleBar,
    /// Content panel area
    Content,
    /// One of the title bar buttons
    Control(ControlButton),
    /// One of the eight resize handles
    Resize(ResizeDirection),
}

impl WindowRegion {
    /// Get CSS cursor style for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            WindowRegion::TitleBar => "move",
            WindowRegion::Content => "default",
            WindowRegion::Control(_) => "pointer",
            WindowRegion::Resize(direction) => direction.cursor(),
        }
    }
}

impl FromStr for WindowRegion {
    type Err = DesktopError;

    /// Parse the region names used by the DOM layer:
    /// `titlebar`, `content`, `minimize`, `maximize`, `close`, `resize-<dir>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "titlebar" => Ok(WindowRegion::TitleBar),
            "content" => Ok(WindowRegion::Content),
            "minimize" => Ok(WindowRegion::Control(ControlButton::Minimize)),
            "maximize" => Ok(WindowRegion::Control(ControlButton::Maximize)),
            "close" => Ok(WindowRegion::Control(ControlButton::Close)),
            _ => match s.strip_prefix("resize-") {
                Some(code) => code
                    .parse()
                    .map(WindowRegion::Resize)
                    .map_err(|_| DesktopError::InvalidRegion(s.to_string())),
                None => Err(DesktopError::InvalidRegion(s.to_string())),
            },
        }
    }
}
