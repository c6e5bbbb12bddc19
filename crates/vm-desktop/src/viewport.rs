//! Viewport size and responsive class

use serde::{Deserialize, Serialize};
use crate::math::Size;

/// Desktop vs. mobile categorization of the screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    Desktop,
    Mobile,
}

/// Browser viewport in logical pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Inner size of the browser window
    pub size: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: Size::new(1920.0, 1080.0),
        }
    }
}

impl Viewport {
    /// Create a new viewport with the given screen size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }

    /// Classify against a width breakpoint; widths strictly below it are mobile
    #[inline]
    pub fn class(&self, breakpoint: f32) -> ViewportClass {
        if self.size.width < breakpoint {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }
}
