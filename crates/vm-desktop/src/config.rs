//! Tunables for the window manager
//!
//! Every constant the manager, controllers and shells consult lives here so
//! hosts can override them from JSON. Defaults match the shipped desktop.

use serde::{Deserialize, Serialize};
use crate::error::{DesktopError, DesktopResult};
use crate::input::ResizeLimits;
use crate::math::{Size, Vec2};

/// Default placement parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CascadeConfig {
    /// Top-left of the first desktop window
    pub origin: Vec2,
    /// Horizontal step between columns
    pub column_step: f32,
    /// Vertical step between rows
    pub row_step: f32,
    /// Windows per row before wrapping
    pub columns: u32,
    /// Minimum left margin on mobile
    pub mobile_margin: f32,
    /// Top offset of the first mobile window
    pub mobile_top: f32,
    /// Vertical stagger between consecutive mobile windows
    pub mobile_stagger: f32,
    /// Number of stagger rows on mobile
    pub mobile_rows: u32,
    /// Space reserved around a mobile window (horizontal margins, taskbar)
    pub mobile_inset: Size,
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            origin: Vec2::new(80.0, 60.0),
            column_step: 50.0,
            row_step: 40.0,
            columns: 3,
            mobile_margin: 8.0,
            mobile_top: 20.0,
            mobile_stagger: 20.0,
            mobile_rows: 2,
            mobile_inset: Size::new(16.0, 80.0),
        }
    }
}

/// Swipe-to-minimize thresholds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwipeConfig {
    /// Largest visual offset applied while swiping
    pub max_offset: f32,
    /// Displacement past which release minimizes the window
    pub commit_threshold: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            max_offset: 150.0,
            commit_threshold: 80.0,
        }
    }
}

/// Window manager configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesktopConfig {
    /// Viewport widths below this are mobile-class
    pub mobile_breakpoint: f32,
    /// Lowest top-left corner a drag may produce
    pub drag_min: Vec2,
    /// Size limits enforced by window resize handles
    pub resize: ResizeLimits,
    /// Default placement
    pub cascade: CascadeConfig,
    /// Mobile swipe gesture
    pub swipe: SwipeConfig,
    /// Duration of the enter animation
    pub enter_duration_ms: f64,
    /// Delay between a committed swipe and the minimize it triggers
    pub exit_duration_ms: f64,
    /// Starting z-index of the first configured window
    pub z_base: u32,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768.0,
            drag_min: Vec2::new(-100.0, 0.0),
            resize: ResizeLimits::WINDOW,
            cascade: CascadeConfig::default(),
            swipe: SwipeConfig::default(),
            enter_duration_ms: 250.0,
            exit_duration_ms: 200.0,
            z_base: 10,
        }
    }
}

impl DesktopConfig {
    /// Parse a configuration from JSON and validate it
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        let config: DesktopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the manager cannot work with
    pub fn validate(&self) -> DesktopResult<()> {
        if self.mobile_breakpoint <= 0.0 {
            return Err(DesktopError::InvalidConfig {
                field: "mobileBreakpoint",
                reason: "must be positive",
            });
        }
        if !self.resize.min.fits_within(self.resize.max) {
            return Err(DesktopError::InvalidConfig {
                field: "resize",
                reason: "min exceeds max",
            });
        }
        if self.cascade.columns == 0 || self.cascade.mobile_rows == 0 {
            return Err(DesktopError::InvalidConfig {
                field: "cascade",
                reason: "columns and mobileRows must be at least 1",
            });
        }
        if self.swipe.commit_threshold <= 0.0 || self.swipe.max_offset < 0.0 {
            return Err(DesktopError::InvalidConfig {
                field: "swipe",
                reason: "threshold must be positive and max offset non-negative",
            });
        }
        if self.enter_duration_ms < 0.0 || self.exit_duration_ms < 0.0 {
            return Err(DesktopError::InvalidConfig {
                field: "durations",
                reason: "must not be negative",
            });
        }
        Ok(())
    }
}
