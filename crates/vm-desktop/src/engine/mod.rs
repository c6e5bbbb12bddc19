//! Desktop engine coordinating the window manager and its shells
//!
//! This module is split into focused submodules:
//! - `windows`: Window lifecycle, taskbar and keyboard shortcuts
//! - `input`: Pointer and touch routing to the shells

mod input;
mod windows;

use serde::Serialize;
use tracing::{debug, info};
use crate::config::DesktopConfig;
use crate::error::DesktopResult;
use crate::shell::{WindowShell, WindowView};
use crate::viewport::Viewport;
use crate::window::{catalog_from_json, default_catalog, WindowConfig, WindowManager};

pub use windows::TaskbarEntry;

/// Desktop engine coordinating all window components
///
/// This is the main entry point for the host, managing:
/// - Window manager (records, focus, z-order, responsive geometry)
/// - One presentation shell per window (gestures, swipe, animations)
///
/// Every mutation goes through the engine so shells observe state changes in
/// the same call. Time is supplied by the caller as `now_ms`.
pub struct DesktopEngine {
    pub(crate) windows: WindowManager,
    /// Shells in catalog order, parallel to the manager's records
    pub(crate) shells: Vec<WindowShell>,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::from_parts(default_catalog(), DesktopConfig::default(), Viewport::default())
    }
}

impl DesktopEngine {
    /// Create an engine for the default catalog at the given viewport size
    pub fn new(width: f32, height: f32) -> Self {
        Self::from_parts(default_catalog(), DesktopConfig::default(), Viewport::new(width, height))
    }

    /// Create an engine with a custom catalog and configuration
    pub fn with_config(
        catalog: Vec<WindowConfig>,
        config: DesktopConfig,
        viewport: Viewport,
    ) -> DesktopResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(catalog, config, viewport))
    }

    /// Create an engine from JSON configuration, with an optional JSON catalog
    ///
    /// Without `catalog_json` the default catalog is used.
    pub fn from_json(
        width: f32,
        height: f32,
        config_json: &str,
        catalog_json: Option<&str>,
    ) -> DesktopResult<Self> {
        let config = DesktopConfig::from_json(config_json)?;
        let catalog = match catalog_json {
            Some(json) => catalog_from_json(json)?,
            None => default_catalog(),
        };
        Self::with_config(catalog, config, Viewport::new(width, height))
    }

    fn from_parts(catalog: Vec<WindowConfig>, config: DesktopConfig, viewport: Viewport) -> Self {
        let windows = WindowManager::new(catalog, config, viewport);
        let shells = windows
            .windows()
            .iter()
            .map(|w| WindowShell::new(w.id.clone(), windows.config()))
            .collect();

        info!(
            windows = windows.count(),
            mobile = windows.is_mobile(),
            "desktop engine created"
        );
        Self { windows, shells }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Window manager (read-only; mutate through the engine)
    #[inline]
    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    /// Shell bound to a window
    pub fn shell(&self, id: &str) -> Option<&WindowShell> {
        self.shells.iter().find(|s| s.window_id() == id)
    }

    #[inline]
    pub fn is_mobile(&self) -> bool {
        self.windows.is_mobile()
    }

    /// Check if any window is mid-gesture
    pub fn has_active_gesture(&self) -> bool {
        self.shells.iter().any(WindowShell::has_session)
    }

    /// Check if any animation timer is pending (the host should keep ticking)
    pub fn is_animating(&self) -> bool {
        self.shells.iter().any(|s| s.animation().is_animating())
    }

    // =========================================================================
    // Time and viewport
    // =========================================================================

    /// Advance timers; returns `true` if any transition fired
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let mut fired = false;
        for shell in &mut self.shells {
            fired |= shell.tick(&mut self.windows, now_ms);
        }
        if fired {
            self.sync_shells(now_ms);
        }
        fired
    }

    /// Report a browser resize; returns `true` if the viewport class changed
    pub fn set_viewport(&mut self, width: f32, height: f32, now_ms: f64) -> bool {
        let changed = self.windows.set_viewport(Viewport::new(width, height));
        if changed {
            debug!(width, height, mobile = self.is_mobile(), "viewport class changed");
            self.sync_shells(now_ms);
        }
        changed
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render description of one window
    pub fn view(&self, id: &str, now_ms: f64) -> Option<WindowView> {
        let window = self.windows.get(id)?;
        let shell = self.shell(id)?;
        let focused = self.windows.focused() == Some(id);
        Some(shell.view(window, self.is_mobile(), focused, now_ms))
    }

    /// Render descriptions of every visible window, back to front
    pub fn views(&self, now_ms: f64) -> Vec<WindowView> {
        self.windows
            .windows_by_z()
            .into_iter()
            .filter(|w| w.state.is_visible())
            .filter_map(|w| self.view(&w.id, now_ms))
            .collect()
    }

    /// [`view`](Self::view) as JSON (`null` for unknown ids)
    pub fn view_json(&self, id: &str, now_ms: f64) -> DesktopResult<String> {
        to_json(&self.view(id, now_ms))
    }

    /// [`views`](Self::views) as a JSON array
    pub fn views_json(&self, now_ms: f64) -> DesktopResult<String> {
        to_json(&self.views(now_ms))
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Let every shell observe the current records
    pub(crate) fn sync_shells(&mut self, now_ms: f64) {
        for shell in &mut self.shells {
            if let Some(window) = self.windows.get(shell.window_id()) {
                shell.sync(window, now_ms);
            }
        }
    }

    pub(crate) fn shell_index(&self, id: &str) -> Option<usize> {
        self.shells.iter().position(|s| s.window_id() == id)
    }
}

fn to_json<T: Serialize>(value: &T) -> DesktopResult<String> {
    Ok(serde_json::to_string(value)?)
}
