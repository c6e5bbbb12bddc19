//! Window manager for lifecycle, focus, and z-order

use tracing::{debug, trace};
use crate::config::DesktopConfig;
use crate::error::{DesktopError, DesktopResult};
use crate::math::{Size, Vec2};
use crate::viewport::{Viewport, ViewportClass};
use super::{cascade_position, responsive_size, WindowConfig, WindowRecord, WindowSnapshot, WindowState};

/// Single owner of every window record and the stacking counter
///
/// Records are created once from the catalog and never removed; closing a
/// window only changes its state. Operations naming an unknown id are no-ops.
pub struct WindowManager {
    /// Records in catalog order (the order drives cascade placement)
    windows: Vec<WindowRecord>,
    /// Highest z-index handed out so far
    high_water: u32,
    /// Last reported viewport
    viewport: Viewport,
    /// Class derived from `viewport` at the last breakpoint crossing
    class: ViewportClass,
    config: DesktopConfig,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(super::default_catalog(), DesktopConfig::default(), Viewport::default())
    }
}

impl WindowManager {
    /// Create a manager with every catalog window closed
    pub fn new(catalog: Vec<WindowConfig>, config: DesktopConfig, viewport: Viewport) -> Self {
        let class = viewport.class(config.mobile_breakpoint);
        let count = catalog.len() as u32;

        let windows = catalog
            .into_iter()
            .enumerate()
            .map(|(index, window)| {
                let size = responsive_size(window.default_size, class, &viewport, &config.cascade);
                WindowRecord {
                    position: cascade_position(index, size, class, &viewport, &config.cascade),
                    size,
                    id: window.id,
                    title: window.title,
                    icon: window.icon,
                    state: WindowState::Closed,
                    z_index: config.z_base + index as u32,
                    default_size: window.default_size,
                }
            })
            .collect();

        Self {
            windows,
            high_water: config.z_base + count.saturating_sub(1),
            viewport,
            class,
            config,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Open a window at its default geometry and bring it to the front
    ///
    /// Size and position are recomputed from the responsive size and cascade
    /// slot whatever the prior state, so re-opening an open window resets a
    /// moved, resized, maximized or minimized one. On mobile-class viewports
    /// it opens maximized.
    pub fn open(&mut self, id: &str) {
        let Some(index) = self.index_of(id) else {
            trace!(window = id, "open: unknown window");
            return;
        };

        let z_index = self.next_z();
        let size = self.responsive_size_of(index);
        let position = self.cascade_position_of(index, size);
        let mobile = self.is_mobile();

        let window = &mut self.windows[index];
        let reopened = window.state.is_open();
        window.size = size;
        window.position = position;
        window.z_index = z_index;
        window.state = if mobile {
            WindowState::Maximized
        } else {
            WindowState::Normal
        };
        debug!(window = id, z_index, mobile, reopened, "opened");
    }

    /// Close a window; a later open starts unmaximized
    pub fn close(&mut self, id: &str) {
        if let Some(window) = self.find_mut(id) {
            window.state = WindowState::Closed;
            debug!(window = id, "closed");
        }
    }

    /// Minimize an open window, remembering whether it was maximized
    pub fn minimize(&mut self, id: &str) {
        if let Some(window) = self.find_mut(id) {
            let maximized = match window.state {
                WindowState::Normal => false,
                WindowState::Maximized => true,
                _ => {
                    trace!(window = id, state = ?window.state, "minimize: not visible");
                    return;
                }
            };
            window.state = WindowState::Minimized { maximized };
            debug!(window = id, maximized, "minimized");
        }
    }

    /// Restore a minimized window to its previous layout and raise it
    ///
    /// Restoring a visible window just raises it; closed windows are left alone.
    pub fn restore(&mut self, id: &str) {
        let Some(index) = self.index_of(id) else {
            trace!(window = id, "restore: unknown window");
            return;
        };

        let state = self.windows[index].state;
        if !state.is_open() {
            trace!(window = id, "restore: window is closed");
            return;
        }

        let z_index = self.next_z();
        let window = &mut self.windows[index];
        window.z_index = z_index;
        if let WindowState::Minimized { maximized } = state {
            window.state = restored_state(maximized);
        }
        debug!(window = id, z_index, "restored");
    }

    /// Toggle between the normal and maximized layouts
    ///
    /// Only applies to visible windows; z-order is unchanged.
    pub fn maximize_toggle(&mut self, id: &str) {
        if let Some(window) = self.find_mut(id) {
            window.state = match window.state {
                WindowState::Normal => WindowState::Maximized,
                WindowState::Maximized => WindowState::Normal,
                other => {
                    trace!(window = id, state = ?other, "maximize: not visible");
                    return;
                }
            };
            debug!(window = id, maximized = window.state.is_maximized(), "maximize toggled");
        }
    }

    /// Raise a window to the top of the stack
    pub fn focus(&mut self, id: &str) {
        let Some(index) = self.index_of(id) else {
            trace!(window = id, "focus: unknown window");
            return;
        };
        let z_index = self.next_z();
        self.windows[index].z_index = z_index;
        trace!(window = id, z_index, "focused");
    }

    /// Move a window
    pub fn update_position(&mut self, id: &str, position: Vec2) {
        if let Some(window) = self.find_mut(id) {
            window.position = position;
        }
    }

    /// Resize a window
    pub fn update_size(&mut self, id: &str, size: Size) {
        if let Some(window) = self.find_mut(id) {
            window.size = size;
        }
    }

    /// Report the current viewport size
    ///
    /// Crossing the mobile breakpoint recomputes the size of every
    /// non-maximized window and the cascade slot of every closed one.
    /// Returns `true` if the viewport class changed.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        self.viewport = viewport;

        let class = viewport.class(self.config.mobile_breakpoint);
        if class == self.class {
            return false;
        }
        self.class = class;

        for index in 0..self.windows.len() {
            let state = self.windows[index].state;
            if state.is_maximized() {
                continue;
            }

            let size = self.responsive_size_of(index);
            let position = (!state.is_open()).then(|| self.cascade_position_of(index, size));

            let window = &mut self.windows[index];
            window.size = size;
            if let Some(position) = position {
                window.position = position;
            }
        }

        debug!(?class, width = viewport.size.width, "viewport class changed");
        true
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Get a window by id
    pub fn get(&self, id: &str) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Get a window by id, failing on unknown ids
    pub fn try_get(&self, id: &str) -> DesktopResult<&WindowRecord> {
        self.get(id)
            .ok_or_else(|| DesktopError::UnknownWindow(id.to_string()))
    }

    /// All windows in catalog order
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    /// Open windows in catalog order (taskbar order)
    pub fn open_windows(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.iter().filter(|w| w.state.is_open())
    }

    /// Get windows sorted by z-index (back to front)
    pub fn windows_by_z(&self) -> Vec<&WindowRecord> {
        let mut windows: Vec<&WindowRecord> = self.windows.iter().collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// The focused window: highest z-index among visible windows
    pub fn focused(&self) -> Option<&str> {
        self.windows
            .iter()
            .filter(|w| w.state.is_visible())
            .max_by_key(|w| w.z_index)
            .map(|w| w.id.as_str())
    }

    /// Highest z-index handed out so far
    #[inline]
    pub fn high_water(&self) -> u32 {
        self.high_water
    }

    /// Current viewport class
    #[inline]
    pub fn class(&self) -> ViewportClass {
        self.class
    }

    /// Check if the viewport is mobile-class
    #[inline]
    pub fn is_mobile(&self) -> bool {
        self.class == ViewportClass::Mobile
    }

    /// Last reported viewport
    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Active configuration
    #[inline]
    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    /// Flag view of every window for the renderer
    pub fn snapshot(&self) -> Vec<WindowSnapshot> {
        self.windows.iter().map(WindowRecord::snapshot).collect()
    }

    /// [`snapshot`](Self::snapshot) as a JSON array
    pub fn snapshot_json(&self) -> DesktopResult<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    /// Get the number of windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn index_of(&self, id: &str) -> Option<usize> {
        self.windows.iter().position(|w| w.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut WindowRecord> {
        let found = self.windows.iter_mut().find(|w| w.id == id);
        if found.is_none() {
            trace!(window = id, "unknown window");
        }
        found
    }

    fn next_z(&mut self) -> u32 {
        self.high_water += 1;
        self.high_water
    }

    fn responsive_size_of(&self, index: usize) -> Size {
        responsive_size(
            self.windows[index].default_size,
            self.class,
            &self.viewport,
            &self.config.cascade,
        )
    }

    fn cascade_position_of(&self, index: usize, size: Size) -> Vec2 {
        cascade_position(index, size, self.class, &self.viewport, &self.config.cascade)
    }
}

fn restored_state(maximized: bool) -> WindowState {
    if maximized {
        WindowState::Maximized
    } else {
        WindowState::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop_manager() -> WindowManager {
        WindowManager::new(
            super::super::default_catalog(),
            DesktopConfig::default(),
            Viewport::new(1920.0, 1080.0),
        )
    }

    fn mobile_manager() -> WindowManager {
        WindowManager::new(
            super::super::default_catalog(),
            DesktopConfig::default(),
            Viewport::new(375.0, 667.0),
        )
    }

    #[test]
    fn test_all_windows_start_closed() {
        let wm = desktop_manager();
        assert_eq!(wm.count(), 11);
        assert!(wm.windows().iter().all(|w| w.state == WindowState::Closed));
        assert_eq!(wm.focused(), None);
        assert_eq!(wm.high_water(), 20);
    }

    #[test]
    fn test_open_assigns_cascade_and_top_z() {
        let mut wm = desktop_manager();
        wm.open("shows");

        let shows = wm.get("shows").unwrap();
        assert_eq!(shows.state, WindowState::Normal);
        assert_eq!(shows.z_index, 21);
        assert_eq!(shows.position, Vec2::new(180.0, 60.0));
        assert_eq!(shows.size, Size::new(550.0, 450.0));
        assert_eq!(wm.focused(), Some("shows"));
    }

    #[test]
    fn test_open_on_mobile_maximizes() {
        let mut wm = mobile_manager();
        wm.open("about");
        assert_eq!(wm.get("about").unwrap().state, WindowState::Maximized);
    }

    #[test]
    fn test_open_already_open_resets_geometry() {
        let mut wm = desktop_manager();
        wm.open("about");
        wm.update_position("about", Vec2::new(680.0, 460.0));
        wm.update_size("about", Size::new(700.0, 520.0));
        wm.minimize("about");

        wm.open("about");
        let about = wm.get("about").unwrap();
        assert_eq!(about.state, WindowState::Normal);
        assert_eq!(about.position, Vec2::new(80.0, 60.0));
        assert_eq!(about.size, Size::new(500.0, 400.0));
        assert_eq!(about.z_index, 22);
    }

    #[test]
    fn test_open_maximized_window_unmaximizes_on_desktop() {
        let mut wm = desktop_manager();
        wm.open("about");
        wm.maximize_toggle("about");

        wm.open("about");
        assert_eq!(wm.get("about").unwrap().state, WindowState::Normal);
    }

    #[test]
    fn test_close_clears_maximized() {
        let mut wm = desktop_manager();
        wm.open("about");
        wm.maximize_toggle("about");
        assert!(wm.get("about").unwrap().state.is_maximized());

        wm.close("about");
        let about = wm.get("about").unwrap();
        assert!(!about.state.is_open());
        assert!(!about.state.is_maximized());

        wm.open("about");
        assert_eq!(wm.get("about").unwrap().state, WindowState::Normal);
    }

    #[test]
    fn test_minimize_restore_keeps_maximized() {
        let mut wm = desktop_manager();
        wm.open("news");
        wm.maximize_toggle("news");
        let before = wm.get("news").unwrap().clone();

        wm.minimize("news");
        assert_eq!(wm.get("news").unwrap().state, WindowState::Minimized { maximized: true });
        assert_eq!(wm.focused(), None);

        wm.restore("news");
        let after = wm.get("news").unwrap();
        assert_eq!(after.state, WindowState::Maximized);
        assert_eq!(after.position, before.position);
        assert_eq!(after.size, before.size);
        assert!(after.z_index > before.z_index);
    }

    #[test]
    fn test_minimize_closed_is_noop() {
        let mut wm = desktop_manager();
        wm.minimize("about");
        assert_eq!(wm.get("about").unwrap().state, WindowState::Closed);
    }

    #[test]
    fn test_restore_closed_is_noop() {
        let mut wm = desktop_manager();
        let before = wm.high_water();
        wm.restore("about");
        assert_eq!(wm.get("about").unwrap().state, WindowState::Closed);
        assert_eq!(wm.high_water(), before);
    }

    #[test]
    fn test_maximize_toggle_keeps_z() {
        let mut wm = desktop_manager();
        wm.open("about");
        let z = wm.get("about").unwrap().z_index;

        wm.maximize_toggle("about");
        assert_eq!(wm.get("about").unwrap().state, WindowState::Maximized);
        wm.maximize_toggle("about");
        assert_eq!(wm.get("about").unwrap().state, WindowState::Normal);
        assert_eq!(wm.get("about").unwrap().z_index, z);
    }

    #[test]
    fn test_focus_raises() {
        let mut wm = desktop_manager();
        wm.open("about");
        wm.open("shows");
        assert_eq!(wm.focused(), Some("shows"));

        wm.focus("about");
        assert_eq!(wm.focused(), Some("about"));
        let order: Vec<&str> = wm.windows_by_z().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(order.last(), Some(&"about"));
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut wm = desktop_manager();
        let before = wm.snapshot();
        let high_water = wm.high_water();

        wm.open("radio");
        wm.close("radio");
        wm.minimize("radio");
        wm.restore("radio");
        wm.maximize_toggle("radio");
        wm.focus("radio");
        wm.update_position("radio", Vec2::new(1.0, 1.0));
        wm.update_size("radio", Size::new(1.0, 1.0));

        assert_eq!(wm.snapshot(), before);
        assert_eq!(wm.high_water(), high_water);
        assert_eq!(
            wm.try_get("radio").unwrap_err(),
            DesktopError::UnknownWindow("radio".to_string())
        );
    }

    #[test]
    fn test_viewport_crossing_recomputes_closed_and_normal() {
        let mut wm = WindowManager::new(
            super::super::default_catalog(),
            DesktopConfig::default(),
            Viewport::new(1024.0, 768.0),
        );
        wm.open("about");
        wm.update_position("about", Vec2::new(300.0, 200.0));
        wm.open("members");
        wm.maximize_toggle("members");
        let members_before = wm.get("members").unwrap().clone();

        assert!(wm.set_viewport(Viewport::new(600.0, 800.0)));
        assert!(wm.is_mobile());

        // Open, normal: resized, keeps its position
        let about = wm.get("about").unwrap();
        assert_eq!(about.size, Size::new(500.0, 400.0));
        assert_eq!(about.position, Vec2::new(300.0, 200.0));

        // Closed: resized and recentered
        let archive = wm.get("archive").unwrap();
        assert_eq!(archive.size, Size::new(584.0, 500.0));
        assert!((archive.position.x - 8.0).abs() < 0.001);
        assert!((archive.position.y - 40.0).abs() < 0.001);

        // Maximized: untouched
        let members = wm.get("members").unwrap();
        assert_eq!(members.size, members_before.size);
        assert_eq!(members.position, members_before.position);
    }

    #[test]
    fn test_viewport_same_class_is_noop() {
        let mut wm = desktop_manager();
        let before = wm.snapshot();
        assert!(!wm.set_viewport(Viewport::new(1280.0, 720.0)));
        assert_eq!(wm.snapshot(), before);
        assert!((wm.viewport().size.width - 1280.0).abs() < 0.001);
    }
}
