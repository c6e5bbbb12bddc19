//! Per-window gesture and animation state

use tracing::debug;
use crate::config::DesktopConfig;
use crate::input::{
    DragController, GestureHost, GesturePoint, InputResult, ResizeController, ResizeDirection,
    SwipeGesture, SwipeOutcome,
};
use crate::math::{Rect, Vec2};
use crate::transition::{AnimationPhase, ScheduledAction, WindowAnimation};
use crate::window::{ControlButton, WindowId, WindowManager, WindowRecord, WindowRegion};
use super::{FrameLayout, ResizeHandle, WindowView};

/// Presentation state bound to one window
///
/// Each shell only tracks its own gesture sessions; geometry is committed to
/// the [`WindowManager`] when a gesture ends.
pub struct WindowShell {
    window_id: WindowId,
    drag: DragController,
    resize: ResizeController,
    swipe: SwipeGesture,
    animation: WindowAnimation,
    /// Visibility seen by the last [`sync`](Self::sync)
    was_visible: bool,
    enter_duration_ms: f64,
    exit_duration_ms: f64,
}

impl WindowShell {
    /// Create an idle shell for `window_id`
    pub fn new(window_id: impl Into<WindowId>, config: &DesktopConfig) -> Self {
        Self {
            window_id: window_id.into(),
            drag: DragController::new(config.drag_min),
            resize: ResizeController::new(config.resize),
            swipe: SwipeGesture::new(config.swipe.clone()),
            animation: WindowAnimation::default(),
            was_visible: false,
            enter_duration_ms: config.enter_duration_ms,
            exit_duration_ms: config.exit_duration_ms,
        }
    }

    // =========================================================================
    // State
    // =========================================================================

    #[inline]
    pub fn window_id(&self) -> &str {
        &self.window_id
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[inline]
    pub fn is_resizing(&self) -> bool {
        self.resize.is_resizing()
    }

    #[inline]
    pub fn is_swiping(&self) -> bool {
        self.swipe.is_active()
    }

    /// Check if any gesture is waiting for move/up events
    #[inline]
    pub fn has_session(&self) -> bool {
        self.is_dragging() || self.is_resizing() || self.is_swiping()
    }

    #[inline]
    pub fn swipe(&self) -> &SwipeGesture {
        &self.swipe
    }

    #[inline]
    pub fn animation(&self) -> &WindowAnimation {
        &self.animation
    }

    #[inline]
    pub fn phase(&self) -> AnimationPhase {
        self.animation.phase()
    }

    // =========================================================================
    // Record tracking
    // =========================================================================

    /// Follow the record after a manager mutation
    ///
    /// Becoming visible (from closed or minimized) starts the enter animation.
    /// Becoming invisible cancels any pending transition and clears the swipe.
    pub fn sync(&mut self, window: &WindowRecord, now_ms: f64) {
        let visible = window.state.is_visible();

        if visible && !self.was_visible {
            self.animation.enter(now_ms, self.enter_duration_ms);
            debug!(window = %self.window_id, "enter animation started");
        } else if !visible {
            self.animation.cancel();
            self.swipe.reset();
        }

        self.was_visible = visible;
    }

    /// Fire the pending transition if due; returns `true` if one fired
    pub fn tick(&mut self, windows: &mut WindowManager, now_ms: f64) -> bool {
        match self.animation.poll(now_ms) {
            Some(ScheduledAction::Minimize) => {
                windows.minimize(&self.window_id);
                self.swipe.reset();
                true
            }
            Some(ScheduledAction::Settle) => true,
            None => false,
        }
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Pointer or touch pressed on `region` of this window
    ///
    /// Focuses the window first, wherever the press landed.
    pub fn pointer_down(
        &mut self,
        windows: &mut WindowManager,
        region: WindowRegion,
        point: GesturePoint,
        host: &mut dyn GestureHost,
    ) -> InputResult {
        let (state, frame) = match windows.get(&self.window_id) {
            Some(window) if window.state.is_visible() => {
                (window.state, Rect::from_pos_size(window.position, window.size))
            }
            _ => return InputResult::Unhandled,
        };

        windows.focus(&self.window_id);
        let mobile = windows.is_mobile();
        let fullscreen = mobile || state.is_maximized();

        match region {
            WindowRegion::TitleBar => {
                if mobile {
                    if point.is_touch() {
                        self.swipe.begin(point.position.y);
                    }
                    InputResult::Handled
                } else if state.is_maximized() {
                    InputResult::Handled
                } else {
                    self.drag.begin(point, frame, host);
                    InputResult::Consumed
                }
            }
            WindowRegion::Content => {
                let origin = if fullscreen {
                    Vec2::new(0.0, self.swipe.offset())
                } else {
                    frame.position()
                };
                let local = point.position - origin;
                InputResult::Forward {
                    window_id: self.window_id.clone(),
                    local_x: local.x,
                    local_y: local.y,
                }
            }
            WindowRegion::Control(ControlButton::Minimize) => {
                windows.minimize(&self.window_id);
                InputResult::Handled
            }
            WindowRegion::Control(ControlButton::Maximize) => {
                if mobile {
                    return InputResult::Unhandled;
                }
                windows.maximize_toggle(&self.window_id);
                InputResult::Handled
            }
            WindowRegion::Control(ControlButton::Close) => {
                windows.close(&self.window_id);
                InputResult::Handled
            }
            WindowRegion::Resize(direction) => {
                if fullscreen {
                    return InputResult::Unhandled;
                }
                self.resize
                    .begin(direction, point, frame.size(), frame.position(), host);
                InputResult::Consumed
            }
        }
    }

    /// Pointer or touch moved anywhere in the document
    pub fn pointer_move(&mut self, point: GesturePoint) -> InputResult {
        let moved = self.drag.update(point.position).is_some()
            || self.resize.update(point.position).is_some();
        if moved {
            // Touch moves must not scroll the page underneath
            return if point.is_touch() {
                InputResult::Consumed
            } else {
                InputResult::Handled
            };
        }

        if self.swipe.is_active() {
            self.swipe.update(point.position.y);
            return InputResult::Handled;
        }

        InputResult::Unhandled
    }

    /// Pointer released (or touch cancelled): commit whatever is live
    pub fn pointer_up(
        &mut self,
        windows: &mut WindowManager,
        host: &mut dyn GestureHost,
        now_ms: f64,
    ) -> InputResult {
        let mut result = InputResult::Unhandled;

        if let Some(position) = self.drag.end(host) {
            windows.update_position(&self.window_id, position);
            result = InputResult::Handled;
        }

        if let Some(commit) = self.resize.end(host) {
            windows.update_size(&self.window_id, commit.size);
            if let Some(position) = commit.position {
                windows.update_position(&self.window_id, position);
            }
            result = InputResult::Handled;
        }

        match self.swipe.end() {
            Some(SwipeOutcome::Commit) if windows.is_mobile() => {
                self.animation.exit(now_ms, self.exit_duration_ms);
                debug!(window = %self.window_id, offset = self.swipe.offset(), "swipe committed");
                result = InputResult::Handled;
            }
            Some(SwipeOutcome::Commit) => {
                // Viewport left the mobile class mid-swipe
                self.swipe.reset();
                debug!(window = %self.window_id, "swipe dropped on desktop viewport");
                result = InputResult::Handled;
            }
            Some(SwipeOutcome::Cancel) => result = InputResult::Handled,
            None => {}
        }

        result
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Frame placement, using live gesture geometry while one is running
    pub fn layout(&self, window: &WindowRecord, mobile: bool) -> FrameLayout {
        if !window.state.is_visible() {
            return FrameLayout::Hidden;
        }

        if mobile || window.state.is_maximized() {
            return FrameLayout::Fullscreen {
                z_index: window.z_index,
                translate_y: if mobile { self.swipe.offset() } else { 0.0 },
                animate: !self.swipe.is_active(),
            };
        }

        let rect = if let Some(session) = self.resize.session() {
            Rect::from_pos_size(session.position, session.size)
        } else if let Some(position) = self.drag.position() {
            Rect::from_pos_size(position, window.size)
        } else {
            Rect::from_pos_size(window.position, window.size)
        };

        FrameLayout::Floating {
            rect,
            z_index: window.z_index,
        }
    }

    /// Resize handles are drawn only for floating desktop windows
    #[inline]
    pub fn show_resize_handles(&self, window: &WindowRecord, mobile: bool) -> bool {
        !mobile && !window.state.is_maximized()
    }

    /// Full render description of the window
    pub fn view(&self, window: &WindowRecord, mobile: bool, focused: bool, now_ms: f64) -> WindowView {
        let floating = self.show_resize_handles(window, mobile);
        let resize_handles = if floating {
            ResizeDirection::ALL.into_iter().map(ResizeHandle::from).collect()
        } else {
            Vec::new()
        };
        // Only floating windows can be dragged by the title bar
        let title_bar_cursor = if floating {
            WindowRegion::TitleBar.cursor()
        } else {
            WindowRegion::Content.cursor()
        };

        WindowView {
            id: window.id.clone(),
            title: window.title.clone(),
            icon: window.icon.clone(),
            layout: self.layout(window, mobile),
            animation: self.animation.phase(),
            animation_progress: self.animation.eased_progress(now_ms),
            focused,
            dragging: self.is_dragging(),
            resizing: self.is_resizing(),
            swiping: self.is_swiping(),
            swipe_offset: self.swipe.offset(),
            swipe_indicator_opacity: self.swipe.indicator_opacity(),
            show_resize_handles: floating,
            resize_handles,
            title_bar_cursor,
            show_maximize_button: !mobile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{GestureKind, ResizeDirection};
    use crate::math::Size;
    use crate::viewport::Viewport;
    use crate::window::{default_catalog, WindowState};

    #[derive(Default)]
    struct RecordingHost {
        events: Vec<(&'static str, GestureKind)>,
    }

    impl GestureHost for RecordingHost {
        fn capture(&mut self, kind: GestureKind) {
            self.events.push(("capture", kind));
        }

        fn release(&mut self, kind: GestureKind) {
            self.events.push(("release", kind));
        }
    }

    fn setup(viewport: Viewport, id: &str) -> (WindowManager, WindowShell) {
        let config = DesktopConfig::default();
        let mut windows = WindowManager::new(default_catalog(), config.clone(), viewport);
        let mut shell = WindowShell::new(id, &config);
        windows.open(id);
        shell.sync(windows.get(id).unwrap(), 0.0);
        (windows, shell)
    }

    fn desktop(id: &str) -> (WindowManager, WindowShell) {
        setup(Viewport::new(1920.0, 1080.0), id)
    }

    fn mobile(id: &str) -> (WindowManager, WindowShell) {
        setup(Viewport::new(375.0, 667.0), id)
    }

    #[test]
    fn test_title_bar_drag_commits_position() {
        let (mut windows, mut shell) = desktop("about");
        let mut host = RecordingHost::default();

        let result = shell.pointer_down(
            &mut windows,
            WindowRegion::TitleBar,
            GesturePoint::mouse(100.0, 80.0),
            &mut host,
        );
        assert_eq!(result, InputResult::Consumed);
        assert!(shell.is_dragging());

        shell.pointer_move(GesturePoint::mouse(300.0, 80.0));
        let live = shell.layout(windows.get("about").unwrap(), false);
        assert_eq!(live.rect().unwrap().position(), Vec2::new(280.0, 60.0));
        // Not committed until release
        assert_eq!(windows.get("about").unwrap().position, Vec2::new(80.0, 60.0));

        shell.pointer_up(&mut windows, &mut host, 10.0);
        assert_eq!(windows.get("about").unwrap().position, Vec2::new(280.0, 60.0));
        assert_eq!(
            host.events,
            vec![("capture", GestureKind::Drag), ("release", GestureKind::Drag)]
        );
    }

    #[test]
    fn test_touch_drag_move_is_consumed() {
        let (mut windows, mut shell) = desktop("about");
        let down = GesturePoint::touch(&[Vec2::new(100.0, 80.0)]).unwrap();
        shell.pointer_down(&mut windows, WindowRegion::TitleBar, down, &mut crate::input::NullHost);

        let moved = GesturePoint::touch(&[Vec2::new(150.0, 90.0)]).unwrap();
        assert_eq!(shell.pointer_move(moved), InputResult::Consumed);
    }

    #[test]
    fn test_resize_handle_commits_size_and_origin() {
        let (mut windows, mut shell) = desktop("about");
        let mut host = RecordingHost::default();

        shell.pointer_down(
            &mut windows,
            WindowRegion::Resize(ResizeDirection::NorthWest),
            GesturePoint::mouse(80.0, 60.0),
            &mut host,
        );
        shell.pointer_move(GesturePoint::mouse(100.0, 90.0));
        shell.pointer_up(&mut windows, &mut host, 0.0);

        let about = windows.get("about").unwrap();
        assert_eq!(about.size, Size::new(480.0, 370.0));
        assert_eq!(about.position, Vec2::new(100.0, 90.0));
        assert_eq!(
            host.events,
            vec![("capture", GestureKind::Resize), ("release", GestureKind::Resize)]
        );
    }

    #[test]
    fn test_maximized_window_has_no_drag_or_resize() {
        let (mut windows, mut shell) = desktop("about");
        windows.maximize_toggle("about");
        let mut host = RecordingHost::default();

        let title = shell.pointer_down(
            &mut windows,
            WindowRegion::TitleBar,
            GesturePoint::mouse(100.0, 10.0),
            &mut host,
        );
        let handle = shell.pointer_down(
            &mut windows,
            WindowRegion::Resize(ResizeDirection::SouthEast),
            GesturePoint::mouse(500.0, 500.0),
            &mut host,
        );
        assert_eq!(title, InputResult::Handled);
        assert_eq!(handle, InputResult::Unhandled);
        assert!(!shell.has_session());
        assert!(host.events.is_empty());
        assert!(!shell.show_resize_handles(windows.get("about").unwrap(), false));
    }

    #[test]
    fn test_press_focuses_window() {
        let (mut windows, mut shell) = desktop("about");
        windows.open("shows");
        assert_eq!(windows.focused(), Some("shows"));

        shell.pointer_down(
            &mut windows,
            WindowRegion::Content,
            GesturePoint::mouse(90.0, 100.0),
            &mut crate::input::NullHost,
        );
        assert_eq!(windows.focused(), Some("about"));
    }

    #[test]
    fn test_content_press_is_forwarded_in_local_space() {
        let (mut windows, mut shell) = desktop("about");
        let result = shell.pointer_down(
            &mut windows,
            WindowRegion::Content,
            GesturePoint::mouse(100.0, 100.0),
            &mut crate::input::NullHost,
        );
        assert_eq!(
            result,
            InputResult::Forward {
                window_id: "about".to_string(),
                local_x: 20.0,
                local_y: 40.0,
            }
        );
        assert!(!shell.is_dragging());
    }

    #[test]
    fn test_control_buttons() {
        let (mut windows, mut shell) = desktop("about");
        let mut host = crate::input::NullHost;
        let at = GesturePoint::mouse(0.0, 0.0);

        shell.pointer_down(&mut windows, WindowRegion::Control(ControlButton::Maximize), at, &mut host);
        assert_eq!(windows.get("about").unwrap().state, WindowState::Maximized);

        shell.pointer_down(&mut windows, WindowRegion::Control(ControlButton::Minimize), at, &mut host);
        assert_eq!(
            windows.get("about").unwrap().state,
            WindowState::Minimized { maximized: true }
        );

        windows.restore("about");
        shell.pointer_down(&mut windows, WindowRegion::Control(ControlButton::Close), at, &mut host);
        assert_eq!(windows.get("about").unwrap().state, WindowState::Closed);
    }

    #[test]
    fn test_maximize_button_absent_on_mobile() {
        let (mut windows, mut shell) = mobile("about");
        let result = shell.pointer_down(
            &mut windows,
            WindowRegion::Control(ControlButton::Maximize),
            GesturePoint::mouse(0.0, 0.0),
            &mut crate::input::NullHost,
        );
        assert_eq!(result, InputResult::Unhandled);
        assert_eq!(windows.get("about").unwrap().state, WindowState::Maximized);

        let view = shell.view(windows.get("about").unwrap(), true, true, 0.0);
        assert!(!view.show_maximize_button);
        assert!(!view.show_resize_handles);
        assert!(view.resize_handles.is_empty());
        assert_eq!(view.title_bar_cursor, "default");
    }

    #[test]
    fn test_view_cursors_follow_floating_state() {
        let (mut windows, shell) = desktop("about");

        let view = shell.view(windows.get("about").unwrap(), false, true, 0.0);
        assert_eq!(view.title_bar_cursor, "move");
        assert_eq!(view.resize_handles.len(), 8);
        let se = view.resize_handles.iter().find(|h| h.direction == "se").unwrap();
        assert_eq!(se.cursor, "nwse-resize");
        let n = view.resize_handles.iter().find(|h| h.direction == "n").unwrap();
        assert_eq!(n.cursor, "ns-resize");

        windows.maximize_toggle("about");
        let view = shell.view(windows.get("about").unwrap(), false, true, 0.0);
        assert_eq!(view.title_bar_cursor, "default");
        assert!(view.resize_handles.is_empty());
    }

    #[test]
    fn test_swipe_commit_minimizes_after_exit_delay() {
        let (mut windows, mut shell) = mobile("about");
        let mut host = RecordingHost::default();
        let touch = |y: f32| GesturePoint::touch(&[Vec2::new(100.0, y)]).unwrap();

        shell.pointer_down(&mut windows, WindowRegion::TitleBar, touch(20.0), &mut host);
        assert!(shell.is_swiping());
        shell.pointer_move(touch(120.0));
        assert!((shell.swipe().offset() - 100.0).abs() < 0.001);

        let layout = shell.layout(windows.get("about").unwrap(), true);
        assert_eq!(
            layout,
            FrameLayout::Fullscreen {
                z_index: windows.get("about").unwrap().z_index,
                translate_y: 100.0,
                animate: false,
            }
        );

        shell.pointer_up(&mut windows, &mut host, 1000.0);
        assert_eq!(shell.phase(), AnimationPhase::Exiting);
        assert!(!shell.tick(&mut windows, 1199.0));
        assert!(windows.get("about").unwrap().state.is_visible());

        assert!(shell.tick(&mut windows, 1200.0));
        assert!(windows.get("about").unwrap().state.is_minimized());
        assert!((shell.swipe().offset() - 0.0).abs() < 0.001);
        // Swipes never capture the document
        assert!(host.events.is_empty());
    }

    #[test]
    fn test_swipe_released_after_leaving_mobile_does_not_minimize() {
        let (mut windows, mut shell) = mobile("about");
        let touch = |y: f32| GesturePoint::touch(&[Vec2::new(100.0, y)]).unwrap();

        shell.pointer_down(&mut windows, WindowRegion::TitleBar, touch(20.0), &mut crate::input::NullHost);
        shell.pointer_move(touch(140.0));
        assert!((shell.swipe().offset() - 120.0).abs() < 0.001);

        assert!(windows.set_viewport(Viewport::new(1920.0, 1080.0)));
        assert_eq!(
            shell.pointer_up(&mut windows, &mut crate::input::NullHost, 1000.0),
            InputResult::Handled
        );

        assert!(!shell.is_swiping());
        assert!((shell.swipe().offset() - 0.0).abs() < 0.001);
        assert_ne!(shell.phase(), AnimationPhase::Exiting);
        shell.tick(&mut windows, 1500.0);
        assert!(windows.get("about").unwrap().state.is_visible());
    }

    #[test]
    fn test_short_swipe_snaps_back() {
        let (mut windows, mut shell) = mobile("about");
        let touch = |y: f32| GesturePoint::touch(&[Vec2::new(100.0, y)]).unwrap();

        shell.pointer_down(&mut windows, WindowRegion::TitleBar, touch(20.0), &mut crate::input::NullHost);
        shell.pointer_move(touch(90.0));
        shell.pointer_up(&mut windows, &mut crate::input::NullHost, 0.0);

        assert!((shell.swipe().offset() - 0.0).abs() < 0.001);
        shell.tick(&mut windows, 10_000.0);
        assert!(windows.get("about").unwrap().state.is_visible());
        assert_eq!(shell.phase(), AnimationPhase::Visible);
    }

    #[test]
    fn test_enter_animation_on_open_and_restore() {
        let (mut windows, mut shell) = desktop("about");
        assert_eq!(shell.phase(), AnimationPhase::Entering);
        assert!(shell.tick(&mut windows, 250.0));
        assert_eq!(shell.phase(), AnimationPhase::Visible);

        windows.minimize("about");
        shell.sync(windows.get("about").unwrap(), 300.0);
        windows.restore("about");
        shell.sync(windows.get("about").unwrap(), 400.0);
        assert_eq!(shell.phase(), AnimationPhase::Entering);

        // Focus alone does not replay it
        shell.tick(&mut windows, 650.0);
        windows.focus("about");
        shell.sync(windows.get("about").unwrap(), 700.0);
        assert_eq!(shell.phase(), AnimationPhase::Visible);
    }

    #[test]
    fn test_close_cancels_pending_exit() {
        let (mut windows, mut shell) = mobile("about");
        let touch = |y: f32| GesturePoint::touch(&[Vec2::new(100.0, y)]).unwrap();
        shell.pointer_down(&mut windows, WindowRegion::TitleBar, touch(0.0), &mut crate::input::NullHost);
        shell.pointer_move(touch(120.0));
        shell.pointer_up(&mut windows, &mut crate::input::NullHost, 0.0);

        windows.close("about");
        shell.sync(windows.get("about").unwrap(), 50.0);
        windows.open("about");
        shell.sync(windows.get("about").unwrap(), 60.0);

        // The stale exit timer must not minimize the reopened window
        shell.tick(&mut windows, 1000.0);
        assert!(windows.get("about").unwrap().state.is_visible());
    }
}
