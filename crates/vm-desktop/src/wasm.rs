//! WASM exports for the window manager
//!
//! This module provides wasm-bindgen exports for the DesktopEngine,
//! allowing the React desktop to drive windows directly.

use wasm_bindgen::prelude::*;

use crate::engine::DesktopEngine;
use crate::input::{GestureHost, GestureKind, GesturePoint, InputResult, PointerSource};
use crate::math::Vec2;
use crate::window::WindowRegion;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;

    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Gesture host that styles `document.body` while a gesture runs
///
/// JS keeps its document-level move/up/cancel listeners attached while
/// [`DesktopController::has_active_gesture`] is true.
struct BodyStyleHost;

impl BodyStyleHost {
    fn body_style() -> Option<web_sys::CssStyleDeclaration> {
        Some(web_sys::window()?.document()?.body()?.style())
    }
}

impl GestureHost for BodyStyleHost {
    fn capture(&mut self, kind: GestureKind) {
        let (Some(style), Some(cursor)) = (Self::body_style(), kind.document_cursor()) else {
            return;
        };
        for (property, value) in [("cursor", cursor), ("user-select", "none")] {
            if let Err(e) = style.set_property(property, value) {
                log(&format!("[vm-desktop] failed to set body {}: {:?}", property, e));
            }
        }
    }

    fn release(&mut self, kind: GestureKind) {
        let (Some(style), Some(_)) = (Self::body_style(), kind.document_cursor()) else {
            return;
        };
        for property in ["cursor", "user-select"] {
            if let Err(e) = style.remove_property(property) {
                log(&format!("[vm-desktop] failed to clear body {}: {:?}", property, e));
            }
        }
    }
}

fn point(x: f32, y: f32, touch: bool) -> GesturePoint {
    if touch {
        GesturePoint {
            position: Vec2::new(x, y),
            source: PointerSource::Touch,
        }
    } else {
        GesturePoint::mouse(x, y)
    }
}

fn result_json(result: &InputResult) -> String {
    serde_json::to_string(result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
}

/// Desktop controller for WASM - wraps DesktopEngine with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    engine: DesktopEngine,
    host: BodyStyleHost,
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a controller for the default window catalog
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            engine: DesktopEngine::new(width, height),
            host: BodyStyleHost,
        }
    }

    /// Create a controller with a JSON configuration override and,
    /// optionally, a JSON window catalog
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(
        width: f32,
        height: f32,
        config_json: &str,
        catalog_json: Option<String>,
    ) -> Result<DesktopController, JsValue> {
        let engine = DesktopEngine::from_json(width, height, config_json, catalog_json.as_deref())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            engine,
            host: BodyStyleHost,
        })
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    #[wasm_bindgen]
    pub fn open(&mut self, id: &str) {
        self.engine.open(id, date_now());
    }

    #[wasm_bindgen]
    pub fn close(&mut self, id: &str) {
        self.engine.close(id, date_now());
    }

    #[wasm_bindgen]
    pub fn minimize(&mut self, id: &str) {
        self.engine.minimize(id, date_now());
    }

    #[wasm_bindgen]
    pub fn restore(&mut self, id: &str) {
        self.engine.restore(id, date_now());
    }

    #[wasm_bindgen]
    pub fn maximize_toggle(&mut self, id: &str) {
        self.engine.maximize_toggle(id, date_now());
    }

    #[wasm_bindgen]
    pub fn focus(&mut self, id: &str) {
        self.engine.focus(id, date_now());
    }

    /// Taskbar button or start menu entry clicked
    #[wasm_bindgen]
    pub fn taskbar_click(&mut self, id: &str) {
        self.engine.taskbar_click(id, date_now());
    }

    /// Report a browser resize; returns true if the layout class changed
    #[wasm_bindgen]
    pub fn set_viewport(&mut self, width: f32, height: f32) -> bool {
        self.engine.set_viewport(width, height, date_now())
    }

    /// Advance animation timers; call from requestAnimationFrame while
    /// `is_animating()` is true
    #[wasm_bindgen]
    pub fn tick(&mut self) -> bool {
        self.engine.tick(date_now())
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Pointer or touch pressed on a window region; returns an InputResult as JSON
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, id: &str, region: &str, x: f32, y: f32, touch: bool) -> String {
        let region: WindowRegion = match region.parse() {
            Ok(region) => region,
            Err(e) => {
                log(&format!("[vm-desktop] {}", e));
                return result_json(&InputResult::Unhandled);
            }
        };
        let result = self
            .engine
            .pointer_down(id, region, point(x, y, touch), &mut self.host, date_now());
        result_json(&result)
    }

    /// Document-level pointer or touch move
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32, touch: bool) -> String {
        result_json(&self.engine.pointer_move(point(x, y, touch)))
    }

    /// Document-level mouseup / touchend
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> String {
        result_json(&self.engine.pointer_up(&mut self.host, date_now()))
    }

    /// Document-level touchcancel
    #[wasm_bindgen]
    pub fn pointer_cancel(&mut self) -> String {
        result_json(&self.engine.pointer_cancel(&mut self.host, date_now()))
    }

    /// Global keydown; returns true if the default should be prevented
    #[wasm_bindgen]
    pub fn key_down(&mut self, key: &str, ctrl: bool, shift: bool) -> bool {
        self.engine
            .handle_key(key, ctrl, shift, date_now())
            .prevents_default()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[wasm_bindgen]
    pub fn is_mobile(&self) -> bool {
        self.engine.is_mobile()
    }

    #[wasm_bindgen]
    pub fn is_animating(&self) -> bool {
        self.engine.is_animating()
    }

    #[wasm_bindgen]
    pub fn has_active_gesture(&self) -> bool {
        self.engine.has_active_gesture()
    }

    /// Focused window id, if any
    #[wasm_bindgen]
    pub fn focused(&self) -> Option<String> {
        self.engine.windows().focused().map(str::to_string)
    }

    /// Every window record as a JSON array
    #[wasm_bindgen]
    pub fn windows_json(&self) -> String {
        self.engine
            .windows()
            .snapshot_json()
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// Render description of one window as JSON (`null` if unknown)
    #[wasm_bindgen]
    pub fn layout_json(&self, id: &str) -> String {
        self.engine
            .view_json(id, date_now())
            .unwrap_or_else(|_| "null".to_string())
    }

    /// Render descriptions of every visible window, back to front
    #[wasm_bindgen]
    pub fn views_json(&self) -> String {
        self.engine
            .views_json(date_now())
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// Taskbar buttons as JSON
    #[wasm_bindgen]
    pub fn taskbar_json(&self) -> String {
        serde_json::to_string(&self.engine.taskbar_entries()).unwrap_or_else(|_| "[]".to_string())
    }
}
