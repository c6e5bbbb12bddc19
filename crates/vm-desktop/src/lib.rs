//! Window manager for the Vranov Music desktop
//!
//! This crate provides the core of the retro desktop shell:
//! - Window lifecycle (open, close, minimize, restore, maximize)
//! - Focus and z-order
//! - Responsive default geometry for desktop and mobile viewports
//! - Title bar drag, edge/corner resize and mobile swipe-to-minimize
//! - Enter/exit animation state
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`, `Bounds`)
//! - [`window`]: Window records, catalog and the [`WindowManager`]
//! - [`input`]: Gesture controllers and the [`GestureHost`] seam
//! - [`transition`]: Animation phases and easing
//! - [`shell`]: Per-window presentation state
//! - [`config`]: Tunables with JSON overrides
//!
//! ## Example
//!
//! ```rust
//! use vm_desktop::{DesktopEngine, GesturePoint, NullHost, Vec2, WindowRegion};
//!
//! let mut engine = DesktopEngine::new(1920.0, 1080.0);
//! engine.open("about", 0.0);
//!
//! let mut host = NullHost;
//! engine.pointer_down("about", WindowRegion::TitleBar, GesturePoint::mouse(100.0, 80.0), &mut host, 0.0);
//! engine.pointer_move(GesturePoint::mouse(300.0, 80.0));
//! engine.pointer_up(&mut host, 16.0);
//!
//! assert_eq!(engine.windows().get("about").unwrap().position, Vec2::new(280.0, 60.0));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state is plain Rust, testable without a browser
//! 2. **Time Abstraction**: Callers pass `now_ms`; nothing reads a clock
//! 3. **Total Operations**: Unknown ids and stray gesture events are no-ops

pub mod config;
pub mod error;
pub mod input;
pub mod math;
pub mod shell;
pub mod transition;
pub mod window;

mod engine;
mod viewport;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use config::{CascadeConfig, DesktopConfig, SwipeConfig};
pub use error::{DesktopError, DesktopResult};
pub use input::{
    calculate_resize, DragController, GestureHost, GestureKind, GesturePoint, InputResult,
    NullHost, PointerSource, ResizeController, ResizeDirection, ResizeLimits, SwipeGesture,
};
pub use math::{clamp, clamp_position, Bounds, Rect, Size, Vec2};
pub use shell::{FrameLayout, ResizeHandle, WindowShell, WindowView};
pub use transition::{AnimationPhase, WindowAnimation};
pub use window::{
    default_catalog, ControlButton, WindowConfig, WindowId, WindowManager, WindowRecord,
    WindowRegion, WindowSnapshot, WindowState,
};

pub use engine::{DesktopEngine, TaskbarEntry};
pub use viewport::{Viewport, ViewportClass};
