//! Window management module
//!
//! Provides the window records, the static window catalog, hit regions and
//! the manager that owns lifecycle, z-order and responsive geometry.

#[allow(clippy::module_inception)]
mod window;
mod config;
mod layout;
mod region;
mod manager;

pub use window::{WindowRecord, WindowSnapshot, WindowState};
pub use config::{catalog_from_json, default_catalog, WindowConfig};
pub use layout::{cascade_position, responsive_size};
pub use region::{ControlButton, WindowRegion};
pub use manager::WindowManager;

/// Stable window key, e.g. `"about"` or `"shows"`
pub type WindowId = String;
