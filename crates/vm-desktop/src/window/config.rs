//! Static window catalog

use serde::{Deserialize, Serialize};
use crate::error::{DesktopError, DesktopResult};
use crate::math::Size;
use super::WindowId;

/// Startup configuration for one window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowConfig {
    /// Stable key
    pub id: WindowId,
    /// Title bar text
    pub title: String,
    /// Display glyph
    pub icon: String,
    /// Preferred size on desktop-class screens
    pub default_size: Size,
}

impl WindowConfig {
    /// Create a window configuration
    pub fn new(id: &str, title: &str, icon: &str, width: f32, height: f32) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            icon: icon.to_string(),
            default_size: Size::new(width, height),
        }
    }
}

/// The windows of the shipped desktop, in cascade order
pub fn default_catalog() -> Vec<WindowConfig> {
    vec![
        WindowConfig::new("about", "VM.exe", "💿", 500.0, 400.0),
        WindowConfig::new("members", "MEMBERS.exe", "👥", 600.0, 500.0),
        WindowConfig::new("shows", "SHOWS.exe", "🎤", 550.0, 450.0),
        WindowConfig::new("archive", "ARCHIVE.exe", "📁", 650.0, 500.0),
        WindowConfig::new("music", "MUSIC.exe", "🎵", 450.0, 400.0),
        WindowConfig::new("game", "VINYL SNAKE.exe", "🐍", 500.0, 600.0),
        WindowConfig::new("gamble", "SLOTS.exe", "🎰", 450.0, 600.0),
        WindowConfig::new("player", "PLAYER.exe", "🎧", 550.0, 400.0),
        WindowConfig::new("connect", "CONNECT.exe", "📡", 400.0, 450.0),
        WindowConfig::new("news", "NEWS.exe", "📰", 550.0, 650.0),
        WindowConfig::new("admin", "ADMIN.exe", "⚙️", 700.0, 550.0),
    ]
}

/// Parse a window catalog from a JSON array
///
/// Ids must be unique and default sizes non-empty.
pub fn catalog_from_json(json: &str) -> DesktopResult<Vec<WindowConfig>> {
    let catalog: Vec<WindowConfig> = serde_json::from_str(json)?;

    for (i, config) in catalog.iter().enumerate() {
        if config.default_size.is_empty() {
            return Err(DesktopError::InvalidConfig {
                field: "defaultSize",
                reason: "must be larger than zero",
            });
        }
        if catalog[..i].iter().any(|other| other.id == config.id) {
            return Err(DesktopError::InvalidConfig {
                field: "id",
                reason: "duplicate window id",
            });
        }
    }

    Ok(catalog)
}
