//! Config file schema. Missing fields fall back to serde defaults.

use std::path::PathBuf;

use glance_common::Position;
use serde::{Deserialize, Serialize};

/// Top-level dashboard configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub modules: Vec<ModuleConfig>,
}

/// Window and global styling settings consumed by `Ui::new`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Window width in pixels.
    pub width: u32,
    /// Window height in pixels.
    pub height: u32,
    /// Ask the browser process to start fullscreen.
    pub fullscreen: bool,
    /// Extra stylesheets injected at startup, in order.
    pub custom_css: Vec<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            fullscreen: false,
            custom_css: Vec::new(),
        }
    }
}

/// One dashboard module declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleConfig {
    /// Region name, used verbatim in every script call scoped to the module.
    pub name: String,
    /// Grid anchor, written as `vertical:horizontal` (e.g. `top:left`).
    pub position: Position,
    /// Optional module asset directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}
