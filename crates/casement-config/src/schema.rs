//! Configuration schema types for Casement.
//!
//! All structs use `serde(default)` so partial configs work correctly.

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

// =============================================================================
// Window Config
// =============================================================================

/// Native window defaults applied at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 1-16384).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 1-16384).
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Casement".into(),
            width: 800,
            height: 600,
            min_width: 400,
            min_height: 300,
            resizable: true,
        }
    }
}

// =============================================================================
// Page Config
// =============================================================================

/// Embedded page configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// URL to load instead of the bundled demo page.
    pub url: Option<String>,
    /// Initial zoom factor (valid range: 0.25-5.0).
    pub zoom: f64,
    /// Whether to enable webview dev tools.
    pub devtools: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            url: None,
            zoom: 1.0,
            devtools: cfg!(debug_assertions),
        }
    }
}

// =============================================================================
// Top-level Config
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CasementConfig {
    pub window: WindowConfig,
    pub page: PageConfig,
}
