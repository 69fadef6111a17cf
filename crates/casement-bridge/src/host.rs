//! The Host Surface: window and page operations the builtin registry
//! delegates to.
//!
//! Each method is a thin delegation to the platform (winit, wry, arboard in
//! the shipped shell); the trait exists so the dispatcher and its tests
//! never touch a real window. Argument validation happens before these are
//! called, so implementations may assume well-formed inputs.

use casement_common::PlatformError;
use serde_json::Value;

use crate::capture::Raster;

/// What a capture builtin should grab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureSource {
    /// The whole primary screen.
    Screen,
    /// The window's client area.
    Window,
}

impl CaptureSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Screen => "screen",
            Self::Window => "window",
        }
    }
}

/// Modal dialog flavors, matching the `show_dialog` builtin's type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Warning,
    Critical,
    Question,
}

impl DialogKind {
    /// Case-insensitive lookup. Unknown names are a domain-level error,
    /// reported by the builtin as `{status:"error", ...}`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "info" => Some(Self::Info),
            "warning" => Some(Self::Warning),
            "critical" => Some(Self::Critical),
            "question" => Some(Self::Question),
            _ => None,
        }
    }
}

/// Platform operations behind the builtin registry.
pub trait WindowHost {
    // -- Window geometry --
    fn set_title(&mut self, title: &str);
    fn request_size(&mut self, width: u32, height: u32);
    fn set_min_size(&mut self, width: u32, height: u32);
    fn set_max_size(&mut self, width: u32, height: u32);
    fn set_position(&mut self, x: i32, y: i32);
    fn size(&self) -> (u32, u32);
    fn position(&self) -> (i32, i32);
    fn center(&mut self);

    // -- Window state --
    fn set_visible(&mut self, visible: bool);
    fn minimize(&mut self);
    fn maximize(&mut self);
    fn restore(&mut self);
    fn fullscreen(&mut self);
    fn close(&mut self);
    /// One of "minimized", "maximized", "fullscreen", "normal".
    fn window_state(&self) -> &'static str;
    fn is_visible(&self) -> bool;
    fn is_active(&self) -> bool;
    fn is_topmost(&self) -> bool;
    /// Called only with values already validated into [0.0, 1.0].
    fn set_opacity(&mut self, opacity: f64);
    fn set_topmost(&mut self, topmost: bool);
    fn set_cursor(&mut self, name: &str);
    fn set_mouse_tracking(&mut self, enabled: bool);

    // -- Platform queries --
    fn screen_info(&self) -> Value;
    fn clipboard_text(&mut self) -> Result<String, PlatformError>;
    fn set_clipboard_text(&mut self, text: &str) -> Result<(), PlatformError>;

    // -- Page control --
    fn evaluate_script(&mut self, js: &str) -> Result<(), PlatformError>;
    fn load_url(&mut self, url: &str) -> Result<(), PlatformError>;
    fn reload(&mut self);
    fn go_back(&mut self);
    fn go_forward(&mut self);
    fn set_zoom(&mut self, factor: f64) -> Result<(), PlatformError>;
    fn zoom(&self) -> f64;
    fn set_background_color(&mut self, color: &str);

    // -- Chrome --
    fn add_menu(&mut self, title: &str);
    fn add_toolbar(&mut self, title: &str);
    fn add_statusbar(&mut self);
    fn set_statusbar_text(&mut self, text: &str);

    // -- Dialogs --
    fn show_dialog(&mut self, kind: DialogKind, title: &str, message: &str);

    // -- Capture --
    fn grab_raster(&mut self, source: CaptureSource) -> Result<Raster, PlatformError>;
}
