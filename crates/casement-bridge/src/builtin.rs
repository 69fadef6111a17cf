//! Builtin window operations.
//!
//! A fixed name -> op table, populated once and immutable afterward. Wrong
//! arity or non-coercible arguments are invocation errors (the dispatcher
//! answers `success=false`); documented argument validation (opacity range,
//! cursor and dialog names) is a domain-level error carried inside a
//! successful payload as `{status:"error", message}`. The two tiers must
//! not be conflated.

use casement_common::BridgeError;
use serde_json::{json, Value};

use crate::capture;
use crate::host::{CaptureSource, DialogKind, WindowHost};

/// Cursor shapes `set_cursor` accepts.
pub const CURSOR_NAMES: &[&str] = &["arrow", "wait", "cross", "hand", "ibeam", "sizev", "sizeh"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinOp {
    SetTitle,
    SetSize,
    SetMinSize,
    SetMaxSize,
    SetPosition,
    GetSize,
    GetPosition,
    Center,
    Show,
    Hide,
    Minimize,
    Maximize,
    Restore,
    Fullscreen,
    Close,
    GetWindowState,
    SetOpacity,
    SetTopmost,
    GetScreenInfo,
    SetBackgroundColor,
    ShowMessage,
    ShowDialog,
    GetClipboardText,
    SetClipboardText,
    ExecuteJs,
    LoadUrl,
    Reload,
    GoBack,
    GoForward,
    SetZoom,
    GetZoom,
    AddMenu,
    AddToolbar,
    AddStatusbar,
    SetStatusbarText,
    SetCursor,
    SetMouseTracking,
    After,
    CaptureScreen,
    CaptureWindow,
}

/// The builtin registry. Checked before the user registry on dispatch, so
/// a user registration can never shadow one of these names.
pub const BUILTIN_OPS: &[(&str, BuiltinOp)] = &[
    ("set_title", BuiltinOp::SetTitle),
    ("set_size", BuiltinOp::SetSize),
    ("set_min_size", BuiltinOp::SetMinSize),
    ("set_max_size", BuiltinOp::SetMaxSize),
    ("set_position", BuiltinOp::SetPosition),
    ("get_size", BuiltinOp::GetSize),
    ("get_position", BuiltinOp::GetPosition),
    ("center", BuiltinOp::Center),
    ("show", BuiltinOp::Show),
    ("hide", BuiltinOp::Hide),
    ("minimize", BuiltinOp::Minimize),
    ("maximize", BuiltinOp::Maximize),
    ("restore", BuiltinOp::Restore),
    ("fullscreen", BuiltinOp::Fullscreen),
    ("close", BuiltinOp::Close),
    ("get_window_state", BuiltinOp::GetWindowState),
    ("set_opacity", BuiltinOp::SetOpacity),
    ("set_topmost", BuiltinOp::SetTopmost),
    ("get_screen_info", BuiltinOp::GetScreenInfo),
    ("set_background_color", BuiltinOp::SetBackgroundColor),
    ("show_message", BuiltinOp::ShowMessage),
    ("show_dialog", BuiltinOp::ShowDialog),
    ("get_clipboard_text", BuiltinOp::GetClipboardText),
    ("set_clipboard_text", BuiltinOp::SetClipboardText),
    ("execute_js", BuiltinOp::ExecuteJs),
    ("load_url", BuiltinOp::LoadUrl),
    ("reload", BuiltinOp::Reload),
    ("go_back", BuiltinOp::GoBack),
    ("go_forward", BuiltinOp::GoForward),
    ("set_zoom", BuiltinOp::SetZoom),
    ("get_zoom", BuiltinOp::GetZoom),
    ("add_menu", BuiltinOp::AddMenu),
    ("add_toolbar", BuiltinOp::AddToolbar),
    ("add_statusbar", BuiltinOp::AddStatusbar),
    ("set_statusbar_text", BuiltinOp::SetStatusbarText),
    ("set_cursor", BuiltinOp::SetCursor),
    ("set_mouse_tracking", BuiltinOp::SetMouseTracking),
    ("after", BuiltinOp::After),
    ("capture_screen", BuiltinOp::CaptureScreen),
    ("capture_window", BuiltinOp::CaptureWindow),
];

/// Resolve a name against the builtin registry.
pub fn lookup(name: &str) -> Option<BuiltinOp> {
    BUILTIN_OPS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, op)| *op)
}

impl BuiltinOp {
    /// Invoke this operation against the host.
    ///
    /// `After` is not handled here; it needs the dispatcher's deferred
    /// queue and is intercepted before this point.
    pub fn invoke(
        self,
        host: &mut dyn WindowHost,
        func: &str,
        args: &[Value],
    ) -> Result<Value, BridgeError> {
        match self {
            Self::SetTitle => {
                let title = str_arg(func, args, 0)?;
                host.set_title(title);
                Ok(json!({"status": "success", "title": title}))
            }
            Self::SetSize => {
                let (w, h) = (u32_arg(func, args, 0)?, u32_arg(func, args, 1)?);
                host.request_size(w, h);
                Ok(json!({"status": "success", "width": w, "height": h}))
            }
            Self::SetMinSize => {
                let (w, h) = (u32_arg(func, args, 0)?, u32_arg(func, args, 1)?);
                host.set_min_size(w, h);
                Ok(json!({"status": "success", "min_width": w, "min_height": h}))
            }
            Self::SetMaxSize => {
                let (w, h) = (u32_arg(func, args, 0)?, u32_arg(func, args, 1)?);
                host.set_max_size(w, h);
                Ok(json!({"status": "success", "max_width": w, "max_height": h}))
            }
            Self::SetPosition => {
                let (x, y) = (i32_arg(func, args, 0)?, i32_arg(func, args, 1)?);
                host.set_position(x, y);
                Ok(json!({"status": "success", "x": x, "y": y}))
            }
            Self::GetSize => {
                let (w, h) = host.size();
                Ok(json!({"width": w, "height": h}))
            }
            Self::GetPosition => {
                let (x, y) = host.position();
                Ok(json!({"x": x, "y": y}))
            }
            Self::Center => {
                host.center();
                Ok(json!({"status": "success", "position": "centered"}))
            }
            Self::Show => {
                host.set_visible(true);
                Ok(json!({"status": "success", "visible": true}))
            }
            Self::Hide => {
                host.set_visible(false);
                Ok(json!({"status": "success", "visible": false}))
            }
            Self::Minimize => {
                host.minimize();
                Ok(json!({"status": "success", "state": "minimized"}))
            }
            Self::Maximize => {
                host.maximize();
                Ok(json!({"status": "success", "state": "maximized"}))
            }
            Self::Restore => {
                host.restore();
                Ok(json!({"status": "success", "state": "normal"}))
            }
            Self::Fullscreen => {
                host.fullscreen();
                Ok(json!({"status": "success", "state": "fullscreen"}))
            }
            Self::Close => {
                host.close();
                Ok(json!({"status": "success", "closed": true}))
            }
            Self::GetWindowState => Ok(json!({
                "state": host.window_state(),
                "visible": host.is_visible(),
                "active": host.is_active(),
                "topmost": host.is_topmost(),
            })),
            Self::SetOpacity => {
                let opacity = f64_arg(func, args, 0)?;
                if !(0.0..=1.0).contains(&opacity) {
                    return Ok(json!({"status": "error", "message": "Invalid opacity value"}));
                }
                host.set_opacity(opacity);
                Ok(json!({"status": "success", "opacity": opacity}))
            }
            Self::SetTopmost => {
                let topmost = bool_arg(func, args, 0)?;
                host.set_topmost(topmost);
                Ok(json!({"status": "success", "topmost": topmost}))
            }
            Self::GetScreenInfo => Ok(host.screen_info()),
            Self::SetBackgroundColor => {
                let color = str_arg(func, args, 0)?;
                host.set_background_color(color);
                Ok(json!({"status": "success", "color": color}))
            }
            Self::ShowMessage => {
                let (title, message) = (str_arg(func, args, 0)?, str_arg(func, args, 1)?);
                host.show_dialog(DialogKind::Info, title, message);
                Ok(json!({"status": "success", "title": title, "message": message}))
            }
            Self::ShowDialog => {
                let kind_name = str_arg(func, args, 0)?;
                let (title, message) = (str_arg(func, args, 1)?, str_arg(func, args, 2)?);
                let Some(kind) = DialogKind::from_name(kind_name) else {
                    return Ok(json!({"status": "error", "message": "Unknown dialog type"}));
                };
                host.show_dialog(kind, title, message);
                Ok(json!({
                    "status": "success",
                    "type": kind_name.to_ascii_lowercase(),
                    "title": title,
                }))
            }
            Self::GetClipboardText => {
                let text = host.clipboard_text()?;
                Ok(json!({"status": "success", "text": text}))
            }
            Self::SetClipboardText => {
                let text = str_arg(func, args, 0)?;
                host.set_clipboard_text(text)?;
                Ok(json!({"status": "success", "text": text}))
            }
            Self::ExecuteJs => {
                let code = str_arg(func, args, 0)?;
                host.evaluate_script(code)?;
                Ok(json!({"status": "success", "code": code}))
            }
            Self::LoadUrl => {
                let url = str_arg(func, args, 0)?;
                host.load_url(url)?;
                Ok(json!({"status": "success", "url": url}))
            }
            Self::Reload => {
                host.reload();
                Ok(json!({"status": "success"}))
            }
            Self::GoBack => {
                host.go_back();
                Ok(json!({"status": "success"}))
            }
            Self::GoForward => {
                host.go_forward();
                Ok(json!({"status": "success"}))
            }
            Self::SetZoom => {
                let factor = f64_arg(func, args, 0)?;
                host.set_zoom(factor)?;
                Ok(json!({"status": "success", "zoom": factor}))
            }
            Self::GetZoom => Ok(json!({"status": "success", "zoom": host.zoom()})),
            Self::AddMenu => {
                let title = str_arg(func, args, 0)?;
                host.add_menu(title);
                Ok(json!({"status": "success", "title": title}))
            }
            Self::AddToolbar => {
                let title = str_arg(func, args, 0)?;
                host.add_toolbar(title);
                Ok(json!({"status": "success", "title": title}))
            }
            Self::AddStatusbar => {
                host.add_statusbar();
                Ok(json!({"status": "success"}))
            }
            Self::SetStatusbarText => {
                let text = str_arg(func, args, 0)?;
                host.set_statusbar_text(text);
                Ok(json!({"status": "success", "text": text}))
            }
            Self::SetCursor => {
                let name = str_arg(func, args, 0)?;
                if !CURSOR_NAMES.contains(&name) {
                    return Ok(json!({"status": "error", "message": "Unknown cursor type"}));
                }
                host.set_cursor(name);
                Ok(json!({"status": "success", "cursor": name}))
            }
            Self::SetMouseTracking => {
                let enabled = bool_arg(func, args, 0)?;
                host.set_mouse_tracking(enabled);
                Ok(json!({"status": "success", "enabled": enabled}))
            }
            Self::CaptureScreen => capture::capture(host, CaptureSource::Screen),
            Self::CaptureWindow => capture::capture(host, CaptureSource::Window),
            Self::After => Err(BridgeError::Handler(
                "'after' must be scheduled by the dispatcher".into(),
            )),
        }
    }
}

/// Page-console line describing a completed builtin call. Every window
/// operation pushes one of these through the host's one-way log channel;
/// query operations produce no line, and neither do non-builtin names.
pub fn console_line(func: &str, args: &[Value], result: &Value) -> Option<String> {
    let op = lookup(func)?;

    if result.get("status").and_then(Value::as_str) == Some("error") {
        return match op {
            BuiltinOp::SetOpacity => {
                Some("Invalid opacity value. Must be between 0.0 and 1.0".to_string())
            }
            BuiltinOp::SetCursor => Some(format!(
                "Unknown cursor type: {}",
                args.first().and_then(Value::as_str).unwrap_or_default()
            )),
            BuiltinOp::ShowDialog => Some(format!(
                "Unknown dialog type: {}",
                args.first().and_then(Value::as_str).unwrap_or_default()
            )),
            _ => None,
        };
    }

    let text = |key: &str| result.get(key).and_then(Value::as_str).unwrap_or_default();
    let num = |key: &str| result.get(key).cloned().unwrap_or(Value::Null);

    let line = match op {
        BuiltinOp::GetSize
        | BuiltinOp::GetPosition
        | BuiltinOp::GetWindowState
        | BuiltinOp::GetScreenInfo
        | BuiltinOp::GetZoom => return None,
        BuiltinOp::SetTitle => format!("Window title set to: {}", text("title")),
        BuiltinOp::SetSize => format!("Window size set to: {}x{}", num("width"), num("height")),
        BuiltinOp::SetMinSize => format!(
            "Minimum size set to: {}x{}",
            num("min_width"),
            num("min_height")
        ),
        BuiltinOp::SetMaxSize => format!(
            "Maximum size set to: {}x{}",
            num("max_width"),
            num("max_height")
        ),
        BuiltinOp::SetPosition => format!("Window moved to: ({}, {})", num("x"), num("y")),
        BuiltinOp::Center => "Window centered".to_string(),
        BuiltinOp::Show => "Window shown".to_string(),
        BuiltinOp::Hide => "Window hidden".to_string(),
        BuiltinOp::Minimize => "Window minimized".to_string(),
        BuiltinOp::Maximize => "Window maximized".to_string(),
        BuiltinOp::Restore => "Window restored".to_string(),
        BuiltinOp::Fullscreen => "Window set to fullscreen".to_string(),
        BuiltinOp::Close => "Window closed".to_string(),
        BuiltinOp::SetOpacity => format!("Window opacity set to: {}", num("opacity")),
        BuiltinOp::SetTopmost => {
            let status = if result.get("topmost").and_then(Value::as_bool).unwrap_or(false) {
                "topmost"
            } else {
                "normal"
            };
            format!("Window set to: {status}")
        }
        BuiltinOp::SetBackgroundColor => format!("Background color set to: {}", text("color")),
        BuiltinOp::ShowMessage => {
            format!("Showed message: {} - {}", text("title"), text("message"))
        }
        BuiltinOp::ShowDialog => format!("Showed {} dialog: {}", text("type"), text("title")),
        BuiltinOp::GetClipboardText => "Retrieved text from clipboard".to_string(),
        BuiltinOp::SetClipboardText => format!("Set clipboard text to: {}", text("text")),
        BuiltinOp::ExecuteJs => format!("Executed JavaScript: {}", text("code")),
        BuiltinOp::LoadUrl => format!("Loaded URL: {}", text("url")),
        BuiltinOp::Reload => "Page reloaded".to_string(),
        BuiltinOp::GoBack => "Navigated back".to_string(),
        BuiltinOp::GoForward => "Navigated forward".to_string(),
        BuiltinOp::SetZoom => format!("Zoom factor set to: {}", num("zoom")),
        BuiltinOp::AddMenu => format!("Added menu: {}", text("title")),
        BuiltinOp::AddToolbar => format!("Added toolbar: {}", text("title")),
        BuiltinOp::AddStatusbar => "Status bar added".to_string(),
        BuiltinOp::SetStatusbarText => format!("Status bar text set to: {}", text("text")),
        BuiltinOp::SetCursor => format!("Cursor set to: {}", text("cursor")),
        BuiltinOp::SetMouseTracking => {
            let word = if result.get("enabled").and_then(Value::as_bool).unwrap_or(false) {
                "enabled"
            } else {
                "disabled"
            };
            format!("Mouse tracking {word}")
        }
        BuiltinOp::After => format!(
            "Scheduled function '{}' to run after {}ms",
            text("function"),
            num("timeout")
        ),
        BuiltinOp::CaptureScreen | BuiltinOp::CaptureWindow => {
            format!("Captured {} image", text("source"))
        }
    };
    Some(line)
}

// =============================================================================
// ARGUMENT COERCION
// =============================================================================

fn arg<'a>(func: &str, args: &'a [Value], idx: usize) -> Result<&'a Value, BridgeError> {
    args.get(idx).ok_or_else(|| BridgeError::InvalidArgs {
        func: func.to_string(),
        detail: format!("missing argument {idx}"),
    })
}

fn invalid(func: &str, idx: usize, expected: &str) -> BridgeError {
    BridgeError::InvalidArgs {
        func: func.to_string(),
        detail: format!("expected {expected} at position {idx}"),
    }
}

pub(crate) fn str_arg<'a>(func: &str, args: &'a [Value], idx: usize) -> Result<&'a str, BridgeError> {
    arg(func, args, idx)?
        .as_str()
        .ok_or_else(|| invalid(func, idx, "string"))
}

fn int_arg(func: &str, args: &[Value], idx: usize) -> Result<i64, BridgeError> {
    let value = arg(func, args, idx)?;
    value
        .as_i64()
        .or_else(|| value.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
        .ok_or_else(|| invalid(func, idx, "integer"))
}

fn u32_arg(func: &str, args: &[Value], idx: usize) -> Result<u32, BridgeError> {
    u32::try_from(int_arg(func, args, idx)?).map_err(|_| invalid(func, idx, "unsigned integer"))
}

fn i32_arg(func: &str, args: &[Value], idx: usize) -> Result<i32, BridgeError> {
    i32::try_from(int_arg(func, args, idx)?).map_err(|_| invalid(func, idx, "integer"))
}

fn f64_arg(func: &str, args: &[Value], idx: usize) -> Result<f64, BridgeError> {
    arg(func, args, idx)?
        .as_f64()
        .ok_or_else(|| invalid(func, idx, "number"))
}

fn bool_arg(func: &str, args: &[Value], idx: usize) -> Result<bool, BridgeError> {
    arg(func, args, idx)?
        .as_bool()
        .ok_or_else(|| invalid(func, idx, "boolean"))
}

pub(crate) fn u64_arg(func: &str, args: &[Value], idx: usize) -> Result<u64, BridgeError> {
    u64::try_from(int_arg(func, args, idx)?).map_err(|_| invalid(func, idx, "unsigned integer"))
}

// =============================================================================
// TESTS
// =============================================================================
