//! `WindowHost` implementation over winit, wry, and arboard.
//!
//! Borrowed fresh from `ShellApp` for each dispatch turn so the dispatcher
//! and the window state never hold overlapping mutable borrows.

use serde_json::{json, Value};
use tracing::warn;
use winit::dpi::{LogicalPosition, LogicalSize, PhysicalPosition};
use winit::window::{CursorIcon, Fullscreen, Window, WindowLevel};
use wry::WebView;

use casement_bridge::{CaptureSource, DialogKind, Raster, WindowHost};
use casement_common::PlatformError;

use super::core::HostState;

pub(super) struct ShellHost<'a> {
    pub window: &'a Window,
    pub webview: &'a WebView,
    pub state: &'a mut HostState,
}

impl ShellHost<'_> {
    fn eval(&self, js: &str) {
        if let Err(e) = self.webview.evaluate_script(js) {
            warn!(error = %e, "script evaluation failed");
        }
    }
}

/// Map a bridge cursor name onto the winit cursor icon. Names are
/// validated by the `set_cursor` builtin before reaching the host.
pub(super) fn cursor_icon(name: &str) -> Option<CursorIcon> {
    match name {
        "arrow" => Some(CursorIcon::Default),
        "wait" => Some(CursorIcon::Wait),
        "cross" => Some(CursorIcon::Crosshair),
        "hand" => Some(CursorIcon::Pointer),
        "ibeam" => Some(CursorIcon::Text),
        "sizev" => Some(CursorIcon::NsResize),
        "sizeh" => Some(CursorIcon::EwResize),
        _ => None,
    }
}

fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

impl WindowHost for ShellHost<'_> {
    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn request_size(&mut self, width: u32, height: u32) {
        let _ = self
            .window
            .request_inner_size(LogicalSize::new(f64::from(width), f64::from(height)));
    }

    fn set_min_size(&mut self, width: u32, height: u32) {
        self.window
            .set_min_inner_size(Some(LogicalSize::new(f64::from(width), f64::from(height))));
    }

    fn set_max_size(&mut self, width: u32, height: u32) {
        self.window
            .set_max_inner_size(Some(LogicalSize::new(f64::from(width), f64::from(height))));
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.window
            .set_outer_position(LogicalPosition::new(f64::from(x), f64::from(y)));
    }

    fn size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    fn position(&self) -> (i32, i32) {
        match self.window.outer_position() {
            Ok(pos) => (pos.x, pos.y),
            Err(_) => (0, 0),
        }
    }

    fn center(&mut self) {
        let Some(monitor) = self.window.current_monitor() else {
            return;
        };
        let screen = monitor.size();
        let outer = self.window.outer_size();
        let base = monitor.position();
        let x = base.x + (screen.width.saturating_sub(outer.width) / 2) as i32;
        let y = base.y + (screen.height.saturating_sub(outer.height) / 2) as i32;
        self.window.set_outer_position(PhysicalPosition::new(x, y));
    }

    fn set_visible(&mut self, visible: bool) {
        self.window.set_visible(visible);
    }

    fn minimize(&mut self) {
        self.window.set_minimized(true);
    }

    fn maximize(&mut self) {
        self.window.set_maximized(true);
    }

    fn restore(&mut self) {
        self.window.set_minimized(false);
        self.window.set_maximized(false);
        self.window.set_fullscreen(None);
    }

    fn fullscreen(&mut self) {
        self.window.set_fullscreen(Some(Fullscreen::Borderless(None)));
    }

    fn close(&mut self) {
        self.state.close_requested = true;
    }

    fn window_state(&self) -> &'static str {
        if self.window.fullscreen().is_some() {
            "fullscreen"
        } else if self.window.is_minimized().unwrap_or(false) {
            "minimized"
        } else if self.window.is_maximized() {
            "maximized"
        } else {
            "normal"
        }
    }

    fn is_visible(&self) -> bool {
        self.window.is_visible().unwrap_or(true)
    }

    fn is_active(&self) -> bool {
        self.window.has_focus()
    }

    fn is_topmost(&self) -> bool {
        // winit has no window-level getter; report the last applied level.
        self.state.topmost
    }

    fn set_opacity(&mut self, opacity: f64) {
        // winit exposes no window-level opacity; the webview fills the
        // window, so fade the page instead.
        self.state.opacity = opacity;
        self.eval(&format!(
            "document.documentElement.style.opacity = {};",
            self.state.opacity
        ));
    }

    fn set_topmost(&mut self, topmost: bool) {
        self.window.set_window_level(if topmost {
            WindowLevel::AlwaysOnTop
        } else {
            WindowLevel::Normal
        });
        self.state.topmost = topmost;
    }

    fn set_cursor(&mut self, name: &str) {
        if let Some(icon) = cursor_icon(name) {
            self.window.set_cursor(icon);
        }
    }

    fn set_mouse_tracking(&mut self, enabled: bool) {
        // winit reports cursor movement unconditionally; the flag only
        // gates whether the shell reacts to it.
        self.state.mouse_tracking = enabled;
    }

    fn screen_info(&self) -> Value {
        match self.window.current_monitor() {
            Some(monitor) => json!({
                "width": monitor.size().width,
                "height": monitor.size().height,
                "scale_factor": monitor.scale_factor(),
                "name": monitor.name().unwrap_or_default(),
            }),
            None => json!({"width": 0, "height": 0, "scale_factor": 1.0, "name": ""}),
        }
    }

    fn clipboard_text(&mut self) -> Result<String, PlatformError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| PlatformError::Clipboard(e.to_string()))?;
        clipboard
            .get_text()
            .map_err(|e| PlatformError::Clipboard(e.to_string()))
    }

    fn set_clipboard_text(&mut self, text: &str) -> Result<(), PlatformError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| PlatformError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| PlatformError::Clipboard(e.to_string()))
    }

    fn evaluate_script(&mut self, js: &str) -> Result<(), PlatformError> {
        self.webview
            .evaluate_script(js)
            .map_err(|e| PlatformError::Window(e.to_string()))
    }

    fn load_url(&mut self, url: &str) -> Result<(), PlatformError> {
        self.webview
            .load_url(url)
            .map_err(|e| PlatformError::Window(e.to_string()))
    }

    fn reload(&mut self) {
        self.eval("location.reload();");
    }

    fn go_back(&mut self) {
        self.eval("history.back();");
    }

    fn go_forward(&mut self) {
        self.eval("history.forward();");
    }

    fn set_zoom(&mut self, factor: f64) -> Result<(), PlatformError> {
        self.webview
            .zoom(factor)
            .map_err(|e| PlatformError::Window(e.to_string()))?;
        self.state.zoom = factor;
        Ok(())
    }

    fn zoom(&self) -> f64 {
        // wry has no zoom getter; report the last value we applied.
        self.state.zoom
    }

    fn set_background_color(&mut self, color: &str) {
        self.eval(&format!(
            "document.body.style.backgroundColor = {};",
            js_string(color)
        ));
    }

    fn add_menu(&mut self, title: &str) {
        self.eval(&format!(
            r#"(function() {{
    var bar = document.getElementById('casement-menubar');
    if (!bar) {{
        bar = document.createElement('div');
        bar.id = 'casement-menubar';
        bar.style.cssText = 'position:fixed;top:0;left:0;right:0;height:26px;line-height:26px;font:13px sans-serif;background:#2b2b2b;color:#ddd;z-index:2147483646;';
        document.body.appendChild(bar);
    }}
    var item = document.createElement('span');
    item.style.cssText = 'padding:0 12px;cursor:default;';
    item.textContent = {title};
    bar.appendChild(item);
}})();"#,
            title = js_string(title)
        ));
    }

    fn add_toolbar(&mut self, title: &str) {
        self.eval(&format!(
            r#"(function() {{
    var bar = document.createElement('div');
    bar.className = 'casement-toolbar';
    bar.style.cssText = 'position:sticky;top:0;height:30px;line-height:30px;font:12px sans-serif;padding:0 8px;background:#333;color:#ccc;';
    bar.textContent = {title};
    document.body.insertBefore(bar, document.body.firstChild);
}})();"#,
            title = js_string(title)
        ));
    }

    fn add_statusbar(&mut self) {
        self.eval(
            r#"(function() {
    if (document.getElementById('casement-statusbar')) { return; }
    var bar = document.createElement('div');
    bar.id = 'casement-statusbar';
    bar.style.cssText = 'position:fixed;left:0;right:0;bottom:0;height:22px;line-height:22px;font:12px sans-serif;padding:0 8px;background:#222;color:#ddd;z-index:2147483647;';
    bar.textContent = 'Ready';
    document.body.appendChild(bar);
})();"#,
        );
    }

    fn set_statusbar_text(&mut self, text: &str) {
        self.eval(&format!(
            "(function() {{ var bar = document.getElementById('casement-statusbar'); if (bar) {{ bar.textContent = {}; }} }})();",
            js_string(text)
        ));
    }

    fn show_dialog(&mut self, kind: DialogKind, title: &str, message: &str) {
        let text = js_string(&format!("{title}\n\n{message}"));
        let script = match kind {
            DialogKind::Question => format!("window.confirm({text});"),
            _ => format!("window.alert({text});"),
        };
        self.eval(&script);
    }

    fn grab_raster(&mut self, _source: CaptureSource) -> Result<Raster, PlatformError> {
        // The raster grab needs an OS capture API that neither winit nor
        // wry expose. The encode pipeline lives in the bridge; hosts with
        // a capture backend supply the pixels.
        Err(PlatformError::NotSupported(
            "no capture backend on this platform".into(),
        ))
    }
}
