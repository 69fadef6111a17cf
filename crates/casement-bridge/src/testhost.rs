//! Recording `WindowHost` used by unit tests in this crate.

use casement_common::PlatformError;
use serde_json::{json, Value};

use crate::capture::Raster;
use crate::host::{CaptureSource, DialogKind, WindowHost};

/// Records every delegation; geometry and zoom are plain fields so tests
/// can pre-seed and inspect them.
pub struct MockHost {
    pub calls: Vec<String>,
    pub scripts: Vec<String>,
    pub clipboard: String,
    pub clipboard_broken: bool,
    pub size: (u32, u32),
    pub position: (i32, i32),
    pub zoom: f64,
    pub state: &'static str,
    pub visible: bool,
    pub topmost: bool,
    pub closed: bool,
    /// When set, `grab_raster` returns an opaque raster of this size.
    pub raster_size: Option<(u32, u32)>,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            scripts: Vec::new(),
            clipboard: String::new(),
            clipboard_broken: false,
            size: (800, 600),
            position: (0, 0),
            zoom: 1.0,
            state: "normal",
            visible: true,
            topmost: false,
            closed: false,
            raster_size: None,
        }
    }

    pub fn with_raster(width: u32, height: u32) -> Self {
        let mut host = Self::new();
        host.raster_size = Some((width, height));
        host
    }

    fn record(&mut self, call: impl Into<String>) {
        self.calls.push(call.into());
    }
}

impl WindowHost for MockHost {
    fn set_title(&mut self, title: &str) {
        self.record(format!("set_title({title})"));
    }

    fn request_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        self.record(format!("request_size({width}, {height})"));
    }

    fn set_min_size(&mut self, width: u32, height: u32) {
        self.record(format!("set_min_size({width}, {height})"));
    }

    fn set_max_size(&mut self, width: u32, height: u32) {
        self.record(format!("set_max_size({width}, {height})"));
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.position = (x, y);
        self.record(format!("set_position({x}, {y})"));
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn position(&self) -> (i32, i32) {
        self.position
    }

    fn center(&mut self) {
        self.record("center");
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.record(format!("set_visible({visible})"));
    }

    fn minimize(&mut self) {
        self.state = "minimized";
        self.record("minimize");
    }

    fn maximize(&mut self) {
        self.state = "maximized";
        self.record("maximize");
    }

    fn restore(&mut self) {
        self.state = "normal";
        self.record("restore");
    }

    fn fullscreen(&mut self) {
        self.state = "fullscreen";
        self.record("fullscreen");
    }

    fn close(&mut self) {
        self.closed = true;
        self.record("close");
    }

    fn window_state(&self) -> &'static str {
        self.state
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn is_active(&self) -> bool {
        true
    }

    fn is_topmost(&self) -> bool {
        self.topmost
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.record(format!("set_opacity({opacity})"));
    }

    fn set_topmost(&mut self, topmost: bool) {
        self.topmost = topmost;
        self.record(format!("set_topmost({topmost})"));
    }

    fn set_cursor(&mut self, name: &str) {
        self.record(format!("set_cursor({name})"));
    }

    fn set_mouse_tracking(&mut self, enabled: bool) {
        self.record(format!("set_mouse_tracking({enabled})"));
    }

    fn screen_info(&self) -> Value {
        json!({"width": 1920, "height": 1080, "scale_factor": 1.0, "name": "mock"})
    }

    fn clipboard_text(&mut self) -> Result<String, PlatformError> {
        if self.clipboard_broken {
            return Err(PlatformError::Clipboard("clipboard unavailable".into()));
        }
        Ok(self.clipboard.clone())
    }

    fn set_clipboard_text(&mut self, text: &str) -> Result<(), PlatformError> {
        if self.clipboard_broken {
            return Err(PlatformError::Clipboard("clipboard unavailable".into()));
        }
        self.clipboard = text.to_string();
        Ok(())
    }

    fn evaluate_script(&mut self, js: &str) -> Result<(), PlatformError> {
        self.scripts.push(js.to_string());
        Ok(())
    }

    fn load_url(&mut self, url: &str) -> Result<(), PlatformError> {
        self.record(format!("load_url({url})"));
        Ok(())
    }

    fn reload(&mut self) {
        self.record("reload");
    }

    fn go_back(&mut self) {
        self.record("go_back");
    }

    fn go_forward(&mut self) {
        self.record("go_forward");
    }

    fn set_zoom(&mut self, factor: f64) -> Result<(), PlatformError> {
        self.zoom = factor;
        self.record(format!("set_zoom({factor})"));
        Ok(())
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn set_background_color(&mut self, color: &str) {
        self.record(format!("set_background_color({color})"));
    }

    fn add_menu(&mut self, title: &str) {
        self.record(format!("add_menu({title})"));
    }

    fn add_toolbar(&mut self, title: &str) {
        self.record(format!("add_toolbar({title})"));
    }

    fn add_statusbar(&mut self) {
        self.record("add_statusbar");
    }

    fn set_statusbar_text(&mut self, text: &str) {
        self.record(format!("set_statusbar_text({text})"));
    }

    fn show_dialog(&mut self, kind: DialogKind, title: &str, message: &str) {
        self.record(format!("show_dialog({kind:?}, {title}, {message})"));
    }

    fn grab_raster(&mut self, source: CaptureSource) -> Result<Raster, PlatformError> {
        let Some((width, height)) = self.raster_size else {
            return Err(PlatformError::NotSupported("no capture backend".into()));
        };
        self.record(format!("grab_raster({})", source.as_str()));
        Ok(Raster {
            width,
            height,
            rgba: vec![0x7f; (width * height * 4) as usize],
        })
    }
}
