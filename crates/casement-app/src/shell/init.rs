//! Window and webview creation.

use std::sync::Arc;

use tracing::{info, warn};
use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;
use wry::WebViewBuilder;

use casement_bridge::{CallEnvelope, BRIDGE_INIT_SCRIPT};
use casement_common::CasementError;

use super::core::{ShellApp, ShellEvent};
use crate::content;

impl ShellApp {
    /// Create the native window and the full-window webview inside it.
    pub(super) fn initialize_window(
        &mut self,
        event_loop: &ActiveEventLoop,
    ) -> casement_common::Result<()> {
        let win_cfg = &self.config.window;
        let attrs = Window::default_attributes()
            .with_title(&win_cfg.title)
            .with_inner_size(LogicalSize::new(
                f64::from(win_cfg.width),
                f64::from(win_cfg.height),
            ))
            .with_min_inner_size(LogicalSize::new(
                f64::from(win_cfg.min_width),
                f64::from(win_cfg.min_height),
            ))
            .with_resizable(win_cfg.resizable);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| CasementError::Other(format!("failed to create window: {e}")))?,
        );

        // IPC handler: park the body and wake the loop. Parsing and
        // dispatch happen on the loop thread.
        let inbox = Arc::clone(&self.inbox);
        let proxy = self.proxy.clone();
        let mut builder = WebViewBuilder::new()
            .with_initialization_script(BRIDGE_INIT_SCRIPT)
            .with_devtools(self.config.page.devtools)
            .with_ipc_handler(move |request| {
                let body = request.body().to_string();
                if CallEnvelope::from_json(&body).is_none() {
                    warn!(body_len = body.len(), "IPC message rejected: not a call envelope");
                    return;
                }
                if let Ok(mut pending) = inbox.lock() {
                    pending.push(body);
                }
                let _ = proxy.send_event(ShellEvent::IpcReady);
            });

        builder = match &self.config.page.url {
            Some(url) => builder.with_url(url),
            None => builder.with_html(content::DEFAULT_PAGE),
        };

        let webview = builder
            .build(&*window)
            .map_err(|e| CasementError::WebView(e.to_string()))?;

        if (self.config.page.zoom - 1.0).abs() > f64::EPSILON {
            if let Err(e) = webview.zoom(self.config.page.zoom) {
                warn!("failed to apply configured zoom: {e}");
            }
        }

        info!(
            title = %win_cfg.title,
            width = win_cfg.width,
            height = win_cfg.height,
            url = %self.config.page.url.as_deref().unwrap_or("<bundled demo page>"),
            "window created"
        );

        self.window = Some(window);
        self.webview = Some(webview);
        Ok(())
    }
}
