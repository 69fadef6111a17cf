//! Inbox draining, dispatch, and response delivery.

use std::sync::atomic::Ordering;
use std::time::Instant;

use tracing::warn;
use winit::event_loop::ActiveEventLoop;

use casement_bridge::{console_line, js_deliver_response, js_push_log, CallEnvelope};

use super::core::ShellApp;
use super::host::ShellHost;

impl ShellApp {
    /// Drain and dispatch every parked call envelope.
    pub(super) fn pump_ipc(&mut self, event_loop: &ActiveEventLoop) {
        let bodies: Vec<String> = match self.inbox.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(_) => return,
        };

        for body in bodies {
            let Some(call) = CallEnvelope::from_json(&body) else {
                warn!(body_len = body.len(), "dropping malformed call envelope");
                continue;
            };
            self.handle_call(&call);
        }
        self.flush_logs();

        if self.exit_flag.load(Ordering::Relaxed) || self.host_state.close_requested {
            event_loop.exit();
        }
    }

    fn handle_call(&mut self, call: &CallEnvelope) {
        let (Some(window), Some(webview)) = (self.window.as_deref(), self.webview.as_ref()) else {
            return;
        };

        let mut host = ShellHost {
            window,
            webview,
            state: &mut self.host_state,
        };
        let response = self.dispatcher.dispatch(&mut host, call);

        // Window operations echo a console line through the one-way log
        // channel, alongside the response the page's promise receives.
        if response.success {
            if let Ok(result) = serde_json::from_str(&response.payload) {
                if let Some(line) = console_line(&call.func_name, &call.args, &result) {
                    if let Ok(mut queued) = self.log_outbox.lock() {
                        queued.push(line);
                    }
                }
            }
        }

        let script = js_deliver_response(&response);
        if let Err(e) = webview.evaluate_script(&script) {
            warn!(callback_id = %response.callback_id, error = %e, "failed to deliver response");
        }
    }

    /// Fire deferred calls whose deadline has passed.
    pub(super) fn run_due_deferred(&mut self) {
        if self.dispatcher.next_deadline().is_none() {
            return;
        }
        let (Some(window), Some(webview)) = (self.window.as_deref(), self.webview.as_ref()) else {
            return;
        };
        let mut host = ShellHost {
            window,
            webview,
            state: &mut self.host_state,
        };
        self.dispatcher.run_due_deferred(&mut host, Instant::now());
        self.flush_logs();
    }

    /// Drain the handler log outbox into the page's console sink. This is
    /// the one-way channel: no correlation ids, no acknowledgment.
    fn flush_logs(&mut self) {
        let messages: Vec<String> = match self.log_outbox.lock() {
            Ok(mut queued) => std::mem::take(&mut *queued),
            Err(_) => return,
        };
        let Some(webview) = &self.webview else { return };
        for message in messages {
            if let Err(e) = webview.evaluate_script(&js_push_log(&message)) {
                warn!(error = %e, "failed to push log to page");
            }
        }
    }
}
