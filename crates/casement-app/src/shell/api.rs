//! Demo API functions registered with the user registry at startup.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use serde_json::json;

use super::core::ShellApp;

impl ShellApp {
    pub(super) fn register_demo_api(&mut self) {
        let outbox = Arc::clone(&self.log_outbox);
        self.dispatcher.register("hello", move |_args| {
            if let Ok(mut queued) = outbox.lock() {
                queued.push("Hello from the host!".to_string());
            }
            Ok(json!({"message": "Hello from the host!", "status": "success"}))
        });

        // Handlers have no event-loop access; exit is signalled through
        // the shared flag and picked up on the next loop turn.
        let exit = Arc::clone(&self.exit_flag);
        self.dispatcher.register("destroy", move |_args| {
            exit.store(true, Ordering::Relaxed);
            Ok(json!({"status": "closed"}))
        });
    }
}
