//! The shell: native window, embedded webview, and the bridge wiring
//! between them.
//!
//! One winit event loop drives everything. wry's IPC callback only parks
//! raw call bodies in an inbox and wakes the loop through the event-loop
//! proxy; dispatch, response delivery, and deferred timers all run
//! serially on the loop thread.

mod api;
mod core;
mod event_handler;
mod host;
mod init;
mod pump;

pub use core::{ShellApp, ShellEvent};
