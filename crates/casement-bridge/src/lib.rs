//! Call bridge between the embedded page and the host window.
//!
//! The page calls host functions through `window.casement.callHost(name,
//! ...args)`; each call carries a fresh correlation id, crosses the webview
//! IPC channel as a [`CallEnvelope`], and is answered by exactly one
//! [`ResponseEnvelope`] tagged with the same id. Provides:
//!
//! - The two wire envelopes and their JSON conventions
//! - A dispatcher resolving names against the builtin window operations
//!   first, then user-registered functions
//! - The page-side stub script injected into every page
//! - A deferred-invocation queue backing the `after` builtin
//! - PNG + base64 encoding for screen/window captures
//!
//! The transport is abstract: the bridge only needs async delivery of the
//! two envelope shapes in opposite directions. Platform window operations
//! live behind the [`WindowHost`] trait.

pub mod builtin;
pub mod capture;
pub mod dispatch;
pub mod envelope;
pub mod host;
pub mod registry;
pub mod scheduler;
pub mod stub;

#[cfg(test)]
pub(crate) mod testhost;

pub use builtin::{console_line, BuiltinOp, CURSOR_NAMES};
pub use capture::Raster;
pub use dispatch::Dispatcher;
pub use envelope::{CallEnvelope, ResponseEnvelope};
pub use host::{CaptureSource, DialogKind, WindowHost};
pub use registry::{Handler, Registration, UserRegistry};
pub use scheduler::{DeferredCall, DeferredQueue};
pub use stub::{js_deliver_response, js_push_log, BRIDGE_INIT_SCRIPT};
