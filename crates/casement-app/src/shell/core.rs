//! `ShellApp` struct definition and constructor.

use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use winit::event_loop::EventLoopProxy;
use winit::window::Window;
use wry::WebView;

use casement_bridge::Dispatcher;
use casement_config::CasementConfig;

/// User events injected into the winit loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    /// At least one call envelope is waiting in the inbox.
    IpcReady,
}

/// Mutable host-side state the `WindowHost` implementation tracks itself
/// because the platform offers no getter (zoom, opacity) or no toggle at
/// all (mouse tracking).
pub(super) struct HostState {
    pub zoom: f64,
    pub opacity: f64,
    pub topmost: bool,
    pub mouse_tracking: bool,
    /// Set by the `close` builtin; the event loop exits on the next turn.
    pub close_requested: bool,
}

/// Top-level application state.
pub struct ShellApp {
    pub(super) config: CasementConfig,
    pub(super) proxy: EventLoopProxy<ShellEvent>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) webview: Option<WebView>,

    // Bridge
    pub(super) dispatcher: Dispatcher,
    /// Raw call bodies parked by wry's IPC callback until the loop drains
    /// them.
    pub(super) inbox: Arc<Mutex<Vec<String>>>,
    /// Messages queued by handlers for the one-way host-to-page log
    /// channel; flushed after each dispatch turn.
    pub(super) log_outbox: Arc<Mutex<Vec<String>>>,
    pub(super) host_state: HostState,
    /// Set by the `destroy` demo function; handlers have no event-loop
    /// access, so exit is signalled through this flag.
    pub(super) exit_flag: Arc<AtomicBool>,
}

impl ShellApp {
    pub fn new(config: CasementConfig, proxy: EventLoopProxy<ShellEvent>) -> Self {
        let zoom = config.page.zoom;
        Self {
            config,
            proxy,
            window: None,
            webview: None,
            dispatcher: Dispatcher::new(),
            inbox: Arc::new(Mutex::new(Vec::new())),
            log_outbox: Arc::new(Mutex::new(Vec::new())),
            host_state: HostState {
                zoom,
                opacity: 1.0,
                topmost: false,
                mouse_tracking: false,
                close_requested: false,
            },
            exit_flag: Arc::new(AtomicBool::new(false)),
        }
    }
}
