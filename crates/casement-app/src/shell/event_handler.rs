//! `ApplicationHandler` implementation for the winit event loop.

use std::sync::atomic::Ordering;
use std::time::Duration;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::WindowId;

use super::core::{ShellApp, ShellEvent};

impl ApplicationHandler<ShellEvent> for ShellApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.initialize_window(event_loop) {
            tracing::error!("window initialization failed: {e}");
            event_loop.exit();
            return;
        }

        self.register_demo_api();

        // Startup hook: greet through the deferred queue after 3s.
        self.dispatcher
            .schedule(Duration::from_millis(3000), "hello", Vec::new());
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                event_loop.exit();
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.host_state.mouse_tracking {
                    tracing::trace!(x = position.x, y = position.y, "cursor moved");
                }
            }
            _ => {}
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: ShellEvent) {
        match event {
            ShellEvent::IpcReady => self.pump_ipc(event_loop),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.run_due_deferred();

        if self.exit_flag.load(Ordering::Relaxed) || self.host_state.close_requested {
            event_loop.exit();
            return;
        }

        // Sleep until the next deferred deadline, or indefinitely.
        match self.dispatcher.next_deadline() {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}
