//! Desktop event loop implementation using winit
//!
//! winit drives callbacks; the shell wants to pull one event at a time.
//! [`DesktopApp`] bridges the two: winit callbacks convert native events
//! into gyre [`Event`]s and append them to a queue, and the platform pumps
//! the loop only when that queue is empty.

use crate::input;
use crate::window;
use gyre_platform::{Event, EventSink, PlatformError, Result, WindowConfig, WindowEvent};
use std::collections::VecDeque;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent as WinitWindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoopProxy};
use winit::window::{Window as WinitWindow, WindowId};

/// Posts events onto the winit loop from any thread
#[derive(Clone)]
pub struct DesktopEventSink {
    proxy: EventLoopProxy<Event>,
}

impl DesktopEventSink {
    pub(crate) fn new(proxy: EventLoopProxy<Event>) -> Self {
        Self { proxy }
    }
}

impl EventSink for DesktopEventSink {
    fn post(&self, event: Event) -> Result<()> {
        self.proxy
            .send_event(event)
            .map_err(|_| PlatformError::Disconnected)
    }
}

/// Convert a winit window event; `None` for events the shell has no use for
pub(crate) fn convert_window_event(event: WinitWindowEvent) -> Option<Event> {
    let converted = match event {
        WinitWindowEvent::CloseRequested => Event::Window(WindowEvent::CloseRequested),

        WinitWindowEvent::Resized(size) => Event::Window(WindowEvent::Resized {
            width: size.width,
            height: size.height,
        }),

        WinitWindowEvent::Focused(focused) => Event::Window(WindowEvent::Focused(focused)),

        WinitWindowEvent::RedrawRequested => Event::Window(WindowEvent::Exposed),

        WinitWindowEvent::KeyboardInput { event, .. } => {
            Event::Input(input::keyboard(&event.logical_key, event.state))
        }

        WinitWindowEvent::CursorMoved { position, .. } => {
            Event::Input(input::mouse_moved(position.x as f32, position.y as f32))
        }

        WinitWindowEvent::MouseInput { state, button, .. } => {
            Event::Input(input::mouse_button(button, state))
        }

        _ => return None,
    };
    Some(converted)
}

/// Internal winit application handler
#[derive(Default)]
pub(crate) struct DesktopApp {
    /// Window waiting for an active loop to be created on
    pending_window: Option<WindowConfig>,
    /// Result of the last window creation
    created: Option<std::result::Result<Arc<WinitWindow>, String>>,
    queue: VecDeque<Event>,
    pub(crate) exited: bool,
}

impl DesktopApp {
    pub(crate) fn request_window(&mut self, config: WindowConfig) {
        self.pending_window = Some(config);
        self.created = None;
    }

    pub(crate) fn take_created(&mut self) -> Option<std::result::Result<Arc<WinitWindow>, String>> {
        self.created.take()
    }

    pub(crate) fn next_event(&mut self) -> Option<Event> {
        self.queue.pop_front()
    }

    fn create_pending_window(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(config) = self.pending_window.take() {
            let result = window::build(event_loop, &config)
                .map(Arc::new)
                .map_err(|e| e.to_string());
            match &result {
                Ok(_) => tracing::info!(title = %config.title, width = config.width, height = config.height, "window created"),
                Err(e) => tracing::error!("Failed to create window: {}", e),
            }
            self.created = Some(result);
        }
    }

    fn push(&mut self, event: Event) {
        self.queue.push_back(event);
    }
}

impl ApplicationHandler<Event> for DesktopApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
        self.create_pending_window(event_loop);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.create_pending_window(event_loop);
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: Event) {
        self.push(event);
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WinitWindowEvent,
    ) {
        if let Some(converted) = convert_window_event(event) {
            self.push(converted);
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.exited = true;
    }
}
