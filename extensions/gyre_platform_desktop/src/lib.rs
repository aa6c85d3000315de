//! Gyre Desktop Platform
//!
//! Windowing and events for macOS, Windows, and Linux using winit, with
//! software presentation through softbuffer.
//!
//! This crate implements the `gyre_platform` traits for desktop platforms.
//! The winit loop is pumped on demand (`pump_app_events`), so the caller
//! keeps a plain blocking wait-for-event loop.
//!
//! # Example
//!
//! ```ignore
//! use gyre_platform::prelude::*;
//! use gyre_platform_desktop::DesktopPlatform;
//!
//! fn main() -> Result<()> {
//!     let mut platform = DesktopPlatform::new();
//!     platform.init()?;
//!     let window = platform.create_window(&WindowConfig::default())?;
//!     let mut surface = platform.create_surface(&window)?;
//!
//!     while let Some(event) = platform.wait_event() {
//!         if event.is_shutdown() {
//!             break;
//!         }
//!         surface.present()?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod event_loop;
pub mod input;
pub mod surface;
pub mod window;

pub use event_loop::DesktopEventSink;
pub use surface::DesktopSurface;
pub use window::DesktopWindow;

use event_loop::DesktopApp;
use gyre_platform::{Event, Platform, PlatformError, Result, WindowConfig};
use std::time::Duration;
use winit::event_loop::EventLoop as WinitEventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};

/// How many pump rounds to wait for the window to appear
const WINDOW_CREATE_ATTEMPTS: usize = 100;
const WINDOW_CREATE_PUMP_TIMEOUT: Duration = Duration::from_millis(10);

/// Desktop platform implementation
///
/// Provides windowing and input for macOS, Windows, and Linux.
#[derive(Default)]
pub struct DesktopPlatform {
    event_loop: Option<WinitEventLoop<Event>>,
    app: DesktopApp,
}

impl DesktopPlatform {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Platform for DesktopPlatform {
    type Window = DesktopWindow;
    type Surface = DesktopSurface;
    type Sink = DesktopEventSink;

    fn name(&self) -> &'static str {
        "desktop"
    }

    fn init(&mut self) -> Result<()> {
        if self.event_loop.is_some() {
            return Ok(());
        }

        let event_loop = WinitEventLoop::<Event>::with_user_event()
            .build()
            .map_err(|e| PlatformError::InitFailed(e.to_string()))?;

        self.event_loop = Some(event_loop);
        tracing::debug!("winit event loop created");
        Ok(())
    }

    fn create_window(&mut self, config: &WindowConfig) -> Result<Self::Window> {
        let event_loop = self
            .event_loop
            .as_mut()
            .ok_or(PlatformError::NotInitialized)?;

        self.app.request_window(config.clone());

        for _ in 0..WINDOW_CREATE_ATTEMPTS {
            if let PumpStatus::Exit(code) =
                event_loop.pump_app_events(Some(WINDOW_CREATE_PUMP_TIMEOUT), &mut self.app)
            {
                self.app.exited = true;
                return Err(PlatformError::WindowCreation(format!(
                    "event loop exited with code {code}"
                )));
            }

            if let Some(created) = self.app.take_created() {
                return created
                    .map(DesktopWindow::from_arc)
                    .map_err(PlatformError::WindowCreation);
            }
        }

        Err(PlatformError::WindowCreation(
            "event loop never became active".to_string(),
        ))
    }

    fn create_surface(&mut self, window: &Self::Window) -> Result<Self::Surface> {
        DesktopSurface::new(window.winit_window_arc())
    }

    fn event_sink(&self) -> Result<Self::Sink> {
        self.event_loop
            .as_ref()
            .map(|event_loop| DesktopEventSink::new(event_loop.create_proxy()))
            .ok_or(PlatformError::NotInitialized)
    }

    fn wait_event(&mut self) -> Option<Event> {
        let event_loop = self.event_loop.as_mut()?;

        loop {
            if let Some(event) = self.app.next_event() {
                return Some(event);
            }
            if self.app.exited {
                return None;
            }
            if let PumpStatus::Exit(code) = event_loop.pump_app_events(None, &mut self.app) {
                tracing::debug!(code, "winit event loop exited");
                self.app.exited = true;
            }
        }
    }

    fn destroy_window(&mut self, window: Self::Window) {
        tracing::debug!("destroying window");
        drop(window);
    }

    fn shutdown(&mut self) {
        if self.event_loop.take().is_some() {
            tracing::debug!("winit event loop released");
        }
    }
}
