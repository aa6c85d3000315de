//! Desktop window implementation using winit

use gyre_platform::{Window, WindowConfig, WindowPosition};
use std::sync::Arc;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window as WinitWindow, WindowAttributes};

/// Desktop window wrapping a winit window
///
/// The native window closes when the last handle is dropped.
pub struct DesktopWindow {
    window: Arc<WinitWindow>,
}

impl DesktopWindow {
    pub(crate) fn from_arc(window: Arc<WinitWindow>) -> Self {
        Self { window }
    }

    /// Get an Arc to the winit window
    pub fn winit_window_arc(&self) -> Arc<WinitWindow> {
        Arc::clone(&self.window)
    }
}

impl Window for DesktopWindow {
    fn size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    fn title(&self) -> String {
        self.window.title()
    }
}

/// Build a native window from a config
///
/// Sizes are physical so the drawable surface matches the request exactly.
pub(crate) fn build(
    event_loop: &ActiveEventLoop,
    config: &WindowConfig,
) -> Result<WinitWindow, winit::error::OsError> {
    let size = PhysicalSize::new(config.width, config.height);
    let mut attrs = WindowAttributes::default()
        .with_title(&config.title)
        .with_inner_size(size)
        .with_resizable(false);

    let position = match config.position {
        WindowPosition::At { x, y } => Some(PhysicalPosition::new(x, y)),
        WindowPosition::Centered => event_loop.primary_monitor().map(|monitor| {
            let origin = monitor.position();
            let area = monitor.size();
            PhysicalPosition::new(
                origin.x + (area.width as i32 - size.width as i32) / 2,
                origin.y + (area.height as i32 - size.height as i32) / 2,
            )
        }),
    };
    if let Some(position) = position {
        attrs = attrs.with_position(position);
    }

    event_loop.create_window(attrs)
}
