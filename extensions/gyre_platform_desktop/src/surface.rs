//! Software surface presented through softbuffer

use gyre_platform::{PixelSurface, PlatformError, Result, Surface, SurfaceLock};
use std::num::NonZeroU32;
use std::sync::Arc;
use winit::window::Window as WinitWindow;

type SoftSurface = softbuffer::Surface<Arc<WinitWindow>, Arc<WinitWindow>>;

/// Desktop drawable surface
///
/// Painting happens in a CPU back buffer; [`Surface::present`] copies it
/// into the softbuffer swap buffer and shows it.
pub struct DesktopSurface {
    back: PixelSurface,
    surface: SoftSurface,
}

impl DesktopSurface {
    pub(crate) fn new(window: Arc<WinitWindow>) -> Result<Self> {
        let size = window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return Err(PlatformError::SurfaceUnavailable(format!(
                "window has no drawable area ({}x{})",
                size.width, size.height
            )));
        };

        let context = softbuffer::Context::new(Arc::clone(&window))
            .map_err(|e| PlatformError::SurfaceUnavailable(e.to_string()))?;
        let mut surface = softbuffer::Surface::new(&context, window)
            .map_err(|e| PlatformError::SurfaceUnavailable(e.to_string()))?;
        surface
            .resize(width, height)
            .map_err(|e| PlatformError::SurfaceUnavailable(e.to_string()))?;

        tracing::debug!(width = size.width, height = size.height, "softbuffer surface created");

        Ok(Self {
            back: PixelSurface::new(size.width, size.height),
            surface,
        })
    }
}

impl Surface for DesktopSurface {
    fn size(&self) -> (u32, u32) {
        self.back.size()
    }

    fn lock(&mut self) -> Result<SurfaceLock<'_>> {
        self.back.lock()
    }

    fn present(&mut self) -> Result<()> {
        let width = self.back.width() as usize;
        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| PlatformError::Present(e.to_string()))?;

        for (dst, src) in buffer.chunks_exact_mut(width).zip(self.back.rows()) {
            dst.copy_from_slice(src);
        }

        buffer
            .present()
            .map_err(|e| PlatformError::Present(e.to_string()))
    }
}
