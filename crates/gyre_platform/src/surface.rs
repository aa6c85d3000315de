//! Drawable pixel surfaces
//!
//! A surface owns a block of XRGB pixel memory. The memory is only reachable
//! through a [`SurfaceLock`], which unlocks the surface when dropped, so the
//! lock is released on every exit path.

use crate::error::{PlatformError, Result};

/// Pixel layout of a surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// One `u32` per pixel, `0x00RRGGBB`, upper byte ignored
    #[default]
    Xrgb8888,
}

/// A window's drawable surface
pub trait Surface {
    /// Surface size in pixels
    fn size(&self) -> (u32, u32);

    /// Acquire exclusive access to the pixel memory
    fn lock(&mut self) -> Result<SurfaceLock<'_>>;

    /// Show the current pixel contents in the window
    fn present(&mut self) -> Result<()>;
}

/// CPU-side pixel memory with a row stride
#[derive(Debug)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    /// Row stride in pixels
    stride: usize,
    format: PixelFormat,
    pixels: Vec<u32>,
    locked: bool,
}

impl PixelSurface {
    /// Create a zeroed (black) surface with tightly packed rows
    pub fn new(width: u32, height: u32) -> Self {
        let stride = width as usize;
        Self {
            width,
            height,
            stride,
            format: PixelFormat::Xrgb8888,
            pixels: vec![0; stride * height as usize],
            locked: false,
        }
    }

    /// Create a surface whose rows are `stride` pixels apart
    pub fn with_stride(width: u32, height: u32, stride: usize) -> Result<Self> {
        if stride < width as usize {
            return Err(PlatformError::SurfaceUnavailable(format!(
                "stride {stride} is smaller than width {width}"
            )));
        }
        Ok(Self {
            width,
            height,
            stride,
            format: PixelFormat::Xrgb8888,
            pixels: vec![0; stride * height as usize],
            locked: false,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Read one pixel, `None` outside the visible area
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.stride + x as usize).copied()
    }

    /// Visible rows, each exactly `width` pixels long
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        let width = self.width as usize;
        self.pixels
            .chunks(self.stride.max(1))
            .take(self.height as usize)
            .map(move |row| &row[..width])
    }

    /// Lock the pixel memory for writing
    ///
    /// Fails with [`PlatformError::SurfaceLocked`] if a previous guard was
    /// leaked without being dropped.
    pub fn lock(&mut self) -> Result<SurfaceLock<'_>> {
        if self.locked {
            return Err(PlatformError::SurfaceLocked);
        }

        let Self {
            width,
            height,
            stride,
            format,
            pixels,
            locked,
        } = self;

        *locked = true;
        tracing::trace!(width = *width, height = *height, "surface locked");

        Ok(SurfaceLock {
            width: *width,
            height: *height,
            stride: *stride,
            format: *format,
            pixels: pixels.as_mut_slice(),
            locked,
        })
    }
}

/// Exclusive, scoped access to a surface's pixel memory
///
/// The surface is unlocked when the guard is dropped.
#[derive(Debug)]
pub struct SurfaceLock<'a> {
    width: u32,
    height: u32,
    stride: usize,
    format: PixelFormat,
    pixels: &'a mut [u32],
    locked: &'a mut bool,
}

impl SurfaceLock<'_> {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in pixels
    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn pixels(&self) -> &[u32] {
        &*self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut *self.pixels
    }
}

impl Drop for SurfaceLock<'_> {
    fn drop(&mut self) {
        *self.locked = false;
        tracing::trace!("surface unlocked");
    }
}
