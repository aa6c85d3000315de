//! Paint error types

use thiserror::Error;

/// Reasons a paint context cannot be bound to a pixel buffer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaintError {
    /// Target has no pixels
    #[error("Empty paint target ({width}x{height})")]
    EmptyTarget { width: u32, height: u32 },

    /// Row stride shorter than a row
    #[error("Stride {stride} is smaller than width {width}")]
    StrideTooSmall { stride: usize, width: u32 },

    /// Buffer does not cover `height` rows of `stride` pixels
    #[error("Pixel buffer too small: need {needed} pixels, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    /// Raster canvas could not be allocated
    #[error("Failed to allocate {width}x{height} canvas")]
    Allocation { width: u32, height: u32 },
}

/// Result type for paint operations
pub type Result<T> = std::result::Result<T, PaintError>;
