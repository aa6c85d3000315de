//! Platform error types

use thiserror::Error;

/// Windowing and event-source errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// The windowing subsystem could not be started
    #[error("Platform initialization failed: {0}")]
    InitFailed(String),

    /// An operation needed a started subsystem
    #[error("Platform not initialized")]
    NotInitialized,

    /// Failed to create window
    #[error("Failed to create window: {0}")]
    WindowCreation(String),

    /// No drawable surface could be obtained for the window
    #[error("Surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// The surface pixels are already locked
    #[error("Surface is already locked")]
    SurfaceLocked,

    /// Presenting the surface to the window failed
    #[error("Failed to present surface: {0}")]
    Present(String),

    /// Timer interval must be non-zero
    #[error("Invalid timer interval: {0:?}")]
    InvalidTimer(std::time::Duration),

    /// Failed to start the timer thread
    #[error("Failed to start timer: {0}")]
    Timer(String),

    /// The event consumer is gone
    #[error("Event queue disconnected")]
    Disconnected,
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
