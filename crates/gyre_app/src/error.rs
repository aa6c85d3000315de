//! Error types for gyre_app

use gyre_paint::PaintError;
use gyre_platform::PlatformError;
use thiserror::Error;

/// Errors that stop the shell from starting
#[derive(Error, Debug)]
pub enum InitError {
    /// The windowing subsystem could not be started
    #[error("Windowing subsystem unavailable: {0}")]
    WindowingUnavailable(#[source] PlatformError),

    /// The window could not be created
    #[error("Window creation failed: {0}")]
    WindowUnavailable(#[source] PlatformError),

    /// No drawable surface could be obtained for the window
    #[error("Drawable surface unavailable: {0}")]
    SurfaceUnavailable(#[source] PlatformError),

    /// The frame timer could not be registered
    #[error("Frame timer unavailable: {0}")]
    TimerUnavailable(#[source] PlatformError),
}

/// Per-frame failures
///
/// None of these end the run; the frame is presented without the scene.
#[derive(Error, Debug)]
pub enum FrameError {
    /// The surface could not be locked for writing
    #[error("Surface lock failed: {0}")]
    Lock(#[source] PlatformError),

    /// No paint context could be bound to the surface pixels
    #[error("Paint context unavailable: {0}")]
    PaintContext(#[source] PaintError),

    /// The surface could not be pushed to the display
    #[error("Present failed: {0}")]
    Present(#[source] PlatformError),
}

/// Process exit status of a shell run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl ExitStatus {
    /// Numeric process exit code: `0` on success, `1` on failure
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == ExitStatus::Success
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        std::process::ExitCode::from(status.code())
    }
}
