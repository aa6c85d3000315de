//! Gyre Animation Shell
//!
//! Opens a window, starts a repeating frame timer and, on every tick,
//! paints a rounded rectangle with a diagonal gradient, rotated a little
//! further about the window center than on the tick before.
//!
//! # Example (Headless)
//!
//! ```ignore
//! use gyre_app::prelude::*;
//! use std::time::Duration;
//!
//! let platform = HeadlessPlatform::new(
//!     HeadlessConfig::default().idle_timeout(Duration::from_millis(100)),
//! );
//! let monitor = platform.monitor();
//!
//! let mut shell = AnimationShell::new(platform, ShellConfig::default().max_frames(40));
//! assert_eq!(shell.run(640, 480), ExitStatus::Success);
//! assert_eq!(monitor.frames_presented(), 40);
//! ```
//!
//! # Example (Windowed)
//!
//! ```ignore
//! use gyre_app::prelude::*;
//!
//! fn main() -> std::process::ExitCode {
//!     gyre_app::windowed::run(ShellConfig::default()).into()
//! }
//! ```

mod config;
mod error;
pub mod scene;
mod shell;
mod state;

#[cfg(all(feature = "windowed", not(any(target_os = "android", target_os = "ios"))))]
pub mod windowed;

#[cfg(test)]
mod tests;

pub use config::{ShellConfig, DEFAULT_FRAME_INTERVAL, DEFAULT_ROTATION_STEP};
pub use error::{ExitStatus, FrameError, InitError};
pub use shell::{AnimationShell, FrameStats, Ready};
pub use state::AnimationState;

// Re-export platform types for callers picking a backend
pub use gyre_platform::{HeadlessConfig, HeadlessMonitor, HeadlessPlatform, WindowConfig};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::config::ShellConfig;
    pub use crate::error::{ExitStatus, FrameError, InitError};
    pub use crate::shell::{AnimationShell, FrameStats, Ready};
    pub use crate::state::AnimationState;

    pub use gyre_paint::{Canvas, RecordingContext};
    pub use gyre_platform::{
        Event, HeadlessConfig, HeadlessMonitor, HeadlessPlatform, Platform, WindowConfig,
        WindowPosition,
    };
}
