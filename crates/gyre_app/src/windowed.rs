//! Windowed runner
//!
//! Runs the animation shell on the desktop backend.
//!
//! # Example
//!
//! ```ignore
//! use gyre_app::prelude::*;
//!
//! fn main() -> std::process::ExitCode {
//!     gyre_app::windowed::run(ShellConfig::default()).into()
//! }
//! ```

use gyre_platform_desktop::DesktopPlatform;

use crate::config::ShellConfig;
use crate::error::ExitStatus;
use crate::shell::AnimationShell;

/// Open a window at the configured size and animate until it is closed
pub fn run(config: ShellConfig) -> ExitStatus {
    let (width, height) = (config.window.width, config.window.height);
    let mut shell = AnimationShell::new(DesktopPlatform::new(), config);
    let status = shell.run(width, height);
    shell.teardown();
    status
}
