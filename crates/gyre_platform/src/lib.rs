//! Gyre Platform Abstraction Layer
//!
//! This crate provides the backend-agnostic pieces of the windowing side of
//! Gyre: the [`Platform`] trait, window and surface abstractions, the event
//! model, the single-consumer event queue and the repeating timer.
//!
//! # Architecture
//!
//! - [`Platform`] - starts the subsystem, creates windows and surfaces, and
//!   yields events one at a time
//! - [`Surface`] / [`SurfaceLock`] - pixel memory behind a scoped lock
//! - [`EventSink`] - the only thing other threads may touch; they post
//!   [`Event`]s and the owning thread consumes them in order
//! - [`RepeatingTimer`] - a thread that posts [`Event::Timer`]
//!
//! # Platform Implementations
//!
//! - `gyre_platform_desktop` - Desktop platforms using winit and softbuffer
//! - [`headless::HeadlessPlatform`] - In-memory, no display required
//!
//! # Example
//!
//! ```ignore
//! use gyre_platform::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut platform = HeadlessPlatform::new(HeadlessConfig::default());
//!     platform.init()?;
//!     let window = platform.create_window(&WindowConfig::default())?;
//!     let mut surface = platform.create_surface(&window)?;
//!     let _timer = platform.add_timer(std::time::Duration::from_millis(25))?;
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

mod error;
mod event;
pub mod headless;
mod input;
mod platform;
mod queue;
mod surface;
mod timer;
mod window;

// Re-export all public types
pub use error::{PlatformError, Result};
pub use event::{Event, WindowEvent};
pub use headless::{HeadlessConfig, HeadlessMonitor, HeadlessPlatform};
pub use input::{InputEvent, Key, KeyState, MouseButton};
pub use platform::Platform;
pub use queue::{event_channel, EventReceiver, EventSender, EventSink};
pub use surface::{PixelFormat, PixelSurface, Surface, SurfaceLock};
pub use timer::{RepeatingTimer, TimerId};
pub use window::{Window, WindowConfig, WindowPosition};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{PlatformError, Result};
    pub use crate::event::{Event, WindowEvent};
    pub use crate::headless::{HeadlessConfig, HeadlessMonitor, HeadlessPlatform};
    pub use crate::input::{InputEvent, Key, KeyState, MouseButton};
    pub use crate::platform::Platform;
    pub use crate::queue::{EventSink, EventSender};
    pub use crate::surface::{PixelFormat, PixelSurface, Surface, SurfaceLock};
    pub use crate::timer::RepeatingTimer;
    pub use crate::window::{Window, WindowConfig, WindowPosition};
}
