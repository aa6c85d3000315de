//! Platform trait and abstraction

use std::time::Duration;

use crate::error::Result;
use crate::event::Event;
use crate::queue::EventSink;
use crate::surface::Surface;
use crate::timer::RepeatingTimer;
use crate::window::{Window, WindowConfig};

/// Windowing backend
///
/// Each backend (desktop, headless) implements this trait to give the
/// application a window, a drawable surface, an event queue and timers.
/// Creating a backend value is cheap; nothing is acquired until [`init`].
///
/// [`init`]: Platform::init
pub trait Platform {
    /// The window type for this platform
    type Window: Window;
    /// The drawable surface type for this platform
    type Surface: Surface;
    /// Handle other threads use to post events
    type Sink: EventSink + Clone;

    /// Get the platform name
    ///
    /// Returns a string like "desktop" or "headless".
    fn name(&self) -> &'static str;

    /// Start the windowing subsystem
    fn init(&mut self) -> Result<()>;

    /// Create a window
    fn create_window(&mut self, config: &WindowConfig) -> Result<Self::Window>;

    /// Obtain the drawable surface of a window
    fn create_surface(&mut self, window: &Self::Window) -> Result<Self::Surface>;

    /// Handle for posting events onto this platform's queue
    fn event_sink(&self) -> Result<Self::Sink>;

    /// Block until the next event
    ///
    /// Returns `None` once the event source is exhausted.
    fn wait_event(&mut self) -> Option<Event>;

    /// Register a repeating timer that posts [`Event::Timer`]
    fn add_timer(&mut self, interval: Duration) -> Result<RepeatingTimer> {
        RepeatingTimer::start(interval, self.event_sink()?)
    }

    /// Stop a timer registered with [`Platform::add_timer`]
    fn remove_timer(&mut self, timer: RepeatingTimer) {
        timer.stop();
    }

    /// Close a window
    fn destroy_window(&mut self, window: Self::Window);

    /// Shut the windowing subsystem down
    fn shutdown(&mut self);
}
