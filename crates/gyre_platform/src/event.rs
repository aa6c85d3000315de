//! Platform events
//!
//! Every notification the shell reacts to arrives as an [`Event`] on a
//! single queue, whether it came from the native window system or from the
//! repeating timer thread.

use crate::input::InputEvent;

/// Platform events
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Application shutdown was requested
    Quit,
    /// The repeating timer fired
    Timer,
    /// Window-related event
    Window(WindowEvent),
    /// Input event (mouse, keyboard)
    Input(InputEvent),
}

impl Event {
    /// Whether this event should stop the event loop
    pub fn is_shutdown(&self) -> bool {
        matches!(self, Event::Quit | Event::Window(WindowEvent::CloseRequested))
    }

    /// Whether this is a timer tick
    pub fn is_timer(&self) -> bool {
        matches!(self, Event::Timer)
    }
}

/// Window events
#[derive(Clone, Debug, PartialEq)]
pub enum WindowEvent {
    /// Window was resized
    Resized {
        /// New width in physical pixels
        width: u32,
        /// New height in physical pixels
        height: u32,
    },
    /// Window gained or lost focus
    Focused(bool),
    /// The window system asked for the contents to be redrawn
    Exposed,
    /// Window close was requested (e.g., close button clicked)
    CloseRequested,
}
