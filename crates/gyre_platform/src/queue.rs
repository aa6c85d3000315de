//! Single-consumer event queue
//!
//! Producers on any thread hold an [`EventSink`] and may only post immutable
//! [`Event`] values. The thread that owns the application state is the only
//! consumer, so all state mutation is serialized onto it.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

use crate::error::{PlatformError, Result};
use crate::event::Event;

/// Something events can be posted to from any thread
pub trait EventSink: Send + 'static {
    /// Enqueue an event for the consumer thread
    ///
    /// Fails with [`PlatformError::Disconnected`] once the consumer is gone.
    fn post(&self, event: Event) -> Result<()>;
}

/// Producer half of an [`event_channel`]
#[derive(Clone, Debug)]
pub struct EventSender {
    tx: Sender<Event>,
}

impl EventSink for EventSender {
    fn post(&self, event: Event) -> Result<()> {
        self.tx.send(event).map_err(|_| PlatformError::Disconnected)
    }
}

/// Consumer half of an [`event_channel`]
#[derive(Debug)]
pub struct EventReceiver {
    rx: Receiver<Event>,
}

impl EventReceiver {
    /// Block until the next event arrives
    ///
    /// With `idle` set, a silence longer than `idle` counts as the source
    /// being exhausted. Returns `None` when exhausted or when every sender
    /// has been dropped.
    pub fn wait(&self, idle: Option<Duration>) -> Option<Event> {
        match idle {
            None => self.rx.recv().ok(),
            Some(timeout) => match self.rx.recv_timeout(timeout) {
                Ok(event) => Some(event),
                Err(RecvTimeoutError::Timeout) => {
                    tracing::trace!(?timeout, "event queue idle");
                    None
                }
                Err(RecvTimeoutError::Disconnected) => None,
            },
        }
    }

    /// Take the next event if one is already queued
    pub fn try_next(&self) -> Option<Event> {
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}

/// Create a connected sender/receiver pair
pub fn event_channel() -> (EventSender, EventReceiver) {
    let (tx, rx) = mpsc::channel();
    (EventSender { tx }, EventReceiver { rx })
}
