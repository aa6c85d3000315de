//! Repeating timer
//!
//! The timer runs on its own thread. Its only permitted action is posting
//! [`Event::Timer`] to an [`EventSink`]; it never touches application state
//! or drawing resources.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::error::{PlatformError, Result};
use crate::event::Event;
use crate::queue::EventSink;

static NEXT_TIMER_ID: AtomicU64 = AtomicU64::new(1);

/// Identifier of a registered timer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Handle to a running repeating timer
///
/// Dropping the handle stops the timer and joins its thread.
#[derive(Debug)]
pub struct RepeatingTimer {
    id: TimerId,
    interval: Duration,
    stop: Option<Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl RepeatingTimer {
    /// Start posting [`Event::Timer`] to `sink` every `interval`
    pub fn start<S: EventSink>(interval: Duration, sink: S) -> Result<Self> {
        if interval.is_zero() {
            return Err(PlatformError::InvalidTimer(interval));
        }

        let id = TimerId(NEXT_TIMER_ID.fetch_add(1, Ordering::Relaxed));
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let thread = thread::Builder::new()
            .name(format!("gyre-timer-{}", id.0))
            .spawn(move || loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        if sink.post(Event::Timer).is_err() {
                            tracing::debug!(timer = id.0, "event consumer gone, timer exiting");
                            break;
                        }
                    }
                    // Explicit stop, or the handle was dropped
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            })
            .map_err(|e| PlatformError::Timer(e.to_string()))?;

        tracing::debug!(timer = id.0, ?interval, "timer started");

        Ok(Self {
            id,
            interval,
            stop: Some(stop_tx),
            thread: Some(thread),
        })
    }

    pub fn id(&self) -> TimerId {
        self.id
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Stop the timer and wait for its thread to exit
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(stop) = self.stop.take() {
            // The thread may already have exited on a disconnected sink
            let _ = stop.send(());
        }
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::warn!(timer = self.id.0, "timer thread panicked");
            } else {
                tracing::debug!(timer = self.id.0, "timer stopped");
            }
        }
    }
}

impl Drop for RepeatingTimer {
    fn drop(&mut self) {
        self.shutdown();
    }
}
