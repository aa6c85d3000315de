//! In-memory backend
//!
//! `HeadlessPlatform` needs no display. Windows are plain records, surfaces
//! are [`PixelSurface`]s, and presenting copies the frame into a shared
//! [`HeadlessMonitor`] that callers keep to inspect what happened.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{PlatformError, Result};
use crate::event::Event;
use crate::queue::{event_channel, EventReceiver, EventSender, EventSink};
use crate::surface::{PixelSurface, Surface, SurfaceLock};
use crate::timer::RepeatingTimer;
use crate::window::{Window, WindowConfig};
use crate::Platform;

/// Headless backend configuration
#[derive(Clone, Debug, Default)]
pub struct HeadlessConfig {
    /// Make [`Platform::init`] fail
    pub fail_init: bool,
    /// Make [`Platform::create_surface`] fail
    pub fail_surface: bool,
    /// Silence longer than this ends the event stream; `None` blocks forever
    pub idle_timeout: Option<Duration>,
    /// Events queued as soon as the platform starts
    pub script: Vec<Event>,
    /// Surface size to hand out instead of the window size
    pub surface_size: Option<(u32, u32)>,
}

impl HeadlessConfig {
    pub fn fail_init(mut self) -> Self {
        self.fail_init = true;
        self
    }

    pub fn fail_surface(mut self) -> Self {
        self.fail_surface = true;
        self
    }

    pub fn idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = Some(timeout);
        self
    }

    pub fn script(mut self, events: impl IntoIterator<Item = Event>) -> Self {
        self.script.extend(events);
        self
    }

    /// Hand out surfaces of this size, e.g. `(0, 0)` for a minimized window
    pub fn surface_size(mut self, width: u32, height: u32) -> Self {
        self.surface_size = Some((width, height));
        self
    }
}

/// A presented frame, rows tightly packed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u32>,
}

impl Frame {
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

#[derive(Debug, Default)]
struct MonitorState {
    inits: AtomicUsize,
    shutdowns: AtomicUsize,
    windows_created: AtomicUsize,
    windows_destroyed: AtomicUsize,
    surfaces_created: AtomicUsize,
    timers_added: AtomicUsize,
    timers_removed: AtomicUsize,
    frames_presented: AtomicUsize,
    last_frame: Mutex<Option<Frame>>,
}

/// Shared view of what a [`HeadlessPlatform`] has done
#[derive(Clone, Debug, Default)]
pub struct HeadlessMonitor {
    state: Arc<MonitorState>,
}

impl HeadlessMonitor {
    pub fn inits(&self) -> usize {
        self.state.inits.load(Ordering::SeqCst)
    }

    pub fn shutdowns(&self) -> usize {
        self.state.shutdowns.load(Ordering::SeqCst)
    }

    pub fn windows_created(&self) -> usize {
        self.state.windows_created.load(Ordering::SeqCst)
    }

    pub fn windows_destroyed(&self) -> usize {
        self.state.windows_destroyed.load(Ordering::SeqCst)
    }

    pub fn surfaces_created(&self) -> usize {
        self.state.surfaces_created.load(Ordering::SeqCst)
    }

    pub fn timers_added(&self) -> usize {
        self.state.timers_added.load(Ordering::SeqCst)
    }

    pub fn timers_removed(&self) -> usize {
        self.state.timers_removed.load(Ordering::SeqCst)
    }

    pub fn frames_presented(&self) -> usize {
        self.state.frames_presented.load(Ordering::SeqCst)
    }

    /// Copy of the most recently presented frame
    pub fn last_frame(&self) -> Option<Frame> {
        self.state
            .last_frame
            .lock()
            .map(|frame| frame.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    fn bump(counter: &AtomicUsize) {
        counter.fetch_add(1, Ordering::SeqCst);
    }
}

/// Window record of the headless backend
#[derive(Debug)]
pub struct HeadlessWindow {
    title: String,
    width: u32,
    height: u32,
}

impl Window for HeadlessWindow {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn title(&self) -> String {
        self.title.clone()
    }
}

/// Surface of the headless backend
#[derive(Debug)]
pub struct HeadlessSurface {
    pixels: PixelSurface,
    monitor: HeadlessMonitor,
}

impl Surface for HeadlessSurface {
    fn size(&self) -> (u32, u32) {
        self.pixels.size()
    }

    fn lock(&mut self) -> Result<SurfaceLock<'_>> {
        self.pixels.lock()
    }

    fn present(&mut self) -> Result<()> {
        let frame = Frame {
            width: self.pixels.width(),
            height: self.pixels.height(),
            pixels: self.pixels.rows().flatten().copied().collect(),
        };
        let mut slot = self
            .monitor
            .state
            .last_frame
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(frame);
        HeadlessMonitor::bump(&self.monitor.state.frames_presented);
        Ok(())
    }
}

/// Display-less [`Platform`] implementation
#[derive(Debug, Default)]
pub struct HeadlessPlatform {
    config: HeadlessConfig,
    monitor: HeadlessMonitor,
    queue: Option<(EventSender, EventReceiver)>,
}

impl HeadlessPlatform {
    pub fn new(config: HeadlessConfig) -> Self {
        Self {
            config,
            monitor: HeadlessMonitor::default(),
            queue: None,
        }
    }

    /// Shared monitor; clone it before handing the platform away
    pub fn monitor(&self) -> HeadlessMonitor {
        self.monitor.clone()
    }
}

impl Platform for HeadlessPlatform {
    type Window = HeadlessWindow;
    type Surface = HeadlessSurface;
    type Sink = EventSender;

    fn name(&self) -> &'static str {
        "headless"
    }

    fn init(&mut self) -> Result<()> {
        if self.config.fail_init {
            return Err(PlatformError::InitFailed(
                "headless platform configured to fail".to_string(),
            ));
        }

        let (tx, rx) = event_channel();
        for event in self.config.script.drain(..) {
            tx.post(event)?;
        }
        self.queue = Some((tx, rx));
        HeadlessMonitor::bump(&self.monitor.state.inits);
        tracing::debug!("headless platform started");
        Ok(())
    }

    fn create_window(&mut self, config: &WindowConfig) -> Result<Self::Window> {
        if self.queue.is_none() {
            return Err(PlatformError::NotInitialized);
        }
        if config.width == 0 || config.height == 0 {
            return Err(PlatformError::WindowCreation(format!(
                "invalid size {}x{}",
                config.width, config.height
            )));
        }

        HeadlessMonitor::bump(&self.monitor.state.windows_created);
        Ok(HeadlessWindow {
            title: config.title.clone(),
            width: config.width,
            height: config.height,
        })
    }

    fn create_surface(&mut self, window: &Self::Window) -> Result<Self::Surface> {
        if self.config.fail_surface {
            return Err(PlatformError::SurfaceUnavailable(
                "headless platform configured to fail".to_string(),
            ));
        }

        HeadlessMonitor::bump(&self.monitor.state.surfaces_created);
        let (width, height) = self.config.surface_size.unwrap_or_else(|| window.size());
        Ok(HeadlessSurface {
            pixels: PixelSurface::new(width, height),
            monitor: self.monitor.clone(),
        })
    }

    fn event_sink(&self) -> Result<Self::Sink> {
        self.queue
            .as_ref()
            .map(|(tx, _)| tx.clone())
            .ok_or(PlatformError::NotInitialized)
    }

    fn wait_event(&mut self) -> Option<Event> {
        let idle = self.config.idle_timeout;
        self.queue.as_ref().and_then(|(_, rx)| rx.wait(idle))
    }

    fn add_timer(&mut self, interval: Duration) -> Result<RepeatingTimer> {
        let timer = RepeatingTimer::start(interval, self.event_sink()?)?;
        HeadlessMonitor::bump(&self.monitor.state.timers_added);
        Ok(timer)
    }

    fn remove_timer(&mut self, timer: RepeatingTimer) {
        timer.stop();
        HeadlessMonitor::bump(&self.monitor.state.timers_removed);
    }

    fn destroy_window(&mut self, window: Self::Window) {
        tracing::debug!(title = %window.title, "headless window destroyed");
        HeadlessMonitor::bump(&self.monitor.state.windows_destroyed);
    }

    fn shutdown(&mut self) {
        self.queue = None;
        HeadlessMonitor::bump(&self.monitor.state.shutdowns);
    }
}
