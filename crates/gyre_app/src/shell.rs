//! Animation shell
//!
//! `AnimationShell` owns a platform backend and drives the animation:
//! acquire a window, its surface and a repeating frame timer, then pull
//! events until shutdown. Every timer tick advances the rotation by one
//! step and paints a frame.
//!
//! Resources are released in reverse order of acquisition by
//! [`AnimationShell::teardown`], which also runs on drop.

use gyre_paint::{Canvas, PaintContext, RasterTarget};
use gyre_platform::{Event, Platform, RepeatingTimer, Surface};

use crate::config::ShellConfig;
use crate::error::{ExitStatus, FrameError, InitError};
use crate::scene;
use crate::state::AnimationState;

/// Result of a successful [`AnimationShell::initialize`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ready {
    /// Drawable surface size in pixels
    pub surface_size: (u32, u32),
    /// Name of the backend in use
    pub platform: &'static str,
}

/// Frame counters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Frames rendered, painted or not
    pub rendered: u64,
    /// Frames with the scene painted
    pub painted: u64,
    /// Frames presented without the scene
    pub skipped: u64,
    /// Frames the backend failed to present
    pub present_failures: u64,
}

struct Resources<P: Platform> {
    window: P::Window,
    surface: P::Surface,
    timer: RepeatingTimer,
}

/// Window plus frame timer that paints a rotating rounded rectangle
pub struct AnimationShell<P: Platform> {
    platform: P,
    config: ShellConfig,
    state: AnimationState,
    resources: Option<Resources<P>>,
    subsystem_started: bool,
    stats: FrameStats,
    // Set while consecutive frames fail to paint
    paint_failing: bool,
}

impl<P: Platform> AnimationShell<P> {
    /// Create an idle shell; nothing is acquired until [`initialize`]
    ///
    /// [`initialize`]: AnimationShell::initialize
    pub fn new(platform: P, config: ShellConfig) -> Self {
        let state = AnimationState::new(config.rotation_step, config.frame_interval);
        Self {
            platform,
            config,
            state,
            resources: None,
            subsystem_started: false,
            stats: FrameStats::default(),
            paint_failing: false,
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Whether window, surface and timer are held
    pub fn is_initialized(&self) -> bool {
        self.resources.is_some()
    }

    /// Acquire the window, its surface and the frame timer
    ///
    /// On failure everything acquired so far is released again. Calling
    /// this on an initialized shell reports the current surface.
    pub fn initialize(&mut self, width: u32, height: u32) -> Result<Ready, InitError> {
        if let Some(resources) = &self.resources {
            tracing::debug!("shell already initialized");
            return Ok(Ready {
                surface_size: resources.surface.size(),
                platform: self.platform.name(),
            });
        }

        self.platform
            .init()
            .map_err(InitError::WindowingUnavailable)?;
        self.subsystem_started = true;

        let window_config = self.config.window.clone().size(width, height);
        let window = match self.platform.create_window(&window_config) {
            Ok(window) => window,
            Err(e) => {
                self.release_subsystem();
                return Err(InitError::WindowUnavailable(e));
            }
        };

        let surface = match self.platform.create_surface(&window) {
            Ok(surface) => surface,
            Err(e) => {
                self.platform.destroy_window(window);
                self.release_subsystem();
                return Err(InitError::SurfaceUnavailable(e));
            }
        };

        let timer = match self.platform.add_timer(self.config.frame_interval) {
            Ok(timer) => timer,
            Err(e) => {
                drop(surface);
                self.platform.destroy_window(window);
                self.release_subsystem();
                return Err(InitError::TimerUnavailable(e));
            }
        };

        let surface_size = surface.size();
        tracing::info!(
            platform = self.platform.name(),
            width = surface_size.0,
            height = surface_size.1,
            interval_ms = self.config.frame_interval.as_millis() as u64,
            "shell initialized"
        );

        self.resources = Some(Resources {
            window,
            surface,
            timer,
        });

        Ok(Ready {
            surface_size,
            platform: self.platform.name(),
        })
    }

    /// Initialize, then process events until shutdown
    pub fn run(&mut self, width: u32, height: u32) -> ExitStatus {
        if let Err(e) = self.initialize(width, height) {
            tracing::error!("{}", e);
            return ExitStatus::Failure;
        }
        self.run_event_loop();
        ExitStatus::Success
    }

    /// Pull events and dispatch them until shutdown or the source runs dry
    pub fn run_event_loop(&mut self) {
        if self.resources.is_none() {
            tracing::warn!("event loop started on an uninitialized shell");
            return;
        }

        self.state.set_running(true);
        while self.state.is_running() {
            match self.platform.wait_event() {
                Some(event) => self.handle_event(event),
                None => {
                    tracing::debug!("event source exhausted");
                    break;
                }
            }
        }
        self.state.set_running(false);

        tracing::info!(
            ticks = self.state.ticks(),
            painted = self.stats.painted,
            skipped = self.stats.skipped,
            "event loop finished"
        );
    }

    /// Dispatch one event
    pub fn handle_event(&mut self, event: Event) {
        if event.is_shutdown() {
            tracing::debug!(?event, "shutdown requested");
            self.state.set_running(false);
        } else if event.is_timer() {
            self.advance_frame();
        } else {
            tracing::trace!(?event, "event ignored");
        }
    }

    /// Step the rotation once and render a frame
    ///
    /// Does nothing unless the event loop is running.
    pub fn advance_frame(&mut self) {
        if self.frame_limit_reached() {
            return;
        }
        let Some(angle) = self.state.advance() else {
            tracing::trace!("tick dropped, shell not running");
            return;
        };
        tracing::trace!(tick = self.state.ticks(), angle, "frame tick");

        self.render_frame();
        self.frame_limit_reached();
    }

    /// Stop the loop once `max_frames` ticks have been consumed
    fn frame_limit_reached(&mut self) -> bool {
        match self.config.max_frames {
            Some(max) if self.state.ticks() >= max => {
                if self.state.is_running() {
                    tracing::info!(frames = max, "frame limit reached");
                    self.state.set_running(false);
                }
                true
            }
            _ => false,
        }
    }

    /// Paint the current angle into the surface and present it
    ///
    /// A frame that cannot be painted is still presented.
    pub fn render_frame(&mut self) {
        if !self.state.is_running() {
            return;
        }
        let angle = self.state.rotation_angle();
        let Some(resources) = self.resources.as_mut() else {
            return;
        };

        match paint_surface(&mut resources.surface, angle) {
            Ok(()) => {
                self.stats.painted += 1;
                if self.paint_failing {
                    tracing::info!("painting resumed");
                    self.paint_failing = false;
                }
            }
            Err(e) => {
                self.stats.skipped += 1;
                if self.paint_failing {
                    tracing::debug!(error = %e, "frame presented without scene");
                } else {
                    tracing::warn!(error = %e, "frame presented without scene");
                    self.paint_failing = true;
                }
            }
        }

        if let Err(e) = resources.surface.present() {
            self.stats.present_failures += 1;
            tracing::warn!(error = %FrameError::Present(e), "frame dropped");
        }
        self.stats.rendered += 1;
    }

    /// Paint the scene at the current angle onto any canvas
    pub fn paint(&self, canvas: &mut dyn Canvas) {
        scene::paint_scene(canvas, self.state.rotation_angle());
    }

    /// Release timer, surface, window and subsystem
    ///
    /// Safe to call any number of times.
    pub fn teardown(&mut self) {
        self.state.set_running(false);
        if let Some(Resources {
            window,
            surface,
            timer,
        }) = self.resources.take()
        {
            self.platform.remove_timer(timer);
            drop(surface);
            self.platform.destroy_window(window);
            tracing::debug!("shell resources released");
        }
        self.release_subsystem();
    }

    fn release_subsystem(&mut self) {
        if self.subsystem_started {
            self.platform.shutdown();
            self.subsystem_started = false;
        }
    }
}

impl<P: Platform> Drop for AnimationShell<P> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Paint one frame into `surface`; the lock is released on return
fn paint_surface<S: Surface>(surface: &mut S, angle: f64) -> Result<(), FrameError> {
    let mut lock = surface.lock().map_err(FrameError::Lock)?;
    let (width, height, stride) = (lock.width(), lock.height(), lock.stride());
    tracing::trace!(format = ?lock.format(), width, height, stride, "surface locked");
    let target = RasterTarget::new(lock.pixels_mut(), width, height, stride);
    let mut ctx = PaintContext::begin(target).map_err(FrameError::PaintContext)?;
    scene::paint_scene(&mut ctx, angle);
    ctx.end();
    Ok(())
}
