//! Shell tests against the headless backend
//!
//! Events are scripted up front. The real frame timer runs with a long
//! interval so it never fires unless a test asks for it.

use std::time::Duration;

use gyre_paint::{DrawCommand, RecordingContext, Source};
use gyre_platform::{Event, InputEvent, WindowEvent};

use crate::prelude::*;

const QUIET_INTERVAL: Duration = Duration::from_secs(3600);
const IDLE: Duration = Duration::from_millis(50);

fn quiet_config() -> ShellConfig {
    ShellConfig::default().frame_interval(QUIET_INTERVAL)
}

fn headless(config: HeadlessConfig) -> (HeadlessPlatform, HeadlessMonitor) {
    let platform = HeadlessPlatform::new(config);
    let monitor = platform.monitor();
    (platform, monitor)
}

fn scripted(events: impl IntoIterator<Item = Event>) -> (HeadlessPlatform, HeadlessMonitor) {
    headless(HeadlessConfig::default().idle_timeout(IDLE).script(events))
}

fn idle() -> (HeadlessPlatform, HeadlessMonitor) {
    scripted(std::iter::empty())
}

fn ticks(n: usize) -> impl Iterator<Item = Event> {
    std::iter::repeat(Event::Timer).take(n)
}

fn channels(pixel: u32) -> (u8, u8, u8) {
    ((pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8)
}

#[test]
fn test_initialize_reports_surface() {
    let (platform, monitor) = idle();
    let mut shell = AnimationShell::new(platform, quiet_config());

    let ready = shell.initialize(640, 480).expect("initialize");
    assert_eq!(ready.surface_size, (640, 480));
    assert_eq!(ready.platform, "headless");
    assert!(shell.is_initialized());
    assert!(!shell.state().is_running());

    assert_eq!(monitor.inits(), 1);
    assert_eq!(monitor.windows_created(), 1);
    assert_eq!(monitor.surfaces_created(), 1);
    assert_eq!(monitor.timers_added(), 1);
}

#[test]
fn test_initialize_twice_keeps_resources() {
    let (platform, monitor) = idle();
    let mut shell = AnimationShell::new(platform, quiet_config());

    shell.initialize(320, 200).expect("first initialize");
    let ready = shell.initialize(640, 480).expect("second initialize");
    assert_eq!(ready.surface_size, (320, 200));
    assert_eq!(monitor.windows_created(), 1);
    assert_eq!(monitor.timers_added(), 1);
}

#[test]
fn test_hundred_ticks() {
    let (platform, monitor) = scripted(ticks(100).chain([Event::Quit]));
    let mut shell = AnimationShell::new(platform, quiet_config());

    assert_eq!(shell.run(640, 480), ExitStatus::Success);
    assert_eq!(shell.state().ticks(), 100);
    assert!((shell.state().rotation_angle() - 1.0).abs() < 1e-9);
    assert_eq!(
        shell.stats(),
        FrameStats {
            rendered: 100,
            painted: 100,
            skipped: 0,
            present_failures: 0,
        }
    );
    assert_eq!(monitor.frames_presented(), 100);
    assert!(!shell.state().is_running());
}

#[test]
fn test_quit_before_tick_renders_nothing() {
    let (platform, monitor) = scripted([Event::Quit, Event::Timer, Event::Timer]);
    let mut shell = AnimationShell::new(platform, quiet_config());

    assert_eq!(shell.run(640, 480), ExitStatus::Success);
    assert_eq!(shell.state().ticks(), 0);
    assert_eq!(shell.stats().rendered, 0);
    assert_eq!(monitor.frames_presented(), 0);
}

#[test]
fn test_no_frames_after_shutdown() {
    let (platform, monitor) = scripted([Event::Timer, Event::Timer, Event::Quit, Event::Timer]);
    let mut shell = AnimationShell::new(platform, quiet_config());

    shell.run(640, 480);
    assert_eq!(monitor.frames_presented(), 2);

    // Late ticks are dropped once the loop has stopped
    shell.handle_event(Event::Timer);
    shell.advance_frame();
    assert_eq!(shell.state().ticks(), 2);
    assert_eq!(monitor.frames_presented(), 2);
}

#[test]
fn test_close_request_stops_loop() {
    let (platform, monitor) = scripted([
        Event::Timer,
        Event::Window(WindowEvent::CloseRequested),
        Event::Timer,
    ]);
    let mut shell = AnimationShell::new(platform, quiet_config());

    assert_eq!(shell.run(640, 480), ExitStatus::Success);
    assert_eq!(monitor.frames_presented(), 1);
}

#[test]
fn test_other_events_ignored() {
    let (platform, monitor) = scripted([
        Event::Window(WindowEvent::Exposed),
        Event::Window(WindowEvent::Focused(true)),
        Event::Input(InputEvent::MouseMoved { x: 4.0, y: 2.0 }),
        Event::Timer,
        Event::Window(WindowEvent::Resized {
            width: 800,
            height: 600,
        }),
        Event::Quit,
    ]);
    let mut shell = AnimationShell::new(platform, quiet_config());

    shell.run(640, 480);
    assert_eq!(shell.state().ticks(), 1);
    assert_eq!(monitor.frames_presented(), 1);
}

#[test]
fn test_exhausted_source_ends_run() {
    let (platform, monitor) = scripted(ticks(3));
    let mut shell = AnimationShell::new(platform, quiet_config());

    assert_eq!(shell.run(640, 480), ExitStatus::Success);
    assert_eq!(monitor.frames_presented(), 3);
}

#[test]
fn test_tick_before_loop_is_dropped() {
    let (platform, monitor) = idle();
    let mut shell = AnimationShell::new(platform, quiet_config());
    shell.initialize(640, 480).expect("initialize");

    shell.handle_event(Event::Timer);
    assert_eq!(shell.state().ticks(), 0);
    assert_eq!(monitor.frames_presented(), 0);
}

#[test]
fn test_event_loop_requires_initialize() {
    let (platform, monitor) = scripted(ticks(2));
    let mut shell = AnimationShell::new(platform, quiet_config());

    shell.run_event_loop();
    assert_eq!(shell.state().ticks(), 0);
    assert_eq!(monitor.frames_presented(), 0);
}

#[test]
fn test_frame_limit() {
    let (platform, monitor) = scripted(ticks(10));
    let mut shell = AnimationShell::new(platform, quiet_config().max_frames(3));

    assert_eq!(shell.run(640, 480), ExitStatus::Success);
    assert_eq!(shell.state().ticks(), 3);
    assert_eq!(monitor.frames_presented(), 3);
}

#[test]
fn test_zero_frame_limit_renders_nothing() {
    let (platform, monitor) = scripted(ticks(5));
    let mut shell = AnimationShell::new(platform, quiet_config().max_frames(0));

    assert_eq!(shell.run(64, 48), ExitStatus::Success);
    assert_eq!(shell.state().ticks(), 0);
    assert_eq!(shell.stats().rendered, 0);
    assert_eq!(monitor.frames_presented(), 0);
}

#[test]
fn test_frame_limit_stops_on_last_frame() {
    let (platform, monitor) = scripted(ticks(1).chain([Event::Quit]));
    let mut shell = AnimationShell::new(platform, quiet_config().max_frames(1));

    shell.initialize(64, 48).expect("initialize");
    shell.run_event_loop();
    assert_eq!(shell.state().ticks(), 1);
    assert!(!shell.state().is_running());
    assert_eq!(monitor.frames_presented(), 1);
}

#[test]
fn test_init_failure() {
    let (platform, monitor) = headless(HeadlessConfig::default().fail_init());
    let mut shell = AnimationShell::new(platform, quiet_config());

    assert!(matches!(
        shell.initialize(640, 480),
        Err(InitError::WindowingUnavailable(_))
    ));
    assert_eq!(shell.run(640, 480), ExitStatus::Failure);
    assert_eq!(monitor.windows_created(), 0);
    assert_eq!(monitor.timers_added(), 0);
    assert_eq!(monitor.frames_presented(), 0);
    assert_eq!(monitor.shutdowns(), 0);
}

#[test]
fn test_window_failure_releases_subsystem() {
    let (platform, monitor) = idle();
    let mut shell = AnimationShell::new(platform, quiet_config());

    assert!(matches!(
        shell.initialize(0, 480),
        Err(InitError::WindowUnavailable(_))
    ));
    assert_eq!(monitor.inits(), 1);
    assert_eq!(monitor.shutdowns(), 1);
    assert_eq!(monitor.timers_added(), 0);
}

#[test]
fn test_surface_failure_releases_window() {
    let (platform, monitor) = headless(HeadlessConfig::default().fail_surface());
    let mut shell = AnimationShell::new(platform, quiet_config());

    assert_eq!(shell.run(640, 480), ExitStatus::Failure);
    assert!(!shell.is_initialized());
    assert_eq!(monitor.windows_created(), 1);
    assert_eq!(monitor.windows_destroyed(), 1);
    assert_eq!(monitor.shutdowns(), 1);
    assert_eq!(monitor.timers_added(), 0);
    assert_eq!(monitor.frames_presented(), 0);
}

#[test]
fn test_teardown_is_idempotent() {
    let (platform, monitor) = idle();
    let mut shell = AnimationShell::new(platform, quiet_config());
    shell.initialize(640, 480).expect("initialize");

    shell.teardown();
    shell.teardown();
    assert!(!shell.is_initialized());
    drop(shell);

    assert_eq!(monitor.timers_removed(), 1);
    assert_eq!(monitor.windows_destroyed(), 1);
    assert_eq!(monitor.shutdowns(), 1);
}

#[test]
fn test_teardown_without_initialize() {
    let (platform, monitor) = idle();
    let mut shell = AnimationShell::new(platform, quiet_config());

    shell.teardown();
    assert_eq!(monitor.shutdowns(), 0);
    assert_eq!(monitor.windows_destroyed(), 0);
}

#[test]
fn test_drop_releases_resources() {
    let (platform, monitor) = scripted([Event::Timer, Event::Quit]);
    {
        let mut shell = AnimationShell::new(platform, quiet_config());
        shell.run(640, 480);
        assert_eq!(monitor.timers_removed(), 0);
    }
    assert_eq!(monitor.timers_removed(), 1);
    assert_eq!(monitor.windows_destroyed(), 1);
    assert_eq!(monitor.shutdowns(), 1);
}

#[test]
fn test_frame_pixels() {
    let (platform, monitor) = scripted([Event::Timer, Event::Quit]);
    let mut shell = AnimationShell::new(platform, quiet_config());
    shell.run(640, 480);

    let frame = monitor.last_frame().expect("a presented frame");
    assert_eq!((frame.width, frame.height), (640, 480));

    // Background
    for (x, y) in [(0, 0), (639, 0), (0, 479), (639, 479), (100, 240)] {
        assert_eq!(frame.pixel(x, y), Some(0), "pixel ({x}, {y})");
    }

    // Gradient midpoint sits at the window center
    let (r, g, b) = channels(frame.pixel(320, 240).unwrap());
    assert_eq!(r, 255);
    assert!(g > 230, "green {g}");
    assert!(b < 20, "blue {b}");

    // White end near the top-left corner, red end near the bottom-right
    let (r, g, b) = channels(frame.pixel(282, 202).unwrap());
    assert!(r > 230 && g > 230 && b > 150, "({r}, {g}, {b})");
    let (r, g, b) = channels(frame.pixel(357, 277).unwrap());
    assert!(r > 230 && g < 100 && b < 20, "({r}, {g}, {b})");
}

#[test]
fn test_frame_rotates() {
    let (platform, monitor) = scripted([Event::Timer, Event::Quit]);
    let config = quiet_config().rotation_step(std::f64::consts::FRAC_PI_4);
    let mut shell = AnimationShell::new(platform, config);
    shell.run(640, 480);

    let frame = monitor.last_frame().expect("a presented frame");

    // An eighth turn pulls the corners in off the diagonals
    // and pushes the shape out along the axes
    assert_eq!(frame.pixel(272, 192), Some(0));
    assert_eq!(frame.pixel(367, 287), Some(0));
    assert_ne!(frame.pixel(320, 185), Some(0));
    assert_ne!(frame.pixel(375, 240), Some(0));
}

#[test]
fn test_unpaintable_surface_still_presents() {
    let (platform, monitor) = headless(
        HeadlessConfig::default()
            .idle_timeout(IDLE)
            .surface_size(0, 0)
            .script(ticks(2).chain([Event::Quit])),
    );
    let mut shell = AnimationShell::new(platform, quiet_config());

    let ready = shell.initialize(640, 480).expect("initialize");
    assert_eq!(ready.surface_size, (0, 0));
    shell.run_event_loop();

    let stats = shell.stats();
    assert_eq!(stats.rendered, 2);
    assert_eq!(stats.painted, 0);
    assert_eq!(stats.skipped, 2);
    assert_eq!(monitor.frames_presented(), 2);
    assert_eq!(shell.state().ticks(), 2);
}

#[test]
fn test_paint_command_order() {
    let (platform, _monitor) = scripted([Event::Timer, Event::Timer, Event::Quit]);
    let mut shell = AnimationShell::new(platform, quiet_config());
    shell.run(640, 480);

    let mut canvas = RecordingContext::new(640.0, 480.0);
    shell.paint(&mut canvas);

    let kinds: Vec<&str> = canvas
        .commands()
        .iter()
        .map(|command| match command {
            DrawCommand::SetSource(Source::Solid(_)) => "solid",
            DrawCommand::SetSource(Source::Linear(_)) => "gradient",
            DrawCommand::FillAll => "fill_all",
            DrawCommand::Save => "save",
            DrawCommand::Restore => "restore",
            DrawCommand::Transform(_) => "transform",
            DrawCommand::FillRound { .. } => "fill_round",
        })
        .collect();
    assert_eq!(
        kinds,
        [
            "solid",
            "fill_all",
            "save",
            "transform",
            "gradient",
            "fill_round",
            "restore"
        ]
    );
    assert_eq!(canvas.save_depth(), 0);
}

#[test]
fn test_timer_drives_frames() {
    let (platform, monitor) = headless(HeadlessConfig::default().idle_timeout(Duration::from_secs(2)));
    let config = ShellConfig::default()
        .frame_interval(Duration::from_millis(1))
        .max_frames(5);
    let mut shell = AnimationShell::new(platform, config);

    assert_eq!(shell.run(64, 48), ExitStatus::Success);
    assert_eq!(shell.state().ticks(), 5);
    assert!((shell.state().rotation_angle() - 0.05).abs() < 1e-12);
    assert_eq!(monitor.frames_presented(), 5);

    shell.teardown();
    assert_eq!(monitor.timers_removed(), 1);
}
