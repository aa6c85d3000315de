//! Shell configuration

use std::time::Duration;

use gyre_platform::WindowConfig;

/// Default delay between frame ticks
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(25);

/// Default rotation added per tick, in radians
pub const DEFAULT_ROTATION_STEP: f64 = 0.01;

/// Configuration for an [`AnimationShell`](crate::AnimationShell)
#[derive(Clone, Debug, PartialEq)]
pub struct ShellConfig {
    /// Window title, placement and default size
    pub window: WindowConfig,
    /// Delay between frame ticks
    pub frame_interval: Duration,
    /// Radians added to the rotation angle per tick
    pub rotation_step: f64,
    /// Stop after this many frames; `None` runs until shutdown
    pub max_frames: Option<u64>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            frame_interval: DEFAULT_FRAME_INTERVAL,
            rotation_step: DEFAULT_ROTATION_STEP,
            max_frames: None,
        }
    }
}

impl ShellConfig {
    pub fn new(window: WindowConfig) -> Self {
        Self {
            window,
            ..Default::default()
        }
    }

    pub fn frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    pub fn rotation_step(mut self, step: f64) -> Self {
        self.rotation_step = step;
        self
    }

    pub fn max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.frame_interval, Duration::from_millis(25));
        assert_eq!(config.rotation_step, 0.01);
        assert_eq!(config.max_frames, None);
        assert_eq!((config.window.width, config.window.height), (640, 480));
    }

    #[test]
    fn test_builders() {
        let config = ShellConfig::new(WindowConfig::new("spin"))
            .frame_interval(Duration::from_millis(16))
            .rotation_step(0.05)
            .max_frames(10);
        assert_eq!(config.window.title, "spin");
        assert_eq!(config.frame_interval, Duration::from_millis(16));
        assert_eq!(config.rotation_step, 0.05);
        assert_eq!(config.max_frames, Some(10));
    }
}
