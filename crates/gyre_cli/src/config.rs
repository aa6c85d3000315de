//! Gyre configuration file handling
//!
//! `gyre.toml` has two tables, both optional:
//!
//! ```toml
//! [window]
//! title = "Gyre"
//! width = 640
//! height = 480
//!
//! [animation]
//! interval_ms = 25
//! step = 0.01
//! ```

use anyhow::{Context, Result};
use gyre_app::{ShellConfig, WindowConfig};
use gyre_platform::WindowPosition;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "gyre.toml";

/// Contents of `gyre.toml`
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GyreConfig {
    pub window: WindowSection,
    pub animation: AnimationSection,
}

/// `[window]` table
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WindowSection {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Top-left corner; the window is centered when unset
    pub x: Option<i32>,
    pub y: Option<i32>,
}

impl Default for WindowSection {
    fn default() -> Self {
        let window = WindowConfig::default();
        Self {
            title: window.title,
            width: window.width,
            height: window.height,
            x: None,
            y: None,
        }
    }
}

/// `[animation]` table
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationSection {
    /// Delay between frames in milliseconds
    pub interval_ms: u64,
    /// Rotation per frame in radians
    pub step: f64,
    /// Stop after this many frames
    pub frames: Option<u64>,
}

impl Default for AnimationSection {
    fn default() -> Self {
        Self {
            interval_ms: gyre_app::DEFAULT_FRAME_INTERVAL.as_millis() as u64,
            step: gyre_app::DEFAULT_ROTATION_STEP,
            frames: None,
        }
    }
}

impl GyreConfig {
    /// Load a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load `path` if given, else `gyre.toml` in `dir` if present, else defaults
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let default_path = dir.join(CONFIG_FILE);
        if default_path.exists() {
            return Self::load(&default_path);
        }

        Ok(Self::default())
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Build the shell configuration
    pub fn shell_config(&self) -> Result<ShellConfig> {
        let window = &self.window;
        let animation = &self.animation;

        if window.width == 0 || window.height == 0 {
            anyhow::bail!("Invalid window size {}x{}", window.width, window.height);
        }
        if animation.interval_ms == 0 {
            anyhow::bail!("Frame interval must be at least 1 ms");
        }
        if !animation.step.is_finite() {
            anyhow::bail!("Rotation step must be a finite number");
        }

        let position = match (window.x, window.y) {
            (Some(x), Some(y)) => WindowPosition::At { x, y },
            (None, None) => WindowPosition::Centered,
            _ => anyhow::bail!("Window position needs both x and y"),
        };

        let window_config = WindowConfig::new(window.title.clone())
            .size(window.width, window.height)
            .position(position);

        let mut config = ShellConfig::new(window_config)
            .frame_interval(Duration::from_millis(animation.interval_ms))
            .rotation_step(animation.step);
        config.max_frames = animation.frames;
        Ok(config)
    }
}
