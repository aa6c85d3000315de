//! Window abstraction and configuration
//!
//! Windows are fixed-size; surfaces keep the size they were created with.

/// Where a new window is placed on screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WindowPosition {
    /// Centered on the primary display
    #[default]
    Centered,
    /// Explicit top-left position in physical pixels
    At { x: i32, y: i32 },
}

/// Window configuration
#[derive(Clone, Debug, PartialEq)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Drawable width in physical pixels
    pub width: u32,
    /// Drawable height in physical pixels
    pub height: u32,
    /// Initial placement
    pub position: WindowPosition,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Gyre".to_string(),
            width: 640,
            height: 480,
            position: WindowPosition::Centered,
        }
    }
}

impl WindowConfig {
    /// Create a new window configuration with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the window title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the window size
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the initial position
    pub fn position(mut self, position: WindowPosition) -> Self {
        self.position = position;
        self
    }
}

/// Window abstraction trait
///
/// Implemented by backend-specific window types.
pub trait Window {
    /// Drawable size in physical pixels
    fn size(&self) -> (u32, u32);

    /// Current window title
    fn title(&self) -> String;
}
