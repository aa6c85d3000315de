//! Input event types for keyboard and mouse

/// Input events
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// A key was pressed or released
    Keyboard {
        /// The key
        key: Key,
        /// Pressed or released
        state: KeyState,
    },
    /// Mouse moved to position
    MouseMoved {
        /// X position in window coordinates
        x: f32,
        /// Y position in window coordinates
        y: f32,
    },
    /// Mouse button pressed or released
    MouseButton {
        /// Which button
        button: MouseButton,
        /// Pressed or released
        state: KeyState,
    },
}

/// Key press/release state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyState {
    /// Key was pressed
    Pressed,
    /// Key was released
    Released,
}

/// Mouse buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (scroll wheel click)
    Middle,
    /// Other button with index
    Other(u16),
}

/// Keys the shell can tell apart
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Space,
    Enter,
    Char(char),
    Unknown,
}
