//! Desktop input conversion (winit -> gyre_platform)

use gyre_platform::{InputEvent, Key, KeyState, MouseButton};
use winit::event::{ElementState, MouseButton as WinitMouseButton};
use winit::keyboard::{Key as WinitKey, NamedKey};

/// Convert winit mouse button to gyre MouseButton
pub fn convert_mouse_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Other(3),
        WinitMouseButton::Forward => MouseButton::Other(4),
        WinitMouseButton::Other(n) => MouseButton::Other(n),
    }
}

/// Convert winit element state to gyre KeyState
pub fn convert_key_state(state: ElementState) -> KeyState {
    match state {
        ElementState::Pressed => KeyState::Pressed,
        ElementState::Released => KeyState::Released,
    }
}

/// Convert winit key to gyre Key
pub fn convert_key(key: &WinitKey) -> Key {
    match key {
        WinitKey::Named(NamedKey::Escape) => Key::Escape,
        WinitKey::Named(NamedKey::Space) => Key::Space,
        WinitKey::Named(NamedKey::Enter) => Key::Enter,
        WinitKey::Character(c) => c.chars().next().map(Key::Char).unwrap_or(Key::Unknown),
        _ => Key::Unknown,
    }
}

/// Convert winit keyboard input to gyre InputEvent
pub fn keyboard(key: &WinitKey, state: ElementState) -> InputEvent {
    InputEvent::Keyboard {
        key: convert_key(key),
        state: convert_key_state(state),
    }
}

/// Convert mouse button input to gyre InputEvent
pub fn mouse_button(button: WinitMouseButton, state: ElementState) -> InputEvent {
    InputEvent::MouseButton {
        button: convert_mouse_button(button),
        state: convert_key_state(state),
    }
}

/// Convert mouse move to gyre InputEvent
pub fn mouse_moved(x: f32, y: f32) -> InputEvent {
    InputEvent::MouseMoved { x, y }
}
