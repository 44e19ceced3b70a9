//! Canonical input events handed to subscribers
//!
//! Each record describes one occurrence. The dispatcher builds it, passes it
//! by reference to every subscriber and drops it afterwards.

use super::keys::{InputAction, KeyCode, Modifiers, MouseButton};

/// Keyboard key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Canonical key
    pub key: KeyCode,
    /// Press, release or auto-repeat
    pub action: InputAction,
    /// Platform scancode, opaque to the dispatcher
    pub scancode: i32,
    /// Modifiers held at the time of the event
    pub mods: Modifiers,
}

/// Mouse button transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseButtonEvent {
    /// Button that changed
    pub button: MouseButton,
    /// Press or release
    pub action: InputAction,
    /// Modifiers held at the time of the event
    pub mods: Modifiers,
    /// Cached cursor X when the button changed
    pub x: f32,
    /// Cached cursor Y when the button changed
    pub y: f32,
}

/// Cursor motion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseMoveEvent {
    /// New cursor X
    pub x: f32,
    /// New cursor Y
    pub y: f32,
    /// Horizontal motion since the last frame
    pub delta_x: f32,
    /// Vertical motion since the last frame
    pub delta_y: f32,
}

/// Wheel or trackpad scroll
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseScrollEvent {
    /// Horizontal scroll amount
    pub offset_x: f32,
    /// Vertical scroll amount
    pub offset_y: f32,
}
