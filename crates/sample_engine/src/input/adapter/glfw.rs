//! GLFW adapter
//!
//! GLFW key codes already use the canonical numbering, so keys go through
//! [`KeyCode::from_raw`]. Cursor events report absolute positions only, which
//! leaves delta computation to the dispatcher.

use ::glfw::{Action, Key, Modifiers as GlfwModifiers, MouseButton as GlfwMouseButton, WindowEvent};

use super::InputAdapter;
use crate::input::{InputAction, InputDispatcher, KeyCode, Modifiers, MouseButton};

/// Translate a GLFW key
pub fn translate_key(key: Key) -> KeyCode {
    KeyCode::from_raw(key as i32)
}

/// Translate a GLFW action
pub fn translate_action(action: Action) -> InputAction {
    match action {
        Action::Release => InputAction::Release,
        Action::Press => InputAction::Press,
        Action::Repeat => InputAction::Repeat,
    }
}

/// Translate a GLFW mouse button
pub fn translate_mouse_button(button: GlfwMouseButton) -> MouseButton {
    match button {
        GlfwMouseButton::Button1 => MouseButton::Left,
        GlfwMouseButton::Button2 => MouseButton::Right,
        GlfwMouseButton::Button3 => MouseButton::Middle,
        GlfwMouseButton::Button4 => MouseButton::Button4,
        GlfwMouseButton::Button5 => MouseButton::Button5,
        GlfwMouseButton::Button6 => MouseButton::Button6,
        GlfwMouseButton::Button7 => MouseButton::Button7,
        GlfwMouseButton::Button8 => MouseButton::Button8,
    }
}

/// Translate GLFW modifier bits
pub fn translate_modifiers(mods: GlfwModifiers) -> Modifiers {
    let pairs = [
        (GlfwModifiers::Shift, Modifiers::SHIFT),
        (GlfwModifiers::Control, Modifiers::CONTROL),
        (GlfwModifiers::Alt, Modifiers::ALT),
        (GlfwModifiers::Super, Modifiers::SUPER),
        (GlfwModifiers::CapsLock, Modifiers::CAPS_LOCK),
        (GlfwModifiers::NumLock, Modifiers::NUM_LOCK),
    ];

    pairs
        .into_iter()
        .filter(|(native, _)| mods.contains(*native))
        .fold(Modifiers::empty(), |acc, (_, canonical)| acc | canonical)
}

/// Forwards `glfw::WindowEvent`s to the dispatcher
///
/// Enable key, mouse button, cursor position and scroll polling on the
/// window, otherwise GLFW never queues those events.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlfwInputAdapter;

impl InputAdapter for GlfwInputAdapter {
    type NativeEvent = WindowEvent;

    #[allow(clippy::cast_possible_truncation)]
    fn forward(&mut self, event: &WindowEvent, dispatcher: &mut InputDispatcher) -> bool {
        match event {
            WindowEvent::Key(key, scancode, action, mods) => {
                dispatcher.process_key_event(
                    translate_key(*key),
                    translate_action(*action),
                    *scancode,
                    translate_modifiers(*mods),
                );
            }
            WindowEvent::MouseButton(button, action, mods) => {
                dispatcher.process_mouse_button_event(
                    translate_mouse_button(*button),
                    translate_action(*action),
                    translate_modifiers(*mods),
                );
            }
            WindowEvent::CursorPos(x, y) => {
                dispatcher.process_mouse_move_event(*x as f32, *y as f32, 0.0, 0.0);
            }
            WindowEvent::Scroll(x, y) => {
                dispatcher.process_mouse_scroll_event(*x as f32, *y as f32);
            }
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::adapter::pump_frame;

    #[test]
    fn test_glfw_keys_share_canonical_numbering() {
        assert_eq!(translate_key(Key::A), KeyCode::A);
        assert_eq!(translate_key(Key::Num5), KeyCode::Num5);
        assert_eq!(translate_key(Key::Escape), KeyCode::Escape);
        assert_eq!(translate_key(Key::F25), KeyCode::F25);
        assert_eq!(translate_key(Key::KpEnter), KeyCode::KpEnter);
        assert_eq!(translate_key(Key::RightSuper), KeyCode::RightSuper);
        assert_eq!(translate_key(Key::Unknown), KeyCode::Unknown);
    }

    #[test]
    fn test_glfw_modifiers() {
        let mods = translate_modifiers(GlfwModifiers::Shift | GlfwModifiers::Alt);
        assert_eq!(mods, Modifiers::SHIFT | Modifiers::ALT);
        assert_eq!(translate_modifiers(GlfwModifiers::empty()), Modifiers::empty());
    }

    #[test]
    fn test_glfw_events_reach_dispatcher() {
        let mut adapter = GlfwInputAdapter;
        let mut dispatcher = InputDispatcher::new();

        let events = vec![
            WindowEvent::CursorPos(100.0, 100.0),
            WindowEvent::Key(Key::W, 17, Action::Press, GlfwModifiers::empty()),
            WindowEvent::MouseButton(GlfwMouseButton::Button2, Action::Press, GlfwModifiers::Control),
            WindowEvent::Scroll(0.0, 2.0),
            WindowEvent::Focus(true),
        ];
        let forwarded = pump_frame(&mut adapter, &mut dispatcher, events);

        assert_eq!(forwarded, 4);
        assert!(dispatcher.is_key_pressed(KeyCode::W));
        assert!(dispatcher.is_mouse_button_pressed(MouseButton::Right));
        assert_eq!(dispatcher.mouse_position(), (100.0, 100.0));
        assert_eq!(dispatcher.scroll(), (0.0, 2.0));

        let events = vec![WindowEvent::CursorPos(110.0, 90.0)];
        pump_frame(&mut adapter, &mut dispatcher, events);
        assert_eq!(dispatcher.mouse_delta(), (10.0, 10.0));
    }
}
