//! SDL3 adapter
//!
//! Works on the raw values SDL3 reports (`SDL_Keycode`, `SDL_Keymod`, mouse
//! button indices), so it does not tie the crate to a particular SDL binding.
//! The caller drains its SDL queue, fills in [`SdlInputEvent`]s and hands
//! them to [`pump_frame`](super::pump_frame).
//!
//! SDL reports relative motion next to every absolute position. The adapter
//! sums it over the polling pass and forwards the running total as the
//! caller-supplied delta, so each move carries the motion since the pass
//! began, the same as a delta the dispatcher derives from positions.

use super::InputAdapter;
use crate::input::{InputAction, InputDispatcher, KeyCode, Modifiers, MouseButton};

/// Bit set on keycodes that have no character representation
const SCANCODE_MASK: u32 = 1 << 30;

const fn scancode_key(scancode: u32) -> u32 {
    scancode | SCANCODE_MASK
}

/// SDL keycodes that do not follow the ASCII letter/digit rule
const KEY_TABLE: &[(u32, KeyCode)] = &[
    (0x00, KeyCode::Unknown),
    (0x08, KeyCode::Backspace),
    (0x09, KeyCode::Tab),
    (0x0d, KeyCode::Enter),
    (0x1b, KeyCode::Escape),
    (0x20, KeyCode::Space),
    (0x27, KeyCode::Apostrophe),
    (0x2c, KeyCode::Comma),
    (0x2d, KeyCode::Minus),
    (0x2e, KeyCode::Period),
    (0x2f, KeyCode::Slash),
    (0x3b, KeyCode::Semicolon),
    (0x3d, KeyCode::Equal),
    (0x5b, KeyCode::LeftBracket),
    (0x5c, KeyCode::Backslash),
    (0x5d, KeyCode::RightBracket),
    (0x60, KeyCode::GraveAccent),
    (0x7f, KeyCode::Delete),
    (scancode_key(57), KeyCode::CapsLock),
    (scancode_key(58), KeyCode::F1),
    (scancode_key(59), KeyCode::F2),
    (scancode_key(60), KeyCode::F3),
    (scancode_key(61), KeyCode::F4),
    (scancode_key(62), KeyCode::F5),
    (scancode_key(63), KeyCode::F6),
    (scancode_key(64), KeyCode::F7),
    (scancode_key(65), KeyCode::F8),
    (scancode_key(66), KeyCode::F9),
    (scancode_key(67), KeyCode::F10),
    (scancode_key(68), KeyCode::F11),
    (scancode_key(69), KeyCode::F12),
    (scancode_key(70), KeyCode::PrintScreen),
    (scancode_key(71), KeyCode::ScrollLock),
    (scancode_key(72), KeyCode::Pause),
    (scancode_key(73), KeyCode::Insert),
    (scancode_key(74), KeyCode::Home),
    (scancode_key(75), KeyCode::PageUp),
    (scancode_key(77), KeyCode::End),
    (scancode_key(78), KeyCode::PageDown),
    (scancode_key(79), KeyCode::Right),
    (scancode_key(80), KeyCode::Left),
    (scancode_key(81), KeyCode::Down),
    (scancode_key(82), KeyCode::Up),
    (scancode_key(83), KeyCode::NumLock),
    (scancode_key(84), KeyCode::KpDivide),
    (scancode_key(85), KeyCode::KpMultiply),
    (scancode_key(86), KeyCode::KpSubtract),
    (scancode_key(87), KeyCode::KpAdd),
    (scancode_key(88), KeyCode::KpEnter),
    (scancode_key(89), KeyCode::Kp1),
    (scancode_key(90), KeyCode::Kp2),
    (scancode_key(91), KeyCode::Kp3),
    (scancode_key(92), KeyCode::Kp4),
    (scancode_key(93), KeyCode::Kp5),
    (scancode_key(94), KeyCode::Kp6),
    (scancode_key(95), KeyCode::Kp7),
    (scancode_key(96), KeyCode::Kp8),
    (scancode_key(97), KeyCode::Kp9),
    (scancode_key(98), KeyCode::Kp0),
    (scancode_key(99), KeyCode::KpDecimal),
    (scancode_key(100), KeyCode::World1),
    (scancode_key(101), KeyCode::Menu),
    (scancode_key(103), KeyCode::KpEqual),
    (scancode_key(104), KeyCode::F13),
    (scancode_key(105), KeyCode::F14),
    (scancode_key(106), KeyCode::F15),
    (scancode_key(107), KeyCode::F16),
    (scancode_key(108), KeyCode::F17),
    (scancode_key(109), KeyCode::F18),
    (scancode_key(110), KeyCode::F19),
    (scancode_key(111), KeyCode::F20),
    (scancode_key(112), KeyCode::F21),
    (scancode_key(113), KeyCode::F22),
    (scancode_key(114), KeyCode::F23),
    (scancode_key(115), KeyCode::F24),
    (scancode_key(224), KeyCode::LeftControl),
    (scancode_key(225), KeyCode::LeftShift),
    (scancode_key(226), KeyCode::LeftAlt),
    (scancode_key(227), KeyCode::LeftSuper),
    (scancode_key(228), KeyCode::RightControl),
    (scancode_key(229), KeyCode::RightShift),
    (scancode_key(230), KeyCode::RightAlt),
    (scancode_key(231), KeyCode::RightSuper),
];

/// `SDL_Keymod` bits and the canonical modifier each one maps to
const MOD_TABLE: &[(u16, Modifiers)] = &[
    (0x0001, Modifiers::SHIFT),     // LSHIFT
    (0x0002, Modifiers::SHIFT),     // RSHIFT
    (0x0040, Modifiers::CONTROL),   // LCTRL
    (0x0080, Modifiers::CONTROL),   // RCTRL
    (0x0100, Modifiers::ALT),       // LALT
    (0x0200, Modifiers::ALT),       // RALT
    (0x0400, Modifiers::SUPER),     // LGUI
    (0x0800, Modifiers::SUPER),     // RGUI
    (0x1000, Modifiers::NUM_LOCK),  // NUM
    (0x2000, Modifiers::CAPS_LOCK), // CAPS
];

/// Translate an `SDL_Keycode`
///
/// Letters arrive as lower-case ASCII and digits as ASCII digits; both map
/// onto the canonical letter/digit keys. Anything else not in the table
/// passes through as [`KeyCode::Other`].
#[allow(clippy::cast_possible_wrap)]
pub fn translate_key(keycode: u32) -> KeyCode {
    if let Some((_, key)) = KEY_TABLE.iter().find(|(native, _)| *native == keycode) {
        return *key;
    }

    u8::try_from(keycode)
        .ok()
        .and_then(|c| {
            KeyCode::from_ascii_letter(c)
                .filter(|_| c.is_ascii_lowercase())
                .or_else(|| KeyCode::from_ascii_digit(c))
        })
        .unwrap_or(KeyCode::Other(keycode as i32))
}

/// Translate a key-down/up pair into an action
pub const fn translate_key_action(down: bool, repeat: bool) -> InputAction {
    match (down, repeat) {
        (false, _) => InputAction::Release,
        (true, false) => InputAction::Press,
        (true, true) => InputAction::Repeat,
    }
}

/// Translate an SDL mouse button index (1 = left, 2 = middle, 3 = right, ...)
pub const fn translate_mouse_button(button: u8) -> Option<MouseButton> {
    match button {
        1 => Some(MouseButton::Left),
        2 => Some(MouseButton::Middle),
        3 => Some(MouseButton::Right),
        4 => Some(MouseButton::Button4),
        5 => Some(MouseButton::Button5),
        6 => Some(MouseButton::Button6),
        7 => Some(MouseButton::Button7),
        8 => Some(MouseButton::Button8),
        _ => None,
    }
}

/// Translate an `SDL_Keymod` mask
pub fn translate_modifiers(mods: u16) -> Modifiers {
    MOD_TABLE
        .iter()
        .filter(|(bit, _)| mods & bit != 0)
        .fold(Modifiers::empty(), |acc, (_, canonical)| acc | *canonical)
}

/// Input-relevant subset of the SDL3 event union
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SdlInputEvent {
    /// `SDL_EVENT_KEY_DOWN` / `SDL_EVENT_KEY_UP`
    Key {
        /// `SDL_Keycode`
        keycode: u32,
        /// `SDL_Scancode`
        scancode: i32,
        /// `SDL_Keymod`
        modifiers: u16,
        /// Key went down (false for key up)
        down: bool,
        /// Auto-repeat
        repeat: bool,
    },
    /// `SDL_EVENT_MOUSE_MOTION`
    MouseMotion {
        /// Absolute X
        x: f32,
        /// Absolute Y
        y: f32,
        /// Relative X motion
        xrel: f32,
        /// Relative Y motion
        yrel: f32,
    },
    /// `SDL_EVENT_MOUSE_BUTTON_DOWN` / `SDL_EVENT_MOUSE_BUTTON_UP`
    MouseButton {
        /// SDL button index
        button: u8,
        /// Button went down
        down: bool,
    },
    /// `SDL_EVENT_MOUSE_WHEEL`
    MouseWheel {
        /// Horizontal scroll
        x: f32,
        /// Vertical scroll
        y: f32,
        /// `SDL_MOUSEWHEEL_FLIPPED`
        flipped: bool,
    },
}

/// Forwards [`SdlInputEvent`]s to the dispatcher
///
/// SDL mouse button events carry no modifier state, so the adapter attaches
/// the modifiers seen on the most recent key event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SdlInputAdapter {
    modifiers: Modifiers,
    /// Relative motion summed since the pass began
    motion: (f32, f32),
}

impl SdlInputAdapter {
    /// Create an adapter with no modifiers held
    pub fn new() -> Self {
        Self::default()
    }

    /// Modifiers attached to the next mouse button event
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

impl InputAdapter for SdlInputAdapter {
    type NativeEvent = SdlInputEvent;

    fn begin_frame(&mut self) {
        self.motion = (0.0, 0.0);
    }

    fn forward(&mut self, event: &SdlInputEvent, dispatcher: &mut InputDispatcher) -> bool {
        match *event {
            SdlInputEvent::Key {
                keycode,
                scancode,
                modifiers,
                down,
                repeat,
            } => {
                self.modifiers = translate_modifiers(modifiers);
                dispatcher.process_key_event(
                    translate_key(keycode),
                    translate_key_action(down, repeat),
                    scancode,
                    self.modifiers,
                );
            }
            SdlInputEvent::MouseMotion { x, y, xrel, yrel } => {
                self.motion.0 += xrel;
                self.motion.1 += yrel;
                dispatcher.process_mouse_move_event(x, y, self.motion.0, self.motion.1);
            }
            SdlInputEvent::MouseButton { button, down } => {
                let Some(button_code) = translate_mouse_button(button) else {
                    log::debug!("Ignoring unsupported SDL mouse button {button}");
                    return false;
                };
                let action = if down {
                    InputAction::Press
                } else {
                    InputAction::Release
                };
                dispatcher.process_mouse_button_event(button_code, action, self.modifiers);
            }
            SdlInputEvent::MouseWheel { x, y, flipped } => {
                let sign = if flipped { -1.0 } else { 1.0 };
                dispatcher.process_mouse_scroll_event(x * sign, y * sign);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::adapter::pump_frame;

    #[test]
    fn test_letter_and_digit_fallback() {
        assert_eq!(translate_key(u32::from(b'a')), KeyCode::A);
        assert_eq!(translate_key(u32::from(b'z')), KeyCode::Z);
        assert_eq!(translate_key(u32::from(b'0')), KeyCode::Num0);
        assert_eq!(translate_key(u32::from(b'9')), KeyCode::Num9);
    }

    #[test]
    fn test_table_entries() {
        assert_eq!(translate_key(0x1b), KeyCode::Escape);
        assert_eq!(translate_key(0x0d), KeyCode::Enter);
        assert_eq!(translate_key(0x4000_003a), KeyCode::F1);
        assert_eq!(translate_key(0x4000_0052), KeyCode::Up);
        assert_eq!(translate_key(0x4000_00e1), KeyCode::LeftShift);
        assert_eq!(translate_key(0x4000_0062), KeyCode::Kp0);
    }

    #[test]
    fn test_unmapped_codes_pass_through() {
        // SDL never reports upper-case letters; keep them opaque
        assert_eq!(translate_key(u32::from(b'A')), KeyCode::Other(65));
        assert_eq!(translate_key(0x4000_0101), KeyCode::Other(0x4000_0101));
        assert_eq!(translate_key(0), KeyCode::Unknown);
    }

    #[test]
    fn test_actions_and_modifiers() {
        assert_eq!(translate_key_action(true, false), InputAction::Press);
        assert_eq!(translate_key_action(true, true), InputAction::Repeat);
        assert_eq!(translate_key_action(false, true), InputAction::Release);

        assert_eq!(translate_modifiers(0x0002 | 0x0040), Modifiers::SHIFT | Modifiers::CONTROL);
        assert_eq!(translate_modifiers(0x4000), Modifiers::empty());
    }

    #[test]
    fn test_mouse_button_indices() {
        assert_eq!(translate_mouse_button(1), Some(MouseButton::Left));
        assert_eq!(translate_mouse_button(2), Some(MouseButton::Middle));
        assert_eq!(translate_mouse_button(3), Some(MouseButton::Right));
        assert_eq!(translate_mouse_button(0), None);
        assert_eq!(translate_mouse_button(9), None);
    }

    #[test]
    fn test_relative_motion_used_verbatim() {
        let mut adapter = SdlInputAdapter::new();
        let mut dispatcher = InputDispatcher::new();

        pump_frame(
            &mut adapter,
            &mut dispatcher,
            [SdlInputEvent::MouseMotion { x: 50.0, y: 50.0, xrel: 0.0, yrel: 0.0 }],
        );
        pump_frame(
            &mut adapter,
            &mut dispatcher,
            [SdlInputEvent::MouseMotion { x: 53.0, y: 48.0, xrel: 3.0, yrel: -2.0 }],
        );

        assert_eq!(dispatcher.mouse_delta(), (3.0, -2.0));
        assert_eq!(dispatcher.mouse_position(), (53.0, 48.0));
    }

    #[test]
    fn test_relative_motion_sums_over_the_pass() {
        let mut adapter = SdlInputAdapter::new();
        let mut dispatcher = InputDispatcher::new();

        pump_frame(
            &mut adapter,
            &mut dispatcher,
            [SdlInputEvent::MouseMotion { x: 0.0, y: 0.0, xrel: 0.0, yrel: 0.0 }],
        );
        pump_frame(
            &mut adapter,
            &mut dispatcher,
            [
                SdlInputEvent::MouseMotion { x: 4.0, y: 1.0, xrel: 4.0, yrel: 1.0 },
                SdlInputEvent::MouseMotion { x: 10.0, y: 3.0, xrel: 6.0, yrel: 2.0 },
            ],
        );
        assert_eq!(dispatcher.mouse_delta(), (10.0, 3.0));

        // The running total starts over with every pass
        pump_frame(
            &mut adapter,
            &mut dispatcher,
            [SdlInputEvent::MouseMotion { x: 11.0, y: 3.0, xrel: 1.0, yrel: 0.0 }],
        );
        assert_eq!(dispatcher.mouse_delta(), (1.0, 0.0));
    }

    #[test]
    fn test_button_inherits_last_key_modifiers() {
        let mut adapter = SdlInputAdapter::new();
        let mut dispatcher = InputDispatcher::new();

        let events = [
            SdlInputEvent::Key {
                keycode: scancode_key(224),
                scancode: 224,
                modifiers: 0x0040,
                down: true,
                repeat: false,
            },
            SdlInputEvent::MouseButton { button: 1, down: true },
            SdlInputEvent::MouseButton { button: 42, down: true },
            SdlInputEvent::MouseWheel { x: 0.0, y: 1.0, flipped: true },
        ];
        let forwarded = pump_frame(&mut adapter, &mut dispatcher, events);

        assert_eq!(forwarded, 3);
        assert_eq!(adapter.modifiers(), Modifiers::CONTROL);
        assert!(dispatcher.is_key_pressed(KeyCode::LeftControl));
        assert!(dispatcher.is_mouse_button_pressed(MouseButton::Left));
        assert_eq!(dispatcher.scroll(), (0.0, -1.0));
    }
}
