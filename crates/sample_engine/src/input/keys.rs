//! Canonical key, mouse button, action and modifier types
//!
//! Key codes live in a stable numeric space that overlaps ASCII for letters,
//! digits and printable punctuation and reserves ranges above 255 for
//! function, navigation, keypad and modifier keys. The numbering matches the
//! GLFW key table, so any backend can map onto it without ambiguity.

use bitflags::bitflags;

macro_rules! key_codes {
    ($( $(#[$doc:meta])* $name:ident = $raw:literal, )*) => {
        /// Platform-independent key identifier
        ///
        /// Native codes that have no named variant are carried verbatim in
        /// [`KeyCode::Other`] instead of being aliased onto a named key.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum KeyCode {
            $( $(#[$doc])* $name, )*
            /// Unmapped native code, passed through untouched
            ///
            /// Build it through [`KeyCode::from_raw`]. A value that has a
            /// named variant is treated as that variant everywhere the
            /// dispatcher stores or compares keys (see [`KeyCode::normalized`]).
            Other(i32),
        }

        impl KeyCode {
            /// Numeric value of this key in the canonical space
            pub const fn raw(self) -> i32 {
                match self {
                    $( Self::$name => $raw, )*
                    Self::Other(raw) => raw,
                }
            }

            /// Look up a canonical key by numeric value
            ///
            /// Values without a named variant come back as [`KeyCode::Other`].
            pub const fn from_raw(raw: i32) -> Self {
                match raw {
                    $( $raw => Self::$name, )*
                    other => Self::Other(other),
                }
            }
        }
    };
}

key_codes! {
    /// Key not recognised by the platform
    Unknown = -1,
    /// Space bar
    Space = 32,
    /// `'`
    Apostrophe = 39,
    /// `,`
    Comma = 44,
    /// `-`
    Minus = 45,
    /// `.`
    Period = 46,
    /// `/`
    Slash = 47,
    /// `0`
    Num0 = 48,
    /// `1`
    Num1 = 49,
    /// `2`
    Num2 = 50,
    /// `3`
    Num3 = 51,
    /// `4`
    Num4 = 52,
    /// `5`
    Num5 = 53,
    /// `6`
    Num6 = 54,
    /// `7`
    Num7 = 55,
    /// `8`
    Num8 = 56,
    /// `9`
    Num9 = 57,
    /// `;`
    Semicolon = 59,
    /// `=`
    Equal = 61,
    /// A key
    A = 65,
    /// B key
    B = 66,
    /// C key
    C = 67,
    /// D key
    D = 68,
    /// E key
    E = 69,
    /// F key
    F = 70,
    /// G key
    G = 71,
    /// H key
    H = 72,
    /// I key
    I = 73,
    /// J key
    J = 74,
    /// K key
    K = 75,
    /// L key
    L = 76,
    /// M key
    M = 77,
    /// N key
    N = 78,
    /// O key
    O = 79,
    /// P key
    P = 80,
    /// Q key
    Q = 81,
    /// R key
    R = 82,
    /// S key
    S = 83,
    /// T key
    T = 84,
    /// U key
    U = 85,
    /// V key
    V = 86,
    /// W key
    W = 87,
    /// X key
    X = 88,
    /// Y key
    Y = 89,
    /// Z key
    Z = 90,
    /// `[`
    LeftBracket = 91,
    /// `\`
    Backslash = 92,
    /// `]`
    RightBracket = 93,
    /// `` ` ``
    GraveAccent = 96,
    /// Non-US key #1
    World1 = 161,
    /// Non-US key #2
    World2 = 162,
    /// Escape
    Escape = 256,
    /// Enter / Return
    Enter = 257,
    /// Tab
    Tab = 258,
    /// Backspace
    Backspace = 259,
    /// Insert
    Insert = 260,
    /// Delete
    Delete = 261,
    /// Right arrow
    Right = 262,
    /// Left arrow
    Left = 263,
    /// Down arrow
    Down = 264,
    /// Up arrow
    Up = 265,
    /// Page up
    PageUp = 266,
    /// Page down
    PageDown = 267,
    /// Home
    Home = 268,
    /// End
    End = 269,
    /// Caps lock
    CapsLock = 280,
    /// Scroll lock
    ScrollLock = 281,
    /// Num lock
    NumLock = 282,
    /// Print screen
    PrintScreen = 283,
    /// Pause
    Pause = 284,
    /// F1
    F1 = 290,
    /// F2
    F2 = 291,
    /// F3
    F3 = 292,
    /// F4
    F4 = 293,
    /// F5
    F5 = 294,
    /// F6
    F6 = 295,
    /// F7
    F7 = 296,
    /// F8
    F8 = 297,
    /// F9
    F9 = 298,
    /// F10
    F10 = 299,
    /// F11
    F11 = 300,
    /// F12
    F12 = 301,
    /// F13
    F13 = 302,
    /// F14
    F14 = 303,
    /// F15
    F15 = 304,
    /// F16
    F16 = 305,
    /// F17
    F17 = 306,
    /// F18
    F18 = 307,
    /// F19
    F19 = 308,
    /// F20
    F20 = 309,
    /// F21
    F21 = 310,
    /// F22
    F22 = 311,
    /// F23
    F23 = 312,
    /// F24
    F24 = 313,
    /// F25
    F25 = 314,
    /// Keypad 0
    Kp0 = 320,
    /// Keypad 1
    Kp1 = 321,
    /// Keypad 2
    Kp2 = 322,
    /// Keypad 3
    Kp3 = 323,
    /// Keypad 4
    Kp4 = 324,
    /// Keypad 5
    Kp5 = 325,
    /// Keypad 6
    Kp6 = 326,
    /// Keypad 7
    Kp7 = 327,
    /// Keypad 8
    Kp8 = 328,
    /// Keypad 9
    Kp9 = 329,
    /// Keypad `.`
    KpDecimal = 330,
    /// Keypad `/`
    KpDivide = 331,
    /// Keypad `*`
    KpMultiply = 332,
    /// Keypad `-`
    KpSubtract = 333,
    /// Keypad `+`
    KpAdd = 334,
    /// Keypad enter
    KpEnter = 335,
    /// Keypad `=`
    KpEqual = 336,
    /// Left shift
    LeftShift = 340,
    /// Left control
    LeftControl = 341,
    /// Left alt
    LeftAlt = 342,
    /// Left super (Windows / Command)
    LeftSuper = 343,
    /// Right shift
    RightShift = 344,
    /// Right control
    RightControl = 345,
    /// Right alt
    RightAlt = 346,
    /// Right super (Windows / Command)
    RightSuper = 347,
    /// Menu / application key
    Menu = 348,
}

impl KeyCode {
    /// Letter key for an ASCII letter of either case
    pub fn from_ascii_letter(c: u8) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Self::from_raw(i32::from(c.to_ascii_uppercase())))
    }

    /// Digit key for an ASCII digit
    pub fn from_ascii_digit(c: u8) -> Option<Self> {
        c.is_ascii_digit().then(|| Self::from_raw(i32::from(c)))
    }

    /// Collapse an [`Other`](Self::Other) holding a named value onto that variant
    pub const fn normalized(self) -> Self {
        match self {
            Self::Other(raw) => Self::from_raw(raw),
            named => named,
        }
    }

    /// True for keys that came through as an unmapped native code
    pub const fn is_passthrough(self) -> bool {
        matches!(self, Self::Other(_))
    }
}

/// Transition reported by the platform for a key or button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Key or button went up
    Release,
    /// Key or button went down
    Press,
    /// Key held long enough for the platform to auto-repeat
    Repeat,
}

impl InputAction {
    /// Whether this action leaves the key or button held
    pub const fn is_down(self) -> bool {
        !matches!(self, Self::Release)
    }
}

/// Mouse buttons, numbered the way windowing libraries report them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button
    Left,
    /// Secondary button
    Right,
    /// Wheel button
    Middle,
    /// Auxiliary button 4 (usually "back")
    Button4,
    /// Auxiliary button 5 (usually "forward")
    Button5,
    /// Auxiliary button 6
    Button6,
    /// Auxiliary button 7
    Button7,
    /// Auxiliary button 8
    Button8,
}

impl MouseButton {
    /// Number of tracked buttons
    pub const COUNT: usize = 8;

    /// Every button in index order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Left,
        Self::Right,
        Self::Middle,
        Self::Button4,
        Self::Button5,
        Self::Button6,
        Self::Button7,
        Self::Button8,
    ];

    /// Zero-based slot of this button
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Middle => 2,
            Self::Button4 => 3,
            Self::Button5 => 4,
            Self::Button6 => 5,
            Self::Button7 => 6,
            Self::Button8 => 7,
        }
    }

    /// Button for a zero-based slot, `None` past [`MouseButton::COUNT`]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

bitflags! {
    /// Modifier keys held while an event was generated
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u16 {
        /// Either shift key
        const SHIFT = 0x0001;
        /// Either control key
        const CONTROL = 0x0002;
        /// Either alt key
        const ALT = 0x0004;
        /// Either super key
        const SUPER = 0x0008;
        /// Caps lock engaged
        const CAPS_LOCK = 0x0010;
        /// Num lock engaged
        const NUM_LOCK = 0x0020;
    }
}
