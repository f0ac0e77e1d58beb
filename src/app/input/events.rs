//! Raw device events and player-facing identifiers

use glam::Vec2;

/// Backend-assigned identifier of an attached controller
///
/// Only meaningful for routing events; applications address gamepads by
/// player slot instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceId(pub u32);

/// A single event drained from the device event source
#[derive(Debug, Clone, PartialEq)]
pub enum RawEvent {
    /// Pointer moved to `position`, `delta` relative to its previous position
    PointerMotion { position: Vec2, delta: Vec2 },
    MouseButtonDown(MouseButton),
    MouseButtonUp(MouseButton),
    /// Vertical wheel movement in scroll units
    Wheel(f32),
    /// `repeat` is set for keyboard autorepeat signals while a key is held
    KeyDown { key: Key, repeat: bool },
    KeyUp(Key),
    /// Text produced by the keyboard or an input method
    TextInput(String),
    GamepadAttached(DeviceId),
    GamepadDetached(DeviceId),
    /// Signed raw axis value as reported by the device
    GamepadAxisMotion {
        device: DeviceId,
        axis: RawAxis,
        value: i16,
    },
    GamepadButtonDown {
        device: DeviceId,
        button: GamepadButton,
    },
    GamepadButtonUp {
        device: DeviceId,
        button: GamepadButton,
    },
    Quit,
}

/// Cursor visibility and lock state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseMode {
    /// Cursor shown and free to move
    #[default]
    Visible,
    /// Cursor hidden but free to move, for games that draw their own
    Hidden,
    /// Cursor hidden and held in place; only motion deltas are meaningful
    Locked,
}

/// Mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Gamepad button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamepadButton {
    A,
    B,
    X,
    Y,
    Back,
    Guide,
    Start,
    LeftStick,
    RightStick,
    LeftShoulder,
    RightShoulder,
    Up,
    Down,
    Left,
    Right,
}

/// Analog axis pairs exposed to applications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamepadAxis {
    /// The left analog stick, with values from -1 to 1
    LeftStick,
    /// The right analog stick, with values from -1 to 1
    RightStick,
    /// Left trigger in x, right trigger in y, with values from 0 to 1
    Triggers,
}

/// Single physical axis as reported by the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawAxis {
    LeftX,
    LeftY,
    RightX,
    RightY,
    TriggerLeft,
    TriggerRight,
}

impl RawAxis {
    /// Normalize a raw reading: sticks to `[-1, 1]`, triggers to `[0, 1]`
    pub fn normalize(self, raw: i16) -> f32 {
        let value = raw as f32 / i16::MAX as f32;
        match self {
            RawAxis::TriggerLeft | RawAxis::TriggerRight => value.clamp(0.0, 1.0),
            _ => value.clamp(-1.0, 1.0),
        }
    }
}

/// Keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // Control
    Return,
    Escape,
    Backspace,
    Tab,
    Space,
    Delete,

    // Punctuation
    Exclamation,
    DoubleQuote,
    Hash,
    Percent,
    Dollar,
    Ampersand,
    SingleQuote,
    LeftParen,
    RightParen,
    Asterisk,
    Plus,
    Comma,
    Minus,
    Period,
    Slash,
    Colon,
    Semicolon,
    Less,
    Equals,
    Greater,
    Question,
    At,
    LeftBracket,
    Backslash,
    RightBracket,
    Caret,
    Underscore,
    Backquote,

    // Number row
    NumRow0,
    NumRow1,
    NumRow2,
    NumRow3,
    NumRow4,
    NumRow5,
    NumRow6,
    NumRow7,
    NumRow8,
    NumRow9,

    // Letters
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Function keys
    CapsLock,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    PrintScreen,
    ScrollLock,
    Pause,

    // Navigation
    Insert,
    Home,
    PageUp,
    End,
    PageDown,
    Right,
    Left,
    Down,
    Up,

    // Numpad
    NumpadDivide,
    NumpadMultiply,
    NumpadMinus,
    NumpadPlus,
    NumpadEnter,
    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    NumpadPeriod,

    // Modifiers
    LeftControl,
    LeftShift,
    LeftAlt,
    RightControl,
    RightShift,
    RightAlt,

    /// Any key without a dedicated variant
    Other,
}
