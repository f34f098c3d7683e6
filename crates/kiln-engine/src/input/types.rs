use std::fmt;

/// Keyboard key identifier.
///
/// Host runtimes map platform key codes into these variants where possible.
/// Anything else arrives as `Key::Unknown(u32)` carrying the platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    // Common control keys
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Modifiers as keys (useful for focus/navigation policies)
    Shift,
    Control,
    Alt,
    Meta,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Digits
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    // Function keys
    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    /// Platform-dependent key not yet represented here.
    Unknown(u32),
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

/// Modifier keys state.
///
/// This is stored as booleans rather than bitflags to keep it explicit and stable.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Mouse wheel delta.
///
/// `Line` corresponds to "scroll lines" style input; `Pixel` is high precision.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { x: f32, y: f32 },
    Pixel { x: f32, y: f32 },
}

impl MouseWheelDelta {
    /// Vertical component; positive scrolls up / away from the user.
    pub fn vertical(self) -> f32 {
        match self {
            MouseWheelDelta::Line { y, .. } | MouseWheelDelta::Pixel { y, .. } => y,
        }
    }
}

/// Identifies the host surface a raw event was delivered to.
///
/// Devices only accept raw events from the target they were wired to
/// (see `AppConfig::resolve_input_targets`).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct InputTarget(pub u32);

/// One entry of a platform touch list.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RawTouch {
    /// Platform-assigned identifier, stable for the lifetime of the contact.
    pub id: u64,
    pub x: f32,
    pub y: f32,
}

impl RawTouch {
    pub const fn new(id: u64, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyEventKind {
    Down,
    Press,
    Up,
}

impl KeyEventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            KeyEventKind::Down => "key-down",
            KeyEventKind::Press => "key-press",
            KeyEventKind::Up => "key-up",
        }
    }
}

/// Payload of a key event, copied verbatim from the platform event.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyData {
    pub key: Key,
    /// Stable platform code when available (e.g. scancode).
    pub code: u32,
    /// Character produced by the key, for `Press` events.
    pub text: Option<String>,
    pub modifiers: Modifiers,
    /// Host timestamp of the platform event, in milliseconds.
    pub timestamp: f64,
    /// True when the event is an auto-repeat.
    pub repeat: bool,
}

/// Which device a raw event feeds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum InputDevice {
    Pointer,
    Touch,
    Keyboard,
}

/// Platform-agnostic raw input, as produced by a host runtime.
///
/// Pointer and touch coordinates are surface pixels, in the same space as the
/// viewport bounds.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    PointerPress { x: f32, y: f32, button: MouseButton },
    PointerMove { x: f32, y: f32 },
    PointerRelease { x: f32, y: f32, button: MouseButton },
    PointerEnter,
    PointerExit,
    Wheel(MouseWheelDelta),

    /// Full list of active touches after one or more contacts started.
    TouchesBegin(Vec<RawTouch>),
    /// Full list of active touches after one or more contacts moved.
    TouchesMove(Vec<RawTouch>),
    /// Remaining active touches after one or more contacts ended or were cancelled.
    TouchesEnd(Vec<RawTouch>),

    Key { kind: KeyEventKind, data: KeyData },
}

impl RawInput {
    pub fn device(&self) -> InputDevice {
        match self {
            RawInput::PointerPress { .. }
            | RawInput::PointerMove { .. }
            | RawInput::PointerRelease { .. }
            | RawInput::PointerEnter
            | RawInput::PointerExit
            | RawInput::Wheel(_) => InputDevice::Pointer,
            RawInput::TouchesBegin(_) | RawInput::TouchesMove(_) | RawInput::TouchesEnd(_) => {
                InputDevice::Touch
            }
            RawInput::Key { .. } => InputDevice::Keyboard,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_any() {
        assert!(!Modifiers::default().any());
        assert!(Modifiers { meta: true, ..Modifiers::default() }.any());
    }

    #[test]
    fn raw_input_routes_to_device() {
        assert_eq!(RawInput::PointerEnter.device(), InputDevice::Pointer);
        assert_eq!(RawInput::TouchesEnd(vec![]).device(), InputDevice::Touch);
        assert_eq!(
            RawInput::Wheel(MouseWheelDelta::Pixel { x: 3.0, y: -2.0 }).device(),
            InputDevice::Pointer
        );
    }
}
