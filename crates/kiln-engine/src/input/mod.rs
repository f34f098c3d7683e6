//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Host runtimes translate platform events into [`RawInput`]; the devices
//! here turn raw input into domain events with position, delta and
//! normalized-coordinate bookkeeping.

mod keyboard;
pub mod platform;
mod pointer;
mod touch;
mod types;

pub use keyboard::{KeyEvent, KeyInput};
pub use pointer::{PointerDevice, PointerEvent, PointerEventKind, PointerState};
pub use touch::{TouchContact, TouchEvent, TouchEventKind, TouchSet};
pub use types::{
    InputDevice,
    InputTarget,
    Key,
    KeyData,
    KeyEventKind,
    Modifiers,
    MouseButton,
    MouseWheelDelta,
    RawInput,
    RawTouch,
};
