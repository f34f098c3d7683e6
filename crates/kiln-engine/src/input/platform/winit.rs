use ::winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, TouchPhase, WindowEvent};
use ::winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use crate::input::{
    Key, KeyData, KeyEventKind, Modifiers, MouseButton, MouseWheelDelta, RawInput, RawTouch,
};

/// Translates winit `WindowEvent`s into engine [`RawInput`].
///
/// winit reports touches one contact at a time, while the touch set consumes
/// whole lists of active touches; the translator keeps that list. It also
/// tracks the cursor position (winit does not attach one to button events)
/// and the modifier state.
///
/// Coordinates stay in physical pixels, the space the viewport bounds live in.
#[derive(Debug, Default)]
pub struct WinitTranslator {
    modifiers: Modifiers,
    pointer_pos: (f32, f32),
    touches: Vec<RawTouch>,
}

impl WinitTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the raw input produced by `event` to `out`.
    ///
    /// `timestamp` is the host time (ms) stamped onto key events.
    pub fn translate(&mut self, event: &WindowEvent, timestamp: f64, out: &mut Vec<RawInput>) {
        match event {
            WindowEvent::ModifiersChanged(m) => {
                self.modifiers = map_modifiers(m.state());
            }

            WindowEvent::CursorEntered { .. } => out.push(RawInput::PointerEnter),

            WindowEvent::CursorLeft { .. } => out.push(RawInput::PointerExit),

            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = (position.x as f32, position.y as f32);
                self.pointer_pos = (x, y);
                out.push(RawInput::PointerMove { x, y });
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let (x, y) = self.pointer_pos;
                let button = map_mouse_button(*button);
                out.push(match state {
                    ElementState::Pressed => RawInput::PointerPress { x, y, button },
                    ElementState::Released => RawInput::PointerRelease { x, y, button },
                });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(x, y) => MouseWheelDelta::Line { x: *x, y: *y },
                    MouseScrollDelta::PixelDelta(p) => MouseWheelDelta::Pixel {
                        x: p.x as f32,
                        y: p.y as f32,
                    },
                };
                out.push(RawInput::Wheel(delta));
            }

            WindowEvent::Touch(touch) => self.touch(
                touch.id,
                touch.phase,
                touch.location.x as f32,
                touch.location.y as f32,
                out,
            ),

            WindowEvent::KeyboardInput { event, .. } => self.key(
                event.physical_key,
                event.state,
                event.repeat,
                event.text.as_deref(),
                timestamp,
                out,
            ),

            _ => {}
        }
    }

    /// Folds one contact's phase into the active touch list.
    ///
    /// Cancelled contacts end like released ones.
    fn touch(&mut self, id: u64, phase: TouchPhase, x: f32, y: f32, out: &mut Vec<RawInput>) {
        let raw = RawTouch::new(id, x, y);
        match phase {
            TouchPhase::Started => {
                self.touches.retain(|t| t.id != id);
                self.touches.push(raw);
                out.push(RawInput::TouchesBegin(self.touches.clone()));
            }
            TouchPhase::Moved => {
                if let Some(t) = self.touches.iter_mut().find(|t| t.id == id) {
                    *t = raw;
                }
                out.push(RawInput::TouchesMove(self.touches.clone()));
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.touches.retain(|t| t.id != id);
                out.push(RawInput::TouchesEnd(self.touches.clone()));
            }
        }
    }

    /// A press emits key-down, followed by key-press when it produced text.
    fn key(
        &self,
        physical: PhysicalKey,
        state: ElementState,
        repeat: bool,
        text: Option<&str>,
        timestamp: f64,
        out: &mut Vec<RawInput>,
    ) {
        let (key, code) = map_key(physical);
        let data = KeyData {
            key,
            code,
            text: None,
            modifiers: self.modifiers,
            timestamp,
            repeat,
        };

        match state {
            ElementState::Pressed => {
                out.push(RawInput::Key {
                    kind: KeyEventKind::Down,
                    data: data.clone(),
                });
                if let Some(text) = text.filter(|t| !t.is_empty()) {
                    out.push(RawInput::Key {
                        kind: KeyEventKind::Press,
                        data: KeyData { text: Some(text.to_string()), ..data },
                    });
                }
            }
            ElementState::Released => out.push(RawInput::Key {
                kind: KeyEventKind::Up,
                data,
            }),
        }
    }
}

fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

fn map_key(pk: PhysicalKey) -> (Key, u32) {
    match pk {
        PhysicalKey::Code(code) => {
            let key = match code {
                KeyCode::Escape => Key::Escape,
                KeyCode::Enter => Key::Enter,
                KeyCode::Tab => Key::Tab,
                KeyCode::Backspace => Key::Backspace,
                KeyCode::Space => Key::Space,

                KeyCode::Insert => Key::Insert,
                KeyCode::Delete => Key::Delete,
                KeyCode::Home => Key::Home,
                KeyCode::End => Key::End,
                KeyCode::PageUp => Key::PageUp,
                KeyCode::PageDown => Key::PageDown,

                KeyCode::ArrowUp => Key::ArrowUp,
                KeyCode::ArrowDown => Key::ArrowDown,
                KeyCode::ArrowLeft => Key::ArrowLeft,
                KeyCode::ArrowRight => Key::ArrowRight,

                KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
                KeyCode::ControlLeft | KeyCode::ControlRight => Key::Control,
                KeyCode::AltLeft | KeyCode::AltRight => Key::Alt,
                KeyCode::SuperLeft | KeyCode::SuperRight => Key::Meta,

                KeyCode::KeyA => Key::A,
                KeyCode::KeyB => Key::B,
                KeyCode::KeyC => Key::C,
                KeyCode::KeyD => Key::D,
                KeyCode::KeyE => Key::E,
                KeyCode::KeyF => Key::F,
                KeyCode::KeyG => Key::G,
                KeyCode::KeyH => Key::H,
                KeyCode::KeyI => Key::I,
                KeyCode::KeyJ => Key::J,
                KeyCode::KeyK => Key::K,
                KeyCode::KeyL => Key::L,
                KeyCode::KeyM => Key::M,
                KeyCode::KeyN => Key::N,
                KeyCode::KeyO => Key::O,
                KeyCode::KeyP => Key::P,
                KeyCode::KeyQ => Key::Q,
                KeyCode::KeyR => Key::R,
                KeyCode::KeyS => Key::S,
                KeyCode::KeyT => Key::T,
                KeyCode::KeyU => Key::U,
                KeyCode::KeyV => Key::V,
                KeyCode::KeyW => Key::W,
                KeyCode::KeyX => Key::X,
                KeyCode::KeyY => Key::Y,
                KeyCode::KeyZ => Key::Z,

                KeyCode::Digit0 => Key::Digit0,
                KeyCode::Digit1 => Key::Digit1,
                KeyCode::Digit2 => Key::Digit2,
                KeyCode::Digit3 => Key::Digit3,
                KeyCode::Digit4 => Key::Digit4,
                KeyCode::Digit5 => Key::Digit5,
                KeyCode::Digit6 => Key::Digit6,
                KeyCode::Digit7 => Key::Digit7,
                KeyCode::Digit8 => Key::Digit8,
                KeyCode::Digit9 => Key::Digit9,

                KeyCode::F1 => Key::F1,
                KeyCode::F2 => Key::F2,
                KeyCode::F3 => Key::F3,
                KeyCode::F4 => Key::F4,
                KeyCode::F5 => Key::F5,
                KeyCode::F6 => Key::F6,
                KeyCode::F7 => Key::F7,
                KeyCode::F8 => Key::F8,
                KeyCode::F9 => Key::F9,
                KeyCode::F10 => Key::F10,
                KeyCode::F11 => Key::F11,
                KeyCode::F12 => Key::F12,

                other => Key::Unknown(other as u32),
            };

            (key, code as u32)
        }

        // winit 0.30 uses NativeKeyCode; no stable numeric is guaranteed here.
        PhysicalKey::Unidentified(_) => (Key::Unknown(0), 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(input: &RawInput) -> Vec<u64> {
        match input {
            RawInput::TouchesBegin(t) | RawInput::TouchesMove(t) | RawInput::TouchesEnd(t) => {
                t.iter().map(|t| t.id).collect()
            }
            other => panic!("not a touch list: {other:?}"),
        }
    }

    // ── touches ───────────────────────────────────────────────────────────

    #[test]
    fn contact_phases_fold_into_touch_lists() {
        let mut tr = WinitTranslator::new();
        let mut out = Vec::new();

        tr.touch(1, TouchPhase::Started, 0.0, 0.0, &mut out);
        tr.touch(2, TouchPhase::Started, 10.0, 10.0, &mut out);
        tr.touch(1, TouchPhase::Moved, 5.0, 6.0, &mut out);
        tr.touch(2, TouchPhase::Cancelled, 10.0, 10.0, &mut out);

        assert_eq!(out.len(), 4);
        assert!(matches!(out[0], RawInput::TouchesBegin(_)));
        assert_eq!(ids(&out[0]), vec![1]);
        assert!(matches!(out[1], RawInput::TouchesBegin(_)));
        assert_eq!(ids(&out[1]), vec![1, 2]);
        assert_eq!(
            out[2],
            RawInput::TouchesMove(vec![RawTouch::new(1, 5.0, 6.0), RawTouch::new(2, 10.0, 10.0)])
        );
        assert_eq!(out[3], RawInput::TouchesEnd(vec![RawTouch::new(1, 5.0, 6.0)]));
    }

    #[test]
    fn ended_contact_leaves_list_and_restart_replaces_it() {
        let mut tr = WinitTranslator::new();
        let mut out = Vec::new();

        tr.touch(4, TouchPhase::Started, 1.0, 1.0, &mut out);
        tr.touch(4, TouchPhase::Started, 2.0, 2.0, &mut out);
        tr.touch(4, TouchPhase::Ended, 2.0, 2.0, &mut out);
        tr.touch(9, TouchPhase::Moved, 3.0, 3.0, &mut out);

        assert_eq!(out[1], RawInput::TouchesBegin(vec![RawTouch::new(4, 2.0, 2.0)]));
        assert_eq!(out[2], RawInput::TouchesEnd(vec![]));
        assert_eq!(out[3], RawInput::TouchesMove(vec![]));
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn press_with_text_emits_down_then_press() {
        let tr = WinitTranslator::new();
        let mut out = Vec::new();
        let a = PhysicalKey::Code(KeyCode::KeyA);

        tr.key(a, ElementState::Pressed, false, Some("a"), 12.0, &mut out);

        assert_eq!(out.len(), 2);
        match (&out[0], &out[1]) {
            (
                RawInput::Key { kind: KeyEventKind::Down, data: down },
                RawInput::Key { kind: KeyEventKind::Press, data: press },
            ) => {
                assert_eq!(down.key, Key::A);
                assert_eq!(down.code, KeyCode::KeyA as u32);
                assert_eq!(down.text, None);
                assert_eq!(down.timestamp, 12.0);
                assert_eq!(press.text.as_deref(), Some("a"));
            }
            other => panic!("unexpected key events: {other:?}"),
        }
    }

    #[test]
    fn press_without_text_and_release() {
        let tr = WinitTranslator::new();
        let mut out = Vec::new();
        let shift = PhysicalKey::Code(KeyCode::ShiftLeft);

        tr.key(shift, ElementState::Pressed, true, None, 0.0, &mut out);
        tr.key(shift, ElementState::Pressed, false, Some(""), 0.0, &mut out);
        tr.key(shift, ElementState::Released, false, None, 0.0, &mut out);

        let kinds: Vec<_> = out
            .iter()
            .map(|e| match e {
                RawInput::Key { kind, data } => (*kind, data.key, data.repeat),
                other => panic!("not a key event: {other:?}"),
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                (KeyEventKind::Down, Key::Shift, true),
                (KeyEventKind::Down, Key::Shift, false),
                (KeyEventKind::Up, Key::Shift, false),
            ]
        );
    }

    #[test]
    fn modifiers_are_stamped_on_key_data() {
        let mut tr = WinitTranslator::new();
        tr.modifiers = map_modifiers(ModifiersState::CONTROL | ModifiersState::SHIFT);
        let mut out = Vec::new();

        tr.key(PhysicalKey::Code(KeyCode::KeyS), ElementState::Released, false, None, 0.0, &mut out);

        match &out[0] {
            RawInput::Key { data, .. } => {
                assert!(data.modifiers.ctrl && data.modifiers.shift);
                assert!(!data.modifiers.alt && !data.modifiers.meta);
            }
            other => panic!("not a key event: {other:?}"),
        }
    }

    // ── mapping ───────────────────────────────────────────────────────────

    #[test]
    fn maps_buttons_and_keys() {
        assert_eq!(map_mouse_button(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(map_mouse_button(WinitMouseButton::Other(7)), MouseButton::Other(7));

        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Escape)).0, Key::Escape);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Digit5)).0, Key::Digit5);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ControlRight)).0, Key::Control);
        let (key, code) = map_key(PhysicalKey::Code(KeyCode::NumLock));
        assert_eq!(key, Key::Unknown(code));
    }
}
