use crate::event::{EventDispatcher, ListenerId};

use super::types::{KeyData, KeyEventKind};

#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    pub kind: KeyEventKind,
    pub data: KeyData,
}

/// Keyboard passthrough.
///
/// Holds no key state: every raw key event is repackaged and dispatched as is.
/// Held-key tracking, if needed, belongs to the application.
#[derive(Debug, Default)]
pub struct KeyInput {
    events: EventDispatcher<KeyEvent>,
}

impl KeyInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, f: impl FnMut(&KeyEvent) + 'static) -> ListenerId {
        self.events.subscribe(f)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.events.unsubscribe(id)
    }

    pub fn on_key(&mut self, kind: KeyEventKind, data: KeyData) -> KeyEvent {
        let ev = KeyEvent { kind, data };
        self.events.dispatch(&ev);
        ev
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, Modifiers};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn data(key: Key) -> KeyData {
        KeyData {
            key,
            code: 30,
            text: None,
            modifiers: Modifiers { shift: true, ..Modifiers::default() },
            timestamp: 12.5,
            repeat: false,
        }
    }

    #[test]
    fn key_events_pass_through_unchanged() {
        let mut kb = KeyInput::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let l = log.clone();
        kb.subscribe(move |e: &KeyEvent| l.borrow_mut().push(e.clone()));

        kb.on_key(KeyEventKind::Down, data(Key::A));
        kb.on_key(KeyEventKind::Press, KeyData { text: Some("A".into()), ..data(Key::A) });
        kb.on_key(KeyEventKind::Up, data(Key::A));

        let log = log.borrow();
        let kinds: Vec<_> = log.iter().map(|e| e.kind.as_str()).collect();
        assert_eq!(kinds, vec!["key-down", "key-press", "key-up"]);
        assert_eq!(log[0].data, data(Key::A));
        assert_eq!(log[1].data.text.as_deref(), Some("A"));
        assert!(log[2].data.modifiers.shift);
        assert_eq!(log[2].data.timestamp, 12.5);
    }
}
