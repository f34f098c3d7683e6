use std::collections::HashMap;

use crate::coords::Vec2;
use crate::event::{EventDispatcher, ListenerId};

use super::types::RawTouch;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TouchEventKind {
    Begin,
    Move,
    End,
}

impl TouchEventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TouchEventKind::Begin => "touch-begin",
            TouchEventKind::Move => "touch-move",
            TouchEventKind::End => "touch-end",
        }
    }
}

/// One tracked touch point.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TouchContact {
    pub id: u64,
    pub position: Vec2,
    pub position_prev: Vec2,
    pub delta: Vec2,
    pub normalized: Vec2,
    pub normalized_prev: Vec2,
    /// Unit vector along the last movement, zero when the contact has not moved.
    pub direction: Vec2,
}

impl TouchContact {
    fn begin(raw: RawTouch, viewport: Vec2) -> Self {
        let p = Vec2::new(raw.x, raw.y);
        let n = p.div_or_zero(viewport);
        Self {
            id: raw.id,
            position: p,
            position_prev: p,
            delta: Vec2::zero(),
            normalized: n,
            normalized_prev: n,
            direction: Vec2::zero(),
        }
    }

    fn move_to(&mut self, x: f32, y: f32, viewport: Vec2) {
        self.position_prev = self.position;
        self.position = Vec2::new(x, y);
        self.delta = self.position - self.position_prev;
        self.direction = self.delta.normalize_or_zero();
        self.normalized_prev = self.position_prev.div_or_zero(viewport);
        self.normalized = self.position.div_or_zero(viewport);
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TouchEvent {
    pub kind: TouchEventKind,
    pub contact: TouchContact,
}

/// Set of concurrent touch contacts.
///
/// Contacts are keyed by platform identifier and remembered in arrival order.
/// Every call emits per-contact events in arrival order, regardless of the
/// order of the raw list.
#[derive(Debug, Default)]
pub struct TouchSet {
    contacts: HashMap<u64, TouchContact>,
    order: Vec<u64>,
    events: EventDispatcher<TouchEvent>,
}

impl TouchSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, f: impl FnMut(&TouchEvent) + 'static) -> ListenerId {
        self.events.subscribe(f)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Starts tracking every identifier in `raw` that is not tracked yet.
    ///
    /// Identifiers that are already tracked are skipped, so repeated begin
    /// notifications for a held contact are harmless.
    pub fn on_touches_begin(&mut self, raw: &[RawTouch], viewport: Vec2) -> Vec<TouchEvent> {
        let mut out = Vec::new();
        for t in raw {
            if self.contacts.contains_key(&t.id) {
                continue;
            }
            let contact = TouchContact::begin(*t, viewport);
            self.contacts.insert(t.id, contact);
            self.order.push(t.id);
            log::trace!("touch {} began at ({}, {})", t.id, t.x, t.y);

            let ev = TouchEvent {
                kind: TouchEventKind::Begin,
                contact,
            };
            self.events.dispatch(&ev);
            out.push(ev);
        }
        out
    }

    /// Moves every tracked contact that appears in `raw`. Unknown ids are ignored.
    pub fn on_touches_move(&mut self, raw: &[RawTouch], viewport: Vec2) -> Vec<TouchEvent> {
        let mut out = Vec::new();
        for id in &self.order {
            let Some(t) = raw.iter().find(|t| t.id == *id) else {
                continue;
            };
            let Some(contact) = self.contacts.get_mut(id) else {
                continue;
            };
            contact.move_to(t.x, t.y, viewport);

            let ev = TouchEvent {
                kind: TouchEventKind::Move,
                contact: *contact,
            };
            self.events.dispatch(&ev);
            out.push(ev);
        }
        out
    }

    /// Ends every tracked contact that is missing from `raw` (the list of
    /// touches still active). Ended contacts keep their last known position.
    pub fn on_touches_end(&mut self, raw: &[RawTouch]) -> Vec<TouchEvent> {
        let ended: Vec<u64> = self
            .order
            .iter()
            .copied()
            .filter(|id| !raw.iter().any(|t| t.id == *id))
            .collect();

        let mut out = Vec::with_capacity(ended.len());
        for id in ended {
            let Some(contact) = self.contacts.remove(&id) else {
                continue;
            };
            self.order.retain(|o| *o != id);
            log::trace!("touch {id} ended");

            let ev = TouchEvent {
                kind: TouchEventKind::End,
                contact,
            };
            self.events.dispatch(&ev);
            out.push(ev);
        }
        out
    }

    // ── queries ───────────────────────────────────────────────────────────

    pub fn get(&self, id: u64) -> Option<&TouchContact> {
        self.contacts.get(&id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.contacts.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Identifiers in arrival order.
    pub fn order(&self) -> &[u64] {
        &self.order
    }

    /// Contacts in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &TouchContact> {
        self.order.iter().filter_map(|id| self.contacts.get(id))
    }
}
