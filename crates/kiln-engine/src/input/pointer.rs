use crate::coords::Vec2;
use crate::event::{EventDispatcher, ListenerId};

use super::types::{MouseButton, MouseWheelDelta};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PointerEventKind {
    Press,
    Drag,
    Move,
    Release,
    Enter,
    Exit,
    Wheel,
}

impl PointerEventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PointerEventKind::Press => "press",
            PointerEventKind::Drag => "drag",
            PointerEventKind::Move => "move",
            PointerEventKind::Release => "release",
            PointerEventKind::Enter => "enter",
            PointerEventKind::Exit => "exit",
            PointerEventKind::Wheel => "wheel",
        }
    }
}

/// Pointer state snapshot.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PointerState {
    /// Current position in surface pixels.
    pub position: Vec2,
    pub position_prev: Vec2,
    /// `position - position_prev`.
    pub delta: Vec2,
    /// `position` divided by the viewport size at the time of the update.
    pub normalized: Vec2,
    pub normalized_prev: Vec2,
    pub down: bool,
    /// Button of the most recent press/release.
    pub button: Option<MouseButton>,
    /// Vertical component of the most recent wheel event.
    pub wheel_delta: f32,
    /// −1 or +1 once a wheel event has been seen, 0 before.
    pub wheel_direction: i8,
}

/// Pointer event delivered to subscribers, carrying the state after the update.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub state: PointerState,
}

/// Single-pointer device.
///
/// Each entry point takes the *current* viewport size, so normalized
/// coordinates are never computed against a stale size.
#[derive(Debug, Default)]
pub struct PointerDevice {
    state: PointerState,
    events: EventDispatcher<PointerEvent>,
}

impl PointerDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, f: impl FnMut(&PointerEvent) + 'static) -> ListenerId {
        self.events.subscribe(f)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Button pressed at `(x, y)`. Position and previous position both snap to
    /// the press point, so the delta is zero.
    pub fn on_press(&mut self, x: f32, y: f32, button: MouseButton, viewport: Vec2) -> PointerEvent {
        let p = Vec2::new(x, y);
        let n = p.div_or_zero(viewport);

        let s = &mut self.state;
        s.position = p;
        s.position_prev = p;
        s.delta = Vec2::zero();
        s.normalized = n;
        s.normalized_prev = n;
        s.down = true;
        s.button = Some(button);

        self.emit(PointerEventKind::Press)
    }

    /// Pointer moved. Emits `Drag` while a button is down, `Move` otherwise.
    pub fn on_move(&mut self, x: f32, y: f32, viewport: Vec2) -> PointerEvent {
        self.update_position(x, y, viewport);
        let kind = if self.state.down {
            PointerEventKind::Drag
        } else {
            PointerEventKind::Move
        };
        self.emit(kind)
    }

    pub fn on_release(&mut self, x: f32, y: f32, button: MouseButton, viewport: Vec2) -> PointerEvent {
        self.update_position(x, y, viewport);
        self.state.down = false;
        self.state.button = Some(button);
        self.emit(PointerEventKind::Release)
    }

    /// Positive vertical deltas (scroll up / away) map to +1, everything else to −1.
    pub fn on_wheel(&mut self, delta: MouseWheelDelta) -> PointerEvent {
        let dy = delta.vertical();
        self.state.wheel_delta = dy;
        self.state.wheel_direction = if dy > 0.0 { 1 } else { -1 };
        self.emit(PointerEventKind::Wheel)
    }

    pub fn on_enter(&mut self) -> PointerEvent {
        self.emit(PointerEventKind::Enter)
    }

    pub fn on_exit(&mut self) -> PointerEvent {
        self.emit(PointerEventKind::Exit)
    }

    // ── queries ───────────────────────────────────────────────────────────

    pub fn state(&self) -> &PointerState {
        &self.state
    }

    pub fn position(&self) -> Vec2 {
        self.state.position
    }

    pub fn position_prev(&self) -> Vec2 {
        self.state.position_prev
    }

    pub fn delta(&self) -> Vec2 {
        self.state.delta
    }

    pub fn normalized(&self) -> Vec2 {
        self.state.normalized
    }

    pub fn normalized_prev(&self) -> Vec2 {
        self.state.normalized_prev
    }

    pub fn is_down(&self) -> bool {
        self.state.down
    }

    pub fn wheel_delta(&self) -> f32 {
        self.state.wheel_delta
    }

    pub fn wheel_direction(&self) -> i8 {
        self.state.wheel_direction
    }

    fn update_position(&mut self, x: f32, y: f32, viewport: Vec2) {
        let s = &mut self.state;
        s.position_prev = s.position;
        s.position = Vec2::new(x, y);
        s.delta = s.position - s.position_prev;
        s.normalized_prev = s.position_prev.div_or_zero(viewport);
        s.normalized = s.position.div_or_zero(viewport);
    }

    fn emit(&mut self, kind: PointerEventKind) -> PointerEvent {
        let ev = PointerEvent {
            kind,
            state: self.state,
        };
        self.events.dispatch(&ev);
        ev
    }
}
