use crate::input::{KeyEvent, PointerEvent, TouchEvent};
use crate::time::ClockEvent;
use crate::window::PlatformFeature;

use super::ctx::AppCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by user code.
///
/// Every callback receives an [`AppCtx`]; state changes requested through it
/// are applied once the callback returns.
pub trait App {
    /// Called once, before the first frame.
    fn setup(&mut self, ctx: &mut AppCtx<'_>);

    /// Called once per frame while looping, or once after `setup` otherwise.
    fn update(&mut self, ctx: &mut AppCtx<'_>) -> AppControl {
        let _ = ctx;
        AppControl::Continue
    }

    fn on_pointer(&mut self, event: &PointerEvent, ctx: &mut AppCtx<'_>) {
        let _ = (event, ctx);
    }

    fn on_touch(&mut self, event: &TouchEvent, ctx: &mut AppCtx<'_>) {
        let _ = (event, ctx);
    }

    fn on_key(&mut self, event: &KeyEvent, ctx: &mut AppCtx<'_>) {
        let _ = (event, ctx);
    }

    /// Clock transitions caused by stop/restart/pause/resume.
    fn on_clock(&mut self, event: &ClockEvent, ctx: &mut AppCtx<'_>) {
        let _ = (event, ctx);
    }

    /// A platform feature the application asked for is missing.
    fn on_feature_unavailable(&mut self, feature: PlatformFeature) {
        let _ = feature;
    }
}
