use crate::coords::{Rect, Vec2};
use crate::device::RenderContext;
use crate::input::{PointerState, TouchSet};
use crate::resource::Resources;
use crate::time::{Clock, FrameTime};
use crate::window::Viewport;

/// Deferred state change requested from inside a callback.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum Command {
    StopUpdate,
    RestartUpdate,
    PauseUpdate,
    ResumeUpdate,
    Fullscreen(bool),
    Exit,
}

/// Context passed to every [`App`](super::App) callback.
///
/// Component state is exposed read-only. Mutations are buffered and applied
/// after the current callback returns.
pub struct AppCtx<'a> {
    pub viewport: &'a Viewport,
    pub clock: &'a Clock,
    /// Snapshot of the frame being updated. All zero in every other callback.
    pub time: FrameTime,
    pub pointer: &'a PointerState,
    pub touches: &'a TouchSet,
    pub resources: &'a mut Resources,
    pub(crate) context: &'a mut Option<Box<dyn RenderContext>>,
    pub(crate) commands: &'a mut Vec<Command>,
}

impl<'a> AppCtx<'a> {
    /// The rendering context, if one was created.
    pub fn render_context(&mut self) -> Option<&mut (dyn RenderContext + 'static)> {
        self.context.as_deref_mut()
    }

    pub fn stop_update(&mut self) {
        self.commands.push(Command::StopUpdate);
    }

    pub fn restart_update(&mut self) {
        self.commands.push(Command::RestartUpdate);
    }

    pub fn pause_update(&mut self) {
        self.commands.push(Command::PauseUpdate);
    }

    pub fn resume_update(&mut self) {
        self.commands.push(Command::ResumeUpdate);
    }

    pub fn set_fullscreen(&mut self, enable: bool) {
        self.commands.push(Command::Fullscreen(enable));
    }

    pub fn exit(&mut self) {
        self.commands.push(Command::Exit);
    }

    // ── shortcuts ─────────────────────────────────────────────────────────

    pub fn seconds_elapsed(&self) -> f64 {
        self.clock.elapsed_secs()
    }

    pub fn frames_elapsed(&self) -> u64 {
        self.clock.frame_count()
    }

    /// Last frame interval, in seconds.
    pub fn delta(&self) -> f64 {
        self.clock.delta()
    }

    pub fn window_size(&self) -> Vec2 {
        self.viewport.size()
    }

    pub fn window_center(&self) -> Vec2 {
        self.viewport.center()
    }

    pub fn window_bounds(&self) -> Rect {
        self.viewport.bounds()
    }

    pub fn window_aspect_ratio(&self) -> f32 {
        self.viewport.aspect_ratio()
    }
}
