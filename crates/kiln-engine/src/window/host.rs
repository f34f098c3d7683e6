use crate::device::ContextKind;
use crate::time::HostTime;

/// Platform features that may be missing at runtime.
///
/// A missing feature is reported through `App::on_feature_unavailable`; it is
/// never an error.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PlatformFeature {
    Fullscreen,
    /// The requested rendering context could not be created.
    RenderContext(ContextKind),
}

/// Host platform services the application depends on.
pub trait Host {
    /// Host clock in milliseconds. Must be monotonic and share its origin with
    /// the timestamps passed to `Application::frame`.
    fn now_ms(&self) -> f64;

    /// Platform-side fullscreen state.
    fn is_fullscreen(&self) -> bool {
        false
    }

    /// Requests entering or leaving fullscreen.
    ///
    /// Returns `false` when the platform has no fullscreen support.
    fn set_fullscreen(&mut self, enable: bool) -> bool {
        let _ = enable;
        false
    }
}

/// Host without a window: monotonic clock only, no fullscreen.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    time: HostTime,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Host for HeadlessHost {
    fn now_ms(&self) -> f64 {
        self.time.now_ms()
    }
}
