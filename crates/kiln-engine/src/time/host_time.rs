use std::time::Instant;

/// Monotonic millisecond clock anchored at construction.
///
/// Produces timestamps in the same unit and origin the runtime passes to
/// [`Clock::tick`](super::Clock::tick).
#[derive(Debug, Copy, Clone)]
pub struct HostTime {
    origin: Instant,
}

impl HostTime {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds elapsed since this source was created.
    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for HostTime {
    fn default() -> Self {
        Self::new()
    }
}
