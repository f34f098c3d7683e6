use crate::event::{EventDispatcher, ListenerId};

/// Coarse run state of a [`Clock`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ClockState {
    #[default]
    Stopped,
    Paused,
    Running,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ClockEventKind {
    Start,
    Stop,
    Pause,
    Resume,
}

impl ClockEventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ClockEventKind::Start => "clock-start",
            ClockEventKind::Stop => "clock-stop",
            ClockEventKind::Pause => "clock-pause",
            ClockEventKind::Resume => "clock-resume",
        }
    }
}

/// Clock lifecycle notification.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockEvent {
    pub kind: ClockEventKind,
    /// Host timestamp (ms) at which the transition happened.
    pub timestamp: f64,
}

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FrameTime {
    /// Host timestamp of this frame, in milliseconds.
    pub timestamp: f64,

    /// Time since the previous frame, in seconds.
    pub dt: f64,

    /// Time since the previous frame, in milliseconds.
    pub frame_ms: f64,

    /// Time since the clock started, in seconds.
    pub elapsed_secs: f64,

    /// Number of frames ticked since the clock (re)started, this one included.
    pub frame_count: u64,
}

/// Frame clock fed by host scheduler timestamps (milliseconds).
///
/// All values are zero until the first `start`. Timestamps that go backwards
/// clamp the elapsed time and the frame interval to zero; they never become
/// negative.
#[derive(Debug, Default)]
pub struct Clock {
    start: f64,
    now: f64,
    previous: f64,
    elapsed: f64,
    frame: f64,
    delta: f64,
    frame_count: u64,
    state: ClockState,
    events: EventDispatcher<ClockEvent>,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures `now` as the time origin and enters the running state.
    pub fn start(&mut self, now: f64) {
        self.start = now;
        self.now = now;
        self.state = ClockState::Running;
        log::debug!("clock started at {now:.3}ms");
        self.emit(ClockEventKind::Start, now);
    }

    /// Advances the clock to `timestamp` and returns the new snapshot.
    ///
    /// Expected once per rendered frame, in timestamp order.
    pub fn tick(&mut self, timestamp: f64) -> FrameTime {
        self.previous = self.now;
        self.now = timestamp;
        self.elapsed = (self.now - self.start).max(0.0);
        self.frame = (self.now - self.previous).max(0.0);
        self.delta = self.frame * 0.001;
        self.frame_count += 1;
        self.frame_time()
    }

    /// Enters the stopped state. Accumulated counters are kept.
    ///
    /// Returns `false` if the clock was already stopped.
    pub fn stop(&mut self, now: f64) -> bool {
        if self.state == ClockState::Stopped {
            return false;
        }
        self.state = ClockState::Stopped;
        log::debug!("clock stopped at {now:.3}ms after {} frames", self.frame_count);
        self.emit(ClockEventKind::Stop, now);
        true
    }

    /// Resets all counters, re-stamps the origin at `now` and enters the running state.
    pub fn restart(&mut self, now: f64) {
        self.frame_count = 0;
        self.start = now;
        self.now = now;
        self.previous = 0.0;
        self.elapsed = 0.0;
        self.frame = 0.0;
        self.delta = 0.0;
        self.state = ClockState::Running;
        log::debug!("clock restarted at {now:.3}ms");
        self.emit(ClockEventKind::Start, now);
    }

    /// Running → paused. Returns `false` in any other state.
    pub fn pause(&mut self, now: f64) -> bool {
        if self.state != ClockState::Running {
            return false;
        }
        self.state = ClockState::Paused;
        self.emit(ClockEventKind::Pause, now);
        true
    }

    /// Paused → running. Returns `false` in any other state.
    ///
    /// The current timestamp is re-stamped so the next frame interval does not
    /// include the time spent paused. Elapsed time still does.
    pub fn resume(&mut self, now: f64) -> bool {
        if self.state != ClockState::Paused {
            return false;
        }
        self.now = now;
        self.state = ClockState::Running;
        self.emit(ClockEventKind::Resume, now);
        true
    }

    pub fn subscribe(&mut self, f: impl FnMut(&ClockEvent) + 'static) -> ListenerId {
        self.events.subscribe(f)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.events.unsubscribe(id)
    }

    // ── queries ───────────────────────────────────────────────────────────

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    pub fn is_paused(&self) -> bool {
        self.state == ClockState::Paused
    }

    pub fn is_stopped(&self) -> bool {
        self.state == ClockState::Stopped
    }

    /// Origin timestamp (ms).
    pub fn start_time(&self) -> f64 {
        self.start
    }

    /// Most recent tick timestamp (ms).
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Timestamp of the tick before the most recent one (ms).
    pub fn previous(&self) -> f64 {
        self.previous
    }

    /// Time since start, in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed
    }

    /// Time since start, in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed * 0.001
    }

    /// Last frame interval, in milliseconds.
    pub fn frame_ms(&self) -> f64 {
        self.frame
    }

    /// Last frame interval, in seconds.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn frame_time(&self) -> FrameTime {
        FrameTime {
            timestamp: self.now,
            dt: self.delta,
            frame_ms: self.frame,
            elapsed_secs: self.elapsed_secs(),
            frame_count: self.frame_count,
        }
    }

    fn emit(&mut self, kind: ClockEventKind, timestamp: f64) {
        self.events.dispatch(&ClockEvent { kind, timestamp });
    }
}
