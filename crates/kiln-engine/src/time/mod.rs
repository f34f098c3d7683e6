//! Time subsystem.
//!
//! Frame timing decoupled from the runtime so it can be driven by any host
//! scheduler:
//! - one `Clock` per application
//! - call `tick(timestamp)` once per presented frame to obtain `FrameTime`
//! - `HostTime` supplies "now" in milliseconds for start/stop/restart

mod clock;
mod host_time;

pub use clock::{Clock, ClockEvent, ClockEventKind, ClockState, FrameTime};
pub use host_time::HostTime;
