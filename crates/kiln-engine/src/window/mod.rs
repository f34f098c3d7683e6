//! Surface geometry, host services and the native window runtime.
//!
//! [`Viewport`] and [`Host`] are platform-agnostic. [`Runtime`] owns the
//! `winit` event loop and window and drives an
//! [`Application`](crate::core::Application) from it.

mod host;
mod runtime;
mod viewport;

pub use host::{HeadlessHost, Host, PlatformFeature};
pub use runtime::Runtime;
pub use viewport::{FullscreenOutcome, Viewport};
