//! Core engine-facing contracts.
//!
//! This module defines the interface between a host runtime (native window
//! loop, tests, embedders) and user code. [`Application`] owns the viewport,
//! clock and input devices; the host feeds it timestamps, raw input and
//! resizes, and user code sees it through [`App`] callbacks.

mod app;
mod application;
mod config;
mod ctx;

pub use app::{App, AppControl};
pub use application::Application;
pub use config::{
    AppConfig,
    ConfigurationError,
    InputTargets,
    ResolvedInputTargets,
    SurfaceKind,
    SurfaceTarget,
};
pub use ctx::AppCtx;
