//! Kiln engine crate.
//!
//! Application bootstrap for interactive graphics programs: frame clock,
//! pointer/touch/keyboard devices, viewport geometry, startup resources and
//! a native `winit` + `wgpu` runtime that drives them.

pub mod coords;
pub mod core;
pub mod device;
pub mod event;
pub mod input;
pub mod resource;
pub mod time;
pub mod window;

pub mod logging;

mod error;

pub use error::KilnError;
