//! Coordinate and geometry types shared by the input devices and the viewport.
//!
//! Canonical space:
//! - Surface pixels (content scale applied)
//! - Origin top-left
//! - +X right, +Y down

mod color;
mod rect;
mod vec2;

pub use color::ColorRgba;
pub use rect::Rect;
pub use vec2::Vec2;
