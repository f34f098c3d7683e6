//! Rendering contexts.
//!
//! The application only needs two things from a context: which kind it is, and
//! whether its backing surface must be told about size changes. The wgpu-backed
//! [`GpuContext`] serves the raster kinds (`2d` and `3d`) on native windows.

mod context;
mod gpu;

pub use context::{ContextKind, PresentError, RenderContext};
pub use gpu::{GpuContext, GpuInit};
