use crate::coords::{Rect, Vec2};

use super::host::Host;

/// Result of [`Viewport::set_fullscreen`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FullscreenOutcome {
    /// Request matched the current state; nothing happened.
    Unchanged,
    /// Flag toggled and the host accepted the request.
    Applied,
    /// Flag toggled but the host has no fullscreen support.
    Unsupported,
}

/// Rendering surface geometry.
///
/// `bounds` are in surface pixels: the logical size passed to [`resize`]
/// multiplied by the content scale. `center` and `aspect_ratio` are derived
/// from `bounds` on every change.
///
/// [`resize`]: Viewport::resize
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    bounds: Rect,
    bounds_normalized: Rect,
    center: Vec2,
    aspect_ratio: f32,
    content_scale: f32,
    fullscreen: bool,
    /// Unscaled size from the last resize, used for change detection.
    logical_size: Vec2,
}

impl Viewport {
    /// Viewport at the origin with the initial surface size and content scale 1.
    pub fn new(width: f32, height: f32) -> Self {
        let bounds = Rect::new(0.0, 0.0, width, height);
        Self {
            bounds,
            bounds_normalized: bounds.unit_normalized(),
            center: bounds.center(),
            aspect_ratio: bounds.aspect_ratio(),
            content_scale: 1.0,
            fullscreen: false,
            logical_size: Vec2::new(width, height),
        }
    }

    /// Resizes to `width x height` logical pixels at `content_scale`.
    ///
    /// Returns `None` when all three values equal the current ones (exact
    /// comparison) and nothing was recomputed. Otherwise returns the new
    /// scaled surface size, which the caller forwards to the render context.
    pub fn resize(&mut self, width: f32, height: f32, content_scale: f32) -> Option<Vec2> {
        if width == self.logical_size.x
            && height == self.logical_size.y
            && content_scale == self.content_scale
        {
            return None;
        }

        self.content_scale = content_scale;
        self.logical_size = Vec2::new(width, height);

        let ws = width * content_scale;
        let hs = height * content_scale;
        self.set_bounds(self.bounds.with_size(ws, hs));

        log::debug!("viewport resized to {ws}x{hs} (scale {content_scale})");
        Some(self.bounds.size)
    }

    /// Enters or leaves fullscreen through `host`.
    ///
    /// Nothing happens when the request already matches both the internal
    /// flag and the host state. Host failures are reported, never raised.
    pub fn set_fullscreen(&mut self, enable: bool, host: &mut dyn Host) -> FullscreenOutcome {
        let host_fullscreen = host.is_fullscreen();
        if enable == self.fullscreen && enable == host_fullscreen {
            return FullscreenOutcome::Unchanged;
        }

        self.fullscreen = enable;
        if host.set_fullscreen(enable) {
            log::debug!("fullscreen {}", if enable { "entered" } else { "left" });
            FullscreenOutcome::Applied
        } else {
            log::warn!("fullscreen not supported by host");
            FullscreenOutcome::Unsupported
        }
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.bounds_normalized = bounds.unit_normalized();
        self.center = bounds.center();
        self.aspect_ratio = bounds.aspect_ratio();
    }

    // ── accessors ─────────────────────────────────────────────────────────

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Writes the bounds into `out` and returns it.
    pub fn bounds_into<'a>(&self, out: &'a mut Rect) -> &'a mut Rect {
        *out = self.bounds;
        out
    }

    pub fn bounds_normalized(&self) -> Rect {
        self.bounds_normalized
    }

    pub fn size(&self) -> Vec2 {
        self.bounds.size
    }

    pub fn size_into<'a>(&self, out: &'a mut Vec2) -> &'a mut Vec2 {
        *out = self.bounds.size;
        out
    }

    pub fn width(&self) -> f32 {
        self.bounds.size.x
    }

    pub fn height(&self) -> f32 {
        self.bounds.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn center_into<'a>(&self, out: &'a mut Vec2) -> &'a mut Vec2 {
        *out = self.center;
        out
    }

    /// `width / height`; 0 for a zero-height surface.
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn content_scale(&self) -> f32 {
        self.content_scale
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
