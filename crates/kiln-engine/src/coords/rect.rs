use super::Vec2;

/// Axis-aligned rectangle (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Same origin, new size.
    #[inline]
    pub fn with_size(self, w: f32, h: f32) -> Self {
        Rect::from_origin_size(self.origin, Vec2::new(w, h))
    }

    /// Midpoint of the rectangle.
    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(
            self.origin.x + self.size.x * 0.5,
            self.origin.y + self.size.y * 0.5,
        )
    }

    /// `width / height`, or 0 when the height is zero.
    #[inline]
    pub fn aspect_ratio(self) -> f32 {
        if self.size.y == 0.0 {
            0.0
        } else {
            self.size.x / self.size.y
        }
    }

    /// The rectangle expressed in units of its own size.
    ///
    /// A rect at the origin maps to `(0, 0, 1, 1)`. An empty axis maps to 0.
    #[inline]
    pub fn unit_normalized(self) -> Self {
        let unit = |len: f32| if len == 0.0 { 0.0 } else { 1.0 };
        Rect::from_origin_size(
            self.origin.div_or_zero(self.size),
            Vec2::new(unit(self.size.x), unit(self.size.y)),
        )
    }
}
