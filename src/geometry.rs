//! Integer pixel geometry used by hit testing and rasterization.

/// Largest coordinate magnitude a pointer position is clamped to.
pub const COORD_LIMIT: i32 = 1 << 24;

fn snap(v: f64) -> i32 {
    if v.is_nan() {
        return 0;
    }
    v.floor().clamp(-COORD_LIMIT as f64, COORD_LIMIT as f64) as i32
}

/// A point in logical pixels, relative to the widget origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Snap a floating-point position to the pixel containing it.
    ///
    /// Coordinates are clamped to ±[`COORD_LIMIT`] so offsets between points
    /// cannot overflow; NaN maps to 0.
    pub fn from_f64(x: f64, y: f64) -> Self {
        Self::new(snap(x), snap(y))
    }
}

/// An axis-aligned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    pub fn contains(&self, p: PixelPoint) -> bool {
        p.x >= self.x && p.y >= self.y && p.x < self.x + self.w && p.y < self.y + self.h
    }

    /// Shrink by `border` on every side; never produces a negative size.
    pub fn inset(&self, border: i32) -> Self {
        Self {
            x: self.x + border,
            y: self.y + border,
            w: (self.w - 2 * border).max(0),
            h: (self.h - 2 * border).max(0),
        }
    }
}
