//! Value/saturation/hue/alpha bars stacked under each selector's primary area.
//!
//! Every selector shares the same geometry: up to two bars of fixed thickness
//! at the bottom of the content rectangle. The first bar sweeps a channel that
//! depends on the selector; the second bar is always alpha.

use crate::color::Hsva;
use crate::constants;
use crate::geometry::{PixelPoint, PixelRect};
use crate::math;
use crate::raster::Marker;

/// Channel swept by a selector's first bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarKind {
    /// Moves along the lit axis: hue and lightness stay fixed.
    Saturation,
    Hue,
    Value,
    Alpha,
}

/// Bar grabbed at pointer-down, held for the rest of the drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapturedBar {
    #[default]
    None,
    First,
    Alpha,
}

/// How many bars a selector may show and how thick they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarSpec {
    pub thickness: i32,
    pub max_bars: i32,
}

impl Default for BarSpec {
    fn default() -> Self {
        Self {
            thickness: constants::BAR_THICKNESS,
            max_bars: if cfg!(feature = "alpha") { 2 } else { 1 },
        }
    }
}

impl BarSpec {
    /// No bars at all; the primary area takes the whole content.
    pub fn none() -> Self {
        Self {
            max_bars: 0,
            ..Self::default()
        }
    }

    /// Number of bars that fit in a content area `height` pixels tall.
    pub fn count_for(&self, height: i32) -> i32 {
        let thickness = self.thickness.max(1);
        let limit = self.max_bars.clamp(0, 2);
        (height / thickness / 2 - 1).clamp(0, limit)
    }
}

/// Content rectangle split into a primary area and its bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectorLayout {
    content: PixelRect,
    bar_size: i32,
    bar_count: i32,
}

impl SelectorLayout {
    pub fn new(content: PixelRect, spec: BarSpec) -> Self {
        Self {
            content,
            bar_size: spec.thickness.max(1),
            bar_count: spec.count_for(content.h),
        }
    }

    pub fn content(&self) -> PixelRect {
        self.content
    }

    pub fn bar_size(&self) -> i32 {
        self.bar_size
    }

    pub fn bar_count(&self) -> i32 {
        self.bar_count
    }

    /// Total height taken by the bars.
    pub fn bar_offset(&self) -> i32 {
        self.bar_size * self.bar_count
    }

    /// Height left for the primary area.
    pub fn primary_height(&self) -> i32 {
        (self.content.h - self.bar_offset()).max(0)
    }

    pub fn primary_rect(&self) -> PixelRect {
        PixelRect::new(
            self.content.x,
            self.content.y,
            self.content.w,
            self.primary_height(),
        )
    }

    /// Band occupied by bar `index` (0 = first bar, 1 = alpha), if shown.
    pub fn bar_band(&self, index: i32) -> Option<PixelRect> {
        if index < 0 || index >= self.bar_count {
            return None;
        }
        let y = self.content.y + self.content.h - self.bar_offset() + index * self.bar_size;
        Some(PixelRect::new(self.content.x, y, self.content.w, self.bar_size))
    }

    /// Which bar, if any, lies under `pos`.
    pub fn hit_bar(&self, pos: PixelPoint) -> CapturedBar {
        if self.content.is_empty() || !self.content.contains(pos) {
            return CapturedBar::None;
        }
        if self.bar_band(0).is_some_and(|band| band.contains(pos)) {
            CapturedBar::First
        } else if self.bar_band(1).is_some_and(|band| band.contains(pos)) {
            CapturedBar::Alpha
        } else {
            CapturedBar::None
        }
    }

    /// Position along a bar as 0.0–1.0; positions off the bar clamp.
    fn bar_ratio(&self, x: i32) -> f64 {
        math::clamp01((x - self.content.x) as f64 / math::span(self.content.w))
    }

    /// x coordinate for a bar ratio; the inverse of [`Self::bar_ratio`].
    fn bar_x(&self, t: f64) -> f64 {
        self.content.x as f64 + t * math::span(self.content.w)
    }
}

/// Color picked at `pos` on a bar sweeping `kind`.
pub(crate) fn pick_bar(kind: BarKind, layout: &SelectorLayout, pos: PixelPoint, base: Hsva) -> Hsva {
    sweep(kind, layout.bar_ratio(pos.x), base)
}

fn sweep(kind: BarKind, t: f64, base: Hsva) -> Hsva {
    match kind {
        BarKind::Alpha => base.with_alpha((255.0 * t).round() as u8),
        BarKind::Saturation => {
            let lit = math::lit(base.saturation(), base.value());
            let val = lit + t * lit.min(100.0 - lit);
            let sat = if val == 0.0 {
                0.0
            } else {
                200.0 * (1.0 - lit / val)
            };
            Hsva::new(base.hue(), sat, val, base.alpha())
        }
        BarKind::Hue => Hsva::new(360.0 * t, base.saturation(), base.value(), base.alpha()),
        BarKind::Value => Hsva::new(base.hue(), base.saturation(), 100.0 * t, base.alpha()),
    }
}

/// Display color for column `x` (absolute) of a bar. Alpha bars have none;
/// they are drawn by the checkerboard ramp painter.
pub(crate) fn paint_bar(kind: BarKind, layout: &SelectorLayout, x: i32, base: Hsva) -> Option<Hsva> {
    let t = layout.bar_ratio(x);
    match kind {
        BarKind::Alpha => None,
        BarKind::Hue => Some(Hsva::opaque(360.0 * t, 100.0, 100.0)),
        _ => Some(sweep(kind, t, base).with_alpha(255)),
    }
}

/// Marker for the current color on bar `index` sweeping `kind`.
pub(crate) fn bar_marker(kind: BarKind, layout: &SelectorLayout, index: i32, base: Hsva) -> Option<Marker> {
    let band = layout.bar_band(index)?;
    let y = band.y as f64 + band.h as f64 / 2.0;
    let (t, tint) = match kind {
        BarKind::Saturation => {
            let satl = math::hsl_saturation(base.saturation(), base.value())?;
            (satl / 100.0, base)
        }
        BarKind::Hue => (base.hue() / 360.0, Hsva::opaque(base.hue(), 100.0, 100.0)),
        BarKind::Value => (base.value() / 100.0, base),
        BarKind::Alpha => (base.alpha() as f64 / 255.0, base),
    };
    Some(Marker::line(layout.bar_x(math::clamp01(t)), y, tint.wants_dark_marker()))
}
