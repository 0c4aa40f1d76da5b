//! Inverse rendering: selector state → RGBA8 pixels and indicator positions.

use crate::bars::{self, SelectorLayout};
use crate::color::Hsva;
use crate::geometry::{PixelPoint, PixelRect};
use crate::selector::{ColorSelector, PickerLaw};

/// Indicator shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    /// Ring centered on the current color in a 2D area.
    Ring,
    /// Short vertical line across a bar.
    Line,
}

/// An indicator to draw, in widget coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub shape: MarkerShape,
    pub x: f64,
    pub y: f64,
    /// Draw in black rather than white, for contrast with a light background.
    pub dark: bool,
}

impl Marker {
    pub fn ring(x: f64, y: f64, dark: bool) -> Self {
        Self {
            shape: MarkerShape::Ring,
            x,
            y,
            dark,
        }
    }

    pub fn line(x: f64, y: f64, dark: bool) -> Self {
        Self {
            shape: MarkerShape::Line,
            x,
            y,
            dark,
        }
    }
}

/// A solid color box drawn over the raster (harmony swatches).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub rect: PixelRect,
    pub color: Hsva,
}

/// RGBA8 pixels covering a selector's content rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Raster {
    /// RGBA of pixel (`x`, `y`), relative to the content origin.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y * self.width + x) * 4) as usize;
        let px = self.pixels.get(offset..offset + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Rasterize the primary area and the first bar of `selector`.
///
/// The alpha band stays transparent; it is drawn by the checkerboard ramp
/// painter. Primary-area pixels the law leaves unpainted stay transparent.
pub fn rasterize<L: PickerLaw>(selector: &ColorSelector<L>) -> Raster {
    let layout = selector.layout();
    let rc = layout.content();
    let width = rc.w.max(0) as u32;
    let height = rc.h.max(0) as u32;
    let mut pixels = vec![0u8; (width * height * 4) as usize];
    let base = selector.color().hsva_or_default();
    let law = selector.law();
    let first_bar = layout.bar_band(0);

    for py in 0..height {
        let y = rc.y + py as i32;
        let row_offset = (py * width * 4) as usize;
        let in_primary = (py as i32) < layout.primary_height();
        let in_first_bar = first_bar.is_some_and(|band| y >= band.y && y < band.y + band.h);
        if !in_primary && !in_first_bar {
            continue;
        }

        for px in 0..width {
            let x = rc.x + px as i32;
            let color = if in_primary {
                law.paint_primary(layout, PixelPoint::new(x, y), base)
            } else {
                bars::paint_bar(law.first_bar(), layout, x, base)
            };
            if let Some(color) = color {
                let (r, g, b) = color.to_rgb();
                let offset = row_offset + (px * 4) as usize;
                pixels[offset] = r;
                pixels[offset + 1] = g;
                pixels[offset + 2] = b;
                pixels[offset + 3] = 255;
            }
        }
    }

    Raster {
        width,
        height,
        pixels,
    }
}

/// Content-relative ring marker, clamped to the primary area.
pub(crate) fn ring_in_primary(layout: &SelectorLayout, x: f64, y: f64, color: Hsva) -> Marker {
    let rc = layout.primary_rect();
    let x = x.clamp(rc.x as f64, (rc.x + rc.w) as f64);
    let y = y.clamp(rc.y as f64, (rc.y + rc.h) as f64);
    Marker::ring(x, y, color.wants_dark_marker())
}
