//! Color types shared by every selector.
//!
//! [`Hsva`] keeps hue in degrees (0–360), saturation and value in percent
//! (0–100) and alpha as an 8-bit channel. [`PixelColor`] adds the mask
//! sentinel that selectors return for positions outside any pickable area.

use crate::math;

/// An HSV color with 8-bit alpha. Channels are clamped on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsva {
    hue: f64,
    saturation: f64,
    value: f64,
    alpha: u8,
}

impl Hsva {
    /// Create a color, clamping hue to 0–360 and saturation/value to 0–100.
    pub fn new(hue: f64, saturation: f64, value: f64, alpha: u8) -> Self {
        Self {
            hue: clamp_channel(hue, 360.0),
            saturation: clamp_channel(saturation, 100.0),
            value: clamp_channel(value, 100.0),
            alpha,
        }
    }

    /// Create a color with hue wrapped modulo 360 instead of clamped.
    pub fn wrapped(hue: f64, saturation: f64, value: f64, alpha: u8) -> Self {
        let hue = if hue.is_finite() {
            hue.rem_euclid(360.0)
        } else {
            0.0
        };
        Self::new(hue, saturation, value, alpha)
    }

    /// Create an opaque color.
    pub fn opaque(hue: f64, saturation: f64, value: f64) -> Self {
        Self::new(hue, saturation, value, 255)
    }

    /// Hue in degrees (0–360).
    pub fn hue(&self) -> f64 {
        self.hue
    }
    /// Saturation in percent (0–100).
    pub fn saturation(&self) -> f64 {
        self.saturation
    }
    /// Value in percent (0–100).
    pub fn value(&self) -> f64 {
        self.value
    }
    /// Alpha (0–255).
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Same color with another alpha.
    pub fn with_alpha(self, alpha: u8) -> Self {
        Self { alpha, ..self }
    }

    /// Convert to 0–255 RGB tuple.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        let (r, g, b) = math::hsv_to_rgb(
            self.hue / 360.0,
            self.saturation / 100.0,
            self.value / 100.0,
        );
        (
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
        )
    }

    /// Create from 0–255 RGB values with full opacity.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let (h, s, v) = math::rgb_to_hsv(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
        Self::new(h * 360.0, s * 100.0, v * 100.0, 255)
    }

    /// Perceptual luma in percent (0–100).
    pub fn luma(&self) -> f64 {
        let (r, g, b) = self.to_rgb();
        (0.30 * r as f64 + 0.59 * g as f64 + 0.11 * b as f64) / 255.0 * 100.0
    }

    /// Whether a marker drawn over this color should be dark.
    pub fn wants_dark_marker(&self) -> bool {
        self.luma() > 50.0
    }

    /// Parse a hex string (with or without `#`, 3, 6, or 8 chars).
    ///
    /// 8-char hex is interpreted as RRGGBBAA. 3 and 6-char hex default to full opacity.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let stripped = hex.trim_start_matches('#');
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |range: std::ops::Range<usize>| u8::from_str_radix(&stripped[range], 16).ok();
        match stripped.len() {
            3 => {
                let r = byte(0..1)? * 17;
                let g = byte(1..2)? * 17;
                let b = byte(2..3)? * 17;
                Some(Self::from_rgb(r, g, b))
            }
            6 => Some(Self::from_rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
            8 => {
                let color = Self::from_rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?);
                Some(color.with_alpha(byte(6..8)?))
            }
            _ => None,
        }
    }

    /// Format as uppercase hex (no `#` prefix).
    ///
    /// Returns 6 chars (RRGGBB) when fully opaque, 8 chars (RRGGBBAA) otherwise.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        if self.alpha == 255 {
            format!("{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("{:02X}{:02X}{:02X}{:02X}", r, g, b, self.alpha)
        }
    }
}

impl Default for Hsva {
    fn default() -> Self {
        Self::opaque(0.0, 0.0, 0.0)
    }
}

fn clamp_channel(x: f64, max: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, max)
    }
}

/// A picked color, or the mask ("no color") sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PixelColor {
    #[default]
    Mask,
    Hsva(Hsva),
}

impl PixelColor {
    /// Shorthand for an HSVA color with clamped channels.
    pub fn hsva(hue: f64, saturation: f64, value: f64, alpha: u8) -> Self {
        PixelColor::Hsva(Hsva::new(hue, saturation, value, alpha))
    }

    pub fn is_mask(&self) -> bool {
        matches!(self, PixelColor::Mask)
    }

    /// The HSVA channels, or `None` for the mask.
    pub fn as_hsva(&self) -> Option<Hsva> {
        match self {
            PixelColor::Mask => None,
            PixelColor::Hsva(c) => Some(*c),
        }
    }

    /// The HSVA channels, reading the mask as opaque black.
    pub(crate) fn hsva_or_default(&self) -> Hsva {
        self.as_hsva().unwrap_or_default()
    }

    /// Hex string for status display; the mask has none.
    pub fn to_hex(&self) -> Option<String> {
        self.as_hsva().map(|c| c.to_hex())
    }
}

impl From<Hsva> for PixelColor {
    fn from(c: Hsva) -> Self {
        PixelColor::Hsva(c)
    }
}
