//! RGB and RYB ("artist's wheel") hue models for the color wheel.
//!
//! RYB stretches the red–yellow span and compresses green–blue so that
//! complementary pairs match painters' expectations. The remapping is a
//! piecewise-linear curve sampled into two 360-entry tables, one per
//! direction, built once on first use.

use std::sync::OnceLock;

/// Control points of the RYB curve, as (display hue, model hue).
const RYB_CURVE: [(i32, i32); 8] = [
    (0, 0),
    (60, 35),
    (122, 60),
    (165, 120),
    (218, 180),
    (275, 240),
    (330, 300),
    (360, 360),
];

/// Hue model used by the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorModel {
    #[default]
    Rgb,
    Ryb,
}

impl ColorModel {
    pub const ALL: [ColorModel; 2] = [ColorModel::Rgb, ColorModel::Ryb];

    /// Model for a stored index; out-of-range indices clamp.
    pub fn from_index(index: i32) -> Self {
        Self::ALL[index.clamp(0, Self::ALL.len() as i32 - 1) as usize]
    }

    pub fn index(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorModel::Rgb => "RGB",
            ColorModel::Ryb => "RYB",
        }
    }

    /// Remap an integer hue.
    ///
    /// `dir > 0` maps wheel angle to color hue, `dir < 0` maps color hue back
    /// to wheel angle, `dir == 0` leaves the hue untouched. Input hues wrap
    /// into 0–359.
    pub fn convert_hue(self, hue: i32, dir: i32) -> i32 {
        match self {
            ColorModel::Rgb => hue,
            ColorModel::Ryb => {
                let tables = ryb_tables();
                let h = hue.rem_euclid(360) as usize;
                match dir.signum() {
                    1 => tables.forward[h],
                    -1 => tables.inverse[h],
                    _ => hue,
                }
            }
        }
    }
}

struct HueTables {
    forward: [i32; 360],
    inverse: [i32; 360],
}

fn ryb_tables() -> &'static HueTables {
    static TABLES: OnceLock<HueTables> = OnceLock::new();
    TABLES.get_or_init(|| {
        let swapped = RYB_CURVE.map(|(x, y)| (y, x));
        HueTables {
            forward: sample_curve(&RYB_CURVE),
            inverse: sample_curve(&swapped),
        }
    })
}

/// Sample a piecewise-linear curve at x = 0..359, rounding to integers.
fn sample_curve(points: &[(i32, i32)]) -> [i32; 360] {
    let mut out = [0; 360];
    for (x, slot) in out.iter_mut().enumerate() {
        let x = x as i32;
        let segment = points
            .windows(2)
            .find(|w| x >= w[0].0 && x <= w[1].0)
            .unwrap_or(&points[points.len() - 2..]);
        let ((x0, y0), (x1, y1)) = (segment[0], segment[1]);
        let t = if x1 == x0 {
            0.0
        } else {
            (x - x0) as f64 / (x1 - x0) as f64
        };
        *slot = (y0 as f64 + t * (y1 - y0) as f64).round() as i32;
    }
    out
}
