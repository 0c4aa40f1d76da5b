//! Color harmonies suggested by the wheel.

use crate::color::Hsva;
use crate::hue_model::ColorModel;

/// Harmony template shown as swatches above the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Harmony {
    #[default]
    None,
    Complementary,
    Monochromatic,
    Analogous,
    SplitComplementary,
    Triadic,
    Tetradic,
    Square,
}

struct Template {
    hues: &'static [i32],
    sats: &'static [i32],
}

const TEMPLATES: [Template; 8] = [
    Template { hues: &[0], sats: &[100] },
    Template { hues: &[0, 180], sats: &[100, 100] },
    Template { hues: &[0, 0], sats: &[100, 50] },
    Template { hues: &[0, 30, 330], sats: &[100, 100, 100] },
    Template { hues: &[0, 150, 210], sats: &[100, 100, 100] },
    Template { hues: &[0, 120, 240], sats: &[100, 100, 100] },
    Template { hues: &[0, 120, 180, 300], sats: &[100, 100, 100, 100] },
    Template { hues: &[0, 90, 180, 270], sats: &[100, 100, 100, 100] },
];

impl Harmony {
    pub const ALL: [Harmony; 8] = [
        Harmony::None,
        Harmony::Complementary,
        Harmony::Monochromatic,
        Harmony::Analogous,
        Harmony::SplitComplementary,
        Harmony::Triadic,
        Harmony::Tetradic,
        Harmony::Square,
    ];

    /// Harmony for a stored index; out-of-range indices clamp.
    pub fn from_index(index: i32) -> Self {
        Self::ALL[index.clamp(0, Self::ALL.len() as i32 - 1) as usize]
    }

    pub fn index(self) -> i32 {
        self as i32
    }

    /// The next template, wrapping around after `Square`.
    pub fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Harmony::None => "Without Harmonies",
            Harmony::Complementary => "Complementary",
            Harmony::Monochromatic => "Monochromatic",
            Harmony::Analogous => "Analogous",
            Harmony::SplitComplementary => "Split-Complementary",
            Harmony::Triadic => "Triadic",
            Harmony::Tetradic => "Tetradic",
            Harmony::Square => "Square",
        }
    }

    /// Number of colors in the full template.
    pub fn swatch_count(self) -> usize {
        TEMPLATES[self as usize].hues.len()
    }

    /// Colors of this harmony for `base`, in wheel-angle space.
    ///
    /// Hues are expressed on the wheel (model hue converted back with
    /// `dir = -1`); use [`displayed`] to get the color a swatch shows. A black
    /// or gray base collapses every harmony to its first color.
    pub fn colors(self, model: ColorModel, base: Hsva) -> Vec<Hsva> {
        let template = &TEMPLATES[self as usize];
        let count = if base.value() > 0.0 && base.saturation() > 0.0 {
            template.hues.len()
        } else {
            1
        };
        let angle = model.convert_hue(base.hue() as i32, -1) as f64;
        template
            .hues
            .iter()
            .zip(template.sats)
            .take(count)
            .map(|(&offset, &pct)| {
                let hue = (angle + offset as f64) % 360.0;
                let sat = base.saturation() * pct as f64 / 100.0;
                Hsva::opaque(hue, sat, base.value())
            })
            .collect()
    }
}

/// Swatch color for a harmony entry: hue remapped through the model, alpha
/// taken from `base`.
pub fn displayed(model: ColorModel, entry: Hsva, base: Hsva) -> Hsva {
    Hsva::new(
        model.convert_hue(entry.hue() as i32, 1) as f64,
        entry.saturation(),
        entry.value(),
        base.alpha(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_always_yields_one_color() {
        let base = Hsva::opaque(100.0, 60.0, 60.0);
        assert_eq!(Harmony::None.colors(ColorModel::Rgb, base).len(), 1);
        assert_eq!(Harmony::None.colors(ColorModel::Rgb, Hsva::default()).len(), 1);
    }

    #[test]
    fn square_collapses_on_gray() {
        let base = Hsva::opaque(100.0, 60.0, 60.0);
        assert_eq!(Harmony::Square.colors(ColorModel::Rgb, base).len(), 4);
        let gray = Hsva::opaque(100.0, 0.0, 60.0);
        assert_eq!(Harmony::Square.colors(ColorModel::Rgb, gray).len(), 1);
        let black = Hsva::opaque(100.0, 60.0, 0.0);
        assert_eq!(Harmony::Square.colors(ColorModel::Ryb, black).len(), 1);
    }

    #[test]
    fn complementary_wraps_hue() {
        let base = Hsva::opaque(270.0, 80.0, 50.0);
        let colors = Harmony::Complementary.colors(ColorModel::Rgb, base);
        assert_eq!(colors[0].hue(), 270.0);
        assert_eq!(colors[1].hue(), 90.0);
        assert!(colors.iter().all(|c| c.value() == 50.0));
    }

    #[test]
    fn monochromatic_halves_saturation() {
        let base = Hsva::opaque(10.0, 80.0, 50.0);
        let colors = Harmony::Monochromatic.colors(ColorModel::Rgb, base);
        assert_eq!(colors[1].saturation(), 40.0);
        assert_eq!(colors[1].hue(), 10.0);
    }

    #[test]
    fn ryb_harmony_is_computed_on_the_wheel() {
        // Model hue 35 sits at wheel angle 60 under RYB.
        let base = Hsva::opaque(35.0, 100.0, 100.0);
        let colors = Harmony::Complementary.colors(ColorModel::Ryb, base);
        assert_eq!(colors[0].hue(), 60.0);
        assert_eq!(colors[1].hue(), 240.0);
        let first = displayed(ColorModel::Ryb, colors[0], base.with_alpha(9));
        assert_eq!(first.hue(), 35.0);
        assert_eq!(first.alpha(), 9);
    }

    #[test]
    fn index_clamps_and_cycles() {
        assert_eq!(Harmony::from_index(-1), Harmony::None);
        assert_eq!(Harmony::from_index(7), Harmony::Square);
        assert_eq!(Harmony::from_index(42), Harmony::Square);
        assert_eq!(Harmony::Square.next(), Harmony::None);
        assert_eq!(Harmony::Triadic.swatch_count(), 3);
    }
}
