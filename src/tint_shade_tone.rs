//! Saturation × value square for a fixed hue (tints, shades and tones).

use crate::bars::{BarKind, SelectorLayout};
use crate::color::{Hsva, PixelColor};
use crate::geometry::PixelPoint;
use crate::math;
use crate::raster::{self, Marker};
use crate::selector::PickerLaw;

/// Primary-area law of the tint/shade/tone selector. The first bar picks hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TintShadeTone;

fn spans(layout: &SelectorLayout) -> (f64, f64) {
    (
        math::span(layout.content().w),
        math::span(layout.primary_height()),
    )
}

fn sat_val(layout: &SelectorLayout, pos: PixelPoint) -> (f64, f64) {
    let rc = layout.content();
    let (umax, vmax) = spans(layout);
    let sat = 100.0 * (pos.x - rc.x) as f64 / umax;
    let val = 100.0 - 100.0 * (pos.y - rc.y) as f64 / vmax;
    (sat, val)
}

impl PickerLaw for TintShadeTone {
    fn first_bar(&self) -> BarKind {
        BarKind::Hue
    }

    fn pick_primary(&mut self, layout: &SelectorLayout, pos: PixelPoint, base: Hsva) -> PixelColor {
        let (sat, val) = sat_val(layout, pos);
        PixelColor::hsva(base.hue(), sat, val, base.alpha())
    }

    fn paint_primary(&self, layout: &SelectorLayout, pos: PixelPoint, base: Hsva) -> Option<Hsva> {
        let (sat, val) = sat_val(layout, pos);
        Some(Hsva::opaque(base.hue(), sat, val))
    }

    fn markers(&self, layout: &SelectorLayout, base: Hsva) -> Vec<Marker> {
        let rc = layout.content();
        let (umax, vmax) = spans(layout);
        let x = rc.x as f64 + base.saturation() / 100.0 * umax;
        let y = rc.y as f64 + (100.0 - base.value()) / 100.0 * vmax;
        vec![raster::ring_in_primary(layout, x, y, base)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bars::BarSpec;
    use crate::geometry::PixelRect;

    fn layout() -> SelectorLayout {
        SelectorLayout::new(
            PixelRect::new(3, 3, 101, 117),
            BarSpec {
                thickness: 8,
                max_bars: 2,
            },
        )
    }

    #[test]
    fn corners_span_saturation_and_value() {
        let l = layout();
        assert_eq!(l.primary_height(), 101);
        let base = Hsva::new(200.0, 10.0, 10.0, 77);
        let mut law = TintShadeTone;
        let top_left = law.pick_primary(&l, PixelPoint::new(3, 3), base).as_hsva().unwrap();
        assert_eq!(
            (top_left.hue(), top_left.saturation(), top_left.value(), top_left.alpha()),
            (200.0, 0.0, 100.0, 77)
        );
        let bottom_right = law.pick_primary(&l, PixelPoint::new(103, 103), base).as_hsva().unwrap();
        assert_eq!((bottom_right.saturation(), bottom_right.value()), (100.0, 0.0));
        let far = law.pick_primary(&l, PixelPoint::new(900, -900), base).as_hsva().unwrap();
        assert_eq!((far.saturation(), far.value()), (100.0, 100.0));
    }

    #[test]
    fn marker_inverts_the_pick() {
        let l = layout();
        let mut law = TintShadeTone;
        let picked = law
            .pick_primary(&l, PixelPoint::new(40, 70), Hsva::opaque(30.0, 0.0, 0.0))
            .as_hsva()
            .unwrap();
        let m = law.markers(&l, picked)[0];
        assert!((m.x - 40.0).abs() < 1e-9);
        assert!((m.y - 70.0).abs() < 1e-9);
    }

    #[test]
    fn paint_ignores_base_alpha() {
        let l = layout();
        let c = TintShadeTone
            .paint_primary(&l, PixelPoint::new(103, 3), Hsva::new(0.0, 0.0, 0.0, 0))
            .unwrap();
        assert_eq!(c.to_rgb(), (255, 0, 0));
        assert_eq!(c.alpha(), 255);
    }
}
