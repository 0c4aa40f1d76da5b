//! Hue × lightness spectrum.
//!
//! Hue runs along the long axis; HSL lightness runs across it, from white
//! at the top edge through the pure hue at the midline down to black. The
//! first bar moves the current color along its lit axis (HSL saturation).

use crate::bars::{BarKind, SelectorLayout};
use crate::color::{Hsva, PixelColor};
use crate::geometry::PixelPoint;
use crate::math;
use crate::raster::{self, Marker};
use crate::selector::PickerLaw;

/// Direction the hue axis runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Primary-area law of the spectrum selector.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    orientation: Orientation,
    /// HSL saturation of the last non-degenerate base color.
    last_saturation: f64,
}

impl Default for Spectrum {
    fn default() -> Self {
        Self::new(Orientation::Horizontal)
    }
}

/// Position decomposed along the hue axis (`u`) and the lightness axis (`v`).
struct Axes {
    u: f64,
    v: f64,
    umax: f64,
    vmid: f64,
}

impl Spectrum {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            last_saturation: 100.0,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Saturation reused when the base color sits at a lightness extreme.
    pub fn last_saturation(&self) -> f64 {
        self.last_saturation
    }

    fn axes(&self, layout: &SelectorLayout, pos: PixelPoint) -> Axes {
        let rc = layout.content();
        let extent = layout.primary_height();
        match self.orientation {
            Orientation::Horizontal => Axes {
                u: (pos.x - rc.x) as f64,
                v: (pos.y - rc.y) as f64,
                umax: math::span(rc.w),
                vmid: (extent / 2).max(1) as f64,
            },
            Orientation::Vertical => Axes {
                u: (pos.y - rc.y) as f64,
                v: (pos.x - rc.x) as f64,
                umax: math::span(extent),
                vmid: (rc.w / 2).max(1) as f64,
            },
        }
    }

    fn color_at(&self, axes: &Axes, satl: f64, alpha: u8) -> Hsva {
        let lit = (100.0 - 50.0 * axes.v / axes.vmid).clamp(0.0, 100.0);
        let hue = 360.0 * axes.u / axes.umax;
        let (sat, val) = math::from_lit(lit, satl);
        Hsva::new(hue, sat, val, alpha)
    }
}

impl PickerLaw for Spectrum {
    fn first_bar(&self) -> BarKind {
        BarKind::Saturation
    }

    fn pick_primary(&mut self, layout: &SelectorLayout, pos: PixelPoint, base: Hsva) -> PixelColor {
        let satl = match math::hsl_saturation(base.saturation(), base.value()) {
            Some(satl) => {
                self.last_saturation = satl;
                satl
            }
            None => self.last_saturation,
        };
        let axes = self.axes(layout, pos);
        self.color_at(&axes, satl, base.alpha()).into()
    }

    fn paint_primary(&self, layout: &SelectorLayout, pos: PixelPoint, _base: Hsva) -> Option<Hsva> {
        let axes = self.axes(layout, pos);
        Some(self.color_at(&axes, 100.0, 255))
    }

    fn markers(&self, layout: &SelectorLayout, base: Hsva) -> Vec<Marker> {
        let rc = layout.content();
        let probe = self.axes(layout, PixelPoint::new(rc.x, rc.y));
        let lit = math::lit(base.saturation(), base.value());
        let u = base.hue() / 360.0 * probe.umax;
        let v = (100.0 - lit) * probe.vmid / 50.0;
        let (x, y) = match self.orientation {
            Orientation::Horizontal => (rc.x as f64 + u, rc.y as f64 + v),
            Orientation::Vertical => (rc.x as f64 + v, rc.y as f64 + u),
        };
        vec![raster::ring_in_primary(layout, x, y, base)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bars::BarSpec;
    use crate::geometry::PixelRect;

    fn layout(w: i32, h: i32) -> SelectorLayout {
        SelectorLayout::new(PixelRect::new(0, 0, w, h), BarSpec::none())
    }

    fn pick(spectrum: &mut Spectrum, l: &SelectorLayout, x: i32, y: i32, base: Hsva) -> Hsva {
        spectrum
            .pick_primary(l, PixelPoint::new(x, y), base)
            .as_hsva()
            .unwrap()
    }

    #[test]
    fn top_edge_is_white() {
        let l = layout(200, 100);
        let mut s = Spectrum::default();
        let c = pick(&mut s, &l, 100, 0, Hsva::opaque(180.0, 50.0, 80.0));
        assert!((c.hue() - 180.0).abs() <= 1.0);
        assert_eq!(c.value(), 100.0);
        assert_eq!(c.saturation(), 0.0);
        assert_eq!(s.last_saturation(), 50.0);
    }

    #[test]
    fn midline_keeps_base_hsl_saturation() {
        let l = layout(200, 100);
        let mut s = Spectrum::default();
        let base = Hsva::opaque(0.0, 50.0, 80.0);
        let c = pick(&mut s, &l, 0, 50, base);
        assert_eq!(c.hue(), 0.0);
        let satl = math::hsl_saturation(c.saturation(), c.value()).unwrap();
        assert!((satl - 50.0).abs() < 1e-9);
        assert!((math::lit(c.saturation(), c.value()) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_lightness_reuses_last_saturation() {
        let l = layout(200, 100);
        let mut s = Spectrum::default();
        pick(&mut s, &l, 10, 10, Hsva::opaque(0.0, 40.0, 50.0));
        let remembered = s.last_saturation();
        for base in [Hsva::opaque(0.0, 0.0, 100.0), Hsva::opaque(0.0, 70.0, 0.0)] {
            for (x, y) in [(0, 0), (100, 50), (199, 99), (300, 400), (-20, -20)] {
                let c = pick(&mut s, &l, x, y, base);
                assert!(c.saturation().is_finite() && (0.0..=100.0).contains(&c.saturation()));
                assert!(c.value().is_finite() && (0.0..=100.0).contains(&c.value()));
                assert!((0.0..=360.0).contains(&c.hue()));
            }
            assert_eq!(s.last_saturation(), remembered);
        }
    }

    #[test]
    fn instances_do_not_share_memory() {
        let l = layout(200, 100);
        let mut a = Spectrum::default();
        let b = Spectrum::default();
        pick(&mut a, &l, 10, 10, Hsva::opaque(0.0, 20.0, 50.0));
        assert_ne!(a.last_saturation(), b.last_saturation());
    }

    #[test]
    fn painted_midline_is_pure_hue() {
        let l = layout(361, 100);
        let s = Spectrum::default();
        let c = s.paint_primary(&l, PixelPoint::new(120, 50), Hsva::default()).unwrap();
        assert_eq!(c.to_rgb(), (0, 255, 0));
        let top = s.paint_primary(&l, PixelPoint::new(120, 0), Hsva::default()).unwrap();
        assert_eq!(top.to_rgb(), (255, 255, 255));
        let bottom = s.paint_primary(&l, PixelPoint::new(120, 100), Hsva::default()).unwrap();
        assert_eq!(bottom.to_rgb(), (0, 0, 0));
    }

    #[test]
    fn marker_inverts_the_pick() {
        let l = layout(200, 100);
        let mut s = Spectrum::default();
        let base = Hsva::opaque(90.0, 60.0, 70.0);
        let picked = pick(&mut s, &l, 37, 61, base);
        let m = &s.markers(&l, picked)[0];
        assert!((m.x - 37.0).abs() < 1e-6, "x = {}", m.x);
        assert!((m.y - 61.0).abs() < 1e-6, "y = {}", m.y);
    }

    #[test]
    fn vertical_spectrum_swaps_axes() {
        let l = layout(100, 361);
        let mut s = Spectrum::new(Orientation::Vertical);
        let c = pick(&mut s, &l, 0, 180, Hsva::opaque(0.0, 50.0, 80.0));
        assert_eq!(c.hue(), 180.0);
        assert_eq!(c.value(), 100.0);
        assert_eq!(c.saturation(), 0.0);
        let m = &s.markers(&l, Hsva::opaque(180.0, 100.0, 100.0))[0];
        assert!((m.x - 50.0).abs() < 1e-9);
        assert!((m.y - 180.0).abs() < 1e-9);
    }
}
