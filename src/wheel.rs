//! Hue/saturation color wheel with harmonies.
//!
//! Angle maps to hue (green at 12 o'clock under the RGB model) and distance
//! from the center maps to saturation. Value and alpha come from the bars.
//! Harmony swatches sit along the top edge of the content.

use std::f64::consts::PI;

use tracing::{debug, warn};

use crate::bars::{BarKind, CapturedBar, SelectorLayout};
use crate::color::{Hsva, PixelColor};
use crate::constants;
use crate::geometry::{PixelPoint, PixelRect};
use crate::harmony::{self, Harmony};
use crate::hue_model::ColorModel;
use crate::prefs::{ColorBarPreferences, PreferenceStore};
use crate::raster::{Marker, Swatch};
use crate::selector::PickerLaw;

/// Primary-area law of the wheel selector. The first bar picks value.
#[derive(Debug, Clone, Default)]
pub struct ColorWheel {
    discrete: bool,
    model: ColorModel,
    harmony: Harmony,
    store: Option<PreferenceStore>,
}

/// Wheel placement inside the content rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelGeometry {
    pub center: PixelPoint,
    pub radius: i32,
}

impl WheelGeometry {
    pub fn of(layout: &SelectorLayout) -> Self {
        let rc = layout.content();
        let offset = layout.bar_offset();
        let radius = (rc.w / 2)
            .min((rc.h - constants::WHEEL_VERTICAL_MARGIN - offset) / 2)
            .max(0);
        let top = rc.y + rc.h / 2 - radius + 4 - offset / 2;
        let left = rc.x + rc.w / 2 - radius;
        Self {
            center: PixelPoint::new(left + radius, top + radius),
            radius,
        }
    }
}

impl ColorWheel {
    /// A wheel with the given options that does not persist them.
    pub fn new(discrete: bool, model: ColorModel, harmony: Harmony) -> Self {
        Self {
            discrete,
            model,
            harmony,
            store: None,
        }
    }

    /// A wheel whose options come from, and are saved to, `store`.
    pub fn with_preferences(store: PreferenceStore) -> Self {
        let ColorBarPreferences {
            discrete_wheel,
            wheel_model,
            harmony,
        } = store.values();
        Self {
            discrete: discrete_wheel,
            model: wheel_model,
            harmony,
            store: Some(store),
        }
    }

    pub fn is_discrete(&self) -> bool {
        self.discrete
    }

    pub fn model(&self) -> ColorModel {
        self.model
    }

    pub fn harmony(&self) -> Harmony {
        self.harmony
    }

    pub fn set_discrete(&mut self, discrete: bool) {
        self.discrete = discrete;
        self.persist();
    }

    pub fn set_model(&mut self, model: ColorModel) {
        self.model = model;
        self.persist();
    }

    pub fn set_harmony(&mut self, harmony: Harmony) {
        self.harmony = harmony;
        self.persist();
    }

    fn persist(&mut self) {
        let (discrete, model, harmony) = (self.discrete, self.model, self.harmony);
        debug!(discrete, ?model, ?harmony, "wheel options changed");
        let Some(store) = self.store.as_mut() else {
            return;
        };
        let saved = store.update(|prefs| {
            prefs.discrete_wheel = discrete;
            prefs.wheel_model = model;
            prefs.harmony = harmony;
        });
        if let Err(err) = saved {
            warn!(error = %err, "failed to save wheel options");
        }
    }

    /// Color on the wheel under `pos`, or the mask outside it.
    pub fn wheel_color(&self, layout: &SelectorLayout, pos: PixelPoint, base: Hsva) -> PixelColor {
        let geometry = WheelGeometry::of(layout);
        if geometry.radius <= 0 {
            return PixelColor::Mask;
        }
        let u = (pos.x - geometry.center.x) as f64;
        let v = (pos.y - geometry.center.y) as f64;
        let d = (u * u + v * v).sqrt();
        let radius = geometry.radius as f64;
        if d >= radius + constants::WHEEL_PICK_TOLERANCE {
            return PixelColor::Mask;
        }

        // +180 leaves atan2's range non-negative; +210 puts green at 12 o'clock.
        let mut hue = (180.0 * (-v).atan2(u) / PI) as i32 + 180 + 180 + 30;
        if self.discrete {
            hue = (hue + 15) / 30 * 30;
        }
        let hue = self.model.convert_hue(hue % 360, 1);

        let sat = if self.discrete {
            (120.0 * d / radius) as i32 / 20 * 20
        } else {
            (100.0 * d / radius) as i32
        };

        PixelColor::hsva(hue as f64, sat as f64, base.value(), base.alpha())
    }

    fn swatch_width(layout: &SelectorLayout) -> i32 {
        (layout.content().w / 5 - 6).max(constants::SWATCH_MIN_WIDTH)
    }

    fn swatch_rect(layout: &SelectorLayout, index: i32) -> PixelRect {
        let rc = layout.content();
        let width = Self::swatch_width(layout);
        PixelRect::new(rc.x + index * width, rc.y, width - 1, constants::SWATCH_HEIGHT)
    }
}

impl PickerLaw for ColorWheel {
    fn first_bar(&self) -> BarKind {
        BarKind::Value
    }

    fn pick_primary(&mut self, layout: &SelectorLayout, pos: PixelPoint, base: Hsva) -> PixelColor {
        self.wheel_color(layout, pos, base)
    }

    fn pick_overlay(&self, layout: &SelectorLayout, pos: PixelPoint, base: Hsva) -> Option<Hsva> {
        self.harmony
            .colors(self.model, base)
            .into_iter()
            .enumerate()
            .find(|(i, _)| Self::swatch_rect(layout, *i as i32).contains(pos))
            .map(|(_, entry)| harmony::displayed(self.model, entry, base))
    }

    fn paint_primary(&self, layout: &SelectorLayout, pos: PixelPoint, base: Hsva) -> Option<Hsva> {
        self.wheel_color(layout, pos, base)
            .as_hsva()
            .map(|c| Hsva::opaque(c.hue(), c.saturation(), 100.0))
    }

    fn markers(&self, layout: &SelectorLayout, base: Hsva) -> Vec<Marker> {
        let geometry = WheelGeometry::of(layout);
        let radius = geometry.radius as f64;
        self.harmony
            .colors(self.model, base)
            .into_iter()
            .map(|entry| {
                let angle = (entry.hue() - 30.0) * PI / 180.0;
                let dist = radius * entry.saturation() / 100.0;
                let shown = harmony::displayed(self.model, entry, base);
                let pure = Hsva::opaque(shown.hue(), shown.saturation(), 100.0);
                Marker::ring(
                    geometry.center.x as f64 + angle.cos() * dist,
                    geometry.center.y as f64 - angle.sin() * dist,
                    pure.wants_dark_marker(),
                )
            })
            .collect()
    }

    fn swatches(&self, layout: &SelectorLayout, base: Hsva) -> Vec<Swatch> {
        self.harmony
            .colors(self.model, base)
            .into_iter()
            .enumerate()
            .map(|(i, entry)| Swatch {
                rect: Self::swatch_rect(layout, i as i32),
                color: harmony::displayed(self.model, entry, base).with_alpha(255),
            })
            .collect()
    }

    fn pickable(&self, layout: &SelectorLayout, pos: PixelPoint, base: Hsva) -> bool {
        layout.hit_bar(pos) != CapturedBar::None
            || self.pick_overlay(layout, pos, base).is_some()
            || !self.wheel_color(layout, pos, base).is_mask()
    }
}
