//! # floem-color-selectors
//!
//! Pixel-art color selectors for [Floem](https://github.com/lapce/floem).
//!
//! Three selectors share one pointer state machine ([`ColorSelector`]):
//!
//! - a hue × lightness **spectrum**,
//! - a **tint/shade/tone** square (saturation × value for a fixed hue),
//! - a hue/saturation **wheel** with an optional RYB hue model and color
//!   harmony swatches.
//!
//! Each has up to two bars underneath: one for the channel its primary area
//! does not cover and, with the `alpha` feature, one for opacity. The core
//! (geometry, color laws, rasterization) does not depend on Floem; the
//! views in [`view`] bind it to a `RwSignal<PixelColor>`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_color_selectors::{wheel_picker, PixelColor, PreferenceStore};
//!
//! let color = RwSignal::new(PixelColor::hsva(210.0, 60.0, 90.0, 255));
//! // Use `wheel_picker(color, PreferenceStore::from_env())` in your Floem view tree.
//! ```

mod bars;
#[cfg(feature = "alpha")]
mod checkerboard;
mod color;
mod constants;
mod geometry;
mod harmony;
mod hue_model;
mod math;
mod options;
mod prefs;
mod raster;
mod selector;
mod spectrum;
mod tint_shade_tone;
pub mod view;
mod wheel;

pub use bars::{BarKind, BarSpec, CapturedBar, SelectorLayout};
pub use color::{Hsva, PixelColor};
pub use geometry::{PixelPoint, PixelRect};
pub use harmony::{displayed as displayed_harmony, Harmony};
pub use hue_model::ColorModel;
pub use prefs::{ColorBarPreferences, PreferenceStore, PrefsError};
pub use raster::{rasterize, Marker, MarkerShape, Raster, Swatch};
pub use selector::{ColorChange, ColorSelector, CursorHint, PickerLaw, PointerButton, PointerOutcome};
pub use spectrum::{Orientation, Spectrum};
pub use tint_shade_tone::TintShadeTone;
pub use view::{spectrum_selector, tint_shade_tone_selector, wheel_selector, SelectorView};
pub use wheel::{ColorWheel, WheelGeometry};

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;
use floem::View;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates a color wheel with its options strip underneath.
///
/// The wheel reads from and writes to `color`; option changes are saved to
/// `store`.
pub fn wheel_picker(color: RwSignal<PixelColor>, store: PreferenceStore) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    let initial = store.values();
    let wheel = view::wheel_selector(color, store);
    let id = wheel.id();
    v_stack((wheel, options::wheel_options(id, initial)))
        .style(|s| s.gap(constants::GAP).width_full().height_full())
}
