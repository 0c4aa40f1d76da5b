//! Floem view hosting a [`ColorSelector`].
//!
//! The selector is rasterized into an RGBA8 image at the content size and
//! redrawn only when its color, layout or law changes. Bars, swatches and
//! indicators are painted on top with vector strokes.

use std::any::Any;
use std::sync::Arc;

use floem::kurbo::{Circle, Line, Point, Rect, Stroke};
use floem::peniko::{self, Blob, Color};
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::style::CursorStyle;
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;
use tracing::trace;

#[cfg(feature = "alpha")]
use crate::checkerboard;
use crate::color::PixelColor;
use crate::constants;
use crate::geometry::{PixelPoint, PixelRect};
use crate::prefs::PreferenceStore;
use crate::raster::{self, Marker, MarkerShape};
use crate::selector::{ColorChange, ColorSelector, CursorHint, PickerLaw, PointerButton, PointerOutcome};
use crate::spectrum::{Orientation, Spectrum};
use crate::tint_shade_tone::TintShadeTone;
use crate::wheel::ColorWheel;

enum SelectorUpdate {
    Color(PixelColor),
}

/// Deferred mutation of a selector's law, delivered through the view's state.
struct LawUpdate<L>(Box<dyn FnOnce(&mut L)>);

/// Change the law of the selector view `id` (for example the wheel options).
///
/// `L` must match the law the view was built with; other updates are ignored.
pub fn update_law<L: PickerLaw + 'static>(id: ViewId, f: impl FnOnce(&mut L) + 'static) {
    id.update_state(LawUpdate::<L>(Box::new(f)));
}

pub struct SelectorView<L> {
    id: ViewId,
    selector: ColorSelector<L>,
    color: RwSignal<PixelColor>,
    cursor: RwSignal<CursorStyle>,
    hint: CursorHint,
    on_change: Option<Box<dyn Fn(ColorChange)>>,
    on_preview: Option<Box<dyn Fn(PixelColor)>>,
    raster_img: Option<peniko::Image>,
    raster_hash: Vec<u8>,
    raster_dirty: bool,
}

fn selector_view<L: PickerLaw + 'static>(law: L, color: RwSignal<PixelColor>) -> SelectorView<L> {
    let id = ViewId::new();

    create_effect(move |_| {
        let c = color.get();
        id.update_state(SelectorUpdate::Color(c));
    });

    let cursor = RwSignal::new(CursorStyle::Default);
    SelectorView {
        id,
        selector: ColorSelector::new(law).with_color(color.get_untracked()),
        color,
        cursor,
        hint: CursorHint::Default,
        on_change: None,
        on_preview: None,
        raster_img: None,
        raster_hash: Vec::new(),
        raster_dirty: true,
    }
    .style(move |s| {
        s.flex_grow(1.0)
            .min_width(64.0)
            .min_height(48.0)
            .cursor(cursor.get())
    })
}

/// Hue × lightness spectrum bound to `color`.
pub fn spectrum_selector(color: RwSignal<PixelColor>, orientation: Orientation) -> SelectorView<Spectrum> {
    selector_view(Spectrum::new(orientation), color)
}

/// Saturation × value square for the hue of `color`.
pub fn tint_shade_tone_selector(color: RwSignal<PixelColor>) -> SelectorView<TintShadeTone> {
    selector_view(TintShadeTone, color)
}

/// Hue/saturation wheel whose options are read from and saved to `store`.
pub fn wheel_selector(color: RwSignal<PixelColor>, store: PreferenceStore) -> SelectorView<ColorWheel> {
    selector_view(ColorWheel::with_preferences(store), color).style(|s| s.aspect_ratio(1.0))
}

impl<L: PickerLaw + 'static> SelectorView<L> {
    /// Called for every color picked during a drag, with the button that
    /// started it. The bound signal is updated before `f` runs.
    pub fn on_color_change(mut self, f: impl Fn(ColorChange) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Called with the color under the pointer, captured or not.
    pub fn on_preview(mut self, f: impl Fn(PixelColor) + 'static) -> Self {
        self.on_preview = Some(Box::new(f));
        self
    }

    fn apply(&mut self, outcome: PointerOutcome) {
        if let (Some(preview), Some(cb)) = (outcome.preview, &self.on_preview) {
            cb(preview.into());
        }
        if let Some(change) = outcome.change {
            self.raster_dirty = true;
            self.color.set(change.color.into());
            if let Some(cb) = &self.on_change {
                cb(change);
            }
            self.id.request_layout();
        }
    }

    fn update_cursor(&mut self, pos: PixelPoint) {
        let hint = self.selector.cursor_at(pos);
        if hint != self.hint {
            self.hint = hint;
            self.cursor.set(match hint {
                CursorHint::Eyedropper => CursorStyle::Pointer,
                CursorHint::Default => CursorStyle::Default,
            });
        }
    }

    fn release(&mut self) {
        self.selector.pointer_up();
    }

    fn ensure_raster(&mut self) {
        if !self.raster_dirty {
            return;
        }
        self.raster_dirty = false;
        let raster = raster::rasterize(&self.selector);
        if raster.width == 0 || raster.height == 0 {
            self.raster_img = None;
            return;
        }
        trace!(width = raster.width, height = raster.height, "rasterized selector");
        let blob = Blob::new(Arc::new(raster.pixels));
        self.raster_hash = blob.id().to_le_bytes().to_vec();
        self.raster_img = Some(peniko::Image::new(
            blob,
            peniko::Format::Rgba8,
            raster.width,
            raster.height,
        ));
    }

    #[cfg(feature = "alpha")]
    fn paint_alpha_bar(&self, cx: &mut PaintCx) {
        if let Some(band) = self.selector.layout().bar_band(1) {
            let base = self.selector.color().hsva_or_default();
            checkerboard::paint_alpha_ramp(cx, to_rect(band), base);
        }
    }

    #[cfg(not(feature = "alpha"))]
    fn paint_alpha_bar(&self, _cx: &mut PaintCx) {}
}

fn to_rect(rc: PixelRect) -> Rect {
    Rect::new(
        rc.x as f64,
        rc.y as f64,
        (rc.x + rc.w) as f64,
        (rc.y + rc.h) as f64,
    )
}

fn paint_marker(cx: &mut PaintCx, marker: Marker) {
    let color = if marker.dark { Color::BLACK } else { Color::WHITE };
    let center = Point::new(marker.x, marker.y);
    match marker.shape {
        MarkerShape::Ring => {
            let ring = Circle::new(center, constants::MARKER_RADIUS);
            cx.stroke(&ring, color, &Stroke::new(1.5));
        }
        MarkerShape::Line => {
            let half = constants::LINE_MARKER_HALF;
            let line = Line::new((marker.x, marker.y - half), (marker.x, marker.y + half));
            cx.stroke(&line, color, &Stroke::new(2.0));
        }
    }
}

impl<L: PickerLaw + 'static> View for SelectorView<L> {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn Any>) {
        let state = match state.downcast::<SelectorUpdate>() {
            Ok(update) => {
                let SelectorUpdate::Color(color) = *update;
                if self.selector.set_color(color) {
                    self.raster_dirty = true;
                    self.id.request_layout();
                }
                return;
            }
            Err(state) => state,
        };
        if let Ok(update) = state.downcast::<LawUpdate<L>>() {
            (update.0)(self.selector.law_mut());
            self.raster_dirty = true;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                let button = if e.button.is_secondary() {
                    PointerButton::Secondary
                } else if e.button.is_auxiliary() {
                    PointerButton::Auxiliary
                } else {
                    PointerButton::Primary
                };
                let outcome = self
                    .selector
                    .pointer_down(PixelPoint::from_f64(e.pos.x, e.pos.y), button);
                self.apply(outcome);
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                let pos = PixelPoint::from_f64(e.pos.x, e.pos.y);
                let outcome = self.selector.pointer_move(pos);
                self.apply(outcome);
                if self.selector.has_capture() {
                    EventPropagation::Stop
                } else {
                    self.update_cursor(pos);
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.release();
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let size = self.id.get_layout().unwrap_or_default().size;
        let content = PixelRect::new(0, 0, size.width as i32, size.height as i32).inset(constants::BORDER);
        if content != self.selector.layout().content() {
            self.selector.resize(content);
            self.raster_dirty = true;
        }
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let content = self.selector.layout().content();
        if content.is_empty() {
            return;
        }

        self.ensure_raster();
        if let Some(ref img) = self.raster_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.raster_hash,
                },
                to_rect(content),
            );
        }

        self.paint_alpha_bar(cx);

        for swatch in self.selector.swatches() {
            let (r, g, b) = swatch.color.to_rgb();
            let rect = to_rect(swatch.rect);
            cx.fill(&rect, Color::rgb8(r, g, b), 0.0);
            cx.stroke(&rect, Color::rgba8(0, 0, 0, 80), &Stroke::new(1.0));
        }

        for marker in self.selector.markers() {
            paint_marker(cx, marker);
        }
    }
}
