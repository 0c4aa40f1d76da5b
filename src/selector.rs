//! Pointer handling shared by every selector.
//!
//! A [`ColorSelector`] owns the state the three selectors have in common:
//! the content layout, the base color, and which bar (if any) the current
//! drag captured. Each selector only supplies a [`PickerLaw`] describing its
//! primary 2D area.

use tracing::debug;

use crate::bars::{self, BarKind, BarSpec, CapturedBar, SelectorLayout};
use crate::color::{Hsva, PixelColor};
use crate::geometry::{PixelPoint, PixelRect};
use crate::raster::{Marker, Swatch};

/// The 2D law of a selector's primary area.
pub trait PickerLaw {
    /// Channel swept by the bar directly under the primary area.
    fn first_bar(&self) -> BarKind;

    /// Color under `pos` in the primary area.
    fn pick_primary(&mut self, layout: &SelectorLayout, pos: PixelPoint, base: Hsva) -> PixelColor;

    /// Color of an overlay element (such as a harmony swatch) under `pos`.
    /// Overlays are tested before bars and the primary area.
    fn pick_overlay(&self, _layout: &SelectorLayout, _pos: PixelPoint, _base: Hsva) -> Option<Hsva> {
        None
    }

    /// Display color of primary-area pixel `pos`; `None` leaves it transparent.
    fn paint_primary(&self, layout: &SelectorLayout, pos: PixelPoint, base: Hsva) -> Option<Hsva>;

    /// Indicators for `base` on the primary area.
    fn markers(&self, layout: &SelectorLayout, base: Hsva) -> Vec<Marker>;

    /// Overlay swatches drawn on top of the raster.
    fn swatches(&self, _layout: &SelectorLayout, _base: Hsva) -> Vec<Swatch> {
        Vec::new()
    }

    /// Whether hovering `pos` should show the eyedropper cursor.
    fn pickable(&self, layout: &SelectorLayout, pos: PixelPoint, _base: Hsva) -> bool {
        layout.content().contains(pos)
    }
}

/// Pointer button that started a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Auxiliary,
}

/// Cursor a selector asks for while hovering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    Eyedropper,
}

/// A color picked while dragging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorChange {
    pub color: Hsva,
    pub button: PointerButton,
}

/// Side effects of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerOutcome {
    /// Candidate color for the status bar.
    pub preview: Option<Hsva>,
    /// Set only while the selector holds the pointer capture.
    pub change: Option<ColorChange>,
}

struct Pick {
    color: PixelColor,
    from_overlay: bool,
}

/// Selector state machine, generic over the primary-area law.
pub struct ColorSelector<L> {
    law: L,
    bars: BarSpec,
    layout: SelectorLayout,
    color: PixelColor,
    captured: CapturedBar,
    capturing: bool,
    button: PointerButton,
    locked: Option<PixelColor>,
}

impl<L: PickerLaw> ColorSelector<L> {
    pub fn new(law: L) -> Self {
        Self {
            law,
            bars: BarSpec::default(),
            layout: SelectorLayout::default(),
            color: PixelColor::Mask,
            captured: CapturedBar::None,
            capturing: false,
            button: PointerButton::Primary,
            locked: None,
        }
    }

    /// Use another bar configuration; the layout is recomputed.
    pub fn with_bars(mut self, bars: BarSpec) -> Self {
        self.bars = bars;
        self.layout = SelectorLayout::new(self.layout.content(), bars);
        self
    }

    pub fn with_color(mut self, color: PixelColor) -> Self {
        self.color = color;
        self
    }

    pub fn law(&self) -> &L {
        &self.law
    }

    pub fn law_mut(&mut self) -> &mut L {
        &mut self.law
    }

    pub fn layout(&self) -> &SelectorLayout {
        &self.layout
    }

    /// Lay the selector out in a new content rectangle.
    pub fn resize(&mut self, content: PixelRect) {
        if content != self.layout.content() {
            self.layout = SelectorLayout::new(content, self.bars);
        }
    }

    pub fn color(&self) -> PixelColor {
        self.color
    }

    /// Replace the base color from outside.
    ///
    /// Returns `false` when the color was ignored: either unchanged, or the
    /// echo of a harmony swatch pick, which must not move the wheel.
    pub fn set_color(&mut self, color: PixelColor) -> bool {
        if self.locked.take() == Some(color) {
            return false;
        }
        if self.color == color {
            return false;
        }
        self.color = color;
        true
    }

    pub fn has_capture(&self) -> bool {
        self.capturing
    }

    pub fn captured_bar(&self) -> CapturedBar {
        self.captured
    }

    /// Color a pointer at `pos` would pick right now.
    pub fn color_by_position(&mut self, pos: PixelPoint) -> PixelColor {
        self.pick(pos).color
    }

    fn pick(&mut self, pos: PixelPoint) -> Pick {
        let layout = self.layout;
        if layout.content().is_empty() {
            return Pick {
                color: PixelColor::Mask,
                from_overlay: false,
            };
        }
        let base = self.color.hsva_or_default();

        let bar = if self.capturing {
            self.captured
        } else {
            layout.hit_bar(pos)
        };

        if bar == CapturedBar::None {
            if let Some(color) = self.law.pick_overlay(&layout, pos, base) {
                return Pick {
                    color: color.into(),
                    from_overlay: true,
                };
            }
        }

        let color = match bar {
            CapturedBar::First => bars::pick_bar(self.law.first_bar(), &layout, pos, base).into(),
            CapturedBar::Alpha => bars::pick_bar(BarKind::Alpha, &layout, pos, base).into(),
            CapturedBar::None => self.law.pick_primary(&layout, pos, base),
        };
        Pick {
            color,
            from_overlay: false,
        }
    }

    /// Start a drag: take the capture and remember the bar under `pos`.
    pub fn pointer_down(&mut self, pos: PixelPoint, button: PointerButton) -> PointerOutcome {
        self.capturing = true;
        self.button = button;
        self.captured = self.layout.hit_bar(pos);
        debug!(x = pos.x, y = pos.y, bar = ?self.captured, ?button, "selector captured pointer");
        self.pointer_move(pos)
    }

    pub fn pointer_move(&mut self, pos: PixelPoint) -> PointerOutcome {
        let pick = self.pick(pos);
        let Some(color) = pick.color.as_hsva() else {
            return PointerOutcome::default();
        };

        let change = if self.capturing {
            if pick.from_overlay {
                self.locked = Some(pick.color);
            } else {
                self.color = pick.color;
                self.locked = None;
            }
            Some(ColorChange {
                color,
                button: self.button,
            })
        } else {
            None
        };

        PointerOutcome {
            preview: Some(color),
            change,
        }
    }

    /// End a drag. Returns whether the selector held the capture.
    pub fn pointer_up(&mut self) -> bool {
        let was_capturing = self.capturing;
        self.capturing = false;
        if was_capturing {
            debug!(bar = ?self.captured, "selector released pointer");
        }
        was_capturing
    }

    pub fn cursor_at(&self, pos: PixelPoint) -> CursorHint {
        let base = self.color.hsva_or_default();
        if !self.layout.content().is_empty() && self.law.pickable(&self.layout, pos, base) {
            CursorHint::Eyedropper
        } else {
            CursorHint::Default
        }
    }

    /// Indicators for the current color: primary area first, then bars.
    pub fn markers(&self) -> Vec<Marker> {
        let Some(base) = self.color.as_hsva() else {
            return Vec::new();
        };
        let mut markers = self.law.markers(&self.layout, base);
        markers.extend(bars::bar_marker(self.law.first_bar(), &self.layout, 0, base));
        markers.extend(bars::bar_marker(BarKind::Alpha, &self.layout, 1, base));
        markers
    }

    pub fn swatches(&self) -> Vec<Swatch> {
        match self.color.as_hsva() {
            Some(base) => self.law.swatches(&self.layout, base),
            None => Vec::new(),
        }
    }
}
