//! Checkerboard background and alpha ramp for the alpha bar.

use floem::context::PaintCx;
use floem::kurbo::{Rect, Shape};
use floem::peniko::{Color, Gradient};
use floem_renderer::Renderer;

use crate::color::Hsva;
use crate::constants;

const LIGHT: Color = Color::rgb8(255, 255, 255);
const DARK: Color = Color::rgb8(204, 204, 204);

/// Paint a checkerboard pattern into `rect`.
pub(crate) fn paint_checkerboard(cx: &mut PaintCx, rect: Rect) {
    let cell = constants::CHECKER_CELL;
    cx.fill(&rect, LIGHT, 0.0);
    let cols = (rect.width() / cell).ceil() as usize;
    let rows = (rect.height() / cell).ceil() as usize;
    for row in 0..rows {
        for col in 0..cols {
            if (row + col) % 2 == 1 {
                let x = rect.x0 + col as f64 * cell;
                let y = rect.y0 + row as f64 * cell;
                let cell_rect = Rect::new(x, y, (x + cell).min(rect.x1), (y + cell).min(rect.y1));
                cx.fill(&cell_rect, DARK, 0.0);
            }
        }
    }
}

/// Paint the alpha bar: `base` fading in from transparent (left) to opaque
/// (right) over a checkerboard.
pub(crate) fn paint_alpha_ramp(cx: &mut PaintCx, rect: Rect, base: Hsva) {
    let (r, g, b) = base.to_rgb();
    cx.save();
    cx.clip(&rect);
    paint_checkerboard(cx, rect);
    let mid = rect.y0 + rect.height() / 2.0;
    let gradient = Gradient::new_linear((rect.x0, mid), (rect.x1, mid))
        .with_stops([Color::rgba8(r, g, b, 0), Color::rgba8(r, g, b, 255)]);
    // Vello's rect fast path only handles solid fills.
    let path = rect.to_path(0.1);
    cx.fill(&path, &gradient, 0.0);
    cx.restore();
}
