//! Options strip for the color wheel: discrete mode, hue model and harmony.

use floem::peniko::Color;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};
use floem::ViewId;
use lucide_icons::Icon;

use crate::constants;
use crate::harmony::Harmony;
use crate::hue_model::ColorModel;
use crate::prefs::ColorBarPreferences;
use crate::view;
use crate::wheel::ColorWheel;

/// A toggle-style icon button. `active` tints the glyph.
fn icon_button(
    icon: Icon,
    active: impl Fn() -> bool + 'static,
    on_click: impl Fn() + 'static,
) -> impl IntoView {
    label(move || icon.unicode().to_string())
        .style(move |s| {
            let c = if active() {
                Color::rgb8(40, 40, 40)
            } else {
                Color::rgb8(150, 150, 150)
            };
            s.font_size(constants::ICON_FONT)
                .font_family("lucide".to_string())
                .cursor(floem::style::CursorStyle::Pointer)
                .border_radius(3.0)
                .padding(2.0)
                .color(c)
                .hover(|s| s.background(Color::rgb8(230, 230, 230)))
        })
        .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
            on_click();
        })
}

fn caption(text: impl Fn() -> &'static str + 'static) -> impl IntoView {
    label(text).style(|s| {
        s.font_size(constants::LABEL_FONT)
            .color(Color::rgb8(120, 120, 120))
    })
}

/// Icon strip that edits the options of the wheel view `wheel`.
///
/// `initial` should be the preferences the wheel was built with.
pub(crate) fn wheel_options(wheel: ViewId, initial: ColorBarPreferences) -> impl IntoView {
    let discrete = RwSignal::new(initial.discrete_wheel);
    let model = RwSignal::new(initial.wheel_model);
    let harmony = RwSignal::new(initial.harmony);

    h_stack((
        icon_button(
            Icon::CircleDashed,
            move || discrete.get(),
            move || {
                let next = !discrete.get_untracked();
                discrete.set(next);
                view::update_law::<ColorWheel>(wheel, move |w| w.set_discrete(next));
            },
        ),
        icon_button(
            Icon::Palette,
            move || model.get() == ColorModel::Ryb,
            move || {
                let next = match model.get_untracked() {
                    ColorModel::Rgb => ColorModel::Ryb,
                    ColorModel::Ryb => ColorModel::Rgb,
                };
                model.set(next);
                view::update_law::<ColorWheel>(wheel, move |w| w.set_model(next));
            },
        ),
        caption(move || model.get().label()),
        icon_button(
            Icon::Blend,
            move || harmony.get() != Harmony::None,
            move || {
                let next = harmony.get_untracked().next();
                harmony.set(next);
                view::update_law::<ColorWheel>(wheel, move |w| w.set_harmony(next));
            },
        ),
        caption(move || harmony.get().label()),
    ))
    .style(|s| s.items_center().gap(constants::GAP))
}
