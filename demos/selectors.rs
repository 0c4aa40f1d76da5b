//! Standalone demo: opens a window with all three selectors sharing one color.
//!
//! Set `RUST_LOG=floem_color_selectors=debug` to trace pointer captures and
//! option changes.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_color_selectors::{
    spectrum_selector, tint_shade_tone_selector, wheel_picker, Orientation, PixelColor,
    PreferenceStore,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let color = RwSignal::new(PixelColor::hsva(210.0, 60.0, 90.0, 255));
    let status = RwSignal::new(String::new());

    floem::Application::new()
        .window(
            move |_| {
                v_stack((
                    spectrum_selector(color, Orientation::Horizontal)
                        .on_preview(move |c| status.set(c.to_hex().unwrap_or_default())),
                    tint_shade_tone_selector(color)
                        .on_preview(move |c| status.set(c.to_hex().unwrap_or_default())),
                    wheel_picker(color, PreferenceStore::from_env()),
                    label(move || {
                        let current = color.get().to_hex().unwrap_or_else(|| "mask".to_string());
                        format!("#{current}  under pointer: {}", status.get())
                    })
                    .style(|s| s.font_size(11.0).font_family("monospace".to_string())),
                ))
                .style(|s| s.gap(6.0).padding(8.0).width_full().height_full())
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((260.0, 620.0))
                    .title("floem-color-selectors"),
            ),
        )
        .run();
}
