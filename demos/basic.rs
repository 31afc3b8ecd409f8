//! Standalone demo: opens a window with an hour picker.

use floem::peniko::Color;
use floem::prelude::*;
use floem::window::WindowConfig;
use floem_wheel::{value_picker, Frame, PickerConfig, PickerImage};

fn main() -> Result<(), floem_wheel::PickerError> {
    let hours: Vec<String> = (0..24).map(|h| format!("{h:02}:00")).collect();
    let index = RwSignal::new(9_usize);
    let overlay = PickerImage::edge_fade(160, 200, Color::rgb8(242, 242, 242))?;
    let config = PickerConfig::new(1, 40, hours.clone())
        .frame(Frame::sized(160, 200))
        .overlay_image(overlay);
    let picker = value_picker(config, index)?;

    floem::Application::new()
        .window(
            move |_| {
                v_stack((
                    picker.on_moved(|moved| println!("picker {} -> row {}", moved.id, moved.index)),
                    label(move || format!("Selected: {}", hours[index.get()])),
                ))
                .style(|s| s.gap(12.0).padding(16.0).items_center())
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((232.0, 300.0))
                    .title("floem-wheel"),
            ),
        )
        .run();
    Ok(())
}
