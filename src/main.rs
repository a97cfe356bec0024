mod toggle;
mod ui;

use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};

use crate::ui::Controller;

fn main() {
    println!("=== Retro Toggle - iOS 6 Switch Demo ===");

    // Launch the GPUI demo window with the switch centered in it.
    Application::new().run(|app: &mut gpui::App| {
        let bounds = Bounds::centered(None, size(px(420.0), px(280.0)), app);

        let window = app.open_window(
            WindowOptions {
                titlebar: Some(gpui::TitlebarOptions {
                    title: Some("Retro Toggle".into()),
                    ..Default::default()
                }),
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            },
            |_, cx| cx.new(|_| Controller::default()),
        );

        if let Err(e) = window {
            eprintln!("Failed to open the demo window: {:?}", e);
            app.quit();
        }
    });
}
