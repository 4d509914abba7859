//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI gallery.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::app::gallery::Gallery;
use crate::domain::config::GalleryConfig;
use crate::i18n::{t, Locale};

actions!(formkit, [Quit]);

/// Run the component gallery
pub fn run_gallery(config: GalleryConfig) {
    Application::new().run(move |cx: &mut App| {
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let locale = config.locale.unwrap_or_else(Locale::detect);
        tracing::info!(locale = locale.display_name(), "Opening gallery window");

        let size = gpui::size(px(config.window.width), px(config.window.height));
        let bounds = Bounds::centered(None, size, cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(t(locale, "app-title")),
                ..Default::default()
            }),
            ..Default::default()
        };

        let result = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Gallery::new(&config, locale, cx))
        });

        match result {
            Ok(_) => cx.activate(true),
            Err(err) => {
                tracing::error!("Failed to open gallery window: {err:#}");
                cx.quit();
            }
        }
    });
}
