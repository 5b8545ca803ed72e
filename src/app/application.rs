//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::app::workspace::Workspace;
use crate::domain::config::UiConfig;
use crate::utils::config_store;

actions!(client, [Quit]);

/// Config file holding the persisted window geometry.
const UI_CONFIG_FILE: &str = "ui.json";

/// Run the client application
pub fn run_app() {
    let ui_config = load_ui_config();

    Application::new().run(move |cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            // If no windows remain, quit the application
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Create main window
        let bounds = Bounds::centered(
            None,
            gpui::size(px(ui_config.window.width), px(ui_config.window.height)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Client")),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |_window, cx| cx.new(|_cx| Workspace::new()));
        if let Err(error) = opened {
            tracing::error!("Failed to open main window: {error}");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}

/// Load the persisted UI config, falling back to defaults on any error.
///
/// The resolved config is written back so a first run leaves an editable
/// file in the app data directory.
fn load_ui_config() -> UiConfig {
    let ui_config = match config_store::load_config::<UiConfig>(UI_CONFIG_FILE) {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!("Could not load UI config, using defaults: {error}");
            UiConfig::default()
        }
    };

    if let Err(error) = config_store::save_config(UI_CONFIG_FILE, &ui_config) {
        tracing::warn!("Could not persist UI config: {error}");
    }

    ui_config
}
