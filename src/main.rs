//! Client GUI - Main Entry Point
//!
//! Native client shell that hosts placeholder content until the real pages land.

use client_gui::app::application::run_app;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting client GUI...");

    // Run the GPUI application
    run_app();
}
