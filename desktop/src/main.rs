//! Native desktop host for the todo widget.
//!
//! Run with:
//! ```bash
//! cargo run -p todo-desktop
//! RUST_LOG=todo_egui=debug cargo run -p todo-desktop
//! ```

use todo_egui::{TodoApp, WidgetConfig};
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = WidgetConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size([480.0, 640.0])
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };

    tracing::info!("starting todo widget");

    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(TodoApp::new(config).with_repaint(&cc.egui_ctx)))),
    )
}
