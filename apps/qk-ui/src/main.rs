#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod views;

use app::QuakesimApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_title("Earthquake Wave Propagation and Isolation"),
        ..Default::default()
    };

    eframe::run_native(
        "Quakesim",
        options,
        Box::new(|cc| Ok(Box::new(QuakesimApp::new(cc)))),
    )
}
