#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod views;

use app::VolumetricsApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 820.0])
            .with_title("Hydrocarbon Volume Calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "Hydrocarbon Volume Calculator",
        options,
        Box::new(|cc| Ok(Box::new(VolumetricsApp::new(cc)))),
    )
}
