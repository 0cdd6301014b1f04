//! MRI Coil Trace Analyzer
//!
//! Desktop dashboard for inspecting voltage/parameter traces recorded by
//! coil hardware test benches. Wires up logging, configuration and the
//! deployment expiry gate, then hands control to the egui UI.

use eframe::egui;
use env_logger::Builder;
use log::{LevelFilter, error, info};

use crate::access::{ExpiryGate, SystemClock};
use crate::config::AnalyzerConfig;

mod access;
mod catalog;
mod config;
mod trace;
mod ui;

fn main() {
    // Logging setup
    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter(Some("coil_analyzer"), LevelFilter::Debug)
        .init();

    info!("Starting up");

    let config = AnalyzerConfig::load_or_default();

    let gate = ExpiryGate::new(config.expires_on);
    if let Err(e) = gate.check(&SystemClock) {
        error!("{}", e);
        std::process::exit(1);
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 840.0]),
        ..Default::default()
    };
    if let Err(e) = eframe::run_native(
        "MRI Coil Trace Analyzer",
        native_options,
        Box::new(move |cc| Ok(Box::new(ui::AppState::new(config, cc.storage)))),
    ) {
        error!("Failed to start the UI: {}", e);
    }
}
