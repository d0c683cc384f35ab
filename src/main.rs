mod app;
mod constants;
mod i18n;
mod models;
mod screens;
mod services;
mod state;
mod ui_components;

use app::BlinkerApp;
use constants::{APP_HEIGHT, APP_WIDTH};
use eframe::egui;
use i18n::Language;
use models::PALETTE;

// App version and metadata
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_TITLE: &str = "Blinking Color Card";

fn main() -> Result<(), eframe::Error> {
    // Set RUST_LOG=debug to see every color pick
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("wgpu_core", log::LevelFilter::Warn)
        .filter_module("wgpu_hal", log::LevelFilter::Warn)
        .filter_module("naga", log::LevelFilter::Warn)
        .filter_module("winit", log::LevelFilter::Warn)
        .init();

    log::info!("[Main] Starting {} v{}", APP_TITLE, APP_VERSION);

    let language = Language::from_desktop();
    log::info!("[Main] Display language: {:?}", language);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([APP_WIDTH, APP_HEIGHT])
            .with_min_inner_size([APP_WIDTH * 0.75, APP_HEIGHT * 0.5])
            .with_resizable(true)
            .with_icon(load_icon()),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(BlinkerApp::new(cc, language)))),
    )
}

/// App icon - rounded square split into the three palette colors
fn load_icon() -> egui::IconData {
    let size = 64usize;
    let radius = 12.0f32;
    let mut pixels = vec![0u8; size * size * 4];

    for y in 0..size {
        for x in 0..size {
            if !inside_rounded_square(x as f32 + 0.5, y as f32 + 0.5, size as f32, radius) {
                continue;
            }
            let band = (y * PALETTE.len() / size).min(PALETTE.len() - 1);
            let color = PALETTE[band].fill();

            let idx = (y * size + x) * 4;
            pixels[idx] = color.r(); // R
            pixels[idx + 1] = color.g(); // G
            pixels[idx + 2] = color.b(); // B
            pixels[idx + 3] = 255; // A
        }
    }

    egui::IconData {
        rgba: pixels,
        width: size as u32,
        height: size as u32,
    }
}

fn inside_rounded_square(px: f32, py: f32, size: f32, radius: f32) -> bool {
    let cx = px.clamp(radius, size - radius);
    let cy = py.clamp(radius, size - radius);
    let (dx, dy) = (px - cx, py - cy);
    dx * dx + dy * dy <= radius * radius
}
