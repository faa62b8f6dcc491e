//! Native front end: one window that renders whatever page the current
//! address resolves to.

mod app;
mod layout;
mod page;
mod textures;


use eframe::egui;

use crate::runtime::AppContext;

use app::GalleryApp;

const WINDOW_TITLE: &str = "Portfolio Gallery";
const WINDOW_SIZE: [f32; 2] = [1280.0, 820.0];
const WINDOW_MIN_SIZE: [f32; 2] = [640.0, 420.0];

pub fn run(context: AppContext, initial_address: Option<String>) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(WINDOW_MIN_SIZE)
            .with_resizable(true),
        ..Default::default()
    };
    let address = initial_address.unwrap_or_else(|| "/".to_string());

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(GalleryApp::new(cc, context, &address)))),
    )
    .map_err(|error| error.to_string())
}
