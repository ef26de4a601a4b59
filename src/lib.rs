pub mod app;
pub mod assets;
pub mod canvas;
pub mod coordinate;
pub mod error;
pub mod field;
pub mod input;
pub mod label;
pub mod marker;
pub mod ui;
pub mod units;

use app::MeasuringApp;
use error::Result;
use field::FieldProfile;

/// Loads the field image and runs the overlay until the window closes.
pub fn run(profile: FieldProfile) -> Result<()> {
    let field_image = assets::load_field_image(profile.image_path).map_err(|err| {
        log::error!("{}", err);
        err
    })?;

    let (width, height) = profile.window_size;
    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(width, height)),
        resizable: false,
        ..Default::default()
    };

    eframe::run_native(
        profile.title,
        native_options,
        Box::new(move |cc| Box::new(MeasuringApp::new(cc, profile, field_image))),
    )?;
    Ok(())
}

pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
