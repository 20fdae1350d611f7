use eframe::egui;
use log::{error, info, warn};

mod backend;
mod config;
mod ui;

use config::AppConfig;
use ui::ChoreTrackerApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("🚀 Starting Kind Chore Club");

    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!("⚠️ Could not load config, using defaults: {}", e);
        AppConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([config.min_window_width, config.min_window_height])
            .with_title(config.window_title.clone())
            .with_resizable(true),
        ..Default::default()
    };

    info!("🪟 Launching egui window");
    eframe::run_native(
        &config.window_title,
        options,
        Box::new(|cc| match ChoreTrackerApp::new(cc) {
            Ok(app) => {
                info!("✅ Chore tracker ready");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("❌ Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
