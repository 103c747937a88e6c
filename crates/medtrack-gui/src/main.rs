//! Medicine Expiry Tracker - Desktop GUI Application
//!
//! Tracks medicine stock with batch, manufacturing and expiry dates, and flags
//! items that are expired or expire within the next 60 days.

use anyhow::Context;
use eframe::egui;
use medtrack_core::Database;
use medtrack_gui::app::{MedtrackApp, APP_TITLE};
use medtrack_gui::settings::{database_path, load_settings};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting {}", APP_TITLE);

    let settings = load_settings();
    let db_path = database_path();
    let db = Database::open(&db_path)
        .with_context(|| format!("Failed to open database at {}", db_path.display()))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([800.0, 500.0])
            .with_fullscreen(settings.general.fullscreen),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(MedtrackApp::new(cc, db, settings)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {}", e))
}
