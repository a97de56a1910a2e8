//! Docmanager - a small documentation manager
//!
//! Create, edit, complete, delete and search short text documents. The
//! whole collection is persisted to a single slot in the application data
//! directory after every change.

mod app;
mod core;
mod ui;

use anyhow::{Context, Result};
use app::DocManagerApp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::config::AppConfig;
use crate::core::storage::FileStorage;
use crate::core::store::DocumentStore;

fn main() -> Result<()> {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Ignoring unreadable config: {:#}", e);
            AppConfig::default()
        }
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(config.level_filter())
        .init();

    tracing::info!("Starting Docmanager...");

    if AppConfig::config_path().is_some_and(|path| !path.exists()) {
        if let Err(e) = config.save() {
            tracing::warn!("Could not write default config: {:#}", e);
        }
    }

    let storage = match config.storage.data_dir {
        Some(ref dir) => FileStorage::new(dir),
        None => FileStorage::in_data_dir(),
    }
    .context("Failed to open document storage")?;
    tracing::info!("Storing documents in {}", storage.root().display());

    let store = DocumentStore::open(storage, config.storage.slot_key.clone());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([480.0, 360.0])
            .with_title("Documentation Manager"),
        ..Default::default()
    };

    eframe::run_native(
        "Docmanager",
        native_options,
        Box::new(move |cc| Ok(Box::new(DocManagerApp::new(cc, store, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Window error: {}", e))
}
