//! FormKit Gallery - Main Entry Point
//!
//! Opens a window showing the InputField and DataTable components.
//! Pass a TOML config path as the first argument to override the default
//! location.

use std::path::PathBuf;

use formkit_gui::app::application::run_gallery;
use formkit_gui::domain::config::GalleryConfig;
use formkit_gui::utils::config_store::{default_config_path, load_config};

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting FormKit gallery...");

    let path = match std::env::args_os().nth(1) {
        Some(arg) => Ok(PathBuf::from(arg)),
        None => default_config_path(),
    };

    let config = match path.and_then(|path| load_config::<GalleryConfig>(&path)) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Falling back to default gallery config: {err}");
            GalleryConfig::default()
        }
    };

    run_gallery(config);
}
