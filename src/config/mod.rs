//! Configuration module for voxsearch
//!
//! Handles loading settings from YAML files and environment variables.
//! Both binaries load settings once at startup and pass them down.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

/// Load settings from the first file found, falling back to defaults.
///
/// `VOXSEARCH_SETTINGS_PATH` wins over the default candidate paths.
/// Environment overrides are merged on top of whatever was loaded.
pub fn load() -> Result<Settings> {
    if let Ok(path) = std::env::var("VOXSEARCH_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    let paths = [
        PathBuf::from("voxsearch.yml"),
        PathBuf::from("config/voxsearch.yml"),
        PathBuf::from("/etc/voxsearch/voxsearch.yml"),
        dirs::config_dir()
            .map(|p| p.join("voxsearch/voxsearch.yml"))
            .unwrap_or_default(),
    ];

    for path in paths.iter() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}
