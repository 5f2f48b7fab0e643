use crate::entity::types::AppConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config directory not found")]
    ConfigDirNotFound,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .or_else(dirs::data_local_dir)
        .ok_or(ConfigError::ConfigDirNotFound)?;

    let app_config_dir = config_dir.join("balance-sheet-admin");
    Ok(app_config_dir.join("config.jsonc"))
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::new());
    }

    let content = fs::read_to_string(path)?;
    let stripped = json_comments::StripComments::new(content.as_bytes());
    let config: AppConfig = serde_json::from_reader(stripped)?;

    Ok(config)
}

/// Writes the configuration as pretty JSON.
/// Note: Comments in an existing file will not be preserved.
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&get_config_path()?)
}

pub fn save_config(config: &AppConfig) -> Result<()> {
    save_config_to(&get_config_path()?, config)
}

/// Loads the config file, writing one with default values on first run.
pub fn load_or_create_config() -> Result<AppConfig> {
    let config_path = get_config_path()?;
    if config_path.exists() {
        return load_config();
    }

    let config = AppConfig::new();
    save_config(&config)?;
    info!("Wrote default config to {}", config_path.display());
    Ok(config)
}
