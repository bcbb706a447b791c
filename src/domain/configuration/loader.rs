//! Configuration loading.

use std::fs;
use std::path::Path;

use crate::domain::configuration::model_config::CONFIG_FILE;
use crate::domain::{AppConfig, AppError};

/// Load the configuration.
///
/// An explicit `path` must exist. Without one, `quakediff.toml` in `dir` is
/// used when present and built-in defaults otherwise.
pub fn load_config(path: Option<&Path>, dir: &Path) -> Result<AppConfig, AppError> {
    let config_path = match path {
        Some(explicit) => {
            if !explicit.exists() {
                return Err(AppError::ConfigMissing(explicit.display().to_string()));
            }
            explicit.to_path_buf()
        }
        None => {
            let candidate = dir.join(CONFIG_FILE);
            if !candidate.exists() {
                tracing::debug!("no {} found, using defaults", CONFIG_FILE);
                return Ok(AppConfig::default());
            }
            candidate
        }
    };

    tracing::debug!(path = %config_path.display(), "loading config");
    let content = fs::read_to_string(&config_path)?;
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
