//! Configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Default config file looked up in the working directory.
pub const CONFIG_FILE: &str = "quakediff.toml";

/// Top-level configuration loaded from `quakediff.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Chat model configuration.
    #[serde(default)]
    pub model: ModelApiConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.model.validate()
    }
}

/// Chat completions endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelApiConfig {
    /// Chat completions endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the API credential.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Request timeout in seconds. Unset leaves the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ModelApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: None,
        }
    }
}

impl ModelApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::config_error("model must not be empty"));
        }
        if self.api_key_env.trim().is_empty() {
            return Err(AppError::config_error("api_key_env must not be empty"));
        }
        if self.timeout_secs == Some(0) {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.openai.com/v1/chat/completions").expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}
