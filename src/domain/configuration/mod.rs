pub mod loader;
pub mod model_config;

pub use loader::{load_config, parse_config_content};
pub use model_config::{AppConfig, CONFIG_FILE, ModelApiConfig};
