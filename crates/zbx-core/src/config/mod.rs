//! Client configuration: file, environment and per-user paths.

mod dirs;
mod settings;
mod validation;

pub use dirs::Directories;
pub use settings::{
    ClientConfig, DEFAULT_TIMEOUT_SECS, ENV_PASSWORD, ENV_TIMEOUT, ENV_TOKEN, ENV_URL, ENV_USER,
};
pub use validation::warn_unknown_fields;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No server URL configured (set `url` in the config file or ZABBIX_URL)")]
    MissingUrl,

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
