use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::{ConfigError, Result};
use crate::client::ClientBuilder;

pub const ENV_URL: &str = "ZABBIX_URL";
pub const ENV_USER: &str = "ZABBIX_USER";
pub const ENV_PASSWORD: &str = "ZABBIX_PASSWORD";
pub const ENV_TOKEN: &str = "ZABBIX_TOKEN";
pub const ENV_TIMEOUT: &str = "ZABBIX_TIMEOUT";

pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Connection settings read from `config.json`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: None,
            username: None,
            password: None,
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Load config from file. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        super::validation::warn_unknown_fields(&content, "config.json");
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to file, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Override fields from the `ZABBIX_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `ZABBIX_TIMEOUT` is not a
    /// whole number of seconds.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Override fields from any key lookup. Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the timeout is not a whole
    /// number of seconds.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(url) = get(ENV_URL) {
            self.url = Some(url);
        }
        if let Some(username) = get(ENV_USER) {
            self.username = Some(username);
        }
        if let Some(password) = get(ENV_PASSWORD) {
            self.password = Some(password);
        }
        if let Some(token) = get(ENV_TOKEN) {
            self.token = Some(token);
        }
        if let Some(timeout) = get(ENV_TIMEOUT) {
            self.timeout_secs = timeout.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_TIMEOUT.to_string(),
                value: timeout,
            })?;
        }
        Ok(())
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The configured server URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingUrl` if no non-empty URL is set.
    pub fn url(&self) -> Result<&str> {
        self.url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingUrl)
    }

    /// Turn the config into a client builder. Credentials are passed through
    /// as-is; missing ones surface when the builder runs.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingUrl` if no URL is configured.
    pub fn into_builder(self) -> Result<ClientBuilder> {
        let mut builder = ClientBuilder::new(self.url()?).timeout(self.timeout());

        if let Some(token) = self.token {
            builder = builder.token(token);
        }
        if let (Some(username), Some(password)) = (self.username, self.password) {
            builder = builder.credentials(username, password);
        }
        Ok(builder)
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
