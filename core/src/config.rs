//! Client configuration: where the food API lives and how long to wait.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

const ENV_BASE_URL: &str = "FOODS_API_URL";
const ENV_TIMEOUT: &str = "FOODS_API_TIMEOUT_SECS";

/// Settings shared by `FoodClient` and `UreqTransport`.
///
/// ```toml
/// base_url = "http://localhost:3333"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    /// Global per-request timeout. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Reads and validates a TOML config file. Missing keys take defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: ClientConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Parses TOML text without touching the filesystem.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: Path::new("<inline>").to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Builds a config from `FOODS_API_URL` and `FOODS_API_TIMEOUT_SECS`,
    /// falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = ClientConfig::default();
        if let Some(url) = lookup(ENV_BASE_URL) {
            config.base_url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT) {
            let secs = raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                message: format!("{ENV_TIMEOUT} must be a whole number of seconds, got '{raw}'"),
            })?;
            config.timeout_secs = Some(secs);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::Invalid {
                message: "base_url must not be empty".to_string(),
            });
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                message: format!("base_url must start with http:// or https://, got '{url}'"),
            });
        }
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::Invalid {
                message: "timeout_secs must be at least 1; omit it to wait indefinitely".to_string(),
            });
        }
        Ok(())
    }
}
