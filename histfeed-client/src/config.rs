//! Client configuration file.
//!
//! A small TOML file holding the API key and an optional gateway override.
//! Both fields are optional: the key can also come from the environment,
//! and the gateway falls back to the production default.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Serializable client configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API key for the service.
    pub key: Option<String>,

    /// Gateway endpoint override. Normalized by the client builder; may be
    /// a bare host, host with path, or a full URL.
    pub gateway: Option<String>,
}

impl ApiConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.display().to_string(), e))?;
        toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {0}: {1}")]
    Io(String, std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config: ApiConfig = toml::from_str(
            r#"
            key = "hf-test-key"
            gateway = "staging.hist.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.key.as_deref(), Some("hf-test-key"));
        assert_eq!(config.gateway.as_deref(), Some("staging.hist.example.com"));
    }

    #[test]
    fn empty_config_is_valid() {
        let config: ApiConfig = toml::from_str("").unwrap();
        assert_eq!(config, ApiConfig::default());
    }
}
