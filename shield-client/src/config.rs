use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::DEFAULT_API_PREFIX;

/// Action id used when the route does not name one
pub const DEFAULT_ACTION_ID: &str = "index";

/// Error while reading a configuration document
#[derive(Debug)]
pub struct ConfigError(toml::de::Error);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Configuration error: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError(e)
    }
}

/// Settings shared by the client and the route components
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShieldConfig {
    /// Origin of the auth API, e.g. `http://127.0.0.1:8080`
    pub server_url: String,
    pub api_prefix: String,
    pub default_action_id: String,
    /// Only applied on native targets
    pub request_timeout_secs: u64,
}

impl Default for ShieldConfig {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8080".to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            default_action_id: DEFAULT_ACTION_ID.to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl ShieldConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            ..Self::default()
        }
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShieldConfig::default();
        assert_eq!(config.api_prefix, "/api/auth");
        assert_eq!(config.default_action_id, "index");
    }

    #[test]
    fn test_partial_toml() {
        let config = ShieldConfig::from_toml_str(
            r#"
            server_url = "https://auth.example.com"
            default_action_id = "sign-in"
            "#,
        )
        .unwrap();

        assert_eq!(config.server_url, "https://auth.example.com");
        assert_eq!(config.default_action_id, "sign-in");
        assert_eq!(config.api_prefix, "/api/auth");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_empty_toml() {
        let config = ShieldConfig::from_toml_str("").unwrap();
        assert_eq!(config, ShieldConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let result = ShieldConfig::from_toml_str("request_timeout_secs = \"soon\"");
        assert!(result.is_err());
    }
}
