//! Configuration module for the Shelfmark API

mod auth;
mod server;

pub use auth::AuthConfig;
pub use server::ServerConfig;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use shelfmark_common::config::ConfigLoader;
use shelfmark_common::ConfigurationError as ConfigError;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment prefix for configuration overrides, split on `__`.
const ENV_PREFIX: &str = "SHELFMARK_API_";

/// Default configuration file consulted when no `--config` path is given.
const DEFAULT_CONFIG_FILE: &str = "shelfmark-api.toml";

/// Main configuration structure for the Shelfmark API
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,

    /// Identity provider configuration
    pub auth: AuthConfig,
}

impl Config {
    /// Load configuration from file and environment
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        match config_path {
            Some(path) => <Config as ConfigLoader<Config>>::load_from_file(path),
            None => <Config as ConfigLoader<Config>>::load(None),
        }
    }

    /// Generate example configuration file
    pub fn generate_example() -> Result<String, ConfigError> {
        let config = Self::default();
        toml::to_string_pretty(&config).map_err(|e| ConfigError::ParseError {
            details: format!("Failed to serialize config: {e}"),
        })
    }

    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.request_timeout)
    }
}

impl ConfigLoader<Config> for Config {
    fn load(path: Option<PathBuf>) -> Result<Config, ConfigError> {
        let figment = match path {
            Some(p) => Figment::from(Serialized::defaults(Config::default()))
                .merge(Toml::file(p))
                .merge(Env::prefixed(ENV_PREFIX).split("__")),
            None => Figment::from(Serialized::defaults(Config::default()))
                .merge(Toml::file(DEFAULT_CONFIG_FILE))
                .merge(Env::prefixed(ENV_PREFIX).split("__")),
        };

        figment.extract().map_err(|e| ConfigError::ParseError {
            details: e.to_string(),
        })
    }

    fn load_from_file(path: &Path) -> Result<Config, ConfigError> {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(|e| ConfigError::ParseError {
            details: e.to_string(),
        })
    }

    fn apply_env_overrides(config: &mut Config, prefix: &str) -> Result<(), ConfigError> {
        let figment = Figment::from(Serialized::defaults(config.clone()))
            .merge(Env::prefixed(prefix).split("__"));

        *config = figment.extract().map_err(|e| ConfigError::ParseError {
            details: e.to_string(),
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.bind_address.port(), 8000);
        assert_eq!(config.server.request_timeout, 30);
        assert!(config.auth.credentials_path.is_none());
        assert!(config.auth.jwks_url.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(config.server.bind_address, deserialized.server.bind_address);
        assert_eq!(
            config.auth.jwks_cache_ttl,
            deserialized.auth.jwks_cache_ttl
        );
    }

    #[test]
    fn test_duration_conversions() {
        let config = Config::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.auth.key_cache_ttl(), Duration::from_secs(3600));
        assert_eq!(config.auth.clock_skew(), Duration::from_secs(60));
    }

    #[test]
    fn test_example_config_parses_back() {
        let example = Config::generate_example().unwrap();
        let parsed: Config = toml::from_str(&example).unwrap();
        assert_eq!(parsed.server.bind_address.port(), 8000);
    }
}
