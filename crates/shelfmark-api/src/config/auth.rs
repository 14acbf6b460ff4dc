//! Identity provider configuration

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable naming the provider credentials file.
const CREDENTIALS_PATH_ENV: &str = "FIREBASE_CRED_PATH";

/// Fallback credentials filename when neither config nor environment name one.
const DEFAULT_CREDENTIALS_FILE: &str = "firebase_credentials.json";

/// Identity provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Path to the provider service-account credentials file. When unset,
    /// the `FIREBASE_CRED_PATH` environment variable is consulted, then the
    /// default filename in the working directory.
    pub credentials_path: Option<PathBuf>,

    /// Override for the provider's public-key endpoint. Defaults to the
    /// Google secure-token JWK endpoint when unset.
    pub jwks_url: Option<String>,

    /// TTL for cached provider public keys, in seconds
    pub jwks_cache_ttl: u64,

    /// Allowed clock skew for token time claims, in seconds
    pub allowed_clock_skew: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            credentials_path: None,
            jwks_url: None,
            jwks_cache_ttl: 3600,
            allowed_clock_skew: 60,
        }
    }
}

impl AuthConfig {
    /// Resolve the credentials file path: explicit config value, then the
    /// `FIREBASE_CRED_PATH` environment variable, then the default filename.
    pub fn resolve_credentials_path(&self) -> PathBuf {
        if let Some(path) = &self.credentials_path {
            return path.clone();
        }
        env::var(CREDENTIALS_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CREDENTIALS_FILE))
    }

    /// Get provider key cache TTL as Duration
    pub fn key_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.jwks_cache_ttl)
    }

    /// Get allowed clock skew as Duration
    pub fn clock_skew(&self) -> Duration {
        Duration::from_secs(self.allowed_clock_skew)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_credentials_path_resolution_order() {
        env::remove_var(CREDENTIALS_PATH_ENV);

        let mut config = AuthConfig::default();
        assert_eq!(
            config.resolve_credentials_path(),
            PathBuf::from(DEFAULT_CREDENTIALS_FILE)
        );

        env::set_var(CREDENTIALS_PATH_ENV, "/tmp/creds.json");
        assert_eq!(
            config.resolve_credentials_path(),
            PathBuf::from("/tmp/creds.json")
        );

        // An explicit config value wins over the environment
        config.credentials_path = Some(PathBuf::from("/etc/shelfmark/creds.json"));
        assert_eq!(
            config.resolve_credentials_path(),
            PathBuf::from("/etc/shelfmark/creds.json")
        );

        env::remove_var(CREDENTIALS_PATH_ENV);
    }

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.jwks_cache_ttl, 3600);
        assert_eq!(config.allowed_clock_skew, 60);
        assert!(config.jwks_url.is_none());
    }
}
