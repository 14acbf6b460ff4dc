//! Configuration loading contract shared by Shelfmark binaries.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while resolving or parsing configuration.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// A file the configuration points at does not exist.
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// The configuration sources could not be parsed into the target type.
    #[error("Failed to parse configuration: {details}")]
    ParseError { details: String },

    /// A configuration value is present but unusable.
    #[error("Invalid configuration value for {field}: {details}")]
    InvalidValue { field: String, details: String },
}

/// Loads a typed configuration from defaults, an optional TOML file, and
/// environment overrides.
///
/// Implementations layer sources in that order, so a file overrides built-in
/// defaults and the environment overrides both.
pub trait ConfigLoader<T>: Sized {
    /// Load from the default file location (if present) plus environment.
    fn load(path: Option<PathBuf>) -> Result<T, ConfigurationError>;

    /// Load from an explicit file path plus environment.
    fn load_from_file(path: &Path) -> Result<T, ConfigurationError>;

    /// Re-apply environment overrides with the given prefix onto an
    /// existing value.
    fn apply_env_overrides(config: &mut T, prefix: &str) -> Result<(), ConfigurationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = ConfigurationError::FileNotFound {
            path: "/etc/shelfmark/creds.json".to_string(),
        };
        assert!(err.to_string().contains("/etc/shelfmark/creds.json"));

        let err = ConfigurationError::InvalidValue {
            field: "project_id".to_string(),
            details: "must not be empty".to_string(),
        };
        assert!(err.to_string().contains("project_id"));
        assert!(err.to_string().contains("must not be empty"));
    }
}
