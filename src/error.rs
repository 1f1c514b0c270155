/*
 * Error Module
 *
 * The simulation itself cannot fail; errors only come from loading and
 * validating the show configuration.
 */

use std::path::PathBuf;

/// Result alias that carries the [`ConfigError`] type.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::Invalid { field, reason }
    }
}
