//! Error types for TeaHub core.

use thiserror::Error;

/// Errors that can occur while loading site configuration.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The configuration file is not valid TOML or has the wrong shape.
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configuration value is out of range.
    #[error("Invalid configuration for {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

impl CoreError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CoreError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
