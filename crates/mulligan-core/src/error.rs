//! Error types for mulligan-core

use thiserror::Error;

/// Result type alias using mulligan-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for Mulligan
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid retry configuration
    #[error("Invalid retry configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
