//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("User count must be between {min} and {max}, got {got}")]
    UserCountOutOfRange {
        min: usize,
        max: usize,
        got: usize,
    },

    #[error("Project count must be at most {max}, got {got}")]
    ProjectCountTooLarge { max: usize, got: usize },

    #[error("Output path must not be empty")]
    EmptyOutputPath,
}
