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
    #[error("Invalid health thresholds: {0}")]
    InvalidThresholds(String),

    #[error("Due-soon window must not be negative, got {0}")]
    NegativeDueSoonWindow(i64),

    #[error("Seed file does not exist: {0}")]
    SeedFileMissing(String),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
