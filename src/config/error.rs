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
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Invalid AI base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid pricing settings: {0}")]
    InvalidPricing(String),

    #[error("Assistant history limit must be between 1 and 100")]
    InvalidHistoryLimit,

    #[error("Assistant text '{0}' must not be empty")]
    EmptyAssistantText(&'static str),
}
