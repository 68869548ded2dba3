//! Error types for a3s-quartz
//!
//! Expression validation never fails with an error: a rejected expression is
//! a `Verdict`, not a `QuartzError`. These errors only cover configuration.

use thiserror::Error;

/// Errors that can occur while building a validator configuration
#[derive(Debug, Error)]
pub enum QuartzError {
    /// Configuration values are inconsistent
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration document could not be parsed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, QuartzError>;
