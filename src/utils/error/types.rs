//! Error types for the authorization layer

use thiserror::Error;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, AuthzError>;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum AuthzError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Identity values handed over by the session provider are malformed
    #[error("Invalid identity: {0}")]
    InvalidIdentity(String),

    /// Tenant directory errors
    #[error("Tenant directory error: {0}")]
    Directory(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
