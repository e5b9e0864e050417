use std::io;

use thiserror::Error;

/// Library-wide error type for dsm operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Extension directory missing under the extensions root.
    #[error("Extension '{0}' not found under the extensions root")]
    ExtensionNotFound(String),

    /// Deployment config file missing (deployment.toml).
    #[error("Deployment config not found: {0}")]
    ConfigMissing(String),

    /// Deployment config error.
    #[error(transparent)]
    Config(#[from] crate::domain::config::ConfigError),

    /// Execution history store is unreadable or corrupt.
    #[error("Execution history store error at {path}: {details}")]
    History { path: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
