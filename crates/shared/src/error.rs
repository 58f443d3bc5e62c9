//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Validation error (e.g., a blank currency label).
    #[error("Validation error: {0}")]
    Validation(String),

    /// An operation needing at least one element received none.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An amount exceeded the representable range.
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::EmptyInput(_) => "EMPTY_INPUT",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Overflow(_) => "OVERFLOW",
            Self::Io(_) => "IO_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
