//! Error handling module for SL Automotive
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Domain-level errors (booking wizard, forms) live next to their modules and
//! are shown on the page that raised them.

use thiserror::Error;

/// Main error type for the storefront
#[derive(Error, Debug)]
pub enum SiteError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog errors (bad data file, duplicate ids)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Validation errors (user input)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for storefront operations
pub type Result<T> = std::result::Result<T, SiteError>;

// Convenient error constructors
impl SiteError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::config("interval too short");
        assert_eq!(err.to_string(), "Configuration error: interval too short");

        let err = SiteError::catalog("duplicate stock id SLA-0001");
        assert_eq!(err.to_string(), "Catalog error: duplicate stock id SLA-0001");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SiteError = io_err.into();
        assert!(matches!(err, SiteError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: SiteError = json_err.into();
        assert!(matches!(err, SiteError::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(SiteError::terminal("no tty"), SiteError::Terminal(_)));
        assert!(matches!(SiteError::validation("bad"), SiteError::Validation(_)));
    }
}
