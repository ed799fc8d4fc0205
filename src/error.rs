//! Application-wide error types.
//!
//! This module defines the main error type hierarchy for the application,
//! allowing for type-safe error handling throughout the codebase.

pub use crate::alert::AlertError;
pub use crate::config::ConfigError;
pub use crate::editor::EditorError;
pub use crate::task::TaskServiceError;

/// Main application error type.
///
/// This is the top-level error type that encompasses all error types
/// in the application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Editor session errors
    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(String),
}

/// Convenience type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_from_config_error() {
        let config_error = ConfigError::NotLoaded;
        let app_error: AppError = config_error.into();
        assert!(matches!(app_error, AppError::Config(_)));
        assert!(app_error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_app_error_from_editor_error() {
        let editor_error: EditorError = TaskServiceError::Invalid("empty".to_string()).into();
        let app_error: AppError = editor_error.into();
        assert!(matches!(app_error, AppError::Editor(_)));
        assert!(app_error.to_string().contains("Editor error"));
        assert!(app_error.to_string().contains("empty"));
    }

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
        assert!(app_error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_app_error_logger() {
        let error = AppError::Logger("already set".to_string());
        assert!(error.to_string().contains("Logger error"));
    }

    #[test]
    fn test_alert_error_reexport() {
        let error: EditorError = AlertError::Presentation("x".to_string()).into();
        assert!(matches!(error, EditorError::Alert(_)));
    }
}
