//! Alert-specific error types.

/// Errors that can occur while presenting an alert.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlertError {
    /// Selected index does not match any option
    #[error("Invalid alert selection {index} (alert had {options} options)")]
    InvalidSelection { index: usize, options: usize },

    /// Alert could not be shown
    #[error("Failed to present alert: {0}")]
    Presentation(String),
}
