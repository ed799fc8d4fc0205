//! Task service-specific error types.

/// Errors that can occur while persisting tasks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskServiceError {
    /// Task not found
    #[error("Task not found: {id}")]
    NotFound { id: String },

    /// Task was rejected by the store
    #[error("Invalid task: {0}")]
    Invalid(String),

    /// Backing store could not be reached
    #[error("Task store unavailable: {0}")]
    Unavailable(String),
}
