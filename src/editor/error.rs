//! Editor-specific error types.

use crate::alert::AlertError;
use crate::task::TaskServiceError;

/// Errors surfaced to the host while processing an action.
///
/// None of these change the editor state; the session stays editable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    /// Task service failed to create or update the task
    #[error("Task service failed: {0}")]
    Service(#[from] TaskServiceError),

    /// Confirmation alert could not be presented
    #[error("Alert failed: {0}")]
    Alert(#[from] AlertError),

    /// Confirmation alert was dismissed without a choice
    #[error("Alert dismissed without a selection")]
    AlertNoSelection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_error_from_task_service_error() {
        let error: EditorError = TaskServiceError::Unavailable("offline".to_string()).into();
        assert!(matches!(error, EditorError::Service(_)));
        assert!(error.to_string().contains("Task service failed"));
        assert!(error.to_string().contains("offline"));
    }

    #[test]
    fn test_editor_error_from_alert_error() {
        let error: EditorError = AlertError::Presentation("closed".to_string()).into();
        assert!(matches!(error, EditorError::Alert(_)));
        assert!(error.to_string().contains("Alert failed"));
    }

    #[test]
    fn test_editor_error_no_selection() {
        let error = EditorError::AlertNoSelection;
        assert!(error.to_string().contains("without a selection"));
    }
}
