//! Task records and the persistence contract consumed by the editor.
//!
//! The editor never stores tasks itself. It hands titles to a
//! [`TaskService`] and only reads the `id` and `title` of the task it edits.

mod error;
mod memory;

pub use error::TaskServiceError;
pub use memory::MemoryTaskService;

use async_trait::async_trait;
use fake::Dummy;
use std::fmt;

/// Unique task identifier.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Hash)]
pub struct TaskId(pub String);

impl TaskId {
    /// Return a freshly generated identifier.
    ///
    pub fn generate() -> TaskId {
        TaskId(uuid::Uuid::new_v4().to_string())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        TaskId(id.to_owned())
    }
}

/// Defines task data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub memo: Option<String>,
    pub is_done: bool,
}

impl Task {
    /// Return a new, not yet completed task with a generated id.
    ///
    pub fn new(title: &str, memo: Option<&str>) -> Task {
        Task {
            id: TaskId::generate(),
            title: title.to_owned(),
            memo: memo.map(str::to_owned),
            is_done: false,
        }
    }
}

/// Persistence operations the editor relies on.
///
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Create and store a new task.
    async fn create(&self, title: &str, memo: Option<&str>) -> Result<Task, TaskServiceError>;

    /// Replace title and memo of an existing task.
    async fn update(
        &self,
        id: &TaskId,
        title: &str,
        memo: Option<&str>,
    ) -> Result<Task, TaskServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    #[test]
    fn new_task_is_open() {
        let title: String = Faker.fake();
        let task = Task::new(&title, None);
        assert_eq!(title, task.title);
        assert_eq!(None, task.memo);
        assert!(!task.is_done);
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(TaskId::generate(), TaskId::generate());
    }

    #[test]
    fn task_id_display() {
        let id = TaskId::from("42");
        assert_eq!("42", id.to_string());
    }
}
