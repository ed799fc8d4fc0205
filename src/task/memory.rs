use super::{Task, TaskId, TaskService, TaskServiceError};
use async_trait::async_trait;
use log::*;
use tokio::sync::Mutex;

/// Keeps tasks in memory, in insertion order.
///
#[derive(Default)]
pub struct MemoryTaskService {
    tasks: Mutex<Vec<Task>>,
}

impl MemoryTaskService {
    /// Return a new empty store.
    ///
    pub fn new() -> Self {
        MemoryTaskService::default()
    }

    /// Return a store seeded with the given tasks.
    ///
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        MemoryTaskService {
            tasks: Mutex::new(tasks),
        }
    }

    /// Return a snapshot of all stored tasks.
    ///
    pub async fn tasks(&self) -> Vec<Task> {
        self.tasks.lock().await.clone()
    }

    /// Store an existing task record as is.
    ///
    pub async fn insert(&self, task: Task) {
        debug!("Inserting task {}...", task.id);
        self.tasks.lock().await.push(task);
    }

    /// Remove the task with the given id.
    ///
    pub async fn delete(&self, id: &TaskId) -> Result<Task, TaskServiceError> {
        let mut tasks = self.tasks.lock().await;
        let index = tasks
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| TaskServiceError::NotFound { id: id.to_string() })?;
        info!("Deleting task {}...", id);
        Ok(tasks.remove(index))
    }

    /// Mark the task with the given id as done or not done.
    ///
    pub async fn mark_done(&self, id: &TaskId, done: bool) -> Result<Task, TaskServiceError> {
        let mut tasks = self.tasks.lock().await;
        let task = tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| TaskServiceError::NotFound { id: id.to_string() })?;
        task.is_done = done;
        Ok(task.clone())
    }
}

#[async_trait]
impl TaskService for MemoryTaskService {
    async fn create(&self, title: &str, memo: Option<&str>) -> Result<Task, TaskServiceError> {
        let task = Task::new(title, memo);
        info!("Creating task '{}' with id {}...", title, task.id);
        self.tasks.lock().await.push(task.clone());
        Ok(task)
    }

    async fn update(
        &self,
        id: &TaskId,
        title: &str,
        memo: Option<&str>,
    ) -> Result<Task, TaskServiceError> {
        let mut tasks = self.tasks.lock().await;
        let task = tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| TaskServiceError::NotFound { id: id.to_string() })?;
        info!("Updating task {}...", id);
        task.title = title.to_owned();
        task.memo = memo.map(str::to_owned);
        Ok(task.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    #[tokio::test]
    async fn create_appends_task() {
        let service = MemoryTaskService::new();
        let created = service.create("Buy milk", None).await.unwrap();
        assert_eq!("Buy milk", created.title);
        assert_eq!(vec![created], service.tasks().await);
    }

    #[tokio::test]
    async fn update_replaces_title_and_memo() {
        let task: Task = Faker.fake();
        let service = MemoryTaskService::with_tasks(vec![task.clone()]);
        let updated = service.update(&task.id, "Buy eggs", None).await.unwrap();
        assert_eq!(task.id, updated.id);
        assert_eq!("Buy eggs", updated.title);
        assert_eq!(None, updated.memo);
        assert_eq!(vec![updated], service.tasks().await);
    }

    #[tokio::test]
    async fn update_unknown_task_fails() {
        let service = MemoryTaskService::new();
        let result = service.update(&TaskId::from("missing"), "x", None).await;
        assert_eq!(
            Err(TaskServiceError::NotFound {
                id: "missing".to_string()
            }),
            result
        );
    }

    #[tokio::test]
    async fn delete_removes_task() {
        let tasks = vec![Faker.fake::<Task>(), Faker.fake::<Task>()];
        let service = MemoryTaskService::with_tasks(tasks.clone());
        let deleted = service.delete(&tasks[0].id).await.unwrap();
        assert_eq!(tasks[0], deleted);
        assert_eq!(vec![tasks[1].clone()], service.tasks().await);
        assert!(service.delete(&tasks[0].id).await.is_err());
    }

    #[tokio::test]
    async fn mark_done_toggles_flag() {
        let service = MemoryTaskService::new();
        let task = Task::new("Walk dog", Some("before noon"));
        service.insert(task.clone()).await;
        assert!(service.mark_done(&task.id, true).await.unwrap().is_done);
        assert!(!service.mark_done(&task.id, false).await.unwrap().is_done);
    }
}
