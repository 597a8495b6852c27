use async_trait::async_trait;
use uuid::Uuid;

use crate::error::TaskResult;
use crate::models::{CreateTask, PageQuery, Task, TaskPage};

/// Repository trait for Task persistence
///
/// This trait defines the data access interface for tasks. Every read is
/// owner-scoped: a task belonging to another user is indistinguishable from
/// a task that does not exist.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new task for the given owner
    async fn insert(&self, owner_id: Uuid, input: CreateTask) -> TaskResult<Task>;

    /// List all tasks for an owner, newest first
    async fn list_by_owner(&self, owner_id: Uuid) -> TaskResult<Vec<Task>>;

    /// List one page of an owner's tasks, newest first
    async fn list_by_owner_paged(&self, owner_id: Uuid, page: PageQuery) -> TaskResult<TaskPage>;

    /// Scoped lookup: single query filtered by both id and owner
    async fn find_by_id_and_owner(&self, id: Uuid, owner_id: Uuid) -> TaskResult<Option<Task>>;

    /// Replace an existing task record
    async fn update(&self, task: Task) -> TaskResult<Task>;

    /// Delete a task by ID; returns whether a row was removed
    async fn delete(&self, id: Uuid) -> TaskResult<bool>;
}
