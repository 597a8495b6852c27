use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, PageQuery, Task, TaskPage, UpdateTask};
use crate::repository::TaskRepository;

/// Service layer for Task business logic
///
/// The sole mutation entry point: every operation takes the authenticated
/// owner id, and every lookup goes through the repository's scoped queries.
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

// Manual impl: cloning only bumps the Arc, so the repository itself
// does not need to be Clone.
impl<R: TaskRepository> Clone for TaskService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new task for the owner, with validation
    #[instrument(skip(self, input), fields(owner_id = %owner_id, task_title = %input.title))]
    pub async fn create_task(&self, owner_id: Uuid, input: CreateTask) -> TaskResult<Task> {
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        self.repository.insert(owner_id, input).await
    }

    /// List all of an owner's tasks, newest first
    #[instrument(skip(self), fields(owner_id = %owner_id))]
    pub async fn list_tasks(&self, owner_id: Uuid) -> TaskResult<Vec<Task>> {
        self.repository.list_by_owner(owner_id).await
    }

    /// List one page of an owner's tasks, newest first
    #[instrument(skip(self), fields(owner_id = %owner_id, page = page.page, size = page.size))]
    pub async fn list_tasks_paged(&self, owner_id: Uuid, page: PageQuery) -> TaskResult<TaskPage> {
        self.repository.list_by_owner_paged(owner_id, page).await
    }

    /// Update a task the owner holds
    ///
    /// Validation runs before any store access, so invalid input mutates
    /// nothing. The scoped lookup makes a foreign-owned task surface as
    /// `NotFound`.
    #[instrument(skip(self, input), fields(task_id = %id, owner_id = %owner_id))]
    pub async fn update_task(
        &self,
        id: Uuid,
        owner_id: Uuid,
        input: UpdateTask,
    ) -> TaskResult<Task> {
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        let mut task = self
            .repository
            .find_by_id_and_owner(id, owner_id)
            .await?
            .ok_or(TaskError::NotFound(id))?;

        task.apply_update(input);

        self.repository.update(task).await
    }

    /// Delete a task the owner holds
    #[instrument(skip(self), fields(task_id = %id, owner_id = %owner_id))]
    pub async fn delete_task(&self, id: Uuid, owner_id: Uuid) -> TaskResult<()> {
        self.repository
            .find_by_id_and_owner(id, owner_id)
            .await?
            .ok_or(TaskError::NotFound(id))?;

        let deleted = self.repository.delete(id).await?;

        // Lost the race against a concurrent delete
        if !deleted {
            return Err(TaskError::NotFound(id));
        }

        Ok(())
    }
}
