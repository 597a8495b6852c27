use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Task lifecycle status
///
/// The closed enum is the single validation point for status: unknown wire
/// values are rejected at deserialization, so no stored task can carry a
/// status outside these three members.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "task_status")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Task not started
    #[default]
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Task in progress
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    /// Task completed
    #[sea_orm(string_value = "done")]
    Done,
}

/// Task entity - a single task owned by exactly one user
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Unique identifier (store-assigned, UUID v7)
    pub id: Uuid,
    /// Task title
    pub title: String,
    /// Optional task description
    pub description: Option<String>,
    /// Task status
    pub status: TaskStatus,
    /// Owner, fixed at creation; never exposed to clients
    pub owner_id: Uuid,
    /// Creation timestamp; never mutated by updates
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new task
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTask {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub description: Option<String>,
    /// Defaults to PENDING when omitted
    #[serde(default)]
    pub status: TaskStatus,
}

/// DTO for updating an existing task
///
/// Absent fields (and explicit nulls) leave the stored value untouched.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema, Default)]
pub struct UpdateTask {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

/// Pagination parameters for the paginated listing
///
/// Signed on purpose: negative values deserialize fine and are rejected by
/// the store with a 400 instead of an opaque parse failure.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema, IntoParams)]
pub struct PageQuery {
    /// Zero-based page index
    #[serde(default)]
    pub page: i64,
    /// Page size
    #[serde(default = "default_page_size")]
    pub size: i64,
}

fn default_page_size() -> i64 {
    10
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: default_page_size(),
        }
    }
}

/// One page of tasks, as returned by the repository
#[derive(Debug, Clone)]
pub struct TaskPage {
    pub items: Vec<Task>,
    pub page: i64,
    pub size: i64,
    pub total_items: u64,
    pub total_pages: u64,
}

/// DTO for task response; `owner_id` is deliberately not serialized
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaskResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            status: task.status,
            created_at: task.created_at,
        }
    }
}

/// DTO for a page of task responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaskPageResponse {
    pub items: Vec<TaskResponse>,
    pub page: i64,
    pub size: i64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl From<TaskPage> for TaskPageResponse {
    fn from(page: TaskPage) -> Self {
        Self {
            items: page.items.into_iter().map(Into::into).collect(),
            page: page.page,
            size: page.size,
            total_items: page.total_items,
            total_pages: page.total_pages,
        }
    }
}

impl Task {
    /// Apply updates from UpdateTask DTO; absent fields are left untouched
    pub fn apply_update(&mut self, update: UpdateTask) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> Task {
        Task {
            id: Uuid::now_v7(),
            title: "Write report".to_string(),
            description: Some("Quarterly numbers".to_string()),
            status: TaskStatus::Pending,
            owner_id: Uuid::now_v7(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
        assert_eq!(
            serde_json::from_str::<TaskStatus>("\"PENDING\"").unwrap(),
            TaskStatus::Pending
        );
        assert!(serde_json::from_str::<TaskStatus>("\"ARCHIVED\"").is_err());
    }

    #[test]
    fn test_status_defaults_to_pending() {
        let input: CreateTask = serde_json::from_str(r#"{"title": "Buy milk"}"#).unwrap();
        assert_eq!(input.status, TaskStatus::Pending);
        assert_eq!(input.description, None);
    }

    #[test]
    fn test_apply_update_partial() {
        let mut task = task();
        let original_description = task.description.clone();
        let original_created_at = task.created_at;

        task.apply_update(UpdateTask {
            status: Some(TaskStatus::Done),
            ..Default::default()
        });

        assert_eq!(task.status, TaskStatus::Done);
        assert_eq!(task.title, "Write report");
        assert_eq!(task.description, original_description);
        assert_eq!(task.created_at, original_created_at);
    }

    #[test]
    fn test_update_null_fields_are_absent() {
        // Explicit nulls deserialize to None, same as omitted fields
        let update: UpdateTask =
            serde_json::from_str(r#"{"title": null, "description": null}"#).unwrap();
        assert_eq!(update.title, None);
        assert_eq!(update.description, None);
    }

    #[test]
    fn test_response_omits_owner() {
        let task = task();
        let owner_id = task.owner_id;
        let body = serde_json::to_value(TaskResponse::from(task)).unwrap();

        assert!(body.get("owner_id").is_none());
        assert!(!body.to_string().contains(&owner_id.to_string()));
    }

    #[test]
    fn test_page_query_defaults() {
        let query: PageQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page, 0);
        assert_eq!(query.size, 10);
    }
}
