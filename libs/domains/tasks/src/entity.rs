use crate::models::TaskStatus;
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the tasks table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub owner_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Task
impl From<Model> for crate::models::Task {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            status: model.status,
            owner_id: model.owner_id,
            created_at: model.created_at.into(),
        }
    }
}

// Conversion from (owner, CreateTask) to Sea-ORM ActiveModel.
// The owner id always comes from the authenticated caller, never the body.
impl From<(Uuid, crate::models::CreateTask)> for ActiveModel {
    fn from((owner_id, input): (Uuid, crate::models::CreateTask)) -> Self {
        ActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(input.title),
            description: Set(input.description),
            status: Set(input.status),
            owner_id: Set(owner_id),
            created_at: Set(chrono::Utc::now().into()),
        }
    }
}

// Conversion from domain Task back to ActiveModel for full-record updates
impl From<crate::models::Task> for ActiveModel {
    fn from(task: crate::models::Task) -> Self {
        ActiveModel {
            id: Set(task.id),
            title: Set(task.title),
            description: Set(task.description),
            status: Set(task.status),
            owner_id: Set(task.owner_id),
            created_at: Set(task.created_at.into()),
        }
    }
}
