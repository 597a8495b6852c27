use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{TaskError, TaskResult},
    models::{CreateTask, PageQuery, Task, TaskPage},
    repository::TaskRepository,
};

pub struct PgTaskRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn insert(&self, owner_id: Uuid, input: CreateTask) -> TaskResult<Task> {
        let active_model: entity::ActiveModel = (owner_id, input).into();

        let model = self.base.insert(active_model).await?;

        tracing::info!(task_id = %model.id, "Created task");
        Ok(model.into())
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> TaskResult<Vec<Task>> {
        let models = entity::Entity::find()
            .filter(entity::Column::OwnerId.eq(owner_id))
            .order_by_desc(entity::Column::CreatedAt)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_by_owner_paged(&self, owner_id: Uuid, page: PageQuery) -> TaskResult<TaskPage> {
        if page.size <= 0 {
            return Err(TaskError::InvalidPageRequest(format!(
                "page size must be positive, got {}",
                page.size
            )));
        }
        if page.page < 0 {
            return Err(TaskError::InvalidPageRequest(format!(
                "page index must not be negative, got {}",
                page.page
            )));
        }

        let paginator = entity::Entity::find()
            .filter(entity::Column::OwnerId.eq(owner_id))
            .order_by_desc(entity::Column::CreatedAt)
            .paginate(self.base.db(), page.size as u64);

        let total_items = paginator.num_items().await?;
        let models = paginator.fetch_page(page.page as u64).await?;

        Ok(TaskPage {
            items: models.into_iter().map(Into::into).collect(),
            page: page.page,
            size: page.size,
            total_items,
            total_pages: total_items.div_ceil(page.size as u64),
        })
    }

    async fn find_by_id_and_owner(&self, id: Uuid, owner_id: Uuid) -> TaskResult<Option<Task>> {
        // One query filtered by both identifiers; never fetch-then-check
        let model = entity::Entity::find()
            .filter(entity::Column::Id.eq(id))
            .filter(entity::Column::OwnerId.eq(owner_id))
            .one(self.base.db())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn update(&self, task: Task) -> TaskResult<Task> {
        let id = task.id;
        let active_model: entity::ActiveModel = task.into();

        let updated_model = self.base.update(active_model).await.map_err(|e| match e {
            // Row deleted by a concurrent call between lookup and write
            DbErr::RecordNotUpdated => TaskError::NotFound(id),
            other => other.into(),
        })?;

        tracing::info!(task_id = %id, "Updated task");
        Ok(updated_model.into())
    }

    async fn delete(&self, id: Uuid) -> TaskResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected > 0 {
            tracing::info!(task_id = %id, "Deleted task");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
