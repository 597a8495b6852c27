use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ApiResponse, AuditEvent, AuditOutcome, AuthUser, UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse, UnauthorizedResponse,
    },
    extract_ip_from_headers, extract_user_agent,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::TaskResult;
use crate::models::{CreateTask, PageQuery, TaskPageResponse, TaskResponse, UpdateTask};
use crate::repository::TaskRepository;
use crate::service::TaskService;

/// OpenAPI documentation for Tasks API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_tasks,
        list_tasks_paginated,
        create_task,
        update_task,
        delete_task,
    ),
    components(
        schemas(TaskResponse, TaskPageResponse, CreateTask, UpdateTask, ApiResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Owner-scoped task management endpoints")
    )
)]
pub struct ApiDoc;

const TAG: &str = "tasks";

/// Create the task router with all HTTP endpoints
pub fn router<R: TaskRepository + 'static>(service: TaskService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route("/paginated", get(list_tasks_paginated))
        .route("/{id}", axum::routing::put(update_task).delete(delete_task))
        .with_state(shared_service)
}

/// List all of the caller's tasks, newest first
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of the caller's tasks", body = Vec<TaskResponse>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn list_tasks<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    AuthUser(owner_id): AuthUser,
) -> TaskResult<Json<Vec<TaskResponse>>> {
    let tasks = service.list_tasks(owner_id).await?;
    Ok(Json(tasks.into_iter().map(Into::into).collect()))
}

/// List one page of the caller's tasks, newest first
#[utoipa::path(
    get,
    path = "/paginated",
    tag = TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "One page of the caller's tasks", body = TaskPageResponse),
        (status = 400, description = "Invalid page index or size", body = ApiResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn list_tasks_paginated<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    AuthUser(owner_id): AuthUser,
    Query(page): Query<PageQuery>,
) -> TaskResult<Json<TaskPageResponse>> {
    let page = service.list_tasks_paged(owner_id, page).await?;
    Ok(Json(page.into()))
}

/// Create a new task owned by the caller
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateTask,
    responses(
        (status = 201, description = "Task created successfully", body = TaskResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn create_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    AuthUser(owner_id): AuthUser,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<CreateTask>,
) -> TaskResult<impl IntoResponse> {
    let task = service.create_task(owner_id, input).await?;

    // Audit log successful creation
    AuditEvent::new(
        Some(owner_id.to_string()),
        "task.create",
        Some(format!("task:{}", task.id)),
        AuditOutcome::Success,
    )
    .with_ip(extract_ip_from_headers(&headers))
    .with_user_agent(extract_user_agent(&headers))
    .log();

    Ok((StatusCode::CREATED, Json(TaskResponse::from(task))))
}

/// Update a task the caller owns
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    request_body = UpdateTask,
    responses(
        (status = 200, description = "Task updated successfully", body = TaskResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn update_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    AuthUser(owner_id): AuthUser,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateTask>,
) -> TaskResult<Json<TaskResponse>> {
    let task = service.update_task(id, owner_id, input).await?;
    Ok(Json(task.into()))
}

/// Delete a task the caller owns
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task deleted successfully", body = ApiResponse),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn delete_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    AuthUser(owner_id): AuthUser,
    headers: HeaderMap,
    UuidPath(id): UuidPath,
) -> TaskResult<impl IntoResponse> {
    service.delete_task(id, owner_id).await?;

    // Audit log successful deletion
    AuditEvent::new(
        Some(owner_id.to_string()),
        "task.delete",
        Some(format!("task:{}", id)),
        AuditOutcome::Success,
    )
    .with_ip(extract_ip_from_headers(&headers))
    .with_user_agent(extract_user_agent(&headers))
    .log();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Task deleted successfully")),
    ))
}
