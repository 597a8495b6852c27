//! Handler tests for Tasks domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! Unlike E2E tests, these test ONLY the tasks domain handlers,
//! not the full application with routing, CORS, etc. Authenticated identity
//! is injected as request extensions, the same way the JWT middleware does.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::JwtClaims;
use domain_tasks::*;
use http_body_util::BodyExt;
use serde_json::json;
use test_utils::{TestDataBuilder, TestDatabase};
use tower::ServiceExt; // For oneshot()
use uuid::Uuid;

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn claims_for(user_id: Uuid) -> JwtClaims {
    JwtClaims {
        sub: user_id.to_string(),
        email: format!("{user_id}@example.com"),
        exp: i64::MAX,
        iat: 0,
        jti: Uuid::new_v4().to_string(),
    }
}

fn authed_request(user_id: Uuid, method: &str, uri: &str, body: Option<serde_json::Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .extension(claims_for(user_id));

    match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&value).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

#[tokio::test]
async fn test_create_task_handler_returns_201_with_default_status() {
    let db = TestDatabase::new().await;
    let service = TaskService::new(PgTaskRepository::new(db.connection()));
    let app = handlers::router(service);

    let builder = TestDataBuilder::from_test_name("handler_create_201");
    let user_id = builder.user_id();

    let request = authed_request(
        user_id,
        "POST",
        "/",
        Some(json!({"title": builder.name("task", "main")})),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let task: TaskResponse = json_body(response.into_body()).await;
    assert_eq!(task.title, builder.name("task", "main"));
    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.description, None);
}

#[tokio::test]
async fn test_create_task_handler_keeps_explicit_status() {
    let db = TestDatabase::new().await;
    let service = TaskService::new(PgTaskRepository::new(db.connection()));
    let app = handlers::router(service);

    let builder = TestDataBuilder::from_test_name("handler_explicit_status");

    let request = authed_request(
        builder.user_id(),
        "POST",
        "/",
        Some(json!({
            "title": builder.name("task", "wip"),
            "description": "already started",
            "status": "IN_PROGRESS"
        })),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let task: TaskResponse = json_body(response.into_body()).await;
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.description.as_deref(), Some("already started"));
}

#[tokio::test]
async fn test_create_task_handler_validates_title() {
    let db = TestDatabase::new().await;
    let service = TaskService::new(PgTaskRepository::new(db.connection()));
    let app = handlers::router(service);

    let builder = TestDataBuilder::from_test_name("handler_validate");

    // Invalid title (empty string)
    let request = authed_request(builder.user_id(), "POST", "/", Some(json!({"title": ""})));

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_create_task_handler_rejects_unknown_status() {
    let db = TestDatabase::new().await;
    let service = TaskService::new(PgTaskRepository::new(db.connection()));
    let app = handlers::router(service.clone());

    let builder = TestDataBuilder::from_test_name("handler_unknown_status");
    let user_id = builder.user_id();

    let request = authed_request(
        user_id,
        "POST",
        "/",
        Some(json!({"title": "x", "status": "ARCHIVED"})),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Rejected at deserialization, so nothing was stored
    assert!(service.list_tasks(user_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_task_handler_ignores_owner_in_body() {
    let db = TestDatabase::new().await;
    let service = TaskService::new(PgTaskRepository::new(db.connection()));
    let app = handlers::router(service.clone());

    let builder = TestDataBuilder::from_test_name("handler_owner_in_body");
    let user_id = builder.user_id();
    let smuggled = builder.other_user_id();

    let request = authed_request(
        user_id,
        "POST",
        "/",
        Some(json!({"title": "mine", "owner_id": smuggled})),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Task landed under the authenticated caller, not the body value
    assert_eq!(service.list_tasks(user_id).await.unwrap().len(), 1);
    assert!(service.list_tasks(smuggled).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_handlers_require_authentication() {
    let db = TestDatabase::new().await;
    let service = TaskService::new(PgTaskRepository::new(db.connection()));
    let app = handlers::router(service);

    // No claims extension injected
    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_task_handler_partial_update() {
    let db = TestDatabase::new().await;
    let service = TaskService::new(PgTaskRepository::new(db.connection()));

    let builder = TestDataBuilder::from_test_name("handler_partial_update");
    let user_id = builder.user_id();

    let created = service
        .create_task(
            user_id,
            CreateTask {
                title: builder.name("task", "original"),
                description: Some("keep me".to_string()),
                status: TaskStatus::Pending,
            },
        )
        .await
        .unwrap();

    let app = handlers::router(service);
    let request = authed_request(
        user_id,
        "PUT",
        &format!("/{}", created.id),
        Some(json!({"status": "DONE"})),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let task: TaskResponse = json_body(response.into_body()).await;
    assert_eq!(task.status, TaskStatus::Done);
    assert_eq!(task.title, builder.name("task", "original"));
    assert_eq!(task.description.as_deref(), Some("keep me"));
    assert_eq!(task.created_at, created.created_at);
}

#[tokio::test]
async fn test_update_task_handler_rejects_invalid_uuid() {
    let db = TestDatabase::new().await;
    let service = TaskService::new(PgTaskRepository::new(db.connection()));
    let app = handlers::router(service);

    let builder = TestDataBuilder::from_test_name("handler_bad_uuid");
    let request = authed_request(
        builder.user_id(),
        "PUT",
        "/not-a-uuid",
        Some(json!({"status": "DONE"})),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_foreign_task_returns_404() {
    let db = TestDatabase::new().await;
    let service = TaskService::new(PgTaskRepository::new(db.connection()));

    let builder = TestDataBuilder::from_test_name("handler_foreign_update");
    let owner = builder.user_id();
    let intruder = builder.other_user_id();

    let created = service
        .create_task(
            owner,
            CreateTask {
                title: builder.name("task", "private"),
                description: None,
                status: TaskStatus::Pending,
            },
        )
        .await
        .unwrap();

    let app = handlers::router(service);
    let request = authed_request(
        intruder,
        "PUT",
        &format!("/{}", created.id),
        Some(json!({"title": "hijacked"})),
    );

    let response = app.oneshot(request).await.unwrap();

    // Indistinguishable from a task that does not exist
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_task_handler_returns_ack_body() {
    let db = TestDatabase::new().await;
    let service = TaskService::new(PgTaskRepository::new(db.connection()));

    let builder = TestDataBuilder::from_test_name("handler_delete_ack");
    let user_id = builder.user_id();

    let created = service
        .create_task(
            user_id,
            CreateTask {
                title: builder.name("task", "done-with"),
                description: None,
                status: TaskStatus::Done,
            },
        )
        .await
        .unwrap();

    let app = handlers::router(service);

    let response = app
        .clone()
        .oneshot(authed_request(
            user_id,
            "DELETE",
            &format!("/{}", created.id),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Task deleted successfully");

    // Second delete: the task is gone
    let response = app
        .oneshot(authed_request(
            user_id,
            "DELETE",
            &format!("/{}", created.id),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_tasks_response_never_contains_owner() {
    let db = TestDatabase::new().await;
    let service = TaskService::new(PgTaskRepository::new(db.connection()));

    let builder = TestDataBuilder::from_test_name("handler_owner_hidden");
    let user_id = builder.user_id();

    service
        .create_task(
            user_id,
            CreateTask {
                title: builder.name("task", "secret-owner"),
                description: None,
                status: TaskStatus::Pending,
            },
        )
        .await
        .unwrap();

    let app = handlers::router(service);
    let response = app
        .oneshot(authed_request(user_id, "GET", "/", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let raw = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(!raw.contains("owner_id"));
    assert!(!raw.contains(&user_id.to_string()));
}

#[tokio::test]
async fn test_paginated_handler_rejects_bad_page_params() {
    let db = TestDatabase::new().await;
    let service = TaskService::new(PgTaskRepository::new(db.connection()));
    let app = handlers::router(service);

    let builder = TestDataBuilder::from_test_name("handler_bad_page");

    for uri in ["/paginated?size=0", "/paginated?size=-5", "/paginated?page=-1"] {
        let response = app
            .clone()
            .oneshot(authed_request(builder.user_id(), "GET", uri, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {uri}");
    }
}

#[tokio::test]
async fn test_paginated_handler_defaults() {
    let db = TestDatabase::new().await;
    let service = TaskService::new(PgTaskRepository::new(db.connection()));

    let builder = TestDataBuilder::from_test_name("handler_page_defaults");
    let user_id = builder.user_id();

    for i in 0..12 {
        service
            .create_task(
                user_id,
                CreateTask {
                    title: builder.name("task", &format!("t{i}")),
                    description: None,
                    status: TaskStatus::Pending,
                },
            )
            .await
            .unwrap();
    }

    let app = handlers::router(service);
    let response = app
        .oneshot(authed_request(user_id, "GET", "/paginated", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page: TaskPageResponse = json_body(response.into_body()).await;
    assert_eq!(page.page, 0);
    assert_eq!(page.size, 10);
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.total_items, 12);
    assert_eq!(page.total_pages, 2);
}
