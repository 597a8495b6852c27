//! Integration tests for the Tasks domain
//!
//! These tests use real PostgreSQL via testcontainers to ensure:
//! - Owner-scoped queries behave correctly
//! - Pagination and ordering hold against real data
//! - Concurrent-style edge cases (double delete) are handled

use domain_tasks::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};
use uuid::Uuid;

fn create_input(builder: &TestDataBuilder, suffix: &str) -> CreateTask {
    CreateTask {
        title: builder.name("task", suffix),
        description: None,
        status: TaskStatus::default(),
    }
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
async fn test_insert_and_scoped_find() {
    let db = TestDatabase::new().await;
    let repo = PgTaskRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("insert_and_find");

    let owner_id = builder.user_id();
    let input = CreateTask {
        title: builder.name("task", "main"),
        description: Some("Integration test task".to_string()),
        status: TaskStatus::InProgress,
    };

    let created = repo.insert(owner_id, input.clone()).await.unwrap();

    assert_eq!(created.title, input.title);
    assert_eq!(created.status, TaskStatus::InProgress);
    assert_uuid_eq(created.owner_id, owner_id, "owner_id");

    // Scoped retrieval with the right owner
    let retrieved = repo
        .find_by_id_and_owner(created.id, owner_id)
        .await
        .unwrap();
    let retrieved = assert_some(retrieved, "task should exist for its owner");
    assert_uuid_eq(retrieved.id, created.id, "retrieved task id");

    // Same id, wrong owner: invisible
    let foreign = repo
        .find_by_id_and_owner(created.id, builder.other_user_id())
        .await
        .unwrap();
    assert!(foreign.is_none(), "foreign-owned lookup must miss");
}

#[tokio::test]
async fn test_list_by_owner_isolation() {
    let db = TestDatabase::new().await;
    let repo = PgTaskRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("owner_isolation");

    let alice = builder.user_id();
    let bob = builder.other_user_id();

    for i in 0..3 {
        repo.insert(alice, create_input(&builder, &format!("alice{i}")))
            .await
            .unwrap();
    }
    for i in 0..2 {
        repo.insert(bob, create_input(&builder, &format!("bob{i}")))
            .await
            .unwrap();
    }

    let alice_tasks = repo.list_by_owner(alice).await.unwrap();
    let bob_tasks = repo.list_by_owner(bob).await.unwrap();

    assert_eq!(alice_tasks.len(), 3);
    assert_eq!(bob_tasks.len(), 2);
    assert!(alice_tasks.iter().all(|t| t.owner_id == alice));
    assert!(bob_tasks.iter().all(|t| t.owner_id == bob));
}

#[tokio::test]
async fn test_pagination_walks_every_task_newest_first() {
    let db = TestDatabase::new().await;
    let repo = PgTaskRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pagination_25");

    let owner_id = builder.user_id();
    for i in 0..25 {
        repo.insert(owner_id, create_input(&builder, &format!("t{i:02}")))
            .await
            .unwrap();
    }

    let mut seen = Vec::new();
    let mut expected_sizes = vec![10, 10, 5].into_iter();

    for page_index in 0..3 {
        let page = repo
            .list_by_owner_paged(owner_id, PageQuery { page: page_index, size: 10 })
            .await
            .unwrap();

        assert_eq!(page.total_items, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), expected_sizes.next().unwrap());

        // Newest first within every page
        for window in page.items.windows(2) {
            assert!(
                window[0].created_at >= window[1].created_at,
                "page {page_index} not sorted by created_at desc"
            );
        }

        seen.extend(page.items.into_iter().map(|t| t.id));
    }

    // Every task appears exactly once across the three pages
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 25);
}

#[tokio::test]
async fn test_pagination_rejects_invalid_requests() {
    let db = TestDatabase::new().await;
    let repo = PgTaskRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pagination_invalid");

    let owner_id = builder.user_id();

    for query in [
        PageQuery { page: 0, size: 0 },
        PageQuery { page: 0, size: -1 },
        PageQuery { page: -1, size: 10 },
    ] {
        let result = repo.list_by_owner_paged(owner_id, query).await;
        assert!(
            matches!(result, Err(TaskError::InvalidPageRequest(_))),
            "expected InvalidPageRequest for {query:?}, got {result:?}"
        );
    }
}

#[tokio::test]
async fn test_delete_leaves_other_tasks_intact() {
    let db = TestDatabase::new().await;
    let repo = PgTaskRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("delete_intact");

    let owner_id = builder.user_id();
    let first = repo
        .insert(owner_id, create_input(&builder, "first"))
        .await
        .unwrap();
    let second = repo
        .insert(owner_id, create_input(&builder, "second"))
        .await
        .unwrap();

    assert!(repo.delete(first.id).await.unwrap());
    // Second delete is a no-op, not an error
    assert!(!repo.delete(first.id).await.unwrap());

    let remaining = repo.list_by_owner(owner_id).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_uuid_eq(remaining[0].id, second.id, "surviving task");
}

// ============================================================================
// Service Tests (ownership rules against a real store)
// ============================================================================

#[tokio::test]
async fn test_service_update_round_trip_preserves_unset_fields() {
    let db = TestDatabase::new().await;
    let service = TaskService::new(PgTaskRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("service_round_trip");

    let owner_id = builder.user_id();
    let created = service
        .create_task(
            owner_id,
            CreateTask {
                title: builder.name("task", "original"),
                description: Some("original description".to_string()),
                status: TaskStatus::Pending,
            },
        )
        .await
        .unwrap();

    // Update only the title
    let updated = service
        .update_task(
            created.id,
            owner_id,
            UpdateTask {
                title: Some(builder.name("task", "renamed")),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, builder.name("task", "renamed"));
    assert_eq!(updated.description.as_deref(), Some("original description"));
    assert_eq!(updated.status, TaskStatus::Pending);
    assert_eq!(updated.created_at, created.created_at);

    // And the stored record agrees
    let stored = service.list_tasks(owner_id).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0], updated);
}

#[tokio::test]
async fn test_service_foreign_owner_gets_not_found() {
    let db = TestDatabase::new().await;
    let service = TaskService::new(PgTaskRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("service_foreign");

    let owner = builder.user_id();
    let intruder = builder.other_user_id();
    let created = service
        .create_task(owner, create_input(&builder, "private"))
        .await
        .unwrap();

    let update = service
        .update_task(
            created.id,
            intruder,
            UpdateTask {
                title: Some("hijack".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(update, Err(TaskError::NotFound(_))));

    let delete = service.delete_task(created.id, intruder).await;
    assert!(matches!(delete, Err(TaskError::NotFound(_))));

    // The same failure a caller sees for a task that never existed
    let missing = service.delete_task(Uuid::now_v7(), intruder).await;
    assert!(matches!(missing, Err(TaskError::NotFound(_))));

    // Nothing changed for the real owner
    let tasks = service.list_tasks(owner).await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, created.title);
}

#[tokio::test]
async fn test_service_status_transitions_any_to_any() {
    let db = TestDatabase::new().await;
    let service = TaskService::new(PgTaskRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("service_transitions");

    let owner_id = builder.user_id();
    let created = service
        .create_task(owner_id, create_input(&builder, "lifecycle"))
        .await
        .unwrap();

    // Done straight from Pending, then back again: membership is the only rule
    for status in [TaskStatus::Done, TaskStatus::Pending, TaskStatus::InProgress] {
        let updated = service
            .update_task(
                created.id,
                owner_id,
                UpdateTask {
                    status: Some(status),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status, status);
    }
}
