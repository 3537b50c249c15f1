//! End-to-end task lifecycle flows over the in-memory adapter.

use super::helpers::{TestService, assert_single_task_found, service};
use rstest::rstest;
use todolist::task::{
    domain::{TaskStatus, WEEKEND_TITLE_PREFIX},
    services::{TaskLifecycleError, TaskPayload},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_from_creation_to_deletion(service: TestService) {
    let created = service
        .create_task(TaskPayload::new("Write report", "2023-08-04"))
        .await
        .expect("creation should succeed");

    let active = service
        .get_all_tasks("")
        .await
        .expect("listing should succeed");
    assert_single_task_found(&active, created.id()).expect("created task should be listed");

    service
        .update_task(TaskPayload::new("Write final report", "2023-08-07"), created.id())
        .await
        .expect("update should succeed");

    service
        .update_task_status(created.id(), &TaskStatus::done())
        .await
        .expect("completion should succeed");

    let done = service
        .get_all_tasks("done")
        .await
        .expect("listing should succeed");
    assert_single_task_found(&done, created.id()).expect("completed task should be listed");
    let completed = done.first().expect("one completed task");
    assert_eq!(completed.title().as_str(), "Write final report");

    service
        .delete_task(created.id())
        .await
        .expect("deletion should succeed");
    let remaining = service
        .get_all_tasks("done")
        .await
        .expect("listing should succeed");
    assert!(remaining.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn weekend_and_weekday_tasks_store_distinct_titles(service: TestService) {
    let weekend = service
        .create_task(TaskPayload::new("Buy", "2023-08-05"))
        .await
        .expect("Saturday creation should succeed");
    let weekday = service
        .create_task(TaskPayload::new("Buy", "2023-08-04"))
        .await
        .expect("Friday creation should succeed");

    assert_eq!(
        weekend.title().as_str(),
        format!("{WEEKEND_TITLE_PREFIX}Buy")
    );
    assert_eq!(weekday.title().as_str(), "Buy");

    let active = service
        .get_all_tasks("active")
        .await
        .expect("listing should succeed");
    assert_eq!(active.len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_weekend_titles_collide_across_dates(service: TestService) {
    service
        .create_task(TaskPayload::new("Buy", "2023-08-05"))
        .await
        .expect("Saturday creation should succeed");

    // A different weekend date derives the same stored title.
    let duplicate = service
        .create_task(TaskPayload::new("Buy", "2023-08-06"))
        .await;

    assert!(matches!(
        duplicate,
        Err(TaskLifecycleError::DuplicateTitle(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_may_produce_title_colliding_with_another_task(service: TestService) {
    // Uniqueness is enforced at creation only; a full update can legally
    // collide with an existing title.
    let first = service
        .create_task(TaskPayload::new("Buy", "2023-08-04"))
        .await
        .expect("first creation should succeed");
    service
        .create_task(TaskPayload::new("Sell", "2023-08-04"))
        .await
        .expect("second creation should succeed");

    service
        .update_task(TaskPayload::new("Sell", "2023-08-04"), first.id())
        .await
        .expect("colliding update should be accepted");

    let active = service
        .get_all_tasks("active")
        .await
        .expect("listing should succeed");
    let selling = active
        .iter()
        .filter(|task| task.title().as_str() == "Sell")
        .count();
    assert_eq!(selling, 2);
}
