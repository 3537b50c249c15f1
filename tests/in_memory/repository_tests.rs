//! Storage-port behaviour tests for the in-memory adapter.

use rstest::{fixture, rstest};
use todolist::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{ActiveDate, TaskDraft, TaskId, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};

#[fixture]
fn repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

fn draft(title: &str, date: &str) -> TaskDraft {
    let active_at = ActiveDate::parse(date).expect("valid test date");
    let title = TaskTitle::derive(title, active_at).expect("valid test title");
    TaskDraft::new(title, active_at, TaskStatus::active())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_assigns_identifier_and_find_by_id_round_trips(repo: InMemoryTaskRepository) {
    let new_task = draft("Buy", "2023-08-04");

    let id = repo.insert(&new_task).await.expect("insert should succeed");
    let found = repo
        .find_by_id(id)
        .await
        .expect("lookup should succeed")
        .expect("inserted task should exist");

    assert_eq!(found.id(), id);
    assert_eq!(found.title().as_str(), "Buy");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_id_returns_none_for_unknown_identifier(repo: InMemoryTaskRepository) {
    let found = repo
        .find_by_id(TaskId::new())
        .await
        .expect("lookup should succeed");
    assert!(found.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn replace_of_unknown_identifier_is_not_found(repo: InMemoryTaskRepository) {
    let result = repo.replace(TaskId::new(), &draft("Buy", "2023-08-04")).await;
    assert!(matches!(result, Err(TaskRepositoryError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn count_by_title_counts_exact_matches_only(repo: InMemoryTaskRepository) {
    repo.insert(&draft("Buy", "2023-08-04"))
        .await
        .expect("insert should succeed");
    repo.insert(&draft("Buy milk", "2023-08-04"))
        .await
        .expect("insert should succeed");

    let active_at = ActiveDate::parse("2023-08-04").expect("valid test date");
    let title = TaskTitle::derive("Buy", active_at).expect("valid test title");
    let count = repo
        .count_by_title(&title)
        .await
        .expect("count should succeed");

    assert_eq!(count, 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_status_preserves_insertion_order(repo: InMemoryTaskRepository) {
    let first = repo
        .insert(&draft("First", "2023-08-04"))
        .await
        .expect("insert should succeed");
    let second = repo
        .insert(&draft("Second", "2023-08-04"))
        .await
        .expect("insert should succeed");

    let listed = repo
        .find_by_status(&TaskStatus::active())
        .await
        .expect("listing should succeed");

    let ids: Vec<_> = listed.iter().map(todolist::task::domain::Task::id).collect();
    assert_eq!(ids, vec![first, second]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_of_unknown_identifier_is_not_found(repo: InMemoryTaskRepository) {
    let result = repo.delete(TaskId::new()).await;
    assert!(matches!(result, Err(TaskRepositoryError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn set_status_updates_only_the_status_field(repo: InMemoryTaskRepository) {
    let id = repo
        .insert(&draft("Buy", "2023-08-04"))
        .await
        .expect("insert should succeed");

    repo.set_status(id, &TaskStatus::done())
        .await
        .expect("status update should succeed");

    let found = repo
        .find_by_id(id)
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(found.status(), &TaskStatus::done());
    assert_eq!(found.title().as_str(), "Buy");
    assert_eq!(found.active_at().to_string(), "2023-08-04");
}
