//! Shared test helpers for in-memory integration tests.

use rstest::fixture;
use std::sync::Arc;
use todolist::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskId},
    services::TaskLifecycleService,
};

/// Service type under test.
pub type TestService = TaskLifecycleService<InMemoryTaskRepository>;

/// Provides a fresh service over an empty in-memory repository.
#[fixture]
pub fn service() -> TestService {
    TaskLifecycleService::new(Arc::new(InMemoryTaskRepository::new()))
}

/// Asserts exactly one task is found with the expected ID.
///
/// # Errors
///
/// Returns an error if the result set does not contain exactly one task
/// matching `expected_id`.
pub fn assert_single_task_found(found: &[Task], expected_id: TaskId) -> Result<(), eyre::Report> {
    eyre::ensure!(
        found.len() == 1,
        "expected exactly one task, found {}",
        found.len()
    );
    let task = found
        .first()
        .ok_or_else(|| eyre::eyre!("expected at least one task"))?;
    eyre::ensure!(task.id() == expected_id, "task ID mismatch");
    Ok(())
}
