//! Service layer for the dated-task lifecycle.
//!
//! Provides [`TaskLifecycleService`] which validates inbound task data,
//! derives the stored title, enforces uniqueness and existence invariants,
//! and orchestrates calls to the storage collaborator.

use crate::task::{
    domain::{ActiveDate, Task, TaskDomainError, TaskDraft, TaskId, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Inbound payload shared by task creation and full update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPayload {
    title: String,
    active_at: String,
}

impl TaskPayload {
    /// Creates a payload from wire-form task fields.
    #[must_use]
    pub fn new(title: impl Into<String>, active_at: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            active_at: active_at.into(),
        }
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// A task with the same derived title already exists.
    #[error("a task with the same title already exists: {0}")]
    DuplicateTitle(String),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Stateless apart from the repository reference; safe to invoke from any
/// number of concurrent callers.
#[derive(Clone)]
pub struct TaskLifecycleService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> TaskLifecycleService<R>
where
    R: TaskRepository,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a new task with `"active"` status.
    ///
    /// The stored title is derived from the payload: weekend dates prefix
    /// the title with the weekend marker. Creation is rejected when another
    /// task already holds the derived title.
    ///
    /// The uniqueness check is check-then-insert without an atomic
    /// guarantee: two racing creates with the same derived title can both
    /// pass the count and both insert.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when validation fails,
    /// [`TaskLifecycleError::DuplicateTitle`] when the derived title is
    /// taken, or [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn create_task(&self, payload: TaskPayload) -> TaskLifecycleResult<Task> {
        let (title, active_at) = validated_fields(payload)?;
        let draft = TaskDraft::new(title, active_at, TaskStatus::active());

        let existing = self.repository.count_by_title(draft.title()).await?;
        if existing > 0 {
            return Err(TaskLifecycleError::DuplicateTitle(
                draft.title().as_str().to_owned(),
            ));
        }

        let id = self.repository.insert(&draft).await?;
        debug!(%id, "create task");
        Ok(draft.into_task(id))
    }

    /// Replaces the title and date of an existing task, preserving its
    /// status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when validation fails, or
    /// [`TaskLifecycleError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] when the task is absent either at
    /// fetch time or when the replacement matches zero records.
    pub async fn update_task(&self, payload: TaskPayload, id: TaskId) -> TaskLifecycleResult<()> {
        let (title, active_at) = validated_fields(payload)?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(id))?;

        let draft = TaskDraft::new(title, active_at, current.status().clone());
        self.repository.replace(id, &draft).await?;
        debug!(%id, "update task");
        Ok(())
    }

    /// Sets only the status field of an existing task.
    ///
    /// The status value is passed through without validation; the transport
    /// adapter only ever issues `"done"` in practice.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] when no record matches.
    pub async fn update_task_status(
        &self,
        id: TaskId,
        status: &TaskStatus,
    ) -> TaskLifecycleResult<()> {
        self.repository.set_status(id, status).await?;
        debug!(%id, %status, "update task status");
        Ok(())
    }

    /// Returns all tasks matching the status filter.
    ///
    /// An empty filter defaults to `"active"`. Absence of matches yields an
    /// empty vector, never an error. Ordering is whatever the storage
    /// collaborator returns.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn get_all_tasks(&self, status_filter: &str) -> TaskLifecycleResult<Vec<Task>> {
        let status = TaskStatus::filter_or_active(status_filter);
        let tasks = self.repository.find_by_status(&status).await?;
        debug!(%status, count = tasks.len(), "get all tasks");
        Ok(tasks)
    }

    /// Permanently deletes a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] when zero records were deleted.
    pub async fn delete_task(&self, id: TaskId) -> TaskLifecycleResult<()> {
        self.repository.delete(id).await?;
        debug!(%id, "delete task");
        Ok(())
    }
}

/// Validates the payload and derives the stored title.
fn validated_fields(payload: TaskPayload) -> Result<(TaskTitle, ActiveDate), TaskDomainError> {
    let TaskPayload { title, active_at } = payload;
    let active_at = ActiveDate::parse(&active_at)?;
    let title = TaskTitle::derive(title, active_at)?;
    Ok((title, active_at))
}
