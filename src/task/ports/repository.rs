//! Repository port for task persistence, lookup, and deletion.

use crate::task::domain::{Task, TaskDraft, TaskId, TaskStatus, TaskTitle};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations operate over a single logical collection of task records
/// keyed by an opaque identifier and serialize their own internal operations
/// under concurrent access.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and returns the identifier assigned to it.
    async fn insert(&self, draft: &TaskDraft) -> TaskRepositoryResult<TaskId>;

    /// Replaces the stored title, date, and status of an existing task.
    ///
    /// The identifier itself is never part of the replacement payload.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no record matches the
    /// identifier at replacement time.
    async fn replace(&self, id: TaskId, draft: &TaskDraft) -> TaskRepositoryResult<()>;

    /// Partially updates a task, setting only its status field.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no record matches.
    async fn set_status(&self, id: TaskId, status: &TaskStatus) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all tasks with the given status, in storage order.
    async fn find_by_status(&self, status: &TaskStatus) -> TaskRepositoryResult<Vec<Task>>;

    /// Counts tasks whose stored title equals the given derived title.
    async fn count_by_title(&self, title: &TaskTitle) -> TaskRepositoryResult<u64>;

    /// Deletes a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when zero records were
    /// deleted.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
