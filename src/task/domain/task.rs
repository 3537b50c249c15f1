//! Task aggregate root and pre-insert draft.

use super::{ActiveDate, TaskId, TaskStatus, TaskTitle};
use serde::{Deserialize, Serialize};

/// Persisted task record.
///
/// The identifier is assigned by the storage adapter at insert time and is
/// immutable thereafter; a full update replaces the title and date but never
/// the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    active_at: ActiveDate,
    status: TaskStatus,
}

/// Task shape before an identifier has been assigned.
///
/// Drafts carry everything the storage collaborator needs for an insert or a
/// full replacement: the derived title, the validated date, and the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: TaskTitle,
    active_at: ActiveDate,
    status: TaskStatus,
}

impl TaskDraft {
    /// Creates a draft from validated parts.
    #[must_use]
    pub const fn new(title: TaskTitle, active_at: ActiveDate, status: TaskStatus) -> Self {
        Self {
            title,
            active_at,
            status,
        }
    }

    /// Returns the derived title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the scheduled date.
    #[must_use]
    pub const fn active_at(&self) -> ActiveDate {
        self.active_at
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        &self.status
    }

    /// Promotes the draft into a full task with its assigned identifier.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            active_at: self.active_at,
            status: self.status,
        }
    }
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub const fn from_persisted(
        id: TaskId,
        title: TaskTitle,
        active_at: ActiveDate,
        status: TaskStatus,
    ) -> Self {
        Self {
            id,
            title,
            active_at,
            status,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the derived title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the scheduled date.
    #[must_use]
    pub const fn active_at(&self) -> ActiveDate {
        self.active_at
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        &self.status
    }
}
