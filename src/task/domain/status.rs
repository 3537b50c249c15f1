//! Task lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical status of a task that is still pending.
const STATUS_ACTIVE: &str = "active";

/// Canonical status of a completed task.
const STATUS_DONE: &str = "done";

/// Lifecycle status of a task.
///
/// The stored value is a free-form string: the service layer accepts any
/// status on a status update and only ever receives `"done"` from the
/// transport adapter in practice. The `{active, done}` domain is therefore
/// a convention, not an enforced invariant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskStatus(String);

impl TaskStatus {
    /// Creates a status from an arbitrary string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the `"active"` status assigned to newly created tasks.
    #[must_use]
    pub fn active() -> Self {
        Self(STATUS_ACTIVE.to_owned())
    }

    /// Returns the `"done"` status set when a task is completed.
    #[must_use]
    pub fn done() -> Self {
        Self(STATUS_DONE.to_owned())
    }

    /// Interprets a listing filter, defaulting the empty string to `"active"`.
    #[must_use]
    pub fn filter_or_active(filter: &str) -> Self {
        if filter.is_empty() {
            Self::active()
        } else {
            Self::new(filter)
        }
    }

    /// Returns the status as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaskStatus {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TaskStatus {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for TaskStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
