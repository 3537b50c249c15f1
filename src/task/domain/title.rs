//! Validated task title with weekend derivation.

use super::{ActiveDate, TaskDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker prepended to titles of tasks scheduled on a weekend.
pub const WEEKEND_TITLE_PREFIX: &str = "ВЫХОДНОЙ - ";

/// Maximum stored title length in bytes, applied after derivation.
const MAX_TITLE_LENGTH: usize = 200;

/// Derived, length-validated task title.
///
/// A `TaskTitle` always holds the final stored form: when the task's
/// `activeAt` date falls on a weekend the original title is prefixed with
/// [`WEEKEND_TITLE_PREFIX`], otherwise it is kept unchanged. The 200-byte
/// limit applies to this derived form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Derives the stored title for a task scheduled on the given date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TitleTooLong`] when the derived title
    /// exceeds 200 bytes.
    pub fn derive(raw: impl Into<String>, active_at: ActiveDate) -> Result<Self, TaskDomainError> {
        let raw = raw.into();
        let derived = if active_at.is_weekend() {
            format!("{WEEKEND_TITLE_PREFIX}{raw}")
        } else {
            raw
        };

        if derived.len() > MAX_TITLE_LENGTH {
            return Err(TaskDomainError::TitleTooLong);
        }

        Ok(Self(derived))
    }

    /// Reconstructs a title from its persisted form.
    ///
    /// Persisted titles were validated when first derived, so no length
    /// check is re-applied here.
    #[must_use]
    pub fn from_stored(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
