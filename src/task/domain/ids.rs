//! Identifier types for the task domain.

use super::ParseTaskIdError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier for a persisted task record.
///
/// Identifiers are minted by the storage adapter when a task is inserted and
/// never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random task identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a task identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parses a task identifier from caller-supplied text.
    ///
    /// The transport boundary uses this to reject malformed identifiers
    /// before they reach the service.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTaskIdError::Empty`] when the value is empty after
    /// trimming, or [`ParseTaskIdError::Malformed`] when it is not a valid
    /// UUID.
    pub fn parse(value: &str) -> Result<Self, ParseTaskIdError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ParseTaskIdError::Empty);
        }
        Uuid::parse_str(trimmed)
            .map(Self)
            .map_err(|_| ParseTaskIdError::Malformed(value.to_owned()))
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for TaskId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
