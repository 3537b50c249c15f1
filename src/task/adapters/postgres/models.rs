//! Diesel row models for task persistence.

use super::schema::tasks;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Derived task title.
    pub title: String,
    /// Scheduled date string.
    pub active_at: String,
    /// Lifecycle status.
    pub status: String,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier minted by the adapter.
    pub id: uuid::Uuid,
    /// Derived task title.
    pub title: String,
    /// Scheduled date string.
    pub active_at: String,
    /// Lifecycle status.
    pub status: String,
}
