//! Domain model for dated-task lifecycle management.
//!
//! The task domain models validated titles and calendar dates, weekend title
//! derivation, and the task aggregate itself while keeping all infrastructure
//! concerns outside of the domain boundary.

mod date;
mod error;
mod ids;
mod status;
mod task;
mod title;

pub use date::ActiveDate;
pub use error::{ParseTaskIdError, TaskDomainError};
pub use ids::TaskId;
pub use status::TaskStatus;
pub use task::{Task, TaskDraft};
pub use title::{TaskTitle, WEEKEND_TITLE_PREFIX};
