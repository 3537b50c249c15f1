//! Validated calendar date for task scheduling.

use super::TaskDomainError;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date layout accepted for `activeAt` values.
const ACTIVE_AT_FORMAT: &str = "%Y-%m-%d";

/// Validated `activeAt` calendar date.
///
/// Wraps a real calendar date parsed strictly from `YYYY-MM-DD`. Values such
/// as `2023-08-32` are rejected at construction and never reach storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveDate(NaiveDate);

impl ActiveDate {
    /// Parses an `activeAt` value from its wire form.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidActiveAt`] when the value does not
    /// match `YYYY-MM-DD` or encodes an impossible calendar date.
    pub fn parse(value: &str) -> Result<Self, TaskDomainError> {
        NaiveDate::parse_from_str(value, ACTIVE_AT_FORMAT)
            .map(Self)
            .map_err(|_| TaskDomainError::InvalidActiveAt(value.to_owned()))
    }

    /// Creates an active date from an already-validated calendar date.
    #[must_use]
    pub const fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns `true` when the date falls on a Saturday or Sunday.
    #[must_use]
    pub fn is_weekend(self) -> bool {
        matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Returns the wrapped calendar date.
    #[must_use]
    pub const fn into_inner(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for ActiveDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ACTIVE_AT_FORMAT))
    }
}
