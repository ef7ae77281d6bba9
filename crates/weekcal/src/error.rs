//! Error types for weekcal operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// A year, month, day or week number outside its structural range.
    #[error("Invalid component: {0}")]
    InvalidComponent(String),

    /// A month/day pair that cannot form a date in any year.
    #[error("Invalid anchor: {0}")]
    InvalidAnchor(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),
}

pub type Result<T> = std::result::Result<T, CalendarError>;
