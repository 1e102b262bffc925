//! Error types for the calendar crate.

use chrono::NaiveDateTime;

/// Errors that can occur during calendar normalization.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The date lies strictly before the representable epoch (year 1) and is
    /// excluded from synchronization entirely.
    #[error("date {0} predates the representable epoch")]
    UnrepresentableDate(NaiveDateTime),
}

/// Convenience alias for calendar results.
pub type CalendarResult<T> = Result<T, CalendarError>;
