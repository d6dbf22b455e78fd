//! Error types for the rinkcal pipeline.

use thiserror::Error;

/// Errors that can occur while turning a schedule into a calendar file.
///
/// Transport failures have no variant on purpose: they are caught and
/// logged at the fetch site and end the run without an error.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Schedule parse error: {0}")]
    Parse(String),

    #[error("Malformed start time {value:?}: {source}")]
    TimestampFormat {
        value: String,
        source: chrono::ParseError,
    },
}

/// Result type alias for rinkcal operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
