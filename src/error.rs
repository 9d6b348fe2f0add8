//! Error types for the workday calendar.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while configuring the calendar
//! or running workday arithmetic.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// The main error type for the workday calendar.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use workday_calendar::error::CalendarError;
///
/// let error = CalendarError::ConfigNotFound {
///     path: "/missing/work_hours.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/work_hours.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum CalendarError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The work window does not start strictly before it ends.
    #[error("Invalid work hours: start {start} must be before end {end}")]
    InvalidWorkHours {
        /// The rejected window start.
        start: NaiveTime,
        /// The rejected window end.
        end: NaiveTime,
    },

    /// A holiday definition could not be constructed.
    #[error("Invalid holiday: {message}")]
    InvalidHoliday {
        /// A description of what made the holiday invalid.
        message: String,
    },

    /// A holiday with the same rule is already defined.
    #[error("Holiday already exists: {rule}")]
    DuplicateHoliday {
        /// The rule that collided with an existing definition.
        rule: String,
    },

    /// No holiday matches the rule that was asked to be removed.
    #[error("Holiday not found: {rule}")]
    HolidayNotFound {
        /// The rule that was not found.
        rule: String,
    },

    /// The workday count cannot be used for arithmetic (NaN, infinite or too large).
    #[error("Invalid magnitude: {value} workdays")]
    InvalidMagnitude {
        /// The rejected workday count.
        value: f64,
    },

    /// Calendar arithmetic stepped outside the representable date range.
    #[error("Date out of range: {message}")]
    DateOutOfRange {
        /// A description of the overflowing step.
        message: String,
    },

    /// The day-skipping scan never reached a working date.
    #[error("No working day found within scan horizon starting from {from}")]
    NoWorkingDay {
        /// The date the scan started from.
        from: NaiveDate,
    },
}

/// A type alias for Results that return CalendarError.
pub type CalendarResult<T> = Result<T, CalendarError>;
