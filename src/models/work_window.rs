//! Daily work window model.
//!
//! This module defines the [`WorkWindow`] type describing the time-of-day range
//! that counts as working hours, and the [`WorkHourProvider`] capability the
//! calculation engine reads it through.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

/// The daily `[start, end)` time-of-day range considered working hours.
///
/// The window always satisfies `start < end`; the only way to build one is
/// through [`WorkWindow::new`], which rejects anything else. Deserialization
/// goes through the same check.
///
/// # Example
///
/// ```
/// use workday_calendar::models::WorkWindow;
/// use chrono::NaiveTime;
///
/// let window = WorkWindow::new(
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(window.span_minutes(), 510);
///
/// let inverted = WorkWindow::new(
///     NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
/// );
/// assert!(inverted.is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WorkHours", into = "WorkHours")]
pub struct WorkWindow {
    start: NaiveTime,
    end: NaiveTime,
}

/// Unvalidated start/end pair as it appears in configuration and requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkHours {
    /// The start of the working day.
    pub start: NaiveTime,
    /// The end of the working day.
    pub end: NaiveTime,
}

impl WorkWindow {
    /// Creates a work window, rejecting `start >= end`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWorkHours`] when the window is empty
    /// or inverted.
    pub fn new(start: NaiveTime, end: NaiveTime) -> CalendarResult<Self> {
        if start >= end {
            return Err(CalendarError::InvalidWorkHours { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the start of the working day.
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// Returns the end of the working day.
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Returns the wall-clock length of the window in whole minutes.
    ///
    /// This is informational only. Workday arithmetic uses a fixed eight hour
    /// workday regardless of the window length.
    pub fn span_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Returns true if `time` lies within `[start, end)`.
    pub fn contains(&self, time: NaiveTime) -> bool {
        time >= self.start && time < self.end
    }
}

impl Default for WorkWindow {
    /// The stock 08:00 to 16:00 working day.
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(8, 0, 0).expect("Valid start time"),
            end: NaiveTime::from_hms_opt(16, 0, 0).expect("Valid end time"),
        }
    }
}

impl TryFrom<WorkHours> for WorkWindow {
    type Error = CalendarError;

    fn try_from(hours: WorkHours) -> Result<Self, Self::Error> {
        WorkWindow::new(hours.start, hours.end)
    }
}

impl From<WorkWindow> for WorkHours {
    fn from(window: WorkWindow) -> Self {
        WorkHours {
            start: window.start,
            end: window.end,
        }
    }
}

impl std::fmt::Display for WorkWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Source of the active daily work window.
pub trait WorkHourProvider {
    /// Returns a snapshot of the active work window.
    fn work_window(&self) -> WorkWindow;
}

impl WorkHourProvider for WorkWindow {
    fn work_window(&self) -> WorkWindow {
        *self
    }
}
