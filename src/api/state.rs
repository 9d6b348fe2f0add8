//! Application state for the workday calendar API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::WorkdayCalendar;

/// Shared application state.
///
/// Holds the calendar behind a read/write lock. A calculation clones the
/// calendar under the read lock and runs against that snapshot, so it always
/// sees one consistent window and holiday set while updates proceed.
#[derive(Clone)]
pub struct AppState {
    calendar: Arc<RwLock<WorkdayCalendar>>,
}

impl AppState {
    /// Creates a new application state around the given calendar.
    pub fn new(calendar: WorkdayCalendar) -> Self {
        Self {
            calendar: Arc::new(RwLock::new(calendar)),
        }
    }

    /// Returns the shared calendar.
    pub fn calendar(&self) -> &RwLock<WorkdayCalendar> {
        &self.calendar
    }
}
