//! The workday calendar aggregate.
//!
//! [`WorkdayCalendar`] owns the active work window and holiday definitions and
//! runs workday calculations against a snapshot of both.

use std::time::Instant;

use chrono::{NaiveDateTime, NaiveTime};
use tracing::info;
use uuid::Uuid;

use crate::calculation::{calculate_workday, workday_hours};
use crate::error::CalendarResult;

use super::{
    CalculationResult, Holiday, HolidayCalendar, HolidayLookup, HolidayOccurrence, HolidayRule,
    OffsetDirection, WorkHourProvider, WorkWindow,
};

/// Work hours and holidays for one organisation.
///
/// # Example
///
/// ```
/// use workday_calendar::models::WorkdayCalendar;
/// use chrono::NaiveDateTime;
///
/// let calendar = WorkdayCalendar::default();
/// let start = NaiveDateTime::parse_from_str("2004-05-24 04:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let calculation = calendar.calculate(start, 0.5).unwrap();
/// assert_eq!(calculation.result.to_string(), "2004-05-24 12:00:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkdayCalendar {
    work_window: WorkWindow,
    holidays: HolidayCalendar,
}

impl WorkdayCalendar {
    /// Creates a calendar from a validated window and a holiday set.
    pub fn new(work_window: WorkWindow, holidays: HolidayCalendar) -> Self {
        Self {
            work_window,
            holidays,
        }
    }

    /// Returns the holiday definitions.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    /// Replaces the work window.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidWorkHours`](crate::error::CalendarError::InvalidWorkHours)
    /// if `start >= end`; the active window is left unchanged.
    pub fn set_work_hours(&mut self, start: NaiveTime, end: NaiveTime) -> CalendarResult<()> {
        self.work_window = WorkWindow::new(start, end)?;
        info!(work_window = %self.work_window, "Work hours updated");
        Ok(())
    }

    /// Adds a holiday definition. See [`HolidayCalendar::add`].
    pub fn add_holiday(&mut self, holiday: Holiday) -> CalendarResult<()> {
        let rule = holiday.rule;
        self.holidays.add(holiday)?;
        info!(rule = %rule, "Holiday added");
        Ok(())
    }

    /// Removes a holiday definition. See [`HolidayCalendar::remove`].
    pub fn remove_holiday(&mut self, rule: &HolidayRule) -> CalendarResult<Holiday> {
        let removed = self.holidays.remove(rule)?;
        info!(rule = %rule, name = %removed.name, "Holiday removed");
        Ok(removed)
    }

    /// Returns the holidays falling in `year`, sorted by date.
    pub fn holidays_for_year(&self, year: i32) -> Vec<HolidayOccurrence> {
        self.holidays.holidays_for_year(year)
    }

    /// Moves `start` by `workdays` workdays.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`calculate_workday`].
    pub fn calculate(
        &self,
        start: NaiveDateTime,
        workdays: f64,
    ) -> CalendarResult<CalculationResult> {
        let started = Instant::now();
        let window = self.work_window;

        let result = calculate_workday(start, workdays, &window, &self.holidays)?;

        let hours = workday_hours(workdays)?;

        Ok(CalculationResult {
            calculation_id: Uuid::new_v4(),
            timestamp: chrono::Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            start,
            workdays,
            direction: OffsetDirection::of(workdays),
            hours,
            work_window: window,
            result,
            duration_us: started.elapsed().as_micros() as u64,
        })
    }
}

impl Default for WorkdayCalendar {
    /// The stock 08:00 to 16:00 window with the stock holidays.
    fn default() -> Self {
        Self::new(WorkWindow::default(), HolidayCalendar::with_defaults())
    }
}

impl WorkHourProvider for WorkdayCalendar {
    fn work_window(&self) -> WorkWindow {
        self.work_window
    }
}

impl HolidayLookup for WorkdayCalendar {
    fn is_holiday(&self, date: chrono::NaiveDate) -> bool {
        self.holidays.is_holiday(date)
    }
}
