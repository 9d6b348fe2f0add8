//! Core data models for the workday calendar.
//!
//! This module contains the work window, holiday definitions, the calendar
//! aggregate that owns both, and the calculation result type.

mod calculation_result;
mod calendar;
mod holiday;
mod work_window;

pub use calculation_result::{CalculationResult, OffsetDirection};
pub use calendar::WorkdayCalendar;
pub use holiday::{Holiday, HolidayCalendar, HolidayLookup, HolidayOccurrence, HolidayRule};
pub use work_window::{WorkHourProvider, WorkHours, WorkWindow};
