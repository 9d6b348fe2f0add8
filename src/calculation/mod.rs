//! Calculation logic for the workday calendar.
//!
//! This module contains the workday arithmetic engine: day detection for
//! weekends and holidays, navigation between working-day boundaries, and the
//! add/subtract paths that move a timestamp by a fractional number of workdays.
//!
//! Every function here is pure. The work window and the holiday lookup are
//! passed in explicitly and only read.

mod boundary;
mod day_detection;
mod workday_offset;

pub use boundary::{MAX_NON_WORKING_RUN, next_workday_start, previous_workday_end};
pub use day_detection::{DayType, get_day_type, is_non_working};
pub use workday_offset::{HOURS_PER_WORKDAY, calculate_workday, workday_hours};
