//! Boundary navigation between working days.
//!
//! These helpers move a cursor to the start of the next working day or the end
//! of the previous one, skipping weekends and holidays.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{CalendarError, CalendarResult};
use crate::models::{HolidayLookup, WorkWindow};

use super::day_detection::is_non_working;

/// Longest run of consecutive non-working dates a scan will step over before
/// failing with [`CalendarError::NoWorkingDay`].
pub const MAX_NON_WORKING_RUN: u32 = 400;

/// Finds the start of the next valid workday.
///
/// - If `from` falls on a non-working date, or at/after `window.end`, the
///   result is `window.start` on the first working date after `from`.
/// - If `from` is before `window.start` on a working date, the result is
///   `window.start` on that same date.
/// - Otherwise `from` is already inside a working window and is returned as is.
///
/// # Example
///
/// ```
/// use workday_calendar::calculation::next_workday_start;
/// use workday_calendar::models::{HolidayCalendar, WorkWindow};
/// use chrono::NaiveDateTime;
///
/// let window = WorkWindow::default();
/// let holidays = HolidayCalendar::new();
///
/// // Friday evening rolls over the weekend
/// let friday = NaiveDateTime::parse_from_str("2004-05-21 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let monday = NaiveDateTime::parse_from_str("2004-05-24 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(next_workday_start(friday, &window, &holidays).unwrap(), monday);
/// ```
pub fn next_workday_start<H>(
    from: NaiveDateTime,
    window: &WorkWindow,
    holidays: &H,
) -> CalendarResult<NaiveDateTime>
where
    H: HolidayLookup + ?Sized,
{
    let date = from.date();
    if from.time() >= window.end() || is_non_working(date, holidays) {
        let next = first_working_on_or_after(next_date(date)?, holidays)?;
        return Ok(next.and_time(window.start()));
    }
    if from.time() < window.start() {
        return Ok(date.and_time(window.start()));
    }
    Ok(from)
}

/// Finds the end of the last valid workday on or before `date`.
///
/// Steps back one calendar day at a time while the date is non-working and
/// returns `window.end` on the first working date found.
///
/// # Example
///
/// ```
/// use workday_calendar::calculation::previous_workday_end;
/// use workday_calendar::models::{HolidayCalendar, WorkWindow};
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let window = WorkWindow::default();
/// let holidays = HolidayCalendar::new();
///
/// // Sunday steps back to Friday
/// let sunday = NaiveDate::from_ymd_opt(2004, 5, 23).unwrap();
/// let friday = NaiveDateTime::parse_from_str("2004-05-21 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(previous_workday_end(sunday, &window, &holidays).unwrap(), friday);
/// ```
pub fn previous_workday_end<H>(
    date: NaiveDate,
    window: &WorkWindow,
    holidays: &H,
) -> CalendarResult<NaiveDateTime>
where
    H: HolidayLookup + ?Sized,
{
    let working = last_working_on_or_before(date, holidays)?;
    Ok(working.and_time(window.end()))
}

fn first_working_on_or_after<H>(from: NaiveDate, holidays: &H) -> CalendarResult<NaiveDate>
where
    H: HolidayLookup + ?Sized,
{
    let mut date = from;
    for _ in 0..MAX_NON_WORKING_RUN {
        if !is_non_working(date, holidays) {
            return Ok(date);
        }
        date = next_date(date)?;
    }
    Err(CalendarError::NoWorkingDay { from })
}

fn last_working_on_or_before<H>(from: NaiveDate, holidays: &H) -> CalendarResult<NaiveDate>
where
    H: HolidayLookup + ?Sized,
{
    let mut date = from;
    for _ in 0..MAX_NON_WORKING_RUN {
        if !is_non_working(date, holidays) {
            return Ok(date);
        }
        date = previous_date(date)?;
    }
    Err(CalendarError::NoWorkingDay { from })
}

/// Returns the calendar day after `date`.
pub(crate) fn next_date(date: NaiveDate) -> CalendarResult<NaiveDate> {
    date.succ_opt().ok_or_else(|| CalendarError::DateOutOfRange {
        message: format!("no date after {}", date),
    })
}

/// Returns the calendar day before `date`.
pub(crate) fn previous_date(date: NaiveDate) -> CalendarResult<NaiveDate> {
    date.pred_opt().ok_or_else(|| CalendarError::DateOutOfRange {
        message: format!("no date before {}", date),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Holiday, HolidayCalendar};

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn test_holidays() -> HolidayCalendar {
        let mut calendar = HolidayCalendar::new();
        calendar
            .add(Holiday::fixed("Fixed Holiday", make_date("2004-05-27")))
            .unwrap();
        calendar
            .add(Holiday::recurring("Recurring Holiday", 5, 17).unwrap())
            .unwrap();
        calendar
    }

    // ==========================================================================
    // next_workday_start
    // ==========================================================================
    #[test]
    fn test_next_start_before_window_same_day() {
        let window = WorkWindow::default();
        let from = make_datetime("2004-05-24", "04:00:00");
        assert_eq!(
            next_workday_start(from, &window, &test_holidays()).unwrap(),
            make_datetime("2004-05-24", "08:00:00")
        );
    }

    #[test]
    fn test_next_start_after_window_moves_to_next_day() {
        let window = WorkWindow::default();
        let from = make_datetime("2004-05-24", "16:00:00");
        assert_eq!(
            next_workday_start(from, &window, &test_holidays()).unwrap(),
            make_datetime("2004-05-25", "08:00:00")
        );
    }

    #[test]
    fn test_next_start_skips_fixed_holiday() {
        let window = WorkWindow::default();
        // Wednesday evening; Thursday 2004-05-27 is a fixed holiday
        let from = make_datetime("2004-05-26", "18:00:00");
        assert_eq!(
            next_workday_start(from, &window, &test_holidays()).unwrap(),
            make_datetime("2004-05-28", "08:00:00")
        );
    }

    #[test]
    fn test_next_start_skips_weekend_and_recurring_holiday() {
        let window = WorkWindow::default();
        // Friday evening; Monday 2004-05-17 is a recurring holiday
        let from = make_datetime("2004-05-14", "16:30:00");
        assert_eq!(
            next_workday_start(from, &window, &test_holidays()).unwrap(),
            make_datetime("2004-05-18", "08:00:00")
        );
    }

    #[test]
    fn test_next_start_from_non_working_morning_moves_forward() {
        let window = WorkWindow::default();
        let from = make_datetime("2004-05-22", "06:00:00");
        assert_eq!(
            next_workday_start(from, &window, &test_holidays()).unwrap(),
            make_datetime("2004-05-24", "08:00:00")
        );
    }

    #[test]
    fn test_next_start_inside_window_is_unchanged() {
        let window = WorkWindow::default();
        let from = make_datetime("2004-05-24", "10:30:00");
        assert_eq!(
            next_workday_start(from, &window, &test_holidays()).unwrap(),
            from
        );
    }

    // ==========================================================================
    // previous_workday_end
    // ==========================================================================
    #[test]
    fn test_previous_end_on_working_day() {
        let window = WorkWindow::default();
        assert_eq!(
            previous_workday_end(make_date("2004-05-24"), &window, &test_holidays()).unwrap(),
            make_datetime("2004-05-24", "16:00:00")
        );
    }

    #[test]
    fn test_previous_end_skips_holiday_and_weekend() {
        let window = WorkWindow::default();
        // Monday 2004-05-17 is a holiday, the weekend before it too
        assert_eq!(
            previous_workday_end(make_date("2004-05-17"), &window, &test_holidays()).unwrap(),
            make_datetime("2004-05-14", "16:00:00")
        );
    }

    #[test]
    fn test_previous_end_uses_configured_window() {
        let window = WorkWindow::new(
            chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            chrono::NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
        )
        .unwrap();
        assert_eq!(
            previous_workday_end(make_date("2004-05-23"), &window, &test_holidays()).unwrap(),
            make_datetime("2004-05-21", "17:30:00")
        );
    }

    // ==========================================================================
    // Scan limits
    // ==========================================================================
    #[test]
    fn test_scan_fails_when_every_day_is_a_holiday() {
        let window = WorkWindow::default();
        let always = |_: NaiveDate| true;
        let result = next_workday_start(make_datetime("2004-05-24", "09:00:00"), &window, &always);
        match result {
            Err(CalendarError::NoWorkingDay { from }) => assert_eq!(from, make_date("2004-05-25")),
            _ => panic!("Expected NoWorkingDay error"),
        }

        let result = previous_workday_end(make_date("2004-05-24"), &window, &always);
        assert!(matches!(result, Err(CalendarError::NoWorkingDay { .. })));
    }

    #[test]
    fn test_stepping_past_max_date_fails() {
        assert!(matches!(
            next_date(NaiveDate::MAX),
            Err(CalendarError::DateOutOfRange { .. })
        ));
        assert!(matches!(
            previous_date(NaiveDate::MIN),
            Err(CalendarError::DateOutOfRange { .. })
        ));
    }
}
