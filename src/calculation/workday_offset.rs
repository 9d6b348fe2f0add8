//! Workday offset calculation.
//!
//! This module adds or subtracts a signed, fractional number of workdays to a
//! timestamp. Time only elapses inside the daily work window and only on
//! working dates; everything else is skipped.
//!
//! One workday is always [`HOURS_PER_WORKDAY`] hours. The constant is NOT
//! derived from the configured window: with a 07:00 to 17:00 window a workday
//! is still eight hours of that ten hour day.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use crate::error::{CalendarError, CalendarResult};
use crate::models::{HolidayLookup, WorkWindow};

use super::boundary::{next_date, next_workday_start, previous_date, previous_workday_end};
use super::day_detection::is_non_working;

/// Hours in one workday.
pub const HOURS_PER_WORKDAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

const SECONDS_PER_HOUR: Decimal = Decimal::from_parts(3600, 0, 0, false, 0);
const SECONDS_PER_MINUTE: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Moves `start` by `workdays` workdays.
///
/// Non-negative counts move forward, negative counts move backward. Quantities
/// are tracked as exact decimal seconds; the final step lands on a whole minute
/// relative to the cursor, rounding toward the earlier minute in both
/// directions (floor going forward, ceiling of the distance going backward).
///
/// # Arguments
///
/// * `start` - The starting timestamp (naive local time)
/// * `workdays` - Signed, fractional number of workdays to move
/// * `window` - The daily work window
/// * `holidays` - The holiday lookup; weekends are always non-working
///
/// # Behavior
///
/// Going forward, a start outside working time snaps to the next window start
/// and keeps its original minute-of-hour as an offset. Going backward, a start
/// outside working time snaps to the end of the current or previous working
/// window. A zero count still applies the forward snap, so the result is not
/// necessarily `start`. The two directions snap differently, so moving forward
/// and back by the same amount need not return to `start`.
///
/// # Errors
///
/// - [`CalendarError::InvalidMagnitude`] if `workdays` is NaN, infinite or too
///   large to represent
/// - [`CalendarError::DateOutOfRange`] if the result leaves chrono's date range;
///   offsets too large to fit are rejected before any day is walked
/// - [`CalendarError::NoWorkingDay`] if the holidays leave no working day to land on
///
/// # Example
///
/// ```
/// use workday_calendar::calculation::calculate_workday;
/// use workday_calendar::models::{Holiday, HolidayCalendar, WorkWindow};
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let mut holidays = HolidayCalendar::new();
/// holidays.add(Holiday::recurring("Recurring Holiday", 5, 17).unwrap()).unwrap();
/// holidays
///     .add(Holiday::fixed("Fixed Holiday", NaiveDate::from_ymd_opt(2004, 5, 27).unwrap()))
///     .unwrap();
///
/// let format = "%Y-%m-%d %H:%M:%S";
/// let start = NaiveDateTime::parse_from_str("2004-05-24 18:05:00", format).unwrap();
/// let result = calculate_workday(start, -5.5, &WorkWindow::default(), &holidays).unwrap();
///
/// let expected = NaiveDateTime::parse_from_str("2004-05-14 12:00:00", format).unwrap();
/// assert_eq!(result, expected);
/// ```
pub fn calculate_workday<H>(
    start: NaiveDateTime,
    workdays: f64,
    window: &WorkWindow,
    holidays: &H,
) -> CalendarResult<NaiveDateTime>
where
    H: HolidayLookup + ?Sized,
{
    let seconds = workday_hours(workdays)? * SECONDS_PER_HOUR;
    let forward = workdays >= 0.0;
    ensure_reachable(start, seconds, window, forward)?;

    let result = if forward {
        add_workdays(start, seconds, window, holidays)?
    } else {
        subtract_workdays(start, seconds, window, holidays)?
    };

    debug!(
        start = %start,
        workdays,
        window = %window,
        result = %result,
        "Calculated workday offset"
    );
    Ok(result)
}

/// Converts a signed workday count into its absolute length in hours.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMagnitude`] if `workdays` is NaN, infinite
/// or too large to carry as whole seconds.
///
/// # Example
///
/// ```
/// use workday_calendar::calculation::workday_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(workday_hours(-5.5).unwrap(), Decimal::from(44));
/// assert!(workday_hours(f64::NAN).is_err());
/// ```
pub fn workday_hours(workdays: f64) -> CalendarResult<Decimal> {
    let invalid = || CalendarError::InvalidMagnitude { value: workdays };

    if !workdays.is_finite() {
        return Err(invalid());
    }

    Decimal::try_from(workdays.abs())
        .map_err(|_| invalid())?
        .checked_mul(HOURS_PER_WORKDAY)
        .filter(|hours| hours.checked_mul(SECONDS_PER_HOUR).is_some())
        .ok_or_else(invalid)
}

/// Fails when `seconds` of work cannot fit between `start` and the end of the
/// calendar in the direction of travel.
///
/// No calendar day holds more than one window span of work, so the offset
/// needs at least `seconds / span` further days.
fn ensure_reachable(
    start: NaiveDateTime,
    seconds: Decimal,
    window: &WorkWindow,
    forward: bool,
) -> CalendarResult<()> {
    let span = seconds_between(window.start(), window.end());
    let spare_days = if forward {
        (NaiveDate::MAX - start.date()).num_days()
    } else {
        (start.date() - NaiveDate::MIN).num_days()
    };

    let needed_days = (seconds / span).floor();
    if needed_days > Decimal::from(spare_days) {
        return Err(CalendarError::DateOutOfRange {
            message: format!(
                "{} hours of work do not fit {} from {}",
                seconds / SECONDS_PER_HOUR,
                if forward { "after" } else { "before" },
                start
            ),
        });
    }
    Ok(())
}

fn add_workdays<H>(
    start: NaiveDateTime,
    mut remaining: Decimal,
    window: &WorkWindow,
    holidays: &H,
) -> CalendarResult<NaiveDateTime>
where
    H: HolidayLookup + ?Sized,
{
    let mut cursor = snap_forward(start, window, holidays)?;

    while remaining > Decimal::ZERO {
        let available = seconds_between(cursor.time(), window.end());
        if remaining <= available {
            let minutes = (remaining / SECONDS_PER_MINUTE).floor();
            cursor = shift_minutes(cursor, to_minutes(minutes)?)?;
            break;
        }

        remaining -= available;
        let midnight = next_date(cursor.date())?.and_time(NaiveTime::MIN);
        cursor = next_workday_start(midnight, window, holidays)?;
    }

    Ok(cursor)
}

fn subtract_workdays<H>(
    start: NaiveDateTime,
    mut remaining: Decimal,
    window: &WorkWindow,
    holidays: &H,
) -> CalendarResult<NaiveDateTime>
where
    H: HolidayLookup + ?Sized,
{
    let mut cursor = snap_backward(start, window, holidays)?;

    while remaining > Decimal::ZERO {
        if is_non_working(cursor.date(), holidays) {
            cursor = previous_workday_end(previous_date(cursor.date())?, window, holidays)?;
        }

        let available = seconds_between(window.start(), cursor.time());
        if remaining <= available {
            let minutes = (remaining / SECONDS_PER_MINUTE).ceil();
            let landed = shift_minutes(cursor, -to_minutes(minutes)?)?;
            // A cursor carrying seconds can round past the window start
            cursor = landed.max(cursor.date().and_time(window.start()));
            break;
        }

        remaining -= available;
        cursor = previous_workday_end(previous_date(cursor.date())?, window, holidays)?;
    }

    Ok(cursor)
}

/// Moves `start` into working time ahead of it, keeping its minute-of-hour.
fn snap_forward<H>(
    start: NaiveDateTime,
    window: &WorkWindow,
    holidays: &H,
) -> CalendarResult<NaiveDateTime>
where
    H: HolidayLookup + ?Sized,
{
    let minute_offset = i64::from(start.minute());

    let snapped = if start.time() >= window.end() || is_non_working(start.date(), holidays) {
        next_workday_start(start, window, holidays)?
    } else if start.time() < window.start() {
        start.date().and_time(window.start())
    } else {
        return Ok(start);
    };

    shift_minutes(snapped, minute_offset)
}

/// Moves `start` onto the end of the working interval behind it.
fn snap_backward<H>(
    start: NaiveDateTime,
    window: &WorkWindow,
    holidays: &H,
) -> CalendarResult<NaiveDateTime>
where
    H: HolidayLookup + ?Sized,
{
    if start.time() >= window.end() {
        Ok(start.date().and_time(window.end()))
    } else if start.time() < window.start() {
        previous_workday_end(previous_date(start.date())?, window, holidays)
    } else {
        Ok(start)
    }
}

fn seconds_between(from: NaiveTime, to: NaiveTime) -> Decimal {
    Decimal::from((to - from).num_seconds())
}

fn to_minutes(minutes: Decimal) -> CalendarResult<i64> {
    minutes.to_i64().ok_or_else(|| CalendarError::DateOutOfRange {
        message: format!("{} minutes does not fit a timestamp offset", minutes),
    })
}

fn shift_minutes(cursor: NaiveDateTime, minutes: i64) -> CalendarResult<NaiveDateTime> {
    Duration::try_minutes(minutes)
        .and_then(|delta| cursor.checked_add_signed(delta))
        .ok_or_else(|| CalendarError::DateOutOfRange {
            message: format!("cannot move {} by {} minutes", cursor, minutes),
        })
}
