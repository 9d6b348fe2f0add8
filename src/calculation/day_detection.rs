//! Day detection logic.
//!
//! This module classifies calendar dates as working days, weekends or holidays.
//! It composes the weekend rule with a [`HolidayLookup`] into the single
//! non-working predicate the workday arithmetic runs on.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::HolidayLookup;

/// Represents the kind of calendar day for workday arithmetic.
///
/// # Example
///
/// ```
/// use workday_calendar::calculation::DayType;
///
/// let day_type = DayType::Weekend;
/// assert_eq!(format!("{:?}", day_type), "Weekend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday that is not a holiday.
    Workday,
    /// Saturday or Sunday.
    Weekend,
    /// A weekday matched by a fixed or recurring holiday.
    Holiday,
}

impl DayType {
    /// Returns true for weekends and holidays.
    pub fn is_non_working(self) -> bool {
        !matches!(self, DayType::Workday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Workday => write!(f, "Workday"),
            DayType::Weekend => write!(f, "Weekend"),
            DayType::Holiday => write!(f, "Holiday"),
        }
    }
}

/// Determines the day type for a given date.
///
/// Weekends are reported as [`DayType::Weekend`] even when a holiday falls on
/// them; the distinction does not matter to the arithmetic, both are skipped.
///
/// # Example
///
/// ```
/// use workday_calendar::calculation::{get_day_type, DayType};
/// use workday_calendar::models::{Holiday, HolidayCalendar};
/// use chrono::NaiveDate;
///
/// let mut holidays = HolidayCalendar::new();
/// holidays.add(Holiday::recurring("Constitution Day", 5, 17).unwrap()).unwrap();
///
/// // 2004-05-17 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2004, 5, 17).unwrap();
/// assert_eq!(get_day_type(monday, &holidays), DayType::Holiday);
///
/// // 2004-05-22 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2004, 5, 22).unwrap();
/// assert_eq!(get_day_type(saturday, &holidays), DayType::Weekend);
///
/// let tuesday = NaiveDate::from_ymd_opt(2004, 5, 18).unwrap();
/// assert_eq!(get_day_type(tuesday, &holidays), DayType::Workday);
/// ```
pub fn get_day_type<H>(date: NaiveDate, holidays: &H) -> DayType
where
    H: HolidayLookup + ?Sized,
{
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => DayType::Weekend,
        _ if holidays.is_holiday(date) => DayType::Holiday,
        _ => DayType::Workday,
    }
}

/// Returns true if `date` is a weekend or a holiday.
pub fn is_non_working<H>(date: NaiveDate, holidays: &H) -> bool
where
    H: HolidayLookup + ?Sized,
{
    get_day_type(date, holidays).is_non_working()
}
