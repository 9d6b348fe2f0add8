//! Holiday models and the holiday calendar.
//!
//! A holiday is either fixed to one calendar date or recurs every year on the
//! same month and day. The [`HolidayCalendar`] holds the active definitions and
//! answers the single question the calculation engine asks of it: is this date
//! a holiday?

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

/// How a holiday maps onto calendar dates.
///
/// # Example
///
/// ```
/// use workday_calendar::models::HolidayRule;
/// use chrono::NaiveDate;
///
/// let constitution_day = HolidayRule::recurring(5, 17).unwrap();
/// assert!(constitution_day.matches(NaiveDate::from_ymd_opt(1999, 5, 17).unwrap()));
///
/// let special = HolidayRule::Fixed {
///     date: NaiveDate::from_ymd_opt(2004, 5, 27).unwrap(),
/// };
/// assert!(!special.matches(NaiveDate::from_ymd_opt(2005, 5, 27).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HolidayRule {
    /// A single non-working date in one specific year.
    Fixed {
        /// The exact holiday date.
        date: NaiveDate,
    },
    /// A non-working date recurring every year on the same month and day.
    Recurring {
        /// Month of the year (1-12).
        month: u32,
        /// Day of the month (1-31).
        day: u32,
    },
}

impl HolidayRule {
    /// Creates a recurring rule, rejecting month/day pairs that never occur.
    ///
    /// February 29 is accepted; it only projects onto leap years.
    pub fn recurring(month: u32, day: u32) -> CalendarResult<Self> {
        // 2000 is a leap year, so every month/day that exists in any year exists here
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(CalendarError::InvalidHoliday {
                message: format!("{:02}-{:02} is not a day of the year", month, day),
            });
        }
        Ok(HolidayRule::Recurring { month, day })
    }

    /// Returns true if `date` is covered by this rule.
    pub fn matches(&self, date: NaiveDate) -> bool {
        match *self {
            HolidayRule::Fixed { date: fixed } => fixed == date,
            HolidayRule::Recurring { month, day } => date.month() == month && date.day() == day,
        }
    }

    /// Projects the rule onto `year`.
    ///
    /// Fixed rules only exist in their own year; a recurring February 29
    /// does not exist in non-leap years.
    pub fn project(&self, year: i32) -> Option<NaiveDate> {
        match *self {
            HolidayRule::Fixed { date } => (date.year() == year).then_some(date),
            HolidayRule::Recurring { month, day } => NaiveDate::from_ymd_opt(year, month, day),
        }
    }

    fn validate(&self) -> CalendarResult<()> {
        match *self {
            HolidayRule::Fixed { .. } => Ok(()),
            HolidayRule::Recurring { month, day } => HolidayRule::recurring(month, day).map(|_| ()),
        }
    }
}

impl std::fmt::Display for HolidayRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HolidayRule::Fixed { date } => write!(f, "fixed {}", date),
            HolidayRule::Recurring { month, day } => {
                write!(f, "recurring {:02}-{:02}", month, day)
            }
        }
    }
}

/// A named holiday definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The name of the holiday (e.g., "Christmas Day").
    pub name: String,
    /// How the holiday maps onto dates.
    pub rule: HolidayRule,
}

impl Holiday {
    /// Creates a holiday tied to one exact date.
    pub fn fixed(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            rule: HolidayRule::Fixed { date },
        }
    }

    /// Creates a holiday recurring every year on `month`/`day`.
    pub fn recurring(name: impl Into<String>, month: u32, day: u32) -> CalendarResult<Self> {
        Ok(Self {
            name: name.into(),
            rule: HolidayRule::recurring(month, day)?,
        })
    }
}

/// A holiday definition projected onto one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayOccurrence {
    /// The concrete date in the requested year.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
    /// Whether the definition recurs every year.
    pub is_recurring: bool,
}

/// Answers whether a date is a designated holiday.
///
/// Weekends are not holidays; the engine combines both itself.
pub trait HolidayLookup {
    /// Returns true if `date` is a fixed or recurring holiday.
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

impl<F> HolidayLookup for F
where
    F: Fn(NaiveDate) -> bool,
{
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self(date)
    }
}

/// The set of active holiday definitions.
///
/// Holds at most one fixed definition per exact date and one recurring
/// definition per month/day; [`HolidayCalendar::add`] rejects duplicates.
///
/// # Example
///
/// ```
/// use workday_calendar::models::{Holiday, HolidayCalendar, HolidayLookup};
/// use chrono::NaiveDate;
///
/// let mut calendar = HolidayCalendar::new();
/// calendar.add(Holiday::recurring("Constitution Day", 5, 17).unwrap()).unwrap();
/// calendar
///     .add(Holiday::fixed("Special Holiday", NaiveDate::from_ymd_opt(2004, 5, 27).unwrap()))
///     .unwrap();
///
/// assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2010, 5, 17).unwrap()));
/// assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2004, 5, 27).unwrap()));
/// assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2005, 5, 27).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    holidays: Vec<Holiday>,
}

impl HolidayCalendar {
    /// Creates an empty holiday calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calendar seeded with the stock holidays.
    pub fn with_defaults() -> Self {
        let defaults = [
            ("New Year's Day", 1, 1),
            ("Labour Day", 5, 1),
            ("Constitution Day", 5, 17),
            ("Christmas Day", 12, 25),
            ("Boxing Day", 12, 26),
        ];
        let mut holidays: Vec<Holiday> = defaults
            .into_iter()
            .map(|(name, month, day)| Holiday {
                name: name.to_string(),
                rule: HolidayRule::Recurring { month, day },
            })
            .collect();
        if let Some(date) = NaiveDate::from_ymd_opt(2004, 5, 27) {
            holidays.push(Holiday::fixed("Special Holiday", date));
        }
        Self { holidays }
    }

    /// Adds a holiday definition.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::InvalidHoliday`] if the name is blank or the rule
    ///   names a month/day that does not exist
    /// - [`CalendarError::DuplicateHoliday`] if the same rule is already defined
    pub fn add(&mut self, holiday: Holiday) -> CalendarResult<()> {
        if holiday.name.trim().is_empty() {
            return Err(CalendarError::InvalidHoliday {
                message: "holiday name cannot be empty".to_string(),
            });
        }
        holiday.rule.validate()?;

        if self.holidays.iter().any(|h| h.rule == holiday.rule) {
            return Err(CalendarError::DuplicateHoliday {
                rule: holiday.rule.to_string(),
            });
        }

        self.holidays.push(holiday);
        Ok(())
    }

    /// Removes the definition with exactly this rule and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::HolidayNotFound`] if nothing matches.
    pub fn remove(&mut self, rule: &HolidayRule) -> CalendarResult<Holiday> {
        let index = self
            .holidays
            .iter()
            .position(|h| h.rule == *rule)
            .ok_or_else(|| CalendarError::HolidayNotFound {
                rule: rule.to_string(),
            })?;
        Ok(self.holidays.remove(index))
    }

    /// Returns every holiday falling in `year`, sorted by date.
    ///
    /// Recurring holidays are projected onto the year; fixed holidays only
    /// appear in their own year.
    pub fn holidays_for_year(&self, year: i32) -> Vec<HolidayOccurrence> {
        let mut occurrences: Vec<HolidayOccurrence> = self
            .holidays
            .iter()
            .filter_map(|h| {
                h.rule.project(year).map(|date| HolidayOccurrence {
                    date,
                    name: h.name.clone(),
                    is_recurring: matches!(h.rule, HolidayRule::Recurring { .. }),
                })
            })
            .collect();
        occurrences.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
        occurrences
    }

    /// Returns all definitions in insertion order.
    pub fn definitions(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Returns the number of definitions.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if no holidays are defined.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

impl HolidayLookup for HolidayCalendar {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.iter().any(|h| h.rule.matches(date))
    }
}
