//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the work window
//! and holiday definitions from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{CalendarError, CalendarResult};
use crate::models::{HolidayCalendar, WorkHourProvider, WorkHours, WorkWindow, WorkdayCalendar};

use super::types::HolidaysConfig;

/// Loads and provides access to calendar configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── work_hours.yaml   # Daily work window (start/end)
/// └── holidays.yaml     # Fixed and recurring holidays
/// ```
///
/// # Example
///
/// ```no_run
/// use workday_calendar::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Work hours: {}", loader.work_window());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    calendar: WorkdayCalendar,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The work window does not start before it ends
    /// - A holiday is invalid or defined twice
    pub fn load<P: AsRef<Path>>(path: P) -> CalendarResult<Self> {
        let path = path.as_ref();

        // Load work_hours.yaml
        let work_hours_path = path.join("work_hours.yaml");
        let hours = Self::load_yaml::<WorkHours>(&work_hours_path)?;
        let work_window = WorkWindow::try_from(hours)?;

        // Load holidays.yaml
        let holidays_path = path.join("holidays.yaml");
        let holidays_config = Self::load_yaml::<HolidaysConfig>(&holidays_path)?;

        let mut holidays = HolidayCalendar::new();
        for holiday in holidays_config.holidays {
            holidays.add(holiday)?;
        }

        debug!(
            path = %path.display(),
            work_window = %work_window,
            holidays = holidays.len(),
            "Loaded calendar configuration"
        );

        Ok(Self {
            calendar: WorkdayCalendar::new(work_window, holidays),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> CalendarResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| CalendarError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| CalendarError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded calendar.
    pub fn calendar(&self) -> &WorkdayCalendar {
        &self.calendar
    }

    /// Consumes the loader and returns the calendar.
    pub fn into_calendar(self) -> WorkdayCalendar {
        self.calendar
    }

    /// Returns the configured work window.
    pub fn work_window(&self) -> WorkWindow {
        self.calendar.work_window()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HolidayLookup;
    use chrono::{NaiveDate, NaiveTime};

    fn config_path() -> &'static str {
        "./config/default"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.work_window(), WorkWindow::default());
    }

    #[test]
    fn test_holidays_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let holidays = loader.calendar().holidays();

        assert_eq!(holidays.len(), 6);
        assert!(holidays.is_holiday(NaiveDate::from_ymd_opt(2004, 5, 17).unwrap()));
        assert!(holidays.is_holiday(NaiveDate::from_ymd_opt(2004, 5, 27).unwrap()));
        assert!(holidays.is_holiday(NaiveDate::from_ymd_opt(2031, 12, 26).unwrap()));
        assert!(!holidays.is_holiday(NaiveDate::from_ymd_opt(2005, 5, 27).unwrap()));
    }

    #[test]
    fn test_default_files_match_in_code_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.into_calendar(), WorkdayCalendar::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        match result {
            Err(CalendarError::ConfigNotFound { path }) => {
                assert!(path.contains("work_hours.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_inverted_window_is_rejected() {
        let result = ConfigLoader::load("./tests/fixtures/inverted_window");
        match result {
            Err(CalendarError::InvalidWorkHours { start, end }) => {
                assert_eq!(start, NaiveTime::from_hms_opt(16, 0, 0).unwrap());
                assert_eq!(end, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
            }
            other => panic!("Expected InvalidWorkHours error, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_holiday_is_rejected() {
        let result = ConfigLoader::load("./tests/fixtures/duplicate_holiday");
        assert!(matches!(result, Err(CalendarError::DuplicateHoliday { .. })));
    }

    #[test]
    fn test_unknown_holiday_kind_is_a_parse_error() {
        let result = ConfigLoader::load("./tests/fixtures/malformed");
        match result {
            Err(CalendarError::ConfigParseError { path, .. }) => {
                assert!(path.contains("holidays.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }
}
