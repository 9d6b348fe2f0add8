//! Request types for the workday calendar API.
//!
//! This module defines the JSON request structures for the API endpoints.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{Holiday, HolidayRule};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The timestamp to move from (naive local time, e.g. "2004-05-24T15:07:00").
    pub start: NaiveDateTime,
    /// Signed, fractional number of workdays to move.
    pub workdays: f64,
}

/// Request body for `PUT /work-hours`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkHoursRequest {
    /// The start of the working day.
    pub start: NaiveTime,
    /// The end of the working day.
    pub end: NaiveTime,
}

/// Request body for `POST /holidays`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddHolidayRequest {
    /// The name of the holiday.
    pub name: String,
    /// How the holiday maps onto dates.
    pub rule: HolidayRule,
}

impl From<AddHolidayRequest> for Holiday {
    fn from(req: AddHolidayRequest) -> Self {
        Holiday {
            name: req.name.trim().to_string(),
            rule: req.rule,
        }
    }
}

/// Request body for `DELETE /holidays`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveHolidayRequest {
    /// The rule of the definition to remove.
    pub rule: HolidayRule,
}

/// Query parameters for `GET /holidays`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HolidayQuery {
    /// Project holidays onto this year; all definitions are listed when absent.
    #[serde(default)]
    pub year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_calculation_request_deserialization() {
        let json = r#"{"start":"2004-05-24T15:07:00","workdays":0.25}"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.start,
            NaiveDateTime::parse_from_str("2004-05-24 15:07:00", "%Y-%m-%d %H:%M:%S").unwrap()
        );
        assert_eq!(request.workdays, 0.25);
    }

    #[test]
    fn test_calculation_request_missing_workdays_fails() {
        let json = r#"{"start":"2004-05-24T15:07:00"}"#;
        assert!(serde_json::from_str::<CalculationRequest>(json).is_err());
    }

    #[test]
    fn test_add_holiday_request_trims_name() {
        let json = r#"{"name":"  Company Day ","rule":{"kind":"fixed","date":"2004-05-25"}}"#;
        let request: AddHolidayRequest = serde_json::from_str(json).unwrap();
        let holiday: Holiday = request.into();
        assert_eq!(holiday.name, "Company Day");
        assert_eq!(
            holiday.rule,
            HolidayRule::Fixed {
                date: NaiveDate::from_ymd_opt(2004, 5, 25).unwrap()
            }
        );
    }
}
