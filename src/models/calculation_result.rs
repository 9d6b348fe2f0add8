//! Calculation result model.
//!
//! This module contains the [`CalculationResult`] type that wraps the timestamp
//! produced by the workday arithmetic with the inputs and context it was
//! computed from.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::WorkWindow;

/// The direction a workday offset moves in.
///
/// # Example
///
/// ```
/// use workday_calendar::models::OffsetDirection;
///
/// assert_eq!(OffsetDirection::of(0.0), OffsetDirection::Forward);
/// assert_eq!(OffsetDirection::of(-1.5), OffsetDirection::Backward);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetDirection {
    /// Zero or positive workdays.
    Forward,
    /// Negative workdays.
    Backward,
}

impl OffsetDirection {
    /// Returns the direction a signed workday count moves in.
    pub fn of(workdays: f64) -> Self {
        if workdays >= 0.0 {
            OffsetDirection::Forward
        } else {
            OffsetDirection::Backward
        }
    }
}

/// The complete result of a workday calculation.
///
/// # Example
///
/// ```
/// use workday_calendar::models::{CalculationResult, OffsetDirection, WorkWindow};
/// use chrono::{NaiveDateTime, Utc};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = CalculationResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     start: NaiveDateTime::parse_from_str("2004-05-24 04:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     workdays: 0.5,
///     direction: OffsetDirection::Forward,
///     hours: Decimal::new(40, 1),
///     work_window: WorkWindow::default(),
///     result: NaiveDateTime::parse_from_str("2004-05-24 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     duration_us: 3,
/// };
/// assert_eq!(result.direction, OffsetDirection::Forward);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The timestamp the offset was applied to.
    pub start: NaiveDateTime,
    /// The signed workday count as requested.
    pub workdays: f64,
    /// Which way the offset moved.
    pub direction: OffsetDirection,
    /// The absolute offset in working hours (`|workdays|` times eight).
    pub hours: Decimal,
    /// The work window the calculation ran against.
    pub work_window: WorkWindow,
    /// The resulting timestamp.
    pub result: NaiveDateTime,
    /// The calculation duration in microseconds.
    pub duration_us: u64,
}
