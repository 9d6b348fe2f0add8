//! Configuration types for the workday calendar.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::Holiday;

/// Holidays configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysConfig {
    /// The holiday definitions, fixed and recurring.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}
