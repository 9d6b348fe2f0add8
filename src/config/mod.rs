//! Configuration loading and management for the workday calendar.
//!
//! This module provides functionality to load the daily work window and the
//! holiday definitions from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use workday_calendar::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Holidays defined: {}", config.calendar().holidays().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::HolidaysConfig;
