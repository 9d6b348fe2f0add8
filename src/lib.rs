//! Workday calendar
//!
//! This crate moves timestamps by a signed, fractional number of workdays,
//! where a workday is bounded by a configurable daily work window and excludes
//! weekends and holidays. It also provides the holiday and work-hour
//! configuration the arithmetic runs against, and an HTTP API over both.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
