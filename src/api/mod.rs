//! HTTP API module for the workday calendar.
//!
//! This module provides the REST endpoints for workday arithmetic and for
//! managing the work window and holidays the arithmetic runs against.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AddHolidayRequest, CalculationRequest, HolidayQuery, RemoveHolidayRequest, WorkHoursRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
