//! HTTP API module for the pay estimator.
//!
//! This module provides the REST endpoints for single estimates, permanent vs
//! contractor comparisons, and a health check.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, ComparisonRequest, FormFields, RawValue};
pub use response::{ApiError, ComparisonReport, HealthResponse, PayReport};
pub use state::AppState;
