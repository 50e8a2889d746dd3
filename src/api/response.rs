//! Response types for the pay estimator API.
//!
//! This module defines the report envelopes returned by the endpoints and the
//! error response structure.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::display::FormattedResult;
use crate::error::EngineError;
use crate::models::{AuditTrace, CalculationInput, PayCalculation, PeriodBreakdown, TaxResult};

/// The report returned for a single estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayReport {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the report was produced.
    pub calculated_at: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// The financial year of the rates used.
    pub financial_year: String,
    /// The sanitised input that was estimated.
    pub input: CalculationInput,
    /// The unrounded annual figures.
    pub result: TaxResult,
    /// Net pay per period.
    pub breakdown: PeriodBreakdown,
    /// The figures formatted as whole dollars.
    pub formatted: FormattedResult,
    /// How the figures were reached.
    pub audit_trace: AuditTrace,
}

impl PayReport {
    /// Wraps a calculation in a report envelope.
    pub fn new(calculation: PayCalculation, financial_year: &str) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            calculated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            financial_year: financial_year.to_string(),
            input: calculation.input,
            breakdown: calculation.result.period_breakdown(),
            formatted: FormattedResult::from(&calculation.result),
            result: calculation.result,
            audit_trace: calculation.audit_trace,
        }
    }
}

/// The report returned for a permanent vs contractor comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// The permanent employee report.
    pub permanent: PayReport,
    /// The contractor report.
    pub contractor: PayReport,
    /// Contractor net pay minus permanent net pay.
    pub net_pay_difference: Decimal,
}

/// Response body for `/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" when the service is answering.
    pub status: String,
    /// The financial year of the loaded rates.
    pub financial_year: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(details: impl Into<String>) -> Self {
        Self::with_details(
            "VALIDATION_ERROR",
            "Request body is missing or has ill-typed fields",
            details,
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(details: impl Into<String>) -> Self {
        Self::with_details("MALFORMED_JSON", "Request body is not valid JSON", details)
    }

    /// Creates a missing content type error response.
    pub fn missing_content_type() -> Self {
        Self::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 Bad Request response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }

    /// Creates a 500 Internal Server Error response.
    pub fn internal_error(error: ApiError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let error = match error {
            EngineError::ConfigNotFound { path } => ApiError::with_details(
                "CONFIG_ERROR",
                "Configuration error",
                format!("Configuration file not found: {}", path),
            ),
            EngineError::ConfigParseError { path, message } => ApiError::with_details(
                "CONFIG_ERROR",
                "Configuration parse error",
                format!("Failed to parse {}: {}", path, message),
            ),
            EngineError::InvalidRateConfig { message } => {
                ApiError::with_details("CONFIG_ERROR", "Invalid rate configuration", message)
            }
        };
        ApiErrorResponse::internal_error(error)
    }
}
