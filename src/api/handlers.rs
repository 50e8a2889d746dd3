//! HTTP request handlers for the pay estimator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::display::ResultCard;
use crate::input::{InputCollector, InputForm};
use crate::models::EmploymentKind;

use super::request::{CalculationRequest, ComparisonRequest};
use super::response::{ApiError, ApiErrorResponse, ComparisonReport, HealthResponse, PayReport};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/compare", post(compare_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Sanitises the form, estimates it, and returns a [`PayReport`]. Clients that
/// accept `text/plain` but not JSON get the plain-text [`ResultCard`] instead.
async fn calculate_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    let form: InputForm = request.into();
    let input = form.collect(state.config().defaults());
    let calculation = state.calculator().explain(&input);
    let report = PayReport::new(calculation, &state.config().rates().financial_year);

    info!(
        correlation_id = %correlation_id,
        employment_kind = %input.employment_kind,
        frequency = %input.frequency,
        gross_pay = %report.result.gross_pay,
        net_pay = %report.result.net_pay,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    if wants_plain_text(&headers) {
        let card = ResultCard::new(
            input.employment_kind,
            &report.result,
            state.calculator().rates().super_guarantee_rate,
        );
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            card.to_string(),
        )
            .into_response();
    }

    json_response(StatusCode::OK, report)
}

/// True when the Accept header names `text/plain` and not JSON.
fn wants_plain_text(headers: &HeaderMap) -> bool {
    let media: Vec<&str> = headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .filter_map(|range| range.split(';').next())
        .map(str::trim)
        .collect();

    media.contains(&"text/plain") && !media.contains(&"application/json")
}

/// Handler for POST /compare endpoint.
///
/// Estimates the permanent and contractor forms side by side.
async fn compare_handler(
    State(state): State<AppState>,
    payload: Result<Json<ComparisonRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing comparison request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    let defaults = state.config().defaults();
    let financial_year = &state.config().rates().financial_year;
    let calculator = state.calculator();

    let permanent = request
        .permanent
        .into_form(EmploymentKind::Permanent)
        .collect(defaults);
    let contractor = request
        .contractor
        .into_form(EmploymentKind::Contractor)
        .collect(defaults);

    let permanent = PayReport::new(calculator.explain(&permanent), financial_year);
    let contractor = PayReport::new(calculator.explain(&contractor), financial_year);
    let report = ComparisonReport {
        net_pay_difference: contractor
            .result
            .net_pay
            .saturating_sub(permanent.result.net_pay),
        permanent,
        contractor,
    };

    info!(
        correlation_id = %correlation_id,
        permanent_net_pay = %report.permanent.result.net_pay,
        contractor_net_pay = %report.contractor.result.net_pay,
        duration_us = start_time.elapsed().as_micros(),
        "Comparison completed successfully"
    );

    json_response(StatusCode::OK, report)
}

/// Handler for GET /health endpoint.
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        financial_year: state.config().rates().financial_year.clone(),
    })
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the bad field
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(err.body_text())
        }
        JsonRejection::MissingJsonContentType(_) => {
            warn!(correlation_id = %correlation_id, "Missing JSON content type");
            ApiError::missing_content_type()
        }
        other => {
            warn!(
                correlation_id = %correlation_id,
                error = %other,
                "Failed to read request body"
            );
            ApiError::malformed_json(other.body_text())
        }
    };

    ApiErrorResponse::bad_request(error).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use serde_json::{Value, json};
    use std::str::FromStr;
    use tower::ServiceExt;

    use crate::config::ConfigLoader;

    fn decimal_at(value: &Value) -> Decimal {
        Decimal::from_str(value.as_str().unwrap()).unwrap()
    }

    fn router() -> Router {
        create_router(AppState::new(ConfigLoader::builtin()))
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_calculate_returns_report() {
        let (status, body) = post_json(
            "/calculate",
            json!({ "employment_type": "permanent", "amount": 100000, "frequency": "annually" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(decimal_at(&body["result"]["net_pay"]), Decimal::from(77_212));
        assert_eq!(body["formatted"]["net_pay"].as_str().unwrap(), "$77,212");
    }

    #[tokio::test]
    async fn test_calculate_rejects_unknown_employment_type() {
        let (status, body) = post_json(
            "/calculate",
            json!({ "employment_type": "casual", "amount": 100000 }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"].as_str().unwrap(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_compare_returns_both_reports() {
        let (status, body) = post_json(
            "/compare",
            json!({
                "permanent": { "amount": 100000 },
                "contractor": { "amount": 112000, "frequency": "annually" }
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["permanent"]["input"]["employment_kind"], "permanent");
        assert_eq!(body["contractor"]["input"]["employment_kind"], "contractor");
        assert!(decimal_at(&body["net_pay_difference"]).is_zero());
    }

    #[tokio::test]
    async fn test_calculate_huge_hourly_amount_falls_back_to_zero() {
        let (status, body) = post_json(
            "/calculate",
            json!({
                "employment_type": "permanent",
                "amount": "1000000000000000000000000000",
                "frequency": "hourly"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(decimal_at(&body["input"]["amount"]).is_zero());
        assert!(decimal_at(&body["result"]["net_pay"]).is_zero());
    }

    #[tokio::test]
    async fn test_calculate_renders_card_for_plain_text_clients() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .header("Accept", "text/plain")
                    .body(Body::from(
                        json!({ "employment_type": "permanent", "amount": 100000 }).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.starts_with("Permanent\nIncludes Sick Leave & Annual Leave\n"));
        assert!(text.contains("Superannuation (12%)"));
        assert!(text.contains("$77,212"));
    }

    #[test]
    fn test_wants_plain_text_only_without_json() {
        let mut headers = HeaderMap::new();
        assert!(!wants_plain_text(&headers));

        headers.insert(header::ACCEPT, "text/plain; q=0.9".parse().unwrap());
        assert!(wants_plain_text(&headers));

        headers.insert(header::ACCEPT, "text/plain, application/json".parse().unwrap());
        assert!(!wants_plain_text(&headers));
    }
}
