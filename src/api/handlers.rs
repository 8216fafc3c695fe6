//! HTTP request handlers for the labour cost API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::CostEngine;
use crate::error::{EngineError, EngineResult};
use crate::export::{ReportAssumptions, report_file_name, write_breakdown_csv};
use crate::models::{CompensationInput, ContributionRates, CostBreakdown};

use super::request::{CalculationRequest, ExportQuery};
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, RatesResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/export", post(export_handler))
        .route("/profiles", get(list_profiles_handler))
        .route(
            "/profiles/:name",
            get(get_profile_handler)
                .put(put_profile_handler)
                .delete(delete_profile_handler),
        )
        .route("/rates", get(rates_handler))
        .with_state(state)
}

/// Maps a JSON body rejection to an API error, logging it under the
/// request's correlation id.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Validates the request, selects the rate set and runs the engine.
fn run_calculation(
    state: &AppState,
    request: &CalculationRequest,
) -> EngineResult<(ContributionRates, CostBreakdown)> {
    request.employee.validate()?;

    let rates = match request.as_of {
        Some(date) => state.rates().rates_for_date(date)?,
        None => state.rates().latest()?,
    };

    let breakdown = CostEngine::new(rates.clone())
        .with_variant(request.variant)
        .calculate(&request.employee);
    Ok((rates, breakdown))
}

/// Handler for POST /calculate.
///
/// Accepts an employee's compensation details and returns the full cost
/// breakdown with rounded summary figures.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match run_calculation(&state, &request) {
        Ok((rates, breakdown)) => {
            info!(
                correlation_id = %correlation_id,
                employee = %request.employee.name,
                variant = ?request.variant,
                rate_year = rates.year,
                employer_hourly = %breakdown.employer_hourly_total,
                warnings = breakdown.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            let response = CalculationResponse::new(request.employee.name, rates, breakdown);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /export.
///
/// Returns the breakdown as a CSV attachment named after the employee.
async fn export_handler(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing export request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let report = run_calculation(&state, &request).and_then(|(rates, breakdown)| {
        let assumptions = query
            .assumptions
            .then(|| ReportAssumptions::new(request.variant, request.employee.flags, rates));
        write_breakdown_csv(&breakdown, assumptions.as_ref())
    });

    match report {
        Ok(csv) => {
            let file_name = report_file_name(&request.employee.name);
            info!(
                correlation_id = %correlation_id,
                file_name = %file_name,
                bytes = csv.len(),
                "Report exported"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", file_name),
                    ),
                ],
                csv,
            )
                .into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /profiles.
async fn list_profiles_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.profiles().list() {
        Ok(profiles) => {
            info!(
                correlation_id = %correlation_id,
                profiles = profiles.len(),
                "Listed profiles"
            );
            (StatusCode::OK, Json(profiles)).into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /profiles/:name.
async fn get_profile_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let result = state
        .profiles()
        .get(&name)
        .and_then(|profile| profile.ok_or(EngineError::ProfileNotFound { name }));

    match result {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for PUT /profiles/:name.
///
/// Validates the profile before saving it; invalid profiles are never
/// written.
async fn put_profile_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<CompensationInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, profile = %name, "Saving profile");

    let profile = match payload {
        Ok(Json(profile)) => profile,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = profile
        .validate()
        .and_then(|()| state.profiles().upsert(&name, profile.clone()));

    match result {
        Ok(()) => (StatusCode::OK, Json(profile)).into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for DELETE /profiles/:name.
async fn delete_profile_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.profiles().delete(&name) {
        Ok(true) => {
            info!(correlation_id = %correlation_id, profile = %name, "Profile deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Ok(false) => error_response(correlation_id, EngineError::ProfileNotFound { name }),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /rates.
async fn rates_handler(State(state): State<AppState>) -> Response {
    let config = state.rates().config();
    let response = RatesResponse {
        jurisdiction: config.jurisdiction().clone(),
        rate_sets: config.rates().to_vec(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RatesLoader;
    use crate::store::InMemoryProfileStore;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use serde_json::Value;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(RatesLoader::builtin(), InMemoryProfileStore::new())
    }

    fn create_valid_request() -> CalculationRequest {
        CalculationRequest::new(CompensationInput::new(
            "emp_001",
            Decimal::new(20, 0),
            Decimal::new(40, 0),
        ))
    }

    async fn send(router: Router, method: &str, uri: &str, body: Option<String>) -> Response {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json");
        let body = body.map(Body::from).unwrap_or_else(Body::empty);
        router.oneshot(builder.body(body).unwrap()).await.unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_api_001_valid_request_returns_200() {
        let router = create_router(create_test_state());
        let body = serde_json::to_string(&create_valid_request()).unwrap();

        let response = send(router, "POST", "/calculate", Some(body)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let json = body_json(response).await;
        assert!(json.get("calculation_id").is_some());
        assert_eq!(json["employee_name"], "emp_001");
        assert_eq!(json["summary"]["employer_hourly"], "22.71");
        assert_eq!(json["rates"]["year"], 2025);
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = send(router, "POST", "/calculate", Some("{ invalid".to_string())).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_negative_wage_returns_validation_error() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request.employee.base_wage = Decimal::new(-1, 0);
        let body = serde_json::to_string(&request).unwrap();

        let response = send(router, "POST", "/calculate", Some(body)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_api_004_date_before_rates_returns_400() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request.as_of = chrono::NaiveDate::from_ymd_opt(2020, 1, 1);
        let body = serde_json::to_string(&request).unwrap();

        let response = send(router, "POST", "/calculate", Some(body)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "RATES_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_api_005_unknown_profile_returns_404() {
        let router = create_router(create_test_state());

        let response = send(router, "GET", "/profiles/Ghost", None).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["code"], "PROFILE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_api_006_invalid_profile_is_not_saved() {
        let state = create_test_state();
        let router = create_router(state.clone());
        let mut profile = CompensationInput::new("Bad", Decimal::new(20, 0), Decimal::new(40, 0));
        profile.weekly_hours = Decimal::new(-5, 0);
        let body = serde_json::to_string(&profile).unwrap();

        let response = send(router, "PUT", "/profiles/Bad", Some(body)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.profiles().get("Bad").unwrap().is_none());
    }

    #[tokio::test]
    async fn test_api_007_export_sets_attachment_headers() {
        let router = create_router(create_test_state());
        let body = serde_json::to_string(&create_valid_request()).unwrap();

        let response = send(router, "POST", "/export", Some(body)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/csv; charset=utf-8"
        );
        assert_eq!(
            response.headers().get("content-disposition").unwrap(),
            "attachment; filename=\"emp_001_hourly_cost.csv\""
        );
    }

    #[tokio::test]
    async fn test_api_008_export_file_name_is_header_safe() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request.employee.name = "Ann \"Q\"\nSmith".to_string();
        let body = serde_json::to_string(&request).unwrap();

        let response = send(router, "POST", "/export", Some(body)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-disposition").unwrap(),
            "attachment; filename=\"Ann _Q__Smith_hourly_cost.csv\""
        );
    }

    #[tokio::test]
    async fn test_api_009_oversized_wage_is_rejected() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request.employee.base_wage = Decimal::from_str("10000000000000000000000000000").unwrap();
        let body = serde_json::to_string(&request).unwrap();

        let response = send(router, "POST", "/calculate", Some(body)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}
