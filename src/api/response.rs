//! Response types for the labour cost API.
//!
//! This module defines the success payloads and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{JurisdictionMetadata, RateConfig};
use crate::error::EngineError;
use crate::models::{ContributionRates, CostBreakdown};

/// The headline figures of a breakdown, rounded to cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// Employer cost per hour.
    pub employer_hourly: Decimal,
    /// Employee deductions per hour.
    pub employee_hourly: Decimal,
    /// Employer cost per year.
    pub annual_employer: Decimal,
    /// Employee deductions per year.
    pub annual_employee: Decimal,
}

impl From<&CostBreakdown> for SummaryMetrics {
    fn from(breakdown: &CostBreakdown) -> Self {
        let cents = |value: Decimal| {
            value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        };
        Self {
            employer_hourly: cents(breakdown.employer_hourly_total),
            employee_hourly: cents(breakdown.employee_hourly_total),
            annual_employer: cents(breakdown.annual_employer_total),
            annual_employee: cents(breakdown.annual_employee_total),
        }
    }
}

/// Response body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the result.
    pub engine_version: String,
    /// The name of the employee the breakdown is for.
    pub employee_name: String,
    /// The rate set the breakdown was calculated with.
    pub rates: ContributionRates,
    /// The full breakdown at full precision.
    pub breakdown: CostBreakdown,
    /// Rounded headline figures.
    pub summary: SummaryMetrics,
}

impl CalculationResponse {
    /// Wraps a breakdown with a fresh calculation id and timestamp.
    pub fn new(
        employee_name: impl Into<String>,
        rates: ContributionRates,
        breakdown: CostBreakdown,
    ) -> Self {
        let summary = SummaryMetrics::from(&breakdown);
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            employee_name: employee_name.into(),
            rates,
            breakdown,
            summary,
        }
    }
}

/// Response body for the `/rates` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesResponse {
    /// The jurisdiction the rates belong to.
    pub jurisdiction: JurisdictionMetadata,
    /// Every configured rate set, oldest first.
    pub rate_sets: Vec<RateConfig>,
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
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a profile not found error response.
    pub fn profile_not_found(name: &str) -> Self {
        Self::with_details(
            "PROFILE_NOT_FOUND",
            format!("Profile not found: {}", name),
            format!("No profile named '{}' has been saved", name),
        )
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
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
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::RatesNotFound { date } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "RATES_NOT_FOUND",
                    format!("No contribution rates effective on {}", date),
                    "Choose a date on or after the earliest configured rate set",
                ),
            },
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid field '{}': {}", field, message),
                    "The compensation data contains invalid information",
                ),
            },
            EngineError::ProfileNotFound { name } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::profile_not_found(&name),
            },
            EngineError::ProfileStore { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "PROFILE_STORE_ERROR",
                    "Profile store unavailable",
                    format!("{}: {}", path, message),
                ),
            },
            EngineError::Export { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("EXPORT_ERROR", "Report export failed", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::CostEngine;
    use crate::models::CompensationInput;
    use chrono::NaiveDate;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_input_maps_to_validation_error() {
        let api_error: ApiErrorResponse = EngineError::InvalidInput {
            field: "base_wage".to_string(),
            message: "must not be negative (got -1)".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
        assert!(api_error.error.message.contains("base_wage"));
    }

    #[test]
    fn test_profile_not_found_is_404() {
        let api_error: ApiErrorResponse = EngineError::ProfileNotFound {
            name: "Ghost".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "PROFILE_NOT_FOUND");
    }

    #[test]
    fn test_rates_not_found_is_400() {
        let api_error: ApiErrorResponse = EngineError::RatesNotFound {
            date: NaiveDate::from_ymd_opt(1999, 1, 1).unwrap(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "RATES_NOT_FOUND");
    }

    #[test]
    fn test_store_failure_is_500() {
        let api_error: ApiErrorResponse = EngineError::ProfileStore {
            path: "profiles.json".to_string(),
            message: "permission denied".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_summary_rounds_to_cents() {
        let input = CompensationInput::new("Alice", Decimal::new(20, 0), Decimal::new(40, 0));
        let breakdown = CostEngine::default().calculate(&input);

        let summary = SummaryMetrics::from(&breakdown);
        assert_eq!(summary.employer_hourly, Decimal::new(2271, 2));
        assert_eq!(summary.employee_hourly, Decimal::new(152, 2));
        assert_eq!(summary.annual_employer, Decimal::new(4723514, 2));
    }
}
