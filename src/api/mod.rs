//! HTTP API module for the labour cost engine.
//!
//! This module provides the REST endpoints for calculating and exporting
//! employee cost breakdowns, managing saved profiles and listing the
//! configured contribution rates.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, ExportQuery};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse, RatesResponse, SummaryMetrics};
pub use state::AppState;
