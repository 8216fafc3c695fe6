//! Request types for the labour cost API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{CompensationInput, CostVariant};

/// Request body for the `/calculate` and `/export` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee's compensation details.
    pub employee: CompensationInput,
    /// The cost breakdown variant. Defaults to the extended breakdown.
    #[serde(default)]
    pub variant: CostVariant,
    /// Selects the rate set in force on this date. Defaults to the latest
    /// configured set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<NaiveDate>,
}

impl CalculationRequest {
    /// Creates a request for the default variant and latest rates.
    pub fn new(employee: CompensationInput) -> Self {
        Self {
            employee,
            variant: CostVariant::default(),
            as_of: None,
        }
    }
}

/// Query parameters for the `/export` endpoint.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ExportQuery {
    /// Appends the assumptions table to the report.
    #[serde(default)]
    pub assumptions: bool,
}
