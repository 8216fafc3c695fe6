//! Configuration types for contribution rates.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ContributionRates;

/// Metadata about the jurisdiction the rates belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionMetadata {
    /// Short code for the jurisdiction (e.g., "ON").
    pub code: String,
    /// The human-readable name of the jurisdiction.
    pub name: String,
    /// URL to the official rate documentation.
    pub source_url: String,
}

impl JurisdictionMetadata {
    /// Metadata for the built-in Ontario rate set.
    pub fn ontario() -> Self {
        Self {
            code: "ON".to_string(),
            name: "Ontario".to_string(),
            source_url: "https://www.canada.ca/en/revenue-agency/services/tax/businesses/topics/payroll.html"
                .to_string(),
        }
    }
}

/// CPP section of a rate file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CppRateConfig {
    /// Employer contribution rate (percent).
    pub employer_pct: Decimal,
    /// Employee contribution rate (percent).
    pub employee_pct: Decimal,
    /// Annual maximum per side.
    pub max_annual: Decimal,
}

/// EI section of a rate file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EiRateConfig {
    /// Employee premium rate (percent).
    pub employee_pct: Decimal,
    /// Employer premium rate (percent).
    pub employer_pct: Decimal,
    /// Annual employee maximum.
    pub max_employee_annual: Decimal,
    /// Annual employer maximum.
    pub max_employer_annual: Decimal,
}

/// Rate configuration for a specific effective date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateConfig {
    /// The date from which these rates apply.
    pub effective_date: NaiveDate,
    /// CPP rates and maximum.
    pub cpp: CppRateConfig,
    /// EI rates and maximums.
    pub ei: EiRateConfig,
}

impl RateConfig {
    /// Converts this file's contents into the engine's rate set.
    pub fn contribution_rates(&self) -> ContributionRates {
        ContributionRates {
            year: self.effective_date.year(),
            cpp_employer_pct: self.cpp.employer_pct,
            cpp_employee_pct: self.cpp.employee_pct,
            ei_employee_pct: self.ei.employee_pct,
            ei_employer_pct: self.ei.employer_pct,
            cpp_max_annual: self.cpp.max_annual,
            ei_max_employee_annual: self.ei.max_employee_annual,
            ei_max_employer_annual: self.ei.max_employer_annual,
        }
    }
}

impl From<&ContributionRates> for RateConfig {
    /// Builds a rate file effective from January 1st of the rates' year.
    fn from(rates: &ContributionRates) -> Self {
        let effective_date =
            NaiveDate::from_ymd_opt(rates.year, 1, 1).unwrap_or(NaiveDate::MIN);
        Self {
            effective_date,
            cpp: CppRateConfig {
                employer_pct: rates.cpp_employer_pct,
                employee_pct: rates.cpp_employee_pct,
                max_annual: rates.cpp_max_annual,
            },
            ei: EiRateConfig {
                employee_pct: rates.ei_employee_pct,
                employer_pct: rates.ei_employer_pct,
                max_employee_annual: rates.ei_max_employee_annual,
                max_employer_annual: rates.ei_max_employer_annual,
            },
        }
    }
}

/// The complete rate configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct RatesConfig {
    /// Jurisdiction metadata.
    metadata: JurisdictionMetadata,
    /// Rate configurations by effective date (sorted oldest first).
    rates: Vec<RateConfig>,
}

impl RatesConfig {
    /// Creates a new RatesConfig from its component parts.
    pub fn new(metadata: JurisdictionMetadata, rates: Vec<RateConfig>) -> Self {
        let mut sorted_rates = rates;
        sorted_rates.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            rates: sorted_rates,
        }
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        &self.metadata
    }

    /// Returns all rate configurations, oldest first.
    pub fn rates(&self) -> &[RateConfig] {
        &self.rates
    }
}
