//! The cost engine.
//!
//! [`CostEngine`] binds a rate set and a component variant and turns
//! compensation inputs into [`CostBreakdown`]s. It holds no mutable state and
//! can be shared freely across threads.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{CompensationInput, ContributionRates, CostBreakdown, CostVariant};

use super::components::compute_cost_components;
use super::totals::compute_totals;

/// Computes fully-loaded employee costs for one rate set and variant.
///
/// # Example
///
/// ```
/// use labour_cost_engine::calculation::CostEngine;
/// use labour_cost_engine::models::CompensationInput;
/// use rust_decimal::Decimal;
///
/// let engine = CostEngine::default();
/// let input = CompensationInput::new("emp_001", Decimal::new(20, 0), Decimal::new(40, 0));
/// let breakdown = engine.calculate(&input);
///
/// assert_eq!(breakdown.blended_rate, Decimal::new(20, 0));
/// assert!(breakdown.warnings.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CostEngine {
    rates: ContributionRates,
    variant: CostVariant,
}

impl CostEngine {
    /// Creates an engine for the given rates using the default variant.
    pub fn new(rates: ContributionRates) -> Self {
        Self {
            rates,
            variant: CostVariant::default(),
        }
    }

    /// Returns a copy of this engine producing the given variant.
    pub fn with_variant(mut self, variant: CostVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Returns the contribution rates in use.
    pub fn rates(&self) -> &ContributionRates {
        &self.rates
    }

    /// Returns the component variant in use.
    pub fn variant(&self) -> CostVariant {
        self.variant
    }

    /// Computes the cost breakdown for an employee.
    ///
    /// The input is expected to have passed [`CompensationInput::validate`].
    /// Every such input produces a breakdown; zero hours resolve to the
    /// documented fallbacks rather than an error.
    pub fn calculate(&self, input: &CompensationInput) -> CostBreakdown {
        let parts = compute_cost_components(input, &self.rates, self.variant);
        let totals = compute_totals(&parts.components, parts.annual_hours);

        debug!(
            employee = %input.name,
            variant = ?self.variant,
            rates_year = self.rates.year,
            blended_rate = %parts.blended_rate,
            employer_hourly = %totals.employer_hourly,
            warnings = parts.warnings.len(),
            "Cost breakdown calculated"
        );

        CostBreakdown {
            variant: self.variant,
            blended_rate: parts.blended_rate,
            total_hours: parts.total_hours,
            annual_hours: parts.annual_hours,
            components: parts.components,
            employer_hourly_total: totals.employer_hourly,
            employee_hourly_total: totals.employee_hourly,
            annual_employer_total: totals.annual_employer,
            annual_employee_total: totals.annual_employee,
            warnings: parts.warnings,
        }
    }

    /// Computes breakdowns for several employees.
    pub fn calculate_all<'a, I>(&self, inputs: I) -> Vec<CostBreakdown>
    where
        I: IntoIterator<Item = &'a CompensationInput>,
    {
        inputs.into_iter().map(|input| self.calculate(input)).collect()
    }

    /// Returns the fully-loaded employer cost per hour for an employee.
    pub fn employer_hourly_cost(&self, input: &CompensationInput) -> Decimal {
        self.calculate(input).employer_hourly_total
    }
}
