//! Calculation logic for the labour cost engine.
//!
//! This module contains the blended hourly rate calculation, statutory CPP and
//! EI contributions with annual maximums, allowance conversion, assembly of
//! the named cost components, employer/employee totals, and the
//! [`CostEngine`] that ties them together.

mod allowances;
mod blended_rate;
mod components;
mod engine;
mod statutory;
mod totals;

pub use allowances::{MONTHS_PER_YEAR, cell_phone_hourly, fuel_hourly};
pub use blended_rate::{
    OVERTIME_PREMIUM_MULTIPLIER, blended_hourly_rate, compute_blended_hourly_rate,
};
pub use components::{CostComponents, compute_cost_components};
pub use engine::CostEngine;
pub use statutory::{
    AnnualContributions, CappedContributions, WEEKS_PER_YEAR, annual_hours, annual_to_hourly,
    apply_annual_caps, raw_annual_contributions,
};
pub use totals::{CostTotals, compute_totals};
