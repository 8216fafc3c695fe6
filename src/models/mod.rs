//! Core data models for the labour cost engine.
//!
//! This module contains all the domain models used throughout the engine.

mod compensation;
mod contribution_rates;
mod cost_breakdown;
mod variant;

pub use compensation::{
    CompensationInput, CostFlags, EmploymentType, MAX_AMOUNT, MAX_PERCENT, MAX_WEEKLY_HOURS,
    MIN_NONZERO_HOURS,
};
pub use contribution_rates::{ContributionRates, EI_EMPLOYER_MULTIPLIER};
pub use cost_breakdown::{
    CapWarning, CappedContribution, ComponentKind, CostBreakdown, CostComponent, CostSide,
};
pub use variant::CostVariant;
