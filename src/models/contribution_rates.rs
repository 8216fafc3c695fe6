//! Statutory contribution rates.
//!
//! A [`ContributionRates`] value is an immutable input to every calculation.
//! The built-in default is the 2025 Ontario rate set; other years are
//! supplied through the rate configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The EI employer premium as a multiple of the employee premium.
pub const EI_EMPLOYER_MULTIPLIER: Decimal = Decimal::from_parts(14, 0, 0, false, 1);

/// CPP and EI percentages and annual maximums for one year.
///
/// The EI employer percentage and the EI employer maximum are configured
/// independently; neither is derived from the other during a calculation.
///
/// # Example
///
/// ```
/// use labour_cost_engine::models::ContributionRates;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = ContributionRates::default();
/// assert_eq!(rates.year, 2025);
/// assert_eq!(rates.ei_employer_pct, Decimal::from_str("2.296").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRates {
    /// The calendar year these rates apply to.
    pub year: i32,
    /// CPP employer contribution rate (percent of earnings).
    pub cpp_employer_pct: Decimal,
    /// CPP employee contribution rate (percent of earnings).
    pub cpp_employee_pct: Decimal,
    /// EI employee premium rate (percent of earnings).
    pub ei_employee_pct: Decimal,
    /// EI employer premium rate (percent of earnings).
    pub ei_employer_pct: Decimal,
    /// Annual CPP maximum, applied to each side separately.
    pub cpp_max_annual: Decimal,
    /// Annual EI employee maximum.
    pub ei_max_employee_annual: Decimal,
    /// Annual EI employer maximum.
    pub ei_max_employer_annual: Decimal,
}

impl ContributionRates {
    /// The 2025 Ontario rate set.
    pub fn ontario_2025() -> Self {
        let ei_employee_pct = Decimal::new(164, 2);
        Self {
            year: 2025,
            cpp_employer_pct: Decimal::new(595, 2),
            cpp_employee_pct: Decimal::new(595, 2),
            ei_employee_pct,
            ei_employer_pct: ei_employee_pct * EI_EMPLOYER_MULTIPLIER,
            cpp_max_annual: Decimal::new(405550, 2),
            ei_max_employee_annual: Decimal::new(104912, 2),
            ei_max_employer_annual: Decimal::new(146877, 2),
        }
    }
}

impl Default for ContributionRates {
    fn default() -> Self {
        Self::ontario_2025()
    }
}
