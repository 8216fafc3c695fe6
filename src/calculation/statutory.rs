//! Statutory contribution calculation.
//!
//! CPP and EI are computed on annual earnings, optionally clamped to their
//! annual maximums, and converted back to an hourly figure.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{CapWarning, CappedContribution, ContributionRates};

/// Number of weeks used to annualise weekly hours.
pub const WEEKS_PER_YEAR: Decimal = Decimal::from_parts(52, 0, 0, false, 0);

/// Annual CPP and EI amounts for both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnualContributions {
    /// Employer CPP per year.
    pub cpp_employer: Decimal,
    /// Employee CPP per year.
    pub cpp_employee: Decimal,
    /// Employer EI per year.
    pub ei_employer: Decimal,
    /// Employee EI per year.
    pub ei_employee: Decimal,
}

/// Annual contributions after caps, with a warning for every cap reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CappedContributions {
    /// The (possibly clamped) annual amounts.
    pub annual: AnnualContributions,
    /// One warning per amount that a cap reduced, in the order CPP employer,
    /// CPP employee, EI employer, EI employee.
    pub warnings: Vec<CapWarning>,
}

/// Annualises weekly hours.
pub fn annual_hours(total_weekly_hours: Decimal) -> Decimal {
    total_weekly_hours * WEEKS_PER_YEAR
}

/// Calculates the raw annual contributions on the given earnings.
///
/// # Examples
///
/// ```
/// use labour_cost_engine::calculation::raw_annual_contributions;
/// use labour_cost_engine::models::ContributionRates;
/// use rust_decimal::Decimal;
///
/// let raw = raw_annual_contributions(Decimal::new(10000, 0), &ContributionRates::default());
/// assert_eq!(raw.cpp_employer, Decimal::new(595, 0));
/// ```
pub fn raw_annual_contributions(
    annual_earnings: Decimal,
    rates: &ContributionRates,
) -> AnnualContributions {
    let pct = |rate: Decimal| annual_earnings * rate / Decimal::ONE_HUNDRED;

    AnnualContributions {
        cpp_employer: pct(rates.cpp_employer_pct),
        cpp_employee: pct(rates.cpp_employee_pct),
        ei_employer: pct(rates.ei_employer_pct),
        ei_employee: pct(rates.ei_employee_pct),
    }
}

/// Clamps each annual contribution to its maximum.
///
/// Both CPP lines share `cpp_max_annual`; EI lines use their own maximums.
/// A warning is emitted only when the clamp actually lowers the amount, so an
/// amount exactly at its cap produces none.
pub fn apply_annual_caps(
    raw: AnnualContributions,
    rates: &ContributionRates,
) -> CappedContributions {
    let mut warnings = Vec::new();

    let mut clamp = |contribution: CappedContribution, amount: Decimal, cap: Decimal| {
        if amount > cap {
            debug!(
                contribution = contribution.label(),
                uncapped = %amount,
                cap = %cap,
                "Annual maximum reached"
            );
            warnings.push(CapWarning::new(contribution, amount, cap));
            cap
        } else {
            amount
        }
    };

    let annual = AnnualContributions {
        cpp_employer: clamp(
            CappedContribution::CppEmployer,
            raw.cpp_employer,
            rates.cpp_max_annual,
        ),
        cpp_employee: clamp(
            CappedContribution::CppEmployee,
            raw.cpp_employee,
            rates.cpp_max_annual,
        ),
        ei_employer: clamp(
            CappedContribution::EiEmployer,
            raw.ei_employer,
            rates.ei_max_employer_annual,
        ),
        ei_employee: clamp(
            CappedContribution::EiEmployee,
            raw.ei_employee,
            rates.ei_max_employee_annual,
        ),
    };

    CappedContributions { annual, warnings }
}

/// Converts an annual amount to dollars per hour.
///
/// Zero annual hours yields zero rather than a division error.
pub fn annual_to_hourly(annual_amount: Decimal, annual_hours: Decimal) -> Decimal {
    if annual_hours.is_zero() {
        Decimal::ZERO
    } else {
        annual_amount / annual_hours
    }
}
