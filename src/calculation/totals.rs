//! Employer and employee cost totals.

use rust_decimal::Decimal;

use crate::models::{CostComponent, CostSide};

/// Hourly and annual totals for both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostTotals {
    /// Sum of employer-side components, per hour.
    pub employer_hourly: Decimal,
    /// Sum of employee-side components, per hour.
    pub employee_hourly: Decimal,
    /// Employer hourly total × annual hours.
    pub annual_employer: Decimal,
    /// Employee hourly total × annual hours.
    pub annual_employee: Decimal,
}

/// Sums the components on each side and annualises the sums.
///
/// # Examples
///
/// ```
/// use labour_cost_engine::calculation::compute_totals;
/// use labour_cost_engine::models::{ComponentKind, CostComponent};
/// use rust_decimal::Decimal;
///
/// let components = vec![
///     CostComponent::new(ComponentKind::BaseWage, Decimal::new(20, 0)),
///     CostComponent::new(ComponentKind::CppEmployee, Decimal::new(119, 2)),
/// ];
/// let totals = compute_totals(&components, Decimal::new(2080, 0));
///
/// assert_eq!(totals.employer_hourly, Decimal::new(20, 0));
/// assert_eq!(totals.annual_employee, Decimal::new(247520, 2));
/// ```
pub fn compute_totals(components: &[CostComponent], annual_hours: Decimal) -> CostTotals {
    let side_total = |side: CostSide| -> Decimal {
        components
            .iter()
            .filter(|c| c.side == side)
            .map(|c| c.hourly)
            .sum()
    };

    let employer_hourly = side_total(CostSide::Employer);
    let employee_hourly = side_total(CostSide::Employee);

    CostTotals {
        employer_hourly,
        employee_hourly,
        annual_employer: employer_hourly * annual_hours,
        annual_employee: employee_hourly * annual_hours,
    }
}
