//! Cost component assembly.
//!
//! This module turns a [`CompensationInput`] and a [`ContributionRates`] set
//! into the ordered list of hourly cost lines for a [`CostVariant`].

use rust_decimal::Decimal;

use crate::models::{
    CapWarning, CompensationInput, ComponentKind, ContributionRates, CostComponent, CostVariant,
};

use super::allowances::{cell_phone_hourly, fuel_hourly};
use super::blended_rate::blended_hourly_rate;
use super::statutory::{
    CappedContributions, annual_hours, annual_to_hourly, apply_annual_caps,
    raw_annual_contributions,
};

/// The hourly cost lines for one employee, before totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostComponents {
    /// The blended hourly wage.
    pub blended_rate: Decimal,
    /// Weekly hours including overtime.
    pub total_hours: Decimal,
    /// Annual hours (weekly total × 52).
    pub annual_hours: Decimal,
    /// Hourly cost lines in output order.
    pub components: Vec<CostComponent>,
    /// Annual maximums that were reached.
    pub warnings: Vec<CapWarning>,
}

fn percent_of(amount: Decimal, pct: Decimal) -> Decimal {
    amount * pct / Decimal::ONE_HUNDRED
}

/// Computes the hourly cost lines for an employee.
///
/// The steps are:
/// 1. blend regular and overtime pay into one hourly base rate
/// 2. annualise hours (× 52) and earnings
/// 3. compute CPP and EI on annual earnings and, when caps apply, clamp them
///    to their annual maximums
/// 4. convert the statutory amounts back to $/h (zero when no hours are worked)
/// 5. add vacation pay, WSIB and the flat and derived allowances
///
/// WSIB is charged on the blended rate unless overtime is excluded from the
/// WSIB base and overtime was worked, in which case the straight base wage is
/// used.
///
/// The lines produced depend on the variant (see [`CostVariant`]); flat
/// allowances missing from the input appear as zero when the variant reports
/// them.
///
/// # Examples
///
/// ```
/// use labour_cost_engine::calculation::compute_cost_components;
/// use labour_cost_engine::models::{CompensationInput, ComponentKind, ContributionRates, CostVariant};
/// use rust_decimal::Decimal;
///
/// let input = CompensationInput::new("emp_001", Decimal::new(20, 0), Decimal::new(40, 0));
/// let result = compute_cost_components(&input, &ContributionRates::default(), CostVariant::Extended);
///
/// let vacation = result.components.iter().find(|c| c.kind == ComponentKind::VacationPay).unwrap();
/// assert_eq!(vacation.hourly, Decimal::new(80, 2));
/// ```
pub fn compute_cost_components(
    input: &CompensationInput,
    rates: &ContributionRates,
    variant: CostVariant,
) -> CostComponents {
    let flags = variant.effective_flags(input.flags);

    let base = blended_hourly_rate(
        input.base_wage,
        input.weekly_hours,
        input.overtime_hours,
        flags.apply_overtime_premium,
    );
    let total_hours = input.total_hours();
    let annual_hours = annual_hours(total_hours);
    let annual_earnings = base * annual_hours;

    let raw = raw_annual_contributions(annual_earnings, rates);
    let CappedContributions {
        annual: statutory,
        warnings,
    } = if flags.apply_caps {
        apply_annual_caps(raw, rates)
    } else {
        CappedContributions {
            annual: raw,
            warnings: Vec::new(),
        }
    };
    let hourly = |annual: Decimal| annual_to_hourly(annual, annual_hours);

    let vacation_pay = if flags.include_vacation {
        percent_of(base, input.vacation_pct)
    } else {
        Decimal::ZERO
    };

    let wsib_base = if flags.wsib_applies_to_overtime || input.overtime_hours.is_zero() {
        base
    } else {
        input.base_wage
    };
    let wsib = percent_of(wsib_base, input.wsib_rate);

    let mut components = vec![
        CostComponent::new(ComponentKind::BaseWage, base),
        CostComponent::new(ComponentKind::VacationPay, vacation_pay),
    ];

    if variant.splits_contributions() {
        components.extend([
            CostComponent::new(ComponentKind::CppEmployer, hourly(statutory.cpp_employer)),
            CostComponent::new(ComponentKind::CppEmployee, hourly(statutory.cpp_employee)),
            CostComponent::new(ComponentKind::EiEmployer, hourly(statutory.ei_employer)),
            CostComponent::new(ComponentKind::EiEmployee, hourly(statutory.ei_employee)),
        ]);
    } else {
        components.extend([
            CostComponent::new(ComponentKind::Cpp, hourly(statutory.cpp_employer)),
            CostComponent::new(ComponentKind::Ei, hourly(statutory.ei_employer)),
        ]);
    }

    components.extend([
        CostComponent::new(ComponentKind::Wsib, wsib),
        CostComponent::new(ComponentKind::HealthBenefits, input.health_benefits),
    ]);

    if variant.includes_bonus_lines() {
        components.extend([
            CostComponent::new(ComponentKind::Bonuses, input.bonuses.unwrap_or_default()),
            CostComponent::new(
                ComponentKind::TrainingPpe,
                input.training_ppe.unwrap_or_default(),
            ),
        ]);
    }

    if variant.includes_travel_allowances() {
        let cell_phone = input
            .cell_phone_monthly
            .map(|monthly| cell_phone_hourly(monthly, annual_hours))
            .unwrap_or_default();
        let fuel = input
            .fuel_weekly
            .map(|weekly| fuel_hourly(weekly, total_hours))
            .unwrap_or_default();

        components.extend([
            CostComponent::new(ComponentKind::CellPhone, cell_phone),
            CostComponent::new(ComponentKind::FuelAllowance, fuel),
        ]);
    }

    CostComponents {
        blended_rate: base,
        total_hours,
        annual_hours,
        components,
        warnings,
    }
}
