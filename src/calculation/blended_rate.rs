//! Blended hourly rate calculation.
//!
//! The blended rate is the weighted average of straight-time and overtime
//! pay across all hours worked in a week. It is the base for every
//! percentage-based cost component.

use rust_decimal::Decimal;

use crate::models::CompensationInput;

/// The overtime premium multiplier (time and a half).
pub const OVERTIME_PREMIUM_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Calculates the blended hourly rate for an employee using the input's own
/// overtime premium flag.
///
/// See [`blended_hourly_rate`] for the formula.
///
/// # Examples
///
/// ```
/// use labour_cost_engine::calculation::compute_blended_hourly_rate;
/// use labour_cost_engine::models::CompensationInput;
/// use rust_decimal::Decimal;
///
/// let mut input = CompensationInput::new("emp_001", Decimal::new(20, 0), Decimal::new(40, 0));
/// input.overtime_hours = Decimal::new(10, 0);
///
/// // (40 × $20 + 10 × $30) / 50 = $22
/// assert_eq!(compute_blended_hourly_rate(&input), Decimal::new(22, 0));
/// ```
pub fn compute_blended_hourly_rate(input: &CompensationInput) -> Decimal {
    blended_hourly_rate(
        input.base_wage,
        input.weekly_hours,
        input.overtime_hours,
        input.flags.apply_overtime_premium,
    )
}

/// Calculates the weighted hourly rate across regular and overtime hours.
///
/// Overtime hours are paid at `base_wage × 1.5` when `apply_overtime_premium`
/// is set and at `base_wage` otherwise. When no hours are worked at all the
/// base wage is returned unchanged.
///
/// # Arguments
///
/// * `base_wage` - Straight-time wage per hour
/// * `weekly_hours` - Regular hours per week
/// * `overtime_hours` - Overtime hours per week
/// * `apply_overtime_premium` - Whether overtime attracts the 1.5× premium
pub fn blended_hourly_rate(
    base_wage: Decimal,
    weekly_hours: Decimal,
    overtime_hours: Decimal,
    apply_overtime_premium: bool,
) -> Decimal {
    let total_hours = weekly_hours + overtime_hours;
    if total_hours.is_zero() {
        return base_wage;
    }

    let multiplier = if apply_overtime_premium {
        OVERTIME_PREMIUM_MULTIPLIER
    } else {
        Decimal::ONE
    };
    let overtime_wage = base_wage * multiplier;

    let total_wages = weekly_hours * base_wage + overtime_hours * overtime_wage;
    total_wages / total_hours
}
