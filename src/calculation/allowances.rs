//! Per-hour conversion of periodic allowances.

use rust_decimal::Decimal;

/// Months per year used to annualise a monthly allowance.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Converts a monthly cell phone allowance to dollars per hour worked.
///
/// Returns zero when no hours are worked.
///
/// ```
/// use labour_cost_engine::calculation::cell_phone_hourly;
/// use rust_decimal::Decimal;
///
/// // $104/month × 12 / 2080 h = $0.60/h
/// let hourly = cell_phone_hourly(Decimal::new(104, 0), Decimal::new(2080, 0));
/// assert_eq!(hourly, Decimal::new(60, 2));
/// ```
pub fn cell_phone_hourly(monthly: Decimal, annual_hours: Decimal) -> Decimal {
    if annual_hours.is_zero() {
        return Decimal::ZERO;
    }
    monthly * MONTHS_PER_YEAR / annual_hours
}

/// Converts a weekly fuel allowance to dollars per hour worked.
///
/// Returns zero when no hours are worked.
pub fn fuel_hourly(weekly: Decimal, total_weekly_hours: Decimal) -> Decimal {
    if total_weekly_hours.is_zero() {
        return Decimal::ZERO;
    }
    weekly / total_weekly_hours
}
