//! Compensation input model and related types.
//!
//! This module defines the [`CompensationInput`] record describing one
//! employee's pay parameters, the [`EmploymentType`] enum and the
//! [`CostFlags`] toggles that shape the calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents the type of employment arrangement.
///
/// The employment type is descriptive only; it does not alter any formula.
/// Profiles written with the legacy display spellings (e.g. `"Full-Time"`)
/// are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Full-time employment.
    #[default]
    #[serde(alias = "Full-Time")]
    FullTime,
    /// Part-time employment.
    #[serde(alias = "Part-Time")]
    PartTime,
    /// Temporary or fixed-term employment.
    #[serde(alias = "Temporary")]
    Temporary,
    /// Subcontracted worker.
    #[serde(alias = "Subcontractor")]
    Subcontractor,
    /// Salaried employee.
    #[serde(alias = "Salaried")]
    Salaried,
    /// Hourly employee.
    #[serde(alias = "Hourly")]
    Hourly,
}

impl EmploymentType {
    /// Returns the human-readable label for this employment type.
    ///
    /// ```
    /// use labour_cost_engine::models::EmploymentType;
    ///
    /// assert_eq!(EmploymentType::PartTime.label(), "Part-Time");
    /// ```
    pub fn label(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-Time",
            EmploymentType::PartTime => "Part-Time",
            EmploymentType::Temporary => "Temporary",
            EmploymentType::Subcontractor => "Subcontractor",
            EmploymentType::Salaried => "Salaried",
            EmploymentType::Hourly => "Hourly",
        }
    }
}

fn default_true() -> bool {
    true
}

/// Toggles that change how the cost components are computed.
///
/// Every flag defaults to `true` when absent from a serialized record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostFlags {
    /// Clamp annual CPP and EI amounts to their statutory maximums.
    #[serde(default = "default_true")]
    pub apply_caps: bool,
    /// Pay overtime hours at 1.5× the base wage.
    #[serde(default = "default_true")]
    pub apply_overtime_premium: bool,
    /// Include vacation pay as a cost component.
    #[serde(default = "default_true")]
    pub include_vacation: bool,
    /// Compute WSIB premiums on the blended rate (including overtime).
    #[serde(default = "default_true")]
    pub wsib_applies_to_overtime: bool,
}

impl Default for CostFlags {
    fn default() -> Self {
        Self {
            apply_caps: true,
            apply_overtime_premium: true,
            include_vacation: true,
            wsib_applies_to_overtime: true,
        }
    }
}

/// Largest accepted dollar amount for an hourly rate or periodic allowance.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Largest accepted value for a percentage field.
pub const MAX_PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Hours in a week; the upper bound for regular and for overtime hours.
pub const MAX_WEEKLY_HOURS: Decimal = Decimal::from_parts(168, 0, 0, false, 0);

/// Smallest non-zero number of hours accepted (0.01 h).
pub const MIN_NONZERO_HOURS: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

fn default_vacation_pct() -> Decimal {
    Decimal::new(4, 0)
}

fn default_wsib_rate() -> Decimal {
    Decimal::new(130, 2)
}

/// Per-employee compensation parameters.
///
/// This is also the persisted profile record: it serializes as one flat JSON
/// object with the flags inlined next to the numeric fields.
///
/// # Example
///
/// ```
/// use labour_cost_engine::models::CompensationInput;
///
/// let json = r#"{
///     "name": "Alice",
///     "employment_type": "full_time",
///     "base_wage": "20.00",
///     "weekly_hours": "40"
/// }"#;
///
/// let input: CompensationInput = serde_json::from_str(json).unwrap();
/// assert!(input.flags.apply_caps);
/// assert_eq!(input.vacation_pct.to_string(), "4");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompensationInput {
    /// Identifier for the employee; not used in any calculation.
    pub name: String,
    /// The type of employment arrangement.
    #[serde(default)]
    pub employment_type: EmploymentType,
    /// Straight-time wage in dollars per hour.
    pub base_wage: Decimal,
    /// Regular hours worked per week.
    pub weekly_hours: Decimal,
    /// Overtime hours worked per week.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Vacation pay as a percentage of the blended rate.
    #[serde(default = "default_vacation_pct")]
    pub vacation_pct: Decimal,
    /// WSIB premium rate as a percentage.
    #[serde(default = "default_wsib_rate")]
    pub wsib_rate: Decimal,
    /// Health benefits in dollars per hour.
    #[serde(default)]
    pub health_benefits: Decimal,
    /// Bonuses and allowances in dollars per hour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonuses: Option<Decimal>,
    /// Training and protective equipment in dollars per hour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_ppe: Option<Decimal>,
    /// Cell phone allowance in dollars per month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_phone_monthly: Option<Decimal>,
    /// Fuel allowance in dollars per week.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_weekly: Option<Decimal>,
    /// Calculation toggles.
    #[serde(flatten)]
    pub flags: CostFlags,
}

impl CompensationInput {
    /// Creates an input with the given wage and hours and default settings
    /// for everything else (4% vacation, 1.30% WSIB, all flags on).
    pub fn new(name: impl Into<String>, base_wage: Decimal, weekly_hours: Decimal) -> Self {
        Self {
            name: name.into(),
            employment_type: EmploymentType::default(),
            base_wage,
            weekly_hours,
            overtime_hours: Decimal::ZERO,
            vacation_pct: default_vacation_pct(),
            wsib_rate: default_wsib_rate(),
            health_benefits: Decimal::ZERO,
            bonuses: None,
            training_ppe: None,
            cell_phone_monthly: None,
            fuel_weekly: None,
            flags: CostFlags::default(),
        }
    }

    /// Returns total weekly hours (regular plus overtime).
    pub fn total_hours(&self) -> Decimal {
        self.weekly_hours + self.overtime_hours
    }

    /// Checks the input before it is handed to the cost engine.
    ///
    /// Rejects an empty name and any negative numeric field, including
    /// optional allowances that are present. Values must also fall within
    /// these ranges:
    ///
    /// | Field | Accepted range |
    /// |---|---|
    /// | `weekly_hours`, `overtime_hours` | 0, or 0.01 to 168 |
    /// | `vacation_pct`, `wsib_rate` | 0 to 100 |
    /// | `base_wage`, `health_benefits`, `bonuses`, `training_ppe` | 0 to 1,000,000 |
    /// | `cell_phone_monthly`, `fuel_weekly` | 0 to 1,000,000 |
    ///
    /// Inside these ranges every intermediate amount the engine computes
    /// fits in a `Decimal`.
    ///
    /// ```
    /// use labour_cost_engine::models::CompensationInput;
    /// use rust_decimal::Decimal;
    ///
    /// let input = CompensationInput::new("Bob", Decimal::new(-1, 0), Decimal::new(40, 0));
    /// assert!(input.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(EngineError::InvalidInput {
                field: "name".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        let required = [
            ("base_wage", self.base_wage, MAX_AMOUNT),
            ("weekly_hours", self.weekly_hours, MAX_WEEKLY_HOURS),
            ("overtime_hours", self.overtime_hours, MAX_WEEKLY_HOURS),
            ("vacation_pct", self.vacation_pct, MAX_PERCENT),
            ("wsib_rate", self.wsib_rate, MAX_PERCENT),
            ("health_benefits", self.health_benefits, MAX_AMOUNT),
        ];
        let optional = [
            ("bonuses", self.bonuses),
            ("training_ppe", self.training_ppe),
            ("cell_phone_monthly", self.cell_phone_monthly),
            ("fuel_weekly", self.fuel_weekly),
        ];

        let present = optional
            .into_iter()
            .filter_map(|(field, value)| value.map(|v| (field, v, MAX_AMOUNT)));

        for (field, value, max) in required.into_iter().chain(present) {
            check_range(field, value, max)?;
        }

        for (field, hours) in [
            ("weekly_hours", self.weekly_hours),
            ("overtime_hours", self.overtime_hours),
        ] {
            if !hours.is_zero() && hours < MIN_NONZERO_HOURS {
                return Err(invalid(
                    field,
                    format!("must be 0 or at least {} (got {})", MIN_NONZERO_HOURS, hours),
                ));
            }
        }

        Ok(())
    }
}

fn invalid(field: &str, message: String) -> EngineError {
    EngineError::InvalidInput {
        field: field.to_string(),
        message,
    }
}

fn check_range(field: &str, value: Decimal, max: Decimal) -> EngineResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(invalid(
            field,
            format!("must not be negative (got {})", value),
        ));
    }
    if value > max {
        return Err(invalid(
            field,
            format!("must be at most {} (got {})", max, value),
        ));
    }
    Ok(())
}
